//! ILI948x command set and the panel bring-up table
//!
//! Opcodes follow the ILI9488 datasheet, pp. 140-147. The init table is a
//! fixed contract with the 320x320 panel fitted to the PicoCalc and is not
//! meant to be tuned at runtime.

/// Controller opcodes
pub mod cmd {
    /// No Operation
    pub const NOP: u8 = 0x00;
    /// Software Reset
    pub const SWRESET: u8 = 0x01;
    /// Read Display Identification Information
    pub const RDDIDIF: u8 = 0x04;
    /// Read Display Status
    pub const RDDST: u8 = 0x09;
    /// Read Display Power Mode
    pub const RDDPM: u8 = 0x0A;
    /// Read Display MADCTRL
    pub const RDDMADCTRL: u8 = 0x0B;
    /// Read Display Pixel Format
    pub const RDDCOLMOD: u8 = 0x0C;

    /// Enter Sleep Mode
    pub const SLPIN: u8 = 0x10;
    /// Sleep Out
    pub const SLPOUT: u8 = 0x11;
    /// Partial Mode ON
    pub const PTLON: u8 = 0x12;
    /// Normal Display Mode ON
    pub const NORON: u8 = 0x13;
    /// Display Inversion OFF
    pub const INVOFF: u8 = 0x20;
    /// Display Inversion ON
    pub const INVON: u8 = 0x21;
    /// All Pixels OFF
    pub const ALLPOFF: u8 = 0x22;
    /// All Pixels ON
    pub const ALLPON: u8 = 0x23;
    /// Display OFF
    pub const DISOFF: u8 = 0x28;
    /// Display ON
    pub const DISON: u8 = 0x29;

    /// Column Address Set
    pub const CASET: u8 = 0x2A;
    /// Page Address Set
    pub const PASET: u8 = 0x2B;
    /// Memory Write
    pub const RAMWR: u8 = 0x2C;
    /// Memory Read
    pub const RAMRD: u8 = 0x2E;
    /// Partial Area
    pub const PLTAR: u8 = 0x30;
    /// Vertical Scrolling Definition
    pub const VSCRDEF: u8 = 0x33;
    /// Tearing Effect Line OFF
    pub const TEOFF: u8 = 0x34;
    /// Tearing Effect Line ON
    pub const TEON: u8 = 0x35;
    /// Memory Access Control
    pub const MADCTRL: u8 = 0x36;
    /// Vertical Scrolling Start Address
    pub const VSCRSADD: u8 = 0x37;
    /// Idle Mode OFF
    pub const IDMOFF: u8 = 0x38;
    /// Idle Mode ON
    pub const IDMON: u8 = 0x39;
    /// Interface Pixel Format (COLMOD)
    pub const PIXFMT: u8 = 0x3A;
    /// Memory Write Continue
    pub const RAMWRC: u8 = 0x3C;
    /// Write Display Brightness Value
    pub const WRDISBV: u8 = 0x51;

    /// Interface Mode Control
    pub const IFMODE: u8 = 0xB0;
    /// Frame Rate Control (Normal Mode / Full Colors)
    pub const FRMCTRL1: u8 = 0xB1;
    /// Frame Rate Control (Idle Mode / 8 colors)
    pub const FRMCTRL2: u8 = 0xB2;
    /// Frame Rate Control (Partial Mode / Full Colors)
    pub const FRMCTRL3: u8 = 0xB3;
    /// Display Inversion Control
    pub const INVCTRL: u8 = 0xB4;
    /// Blanking Porch Control
    pub const PRCTRL: u8 = 0xB5;
    /// Display Function Control
    pub const DISCTRL: u8 = 0xB6;
    /// Entry Mode Set
    pub const ETMOD: u8 = 0xB7;

    /// Power Control 1
    pub const PWCTRL1: u8 = 0xC0;
    /// Power Control 2
    pub const PWCTRL2: u8 = 0xC1;
    /// Power Control 3 (Normal Mode)
    pub const PWCTRL3: u8 = 0xC2;
    /// VCOM Control
    pub const VMCTRL: u8 = 0xC5;

    /// Read ID4
    pub const RDID4: u8 = 0xD3;
    /// Positive Gamma Control
    pub const PGAMCTRL: u8 = 0xE0;
    /// Negative Gamma Control
    pub const NGAMCTRL: u8 = 0xE1;
    /// Set Image Function
    pub const SETIMAGE: u8 = 0xE9;
    /// Adjust Control 3
    pub const ADJCTRL3: u8 = 0xF7;
}

/// Memory Access Control (0x36) flag bits
pub mod madctrl {
    /// Row address order: bottom to top
    pub const MY: u8 = 0x80;
    /// Column address order: right to left
    pub const MX: u8 = 0x40;
    /// Row/column exchange
    pub const MV: u8 = 0x20;
    /// Vertical refresh order: bottom to top
    pub const ML: u8 = 0x10;
    /// Blue-green-red pixel order
    pub const BGR: u8 = 0x08;
    /// Horizontal refresh order: right to left
    pub const MH: u8 = 0x04;
}

/// Reset line held low for this long
pub const RESET_PULSE_MS: u32 = 64;

/// Settle time after any reset before the controller accepts commands
pub const RESET_SETTLE_MS: u32 = 140;

/// Settle time after sleep-out
pub const SLEEP_OUT_MS: u32 = 120;

/// One step of the bring-up sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitCommand {
    pub cmd: u8,
    pub data: &'static [u8],
    /// Wait after the command, 0 for none
    pub delay_ms: u32,
}

impl InitCommand {
    const fn new(cmd: u8, data: &'static [u8]) -> Self {
        Self {
            cmd,
            data,
            delay_ms: 0,
        }
    }

    const fn with_delay(cmd: u8, data: &'static [u8], delay_ms: u32) -> Self {
        Self {
            cmd,
            data,
            delay_ms,
        }
    }
}

/// Panel bring-up, sent after reset
pub const INIT_SEQUENCE: &[InitCommand] = &[
    // VREG1OUT 5.0000, VREG2OUT -4.8750
    InitCommand::new(cmd::PWCTRL1, &[0x17, 0x15]),
    // VGH = VCI x 6, VGL = -VCI x 4
    InitCommand::new(cmd::PWCTRL2, &[0x41]),
    // nVM, VCM_REG -1.71875, VCM_REG_EN, VCM_OUT
    InitCommand::new(cmd::VMCTRL, &[0x00, 0x12, 0x80, 0x40]),
    // 16 bits per pixel on DPI and DBI
    InitCommand::new(cmd::PIXFMT, &[0x55]),
    // FRS 60.76 Hz, DIVA 0, RTNA 17 clocks
    InitCommand::new(cmd::FRMCTRL1, &[0xA0, 0x11]),
    // PT AGND; SS S960 -> S1, ISC 5 frames; NL 320 lines
    InitCommand::new(cmd::DISCTRL, &[0x02, 0x22, 0x27]),
    // this panel is inverted, turn it back to RGB
    InitCommand::new(cmd::INVON, &[]),
    // mirrored addressing for the PicoCalc mounting
    InitCommand::new(cmd::MADCTRL, &[madctrl::MX | madctrl::MH]),
    InitCommand::with_delay(cmd::SLPOUT, &[], SLEEP_OUT_MS),
    InitCommand::new(cmd::DISON, &[]),
];
