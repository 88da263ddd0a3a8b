//! ILI948x panel controller
//!
//! Every command is framed the same way:
//!
//! ```text
//! CS low -> DC low, opcode -> DC high, data bytes -> CS high
//! ```
//!
//! Drawing primitives clip, latch the addressing window, issue a memory
//! write, then stream pixels inside their own chip-select bracket. The
//! window is cached per axis and only re-sent when a bound changes, so
//! repeated draws into the same region cost no addressing traffic.
//!
//! The cache trusts that nothing else talks to the controller. It is
//! cleared on reset, but a change made behind the driver's back (another
//! bus master, a brown-out) is not detected.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};
use picocalc_core::{Bitmap, Displayer, Rgb565, Rgba};

use super::regs::{cmd, INIT_SEQUENCE, RESET_PULSE_MS, RESET_SETTLE_MS};
use super::transport::{SpiTransport, DEFAULT_BUFFER_SIZE};
use super::window::{self, AxisRange, Rect, Window};
use super::{Error, TFT_HEIGHT, TFT_WIDTH};

type DisplayResult<SPI, DC> =
    Result<(), Error<<SPI as spi::ErrorType>::Error, <DC as digital::ErrorType>::Error>>;

/// ILI948x driver for the 320x320 panel
///
/// `CS` may be `None` when the SPI peripheral drives chip select itself.
/// `RST` may be `None` on boards without a reset line; a software reset is
/// used instead.
pub struct Ili948x<SPI, DC, CS, RST, const N: usize = DEFAULT_BUFFER_SIZE> {
    transport: SpiTransport<SPI, N>,
    dc: DC,
    cs: Option<CS>,
    rst: Option<RST>,
    window: Window,
}

impl<SPI, DC, CS, RST, const N: usize> Ili948x<SPI, DC, CS, RST, N>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin<Error = DC::Error>,
    RST: OutputPin<Error = DC::Error>,
{
    /// Take ownership of the bus and control lines
    ///
    /// Drives chip select, data/command and reset to their idle (high)
    /// level. The panel is not touched; call [`init`](Self::init) next.
    pub fn new(
        transport: SpiTransport<SPI, N>,
        mut dc: DC,
        mut cs: Option<CS>,
        mut rst: Option<RST>,
    ) -> Result<Self, Error<SPI::Error, DC::Error>> {
        if let Some(cs) = cs.as_mut() {
            cs.set_high().map_err(Error::Pin)?;
        }
        dc.set_high().map_err(Error::Pin)?;
        if let Some(rst) = rst.as_mut() {
            rst.set_high().map_err(Error::Pin)?;
        }

        Ok(Self {
            transport,
            dc,
            cs,
            rst,
            window: Window::default(),
        })
    }

    /// Reset then run the bring-up sequence
    pub fn init(&mut self, delay: &mut impl DelayNs) -> DisplayResult<SPI, DC> {
        self.reset(delay)?;
        self.initialize(delay)
    }

    /// Reset the controller
    ///
    /// Pulses the reset line when there is one, otherwise sends a software
    /// reset. Either way waits for the controller to settle before
    /// returning. The cached window is forgotten.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> DisplayResult<SPI, DC> {
        if let Some(rst) = self.rst.as_mut() {
            rst.set_low().map_err(Error::Pin)?;
            delay.delay_ms(RESET_PULSE_MS);
            rst.set_high().map_err(Error::Pin)?;
        } else {
            self.write_command(cmd::SWRESET, &[])?;
        }
        delay.delay_ms(RESET_SETTLE_MS);

        self.window = Window::default();
        Ok(())
    }

    /// Send the fixed panel configuration and switch the display on
    pub fn initialize(&mut self, delay: &mut impl DelayNs) -> DisplayResult<SPI, DC> {
        for step in INIT_SEQUENCE {
            self.write_command(step.cmd, step.data)?;
            if step.delay_ms > 0 {
                delay.delay_ms(step.delay_ms);
            }
        }
        Ok(())
    }

    /// Issue one command with its parameter bytes
    pub fn write_command(&mut self, command: u8, data: &[u8]) -> DisplayResult<SPI, DC> {
        self.start_write()?;

        self.dc.set_low().map_err(Error::Pin)?;
        self.transport.write_byte(command).map_err(Error::Bus)?;
        self.transport.flush().map_err(Error::Bus)?;
        self.dc.set_high().map_err(Error::Pin)?;

        if !data.is_empty() {
            self.transport.write_bytes(data).map_err(Error::Bus)?;
            self.transport.flush().map_err(Error::Bus)?;
        }

        self.end_write()
    }

    /// Latch the addressing window for the next memory write
    ///
    /// Each axis is only sent when it differs from the cached one.
    pub fn set_window(&mut self, x: i16, y: i16, width: i16, height: i16) -> DisplayResult<SPI, DC> {
        let columns = AxisRange::new(x, width);
        if self.window.columns != Some(columns) {
            self.write_command(cmd::CASET, &columns.to_bytes())?;
            self.window.columns = Some(columns);
        }

        let rows = AxisRange::new(y, height);
        if self.window.rows != Some(rows) {
            self.write_command(cmd::PASET, &rows.to_bytes())?;
            self.window.rows = Some(rows);
        }

        Ok(())
    }

    /// Window the driver believes is latched
    pub fn window(&self) -> Window {
        self.window
    }

    /// Set one pixel without color conversion
    ///
    /// Pixels off the panel are dropped.
    pub fn set_pixel_565(&mut self, x: i16, y: i16, color: Rgb565) -> DisplayResult<SPI, DC> {
        if x < 0 || y < 0 || x >= TFT_WIDTH || y >= TFT_HEIGHT {
            return Ok(());
        }
        self.stream(Rect::new(x, y, 1, 1), |t| t.write16(color.raw()))
    }

    /// Horizontal line from `x0` to `x1` inclusive on row `y`
    pub fn draw_hline(&mut self, x0: i16, x1: i16, y: i16, color: Rgb565) -> DisplayResult<SPI, DC> {
        match window::clip_hline(x0, x1, y, TFT_WIDTH, TFT_HEIGHT) {
            Some(rect) => self.fill(rect, color),
            None => Ok(()),
        }
    }

    /// Vertical line from `y0` to `y1` inclusive on column `x`
    pub fn draw_vline(&mut self, x: i16, y0: i16, y1: i16, color: Rgb565) -> DisplayResult<SPI, DC> {
        match window::clip_vline(x, y0, y1, TFT_WIDTH, TFT_HEIGHT) {
            Some(rect) => self.fill(rect, color),
            None => Ok(()),
        }
    }

    /// Fill a rectangle, clipped to the panel
    pub fn fill_rectangle(
        &mut self,
        x: i16,
        y: i16,
        width: i16,
        height: i16,
        color: Rgb565,
    ) -> DisplayResult<SPI, DC> {
        match window::clip_fill(x, y, width, height, TFT_WIDTH, TFT_HEIGHT) {
            Some(rect) => self.fill(rect, color),
            None => Ok(()),
        }
    }

    /// Fill the whole panel
    pub fn fill_screen(&mut self, color: Rgb565) -> DisplayResult<SPI, DC> {
        self.fill_rectangle(0, 0, TFT_WIDTH, TFT_HEIGHT, color)
    }

    /// Copy a bitmap to the panel with its top-left corner at (`x`, `y`)
    ///
    /// The bitmap must lie strictly inside the panel; otherwise nothing is
    /// drawn.
    pub fn draw_bitmap<B>(&mut self, x: i16, y: i16, bitmap: &Bitmap<B>) -> DisplayResult<SPI, DC>
    where
        B: AsRef<[Rgb565]>,
    {
        let Some(rect) = window::check_blit(
            x,
            y,
            bitmap.width(),
            bitmap.height(),
            TFT_WIDTH,
            TFT_HEIGHT,
        ) else {
            return Ok(());
        };
        self.stream(rect, |t| t.write_rgb565(bitmap.data()))
    }

    /// Give back the bus and control lines
    pub fn release(self) -> (SPI, DC, Option<CS>, Option<RST>) {
        (self.transport.release(), self.dc, self.cs, self.rst)
    }

    fn fill(&mut self, rect: Rect, color: Rgb565) -> DisplayResult<SPI, DC> {
        let count = rect.area();
        self.stream(rect, |t| t.write16_repeated(color.raw(), count))
    }

    fn stream<F>(&mut self, rect: Rect, payload: F) -> DisplayResult<SPI, DC>
    where
        F: FnOnce(&mut SpiTransport<SPI, N>) -> Result<(), SPI::Error>,
    {
        self.set_window(rect.x, rect.y, rect.width, rect.height)?;
        self.write_command(cmd::RAMWR, &[])?;

        self.start_write()?;
        payload(&mut self.transport).map_err(Error::Bus)?;
        self.transport.flush().map_err(Error::Bus)?;
        self.end_write()
    }

    fn start_write(&mut self) -> DisplayResult<SPI, DC> {
        if let Some(cs) = self.cs.as_mut() {
            cs.set_low().map_err(Error::Pin)?;
        }
        Ok(())
    }

    fn end_write(&mut self) -> DisplayResult<SPI, DC> {
        if let Some(cs) = self.cs.as_mut() {
            cs.set_high().map_err(Error::Pin)?;
        }
        Ok(())
    }
}

impl<SPI, DC, CS, RST, const N: usize> Displayer for Ili948x<SPI, DC, CS, RST, N>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
    CS: OutputPin<Error = DC::Error>,
    RST: OutputPin<Error = DC::Error>,
{
    type Error = Error<SPI::Error, DC::Error>;

    fn size(&self) -> (i16, i16) {
        (TFT_WIDTH, TFT_HEIGHT)
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Rgba) -> Result<(), Self::Error> {
        self.set_pixel_565(x, y, Rgb565::from(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::regs::{madctrl, SLEEP_OUT_MS};
    use crate::mock::{
        commands, new_log, opcodes, writes, Command, Line, Log, MockDelay, MockError, MockPin,
        MockSpi, Op,
    };
    use std::vec;
    use std::vec::Vec;

    type TestDisplay = Ili948x<MockSpi, MockPin, MockPin, MockPin>;

    fn display(log: &Log) -> TestDisplay {
        let lcd = Ili948x::new(
            SpiTransport::new(MockSpi::new(log.clone())),
            MockPin::new(Line::Dc, log.clone()),
            Some(MockPin::new(Line::Cs, log.clone())),
            Some(MockPin::new(Line::Rst, log.clone())),
        )
        .unwrap();
        log.borrow_mut().clear();
        lcd
    }

    fn delays(log: &Log) -> Vec<u32> {
        log.borrow()
            .iter()
            .filter_map(|op| match op {
                Op::DelayMs(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_new_idles_lines_high() {
        let log = new_log();
        let _lcd: TestDisplay = Ili948x::new(
            SpiTransport::new(MockSpi::new(log.clone())),
            MockPin::new(Line::Dc, log.clone()),
            Some(MockPin::new(Line::Cs, log.clone())),
            Some(MockPin::new(Line::Rst, log.clone())),
        )
        .unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Op::Pin(Line::Cs, true),
                Op::Pin(Line::Dc, true),
                Op::Pin(Line::Rst, true),
            ]
        );
    }

    #[test]
    fn test_command_framing() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.write_command(cmd::PWCTRL1, &[0x17, 0x15]).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Op::Pin(Line::Cs, false),
                Op::Pin(Line::Dc, false),
                Op::Write(vec![0xC0]),
                Op::Flush,
                Op::Pin(Line::Dc, true),
                Op::Write(vec![0x17, 0x15]),
                Op::Flush,
                Op::Pin(Line::Cs, true),
            ]
        );
    }

    #[test]
    fn test_command_without_data() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.write_command(cmd::DISON, &[]).unwrap();

        assert_eq!(writes(&log), [vec![cmd::DISON]]);
        assert_eq!(log.borrow().last(), Some(&Op::Pin(Line::Cs, true)));
    }

    #[test]
    fn test_hardware_reset_timing() {
        let log = new_log();
        let mut lcd = display(&log);
        let mut delay = MockDelay::new(log.clone());

        lcd.reset(&mut delay).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Op::Pin(Line::Rst, false),
                Op::DelayMs(RESET_PULSE_MS),
                Op::Pin(Line::Rst, true),
                Op::DelayMs(RESET_SETTLE_MS),
            ]
        );
    }

    #[test]
    fn test_software_reset_without_reset_line() {
        let log = new_log();
        let mut lcd: TestDisplay = Ili948x::new(
            SpiTransport::new(MockSpi::new(log.clone())),
            MockPin::new(Line::Dc, log.clone()),
            Some(MockPin::new(Line::Cs, log.clone())),
            None,
        )
        .unwrap();
        log.borrow_mut().clear();
        let mut delay = MockDelay::new(log.clone());

        lcd.reset(&mut delay).unwrap();

        assert_eq!(opcodes(&log), [cmd::SWRESET]);
        assert_eq!(delays(&log), [RESET_SETTLE_MS]);
        assert_eq!(log.borrow().last(), Some(&Op::DelayMs(RESET_SETTLE_MS)));
    }

    #[test]
    fn test_init_sequence() {
        let log = new_log();
        let mut lcd = display(&log);
        let mut delay = MockDelay::new(log.clone());

        lcd.init(&mut delay).unwrap();

        let sent = commands(&log);
        let expected: Vec<Command> = INIT_SEQUENCE
            .iter()
            .map(|s| Command {
                opcode: s.cmd,
                data: s.data.to_vec(),
            })
            .collect();
        assert_eq!(sent, expected);
        assert_eq!(delays(&log), [RESET_PULSE_MS, RESET_SETTLE_MS, SLEEP_OUT_MS]);

        let madctrl_step = sent.iter().find(|c| c.opcode == cmd::MADCTRL).unwrap();
        assert_eq!(madctrl_step.data, [madctrl::MX | madctrl::MH]);
    }

    #[test]
    fn test_sleep_out_delay_precedes_display_on() {
        let log = new_log();
        let mut lcd = display(&log);
        let mut delay = MockDelay::new(log.clone());

        lcd.initialize(&mut delay).unwrap();

        let ops = log.borrow();
        let wait = ops
            .iter()
            .position(|op| *op == Op::DelayMs(SLEEP_OUT_MS))
            .unwrap();
        let dison = ops
            .iter()
            .position(|op| *op == Op::Write(vec![cmd::DISON]))
            .unwrap();
        assert!(wait < dison);
    }

    #[test]
    fn test_window_first_call_sends_both_axes() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.set_window(10, 20, 5, 5).unwrap();

        assert_eq!(
            commands(&log),
            [
                Command {
                    opcode: cmd::CASET,
                    data: vec![0, 10, 0, 14],
                },
                Command {
                    opcode: cmd::PASET,
                    data: vec![0, 20, 0, 24],
                },
            ]
        );
    }

    #[test]
    fn test_window_cache_hit() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.set_window(10, 20, 5, 5).unwrap();
        log.borrow_mut().clear();
        lcd.set_window(10, 20, 5, 5).unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_window_changed_axis_only() {
        let log = new_log();
        let mut lcd = display(&log);
        lcd.set_window(10, 20, 5, 5).unwrap();

        log.borrow_mut().clear();
        lcd.set_window(10, 21, 5, 5).unwrap();
        assert_eq!(opcodes(&log), [cmd::PASET]);

        // same origin, different end still counts as a change
        log.borrow_mut().clear();
        lcd.set_window(10, 21, 6, 5).unwrap();
        assert_eq!(opcodes(&log), [cmd::CASET]);
        assert_eq!(commands(&log)[0].data, [0, 10, 0, 15]);
    }

    #[test]
    fn test_window_high_bytes() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.set_window(300, 256, 20, 64).unwrap();

        let sent = commands(&log);
        assert_eq!(sent[0].data, [0x01, 0x2C, 0x01, 0x3F]);
        assert_eq!(sent[1].data, [0x01, 0x00, 0x01, 0x3F]);
        assert_eq!(
            lcd.window().columns,
            Some(AxisRange {
                start: 300,
                end: 319
            })
        );
    }

    #[test]
    fn test_reset_forgets_window() {
        let log = new_log();
        let mut lcd = display(&log);
        let mut delay = MockDelay::new(log.clone());

        lcd.set_window(0, 0, 320, 320).unwrap();
        lcd.reset(&mut delay).unwrap();
        assert_eq!(lcd.window(), Window::default());

        log.borrow_mut().clear();
        lcd.set_window(0, 0, 320, 320).unwrap();
        assert_eq!(opcodes(&log), [cmd::CASET, cmd::PASET]);
    }

    #[test]
    fn test_fill_rectangle_clips_origin() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.fill_rectangle(-5, 10, 20, 20, Rgb565::BLUE).unwrap();

        let sent = commands(&log);
        assert_eq!(opcodes(&log), [cmd::CASET, cmd::PASET, cmd::RAMWR]);
        assert_eq!(sent[0].data, [0, 0, 0, 14]);
        assert_eq!(sent[1].data, [0, 10, 0, 29]);
        assert_eq!(sent[2].data.len(), 15 * 20 * 2);
        assert!(sent[2].data.chunks(2).all(|w| w == [0xF8, 0x00]));
    }

    #[test]
    fn test_fill_rectangle_degenerate_is_noop() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.fill_rectangle(-30, 10, 20, 20, Rgb565::RED).unwrap();
        lcd.fill_rectangle(10, 10, 0, 20, Rgb565::RED).unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_fill_screen_covers_panel() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.fill_screen(Rgb565::BLACK).unwrap();

        let sent = commands(&log);
        assert_eq!(sent[0].data, [0, 0, 0x01, 0x3F]);
        assert_eq!(sent[1].data, [0, 0, 0x01, 0x3F]);
        assert_eq!(sent[2].data.len(), 320 * 320 * 2);
        // every write fits the transfer buffer
        assert!(writes(&log).iter().all(|w| w.len() <= DEFAULT_BUFFER_SIZE));
    }

    #[test]
    fn test_pixel_stream_is_bracketed() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.set_pixel_565(1, 1, Rgb565::RED).unwrap();

        let ops = log.borrow();
        let n = ops.len();
        assert_eq!(
            ops[n - 4..],
            [
                Op::Pin(Line::Cs, false),
                Op::Write(vec![0x00, 0x1F]),
                Op::Flush,
                Op::Pin(Line::Cs, true),
            ]
        );
    }

    #[test]
    fn test_repeated_pixels_reuse_window() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.set_pixel_565(3, 3, Rgb565::RED).unwrap();
        log.borrow_mut().clear();
        lcd.set_pixel_565(3, 3, Rgb565::GREEN).unwrap();

        assert_eq!(opcodes(&log), [cmd::RAMWR]);
        assert_eq!(commands(&log)[0].data, [0x07, 0xE0]);
    }

    #[test]
    fn test_displayer_set_pixel_converts() {
        let log = new_log();
        let mut lcd = display(&log);

        assert_eq!(lcd.size(), (320, 320));
        lcd.set_pixel(0, 5, Rgba::opaque(0, 0, 255)).unwrap();

        let sent = commands(&log);
        assert_eq!(sent.last().unwrap().data, [0xF8, 0x00]);
    }

    #[test]
    fn test_pixel_off_panel_is_noop() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.set_pixel_565(320, 0, Rgb565::RED).unwrap();
        lcd.set_pixel_565(0, -1, Rgb565::RED).unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_hline_reversed_and_clamped() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.draw_hline(330, -10, 5, Rgb565::WHITE).unwrap();

        let sent = commands(&log);
        assert_eq!(sent[0].data, [0, 0, 0x01, 0x3F]);
        assert_eq!(sent[1].data, [0, 5, 0, 5]);
        assert_eq!(sent[2].data.len(), 640);
    }

    #[test]
    fn test_vline() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.draw_vline(7, 12, 10, Rgb565::GREEN).unwrap();

        let sent = commands(&log);
        assert_eq!(sent[0].data, [0, 7, 0, 7]);
        assert_eq!(sent[1].data, [0, 10, 0, 12]);
        assert_eq!(sent[2].data, [0x07, 0xE0, 0x07, 0xE0, 0x07, 0xE0]);
    }

    #[test]
    fn test_lines_off_panel_are_noops() {
        let log = new_log();
        let mut lcd = display(&log);

        lcd.draw_hline(-10, -1, 5, Rgb565::WHITE).unwrap();
        lcd.draw_vline(5, 400, 500, Rgb565::WHITE).unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_bitmap_blit() {
        let log = new_log();
        let mut lcd = display(&log);
        let bm = Bitmap::new(2, 2, [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE])
            .unwrap();

        lcd.draw_bitmap(1, 1, &bm).unwrap();

        let sent = commands(&log);
        assert_eq!(sent[0].data, [0, 1, 0, 2]);
        assert_eq!(sent[1].data, [0, 1, 0, 2]);
        assert_eq!(
            sent[2].data,
            [0x00, 0x1F, 0x07, 0xE0, 0xF8, 0x00, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_bitmap_at_panel_edge_is_noop() {
        let log = new_log();
        let mut lcd = display(&log);
        let bm = Bitmap::new(20, 10, [Rgb565::WHITE; 200]).unwrap();

        lcd.draw_bitmap(TFT_WIDTH - 20, 0, &bm).unwrap();
        lcd.draw_bitmap(0, TFT_HEIGHT - 10, &bm).unwrap();
        lcd.draw_bitmap(-1, 0, &bm).unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_static_bitmap_blit() {
        static IMAGE: [Rgb565; 3] = [Rgb565::CYAN; 3];
        let log = new_log();
        let mut lcd = display(&log);
        let bm = Bitmap::new(3, 1, &IMAGE[..]).unwrap();

        lcd.draw_bitmap(0, 0, &bm).unwrap();

        assert_eq!(commands(&log)[2].data, [0xFFu8, 0xE0].repeat(3));
    }

    #[test]
    fn test_bus_error_propagates() {
        let log = new_log();
        let mut lcd: TestDisplay = Ili948x::new(
            SpiTransport::new(MockSpi::failing_at(log.clone(), 0)),
            MockPin::new(Line::Dc, log.clone()),
            Some(MockPin::new(Line::Cs, log.clone())),
            Some(MockPin::new(Line::Rst, log.clone())),
        )
        .unwrap();

        assert_eq!(
            lcd.write_command(cmd::DISON, &[]),
            Err(Error::Bus(MockError))
        );
    }

    #[test]
    fn test_failed_window_is_not_cached() {
        let log = new_log();
        let mut lcd: TestDisplay = Ili948x::new(
            SpiTransport::new(MockSpi::failing_at(log.clone(), 0)),
            MockPin::new(Line::Dc, log.clone()),
            None,
            None,
        )
        .unwrap();

        assert!(lcd.set_window(0, 0, 10, 10).is_err());
        assert_eq!(lcd.window(), Window::default());
    }
}
