//! Recording `embedded-hal` doubles for driver tests
//!
//! SPI bus, output pins and delay all push into one shared log so the
//! order of chip-select, data/command and bus writes can be asserted.

use core::cell::RefCell;
use core::convert::Infallible;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, I2c, Operation};
use embedded_hal::spi::{self, SpiBus};

/// Which line a pin event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Cs,
    Dc,
    Rst,
}

/// One recorded hardware interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Pin(Line, bool),
    Write(Vec<u8>),
    Flush,
    DelayMs(u32),
}

pub type Log = Rc<RefCell<Vec<Op>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Bus failure injected by the mocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl spi::Error for MockError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

impl i2c::Error for MockError {
    fn kind(&self) -> i2c::ErrorKind {
        i2c::ErrorKind::Other
    }
}

/// SPI bus that records every write
pub struct MockSpi {
    log: Log,
    /// Fail the write with this index (0-based)
    fail_at: Option<usize>,
    writes: usize,
}

impl MockSpi {
    pub fn new(log: Log) -> Self {
        Self {
            log,
            fail_at: None,
            writes: 0,
        }
    }

    pub fn failing_at(log: Log, index: usize) -> Self {
        Self {
            log,
            fail_at: Some(index),
            writes: 0,
        }
    }
}

impl spi::ErrorType for MockSpi {
    type Error = MockError;
}

impl SpiBus<u8> for MockSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let index = self.writes;
        self.writes += 1;
        if self.fail_at == Some(index) {
            return Err(MockError);
        }
        self.log.borrow_mut().push(Op::Write(words.to_vec()));
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        read.fill(0);
        self.write(write)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let data = words.to_vec();
        words.fill(0);
        self.write(&data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Op::Flush);
        Ok(())
    }
}

/// Output pin that records level changes
pub struct MockPin {
    line: Line,
    log: Log,
}

impl MockPin {
    pub fn new(line: Line, log: Log) -> Self {
        Self { line, log }
    }
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Op::Pin(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Op::Pin(self.line, true));
        Ok(())
    }
}

/// Delay that records requested milliseconds instead of sleeping
pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: Log) -> Self {
        Self { log }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Op::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Op::DelayMs(ms));
    }
}

/// All bus writes in order
pub fn writes(log: &Log) -> Vec<Vec<u8>> {
    log.borrow()
        .iter()
        .filter_map(|op| match op {
            Op::Write(bytes) => Some(bytes.clone()),
            _ => None,
        })
        .collect()
}

/// Decoded controller command: opcode plus everything written in data mode after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub opcode: u8,
    pub data: Vec<u8>,
}

/// Reassemble commands from the log using the data/command line state
pub fn commands(log: &Log) -> Vec<Command> {
    let mut out: Vec<Command> = Vec::new();
    let mut dc_high = true;

    for op in log.borrow().iter() {
        match op {
            Op::Pin(Line::Dc, level) => dc_high = *level,
            Op::Write(bytes) if !dc_high => {
                for &opcode in bytes {
                    out.push(Command {
                        opcode,
                        data: Vec::new(),
                    });
                }
            }
            Op::Write(bytes) => {
                if let Some(last) = out.last_mut() {
                    last.data.extend_from_slice(bytes);
                }
            }
            _ => {}
        }
    }

    out
}

/// Opcodes only
pub fn opcodes(log: &Log) -> Vec<u8> {
    commands(log).iter().map(|c| c.opcode).collect()
}

/// I2C device that answers each transaction from a script
pub struct MockI2c {
    responses: VecDeque<Result<[u8; 2], MockError>>,
    pub requests: Vec<(u8, Vec<u8>)>,
}

impl MockI2c {
    pub fn new(responses: &[Result<[u8; 2], MockError>]) -> Self {
        Self {
            responses: responses.iter().copied().collect(),
            requests: Vec::new(),
        }
    }
}

impl i2c::ErrorType for MockI2c {
    type Error = MockError;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let response = self.responses.pop_front().unwrap_or(Ok([0, 0]))?;

        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => self.requests.push((address, bytes.to_vec())),
                Operation::Read(buf) => {
                    for (dst, src) in buf.iter_mut().zip(response.iter()) {
                        *dst = *src;
                    }
                }
            }
        }

        Ok(())
    }
}
