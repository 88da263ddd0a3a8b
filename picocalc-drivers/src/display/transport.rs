//! Chunked SPI writer
//!
//! Every payload is pushed through one fixed buffer of `N` bytes. Payloads
//! larger than the buffer become several back-to-back bus writes; no write
//! ever exceeds `N` bytes and 16-bit payloads are cut on word boundaries,
//! so a color never straddles two writes.
//!
//! Chip select and data/command lines are not touched here; framing is
//! the controller driver's job.

use embedded_hal::spi::SpiBus;
use picocalc_core::Rgb565;

/// Default transfer buffer size in bytes
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// SPI writer with a reusable `N`-byte buffer
pub struct SpiTransport<SPI, const N: usize = DEFAULT_BUFFER_SIZE> {
    spi: SPI,
    buf: [u8; N],
}

impl<SPI, const N: usize> SpiTransport<SPI, N>
where
    SPI: SpiBus<u8>,
{
    const MIN_CAPACITY: () = assert!(N >= 2, "transport buffer must hold one 16-bit word");

    /// Largest even number of bytes that fits the buffer
    const WORD_CHUNK: usize = N - N % 2;

    /// Wrap an SPI bus
    pub fn new(spi: SPI) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::MIN_CAPACITY;
        Self { spi, buf: [0; N] }
    }

    /// Buffer capacity in bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Give back the bus
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Wait until every queued byte has left the bus
    pub fn flush(&mut self) -> Result<(), SPI::Error> {
        self.spi.flush()
    }

    /// Single byte, single write
    pub fn write_byte(&mut self, data: u8) -> Result<(), SPI::Error> {
        self.buf[0] = data;
        self.spi.write(&self.buf[..1])
    }

    /// Byte sequence in order, at most `N` bytes per write
    ///
    /// An empty slice issues no write.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), SPI::Error> {
        for chunk in data.chunks(N) {
            self.buf[..chunk.len()].copy_from_slice(chunk);
            self.spi.write(&self.buf[..chunk.len()])?;
        }
        Ok(())
    }

    /// One big-endian 16-bit value
    pub fn write16(&mut self, data: u16) -> Result<(), SPI::Error> {
        self.buf[..2].copy_from_slice(&data.to_be_bytes());
        self.spi.write(&self.buf[..2])
    }

    /// `count` big-endian copies of `data`
    ///
    /// The buffer is filled with the pattern once and replayed, so a fill
    /// of any size costs one buffer fill plus the writes.
    pub fn write16_repeated(&mut self, data: u16, count: usize) -> Result<(), SPI::Error> {
        let mut remaining = count * 2;
        if remaining == 0 {
            return Ok(());
        }

        let chunk = remaining.min(Self::WORD_CHUNK);
        let [hi, lo] = data.to_be_bytes();
        for word in self.buf[..chunk].chunks_exact_mut(2) {
            word[0] = hi;
            word[1] = lo;
        }

        while remaining > 0 {
            let len = remaining.min(chunk);
            self.spi.write(&self.buf[..len])?;
            remaining -= len;
        }

        Ok(())
    }

    /// Packed colors as big-endian words, in order
    pub fn write_rgb565(&mut self, data: &[Rgb565]) -> Result<(), SPI::Error> {
        for colors in data.chunks(Self::WORD_CHUNK / 2) {
            let len = colors.len() * 2;
            for (word, color) in self.buf[..len].chunks_exact_mut(2).zip(colors) {
                word.copy_from_slice(&color.to_be_bytes());
            }
            self.spi.write(&self.buf[..len])?;
        }
        Ok(())
    }
}
