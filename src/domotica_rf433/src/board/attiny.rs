//! Pin assignment for ATtinyX5 boards.
//!
//! The ATtinyX5 has a single I/O port, `PORTB`. `D5` doubles as `RESET` and
//! is left alone; the RF433 modules take the two lowest pins.

/// An I/O port of the ATtinyX5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    B,
}

define_pins! {
    /// A digital pin of an ATtinyX5 board.
    pub enum Pin {
        D0 = (B, 0),
        D1 = (B, 1),
        D2 = (B, 2),
        D3 = (B, 3),
        D4 = (B, 4),
        D5 = (B, 5),
    }
}

/// The board name.
pub const NAME: &str = "ATtinyX5";

/// The number of digital pins.
pub const PIN_COUNT: u8 = Pin::ALL.len() as u8;

/// The data pin of the RF433 receiver module.
pub const RX: Pin = Pin::D1;

/// The data pin of the RF433 transmitter module.
pub const TX: Pin = Pin::D0;
