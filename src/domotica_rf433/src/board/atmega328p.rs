//! Pin assignment for ATmega328P boards (Arduino Uno, Nano, Pro Mini).
//!
//! `D0`–`D7` sit on `PORTD` and `D8`–`D13` on `PORTB`. `D0`/`D1` carry the
//! hardware UART, so the RF433 modules are wired to `D6`/`D7` instead.

/// An I/O port of the ATmega328P.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    B,
    D,
}

define_pins! {
    /// A digital pin of an ATmega328P board.
    pub enum Pin {
        D0 = (D, 0),
        D1 = (D, 1),
        D2 = (D, 2),
        D3 = (D, 3),
        D4 = (D, 4),
        D5 = (D, 5),
        D6 = (D, 6),
        D7 = (D, 7),
        D8 = (B, 0),
        D9 = (B, 1),
        D10 = (B, 2),
        D11 = (B, 3),
        D12 = (B, 4),
        D13 = (B, 5),
    }
}

/// The board name.
pub const NAME: &str = "ATmega328P";

/// The number of digital pins.
pub const PIN_COUNT: u8 = Pin::ALL.len() as u8;

/// The data pin of the RF433 receiver module.
pub const RX: Pin = Pin::D7;

/// The data pin of the RF433 transmitter module.
pub const TX: Pin = Pin::D6;
