//! Board-specific pin assignment for the RF433 modules.
//!
//! The board is chosen at compile time: the `board-attiny` cargo feature
//! selects the ATtinyX5 assignment, otherwise the ATmega328P one is used.
//! Both board modules export the same surface ([`Pin`], [`Port`], [`RX`],
//! [`TX`], [`PIN_COUNT`], [`NAME`]).
use core::fmt;

/// The macro to define a board's [`Pin`] enumeration.
///
/// The pins must be listed in digital numbering order, starting at `D0`,
/// each with the I/O port and bit position it maps to.
macro_rules! define_pins {
    (
        $( #[$meta:meta] )*
        pub enum Pin {
            $(
                $( #[$vmeta:meta] )*
                $vname:ident = ($vport:ident, $vbit:literal)
            ),* $(,)*
        }
    ) => {
        $( #[$meta] )*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Pin {
            $(
                $( #[$vmeta] )*
                $vname
            ),*
        }

        impl Pin {
            /// All pins of the board, in digital numbering order.
            pub const ALL: &'static [Pin] = &[$(Self::$vname),*];

            /// Get the digital pin number (the `n` in `Dn`).
            #[inline]
            pub const fn number(self) -> u8 {
                self as u8
            }

            /// Find the pin with the given digital pin number.
            pub const fn from_number(number: u8) -> Result<Self, super::BadPinNumber> {
                if (number as usize) < Self::ALL.len() {
                    Ok(Self::ALL[number as usize])
                } else {
                    Err(super::BadPinNumber)
                }
            }

            /// Get the I/O port the pin belongs to and its bit position
            /// within that port.
            #[inline]
            pub const fn port_bit(self) -> (Port, u8) {
                match self {
                    $( Self::$vname => (Port::$vport, $vbit) ),*
                }
            }

            /// Get the name of the pin.
            ///
            /// # Examples
            ///
            /// ```
            /// use domotica_rf433::board::Pin;
            /// assert_eq!(Pin::D0.as_str(), "D0");
            /// ```
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$vname => stringify!($vname) ),*
                }
            }
        }

        impl core::fmt::Debug for Pin {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::fmt::Display for Pin {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[cfg(feature = "board-attiny")]
#[path = "board/attiny.rs"]
mod imp;
#[cfg(not(feature = "board-attiny"))]
#[path = "board/atmega328p.rs"]
mod imp;

pub use self::imp::{Pin, Port, NAME, PIN_COUNT, RX, TX};

/// The error type returned when a digital pin number does not exist on the
/// selected board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadPinNumber;

impl fmt::Debug for BadPinNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BadPinNumber")
    }
}

impl fmt::Display for BadPinNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no such digital pin on this board")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use quickcheck_macros::quickcheck;

    use super::*;

    #[cfg(not(feature = "board-attiny"))]
    #[test]
    fn default_assignment() {
        assert_eq!(NAME, "ATmega328P");
        assert_eq!(RX, Pin::D7);
        assert_eq!(TX, Pin::D6);
        assert_eq!(RX.port_bit(), (Port::D, 7));
        assert_eq!(TX.port_bit(), (Port::D, 6));
    }

    #[cfg(feature = "board-attiny")]
    #[test]
    fn attiny_assignment() {
        assert_eq!(NAME, "ATtinyX5");
        assert_eq!(RX, Pin::D1);
        assert_eq!(TX, Pin::D0);
        assert_eq!(RX.port_bit(), (Port::B, 1));
        assert_eq!(TX.port_bit(), (Port::B, 0));
    }

    #[test]
    fn rx_tx_are_distinct() {
        assert_ne!(RX, TX);
    }

    #[test]
    fn numbering_is_contiguous() {
        assert_eq!(Pin::ALL.len(), PIN_COUNT as usize);
        for (i, &pin) in Pin::ALL.iter().enumerate() {
            assert_eq!(pin.number() as usize, i);
        }
    }

    #[test]
    fn pin_names() {
        for &pin in Pin::ALL {
            assert_eq!(
                std::format!("D{}", pin.number()),
                std::format!("{}", pin),
            );
        }
    }

    #[quickcheck]
    fn from_number_round_trip(number: u8) {
        let _ = env_logger::builder().is_test(true).try_init();
        log::trace!("number = {}", number);
        match Pin::from_number(number) {
            Ok(pin) => {
                assert!(number < PIN_COUNT);
                assert_eq!(pin.number(), number);
            }
            Err(BadPinNumber) => assert!(number >= PIN_COUNT),
        }
    }
}
