//! Board configuration for the 433 MHz RF receiver/transmitter module pair
//! used by Domotica home-automation nodes.
//!
//! This crate selects the data-pin assignment for the target board
//! ([`board`]), carries the transmission speed and the bit timing derived
//! from it ([`cfg`], [`timing`]), and documents the physical wiring.
//! Signal modulation and protocol framing live in the node firmware, not
//! here.
//!
//! # Circuit
//!
#![doc = svgbobdoc::transform!(
/// ```svgbob
///                        RF433/RX                       V
///                      +------------+                   |
///                      |0-----------|-------------------+
///                      |ANT         |       17.3 cm
///                      |            |
/// (VCC)--------------1-|VCC         |
///                    2-|DATA        |
/// (RX)---------------3-|DATA        |
/// (GND)--------------4-|GND         |
///                      +------------+
///
///                        RF433/TX
///                      +------------+
/// (TX)---------------1-|DATA        |
/// (VCC)--------------2-|VCC         |                   V
/// (GND)--------------3-|GND         |                   |
///                      |ANT       0-|-------------------+
///                      +------------+       17.3 cm
/// ```
)]
//!
//! The antenna on both modules is a 17.3 cm quarter-wave wire for the
//! 433.92 MHz carrier. `RX` and `TX` above refer to [`board::RX`] and
//! [`board::TX`]; which physical pins those are depends on the selected
//! board.
//!
//! # Cargo features
//!
//! - `board-attiny`: use the ATtinyX5 pin assignment (`RX = D1`,
//!   `TX = D0`) instead of the ATmega328P one (`RX = D7`, `TX = D6`).
//! - `doc`: render the diagrams in this documentation as images.
#![cfg_attr(not(test), no_std)]

#[cfg(doc)]
#[doc = include_str!("../CHANGELOG.md")]
pub mod _changelog_ {}

pub mod board;
pub mod cfg;
pub mod timing;

pub use self::cfg::*;
pub use self::timing::{BitTiming, BitTimingState};
