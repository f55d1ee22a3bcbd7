//! Static configuration of an RF433 link.
use crate::board::{self, Pin};
use crate::timing::BitTiming;

/// The default transmission speed in bits per second.
pub const DEFAULT_SPEED: u32 = 4000;

/// The static configuration of an RF433 link.
///
/// An application implements this trait on a marker type. Every item comes
/// with a default matching the standard Domotica node wiring; override the
/// associated constants to deviate from it.
///
/// # Examples
///
/// ```
/// use domotica_rf433::{link_timing, BitTiming, LinkOptions};
///
/// struct Node;
/// impl LinkOptions for Node {
///     const SPEED: u32 = 2000;
/// }
///
/// const TIMING: BitTiming = link_timing::<Node>();
/// assert_eq!(TIMING.bit_period_micros(), 500);
/// ```
pub trait LinkOptions {
    /// The transmission speed in bits per second.
    const SPEED: u32 = DEFAULT_SPEED;

    /// The data pin the receiver module is wired to.
    const RX: Pin = board::RX;

    /// The data pin the transmitter module is wired to.
    const TX: Pin = board::TX;
}

/// Validate `Options` and derive the [`BitTiming`] for its speed.
///
/// Panics if `Options::RX` and `Options::TX` name the same pin or if the
/// speed is outside the range supported by [`BitTiming::new`]. Evaluated in
/// a `const` context, the panic becomes a compile error.
pub const fn link_timing<Options: LinkOptions>() -> BitTiming {
    if Options::RX.number() == Options::TX.number() {
        panic!("`RX` and `TX` must be assigned distinct pins");
    }
    BitTiming::new(Options::SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DefaultNode;
    impl LinkOptions for DefaultNode {}

    struct FastNode;
    impl LinkOptions for FastNode {
        const SPEED: u32 = 8000;
    }

    struct RewiredNode;
    impl LinkOptions for RewiredNode {
        const RX: Pin = Pin::D2;
        const TX: Pin = Pin::D3;
    }

    struct ConflictingNode;
    impl LinkOptions for ConflictingNode {
        const RX: Pin = Pin::D3;
        const TX: Pin = Pin::D3;
    }

    #[test]
    fn default_speed() {
        assert_eq!(DEFAULT_SPEED, 4000);
        assert_eq!(DefaultNode::SPEED, 4000);
    }

    #[test]
    fn default_pins_follow_board() {
        assert_eq!(DefaultNode::RX, board::RX);
        assert_eq!(DefaultNode::TX, board::TX);
    }

    #[test]
    fn default_timing() {
        const TIMING: BitTiming = link_timing::<DefaultNode>();
        assert_eq!(TIMING.bit_period_micros(), 250);
        assert!(TIMING.is_exact());
    }

    #[test]
    fn speed_override() {
        const TIMING: BitTiming = link_timing::<FastNode>();
        assert_eq!(TIMING.bit_period_micros(), 125);
        assert!(TIMING.is_exact());
    }

    #[test]
    fn pin_override() {
        assert_eq!(RewiredNode::RX, Pin::D2);
        assert_eq!(RewiredNode::TX, Pin::D3);
        assert_eq!(RewiredNode::SPEED, DEFAULT_SPEED);
        let _ = link_timing::<RewiredNode>();
    }

    /// `RX` and `TX` assigned to the same pin must be rejected.
    #[should_panic]
    #[test]
    fn rx_tx_conflict() {
        link_timing::<ConflictingNode>();
    }
}
