//! Bit timing derived from the transmission speed.
use num_rational::Ratio;

/// The precomputed duration of one transmitted bit.
///
/// The duration is kept exact: bit-banged transmit and receive loops pace
/// themselves off this value, and any rounding error accumulates across a
/// frame and desynchronizes the receiver.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BitTiming {
    /// The integral part of the bit period.
    bit_period_micros: u32,
    /// The fractional part of the bit period. Divided by [`Self::division`].
    /// Must be in range `0..self.division`.
    bit_period_submicros: u32,
    /// The denominator of [`Self::bit_period_submicros`].
    division: u32,
}

impl BitTiming {
    /// Construct a `BitTiming` from a transmission speed measured in bits
    /// per second.
    pub const fn new(speed: u32) -> BitTiming {
        if speed == 0 {
            panic!("the transmission speed must not be zero");
        } else if speed > 1_000_000 {
            // The integral part of the bit period would be zero
            panic!("the bit period must be at least one microsecond");
        }

        // `bit_period = 1s / speed`
        let bit_period_micros = Ratio::new_raw(1_000_000, speed);
        let bit_period_micros = reduce_ratio32(bit_period_micros);

        BitTiming {
            bit_period_micros: *bit_period_micros.numer() / *bit_period_micros.denom(),
            bit_period_submicros: *bit_period_micros.numer() % *bit_period_micros.denom(),
            division: *bit_period_micros.denom(),
        }
    }

    /// Get the integral part of the bit period in microseconds.
    pub const fn bit_period_micros(&self) -> u32 {
        self.bit_period_micros
    }

    /// Get the fractional part of the bit period, measured in `1 /`
    /// [`Self::division`] microseconds.
    pub const fn bit_period_submicros(&self) -> u32 {
        self.bit_period_submicros
    }

    /// Get the denominator of [`Self::bit_period_submicros`].
    pub const fn division(&self) -> u32 {
        self.division
    }

    /// Get a flag indicating whether the bit period is an integral number
    /// of microseconds.
    pub const fn is_exact(&self) -> bool {
        self.division == 1
    }
}

/// The timekeeping state of a bit-banging loop.
///
/// On every transmitted or received bit, the elapsed time is incremented by
/// the integral part of the bit period while the fractional part is
/// accumulated separately and carried over whenever it reaches a whole
/// microsecond, so the reported time never drifts from the true one.
#[derive(Debug, Copy, Clone, Default)]
pub struct BitTimingState {
    elapsed_micros: u32,
    elapsed_submicros: u32,
}

impl BitTimingState {
    /// The initial state.
    pub const INIT: Self = Self {
        elapsed_micros: 0,
        elapsed_submicros: 0,
    };

    /// Advance the state by one bit.
    ///
    /// `timing` must be the same value on every call.
    #[inline]
    pub fn tick(&mut self, timing: &BitTiming) {
        self.elapsed_micros = self.elapsed_micros.wrapping_add(timing.bit_period_micros);
        self.elapsed_submicros += timing.bit_period_submicros;
        if self.elapsed_submicros >= timing.division {
            self.elapsed_submicros -= timing.division;
            self.elapsed_micros = self.elapsed_micros.wrapping_add(1);
        }
    }

    /// Get the elapsed time measured in microseconds, truncated to 32 bits.
    #[inline]
    pub fn elapsed_micros(&self) -> u32 {
        self.elapsed_micros
    }
}

// Integers and rational numbers
// -------------------------------------------------------------------------

const fn gcd32(x: u32, y: u32) -> u32 {
    if y == 0 {
        x
    } else {
        gcd32(y, x % y)
    }
}

const fn reduce_ratio32(r: Ratio<u32>) -> Ratio<u32> {
    let gcd = gcd32(*r.numer(), *r.denom());
    Ratio::new_raw(*r.numer() / gcd, *r.denom() / gcd)
}
