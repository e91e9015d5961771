//! Snap curve implementation.
//!
//! Maps the magnitude of a pending change to a response strength in 0.0..=1.0.

/// Default gain, saturating the curve once the scaled distance reaches 1.0.
pub const DEFAULT_SNAP_GAIN: f32 = 2.0;

/// Hyperbolic snap curve: `s(x) = clamp(gain * (1 - 1 / (x + 1)), 0, 1)`.
///
/// Small distances give a strength near zero, so noise is damped heavily.
/// Larger distances saturate at 1.0, so real movements are followed at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapCurve {
    pub gain: f32,
}

impl SnapCurve {
    pub const fn new(gain: f32) -> Self {
        Self { gain }
    }

    /// Response strength for a scaled, non-negative distance.
    ///
    /// Negative inputs are treated as zero.
    #[inline]
    pub fn apply(&self, x: f32) -> f32 {
        let x = x.max(0.0);
        let y = 1.0 - 1.0 / (x + 1.0);
        (self.gain * y).min(1.0).max(0.0)
    }
}

impl Default for SnapCurve {
    fn default() -> Self {
        Self::new(DEFAULT_SNAP_GAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_gives_zero_strength() {
        assert_eq!(SnapCurve::default().apply(0.0), 0.0);
    }

    #[test]
    fn saturates_at_one() {
        let curve = SnapCurve::default();
        assert_eq!(curve.apply(1.0), 1.0);
        assert_eq!(curve.apply(1000.0), 1.0);
    }

    #[test]
    fn negative_input_is_clamped() {
        assert_eq!(SnapCurve::default().apply(-0.5), 0.0);
        assert_eq!(SnapCurve::default().apply(-1.0), 0.0);
    }

    #[test]
    fn lower_gain_is_softer() {
        let soft = SnapCurve::new(1.0);
        let hard = SnapCurve::new(2.0);
        assert!(soft.apply(0.5) < hard.apply(0.5));
    }
}
