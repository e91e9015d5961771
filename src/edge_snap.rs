//! Edge snapping.
//!
//! The sleep thresholds create a deadzone that can keep the output a few units
//! short of the range extremes. Samples within `sleep_activity_threshold` of
//! either edge are stretched further outwards, so a real reading near an edge
//! both registers as activity and pulls the output all the way to it.

use crate::config::Config;

/// Edge-corrected copy of `sample`. Samples away from the edges pass through.
///
/// Continuous at the zone boundaries: the correction is a linear stretch by
/// `edge_snap_gain` around the point where each zone begins.
pub fn apply(sample: f32, config: &Config) -> f32 {
    let threshold = config.sleep_activity_threshold as f32;
    let upper = config.input_range as f32 - threshold;

    if sample < threshold {
        threshold + (sample - threshold) * config.edge_snap_gain
    } else if sample > upper {
        upper + (sample - upper) * config.edge_snap_gain
    } else {
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_edge_doubles_distance() {
        let config = Config::default();

        // 2 * sample - threshold
        assert_eq!(apply(0.0, &config), -20.0);
        assert_eq!(apply(5.0, &config), -10.0);
        assert_eq!(apply(19.0, &config), 18.0);
    }

    #[test]
    fn high_edge_doubles_distance() {
        let config = Config::default();

        // 2 * sample - range + threshold
        assert_eq!(apply(1023.0, &config), 1042.0);
        assert_eq!(apply(1010.0, &config), 1016.0);
    }

    #[test]
    fn middle_passes_through() {
        let config = Config::default();

        assert_eq!(apply(20.0, &config), 20.0);
        assert_eq!(apply(512.0, &config), 512.0);
        assert_eq!(apply(1004.0, &config), 1004.0);
    }

    #[test]
    fn unit_gain_is_identity() {
        let config = Config {
            edge_snap_gain: 1.0,
            ..Config::default()
        };

        assert_eq!(apply(3.0, &config), 3.0);
        assert_eq!(apply(1020.0, &config), 1020.0);
    }
}
