use crate::snap_curve::SnapCurve;
use crate::Duration;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidInputRange,
    InvalidSnapMultiplier,
    InvertedActivityThresholds,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidInputRange => write!(f, "input_range must be greater than zero"),
            ConfigError::InvalidSnapMultiplier => {
                write!(f, "snap_multiplier must be in range (0.0, 1.0]")
            }
            ConfigError::InvertedActivityThresholds => write!(
                f,
                "sleep_activity_threshold must not be less than awake_activity_threshold"
            ),
        }
    }
}

/// Channel configuration. Thresholds are in raw input units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Full scale of the raw input, e.g. 1024 for a 10-bit ADC
    pub input_range: u32,

    /// Higher = more responsive, noisier
    pub snap_multiplier: f32,

    /// Freeze the output once the input settles
    pub sleep_enabled: bool,

    /// Only used while sleep is enabled
    pub edge_snap_enabled: bool,

    /// Idle time before the channel falls asleep
    pub sleep_delay: Duration,

    /// Movement needed to wake a sleeping channel
    pub sleep_activity_threshold: u32,

    /// Movement needed to reset the sleep timer of an awake channel
    pub awake_activity_threshold: u32,

    /// Maps pending change to smoothing strength
    pub snap_curve: SnapCurve,

    /// Extrapolation factor applied to samples near the range edges
    pub edge_snap_gain: f32,
}

impl Config {
    pub const DEFAULT_INPUT_RANGE: u32 = 1024;
    pub const DEFAULT_SNAP_MULTIPLIER: f32 = 0.01;
    pub const DEFAULT_SLEEP_DELAY: Duration = Duration::millis(500);
    pub const DEFAULT_SLEEP_ACTIVITY_THRESHOLD: u32 = 20;
    pub const DEFAULT_AWAKE_ACTIVITY_THRESHOLD: u32 = 5;
    pub const DEFAULT_EDGE_SNAP_GAIN: f32 = 2.0;

    /// Defaults with the two settings most callers pick explicitly.
    pub fn new(sleep_enabled: bool, snap_multiplier: f32) -> Self {
        Self {
            sleep_enabled,
            snap_multiplier,
            ..Self::default()
        }
    }

    /// Opt-in sanity check. Channels run with any configuration; this only
    /// reports settings that make the filter degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_range == 0 {
            return Err(ConfigError::InvalidInputRange);
        }

        // Also rejects NaN
        if !(self.snap_multiplier > 0.0 && self.snap_multiplier <= 1.0) {
            return Err(ConfigError::InvalidSnapMultiplier);
        }

        if self.sleep_activity_threshold < self.awake_activity_threshold {
            return Err(ConfigError::InvertedActivityThresholds);
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_range: Self::DEFAULT_INPUT_RANGE,
            snap_multiplier: Self::DEFAULT_SNAP_MULTIPLIER,
            sleep_enabled: true,
            edge_snap_enabled: true,
            sleep_delay: Self::DEFAULT_SLEEP_DELAY,
            sleep_activity_threshold: Self::DEFAULT_SLEEP_ACTIVITY_THRESHOLD,
            awake_activity_threshold: Self::DEFAULT_AWAKE_ACTIVITY_THRESHOLD,
            snap_curve: SnapCurve::default(),
            edge_snap_gain: Self::DEFAULT_EDGE_SNAP_GAIN,
        }
    }
}
