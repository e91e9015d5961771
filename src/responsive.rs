use num_traits::AsPrimitive;

use crate::config::{Config, ConfigError};
use crate::filter::{self, Reading};
use crate::sampler::Sampler;
use crate::snap_curve::SnapCurve;
use crate::state::FilterState;
use crate::{Duration, Instant};

/// One smoothed analog channel.
///
/// `S` is an optional sampling source. Without one (`S = ()`), samples are
/// passed to [`update`](Self::update) by the caller.
pub struct ResponsiveAnalog<T, S = ()> {
    config: Config,
    state: FilterState<T>,
    sampler: S,
}

impl<T> ResponsiveAnalog<T>
where
    T: Copy + Default + PartialEq + AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    /// Create a channel fed by the caller. The configuration is used as is.
    pub fn new(config: Config) -> Self {
        Self::with_sampler(config, ())
    }

    /// Create a channel after checking the configuration.
    pub fn try_new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl<T, S> ResponsiveAnalog<T, S>
where
    T: Copy + Default + PartialEq + AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    /// Create a channel that pulls its samples from `sampler`.
    pub fn with_sampler(config: Config, sampler: S) -> Self {
        Self {
            config,
            state: FilterState::default(),
            sampler,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &FilterState<T> {
        &self.state
    }

    /// Feed one raw sample taken at `now`.
    pub fn update(&mut self, raw: T, now: Instant) -> Reading<T> {
        let (state, reading) = filter::step(self.state, &self.config, raw, now);
        self.state = state;
        reading
    }

    /// Responsive value from the last update
    pub fn value(&self) -> T {
        self.state.responsive_value
    }

    /// Raw sample from the last update, before edge snapping
    pub fn raw_value(&self) -> T {
        self.state.raw_value
    }

    /// Whether the last update changed the responsive value
    pub fn has_changed(&self) -> bool {
        self.state.changed
    }

    pub fn is_sleeping(&self) -> bool {
        self.config.sleep_enabled && self.state.activity.is_sleeping()
    }

    /// Unrounded running estimate
    pub fn smooth_value(&self) -> f32 {
        self.state.smooth_value
    }

    /// Forget all history, as if freshly created.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    /// Release the sampling source.
    pub fn free(self) -> S {
        self.sampler
    }

    pub fn set_input_range(&mut self, input_range: u32) {
        self.config.input_range = input_range;
    }

    /// Clamped to 0.0..=1.0.
    pub fn set_snap_multiplier(&mut self, multiplier: f32) {
        self.config.snap_multiplier = multiplier.clamp(0.0, 1.0);
    }

    pub fn enable_sleep(&mut self) {
        self.config.sleep_enabled = true;
    }

    pub fn disable_sleep(&mut self) {
        self.config.sleep_enabled = false;
    }

    pub fn enable_edge_snap(&mut self) {
        self.config.edge_snap_enabled = true;
    }

    pub fn disable_edge_snap(&mut self) {
        self.config.edge_snap_enabled = false;
    }

    pub fn set_sleep_delay(&mut self, delay: Duration) {
        self.config.sleep_delay = delay;
    }

    pub fn set_sleep_activity_threshold(&mut self, threshold: u32) {
        self.config.sleep_activity_threshold = threshold;
    }

    pub fn set_awake_activity_threshold(&mut self, threshold: u32) {
        self.config.awake_activity_threshold = threshold;
    }

    pub fn set_snap_curve(&mut self, curve: SnapCurve) {
        self.config.snap_curve = curve;
    }

    pub fn set_edge_snap_gain(&mut self, gain: f32) {
        self.config.edge_snap_gain = gain;
    }
}

impl<T, S> ResponsiveAnalog<T, S>
where
    T: Copy + Default + PartialEq + AsPrimitive<f32>,
    f32: AsPrimitive<T>,
    S: Sampler<T>,
{
    /// Take a sample from the bound source and feed it.
    ///
    /// On a sampling error the channel is left untouched.
    pub fn update_sampled(&mut self, now: Instant) -> Result<Reading<T>, S::Error> {
        let raw = self.sampler.sample()?;
        Ok(self.update(raw, now))
    }
}
