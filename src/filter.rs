//! Adaptive exponential smoothing.
//!
//! A fixed smoothing factor either lags on large jumps or lets small noise
//! through. Here the factor is taken from the snap curve for each sample, so
//! noise-sized differences are damped hard while real movements are followed
//! almost immediately.

use num_traits::AsPrimitive;

use crate::activity::{Activity, ActivityState};
use crate::config::Config;
use crate::edge_snap;
use crate::state::FilterState;
use crate::Instant;

/// Result of one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading<T> {
    /// Responsive value after the update
    pub value: T,

    /// Whether `value` differs from the previous update's
    pub changed: bool,
}

/// Advance a channel by one raw sample.
///
/// Pure: takes the previous state and returns the next one with the reading
/// it produced. `now` drives the sleep timer and is ignored while sleep is
/// disabled.
pub fn step<T>(
    mut state: FilterState<T>,
    config: &Config,
    sample: T,
    now: Instant,
) -> (FilterState<T>, Reading<T>)
where
    T: Copy + PartialEq + AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    state.raw_value = sample;

    let mut target: f32 = sample.as_();
    if config.sleep_enabled && config.edge_snap_enabled {
        target = edge_snap::apply(target, config);
    }

    let delta = target - state.smooth_value;
    let distance = libm::fabsf(delta);

    // With sleep off the timer is dropped, so it restarts when sleep is enabled again
    let sleeping = if config.sleep_enabled {
        state.activity.step(distance, config, now) == Activity::Asleep
    } else {
        state.activity = ActivityState::new();
        false
    };

    if !sleeping {
        let strength = config.snap_curve.apply(distance * config.snap_multiplier);
        state.smooth_value = clamp_to_range(state.smooth_value + delta * strength, config);
    }

    state.previous_responsive_value = state.responsive_value;
    state.responsive_value = libm::roundf(state.smooth_value).as_();
    state.changed = state.responsive_value != state.previous_responsive_value;

    let reading = Reading {
        value: state.responsive_value,
        changed: state.changed,
    };

    (state, reading)
}

// Edge snapping aims past the range, so the estimate is pinned inside it.
// A zero range pins everything to 0.
fn clamp_to_range(value: f32, config: &Config) -> f32 {
    let max = config.input_range.saturating_sub(1) as f32;
    value.min(max).max(0.0)
}
