//! Sleep/wake state machine.
//!
//! A settled channel stops updating. Waking it needs a larger movement
//! (`sleep_activity_threshold`) than keeping it awake does
//! (`awake_activity_threshold`), so noise around the settling point can't
//! flap it between states.

use crate::config::Config;
use crate::{Duration, Instant};

/// Whether the channel is tracking its input or frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Awake,
    Asleep,
}

/// Activity state carried between updates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivityState {
    pub activity: Activity,

    /// Time of the last qualifying movement. `None` until the first update.
    pub last_activity: Option<Instant>,
}

impl ActivityState {
    pub const fn new() -> Self {
        Self {
            activity: Activity::Awake,
            last_activity: None,
        }
    }

    pub fn is_sleeping(&self) -> bool {
        self.activity == Activity::Asleep
    }

    /// Advance the state machine by one sample.
    ///
    /// `distance` is the absolute difference between the (edge-corrected)
    /// sample and the current smoothed value, in raw input units.
    pub fn step(&mut self, distance: f32, config: &Config, now: Instant) -> Activity {
        let last = *self.last_activity.get_or_insert(now);

        match self.activity {
            Activity::Awake => {
                if distance > config.awake_activity_threshold as f32 {
                    self.last_activity = Some(now);
                } else if idle_time(last, now) >= config.sleep_delay {
                    self.activity = Activity::Asleep;

                    #[cfg(feature = "log")]
                    log::trace!("asleep after {} ms idle", idle_time(last, now).to_millis());
                }
            }
            Activity::Asleep => {
                if distance > config.sleep_activity_threshold as f32 {
                    #[cfg(feature = "log")]
                    log::trace!("woken by movement of {}", distance);

                    self.activity = Activity::Awake;
                    self.last_activity = Some(now);
                }
            }
        }

        self.activity
    }
}

// A clock running backwards counts as no time passed
fn idle_time(last: Instant, now: Instant) -> Duration {
    now.checked_duration_since(last)
        .unwrap_or(Duration::from_ticks(0))
}
