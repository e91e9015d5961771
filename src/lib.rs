#![no_std]

mod config;
mod state;
mod responsive;
pub mod activity;
pub mod edge_snap;
pub mod filter;
pub mod sampler;
pub mod snap_curve;

pub use config::{Config, ConfigError};
pub use state::FilterState;
pub use responsive::ResponsiveAnalog;
pub use activity::{Activity, ActivityState};
pub use filter::Reading;
pub use sampler::Sampler;
pub use snap_curve::SnapCurve;

#[cfg(feature = "adc")]
pub use sampler::AdcChannel;

/// Millisecond timestamp from the caller's monotonic clock.
pub type Instant = fugit::TimerInstantU32<1_000>;

/// Millisecond duration, used for the sleep delay.
pub type Duration = fugit::MillisDurationU32;
