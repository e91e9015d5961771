use crate::activity::ActivityState;

/// Per-channel filter state, carried from one update to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterState<T> {
    /// Last sample as given by the caller, before edge snapping
    pub raw_value: T,

    /// High-precision running estimate
    pub smooth_value: f32,

    /// Rounded `smooth_value`
    pub responsive_value: T,

    pub previous_responsive_value: T,

    pub changed: bool,

    /// Sleep/wake processing state
    pub activity: ActivityState,
}

impl<T> Default for FilterState<T>
where
    T: Default,
{
    fn default() -> Self {
        Self {
            raw_value: T::default(),
            smooth_value: 0.0,
            responsive_value: T::default(),
            previous_responsive_value: T::default(),
            changed: false,
            activity: ActivityState::new(),
        }
    }
}
