//! Dashboard configuration constants.

use std::time::Duration;

/// Fixed timeout applied to every backend call.
pub const BACKEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Smallest number of days the backend will simulate.
pub const MIN_DAYS: u32 = 1;

/// Largest number of days the backend will simulate.
pub const MAX_DAYS: u32 = 60;

/// Default day-count shown in the form.
pub const DEFAULT_DAYS: u32 = 7;

/// Default bedtime window bounds for time-range mode, as (hour, minute).
pub const DEFAULT_EARLIEST_BEDTIME: (u32, u32) = (22, 0);
pub const DEFAULT_LATEST_BEDTIME: (u32, u32) = (0, 30);

/// The maximum number of events to keep in the activity log.
pub const MAX_ACTIVITY_LOGS: usize = 100;
