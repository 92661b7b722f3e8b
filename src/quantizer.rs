//! Shot interval quantization.
//!
//! Intervals are restricted to a fixed ascending set of "nice" values. Below a
//! minute the set is applied to seconds; from one minute upwards the same set
//! is applied to the minute count.

/// Canonical ascending interval set, in seconds (or minutes above 60 s).
pub const INTERVALS: [u32; 9] = [1, 2, 4, 5, 10, 20, 30, 40, 60];

const SECONDS_PER_MINUTE: u32 = 60;

/// Seconds the interval drops to when decremented from exactly one minute.
const BELOW_ONE_MINUTE: u32 = 40;

/// Returns the smallest set member strictly greater than `current`,
/// saturating at the largest member.
pub fn increment(current: u32) -> u32 {
    INTERVALS
        .iter()
        .copied()
        .find(|&interval| interval > current)
        .unwrap_or(INTERVALS[INTERVALS.len() - 1])
}

/// Returns the largest set member strictly less than `current`,
/// saturating at the smallest member.
pub fn decrement(current: u32) -> u32 {
    INTERVALS
        .iter()
        .rev()
        .copied()
        .find(|&interval| interval < current)
        .unwrap_or(INTERVALS[0])
}

/// Returns true if `interval` is a member of the canonical set.
pub fn is_canonical(interval: u32) -> bool {
    INTERVALS.contains(&interval)
}

/// Returns true if `seconds` is a valid shot interval: a canonical seconds
/// value, or a whole number of minutes whose count is canonical.
pub fn is_valid_interval(seconds: u32) -> bool {
    if seconds >= SECONDS_PER_MINUTE {
        seconds % SECONDS_PER_MINUTE == 0 && is_canonical(seconds / SECONDS_PER_MINUTE)
    } else {
        is_canonical(seconds)
    }
}

/// Steps a shot interval up, switching to minute steps at one minute.
pub fn next_interval(seconds: u32) -> u32 {
    if seconds >= SECONDS_PER_MINUTE {
        increment(seconds / SECONDS_PER_MINUTE) * SECONDS_PER_MINUTE
    } else {
        increment(seconds)
    }
}

/// Steps a shot interval down. One minute drops to 40 seconds.
pub fn previous_interval(seconds: u32) -> u32 {
    if seconds >= SECONDS_PER_MINUTE {
        let minutes = seconds / SECONDS_PER_MINUTE;
        if minutes > 1 {
            decrement(minutes) * SECONDS_PER_MINUTE
        } else {
            BELOW_ONE_MINUTE
        }
    } else {
        decrement(seconds)
    }
}
