//! Progressive reveal of series over time.
//!
//! A tick is just another pure render pass at some `progress`; nothing is
//! carried between ticks, so cancelling means the host stops calling.

/// Number of samples visible at `progress`, `ceil(progress * len)`.
///
/// `progress` is clamped to `[0, 1]`; NaN counts as fully revealed.
#[must_use]
pub fn reveal_count(len: usize, progress: f64) -> usize {
    if progress.is_nan() || progress >= 1.0 {
        return len;
    }
    if progress <= 0.0 {
        return 0;
    }
    let visible = (progress * len as f64).ceil() as usize;
    visible.min(len)
}

/// Linear progress of an animation `elapsed_ms` into `duration_ms`.
///
/// A zero duration finishes immediately.
#[must_use]
pub fn progress_at(elapsed_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return 1.0;
    }
    elapsed_ms as f64 / duration_ms as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_rounds_partial_samples_up() {
        assert_eq!(reveal_count(10, 0.0), 0);
        assert_eq!(reveal_count(10, 0.01), 1);
        assert_eq!(reveal_count(10, 0.5), 5);
        assert_eq!(reveal_count(10, 1.0), 10);
        assert_eq!(reveal_count(10, 3.0), 10);
    }

    #[test]
    fn zero_duration_is_complete() {
        assert_eq!(progress_at(0, 0), 1.0);
        assert_eq!(progress_at(250, 1_000), 0.25);
    }
}
