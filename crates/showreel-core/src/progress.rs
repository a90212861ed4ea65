//! Progress bar math and time labels.

/// Fill percentage for a position, in `[0, 100]` for any position within the
/// media's bounds.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    current_time / duration * 100.0
}

/// Formats seconds as `m:ss`, truncating fractional seconds.
///
/// Minutes are not wrapped into hours: 3725 s renders as `62:05`.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Formats the `elapsed / total` label shown next to the progress bar.
pub fn format_progress_label(current_time: f64, duration: f64) -> String {
    format!(
        "{} / {}",
        format_timestamp(current_time),
        format_timestamp(duration)
    )
}

/// Horizontal fraction of a pointer within the progress bar.
///
/// Returns `None` for a degenerate bar. With `clamp` unset the fraction may
/// fall outside `[0, 1]` for pointers beyond the bar's edges.
pub fn seek_fraction(pointer_x: f64, bar_left: f64, bar_width: f64, clamp: bool) -> Option<f64> {
    if !(bar_width.is_finite() && bar_width > 0.0) {
        return None;
    }
    let pos = (pointer_x - bar_left) / bar_width;
    Some(if clamp { pos.clamp(0.0, 1.0) } else { pos })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_zero_pads_seconds() {
        assert_eq!(format_progress_label(125.4, 190.0), "2:05 / 3:10");
        assert_eq!(format_progress_label(0.0, 59.99), "0:00 / 0:59");
    }

    #[test]
    fn timestamps_truncate_and_do_not_roll_into_hours() {
        assert_eq!(format_timestamp(9.999), "0:09");
        assert_eq!(format_timestamp(3725.0), "62:05");
        assert_eq!(format_timestamp(f64::NAN), "0:00");
        assert_eq!(format_timestamp(-4.0), "0:00");
    }

    #[test]
    fn percent_spans_the_bar() {
        assert_eq!(progress_percent(0.0, 190.0), 0.0);
        assert_eq!(progress_percent(95.0, 190.0), 50.0);
        assert_eq!(progress_percent(190.0, 190.0), 100.0);
    }

    #[test]
    fn seek_fraction_clamps_on_request() {
        assert_eq!(seek_fraction(150.0, 100.0, 200.0, true), Some(0.25));
        assert_eq!(seek_fraction(50.0, 100.0, 200.0, true), Some(0.0));
        assert_eq!(seek_fraction(400.0, 100.0, 200.0, true), Some(1.0));
        assert_eq!(seek_fraction(400.0, 100.0, 200.0, false), Some(1.5));
        assert_eq!(seek_fraction(400.0, 100.0, 0.0, false), None);
    }
}
