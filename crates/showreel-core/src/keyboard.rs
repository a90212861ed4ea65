//! Keyboard shortcuts active while the media element has focus.

/// A recognized shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    /// Space: play/pause.
    TogglePlay,
    /// ArrowLeft: skip back.
    SeekBack,
    /// ArrowRight: skip forward.
    SeekForward,
    /// M: mute/unmute.
    ToggleMute,
}

impl ShortcutKey {
    /// Maps a `KeyboardEvent.code` value to a shortcut.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(Self::TogglePlay),
            "ArrowLeft" => Some(Self::SeekBack),
            "ArrowRight" => Some(Self::SeekForward),
            "KeyM" => Some(Self::ToggleMute),
            _ => None,
        }
    }
}

/// Target of a relative seek, clamped to the playable range.
///
/// `raw_duration` is the host value. A forward seek clamps to 0 while it is
/// `NaN` or zero, and is unbounded when it is `+Infinity`.
pub fn skip_target(current_time: f64, raw_duration: f64, delta: f64) -> f64 {
    let target = current_time + delta;
    if delta < 0.0 {
        return target.max(0.0);
    }
    let end = if raw_duration > 0.0 { raw_duration } else { 0.0 };
    target.min(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_shortcuts() {
        assert_eq!(ShortcutKey::from_code("Space"), Some(ShortcutKey::TogglePlay));
        assert_eq!(ShortcutKey::from_code("KeyM"), Some(ShortcutKey::ToggleMute));
        assert_eq!(ShortcutKey::from_code("KeyK"), None);
    }

    #[test]
    fn skips_clamp_to_range() {
        assert_eq!(skip_target(3.0, 100.0, -10.0), 0.0);
        assert_eq!(skip_target(95.0, 100.0, 10.0), 100.0);
        assert_eq!(skip_target(40.0, 100.0, 10.0), 50.0);
        assert_eq!(skip_target(40.0, f64::NAN, 10.0), 0.0);
        assert_eq!(skip_target(40.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn live_streams_skip_forward() {
        assert_eq!(skip_target(3600.0, f64::INFINITY, 10.0), 3610.0);
        assert_eq!(skip_target(5.0, f64::INFINITY, -10.0), 0.0);
    }
}
