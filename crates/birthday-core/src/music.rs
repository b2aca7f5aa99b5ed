//! Background music state
//!
//! Browsers may refuse to autoplay. When that happens the page waits for the
//! first pointer or key press and tries once more.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusicState {
    /// User wants music on
    pub enabled: bool,
    /// Last play request was blocked
    pub needs_tap: bool,
}

impl Default for MusicState {
    fn default() -> Self {
        Self { enabled: true, needs_tap: false }
    }
}

impl MusicState {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn playback_started(&mut self) {
        self.needs_tap = false;
    }

    pub fn playback_blocked(&mut self) {
        self.needs_tap = true;
    }

    /// Whether to arm the one-shot input listener that retries playback
    pub fn wants_tap_listener(&self) -> bool {
        self.enabled && self.needs_tap
    }

    pub fn show_tap_hint(&self) -> bool {
        self.wants_tap_listener()
    }

    pub fn icon(&self) -> &'static str {
        if self.enabled {
            "🎵"
        } else {
            "🎶"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_enabled() {
        let state = MusicState::default();
        assert!(state.enabled);
        assert!(!state.wants_tap_listener());
        assert_eq!(state.icon(), "🎵");
    }

    #[test]
    fn test_blocked_then_tap() {
        let mut state = MusicState::default();
        state.playback_blocked();
        assert!(state.wants_tap_listener());
        assert!(state.show_tap_hint());

        state.playback_started();
        assert!(!state.wants_tap_listener());
    }

    #[test]
    fn test_disabled_hides_hint() {
        let mut state = MusicState::default();
        state.playback_blocked();
        state.toggle();
        assert!(!state.enabled);
        assert!(state.needs_tap);
        assert!(!state.show_tap_hint());
        assert_eq!(state.icon(), "🎶");

        state.toggle();
        assert!(state.show_tap_hint());
    }
}
