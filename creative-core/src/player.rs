/// Play/mute flags behind the preview's control buttons. They only pick
/// icons; nothing drives the embedded player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub playing: bool,
    pub muted: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self { playing: false, muted: true }
    }
}

impl PlayerState {
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn play_icon(self) -> &'static str {
        if self.playing { "\u{23F8}" } else { "\u{25B6}" }
    }

    pub fn play_label(self) -> &'static str {
        if self.playing { "Pause" } else { "Play" }
    }

    pub fn mute_icon(self) -> &'static str {
        if self.muted { "\u{1F507}" } else { "\u{1F50A}" }
    }

    pub fn mute_label(self) -> &'static str {
        if self.muted { "Unmute" } else { "Mute" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let p = PlayerState::default();
        assert!(!p.playing);
        assert!(p.muted);
        assert_eq!(p.play_label(), "Play");
        assert_eq!(p.mute_label(), "Unmute");
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut p = PlayerState::default();
        p.toggle_play();
        assert_eq!(p, PlayerState { playing: true, muted: true });
        p.toggle_mute();
        assert_eq!(p, PlayerState { playing: true, muted: false });
        p.toggle_play();
        assert_eq!(p, PlayerState { playing: false, muted: false });
        p.toggle_mute();
        assert_eq!(p, PlayerState::default());
    }

    #[test]
    fn test_icons_swap() {
        let mut p = PlayerState::default();
        let (play, mute) = (p.play_icon(), p.mute_icon());
        p.toggle_play();
        assert_ne!(p.play_icon(), play);
        assert_eq!(p.mute_icon(), mute);
        p.toggle_mute();
        assert_ne!(p.mute_icon(), mute);
    }
}
