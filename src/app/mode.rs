use super::state::DisplayState;

/// Which screen is showing. Preview wins over fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Editing,
    Preview,
    Fullscreen,
    Quit,
}

impl AppMode {
    pub fn from_state(state: &DisplayState) -> Self {
        if state.is_preview_active() {
            AppMode::Preview
        } else if state.is_fullscreen_active() {
            AppMode::Fullscreen
        } else {
            AppMode::Editing
        }
    }

    /// True for the screens that show the rotating caption
    pub fn shows_caption(self) -> bool {
        matches!(self, AppMode::Preview | AppMode::Fullscreen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::store::DisplayStateStore;

    #[test]
    fn test_mode_defaults_to_editing() {
        let store = DisplayStateStore::with_defaults();
        assert_eq!(AppMode::from_state(store.state()), AppMode::Editing);
    }

    #[test]
    fn test_preview_takes_precedence() {
        let mut store = DisplayStateStore::with_defaults();
        store.start_fullscreen();
        store.start_preview();
        assert_eq!(AppMode::from_state(store.state()), AppMode::Preview);
    }

    #[test]
    fn test_shows_caption() {
        assert!(AppMode::Preview.shows_caption());
        assert!(AppMode::Fullscreen.shows_caption());
        assert!(!AppMode::Editing.shows_caption());
        assert!(!AppMode::Quit.shows_caption());
    }
}
