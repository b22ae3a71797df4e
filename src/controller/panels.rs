//! Which content panel is on screen. The render layer derives every
//! `panel--active` / `is-active` class from this one value, so exactly one
//! panel and one nav control can carry them at a time.

#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    active: String,
}

impl PanelState {
    pub fn new(default_id: &str) -> Self {
        Self {
            active: default_id.to_string(),
        }
    }

    /// Switch to `target`. Returns `false` without touching anything when
    /// the target is empty or already active.
    pub fn activate(&mut self, target: &str) -> bool {
        if target.is_empty() || target == self.active {
            return false;
        }
        self.active = target.to_string();
        true
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_default_panel() {
        let state = PanelState::new("about");
        assert!(state.is_active("about"));
        assert!(!state.is_active("contact"));
    }

    #[test]
    fn switching_moves_the_active_flag_exclusively() {
        let mut state = PanelState::new("about");
        assert!(state.activate("contact"));
        assert!(state.is_active("contact"));
        assert!(!state.is_active("about"));
        assert_eq!(state.active(), "contact");
    }

    #[test]
    fn reactivating_the_current_panel_is_a_no_op() {
        let mut state = PanelState::new("about");
        let before = state.clone();
        assert!(!state.activate("about"));
        assert_eq!(state, before);
    }

    #[test]
    fn empty_target_is_ignored() {
        let mut state = PanelState::new("about");
        assert!(!state.activate(""));
        assert!(state.is_active("about"));
    }

    #[test]
    fn active_always_matches_the_last_accepted_target() {
        let mut state = PanelState::new("about");
        state.activate("story");
        state.activate("");
        state.activate("story");
        state.activate("contact");
        assert_eq!(state.active(), "contact");
    }
}
