//! Reveal/highlight state for the milestone timeline. Each card walks
//! `hidden -> visible -> (glowing <-> plain)`; the first transition is
//! one-way for the life of the page.
//!
//! The component layer feeds this machine from the intersection glue and
//! the timer scheduler; everything here is plain state so it can be
//! exercised without a browser.

/// One scheduled step of the reveal cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    pub index: usize,
    pub delay_ms: u32,
}

/// Cumulative stagger plan: seeing card `through` reveals every card up to
/// and including it, each one `step_ms` later than the previous. Cards that
/// are already visible are planned again; `Reveal` just re-sets their flag.
pub fn reveal_plan(through: usize, card_count: usize, step_ms: u32) -> Vec<RevealStep> {
    if card_count == 0 {
        return Vec::new();
    }
    let through = through.min(card_count - 1);
    (0..=through)
        .map(|index| RevealStep {
            index,
            delay_ms: index as u32 * step_ms,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub enum TimelineAction {
    /// A stagger timer fired for this card.
    Reveal(usize),
    /// Pointer or focus entered this card.
    Highlight(usize),
    /// Pointer or focus left a card. `into_card` is true when the related
    /// target is another timeline card, in which case the current glow is
    /// kept so the hand-off does not flicker.
    Unhighlight { into_card: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineState {
    revealed: Vec<bool>,
    highlighted: Option<usize>,
}

impl TimelineState {
    pub fn new(card_count: usize) -> Self {
        Self {
            revealed: vec![false; card_count],
            highlighted: None,
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted == Some(index)
    }

    pub fn apply(&mut self, action: TimelineAction) {
        match action {
            TimelineAction::Reveal(index) => {
                if let Some(flag) = self.revealed.get_mut(index) {
                    *flag = true;
                }
            }
            TimelineAction::Highlight(index) => {
                // Hidden cards cannot glow.
                if self.is_revealed(index) {
                    self.highlighted = Some(index);
                }
            }
            TimelineAction::Unhighlight { into_card } => {
                if !into_card {
                    self.highlighted = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STAGGER_STEP_MS;

    #[test]
    fn plan_covers_every_earlier_card_with_stagger() {
        let plan = reveal_plan(2, 5, STAGGER_STEP_MS);
        assert_eq!(
            plan,
            vec![
                RevealStep { index: 0, delay_ms: 0 },
                RevealStep { index: 1, delay_ms: 150 },
                RevealStep { index: 2, delay_ms: 300 },
            ]
        );
    }

    #[test]
    fn plan_is_clamped_to_the_card_count() {
        let plan = reveal_plan(9, 3, STAGGER_STEP_MS);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.last().unwrap().index, 2);
        assert!(reveal_plan(0, 0, STAGGER_STEP_MS).is_empty());
    }

    #[test]
    fn applying_a_plan_leaves_later_cards_hidden() {
        let mut state = TimelineState::new(5);
        for step in reveal_plan(2, state.len(), STAGGER_STEP_MS) {
            state.apply(TimelineAction::Reveal(step.index));
        }
        assert!(state.is_revealed(0));
        assert!(state.is_revealed(1));
        assert!(state.is_revealed(2));
        assert!(!state.is_revealed(3));
        assert!(!state.is_revealed(4));
    }

    #[test]
    fn reveal_is_monotonic_and_idempotent() {
        let mut state = TimelineState::new(2);
        state.apply(TimelineAction::Reveal(1));
        state.apply(TimelineAction::Reveal(1));
        state.apply(TimelineAction::Highlight(1));
        state.apply(TimelineAction::Unhighlight { into_card: false });
        assert!(state.is_revealed(1));
    }

    #[test]
    fn hidden_cards_never_glow() {
        let mut state = TimelineState::new(3);
        state.apply(TimelineAction::Highlight(1));
        assert!(!state.is_highlighted(1));
    }

    #[test]
    fn highlight_is_exclusive() {
        let mut state = TimelineState::new(3);
        state.apply(TimelineAction::Reveal(0));
        state.apply(TimelineAction::Reveal(1));
        state.apply(TimelineAction::Highlight(0));
        state.apply(TimelineAction::Highlight(1));
        assert!(!state.is_highlighted(0));
        assert!(state.is_highlighted(1));
    }

    #[test]
    fn leaving_into_another_card_keeps_the_glow() {
        let mut state = TimelineState::new(2);
        state.apply(TimelineAction::Reveal(0));
        state.apply(TimelineAction::Highlight(0));
        state.apply(TimelineAction::Unhighlight { into_card: true });
        assert!(state.is_highlighted(0));
        state.apply(TimelineAction::Unhighlight { into_card: false });
        assert!(!state.is_highlighted(0));
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut state = TimelineState::new(1);
        state.apply(TimelineAction::Reveal(7));
        state.apply(TimelineAction::Highlight(7));
        assert!(!state.is_revealed(0));
        assert!(!state.is_highlighted(7));
    }
}
