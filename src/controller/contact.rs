//! Submit-button state for the contact form's local acknowledgement.
//! There is no backend behind the form; the button thanks the visitor by
//! name and re-arms itself after a cooldown.

use crate::config::SUBMIT_LABEL;

/// Label shown when the name field was left blank.
const FALLBACK_NAME: &str = "Friend";

pub fn acknowledgement(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { FALLBACK_NAME } else { name };
    format!("Thanks, {}!", name)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

impl SubmitButton {
    pub fn idle() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            disabled: false,
        }
    }

    pub fn acknowledging(name: &str) -> Self {
        Self {
            label: acknowledgement(name),
            disabled: true,
        }
    }
}
