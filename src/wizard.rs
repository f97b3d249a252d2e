use log::debug;
use regex::Regex;

/// Wizard names and trigger patterns, in priority order.
const WIZARDS: &[(&str, &str)] = &[("Beurlaubung", "urlaub")];

lazy_static! {
    pub static ref WIZARD_NAMES: Vec<&'static str> =
        WIZARDS.iter().map(|(name, _)| *name).collect();
    static ref WIZARD_TRIGGERS: Vec<Regex> = WIZARDS
        .iter()
        .map(|(_, pattern)| Regex::new(pattern).unwrap())
        .collect();
}

pub fn wizard_name(index: usize) -> Option<&'static str> {
    WIZARD_NAMES.get(index).copied()
}

/// Index of the first wizard whose trigger matches the lowercased message.
pub fn check_for_applicable_wizard(message: &str) -> Option<usize> {
    let message = message.to_lowercase();
    let index = WIZARD_TRIGGERS
        .iter()
        .position(|trigger| trigger.is_match(&message));
    debug!("Wizard for message of {} chars: {:?}", message.chars().count(), index);
    index
}
