//! Panel records and name-derived classification.

use herald_types::{DetectorKind, PanelType};

/// Stable identity of the underlying host object.
pub type PanelId = u64;

/// One tracked panel, as reported to consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRecord {
    pub id: PanelId,
    pub canonical_name: String,
    pub display_name: String,
    pub panel_type: PanelType,
    pub detected_by: DetectorKind,
    pub filters_navigation: bool,
}

impl PanelRecord {
    pub fn new(id: PanelId, canonical_name: &str, detected_by: DetectorKind) -> Self {
        let panel_type = classify_panel(canonical_name);
        Self {
            id,
            canonical_name: canonical_name.to_string(),
            display_name: display_name_for(canonical_name).to_string(),
            panel_type,
            detected_by,
            filters_navigation: panel_type.filters_navigation(),
        }
    }

    pub fn stack_priority(&self) -> u32 {
        self.panel_type.stack_priority()
    }
}

/// Derive the panel type from a canonical name.
///
/// Match order matters: `settings` and `social` are checked before the
/// generic `popup` substring so a "SettingsPopup" family classifies by
/// its more specific role.
pub fn classify_panel(name: &str) -> PanelType {
    let lower = name.to_ascii_lowercase();
    if lower.contains("settings") {
        PanelType::Settings
    } else if lower.contains("social") {
        PanelType::Social
    } else if lower.contains("popup") {
        PanelType::Popup
    } else if lower.contains("blade") {
        PanelType::Blade
    } else if lower.contains("overlay") {
        PanelType::Overlay
    } else {
        PanelType::Content
    }
}

/// Canonical prefab name to screen-reader-friendly name. Names missing
/// from the table fall back to the canonical name.
static DISPLAY_NAMES: &[(&str, &str)] = &[
    ("SettingsMenu", "Settings"),
    ("SocialPanel", "Friends and chat"),
    ("PopupBase", "Dialog"),
    ("GenericPopup", "Dialog"),
    ("RewardPopup", "Rewards"),
    ("DeckBuilderBlade", "Deck builder"),
    ("StoreBlade", "Store"),
    ("ProfileBlade", "Profile"),
    ("EventOverlay", "Event"),
    ("TutorialOverlay", "Tutorial"),
];

pub fn display_name_for(name: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(canonical, _)| canonical.eq_ignore_ascii_case(name))
        .map(|(_, friendly)| *friendly)
        .unwrap_or(name)
}
