//! Tests for the panel reconciler.

use std::rc::Rc;

use herald_types::{DetectorKind, PanelType};

use super::reconciler::{PanelReconciler, PanelTransition};
use super::testing::FakePanel;

fn open_panel(
    reconciler: &mut PanelReconciler,
    panel: &Rc<FakePanel>,
    detector: DetectorKind,
) {
    reconciler.report_open(panel.id, &panel.name, detector, panel.as_handle());
}

#[test]
fn test_open_then_close_by_owning_detector() {
    let mut reconciler = PanelReconciler::new();
    let panel = FakePanel::new(1, "SettingsMenu");

    open_panel(&mut reconciler, &panel, DetectorKind::ReflectionPoll);
    assert!(reconciler.is_visible(1));

    reconciler.report_close_by_id(1, DetectorKind::ReflectionPoll);
    assert!(!reconciler.is_visible(1));

    let transitions = reconciler.take_transitions();
    assert_eq!(transitions.len(), 2);
    assert!(matches!(&transitions[0], PanelTransition::Opened(r) if r.id == 1));
    assert!(matches!(&transitions[1], PanelTransition::Closed { id: 1, .. }));
}

#[test]
fn test_non_owning_detector_open_is_rejected() {
    let mut reconciler = PanelReconciler::new();
    let panel = FakePanel::new(1, "SettingsMenu");

    // SettingsMenu belongs to the reflection source.
    open_panel(&mut reconciler, &panel, DetectorKind::AlphaPoll);
    assert_eq!(reconciler.visible_count(), 0);
    assert!(reconciler.take_transitions().is_empty());
}

#[test]
fn test_non_owning_detector_close_is_rejected() {
    let mut reconciler = PanelReconciler::new();
    let panel = FakePanel::new(1, "GenericPopup");

    open_panel(&mut reconciler, &panel, DetectorKind::AlphaPoll);
    reconciler.report_close_by_id(1, DetectorKind::ReflectionPoll);
    assert!(reconciler.is_visible(1));
}

#[test]
fn test_double_open_keeps_one_record() {
    let mut reconciler = PanelReconciler::new();
    let panel = FakePanel::new(1, "GenericPopup");

    open_panel(&mut reconciler, &panel, DetectorKind::AlphaPoll);
    open_panel(&mut reconciler, &panel, DetectorKind::AlphaPoll);
    assert_eq!(reconciler.visible_count(), 1);
    assert_eq!(reconciler.take_transitions().len(), 1);
}

#[test]
fn test_close_by_name_matches_owning_detector() {
    let mut reconciler = PanelReconciler::new();
    let panel = FakePanel::new(1, "StoreBlade");

    open_panel(&mut reconciler, &panel, DetectorKind::PatchHook);
    reconciler.report_close_by_name("storeblade", DetectorKind::PatchHook);
    assert_eq!(reconciler.visible_count(), 0);
}

#[test]
fn test_close_of_untracked_panel_is_a_no_op() {
    let mut reconciler = PanelReconciler::new();
    reconciler.report_close_by_id(42, DetectorKind::AlphaPoll);
    reconciler.report_close_by_name("GenericPopup", DetectorKind::AlphaPoll);
    assert!(reconciler.take_transitions().is_empty());
}

#[test]
fn test_stale_reference_synthesizes_exactly_one_close() {
    let mut reconciler = PanelReconciler::new();
    let panel = FakePanel::new(1, "GenericPopup");

    open_panel(&mut reconciler, &panel, DetectorKind::AlphaPoll);
    reconciler.take_transitions();

    // Underlying object destroyed without a close signal.
    panel.alive.set(false);
    reconciler.validate();
    reconciler.validate();

    let transitions = reconciler.take_transitions();
    assert_eq!(
        transitions,
        vec![PanelTransition::Closed {
            id: 1,
            name: "GenericPopup".to_string()
        }]
    );
    assert_eq!(reconciler.visible_count(), 0);
}

#[test]
fn test_validate_keeps_live_panels() {
    let mut reconciler = PanelReconciler::new();
    let panel = FakePanel::new(1, "GenericPopup");

    open_panel(&mut reconciler, &panel, DetectorKind::AlphaPoll);
    reconciler.validate();
    assert!(reconciler.is_visible(1));
}

#[test]
fn test_frontmost_follows_stack_priority() {
    let mut reconciler = PanelReconciler::new();
    let blade = FakePanel::new(1, "StoreBlade");
    let settings = FakePanel::new(2, "SettingsMenu");
    let popup = FakePanel::new(3, "GenericPopup");

    open_panel(&mut reconciler, &blade, DetectorKind::PatchHook);
    open_panel(&mut reconciler, &settings, DetectorKind::ReflectionPoll);
    assert_eq!(
        reconciler.frontmost().map(|r| r.panel_type),
        Some(PanelType::Settings)
    );

    open_panel(&mut reconciler, &popup, DetectorKind::AlphaPoll);
    assert_eq!(
        reconciler.frontmost().map(|r| r.panel_type),
        Some(PanelType::Popup)
    );
}

#[test]
fn test_record_derivation() {
    let mut reconciler = PanelReconciler::new();
    let panel = FakePanel::new(7, "SettingsMenu");

    open_panel(&mut reconciler, &panel, DetectorKind::ReflectionPoll);
    let record = reconciler.frontmost().unwrap();
    assert_eq!(record.display_name, "Settings");
    assert_eq!(record.panel_type, PanelType::Settings);
    assert!(record.filters_navigation);
    assert_eq!(record.detected_by, DetectorKind::ReflectionPoll);
}

#[test]
fn test_reset_discards_state_without_transitions() {
    let mut reconciler = PanelReconciler::new();
    let panel = FakePanel::new(1, "GenericPopup");

    open_panel(&mut reconciler, &panel, DetectorKind::AlphaPoll);
    reconciler.reset();
    assert_eq!(reconciler.visible_count(), 0);
    assert!(reconciler.take_transitions().is_empty());
}
