//! Integration tests for the page interaction model.

use std::time::Duration;

use hostpane_core::FxConfig;
use hostpane_core::model::{InteractionEvent, PageModel, Region, VisualPatch};
use hostpane_core::slide::SlideState;
use pretty_assertions::assert_eq;

const FRAME: Duration = Duration::from_millis(16);

fn settle(model: &mut PageModel) -> Vec<VisualPatch> {
    let mut all = Vec::new();
    for _ in 0..64 {
        all.extend(model.tick(FRAME));
    }
    all
}

fn full_page() -> PageModel {
    PageModel::new(FxConfig::default())
        .with_panel()
        .with_region(Region::Switches, 0.5)
        .with_region(Region::HostServices, 0.5)
}

#[test]
fn panel_starts_hidden_before_any_interaction() {
    let model = full_page();
    assert_eq!(model.panel_state(), Some(SlideState::Hidden));
    assert_eq!(
        model.initial_patches(),
        vec![
            VisualPatch::PanelVisible { visible: false },
            VisualPatch::PanelProgress { fraction: 0.0 },
        ]
    );
}

#[test]
fn toggle_is_its_own_inverse() {
    let mut model = full_page();

    model.apply(InteractionEvent::ToggleClicked);
    settle(&mut model);
    assert_eq!(model.panel_state(), Some(SlideState::Open));

    model.apply(InteractionEvent::ToggleClicked);
    let patches = settle(&mut model);
    assert_eq!(model.panel_state(), Some(SlideState::Hidden));
    assert_eq!(
        patches.last(),
        Some(&VisualPatch::PanelVisible { visible: false }),
        "the hide edge should be the final panel patch"
    );
}

#[test]
fn hover_targets_and_region_independence() {
    let mut model = full_page();

    model.apply(InteractionEvent::PointerEnter(Region::Switches));
    settle(&mut model);
    assert_eq!(model.region_opacity(Region::Switches), Some(1.0));
    assert_eq!(model.region_opacity(Region::HostServices), Some(0.5));

    model.apply(InteractionEvent::PointerLeave(Region::Switches));
    settle(&mut model);
    assert_eq!(model.region_opacity(Region::Switches), Some(0.5));
    assert_eq!(model.region_opacity(Region::HostServices), Some(0.5));
}

#[test]
fn rapid_alternation_lands_on_last_event() {
    let mut model = full_page();
    for _ in 0..20 {
        model.apply(InteractionEvent::PointerEnter(Region::HostServices));
        model.tick(Duration::from_millis(3));
        model.apply(InteractionEvent::PointerLeave(Region::HostServices));
        model.tick(Duration::from_millis(3));
    }
    settle(&mut model);
    assert_eq!(model.region_opacity(Region::HostServices), Some(0.5));

    model.apply(InteractionEvent::PointerEnter(Region::HostServices));
    settle(&mut model);
    assert_eq!(model.region_opacity(Region::HostServices), Some(1.0));
}

#[test]
fn hover_does_not_disturb_panel() {
    let mut model = full_page();
    model.apply(InteractionEvent::PointerEnter(Region::Switches));
    settle(&mut model);
    assert_eq!(model.panel_state(), Some(SlideState::Hidden));
}

#[test]
fn missing_parts_are_tolerated() {
    // A page with no toggle control and no regions still initializes and
    // accepts every event without failing.
    let mut model = PageModel::new(FxConfig::default());
    model.apply(InteractionEvent::ToggleClicked);
    model.apply(InteractionEvent::PointerEnter(Region::Switches));
    assert!(model.is_idle());
    assert_eq!(model.tick(FRAME), vec![]);
    assert_eq!(model.panel_state(), None);
    assert_eq!(model.region_opacity(Region::Switches), None);
}

#[test]
fn custom_timings_and_bounds_are_honored() {
    let config = FxConfig::default()
        .with_slide_duration(Duration::from_millis(100))
        .with_fade_duration(Duration::from_millis(100))
        .with_opacity_bounds(0.25, 0.75);
    let mut model = PageModel::new(config)
        .with_panel()
        .with_region(Region::Switches, 0.25);

    model.apply(InteractionEvent::ToggleClicked);
    for _ in 0..8 {
        model.tick(FRAME);
    }
    assert_eq!(model.panel_state(), Some(SlideState::Open));

    model.apply(InteractionEvent::PointerEnter(Region::Switches));
    for _ in 0..8 {
        model.tick(FRAME);
    }
    assert_eq!(model.region_opacity(Region::Switches), Some(0.75));
}

#[test]
fn idle_model_emits_no_patches_until_next_event() {
    let mut model = full_page();
    model.apply(InteractionEvent::ToggleClicked);
    settle(&mut model);
    assert!(model.is_idle());
    assert_eq!(model.tick(FRAME), vec![]);

    model.apply(InteractionEvent::ToggleClicked);
    assert!(!model.is_idle());
    assert!(!settle(&mut model).is_empty());
}
