use super::*;

fn contents(state: &BuilderState) -> Vec<&str> {
    state.elements.iter().map(|el| el.content.as_str()).collect()
}

// =============================================================
// BuilderState defaults
// =============================================================

#[test]
fn builder_state_default_is_empty_with_first_theme() {
    let state = BuilderState::default();
    assert!(state.is_empty());
    assert_eq!(state.current_theme, ThemeKind::Cosmic);
    assert_eq!(state.markup(), "");
}

// =============================================================
// add
// =============================================================

#[test]
fn add_known_key_appends_one_element_at_the_end() {
    let mut state = BuilderState::default();
    let first = state.add("TextBlock").expect("known key");
    let second = state.add("VideoEmbed").expect("known key");

    assert_eq!(state.len(), 2);
    assert_eq!(state.elements[0].id, first);
    assert_eq!(state.elements[1].id, second);
    assert_eq!(state.elements[1].kind, ComponentKind::VideoEmbed);
}

#[test]
fn add_uses_default_content_and_current_theme() {
    let mut state = BuilderState::default();
    state.select_theme(ThemeKind::Organic);
    let id = state.add("ImageCanvas").expect("known key");

    let el = state.get(&id).expect("element present");
    assert_eq!(el.content, "https://picsum.photos/400/300");
    assert_eq!(el.theme, ThemeKind::Organic);
}

#[test]
fn add_unknown_key_is_a_no_op() {
    let mut state = BuilderState::default();
    state.add("TextBlock");
    assert!(state.add("Carousel").is_none());
    assert!(state.add("").is_none());
    assert_eq!(state.len(), 1);
}

#[test]
fn add_generates_unique_prefixed_ids() {
    let mut state = BuilderState::default();
    for _ in 0..50 {
        state.add_kind(ComponentKind::TextBlock);
    }
    let mut ids = state.ids();
    assert!(ids.iter().all(|id| id.starts_with("element-")));
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

// =============================================================
// update
// =============================================================

#[test]
fn update_changes_only_the_target_element() {
    let mut state = BuilderState::default();
    let a = state.add_kind(ComponentKind::TextBlock);
    let b = state.add_kind(ComponentKind::InteractiveSection);
    let c = state.add_kind(ComponentKind::TextBlock);

    assert!(state.update(&b, "Edited"));

    assert_eq!(state.ids(), vec![a, b, c]);
    assert_eq!(contents(&state), vec!["✨ Enchanted Words", "Edited", "✨ Enchanted Words"]);
}

#[test]
fn update_absent_id_is_a_no_op() {
    let mut state = BuilderState::default();
    state.add_kind(ComponentKind::TextBlock);
    let before = state.elements.clone();

    assert!(!state.update("element-missing", "nope"));
    assert_eq!(state.elements, before);
}

#[test]
fn update_accepts_empty_content() {
    let mut state = BuilderState::default();
    let id = state.add_kind(ComponentKind::TextBlock);
    assert!(state.update(&id, ""));
    assert_eq!(state.get(&id).map(|el| el.content.as_str()), Some(""));
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_present_id_shrinks_by_one_and_keeps_order() {
    let mut state = BuilderState::default();
    let a = state.add_kind(ComponentKind::TextBlock);
    let b = state.add_kind(ComponentKind::ImageCanvas);
    let c = state.add_kind(ComponentKind::VideoEmbed);

    assert!(state.remove(&b));
    assert_eq!(state.ids(), vec![a, c]);
}

#[test]
fn remove_absent_id_is_a_no_op() {
    let mut state = BuilderState::default();
    let a = state.add_kind(ComponentKind::TextBlock);
    assert!(!state.remove("element-missing"));
    assert_eq!(state.ids(), vec![a.clone()]);

    assert!(state.remove(&a));
    assert!(!state.remove(&a));
    assert!(state.is_empty());
}

// =============================================================
// select_theme
// =============================================================

#[test]
fn select_theme_does_not_touch_placed_elements() {
    let mut state = BuilderState::default();
    let cosmic = state.add_kind(ComponentKind::TextBlock);
    state.select_theme(ThemeKind::Retro);
    let retro = state.add_kind(ComponentKind::TextBlock);

    assert_eq!(state.get(&cosmic).map(|el| el.theme), Some(ThemeKind::Cosmic));
    assert_eq!(state.get(&retro).map(|el| el.theme), Some(ThemeKind::Retro));
    assert_eq!(state.current_theme, ThemeKind::Retro);
}

// =============================================================
// markup
// =============================================================

#[test]
fn markup_segments_track_element_count() {
    let mut state = BuilderState::default();
    state.add_kind(ComponentKind::TextBlock);
    state.add_kind(ComponentKind::VideoEmbed);
    state.add("Unknown");
    assert_eq!(markup::markup_segments(&state.elements).len(), 2);
}

#[test]
fn magic_text_add_edit_remove_round_trip() {
    let mut state = BuilderState::default();

    let id = state.add("TextBlock").expect("Magic Text is registered");
    assert_eq!(state.len(), 1);
    assert!(state.markup().contains("Enchanted Words"));

    assert!(state.update(&id, "Hello"));
    let html = state.markup();
    assert!(html.contains("Hello"));
    assert!(!html.contains("Enchanted Words"));

    assert!(state.remove(&id));
    assert_eq!(state.len(), 0);
    assert_eq!(state.markup(), "");
}
