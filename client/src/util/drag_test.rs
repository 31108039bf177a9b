use super::*;

#[test]
fn encode_produces_kind_field() {
    let payload = DragPayload::new("TextBlock");
    assert_eq!(payload.encode(), r#"{"kind":"TextBlock"}"#);
}

#[test]
fn decode_reads_encoded_payload() {
    let raw = DragPayload::new("VideoEmbed").encode();
    assert_eq!(DragPayload::decode(&raw), Some(DragPayload::new("VideoEmbed")));
}

#[test]
fn decode_tolerates_surrounding_whitespace_and_extra_fields() {
    let decoded = DragPayload::decode("  {\"kind\":\"ImageCanvas\",\"from\":\"palette\"}\n");
    assert_eq!(decoded.map(|p| p.kind), Some("ImageCanvas".to_owned()));
}

#[test]
fn decode_rejects_plain_text_and_wrong_shape() {
    assert!(DragPayload::decode("TextBlock").is_none());
    assert!(DragPayload::decode("").is_none());
    assert!(DragPayload::decode(r#"{"type":"TextBlock"}"#).is_none());
    assert!(DragPayload::decode(r#"{"kind":42}"#).is_none());
}

#[test]
fn decode_keeps_unknown_kinds_for_the_caller_to_ignore() {
    let decoded = DragPayload::decode(r#"{"kind":"Carousel"}"#).expect("well-formed payload");
    assert_eq!(decoded.kind, "Carousel");
}

// =============================================================
// DropHover
// =============================================================

#[test]
fn drop_hover_starts_outside() {
    assert!(!DropHover::default().is_over());
}

#[test]
fn drop_hover_stays_lit_while_crossing_children() {
    let mut hover = DropHover::default();
    hover.enter(); // canvas
    hover.enter(); // card inside the canvas
    hover.leave(); // canvas reports leave as the pointer moves onto the card
    assert!(hover.is_over());
    hover.leave(); // card
    assert!(!hover.is_over());
}

#[test]
fn drop_hover_ignores_unmatched_leaves() {
    let mut hover = DropHover::default();
    hover.leave();
    assert!(!hover.is_over());
    hover.enter();
    assert!(hover.is_over());
}

#[test]
fn drop_hover_reset_clears_nested_depth() {
    let mut hover = DropHover::default();
    hover.enter();
    hover.enter();
    hover.reset();
    assert!(!hover.is_over());
    assert_eq!(hover, DropHover::default());
}
