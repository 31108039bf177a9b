//! Drag payload carried from a palette item to the canvas.
//!
//! The payload travels through the browser `DataTransfer` as JSON under a
//! private MIME type, so text dragged in from other pages never parses as a
//! component.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use serde::{Deserialize, Serialize};

/// MIME type used for component drags.
pub const DRAG_MIME: &str = "application/x-webbuilder-component";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    /// Component registry key.
    pub kind: String,
}

impl DragPayload {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// Serialize for `DataTransfer::set_data`.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a payload read back from a drop. Returns `None` for anything that
    /// is not a payload this module produced.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw.trim()).ok()
    }
}

/// Hover tracking for a drop target.
///
/// `dragenter`/`dragleave` also fire when the pointer crosses the target's own
/// children, so a single flag flickers off while still inside. Counting
/// enters against leaves keeps the target lit until the pointer really exits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropHover {
    depth: u32,
}

impl DropHover {
    pub fn enter(&mut self) {
        self.depth = self.depth.saturating_add(1);
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Drops end the drag without a matching `dragleave`.
    pub fn reset(&mut self) {
        self.depth = 0;
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.depth > 0
    }
}

/// Write the payload onto a drag-start event.
pub fn write_payload(ev: &leptos::ev::DragEvent, payload: &DragPayload) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data(DRAG_MIME, &payload.encode());
            transfer.set_effect_allowed("copy");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, payload);
    }
}

/// Read the payload from a drop event, if one is present.
pub fn read_payload(ev: &leptos::ev::DragEvent) -> Option<DragPayload> {
    #[cfg(feature = "hydrate")]
    {
        let raw = ev.data_transfer()?.get_data(DRAG_MIME).ok()?;
        DragPayload::decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}
