//! Local UI chrome state (canvas mode, assist overlay, add animation).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of `BuilderState` so exported
//! markup never depends on how the canvas is currently being viewed.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How canvas cards are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CanvasMode {
    /// Inline inputs with a remove button per element.
    #[default]
    Edit,
    /// Rendered markup and live interactive widgets.
    Preview,
}

/// UI state for the canvas mode and overlays. The two flags are independent.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub assist_visible: bool,
    pub preview_visible: bool,
    /// Bumped on every successful add; the canvas replays its burst when it changes.
    pub celebrate_seq: u64,
}

impl UiState {
    #[must_use]
    pub fn canvas_mode(&self) -> CanvasMode {
        if self.preview_visible { CanvasMode::Preview } else { CanvasMode::Edit }
    }

    pub fn toggle_preview(&mut self) {
        self.preview_visible = !self.preview_visible;
    }

    pub fn open_assist(&mut self) {
        self.assist_visible = true;
    }

    pub fn close_assist(&mut self) {
        self.assist_visible = false;
    }

    pub fn celebrate(&mut self) {
        self.celebrate_seq = self.celebrate_seq.saturating_add(1);
    }
}
