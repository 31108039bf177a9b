//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `builder` is the element model that export
//! reads, `ui` is presentation-only chrome.

pub mod builder;
pub mod ui;
