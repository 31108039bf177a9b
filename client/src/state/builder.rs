//! Builder state: the ordered list of placed elements and the active theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal` provided at the app root. Palette, canvas, and the
//! export panel all read and mutate this one model, so every edit is a single
//! read-modify-write inside one event handler.
//!
//! DESIGN
//! ======
//! Elements are addressed by id, never by position. Lookups that miss are
//! silent no-ops; the return values only exist so callers can react (e.g.
//! trigger the add animation) and so the behavior is testable.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

use crate::util::component_library::ComponentKind;
use crate::util::markup;
use crate::util::theme_palette::ThemeKind;

/// One element placed on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementInstance {
    /// Unique id (`element-<uuid>`), assigned at creation.
    pub id: String,
    pub kind: ComponentKind,
    /// User-editable content. Text for text-like kinds, a URL for media kinds.
    pub content: String,
    /// Theme captured when the element was created.
    pub theme: ThemeKind,
}

#[derive(Clone, Debug, Default)]
pub struct BuilderState {
    /// Placed elements in display and export order.
    pub elements: Vec<ElementInstance>,
    /// Theme applied to elements created from now on.
    pub current_theme: ThemeKind,
}

impl BuilderState {
    /// Append a new element of the component registered under `key`.
    ///
    /// Returns the new element id, or `None` when the key is unknown.
    pub fn add(&mut self, key: &str) -> Option<String> {
        let Some(kind) = ComponentKind::from_key(key) else {
            log::debug!("ignoring add for unknown component key {key:?}");
            return None;
        };
        Some(self.add_kind(kind))
    }

    /// Append a new element of `kind` with its default content.
    pub fn add_kind(&mut self, kind: ComponentKind) -> String {
        let id = next_element_id();
        self.elements.push(ElementInstance {
            id: id.clone(),
            kind,
            content: kind.descriptor().default_content.to_owned(),
            theme: self.current_theme,
        });
        log::debug!("added {} element {id} ({} total)", kind.key(), self.elements.len());
        id
    }

    /// Replace the content of element `id`. Returns whether it was found.
    pub fn update(&mut self, id: &str, content: impl Into<String>) -> bool {
        match self.elements.iter_mut().find(|el| el.id == id) {
            Some(el) => {
                el.content = content.into();
                true
            }
            None => false,
        }
    }

    /// Remove element `id`, keeping the order of the rest. Returns whether it
    /// was found.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|el| el.id != id);
        let removed = self.elements.len() != before;
        if removed {
            log::debug!("removed element {id} ({} left)", self.elements.len());
        }
        removed
    }

    /// Set the theme for subsequently created elements. Placed elements keep
    /// their own theme.
    pub fn select_theme(&mut self, theme: ThemeKind) {
        self.current_theme = theme;
    }

    pub fn get(&self, id: &str) -> Option<&ElementInstance> {
        self.elements.iter().find(|el| el.id == id)
    }

    /// Ids of all elements, in order.
    pub fn ids(&self) -> Vec<String> {
        self.elements.iter().map(|el| el.id.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Exported markup for the current canvas.
    pub fn markup(&self) -> String {
        markup::generate_markup(&self.elements)
    }
}

fn next_element_id() -> String {
    format!("element-{}", uuid::Uuid::new_v4())
}
