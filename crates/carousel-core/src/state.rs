//! Editor state and the mutation API.
//!
//! Every operation is total: references to missing slides or elements are
//! no-ops and never write history. Checkpointed operations record the state
//! before they mutate it.

use crate::config::{CanvasSize, EditorConfig};
use crate::element::{Element, ElementId, ElementPatch};
use crate::history::{History, HistoryEntry};
use crate::slide::{Background, Slide};
use crate::theme::Theme;

/// Root aggregate of an editing session.
#[derive(Debug, Clone)]
pub struct EditorState {
    slides: Vec<Slide>,
    active_slide_index: usize,
    selected_element_id: Option<ElementId>,
    theme: Theme,
    canvas_size: CanvasSize,
    page_name: String,
    history: History,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorState {
    /// Start a session with one blank slide in the configured theme.
    pub fn new(config: EditorConfig) -> Self {
        let slide = Slide::new(config.theme.background.clone());
        Self {
            slides: vec![slide],
            active_slide_index: 0,
            selected_element_id: None,
            theme: config.theme,
            canvas_size: config.canvas_size,
            page_name: config.page_name,
            history: History::new(config.history_limit),
        }
    }

    // --- Read access ---

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_slide_index(&self) -> usize {
        self.active_slide_index
    }

    pub fn selected_element_id(&self) -> Option<ElementId> {
        self.selected_element_id
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn canvas_size(&self) -> &CanvasSize {
        &self.canvas_size
    }

    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The slide being edited.
    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.active_slide_index]
    }

    fn active_slide_mut(&mut self) -> &mut Slide {
        &mut self.slides[self.active_slide_index]
    }

    /// The selected element, looked up on the active slide. Stale ids yield `None`.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_element_id
            .and_then(|id| self.active_slide().element(id))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- History ---

    fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            slides: self.slides.clone(),
            active_slide_index: self.active_slide_index,
        }
    }

    fn restore(&mut self, entry: HistoryEntry) {
        self.slides = entry.slides;
        self.active_slide_index = entry.active_slide_index;
        self.selected_element_id = None;
    }

    /// Record the current state in history. Call before mutating.
    pub fn checkpoint(&mut self) {
        let entry = self.snapshot();
        self.history.checkpoint(entry);
        log::trace!("Checkpoint ({} entries)", self.history.len());
    }

    /// Undo the last checkpointed change. Returns true if anything was restored.
    pub fn undo(&mut self) -> bool {
        let current = || HistoryEntry {
            slides: self.slides.clone(),
            active_slide_index: self.active_slide_index,
        };
        match self.history.undo(current) {
            Some(entry) => {
                self.restore(entry);
                log::debug!("Undo");
                true
            }
            None => false,
        }
    }

    /// Redo the last undone change. Returns true if anything was restored.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(entry) => {
                self.restore(entry);
                log::debug!("Redo");
                true
            }
            None => false,
        }
    }

    // --- Slides ---

    /// Append a blank slide in the current theme's background and activate it.
    pub fn add_slide(&mut self) {
        self.checkpoint();
        self.slides.push(Slide::new(self.theme.background.clone()));
        self.active_slide_index = self.slides.len() - 1;
        log::debug!("Added slide {}", self.active_slide_index);
    }

    /// Append a deep copy of `template` with fresh ids and activate it.
    pub fn add_slide_from_template(&mut self, template: &Slide) {
        self.checkpoint();
        self.slides.push(template.instantiate());
        self.active_slide_index = self.slides.len() - 1;
        log::debug!("Added slide {} from template", self.active_slide_index);
    }

    /// Insert a copy of slide `index` right after it and activate the copy.
    pub fn duplicate_slide(&mut self, index: usize) {
        let Some(copy) = self.slides.get(index).map(Slide::instantiate) else {
            log::warn!("Cannot duplicate slide {index}: out of range");
            return;
        };
        self.checkpoint();
        self.slides.insert(index + 1, copy);
        self.active_slide_index = index + 1;
        log::debug!("Duplicated slide {index}");
    }

    /// Remove slide `index`. The last remaining slide is never removed.
    pub fn delete_slide(&mut self, index: usize) {
        if self.slides.len() <= 1 {
            log::warn!("Refusing to delete the only slide");
            return;
        }
        if index >= self.slides.len() {
            log::warn!("Cannot delete slide {index}: out of range");
            return;
        }
        self.checkpoint();
        self.slides.remove(index);
        self.active_slide_index = self.active_slide_index.min(self.slides.len() - 1);
        self.selected_element_id = None;
        log::debug!("Deleted slide {index}");
    }

    /// Switch the active slide. Selection is always cleared.
    pub fn set_active_slide(&mut self, index: usize) {
        if index >= self.slides.len() {
            log::warn!("Cannot activate slide {index}: out of range");
            return;
        }
        self.active_slide_index = index;
        self.selected_element_id = None;
    }

    /// Replace the active slide's background.
    pub fn update_slide_background(&mut self, background: Background) {
        self.checkpoint();
        self.active_slide_mut().background = background;
        log::debug!("Updated background of slide {}", self.active_slide_index);
    }

    /// Replace the theme and restamp every slide's background and palette.
    pub fn set_theme(&mut self, theme: Theme) {
        self.checkpoint();
        let palette = theme.palette();
        for slide in &mut self.slides {
            slide.background = theme.background.clone();
            slide.palette = Some(palette.clone());
        }
        log::debug!("Applied theme {}", theme.id);
        self.theme = theme;
    }

    /// Replace the canvas dimensions. Elements keep their coordinates.
    pub fn set_canvas_size(&mut self, canvas_size: CanvasSize) {
        self.checkpoint();
        log::debug!(
            "Canvas size {}x{} ({})",
            canvas_size.width,
            canvas_size.height,
            canvas_size.name
        );
        self.canvas_size = canvas_size;
    }

    pub fn set_page_name(&mut self, page_name: impl Into<String>) {
        self.page_name = page_name.into();
    }

    // --- Elements ---

    /// Append an element to the active slide under a fresh id and select it.
    pub fn add_element(&mut self, element: Element) -> ElementId {
        self.checkpoint();
        let element = element.duplicate();
        let id = element.id;
        log::debug!("Added {:?} element {id}", element.kind);
        self.active_slide_mut().elements.push(element);
        self.selected_element_id = Some(id);
        id
    }

    /// Merge `patch` into an element on the active slide without writing history.
    /// Returns false if the element does not exist.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        match self.active_slide_mut().element_mut(id) {
            Some(element) => {
                element.apply_patch(patch);
                log::trace!("Updated element {id}");
                true
            }
            None => false,
        }
    }

    /// Checkpoint, then merge `patch` into an element on the active slide.
    pub fn update_element_with_history(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        if self.active_slide().element(id).is_none() {
            log::warn!("Cannot update element {id}: not on the active slide");
            return false;
        }
        self.checkpoint();
        log::debug!("Updated element {id} with history");
        self.update_element(id, patch)
    }

    /// Remove an element from the active slide and clear the selection.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        if self.active_slide().element(id).is_none() {
            log::warn!("Cannot delete element {id}: not on the active slide");
            return false;
        }
        self.checkpoint();
        self.active_slide_mut().remove_element(id);
        self.selected_element_id = None;
        log::debug!("Deleted element {id}");
        true
    }

    /// Set or clear the selection. The id is not checked for existence.
    pub fn select_element(&mut self, id: Option<ElementId>) {
        self.selected_element_id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{StylePatch, TextStyle};
    use kurbo::{Point, Size};

    fn text(content: &str) -> Element {
        Element::text(
            Point::new(540.0, 540.0),
            Size::new(600.0, 60.0),
            content,
            TextStyle::new(16.0, 400, "#fff"),
        )
    }

    #[test]
    fn test_initial_state() {
        let state = EditorState::default();
        assert_eq!(state.slides().len(), 1);
        assert_eq!(state.active_slide_index(), 0);
        assert!(state.active_slide().is_empty());
        assert_eq!(state.active_slide().background, Theme::default().background);
        assert_eq!(state.page_name(), "@yourusername");
        assert!(!state.can_undo());
        assert!(!state.can_redo());
    }

    #[test]
    fn test_add_element_then_undo() {
        let mut state = EditorState::default();
        let id = state.add_element(text("Hi"));
        assert_eq!(state.active_slide().len(), 1);
        assert_eq!(state.selected_element_id(), Some(id));
        assert!(state.can_undo());

        assert!(state.undo());
        assert!(state.active_slide().is_empty());
        assert!(state.selected_element_id().is_none());
        assert!(state.can_redo());

        assert!(state.redo());
        assert_eq!(state.active_slide().elements[0].id, id);
    }

    #[test]
    fn test_add_element_assigns_fresh_id() {
        let mut state = EditorState::default();
        let element = text("Hi");
        let original = element.id;
        let id = state.add_element(element);
        assert_ne!(id, original);
    }

    #[test]
    fn test_inverse_law() {
        let mut state = EditorState::default();
        let initial = state.slides().to_vec();

        state.add_slide();
        let id = state.add_element(text("one"));
        state.update_element_with_history(id, &ElementPatch::position(Point::new(10.0, 10.0)));
        state.update_slide_background(Background::solid("#ff0000"));
        state.duplicate_slide(1);
        let after = state.slides().to_vec();

        for _ in 0..5 {
            assert!(state.undo());
        }
        assert!(!state.can_undo());
        assert_eq!(state.slides(), initial.as_slice());

        for _ in 0..5 {
            assert!(state.redo());
        }
        assert!(!state.can_redo());
        assert_eq!(state.slides(), after.as_slice());
    }

    #[test]
    fn test_checkpoint_then_direct_mutation() {
        let mut state = EditorState::default();
        let before = state.slides().to_vec();
        state.checkpoint();
        state.slides[0].background = Background::solid("#123456");

        assert!(state.undo());
        assert_eq!(state.slides(), before.as_slice());
    }

    #[test]
    fn test_new_mutation_discards_redo() {
        let mut state = EditorState::default();
        state.add_slide();
        state.add_slide();
        state.undo();
        assert!(state.can_redo());

        state.update_slide_background(Background::solid("#000000"));
        assert!(!state.can_redo());
        assert!(!state.redo());
    }

    #[test]
    fn test_history_bound() {
        let mut state = EditorState::default();
        for _ in 0..60 {
            state.add_slide();
        }
        assert_eq!(state.history().len(), 50);
        // Oldest surviving entry was recorded before the 11th add.
        assert_eq!(state.history().oldest().unwrap().slides.len(), 11);
    }

    #[test]
    fn test_style_merge() {
        let mut state = EditorState::default();
        let id = state.add_element(text("Hi"));
        state.update_element(
            id,
            &ElementPatch::new().with_style(StylePatch {
                font_size: Some(20.0),
                ..StylePatch::default()
            }),
        );
        let style = state.selected_element().unwrap().style.clone().unwrap();
        assert!((style.font_size - 20.0).abs() < f64::EPSILON);
        assert_eq!(style.color, "#fff");
    }

    #[test]
    fn test_silent_update_does_not_checkpoint() {
        let mut state = EditorState::default();
        let id = state.add_element(text("Hi"));
        let entries = state.history().len();
        state.update_element(id, &ElementPatch::new().with_content("Hello"));
        assert_eq!(state.history().len(), entries);
    }

    #[test]
    fn test_delete_only_slide_is_refused() {
        let mut state = EditorState::default();
        state.delete_slide(0);
        assert_eq!(state.slides().len(), 1);
        assert!(!state.can_undo());
    }

    #[test]
    fn test_delete_slide_clamps_active_index() {
        let mut state = EditorState::default();
        state.add_slide();
        state.add_slide();
        assert_eq!(state.active_slide_index(), 2);
        state.delete_slide(2);
        assert_eq!(state.slides().len(), 2);
        assert_eq!(state.active_slide_index(), 1);
    }

    #[test]
    fn test_delete_slide_out_of_range() {
        let mut state = EditorState::default();
        state.add_slide();
        let entries = state.history().len();
        state.delete_slide(7);
        assert_eq!(state.slides().len(), 2);
        assert_eq!(state.history().len(), entries);
    }

    #[test]
    fn test_duplicate_slide() {
        let mut state = EditorState::default();
        state.add_element(text("a"));
        state.duplicate_slide(0);

        assert_eq!(state.slides().len(), 2);
        assert_eq!(state.active_slide_index(), 1);
        let (orig, copy) = (&state.slides()[0], &state.slides()[1]);
        assert_ne!(orig.id, copy.id);
        assert_ne!(orig.elements[0].id, copy.elements[0].id);
        assert_eq!(orig.elements[0].content, copy.elements[0].content);
    }

    #[test]
    fn test_set_active_slide_clears_selection() {
        let mut state = EditorState::default();
        state.add_slide();
        state.add_element(text("a"));
        state.set_active_slide(0);
        assert_eq!(state.active_slide_index(), 0);
        assert!(state.selected_element_id().is_none());

        state.set_active_slide(5);
        assert_eq!(state.active_slide_index(), 0);
    }

    #[test]
    fn test_set_theme_restamps_all_slides() {
        let mut state = EditorState::default();
        state.add_slide();
        state.update_slide_background(Background::solid("#ff0000"));

        let light = Theme::light();
        state.set_theme(light.clone());
        for slide in state.slides() {
            assert_eq!(slide.background, light.background);
            assert_eq!(slide.palette.as_ref(), Some(&light.palette()));
        }
        assert_eq!(state.theme().id, light.id);
    }

    #[test]
    fn test_set_canvas_size_keeps_elements() {
        let mut state = EditorState::default();
        let id = state.add_element(text("a"));
        state.update_element(id, &ElementPatch::position(Point::new(1000.0, 1000.0)));
        state.set_canvas_size(CanvasSize::new(500.0, 500.0, "Small"));
        assert_eq!(state.active_slide().elements[0].center(), Point::new(1000.0, 1000.0));
    }

    #[test]
    fn test_delete_element_clears_selection() {
        let mut state = EditorState::default();
        let id = state.add_element(text("a"));
        assert!(state.delete_element(id));
        assert!(state.active_slide().is_empty());
        assert!(state.selected_element_id().is_none());
        assert!(!state.delete_element(id));
    }

    #[test]
    fn test_unknown_element_update_is_noop() {
        let mut state = EditorState::default();
        let patch = ElementPatch::position(Point::ZERO);
        assert!(!state.update_element(uuid::Uuid::new_v4(), &patch));
        assert!(!state.update_element_with_history(uuid::Uuid::new_v4(), &patch));
        assert!(!state.can_undo());
    }

    #[test]
    fn test_stale_selection_is_tolerated() {
        let mut state = EditorState::default();
        state.select_element(Some(uuid::Uuid::new_v4()));
        assert!(state.selected_element_id().is_some());
        assert!(state.selected_element().is_none());
    }

    #[test]
    fn test_add_slide_from_template_fresh_ids() {
        let mut state = EditorState::default();
        let template = Slide::with_elements(Background::solid("#000"), vec![text("x"), text("y")]);
        state.add_slide_from_template(&template);
        state.add_slide_from_template(&template);

        let ids: Vec<_> = state.slides()[1..]
            .iter()
            .flat_map(|s| std::iter::once(s.id).chain(s.elements.iter().map(|e| e.id)))
            .collect();
        assert_eq!(ids.len(), 6);
        for id in &ids {
            assert_ne!(*id, template.id);
            assert!(template.elements.iter().all(|e| e.id != *id));
            assert_eq!(ids.iter().filter(|other| *other == id).count(), 1);
        }
        assert_eq!(state.active_slide_index(), 2);
    }

    #[test]
    fn test_set_page_name() {
        let mut state = EditorState::default();
        state.set_page_name("@rustacean");
        assert_eq!(state.page_name(), "@rustacean");
        assert!(!state.can_undo());
    }
}
