//! The live element collection of one canvas, with selection.

use serde::{Deserialize, Serialize};

use crate::{CanvasElement, CanvasError, CanvasResult, ElementId};

/// Ordered canvas elements plus the current selection.
///
/// Order is paint order: later elements are drawn above earlier ones and win
/// hit tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// All elements, in paint order.
    elements: Vec<CanvasElement>,
    /// Currently selected element, at most one.
    selected: Option<ElementId>,
}

impl Scene {
    /// Create a scene from projected elements with nothing selected.
    #[must_use]
    pub fn new(elements: Vec<CanvasElement>) -> Self {
        Self {
            elements,
            selected: None,
        }
    }

    /// Replace every element. The selection survives if its id still exists.
    pub fn replace_elements(&mut self, elements: Vec<CanvasElement>) {
        self.elements = elements;
        if let Some(id) = &self.selected {
            if self.get_element(id).is_none() {
                self.selected = None;
            }
        }
    }

    /// Get an element by ID.
    #[must_use]
    pub fn get_element(&self, id: &ElementId) -> Option<&CanvasElement> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn get_element_mut(&mut self, id: &ElementId) -> Option<&mut CanvasElement> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    /// All elements, in paint order.
    #[must_use]
    pub fn elements(&self) -> &[CanvasElement] {
        &self.elements
    }

    /// Find the topmost element containing the given page coordinates.
    #[must_use]
    pub fn element_at(&self, x: f32, y: f32) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.contains_point(x, y))
            .map(|e| e.id.clone())
    }

    /// Select an element, replacing any prior selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not found.
    pub fn select(&mut self, id: &ElementId) -> CanvasResult<()> {
        if self.get_element(id).is_none() {
            return Err(CanvasError::ElementNotFound(id.to_string()));
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        self.selected = None;
    }

    /// Id of the selected element.
    #[must_use]
    pub fn selected_id(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// The selected element.
    #[must_use]
    pub fn selected_element(&self) -> Option<&CanvasElement> {
        self.selected.as_ref().and_then(|id| self.get_element(id))
    }

    /// Get the number of elements in the scene.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Check if the scene is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serialize the scene to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CanvasResult<String> {
        serde_json::to_string(self).map_err(CanvasError::Serialization)
    }

    /// Deserialize a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        serde_json::from_str(json).map_err(CanvasError::Serialization)
    }
}
