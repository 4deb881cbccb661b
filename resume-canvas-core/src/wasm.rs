//! WebAssembly bindings for resume-canvas-core.
//!
//! Every value crosses the boundary as JSON so the browser host keeps its
//! own `StructuredResume` shape.

use wasm_bindgen::prelude::*;

use crate::prompt::FixedText;
use crate::{
    AlignDirection, CanvasEngine, ElementId, StructuredResume, TemplateId, ThemeOverrides,
};

/// Initialize the canvas WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Canvas instance for WASM.
#[wasm_bindgen]
pub struct WasmCanvas {
    engine: CanvasEngine,
}

#[wasm_bindgen]
impl WasmCanvas {
    /// Create a canvas showing the starter résumé with the default template.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: CanvasEngine::new(StructuredResume::initial(), TemplateId::default(), None),
        }
    }

    /// Deliver résumé data, template name and overrides from the host.
    /// Returns `false` when the delivery echoed the last emitted snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error string if the data or overrides are not valid JSON.
    #[wasm_bindgen(js_name = setData)]
    pub fn set_data(
        &mut self,
        data_json: &str,
        template: &str,
        overrides_json: Option<String>,
    ) -> Result<bool, String> {
        let data = StructuredResume::from_json(data_json).map_err(|e| e.to_string())?;
        let overrides = overrides_json
            .filter(|json| !json.trim().is_empty())
            .map(|json| serde_json::from_str::<ThemeOverrides>(&json))
            .transpose()
            .map_err(|e| e.to_string())?;
        Ok(self
            .engine
            .sync_external(data, TemplateId::resolve(template), overrides))
    }

    /// Pointer pressed at page coordinates.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.engine.pointer_down(x, y);
    }

    /// Pointer moved to page coordinates.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.engine.pointer_move(x, y);
    }

    /// Pointer released. Returns `true` if a snapshot was emitted.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> bool {
        self.engine.pointer_up()
    }

    /// Id of the element under the pointer, for the host's edit prompt.
    #[wasm_bindgen(js_name = elementAt)]
    #[must_use]
    pub fn element_at(&self, x: f32, y: f32) -> Option<String> {
        self.engine
            .scene()
            .element_at(x, y)
            .map(|id| id.as_str().to_string())
    }

    /// Replace an element's text with what the host prompt returned.
    ///
    /// # Errors
    ///
    /// Returns an error string if no element has this id.
    #[wasm_bindgen(js_name = editText)]
    pub fn edit_text(&mut self, id: &str, text: String) -> Result<(), String> {
        self.engine
            .edit_text(&ElementId::new(id), &mut FixedText(text))
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    /// Align the selected element: `left`, `center` or `right`.
    ///
    /// # Errors
    ///
    /// Returns an error string for an unknown direction.
    pub fn align(&mut self, direction: &str) -> Result<bool, String> {
        let direction: AlignDirection =
            serde_json::from_value(serde_json::Value::String(direction.to_string()))
                .map_err(|e| e.to_string())?;
        Ok(self.engine.align_selection(direction))
    }

    /// Live elements as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = getElementsJson)]
    pub fn get_elements_json(&self) -> Result<String, String> {
        serde_json::to_string(self.engine.elements()).map_err(|e| e.to_string())
    }

    /// Paint commands as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = getDrawListJson)]
    pub fn get_draw_list_json(&self, show_grid: bool) -> Result<String, String> {
        serde_json::to_string(&self.engine.draw_list(show_grid)).map_err(|e| e.to_string())
    }

    /// Last known résumé data (the last emitted snapshot after an edit).
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails.
    #[wasm_bindgen(js_name = getDataJson)]
    pub fn get_data_json(&self) -> Result<String, String> {
        serde_json::to_string(self.engine.data()).map_err(|e| e.to_string())
    }

    /// Id of the selected element.
    #[wasm_bindgen(js_name = selectedId)]
    #[must_use]
    pub fn selected_id(&self) -> Option<String> {
        self.engine.selected_id().map(|id| id.as_str().to_string())
    }
}

impl Default for WasmCanvas {
    fn default() -> Self {
        Self::new()
    }
}
