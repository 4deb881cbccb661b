//! Interaction and reconciliation engine.
//!
//! The engine owns the live elements of one canvas. External data is
//! projected forward into elements; pointer gestures and text edits mutate
//! the elements and are projected back into a résumé snapshot that is
//! emitted to the host.
//!
//! ## Echo suppression
//!
//! Hosts usually store an emitted snapshot and hand it straight back as the
//! next external input. Re-projecting that echo would discard the geometry
//! the user just produced, so the engine marks its update source as
//! `Internal` when it emits and remembers what it emitted. The next external
//! delivery always resets the source to `External`; it is skipped only when
//! it carries exactly the emitted snapshot with unchanged template and
//! overrides. Anything else is new information and is projected. Starting a
//! new drag or resize also expires the pending echo, so a host that ignored
//! an emission can later re-send that snapshot to reset the layout.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::gesture::{aligned_x, drag_position, resize_frame};
use crate::inverse::inverse_project;
use crate::surface::{DrawCommand, Surface};
use crate::{
    AlignDirection, CanvasConfig, CanvasElement, CanvasError, CanvasResult, ElementId,
    GestureState, Guides, InputEvent, LayoutProjector, PointerEvent, PointerPhase, ResizeHandle,
    ResolvedTheme, Scene, StructuredResume, TemplateId, TextPrompt, ThemeOverrides,
};

/// Where the most recent data update came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateSource {
    /// The host delivered new data.
    #[default]
    External,
    /// The engine emitted a snapshot caused by a gesture or edit.
    Internal,
}

type ChangeListener = Box<dyn FnMut(&StructuredResume)>;

/// Stateful canvas session: live elements, selection, gesture and guides.
pub struct CanvasEngine {
    /// Distinguishes canvases in logs.
    instance: Uuid,
    projector: LayoutProjector,
    data: StructuredResume,
    template: TemplateId,
    overrides: Option<ThemeOverrides>,
    scene: Scene,
    gesture: GestureState,
    /// Whether the active gesture has changed any geometry yet.
    gesture_changed: bool,
    guides: Guides,
    source: UpdateSource,
    emitted: Option<StructuredResume>,
    listener: Option<ChangeListener>,
}

impl fmt::Debug for CanvasEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasEngine")
            .field("instance", &self.instance)
            .field("template", &self.template)
            .field("elements", &self.scene.element_count())
            .field("selected", &self.scene.selected_id())
            .field("gesture", &self.gesture)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl CanvasEngine {
    /// Create an engine with the default page configuration and project
    /// the initial data.
    #[must_use]
    pub fn new(
        data: StructuredResume,
        template: TemplateId,
        overrides: Option<ThemeOverrides>,
    ) -> Self {
        Self::build(CanvasConfig::default(), data, template, overrides)
    }

    /// Create an engine with a custom page configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidConfig`] if the configuration fails
    /// validation.
    pub fn with_config(
        config: CanvasConfig,
        data: StructuredResume,
        template: TemplateId,
        overrides: Option<ThemeOverrides>,
    ) -> CanvasResult<Self> {
        config.validate()?;
        Ok(Self::build(config, data, template, overrides))
    }

    fn build(
        config: CanvasConfig,
        data: StructuredResume,
        template: TemplateId,
        overrides: Option<ThemeOverrides>,
    ) -> Self {
        let projector = LayoutProjector::new(config);
        let elements = projector.project(&data, template, overrides.as_ref());
        let instance = Uuid::new_v4();
        tracing::debug!(%instance, %template, elements = elements.len(), "Canvas created");
        Self {
            instance,
            projector,
            data,
            template,
            overrides,
            scene: Scene::new(elements),
            gesture: GestureState::Idle,
            gesture_changed: false,
            guides: Guides::default(),
            source: UpdateSource::External,
            emitted: None,
            listener: None,
        }
    }

    /// Register the callback that receives every emitted snapshot.
    pub fn set_on_change(&mut self, listener: impl FnMut(&StructuredResume) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Identifier of this canvas instance.
    #[must_use]
    pub fn instance_id(&self) -> Uuid {
        self.instance
    }

    /// Page configuration.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        self.projector.config()
    }

    /// Live elements, in paint order.
    #[must_use]
    pub fn elements(&self) -> &[CanvasElement] {
        self.scene.elements()
    }

    /// Element and selection state.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Look up one element.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&CanvasElement> {
        self.scene.get_element(id)
    }

    /// Id of the selected element.
    #[must_use]
    pub fn selected_id(&self) -> Option<&ElementId> {
        self.scene.selected_id()
    }

    /// Current gesture.
    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Alignment guides to draw.
    #[must_use]
    pub fn guides(&self) -> Guides {
        self.guides
    }

    /// Last known résumé data.
    #[must_use]
    pub fn data(&self) -> &StructuredResume {
        &self.data
    }

    /// Active template.
    #[must_use]
    pub fn template(&self) -> TemplateId {
        self.template
    }

    /// Active style overrides.
    #[must_use]
    pub fn overrides(&self) -> Option<&ThemeOverrides> {
        self.overrides.as_ref()
    }

    /// Source of the most recent update.
    #[must_use]
    pub fn update_source(&self) -> UpdateSource {
        self.source
    }

    /// The snapshot emitted most recently and not yet answered by an
    /// external delivery.
    #[must_use]
    pub fn pending_echo(&self) -> Option<&StructuredResume> {
        self.emitted.as_ref()
    }

    /// Colors and fonts in effect.
    #[must_use]
    pub fn theme(&self) -> ResolvedTheme {
        ResolvedTheme::resolve(self.template, self.overrides.as_ref())
    }

    /// Paint commands for the current scene, selection and guides.
    #[must_use]
    pub fn draw_list(&self, show_grid: bool) -> Vec<DrawCommand> {
        let theme = self.theme();
        Surface::new(self.config(), &theme)
            .with_grid(show_grid)
            .compose(&self.scene, self.guides)
    }

    /// Inverse-project the live elements onto the last known data.
    #[must_use]
    pub fn snapshot(&self) -> StructuredResume {
        inverse_project(self.scene.elements(), &self.data)
    }

    // -----------------------------------------------------------------------
    // External updates
    // -----------------------------------------------------------------------

    /// Deliver data, template and overrides from the host.
    ///
    /// Returns `true` if the elements were re-projected, `false` if the
    /// delivery was recognized as the echo of this engine's own emission.
    pub fn sync_external(
        &mut self,
        data: StructuredResume,
        template: TemplateId,
        overrides: Option<ThemeOverrides>,
    ) -> bool {
        let source = std::mem::take(&mut self.source);
        let emitted = self.emitted.take();
        let is_echo = source == UpdateSource::Internal
            && emitted.as_ref() == Some(&data)
            && template == self.template
            && overrides == self.overrides;

        self.data = data;
        self.template = template;
        self.overrides = overrides;

        if is_echo {
            tracing::debug!(instance = %self.instance, "Suppressed echo of emitted snapshot");
            return false;
        }

        self.reproject();
        true
    }

    fn reproject(&mut self) {
        let elements = self
            .projector
            .project(&self.data, self.template, self.overrides.as_ref());
        tracing::debug!(
            instance = %self.instance,
            elements = elements.len(),
            "Re-projected external data"
        );
        self.scene.replace_elements(elements);
        if let Some(element) = self.gesture.element() {
            if self.scene.get_element(element).is_none() {
                self.gesture = GestureState::Idle;
                self.guides.clear();
            }
        }
    }

    /// A new gesture means the host has had its turn; a later delivery of
    /// the old snapshot is deliberate and must be projected.
    fn forget_echo(&mut self) {
        if self.emitted.take().is_some() {
            tracing::trace!(instance = %self.instance, "Pending echo expired");
        }
        self.source = UpdateSource::External;
    }

    fn emit(&mut self) {
        let next = self.snapshot();
        self.source = UpdateSource::Internal;
        self.emitted = Some(next.clone());
        if let Some(listener) = self.listener.as_mut() {
            listener(&next);
        }
        self.data = next;
        tracing::debug!(instance = %self.instance, "Emitted snapshot");
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Select an element, replacing any prior selection.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ElementNotFound`] if no element has this id.
    pub fn select(&mut self, id: &ElementId) -> CanvasResult<()> {
        self.scene.select(id)
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.scene.deselect_all();
    }

    // -----------------------------------------------------------------------
    // Gestures
    // -----------------------------------------------------------------------

    /// Dispatch one input event. Double clicks consult `prompt`.
    pub fn handle_event(&mut self, event: &InputEvent, prompt: &mut dyn TextPrompt) {
        match event {
            InputEvent::Pointer(PointerEvent { phase, x, y }) => match phase {
                PointerPhase::Down => self.pointer_down(*x, *y),
                PointerPhase::Move => self.pointer_move(*x, *y),
                PointerPhase::Up => {
                    self.pointer_up();
                }
            },
            InputEvent::DoubleClick { x, y } => {
                self.double_click(*x, *y, prompt);
            }
            InputEvent::Align(direction) => {
                self.align_selection(*direction);
            }
        }
    }

    /// Corner handle of the selected element under the pointer, if any.
    #[must_use]
    pub fn handle_at(&self, x: f32, y: f32) -> Option<ResizeHandle> {
        let selected = self.scene.selected_element()?;
        let radius = self.config().handle_radius;
        ResizeHandle::ALL.into_iter().find(|handle| {
            let (hx, hy) = handle.position(&selected.frame);
            (x - hx).abs() <= radius && (y - hy).abs() <= radius
        })
    }

    /// Pointer pressed: start a resize on a selected corner handle, start a
    /// drag on a draggable element, or clear the selection on empty canvas.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if !self.gesture.is_idle() {
            self.pointer_up();
        }

        if let Some(handle) = self.handle_at(x, y) {
            if let Some(selected) = self.scene.selected_element() {
                tracing::debug!(instance = %self.instance, element = %selected.id, ?handle, "Resize started");
                self.gesture = GestureState::Resizing {
                    element: selected.id.clone(),
                    handle,
                    pointer_origin: (x, y),
                    frame_origin: selected.frame,
                };
                self.forget_echo();
                return;
            }
        }

        let Some(id) = self.scene.element_at(x, y) else {
            self.scene.deselect_all();
            return;
        };
        if self.scene.select(&id).is_err() {
            return;
        }
        if let Some(element) = self.scene.get_element(&id) {
            if element.draggable {
                tracing::debug!(instance = %self.instance, element = %id, "Drag started");
                self.gesture = GestureState::Dragging {
                    element: id.clone(),
                    pointer_origin: (x, y),
                    element_origin: (element.frame.x, element.frame.y),
                };
                self.forget_echo();
            }
        }
    }

    /// Pointer moved: update the dragged or resized element.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let config = *self.config();
        match &self.gesture {
            GestureState::Idle => {}
            GestureState::Dragging {
                element,
                pointer_origin,
                element_origin,
            } => {
                let (nx, ny) =
                    drag_position(*element_origin, *pointer_origin, (x, y), config.grid_size);
                self.guides = Guides::for_position(nx, ny, &config);
                if let Some(target) = self.scene.get_element_mut(element) {
                    if (target.frame.x - nx).abs() > f32::EPSILON
                        || (target.frame.y - ny).abs() > f32::EPSILON
                    {
                        target.frame.x = nx;
                        target.frame.y = ny;
                        self.gesture_changed = true;
                    }
                    tracing::trace!(element = %element, x = nx, y = ny, "Dragged");
                }
            }
            GestureState::Resizing {
                element,
                handle,
                pointer_origin,
                frame_origin,
            } => {
                let displacement = (x - pointer_origin.0, y - pointer_origin.1);
                let frame = resize_frame(*handle, *frame_origin, displacement, &config);
                if let Some(target) = self.scene.get_element_mut(element) {
                    if target.frame != frame {
                        target.frame = frame;
                        self.gesture_changed = true;
                    }
                    tracing::trace!(element = %element, ?frame, "Resized");
                }
            }
        }
    }

    /// Pointer released anywhere: return to idle, hide guides and emit if
    /// the gesture changed anything. Returns `true` if a snapshot was emitted.
    pub fn pointer_up(&mut self) -> bool {
        let finished = std::mem::take(&mut self.gesture);
        self.guides.clear();
        let changed = std::mem::take(&mut self.gesture_changed);
        if let Some(element) = finished.element() {
            tracing::debug!(instance = %self.instance, element = %element, changed, "Gesture ended");
        }
        if changed {
            self.emit();
        }
        changed
    }

    /// Double click / tap while idle: edit the text of the element under the
    /// pointer. Returns `true` if the text was replaced.
    pub fn double_click(&mut self, x: f32, y: f32, prompt: &mut dyn TextPrompt) -> bool {
        if !self.gesture.is_idle() {
            return false;
        }
        let Some(id) = self.scene.element_at(x, y) else {
            return false;
        };
        self.edit_text(&id, prompt).unwrap_or(false)
    }

    /// Ask `prompt` for new text for an element and apply it verbatim.
    /// Returns `true` if the prompt produced replacement text.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ElementNotFound`] if no element has this id.
    pub fn edit_text(&mut self, id: &ElementId, prompt: &mut dyn TextPrompt) -> CanvasResult<bool> {
        let element = self
            .scene
            .get_element_mut(id)
            .ok_or_else(|| CanvasError::ElementNotFound(id.to_string()))?;
        let Some(text) = prompt.edit(&element.text) else {
            return Ok(false);
        };
        element.text = text;
        tracing::debug!(instance = %self.instance, element = %id, "Text edited");
        self.emit();
        Ok(true)
    }

    /// Move the selected element against the left margin, the page center
    /// or the right margin. Returns `false` if nothing is selected.
    pub fn align_selection(&mut self, direction: AlignDirection) -> bool {
        let config = *self.config();
        let Some(id) = self.scene.selected_id().cloned() else {
            return false;
        };
        let Some(element) = self.scene.get_element_mut(&id) else {
            return false;
        };
        element.frame.x = aligned_x(direction, element.frame.width, &config);
        tracing::debug!(instance = %self.instance, element = %id, ?direction, "Aligned");
        self.emit();
        true
    }
}
