//! # Resume Canvas Core
//!
//! Visual résumé canvas engine. Structured résumé data is projected onto a
//! fixed-size page as positioned, styled elements; the user drags, resizes,
//! aligns and edits them on a snapping grid; every edit is projected back
//! into structured data for the host.
//! Compiles to WASM for browser hosts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            resume-canvas-core               │
//! ├─────────────────────────────────────────────┤
//! │  Layout          │  Interaction Engine      │
//! │  - Forward map   │  - Drag / resize         │
//! │  - Templates     │  - Text edit / align     │
//! │  - Bindings      │  - Echo suppression      │
//! ├─────────────────────────────────────────────┤
//! │  Inverse map     │  Surface                 │
//! │  - Label strip   │  - Backdrop / chips      │
//! │  - Date ranges   │  - Grid / guides         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use resume_canvas_core::{inverse_project, project, StructuredResume, TemplateId};
//!
//! let data = StructuredResume::initial();
//! let elements = project(&data, TemplateId::Modern, None);
//! assert_eq!(inverse_project(&elements, &data), data);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod binding;
pub mod config;
pub mod element;
pub mod engine;
pub mod error;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod inverse;
pub mod layout;
pub mod prompt;
pub mod resume;
pub mod scene;
pub mod surface;
pub mod template;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use binding::{
    format_date_range, parse_date_range, ArrayPath, Binding, EducationField, ExperienceField,
    FieldPath, DATE_SEPARATOR,
};
pub use config::{CanvasConfig, GRID_SIZE, PAGE_HEIGHT, PAGE_WIDTH};
pub use element::{CanvasElement, ElementId, ElementKind, TextAlign};
pub use engine::{CanvasEngine, UpdateSource};
pub use error::{CanvasError, CanvasResult};
pub use event::{AlignDirection, InputEvent, PointerEvent, PointerPhase, ResizeHandle};
pub use geometry::{snap, Frame, Guides};
pub use gesture::GestureState;
pub use inverse::inverse_project;
pub use layout::{project, LayoutProjector};
pub use prompt::TextPrompt;
pub use resume::{EducationItem, ExperienceItem, PersonalInfo, StructuredResume};
pub use scene::Scene;
pub use surface::{DrawCommand, Surface};
pub use template::{FontFamilyId, ResolvedTheme, TemplateId, TemplateStyle, ThemeOverrides};

/// Canvas core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
