//! Canvas elements - the positioned, styled units of a projected page.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::binding::{ArrayPath, Binding, EducationField, ExperienceField};
use crate::{FontFamilyId, Frame};

/// Stable identifier for an element.
///
/// Identifiers are recomputed by every forward projection from the field an
/// element displays, so the same field always yields the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Create an id from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of a skill or language chip.
    #[must_use]
    pub fn chip(path: ArrayPath, index: usize) -> Self {
        match path {
            ArrayPath::Skills => Self(format!("skill-{index}")),
            ArrayPath::Languages => Self(format!("language-{index}")),
        }
    }

    /// Id of an experience sub-element.
    #[must_use]
    pub fn experience(index: usize, field: ExperienceField) -> Self {
        let part = match field {
            ExperienceField::Role => "role",
            ExperienceField::Company => "company",
            ExperienceField::Dates => "dates",
            ExperienceField::Description => "description",
        };
        Self(format!("experience-{part}-{index}"))
    }

    /// Id of an education sub-element.
    #[must_use]
    pub fn education(index: usize, field: EducationField) -> Self {
        let part = match field {
            EducationField::Degree => "degree",
            EducationField::Institution => "institution",
            EducationField::Dates => "dates",
        };
        Self(format!("education-{part}-{index}"))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The visual treatment of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Plain text block.
    Text,
    /// Rounded pill with inset text.
    Chip,
}

/// Horizontal text alignment inside an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

/// One positioned, styled, optionally bound unit on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasElement {
    /// Stable identifier.
    pub id: ElementId,
    /// Visual treatment.
    pub kind: ElementKind,
    /// Position and size.
    #[serde(flatten)]
    pub frame: Frame,
    /// Interior padding (chips only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Literal displayed text.
    pub text: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Font family.
    pub font_family: FontFamilyId,
    /// Text color as hex.
    pub fill: String,
    /// Text alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    /// Whether pointer-down on the body starts a drag.
    #[serde(default)]
    pub draggable: bool,
    /// The résumé field this element displays, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<Binding>,
}

impl CanvasElement {
    /// Create a draggable, unbound text element.
    #[must_use]
    pub fn text(id: impl Into<ElementId>, frame: Frame, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Text,
            frame,
            padding: None,
            text: text.into(),
            font_size: 14.0,
            font_family: FontFamilyId::default(),
            fill: "#000000".to_string(),
            align: None,
            draggable: true,
            binding: None,
        }
    }

    /// Turn the element into a chip with the given interior padding.
    #[must_use]
    pub fn as_chip(mut self, padding: f32) -> Self {
        self.kind = ElementKind::Chip;
        self.padding = Some(padding);
        self
    }

    /// Set font size and family.
    #[must_use]
    pub fn with_font(mut self, font_size: f32, font_family: FontFamilyId) -> Self {
        self.font_size = font_size;
        self.font_family = font_family;
        self
    }

    /// Set the text color.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Set the text alignment.
    #[must_use]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Attach a binding.
    #[must_use]
    pub fn with_binding(mut self, binding: Binding) -> Self {
        self.binding = Some(binding);
        self
    }

    /// Set whether the element can be dragged.
    #[must_use]
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Check if a point (in page coordinates) is within this element.
    #[must_use]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.frame.contains(x, y)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
