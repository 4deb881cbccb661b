//! Template style catalog, font catalog and user style overrides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CanvasError;

/// Font families a template or override may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamilyId {
    /// Inter, sans-serif.
    #[default]
    Inter,
    /// Lato, sans-serif.
    Lato,
    /// Poppins, sans-serif.
    Poppins,
    /// Playfair Display, serif.
    Playfair,
    /// Source Serif 4, serif.
    SourceSerif,
}

impl FontFamilyId {
    /// Every font in the catalog, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Inter,
        Self::Lato,
        Self::Poppins,
        Self::Playfair,
        Self::SourceSerif,
    ];

    /// Identifier used on the wire and in CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inter => "inter",
            Self::Lato => "lato",
            Self::Poppins => "poppins",
            Self::Playfair => "playfair",
            Self::SourceSerif => "source-serif",
        }
    }

    /// CSS `font-family` stack for hosts that render with web fonts.
    #[must_use]
    pub const fn css_family(self) -> &'static str {
        match self {
            Self::Inter => "Inter, sans-serif",
            Self::Lato => "Lato, sans-serif",
            Self::Poppins => "Poppins, sans-serif",
            Self::Playfair => "Playfair Display, serif",
            Self::SourceSerif => "Source Serif 4, serif",
        }
    }
}

impl fmt::Display for FontFamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontFamilyId {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|font| font.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CanvasError::UnknownFont(s.to_string()))
    }
}

/// Visual templates offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    /// Default template.
    #[default]
    Modern,
    /// Monochrome, low-ink.
    Minimal,
    /// Dark header, high contrast.
    Contrast,
    /// Serif typography, muted palette.
    Elegant,
    /// Saturated accent gradient.
    Vibrant,
    /// Monospace-adjacent engineering look.
    Technical,
}

impl TemplateId {
    /// Every template in the catalog, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Modern,
        Self::Minimal,
        Self::Contrast,
        Self::Elegant,
        Self::Vibrant,
        Self::Technical,
    ];

    /// Identifier used on the wire and in CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Minimal => "minimal",
            Self::Contrast => "contrast",
            Self::Elegant => "elegant",
            Self::Vibrant => "vibrant",
            Self::Technical => "technical",
        }
    }

    /// Resolve a template name, falling back to the default template for
    /// names outside the catalog.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(template = name, "Unknown template, using default");
            Self::default()
        })
    }

    /// The fixed style record for this template.
    #[must_use]
    pub const fn style(self) -> &'static TemplateStyle {
        match self {
            Self::Modern => &MODERN,
            Self::Minimal => &MINIMAL,
            Self::Contrast => &CONTRAST,
            Self::Elegant => &ELEGANT,
            Self::Vibrant => &VIBRANT,
            Self::Technical => &TECHNICAL,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|template| template.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CanvasError::UnknownTemplate(s.to_string()))
    }
}

/// Colors and default font of one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyle {
    /// Header band background.
    pub header_bg_color: &'static str,
    /// Optional CSS gradient layered over the header band.
    pub header_gradient: Option<&'static str>,
    /// Full-name color.
    pub header_title_color: &'static str,
    /// Job-title color.
    pub header_subtitle_color: &'static str,
    /// Accent for companies, institutions, chip outlines and guides.
    pub accent_color: &'static str,
    /// Sidebar panel background.
    pub sidebar_bg_color: &'static str,
    /// Sidebar panel border.
    pub sidebar_border_color: &'static str,
    /// Body text color.
    pub sidebar_text_color: &'static str,
    /// Template font; also the header font regardless of overrides.
    pub body_font: FontFamilyId,
    /// Chip background.
    pub pill_bg_color: &'static str,
    /// Chip text color.
    pub pill_text_color: &'static str,
}

const MODERN: TemplateStyle = TemplateStyle {
    header_bg_color: "#0f172a",
    header_gradient: Some("linear-gradient(135deg, #0f172a 0%, #1e3a8a 100%)"),
    header_title_color: "#0f172a",
    header_subtitle_color: "#2563eb",
    accent_color: "#2563eb",
    sidebar_bg_color: "#f8fafc",
    sidebar_border_color: "#e2e8f0",
    sidebar_text_color: "#334155",
    body_font: FontFamilyId::Inter,
    pill_bg_color: "#eff6ff",
    pill_text_color: "#1d4ed8",
};

const MINIMAL: TemplateStyle = TemplateStyle {
    header_bg_color: "#ffffff",
    header_gradient: None,
    header_title_color: "#111827",
    header_subtitle_color: "#6b7280",
    accent_color: "#111827",
    sidebar_bg_color: "#ffffff",
    sidebar_border_color: "#e5e7eb",
    sidebar_text_color: "#374151",
    body_font: FontFamilyId::Lato,
    pill_bg_color: "#f3f4f6",
    pill_text_color: "#111827",
};

const CONTRAST: TemplateStyle = TemplateStyle {
    header_bg_color: "#111111",
    header_gradient: None,
    header_title_color: "#111111",
    header_subtitle_color: "#f59e0b",
    accent_color: "#f59e0b",
    sidebar_bg_color: "#fafaf9",
    sidebar_border_color: "#d6d3d1",
    sidebar_text_color: "#1c1917",
    body_font: FontFamilyId::Poppins,
    pill_bg_color: "#fef3c7",
    pill_text_color: "#92400e",
};

const ELEGANT: TemplateStyle = TemplateStyle {
    header_bg_color: "#f5f0e8",
    header_gradient: None,
    header_title_color: "#3f2d1d",
    header_subtitle_color: "#8b6f47",
    accent_color: "#8b6f47",
    sidebar_bg_color: "#fbf8f3",
    sidebar_border_color: "#e7dccb",
    sidebar_text_color: "#44403c",
    body_font: FontFamilyId::Playfair,
    pill_bg_color: "#f3ece0",
    pill_text_color: "#5b4631",
};

const VIBRANT: TemplateStyle = TemplateStyle {
    header_bg_color: "#7c3aed",
    header_gradient: Some("linear-gradient(120deg, #7c3aed 0%, #db2777 100%)"),
    header_title_color: "#4c1d95",
    header_subtitle_color: "#db2777",
    accent_color: "#db2777",
    sidebar_bg_color: "#faf5ff",
    sidebar_border_color: "#e9d5ff",
    sidebar_text_color: "#3b0764",
    body_font: FontFamilyId::Poppins,
    pill_bg_color: "#fce7f3",
    pill_text_color: "#9d174d",
};

const TECHNICAL: TemplateStyle = TemplateStyle {
    header_bg_color: "#0b1220",
    header_gradient: None,
    header_title_color: "#0b1220",
    header_subtitle_color: "#10b981",
    accent_color: "#10b981",
    sidebar_bg_color: "#f1f5f9",
    sidebar_border_color: "#cbd5e1",
    sidebar_text_color: "#1e293b",
    body_font: FontFamilyId::SourceSerif,
    pill_bg_color: "#ecfdf5",
    pill_text_color: "#047857",
};

/// User style choices layered on top of a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeOverrides {
    /// Accent color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    /// Header band background override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_bg_color: Option<String>,
    /// Full-name color override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_text_color: Option<String>,
    /// Body font override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font: Option<FontFamilyId>,
}

/// A template with overrides applied field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    /// Template the theme derives from.
    pub template: TemplateId,
    /// Accent color.
    pub accent_color: String,
    /// Header band background.
    pub header_bg_color: String,
    /// Full-name color.
    pub header_title_color: String,
    /// Job-title color.
    pub header_subtitle_color: String,
    /// Sidebar panel background.
    pub sidebar_bg_color: String,
    /// Body text color.
    pub text_color: String,
    /// Chip background.
    pub pill_bg_color: String,
    /// Font of the full name.
    pub header_font: FontFamilyId,
    /// Font of every other element.
    pub body_font: FontFamilyId,
}

impl ResolvedTheme {
    /// Apply `overrides` on top of the template's defaults. Empty override
    /// strings count as absent.
    #[must_use]
    pub fn resolve(template: TemplateId, overrides: Option<&ThemeOverrides>) -> Self {
        let style = template.style();
        let overrides = overrides.cloned().unwrap_or_default();
        Self {
            template,
            accent_color: pick(overrides.accent_color.as_ref(), style.accent_color),
            header_bg_color: pick(overrides.header_bg_color.as_ref(), style.header_bg_color),
            header_title_color: pick(
                overrides.header_text_color.as_ref(),
                style.header_title_color,
            ),
            header_subtitle_color: style.header_subtitle_color.to_string(),
            sidebar_bg_color: style.sidebar_bg_color.to_string(),
            text_color: style.sidebar_text_color.to_string(),
            pill_bg_color: style.pill_bg_color.to_string(),
            header_font: style.body_font,
            body_font: overrides.body_font.unwrap_or(style.body_font),
        }
    }
}

fn pick(value: Option<&String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| fallback.to_string(), Clone::clone)
}
