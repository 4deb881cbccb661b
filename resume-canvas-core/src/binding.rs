//! Binding-path vocabulary: typed pointers from canvas elements back into
//! the [`StructuredResume`](crate::StructuredResume) fields they display,
//! plus the text codecs shared by forward and inverse projection.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Separator between start and end dates in a rendered date range.
pub const DATE_SEPARATOR: char = '—';

/// A scalar field of the résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldPath {
    /// `personalInfo.fullName`
    #[serde(rename = "personalInfo.fullName")]
    FullName,
    /// `personalInfo.jobTitle`
    #[serde(rename = "personalInfo.jobTitle")]
    JobTitle,
    /// `personalInfo.email`, rendered with a label.
    #[serde(rename = "personalInfo.email")]
    Email,
    /// `personalInfo.phone`, rendered with a label.
    #[serde(rename = "personalInfo.phone")]
    Phone,
    /// `personalInfo.location`, rendered with a label.
    #[serde(rename = "personalInfo.location")]
    Location,
    /// `personalInfo.linkedin`
    #[serde(rename = "personalInfo.linkedin")]
    Linkedin,
    /// `personalInfo.website`
    #[serde(rename = "personalInfo.website")]
    Website,
    /// `summary`
    #[serde(rename = "summary")]
    Summary,
}

impl FieldPath {
    /// Localized label prefixed to the rendered value, for contact fields.
    #[must_use]
    pub const fn contact_label(self) -> Option<&'static str> {
        match self {
            Self::Email => Some("Correo"),
            Self::Phone => Some("Teléfono"),
            Self::Location => Some("Ubicación"),
            _ => None,
        }
    }

    /// Render a value the way the canvas displays it.
    #[must_use]
    pub fn display(self, value: &str) -> String {
        match self.contact_label() {
            Some(label) => format!("{label}: {value}"),
            None => value.to_string(),
        }
    }

    /// Recover the stored value from displayed text.
    ///
    /// For labeled fields the label and colon are removed only when they
    /// prefix the text (case-insensitively) and the remainder is trimmed.
    /// Label words appearing later in the value are kept.
    #[must_use]
    pub fn value_from_display(self, text: &str) -> String {
        let pattern = match self {
            Self::Email => &LABELS.email,
            Self::Phone => &LABELS.phone,
            Self::Location => &LABELS.location,
            _ => return text.to_string(),
        };
        pattern.replace(text, "").trim().to_string()
    }
}

struct LabelPatterns {
    email: Regex,
    phone: Regex,
    location: Regex,
}

#[allow(clippy::non_std_lazy_statics)]
static LABELS: Lazy<LabelPatterns> = Lazy::new(|| LabelPatterns {
    email: label_pattern(FieldPath::Email),
    phone: label_pattern(FieldPath::Phone),
    location: label_pattern(FieldPath::Location),
});

fn label_pattern(field: FieldPath) -> Regex {
    let label = field.contact_label().unwrap_or_default();
    Regex::new(&format!(r"(?i)^{}:\s*", regex::escape(label)))
        .expect("escaped label is a valid pattern")
}

/// A string-list field of the résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayPath {
    /// `skills`
    Skills,
    /// `languages`
    Languages,
}

/// Sub-field of an experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceField {
    /// Role held.
    Role,
    /// Employer.
    Company,
    /// Start/end date range.
    Dates,
    /// Description lines.
    Description,
}

/// Sub-field of an education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationField {
    /// Degree obtained.
    Degree,
    /// School or university.
    Institution,
    /// Start/end date range.
    Dates,
}

/// Reference from a canvas element to the résumé field it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Binding {
    /// A scalar field.
    Field {
        /// Field being displayed.
        path: FieldPath,
    },
    /// One slot of a string list.
    Array {
        /// List being displayed.
        path: ArrayPath,
        /// Position within the list.
        index: usize,
    },
    /// A sub-field of one experience entry.
    Experience {
        /// Entry position.
        index: usize,
        /// Sub-field being displayed.
        #[serde(rename = "subField")]
        sub_field: ExperienceField,
    },
    /// A sub-field of one education entry.
    Education {
        /// Entry position.
        index: usize,
        /// Sub-field being displayed.
        #[serde(rename = "subField")]
        sub_field: EducationField,
    },
}

impl Binding {
    /// Shorthand for [`Binding::Field`].
    #[must_use]
    pub const fn field(path: FieldPath) -> Self {
        Self::Field { path }
    }

    /// Shorthand for [`Binding::Array`].
    #[must_use]
    pub const fn array(path: ArrayPath, index: usize) -> Self {
        Self::Array { path, index }
    }

    /// Shorthand for [`Binding::Experience`].
    #[must_use]
    pub const fn experience(index: usize, sub_field: ExperienceField) -> Self {
        Self::Experience { index, sub_field }
    }

    /// Shorthand for [`Binding::Education`].
    #[must_use]
    pub const fn education(index: usize, sub_field: EducationField) -> Self {
        Self::Education { index, sub_field }
    }
}

/// Render a date range as `"<start> — <end>"`.
#[must_use]
pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{start} {DATE_SEPARATOR} {end}")
}

/// Split displayed date-range text on the first em-dash, trimming both sides.
/// Text without the separator becomes the start date with an empty end.
#[must_use]
pub fn parse_date_range(text: &str) -> (String, String) {
    match text.split_once(DATE_SEPARATOR) {
        Some((start, end)) => (start.trim().to_string(), end.trim().to_string()),
        None => (text.trim().to_string(), String::new()),
    }
}

/// Join description lines for display.
#[must_use]
pub fn join_description(lines: &[String]) -> String {
    lines.join("\n")
}

/// Split displayed description text into trimmed, non-empty lines.
#[must_use]
pub fn split_description(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
