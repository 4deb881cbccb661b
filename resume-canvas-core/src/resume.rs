//! The structured résumé document the canvas projects from and back into.
//!
//! Field names serialize in camelCase so snapshots exchange cleanly with a
//! JavaScript host.

use serde::{Deserialize, Serialize};

/// Personal contact record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    /// Full name shown as the page title.
    pub full_name: String,
    /// Professional title shown under the name.
    pub job_title: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// City / region.
    pub location: String,
    /// Optional `LinkedIn` URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Optional personal website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// One position in the work history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceItem {
    /// Employer.
    pub company: String,
    /// Role held.
    pub role: String,
    /// Start date, free text.
    pub start_date: String,
    /// End date, free text.
    pub end_date: String,
    /// Achievement lines, in display order.
    pub description: Vec<String>,
}

/// One entry in the education history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationItem {
    /// School or university.
    pub institution: String,
    /// Degree obtained.
    pub degree: String,
    /// Start date, free text.
    pub start_date: String,
    /// End date, free text.
    pub end_date: String,
}

/// Canonical, template-independent résumé data.
///
/// The canvas never mutates a snapshot it was given; it consumes one and
/// emits a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuredResume {
    /// Contact record.
    pub personal_info: PersonalInfo,
    /// Free-text professional summary.
    pub summary: String,
    /// Work history, most relevant first.
    pub experience: Vec<ExperienceItem>,
    /// Education history.
    pub education: Vec<EducationItem>,
    /// Skill keywords.
    pub skills: Vec<String>,
    /// Spoken languages with proficiency.
    pub languages: Vec<String>,
    /// Raw-markup résumé that replaces the computed layout when present.
    /// Rendered by the plain renderer; the canvas ignores it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_resume: Option<String>,
}

impl StructuredResume {
    /// The starter document a new editor session opens with.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            personal_info: PersonalInfo {
                full_name: "Nombre Apellido".to_string(),
                job_title: "Título Profesional".to_string(),
                email: "correo@ejemplo.com".to_string(),
                phone: "(787) 555-0123".to_string(),
                location: "San Juan, PR".to_string(),
                linkedin: None,
                website: None,
            },
            summary: "Resumen profesional generado por IA aparecerá aquí...".to_string(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: vec!["Habilidad 1".to_string(), "Habilidad 2".to_string()],
            languages: vec!["Español (Nativo)".to_string(), "Inglés (Fluido)".to_string()],
            html_resume: None,
        }
    }

    /// Parse a snapshot from JSON. Missing fields default to empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> crate::CanvasResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the snapshot to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> crate::CanvasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
