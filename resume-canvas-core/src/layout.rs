//! Forward projection: résumé data + template → positioned canvas elements.
//!
//! The page is a two-column layout. A full-width header carries the name and
//! title; the sidebar holds contact lines, skill chips and language chips;
//! the main column holds the summary followed by experience and education
//! blocks. Output order is fixed so z-order, tab order and snapshots are
//! reproducible for identical input.

use crate::binding::{
    format_date_range, join_description, ArrayPath, Binding, EducationField, ExperienceField,
    FieldPath,
};
use crate::{
    CanvasConfig, CanvasElement, ElementId, Frame, ResolvedTheme, StructuredResume, TemplateId,
    TextAlign, ThemeOverrides,
};

const NAME_TOP: f32 = 48.0;
const NAME_HEIGHT: f32 = 48.0;
const TITLE_TOP: f32 = 90.0;
const TITLE_HEIGHT: f32 = 32.0;

const CONTACT_TOP: f32 = 160.0;
const CONTACT_PITCH: f32 = 26.0;
const CONTACT_HEIGHT: f32 = 22.0;
/// The contact block reserves room for every contact line, present or not.
const CONTACT_LINES: f32 = 3.0;
/// Top of the section that follows the contact block.
pub const SECTION_TOP: f32 = CONTACT_TOP + CONTACT_LINES * CONTACT_PITCH + 20.0;

const SUMMARY_HEIGHT: f32 = 120.0;
const SECTION_GAP: f32 = 20.0;

const SKILLS_TOP: f32 = SECTION_TOP + 160.0;
const LANGUAGES_TOP: f32 = SECTION_TOP + 260.0;
/// Chips per row for skills.
pub const SKILLS_PER_ROW: usize = 3;
/// Chips per row for languages.
pub const LANGUAGES_PER_ROW: usize = 2;
const CHIP_ROW_PITCH: f32 = 36.0;
const CHIP_HEIGHT: f32 = 28.0;
const CHIP_GAP: f32 = 8.0;
const CHIP_PADDING: f32 = 8.0;

/// Vertical distance between consecutive experience blocks.
pub const EXPERIENCE_PITCH: f32 = 150.0;
/// Vertical distance between consecutive education blocks.
pub const EDUCATION_PITCH: f32 = 110.0;
const EDUCATION_GAP: f32 = 40.0;

/// Lays out résumé data on a page described by a [`CanvasConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutProjector {
    config: CanvasConfig,
}

impl LayoutProjector {
    /// Create a projector for the given page configuration.
    #[must_use]
    pub const fn new(config: CanvasConfig) -> Self {
        Self { config }
    }

    /// The page configuration in use.
    #[must_use]
    pub const fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Top of the first experience block.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn experience_top(&self) -> f32 {
        SECTION_TOP + SUMMARY_HEIGHT + SECTION_GAP
    }

    /// Top of the first education block, below every experience block.
    #[must_use]
    pub fn education_top(&self, experience_count: usize) -> f32 {
        self.experience_top() + count_f32(experience_count) * EXPERIENCE_PITCH + EDUCATION_GAP
    }

    /// Project `data` with `template` and optional `overrides` into elements.
    ///
    /// Pure and deterministic. Empty contact values produce no element.
    #[must_use]
    pub fn project(
        &self,
        data: &StructuredResume,
        template: TemplateId,
        overrides: Option<&ThemeOverrides>,
    ) -> Vec<CanvasElement> {
        let theme = ResolvedTheme::resolve(template, overrides);
        let mut elements = Vec::with_capacity(
            6 + data.skills.len()
                + data.languages.len()
                + data.experience.len() * 4
                + data.education.len() * 3,
        );

        self.push_header(&mut elements, data, &theme);
        self.push_contacts(&mut elements, data, &theme);
        self.push_summary(&mut elements, data, &theme);
        self.push_chips(&mut elements, ArrayPath::Skills, &data.skills, &theme);
        self.push_chips(&mut elements, ArrayPath::Languages, &data.languages, &theme);
        self.push_experience(&mut elements, data, &theme);
        self.push_education(&mut elements, data, &theme);

        tracing::debug!(
            template = %template,
            elements = elements.len(),
            "Projected resume onto canvas"
        );
        elements
    }

    fn push_header(
        &self,
        elements: &mut Vec<CanvasElement>,
        data: &StructuredResume,
        theme: &ResolvedTheme,
    ) {
        let width = self.config.page_width - self.config.margin * 2.0;
        let info = &data.personal_info;

        elements.push(
            CanvasElement::text(
                "full-name",
                Frame::new(self.config.margin, NAME_TOP, width, NAME_HEIGHT),
                info.full_name.clone(),
            )
            .with_font(32.0, theme.header_font)
            .with_fill(theme.header_title_color.clone())
            .with_align(TextAlign::Left)
            .with_binding(Binding::field(FieldPath::FullName)),
        );
        elements.push(
            CanvasElement::text(
                "job-title",
                Frame::new(self.config.margin, TITLE_TOP, width, TITLE_HEIGHT),
                info.job_title.clone(),
            )
            .with_font(18.0, theme.body_font)
            .with_fill(theme.header_subtitle_color.clone())
            .with_align(TextAlign::Left)
            .with_binding(Binding::field(FieldPath::JobTitle)),
        );
    }

    fn push_contacts(
        &self,
        elements: &mut Vec<CanvasElement>,
        data: &StructuredResume,
        theme: &ResolvedTheme,
    ) {
        let info = &data.personal_info;
        let lines = [
            ("contact-email", FieldPath::Email, &info.email),
            ("contact-phone", FieldPath::Phone, &info.phone),
            ("contact-location", FieldPath::Location, &info.location),
        ];

        let present = lines.iter().filter(|(_, _, value)| !value.is_empty());
        for (row, (id, path, value)) in present.enumerate() {
            elements.push(
                CanvasElement::text(
                    *id,
                    Frame::new(
                        self.config.margin,
                        CONTACT_TOP + count_f32(row) * CONTACT_PITCH,
                        self.config.sidebar_width(),
                        CONTACT_HEIGHT,
                    ),
                    path.display(value),
                )
                .with_font(13.0, theme.body_font)
                .with_fill(theme.text_color.clone())
                .with_align(TextAlign::Left)
                .with_binding(Binding::field(*path)),
            );
        }
    }

    fn push_summary(
        &self,
        elements: &mut Vec<CanvasElement>,
        data: &StructuredResume,
        theme: &ResolvedTheme,
    ) {
        elements.push(
            CanvasElement::text(
                "summary",
                Frame::new(
                    self.config.main_x(),
                    SECTION_TOP,
                    self.config.main_width(),
                    SUMMARY_HEIGHT,
                ),
                data.summary.clone(),
            )
            .with_font(14.0, theme.body_font)
            .with_fill(theme.text_color.clone())
            .with_align(TextAlign::Left)
            .with_binding(Binding::field(FieldPath::Summary)),
        );
    }

    fn push_chips(
        &self,
        elements: &mut Vec<CanvasElement>,
        path: ArrayPath,
        values: &[String],
        theme: &ResolvedTheme,
    ) {
        let (per_row, top) = match path {
            ArrayPath::Skills => (SKILLS_PER_ROW, SKILLS_TOP),
            ArrayPath::Languages => (LANGUAGES_PER_ROW, LANGUAGES_TOP),
        };
        let columns = count_f32(per_row);
        let width = (self.config.sidebar_width() - CHIP_GAP * (columns - 1.0)) / columns;

        for (index, value) in values.iter().enumerate() {
            let row = count_f32(index / per_row);
            let col = count_f32(index % per_row);
            elements.push(
                CanvasElement::text(
                    ElementId::chip(path, index),
                    Frame::new(
                        self.config.margin + col * (width + CHIP_GAP),
                        top + row * CHIP_ROW_PITCH,
                        width,
                        CHIP_HEIGHT,
                    ),
                    value.clone(),
                )
                .as_chip(CHIP_PADDING)
                .with_font(12.0, theme.body_font)
                .with_fill(theme.text_color.clone())
                .with_align(TextAlign::Center)
                .with_binding(Binding::array(path, index)),
            );
        }
    }

    fn push_experience(
        &self,
        elements: &mut Vec<CanvasElement>,
        data: &StructuredResume,
        theme: &ResolvedTheme,
    ) {
        let x = self.config.main_x();
        let width = self.config.main_width();
        let top = self.experience_top();

        for (index, item) in data.experience.iter().enumerate() {
            let block = top + count_f32(index) * EXPERIENCE_PITCH;
            let parts = [
                (ExperienceField::Role, 0.0, 26.0, 16.0, item.role.clone()),
                (ExperienceField::Company, 26.0, 22.0, 13.0, item.company.clone()),
                (
                    ExperienceField::Dates,
                    48.0,
                    22.0,
                    12.0,
                    format_date_range(&item.start_date, &item.end_date),
                ),
                (
                    ExperienceField::Description,
                    74.0,
                    60.0,
                    12.0,
                    join_description(&item.description),
                ),
            ];
            for (field, offset, height, font_size, text) in parts {
                let fill = if field == ExperienceField::Company {
                    &theme.accent_color
                } else {
                    &theme.text_color
                };
                elements.push(
                    CanvasElement::text(
                        ElementId::experience(index, field),
                        Frame::new(x, block + offset, width, height),
                        text,
                    )
                    .with_font(font_size, theme.body_font)
                    .with_fill(fill.clone())
                    .with_binding(Binding::experience(index, field)),
                );
            }
        }
    }

    fn push_education(
        &self,
        elements: &mut Vec<CanvasElement>,
        data: &StructuredResume,
        theme: &ResolvedTheme,
    ) {
        let x = self.config.main_x();
        let width = self.config.main_width();
        let top = self.education_top(data.experience.len());

        for (index, item) in data.education.iter().enumerate() {
            let block = top + count_f32(index) * EDUCATION_PITCH;
            let parts = [
                (EducationField::Degree, 0.0, 24.0, 15.0, item.degree.clone()),
                (
                    EducationField::Institution,
                    24.0,
                    20.0,
                    13.0,
                    item.institution.clone(),
                ),
                (
                    EducationField::Dates,
                    46.0,
                    20.0,
                    12.0,
                    format_date_range(&item.start_date, &item.end_date),
                ),
            ];
            for (field, offset, height, font_size, text) in parts {
                let fill = if field == EducationField::Institution {
                    &theme.accent_color
                } else {
                    &theme.text_color
                };
                elements.push(
                    CanvasElement::text(
                        ElementId::education(index, field),
                        Frame::new(x, block + offset, width, height),
                        text,
                    )
                    .with_font(font_size, theme.body_font)
                    .with_fill(fill.clone())
                    .with_binding(Binding::education(index, field)),
                );
            }
        }
    }
}

/// Project with the default page configuration.
#[must_use]
pub fn project(
    data: &StructuredResume,
    template: TemplateId,
    overrides: Option<&ThemeOverrides>,
) -> Vec<CanvasElement> {
    LayoutProjector::default().project(data, template, overrides)
}

#[allow(clippy::cast_precision_loss)]
fn count_f32(n: usize) -> f32 {
    n as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EducationItem, ExperienceItem, FontFamilyId, PersonalInfo};

    fn sample() -> StructuredResume {
        StructuredResume {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                job_title: "Analyst".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "London".to_string(),
                ..PersonalInfo::default()
            },
            summary: "First programmer.".to_string(),
            experience: vec![
                ExperienceItem {
                    company: "Engine Co".to_string(),
                    role: "Programmer".to_string(),
                    start_date: "1842".to_string(),
                    end_date: "1843".to_string(),
                    description: vec!["Notes".to_string(), "Bernoulli".to_string()],
                },
                ExperienceItem::default(),
            ],
            education: vec![EducationItem {
                institution: "Home".to_string(),
                degree: "Mathematics".to_string(),
                start_date: "1830".to_string(),
                end_date: "1835".to_string(),
            }],
            skills: vec!["Math".into(), "Logic".into(), "Poetry".into(), "Music".into()],
            languages: vec!["English".into(), "French".into(), "Italian".into()],
            html_resume: None,
        }
    }

    fn ids(elements: &[CanvasElement]) -> Vec<&str> {
        elements.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_order_is_stable() {
        let elements = project(&sample(), TemplateId::Modern, None);
        assert_eq!(
            ids(&elements),
            vec![
                "full-name",
                "job-title",
                "contact-email",
                "contact-phone",
                "contact-location",
                "summary",
                "skill-0",
                "skill-1",
                "skill-2",
                "skill-3",
                "language-0",
                "language-1",
                "language-2",
                "experience-role-0",
                "experience-company-0",
                "experience-dates-0",
                "experience-description-0",
                "experience-role-1",
                "experience-company-1",
                "experience-dates-1",
                "experience-description-1",
                "education-degree-0",
                "education-institution-0",
                "education-dates-0",
            ]
        );
        assert_eq!(elements, project(&sample(), TemplateId::Modern, None));
    }

    #[test]
    fn test_every_element_is_bound() {
        let elements = project(&sample(), TemplateId::Technical, None);
        assert!(elements.iter().all(|e| e.binding.is_some()));
    }

    #[test]
    fn test_contact_lines_are_labeled() {
        let elements = project(&sample(), TemplateId::Modern, None);
        let email = elements
            .iter()
            .find(|e| e.id.as_str() == "contact-email")
            .expect("email line");
        assert_eq!(email.text, "Correo: ada@example.com");
        assert!((email.frame.y - CONTACT_TOP).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_contact_is_omitted() {
        let mut data = sample();
        data.personal_info.phone.clear();
        let elements = project(&data, TemplateId::Modern, None);
        assert!(elements.iter().all(|e| e.id.as_str() != "contact-phone"));
        let location = elements
            .iter()
            .find(|e| e.id.as_str() == "contact-location")
            .expect("location line");
        assert!((location.frame.y - (CONTACT_TOP + CONTACT_PITCH)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_chip_grid() {
        let elements = project(&sample(), TemplateId::Modern, None);
        let chip = |id: &str| {
            elements
                .iter()
                .find(|e| e.id.as_str() == id)
                .expect("chip")
                .frame
        };
        assert!((chip("skill-0").y - chip("skill-2").y).abs() < f32::EPSILON);
        assert!((chip("skill-3").y - (chip("skill-0").y + CHIP_ROW_PITCH)).abs() < f32::EPSILON);
        assert!((chip("skill-3").x - chip("skill-0").x).abs() < f32::EPSILON);
        assert!((chip("language-2").y - (LANGUAGES_TOP + CHIP_ROW_PITCH)).abs() < f32::EPSILON);
        let config = CanvasConfig::default();
        assert!((chip("skill-2").right() - (config.margin + config.sidebar_width())).abs() < 0.01);
    }

    #[test]
    fn test_experience_and_education_offsets() {
        let projector = LayoutProjector::default();
        let elements = projector.project(&sample(), TemplateId::Modern, None);
        let frame = |id: &str| {
            elements
                .iter()
                .find(|e| e.id.as_str() == id)
                .expect("element")
                .frame
        };
        let top = projector.experience_top();
        assert!((frame("experience-role-1").y - (top + EXPERIENCE_PITCH)).abs() < f32::EPSILON);
        assert!(
            (frame("education-degree-0").y - (top + 2.0 * EXPERIENCE_PITCH + EDUCATION_GAP)).abs()
                < f32::EPSILON
        );
        assert!(frame("summary").bottom() <= top);
    }

    #[test]
    fn test_text_rendering_of_compound_fields() {
        let elements = project(&sample(), TemplateId::Modern, None);
        let text = |id: &str| {
            elements
                .iter()
                .find(|e| e.id.as_str() == id)
                .expect("element")
                .text
                .clone()
        };
        assert_eq!(text("experience-dates-0"), "1842 — 1843");
        assert_eq!(text("experience-description-0"), "Notes\nBernoulli");
        assert_eq!(text("education-dates-0"), "1830 — 1835");
    }

    #[test]
    fn test_overrides_apply() {
        let overrides = ThemeOverrides {
            accent_color: Some("#123456".to_string()),
            body_font: Some(FontFamilyId::Lato),
            ..ThemeOverrides::default()
        };
        let elements = project(&sample(), TemplateId::Modern, Some(&overrides));
        let company = elements
            .iter()
            .find(|e| e.id.as_str() == "experience-company-0")
            .expect("company");
        assert_eq!(company.fill, "#123456");
        assert_eq!(company.font_family, FontFamilyId::Lato);
        assert_eq!(elements[0].font_family, FontFamilyId::Inter);
    }
}
