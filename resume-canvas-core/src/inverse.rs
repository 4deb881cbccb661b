//! Inverse projection: canvas elements → résumé data.

use crate::binding::{
    parse_date_range, split_description, ArrayPath, Binding, EducationField, ExperienceField,
    FieldPath,
};
use crate::{CanvasElement, StructuredResume};

/// Rebuild a résumé snapshot from the current elements.
///
/// `base` supplies every field without a visual representation. Unbound
/// elements are ignored. Experience and education lists grow with blank
/// entries to reach any referenced index and are never shortened; skill and
/// language writes past the end of their list are dropped. The raw-markup
/// override is cleared so canvas edits are not masked by stale markup.
#[must_use]
pub fn inverse_project(elements: &[CanvasElement], base: &StructuredResume) -> StructuredResume {
    let mut draft = StructuredResume {
        html_resume: None,
        ..base.clone()
    };

    for element in elements {
        let Some(binding) = element.binding else {
            continue;
        };
        apply_binding(&mut draft, binding, &element.text);
    }

    draft
}

/// Write one bound text value into `draft`.
pub fn apply_binding(draft: &mut StructuredResume, binding: Binding, text: &str) {
    match binding {
        Binding::Field { path } => apply_field(draft, path, text),
        Binding::Array { path, index } => {
            let list = match path {
                ArrayPath::Skills => &mut draft.skills,
                ArrayPath::Languages => &mut draft.languages,
            };
            if let Some(slot) = list.get_mut(index) {
                *slot = text.to_string();
            } else {
                tracing::trace!(?path, index, "Dropping write past end of list");
            }
        }
        Binding::Experience { index, sub_field } => {
            let Some(item) = grown_slot(&mut draft.experience, index) else {
                tracing::trace!(index, "Dropping experience write at unreachable index");
                return;
            };
            match sub_field {
                ExperienceField::Role => item.role = text.to_string(),
                ExperienceField::Company => item.company = text.to_string(),
                ExperienceField::Dates => {
                    (item.start_date, item.end_date) = parse_date_range(text);
                }
                ExperienceField::Description => item.description = split_description(text),
            }
        }
        Binding::Education { index, sub_field } => {
            let Some(item) = grown_slot(&mut draft.education, index) else {
                tracing::trace!(index, "Dropping education write at unreachable index");
                return;
            };
            match sub_field {
                EducationField::Degree => item.degree = text.to_string(),
                EducationField::Institution => item.institution = text.to_string(),
                EducationField::Dates => {
                    (item.start_date, item.end_date) = parse_date_range(text);
                }
            }
        }
    }
}

/// Slot `index` of `list`, growing it with blank entries first. `None` when
/// the list cannot hold that many entries.
fn grown_slot<T: Default>(list: &mut Vec<T>, index: usize) -> Option<&mut T> {
    let len = index.checked_add(1)?;
    if list.len() < len {
        list.try_reserve(len - list.len()).ok()?;
        list.resize_with(len, T::default);
    }
    list.get_mut(index)
}

fn apply_field(draft: &mut StructuredResume, path: FieldPath, text: &str) {
    let value = path.value_from_display(text);
    let info = &mut draft.personal_info;
    match path {
        FieldPath::FullName => info.full_name = value,
        FieldPath::JobTitle => info.job_title = value,
        FieldPath::Email => info.email = value,
        FieldPath::Phone => info.phone = value,
        FieldPath::Location => info.location = value,
        FieldPath::Linkedin => info.linkedin = Some(value),
        FieldPath::Website => info.website = Some(value),
        FieldPath::Summary => draft.summary = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EducationItem, ExperienceItem, Frame};

    fn bound(id: &str, text: &str, binding: Binding) -> CanvasElement {
        CanvasElement::text(id, Frame::default(), text).with_binding(binding)
    }

    #[test]
    fn test_label_is_stripped() {
        let elements = vec![bound(
            "contact-email",
            "Correo: foo@bar.com",
            Binding::field(FieldPath::Email),
        )];
        let resume = inverse_project(&elements, &StructuredResume::default());
        assert_eq!(resume.personal_info.email, "foo@bar.com");
    }

    #[test]
    fn test_unbound_elements_are_ignored() {
        let base = StructuredResume::initial();
        let elements = vec![CanvasElement::text("decoration", Frame::default(), "Banner")];
        assert_eq!(inverse_project(&elements, &base), base);
    }

    #[test]
    fn test_experience_list_grows_with_blanks() {
        let elements = vec![bound(
            "experience-role-2",
            "Engineer",
            Binding::experience(2, ExperienceField::Role),
        )];
        let resume = inverse_project(&elements, &StructuredResume::default());
        assert_eq!(resume.experience.len(), 3);
        assert_eq!(resume.experience[0], ExperienceItem::default());
        assert_eq!(resume.experience[2].role, "Engineer");
    }

    #[test]
    fn test_lists_are_never_shortened() {
        let mut base = StructuredResume::default();
        base.education = vec![EducationItem::default(); 4];
        let elements = vec![bound(
            "education-degree-0",
            "BSc",
            Binding::education(0, EducationField::Degree),
        )];
        let resume = inverse_project(&elements, &base);
        assert_eq!(resume.education.len(), 4);
        assert_eq!(resume.education[0].degree, "BSc");
    }

    #[test]
    fn test_skill_write_past_end_is_dropped() {
        let mut base = StructuredResume::default();
        base.skills = vec!["Rust".to_string()];
        let elements = vec![
            bound("skill-0", "Go", Binding::array(ArrayPath::Skills, 0)),
            bound("skill-5", "Zig", Binding::array(ArrayPath::Skills, 5)),
        ];
        let resume = inverse_project(&elements, &base);
        assert_eq!(resume.skills, vec!["Go".to_string()]);
    }

    #[test]
    fn test_unreachable_index_is_dropped() {
        let mut draft = StructuredResume::initial();
        let before = draft.clone();
        apply_binding(
            &mut draft,
            Binding::experience(usize::MAX, ExperienceField::Role),
            "x",
        );
        apply_binding(
            &mut draft,
            Binding::education(usize::MAX, EducationField::Degree),
            "y",
        );
        assert_eq!(draft, before);
    }

    #[test]
    fn test_dates_and_description() {
        let elements = vec![
            bound(
                "experience-dates-0",
                " 2020 —  Present ",
                Binding::experience(0, ExperienceField::Dates),
            ),
            bound(
                "experience-description-0",
                "Built things\n\n  Fixed things  ",
                Binding::experience(0, ExperienceField::Description),
            ),
            bound(
                "education-dates-0",
                "2015",
                Binding::education(0, EducationField::Dates),
            ),
        ];
        let resume = inverse_project(&elements, &StructuredResume::default());
        assert_eq!(resume.experience[0].start_date, "2020");
        assert_eq!(resume.experience[0].end_date, "Present");
        assert_eq!(
            resume.experience[0].description,
            vec!["Built things".to_string(), "Fixed things".to_string()]
        );
        assert_eq!(resume.education[0].start_date, "2015");
        assert_eq!(resume.education[0].end_date, "");
    }

    #[test]
    fn test_links_and_markup() {
        let mut base = StructuredResume::initial();
        base.html_resume = Some("<div/>".to_string());
        let elements = vec![bound(
            "link",
            "https://example.com",
            Binding::field(FieldPath::Website),
        )];
        let resume = inverse_project(&elements, &base);
        assert_eq!(
            resume.personal_info.website.as_deref(),
            Some("https://example.com")
        );
        assert!(resume.html_resume.is_none());
    }
}
