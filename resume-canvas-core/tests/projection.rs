//! Forward and inverse projection through the public API.

use resume_canvas_core::{
    inverse_project, project, snap, Binding, CanvasElement, EducationField, EducationItem,
    ElementId, ExperienceField, ExperienceItem, FieldPath, Frame, PersonalInfo, StructuredResume,
    TemplateId, ThemeOverrides, GRID_SIZE,
};

fn full_resume() -> StructuredResume {
    StructuredResume {
        personal_info: PersonalInfo {
            full_name: "Ana Rivera".to_string(),
            job_title: "Ingeniera de Software".to_string(),
            email: "ana@ejemplo.com".to_string(),
            phone: "(787) 555-0199".to_string(),
            location: "Ponce, PR".to_string(),
            linkedin: Some("linkedin.com/in/ana".to_string()),
            website: None,
        },
        summary: "Ingeniera con diez años de experiencia.".to_string(),
        experience: vec![
            ExperienceItem {
                company: "Acme".to_string(),
                role: "Staff Engineer".to_string(),
                start_date: "2019".to_string(),
                end_date: "Presente".to_string(),
                description: vec!["Lideró la migración".to_string(), "Mentora".to_string()],
            },
            ExperienceItem {
                company: "Initech".to_string(),
                role: "Developer".to_string(),
                start_date: "2014".to_string(),
                end_date: String::new(),
                description: Vec::new(),
            },
        ],
        education: vec![EducationItem {
            institution: "UPR".to_string(),
            degree: "B.S. Computer Science".to_string(),
            start_date: "2010".to_string(),
            end_date: "2014".to_string(),
        }],
        skills: vec![
            "Rust".to_string(),
            "SQL".to_string(),
            "Kubernetes".to_string(),
            "Terraform".to_string(),
        ],
        languages: vec!["Español".to_string(), "Inglés".to_string()],
        html_resume: None,
    }
}

fn element<'a>(elements: &'a [CanvasElement], id: &str) -> &'a CanvasElement {
    elements
        .iter()
        .find(|e| e.id.as_str() == id)
        .unwrap_or_else(|| panic!("missing element {id}"))
}

#[test]
fn round_trip_is_identity_for_every_template() {
    let data = full_resume();
    for template in TemplateId::ALL {
        let elements = project(&data, template, None);
        assert_eq!(inverse_project(&elements, &data), data, "template {template}");
    }
}

#[test]
fn round_trip_with_overrides_and_starter_document() {
    let overrides = ThemeOverrides {
        accent_color: Some("#ff0066".to_string()),
        ..ThemeOverrides::default()
    };
    let data = StructuredResume::initial();
    let elements = project(&data, TemplateId::Vibrant, Some(&overrides));
    assert_eq!(inverse_project(&elements, &data), data);
}

#[test]
fn raw_markup_override_is_cleared() {
    let mut data = full_resume();
    data.html_resume = Some("<div>AI output</div>".to_string());
    let elements = project(&data, TemplateId::Modern, None);
    let snapshot = inverse_project(&elements, &data);
    assert!(snapshot.html_resume.is_none());
    assert_eq!(snapshot.skills, data.skills);
}

#[test]
fn four_skills_wrap_three_per_row() {
    let elements = project(&full_resume(), TemplateId::Modern, None);
    let chips: Vec<_> = (0..4)
        .map(|i| element(&elements, &format!("skill-{i}")))
        .collect();

    let row_y = chips[0].frame.y;
    assert!(chips[..3]
        .iter()
        .all(|c| (c.frame.y - row_y).abs() < f32::EPSILON));
    assert!(chips[3].frame.y > row_y);
    assert!((chips[3].frame.x - chips[0].frame.x).abs() < f32::EPSILON);

    for (index, chip) in chips.iter().enumerate() {
        match chip.binding {
            Some(Binding::Array { index: bound, .. }) => assert_eq!(bound, index),
            other => panic!("unexpected binding {other:?}"),
        }
    }
}

#[test]
fn element_order_is_stable() {
    let data = full_resume();
    let ids = |elements: Vec<CanvasElement>| -> Vec<ElementId> {
        elements.into_iter().map(|e| e.id).collect()
    };
    let first = ids(project(&data, TemplateId::Modern, None));
    let second = ids(project(&data, TemplateId::Modern, None));
    assert_eq!(first, second);

    let position = |id: &str| {
        first
            .iter()
            .position(|e| e.as_str() == id)
            .unwrap_or_else(|| panic!("missing {id}"))
    };
    assert!(position("job-title") < position("contact-email"));
    assert!(position("summary") < position("skill-0"));
    assert!(position("language-1") < position("experience-role-0"));
    assert!(position("experience-description-1") < position("education-degree-0"));
}

#[test]
fn education_starts_after_experience_list() {
    let data = full_resume();
    let elements = project(&data, TemplateId::Modern, None);
    let last_experience = element(&elements, "experience-description-1");
    let degree = element(&elements, "education-degree-0");
    assert!(degree.frame.y >= last_experience.frame.bottom());
}

#[test]
fn contact_label_is_stripped_case_insensitively() {
    let base = full_resume();
    let edited = [
        CanvasElement::text("contact-email", Frame::default(), "CORREO:   foo@bar.com  ")
            .with_binding(Binding::field(FieldPath::Email)),
        CanvasElement::text("contact-phone", Frame::default(), "teléfono: 555")
            .with_binding(Binding::field(FieldPath::Phone)),
    ];
    let snapshot = inverse_project(&edited, &base);
    assert_eq!(snapshot.personal_info.email, "foo@bar.com");
    assert_eq!(snapshot.personal_info.phone, "555");
}

#[test]
fn projected_contact_round_trips_label() {
    let data = full_resume();
    let elements = project(&data, TemplateId::Modern, None);
    assert_eq!(
        element(&elements, "contact-email").text,
        "Correo: ana@ejemplo.com"
    );
}

#[test]
fn sparse_bindings_grow_lists_monotonically() {
    let base = full_resume();
    let elements = [
        CanvasElement::text("x", Frame::default(), "Late role")
            .with_binding(Binding::experience(4, ExperienceField::Role)),
        CanvasElement::text("y", Frame::default(), "2001 — 2002")
            .with_binding(Binding::education(2, EducationField::Dates)),
    ];
    let snapshot = inverse_project(&elements, &base);
    assert_eq!(snapshot.experience.len(), 5);
    assert_eq!(snapshot.experience[4].role, "Late role");
    assert_eq!(snapshot.experience[0], base.experience[0]);
    assert_eq!(snapshot.education.len(), 3);
    assert_eq!(snapshot.education[2].start_date, "2001");
    assert_eq!(snapshot.education[2].end_date, "2002");

    // Nothing referenced: lists keep their length.
    let untouched = inverse_project(&[], &base);
    assert_eq!(untouched.experience.len(), base.experience.len());
    assert_eq!(untouched.education.len(), base.education.len());
}

#[test]
fn date_range_without_separator() {
    let base = full_resume();
    let elements = [CanvasElement::text("d", Frame::default(), "  Desde 2020 ")
        .with_binding(Binding::experience(0, ExperienceField::Dates))];
    let snapshot = inverse_project(&elements, &base);
    assert_eq!(snapshot.experience[0].start_date, "Desde 2020");
    assert_eq!(snapshot.experience[0].end_date, "");
}

#[test]
fn snapping_lands_on_grid_within_half_unit() {
    let mut value = -200.0_f32;
    while value < 200.0 {
        let snapped = snap(value, GRID_SIZE);
        assert!((snapped / GRID_SIZE).fract().abs() < 1e-4, "{value} -> {snapped}");
        assert!((snapped - value).abs() <= GRID_SIZE / 2.0 + 1e-4);
        value += 0.37;
    }
}
