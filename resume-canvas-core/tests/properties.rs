//! Property tests for snapping, resizing and projection round trips.

use proptest::prelude::*;
use resume_canvas_core::gesture::resize_frame;
use resume_canvas_core::{
    inverse_project, project, snap, CanvasConfig, EducationItem, ExperienceItem, Frame,
    PersonalInfo, ResizeHandle, StructuredResume, TemplateId,
};

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9@.]{0,12}"
}

fn line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.]{1,10}"
}

prop_compose! {
    fn arb_experience()(
        company in word(),
        role in word(),
        start_date in word(),
        end_date in word(),
        description in prop::collection::vec(line(), 0..4),
    ) -> ExperienceItem {
        ExperienceItem { company, role, start_date, end_date, description }
    }
}

prop_compose! {
    fn arb_education()(
        institution in word(),
        degree in word(),
        start_date in word(),
        end_date in word(),
    ) -> EducationItem {
        EducationItem { institution, degree, start_date, end_date }
    }
}

prop_compose! {
    fn arb_resume()(
        full_name in word(),
        job_title in word(),
        email in word(),
        phone in word(),
        location in word(),
        linkedin in prop::option::of(word()),
        summary in "[a-zA-Z0-9 .]{0,40}",
        experience in prop::collection::vec(arb_experience(), 0..4),
        education in prop::collection::vec(arb_education(), 0..3),
        skills in prop::collection::vec(word(), 0..8),
        languages in prop::collection::vec(word(), 0..5),
    ) -> StructuredResume {
        StructuredResume {
            personal_info: PersonalInfo {
                full_name,
                job_title,
                email,
                phone,
                location,
                linkedin,
                website: None,
            },
            summary,
            experience,
            education,
            skills,
            languages,
            html_resume: None,
        }
    }
}

fn arb_template() -> impl Strategy<Value = TemplateId> {
    prop::sample::select(TemplateId::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_round_trip_is_identity(data in arb_resume(), template in arb_template()) {
        let elements = project(&data, template, None);
        prop_assert_eq!(inverse_project(&elements, &data), data);
    }

    #[test]
    fn prop_snap_is_nearest_multiple(value in -5000.0_f32..5000.0) {
        let grid = CanvasConfig::default().grid_size;
        let snapped = snap(value, grid);
        prop_assert!((snapped / grid - (snapped / grid).round()).abs() < 1e-3);
        prop_assert!((snapped - value).abs() <= grid / 2.0 + 1e-3);
        prop_assert!((snap(-value, grid) + snapped).abs() < 1e-3);
    }

    #[test]
    fn prop_bottom_right_never_moves_origin(
        x in 0.0_f32..700.0,
        y in 0.0_f32..1000.0,
        width in 60.0_f32..400.0,
        height in 20.0_f32..200.0,
        dx in -500.0_f32..500.0,
        dy in -500.0_f32..500.0,
    ) {
        let config = CanvasConfig::default();
        let origin = Frame::new(x, y, width, height);
        let frame = resize_frame(ResizeHandle::BottomRight, origin, (dx, dy), &config);
        prop_assert_eq!(frame.x, origin.x);
        prop_assert_eq!(frame.y, origin.y);
        prop_assert!(frame.width >= config.min_width);
        prop_assert!(frame.height >= config.min_height);
    }

    #[test]
    fn prop_top_left_keeps_opposite_edges(
        x in 0.0_f32..700.0,
        y in 0.0_f32..1000.0,
        width in 60.0_f32..400.0,
        height in 20.0_f32..200.0,
        dx in -300.0_f32..300.0,
        dy in -300.0_f32..300.0,
    ) {
        let config = CanvasConfig::default();
        let origin = Frame::new(x, y, width, height);
        let frame = resize_frame(ResizeHandle::TopLeft, origin, (dx, dy), &config);
        prop_assert!((frame.right() - origin.right()).abs() < config.grid_size);
        prop_assert!((frame.bottom() - origin.bottom()).abs() < config.grid_size);
        prop_assert!(frame.width >= config.min_width);
        prop_assert!(frame.height >= config.min_height);
    }
}
