//! Backend-agnostic draw list for the presentational surface.
//!
//! The core does not rasterize. [`Surface::compose`] turns the live scene
//! into an ordered list of primitive commands that a host (HTML canvas,
//! SVG export, native toolkit) paints front to back.

use serde::{Deserialize, Serialize};

use crate::{
    CanvasConfig, CanvasElement, ElementKind, Frame, Guides, ResizeHandle, ResolvedTheme, Scene,
    TextAlign,
};

const PAGE_RADIUS: f32 = 12.0;
const HEADER_HEIGHT: f32 = 150.0;
const HEADER_OPACITY: f32 = 0.95;
const SIDEBAR_X: f32 = 32.0;
const SIDEBAR_Y: f32 = 140.0;
const SIDEBAR_BOTTOM_INSET: f32 = 180.0;
const SIDEBAR_OPACITY: f32 = 0.92;
const SIDEBAR_RADIUS: f32 = 12.0;
const CHIP_RADIUS: f32 = 14.0;
const CHIP_STROKE: f32 = 0.75;
const GRID_COLOR: &str = "#f1f5f9";
const GRID_LINE_WIDTH: f32 = 0.5;
const SELECTION_STROKE: f32 = 1.0;
const HANDLE_SIZE: f32 = 8.0;
const GUIDE_WIDTH: f32 = 1.0;

/// One paint operation, in page coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DrawCommand {
    /// Filled and/or stroked rounded rectangle.
    Rect {
        /// Geometry.
        #[serde(flatten)]
        frame: Frame,
        /// Fill color.
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
        /// CSS gradient painted instead of `fill` by hosts that support it.
        #[serde(skip_serializing_if = "Option::is_none")]
        gradient: Option<String>,
        /// Stroke color.
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<String>,
        /// Stroke width.
        #[serde(rename = "strokeWidth")]
        stroke_width: f32,
        /// Corner radius.
        radius: f32,
        /// Opacity in `[0, 1]`.
        opacity: f32,
    },
    /// Straight line.
    Line {
        /// Start point.
        from: (f32, f32),
        /// End point.
        to: (f32, f32),
        /// Line color.
        stroke: String,
        /// Line width.
        width: f32,
        /// Whether the line is dashed.
        dashed: bool,
    },
    /// Text laid out inside a box.
    Text {
        /// Text box.
        #[serde(flatten)]
        frame: Frame,
        /// Content; newlines break lines.
        text: String,
        /// Font size in points.
        #[serde(rename = "fontSize")]
        font_size: f32,
        /// CSS font stack.
        #[serde(rename = "fontFamily")]
        font_family: String,
        /// Text color.
        fill: String,
        /// Horizontal alignment.
        align: TextAlign,
    },
}

/// Composes draw lists for one page configuration and theme.
#[derive(Debug, Clone)]
pub struct Surface<'a> {
    config: &'a CanvasConfig,
    theme: &'a ResolvedTheme,
    show_grid: bool,
}

impl<'a> Surface<'a> {
    /// Create a surface with the grid visible.
    #[must_use]
    pub const fn new(config: &'a CanvasConfig, theme: &'a ResolvedTheme) -> Self {
        Self {
            config,
            theme,
            show_grid: true,
        }
    }

    /// Toggle grid lines.
    #[must_use]
    pub const fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    /// Draw list for a scene: backdrop, grid, elements, selection, guides.
    #[must_use]
    pub fn compose(&self, scene: &Scene, guides: Guides) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(scene.element_count() * 2 + 8);
        self.backdrop(&mut commands);
        if self.show_grid {
            self.grid(&mut commands);
        }
        for element in scene.elements() {
            self.element(&mut commands, element);
        }
        if let Some(selected) = scene.selected_element() {
            self.selection(&mut commands, &selected.frame);
        }
        self.guides(&mut commands, guides);
        commands
    }

    fn backdrop(&self, commands: &mut Vec<DrawCommand>) {
        let config = self.config;
        let style = self.theme.template.style();

        commands.push(DrawCommand::Rect {
            frame: Frame::new(0.0, 0.0, config.page_width, config.page_height),
            fill: Some("#ffffff".to_string()),
            gradient: None,
            stroke: None,
            stroke_width: 0.0,
            radius: PAGE_RADIUS,
            opacity: 1.0,
        });

        // A custom header color replaces the template gradient.
        let gradient = style
            .header_gradient
            .filter(|_| self.theme.header_bg_color == style.header_bg_color)
            .map(str::to_string);
        commands.push(DrawCommand::Rect {
            frame: Frame::new(0.0, 0.0, config.page_width, HEADER_HEIGHT),
            fill: Some(self.theme.header_bg_color.clone()),
            gradient,
            stroke: None,
            stroke_width: 0.0,
            radius: PAGE_RADIUS,
            opacity: HEADER_OPACITY,
        });

        commands.push(DrawCommand::Rect {
            frame: Frame::new(
                SIDEBAR_X,
                SIDEBAR_Y,
                config.page_width * config.sidebar_ratio,
                config.page_height - SIDEBAR_BOTTOM_INSET,
            ),
            fill: Some(self.theme.sidebar_bg_color.clone()),
            gradient: None,
            stroke: Some(style.sidebar_border_color.to_string()),
            stroke_width: 1.0,
            radius: SIDEBAR_RADIUS,
            opacity: SIDEBAR_OPACITY,
        });
    }

    fn grid(&self, commands: &mut Vec<DrawCommand>) {
        let config = self.config;
        let line = |from, to| DrawCommand::Line {
            from,
            to,
            stroke: GRID_COLOR.to_string(),
            width: GRID_LINE_WIDTH,
            dashed: false,
        };

        let mut x = config.grid_size;
        while x < config.page_width {
            commands.push(line((x, 0.0), (x, config.page_height)));
            x += config.grid_size;
        }
        let mut y = config.grid_size;
        while y < config.page_height {
            commands.push(line((0.0, y), (config.page_width, y)));
            y += config.grid_size;
        }
    }

    fn element(&self, commands: &mut Vec<DrawCommand>, element: &CanvasElement) {
        let padding = element.padding.unwrap_or(0.0);
        if element.kind == ElementKind::Chip {
            commands.push(DrawCommand::Rect {
                frame: element.frame,
                fill: Some(self.theme.pill_bg_color.clone()),
                gradient: None,
                stroke: Some(self.theme.accent_color.clone()),
                stroke_width: CHIP_STROKE,
                radius: CHIP_RADIUS,
                opacity: 1.0,
            });
        }

        let frame = element.frame;
        commands.push(DrawCommand::Text {
            frame: Frame::new(
                frame.x + padding,
                frame.y + padding,
                (frame.width - padding * 2.0).max(0.0),
                (frame.height - padding * 2.0).max(0.0),
            ),
            text: element.text.clone(),
            font_size: element.font_size,
            font_family: element.font_family.css_family().to_string(),
            fill: element.fill.clone(),
            align: element.align.unwrap_or_default(),
        });
    }

    fn selection(&self, commands: &mut Vec<DrawCommand>, frame: &Frame) {
        commands.push(DrawCommand::Rect {
            frame: *frame,
            fill: None,
            gradient: None,
            stroke: Some(self.theme.accent_color.clone()),
            stroke_width: SELECTION_STROKE,
            radius: 0.0,
            opacity: 1.0,
        });
        for handle in ResizeHandle::ALL {
            let (x, y) = handle.position(frame);
            commands.push(DrawCommand::Rect {
                frame: Frame::new(
                    x - HANDLE_SIZE / 2.0,
                    y - HANDLE_SIZE / 2.0,
                    HANDLE_SIZE,
                    HANDLE_SIZE,
                ),
                fill: Some("#ffffff".to_string()),
                gradient: None,
                stroke: Some(self.theme.accent_color.clone()),
                stroke_width: SELECTION_STROKE,
                radius: 2.0,
                opacity: 1.0,
            });
        }
    }

    fn guides(&self, commands: &mut Vec<DrawCommand>, guides: Guides) {
        let config = self.config;
        let guide = |from, to| DrawCommand::Line {
            from,
            to,
            stroke: self.theme.accent_color.clone(),
            width: GUIDE_WIDTH,
            dashed: true,
        };
        if let Some(x) = guides.vertical {
            commands.push(guide((x, 0.0), (x, config.page_height)));
        }
        if let Some(y) = guides.horizontal {
            commands.push(guide((0.0, y), (config.page_width, y)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{project, ElementId, StructuredResume, TemplateId, ThemeOverrides};

    fn scene() -> Scene {
        Scene::new(project(
            &StructuredResume::initial(),
            TemplateId::Modern,
            None,
        ))
    }

    fn rects(commands: &[DrawCommand]) -> Vec<(&Frame, f32, f32)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect {
                    frame,
                    radius,
                    opacity,
                    ..
                } => Some((frame, *radius, *opacity)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_backdrop_geometry() {
        let config = CanvasConfig::default();
        let theme = ResolvedTheme::resolve(TemplateId::Modern, None);
        let commands = Surface::new(&config, &theme)
            .with_grid(false)
            .compose(&Scene::default(), Guides::default());
        let rects = rects(&commands);
        assert_eq!(rects.len(), 3);

        let (page, radius, _) = rects[0];
        assert!((page.width - 816.0).abs() < f32::EPSILON);
        assert!((radius - 12.0).abs() < f32::EPSILON);

        let (header, _, opacity) = rects[1];
        assert!((header.height - 150.0).abs() < f32::EPSILON);
        assert!((opacity - 0.95).abs() < f32::EPSILON);

        let (sidebar, _, opacity) = rects[2];
        assert!((sidebar.x - 32.0).abs() < f32::EPSILON);
        assert!((sidebar.y - 140.0).abs() < f32::EPSILON);
        assert!((sidebar.width - 816.0 * 0.38).abs() < 1e-3);
        assert!((sidebar.height - 876.0).abs() < f32::EPSILON);
        assert!((opacity - 0.92).abs() < f32::EPSILON);
    }

    #[test]
    fn test_header_override_replaces_gradient() {
        let config = CanvasConfig::default();
        let overrides = ThemeOverrides {
            header_bg_color: Some("#123456".to_string()),
            ..ThemeOverrides::default()
        };
        let theme = ResolvedTheme::resolve(TemplateId::Modern, Some(&overrides));
        let commands = Surface::new(&config, &theme)
            .with_grid(false)
            .compose(&Scene::default(), Guides::default());
        match &commands[1] {
            DrawCommand::Rect { fill, gradient, .. } => {
                assert_eq!(fill.as_deref(), Some("#123456"));
                assert!(gradient.is_none());
            }
            other => panic!("expected header rect, got {other:?}"),
        }
    }

    #[test]
    fn test_chip_chrome_and_padding() {
        let config = CanvasConfig::default();
        let theme = ResolvedTheme::resolve(TemplateId::Modern, None);
        let scene = scene();
        let chip = scene
            .get_element(&ElementId::new("skill-0"))
            .expect("chip")
            .clone();
        let commands = Surface::new(&config, &theme)
            .with_grid(false)
            .compose(&scene, Guides::default());

        let chrome = commands.iter().any(|c| {
            matches!(c, DrawCommand::Rect { frame, radius, stroke_width, .. }
                if *frame == chip.frame
                    && (*radius - 14.0).abs() < f32::EPSILON
                    && (*stroke_width - 0.75).abs() < f32::EPSILON)
        });
        assert!(chrome);

        let padding = chip.padding.expect("chip padding");
        let inset = commands.iter().any(|c| {
            matches!(c, DrawCommand::Text { frame, text, .. }
                if text == &chip.text && (frame.x - (chip.frame.x + padding)).abs() < f32::EPSILON)
        });
        assert!(inset);
    }

    #[test]
    fn test_selection_and_guides() {
        let config = CanvasConfig::default();
        let theme = ResolvedTheme::resolve(TemplateId::Modern, None);
        let mut scene = scene();
        scene.select(&ElementId::new("summary")).expect("select");
        let guides = Guides {
            vertical: Some(config.center_x()),
            horizontal: None,
        };
        let commands = Surface::new(&config, &theme)
            .with_grid(false)
            .compose(&scene, guides);

        let handles = rects(&commands)
            .iter()
            .filter(|(frame, ..)| (frame.width - HANDLE_SIZE).abs() < f32::EPSILON)
            .count();
        assert_eq!(handles, 4);

        let dashed: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { dashed: true, .. }))
            .collect();
        assert_eq!(dashed.len(), 1);
    }

    #[test]
    fn test_grid_lines_every_unit() {
        let config = CanvasConfig::default();
        let theme = ResolvedTheme::resolve(TemplateId::Minimal, None);
        let commands = Surface::new(&config, &theme).compose(&Scene::default(), Guides::default());
        let lines = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        // 816 / 8 - 1 vertical, 1056 / 8 - 1 horizontal
        assert_eq!(lines, 101 + 131);
    }

    #[test]
    fn test_wire_format() {
        let command = DrawCommand::Line {
            from: (0.0, 0.0),
            to: (1.0, 1.0),
            stroke: "#000".to_string(),
            width: 1.0,
            dashed: true,
        };
        let json = serde_json::to_value(&command).expect("serialize");
        assert_eq!(json["op"], "line");
        assert_eq!(json["dashed"], true);
    }
}
