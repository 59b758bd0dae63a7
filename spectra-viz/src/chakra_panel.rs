use alloc::{format, string::String};

use embedded_graphics::geometry::Point;

use crate::coordinate_mapper::AxisMapper;
use crate::error::Result;
use crate::palette::{self, parse_hex_color, WHITE};
use crate::primitive::{Anchor, FontClass, Primitive, ShapeStyle};
use crate::scene::{Scene, SceneBuilder, Viewport};
use crate::types::Chakra;

pub const CHAKRAS: [Chakra; 7] = [
    Chakra {
        name: "Root",
        frequency_hz: 396,
        color_code: "#ff0000",
        description: "Grounding, survival, stability.",
        affirmation: "I am safe and secure.",
    },
    Chakra {
        name: "Sacral",
        frequency_hz: 417,
        color_code: "#ff7f00",
        description: "Creativity, pleasure, emotions.",
        affirmation: "I am creative and joyful.",
    },
    Chakra {
        name: "Solar Plexus",
        frequency_hz: 528,
        color_code: "#ffff00",
        description: "Confidence, power, self-esteem.",
        affirmation: "I am strong and confident.",
    },
    Chakra {
        name: "Heart",
        frequency_hz: 639,
        color_code: "#00ff00",
        description: "Love, compassion, healing.",
        affirmation: "I am open to love.",
    },
    Chakra {
        name: "Throat",
        frequency_hz: 741,
        color_code: "#0000ff",
        description: "Communication, truth, expression.",
        affirmation: "I express myself freely.",
    },
    Chakra {
        name: "Third Eye",
        frequency_hz: 852,
        color_code: "#4b0082",
        description: "Intuition, insight, vision.",
        affirmation: "I trust my intuition.",
    },
    Chakra {
        name: "Crown",
        frequency_hz: 963,
        color_code: "#8f00ff",
        description: "Spirituality, connection, enlightenment.",
        affirmation: "I am connected to the divine.",
    },
];

const HEADER_Y: i32 = 40;
const ROWS_TOP: i32 = 80;
const ROW_HEIGHT: i32 = 140;
const ROW_PAD_X: i32 = 40;
const SWATCH_INSET: i32 = 5;
const SWATCH_SIZE: i32 = 50;
const INFO_OFFSET_X: i32 = 80;
const BUTTON_OFFSET_Y: i32 = 100;
const BUTTON_WIDTH: i32 = 140;
const BUTTON_HEIGHT: i32 = 24;

const CHART_GAP: i32 = 20;
const CHART_HEIGHT: i32 = 300;
const CHART_MAX_WIDTH: i32 = 600;
const PLOT_MARGIN_LEFT: i32 = 60;
const PLOT_MARGIN_RIGHT: i32 = 20;
const PLOT_MARGIN_TOP: i32 = 40;
const PLOT_MARGIN_BOTTOM: i32 = 40;
const TICK_STEP_HZ: u32 = 200;

/// Informational panel: one row per chakra with a play button, followed by
/// a bar chart of the frequencies. Taller than the window; scrolls.
#[derive(Debug, Clone, Copy)]
pub struct ChakraPanel {
    chakras: &'static [Chakra],
}

impl Default for ChakraPanel {
    fn default() -> Self {
        Self::new(&CHAKRAS)
    }
}

impl ChakraPanel {
    pub fn new(chakras: &'static [Chakra]) -> Self {
        Self { chakras }
    }

    pub fn chakras(&self) -> &'static [Chakra] {
        self.chakras
    }

    /// Screen-space corners of the play button of row `index`.
    pub fn button_bounds(&self, index: usize, viewport: &Viewport) -> Option<(Point, Point)> {
        if index >= self.chakras.len() {
            return None;
        }
        let top_left = Point::new(
            ROW_PAD_X + INFO_OFFSET_X,
            row_top(index) + BUTTON_OFFSET_Y - viewport.scroll_y,
        );
        Some((
            top_left,
            top_left + Point::new(BUTTON_WIDTH, BUTTON_HEIGHT),
        ))
    }

    /// Index of the chakra whose play button contains `point`.
    pub fn button_at(&self, viewport: &Viewport, point: Point) -> Option<usize> {
        (0..self.chakras.len()).find(|&index| {
            self.button_bounds(index, viewport)
                .is_some_and(|(a, b)| (a.x..=b.x).contains(&point.x) && (a.y..=b.y).contains(&point.y))
        })
    }

    fn chart_top(&self) -> i32 {
        row_top(self.chakras.len()) + CHART_GAP
    }

    fn push_row(&self, index: usize, chakra: &Chakra, scene: &mut Scene) -> Result<()> {
        let color = parse_hex_color(chakra.color_code)?;
        let y = row_top(index);
        let swatch = Point::new(ROW_PAD_X + SWATCH_INSET, y + SWATCH_INSET);
        scene.push(Primitive::oval(
            swatch,
            swatch + Point::new(SWATCH_SIZE, SWATCH_SIZE),
            ShapeStyle::filled(color),
        ));

        let x = ROW_PAD_X + INFO_OFFSET_X;
        let lines = [
            (10, format!("{} Chakra", chakra.name), color, FontClass::Heading),
            (32, format!("Frequency: {} Hz", chakra.frequency_hz), WHITE, FontClass::Label),
            (48, format!("Color Code: {}", chakra.color_code), WHITE, FontClass::Label),
            (66, String::from(chakra.description), palette::GRAY, FontClass::Label),
            (
                84,
                format!("Affirmation: {}", chakra.affirmation),
                palette::LIGHT_GRAY,
                FontClass::Italic,
            ),
        ];
        for (dy, text, color, font) in lines {
            scene.push(Primitive::text(Point::new(x, y + dy), text, color, font, Anchor::West));
        }

        let button = Point::new(x, y + BUTTON_OFFSET_Y);
        scene.push(Primitive::rectangle(
            button,
            button + Point::new(BUTTON_WIDTH, BUTTON_HEIGHT),
            ShapeStyle::outlined(palette::GRAY20, palette::LIGHT_GRAY),
        ));
        scene.push(Primitive::text(
            button + Point::new(BUTTON_WIDTH / 2, BUTTON_HEIGHT / 2),
            "Play Frequency",
            WHITE,
            FontClass::Label,
            Anchor::Center,
        ));
        Ok(())
    }

    fn push_chart(&self, viewport: &Viewport, scene: &mut Scene) -> Result<()> {
        let top = self.chart_top();
        let width = (viewport.width as i32 - 2 * ROW_PAD_X).clamp(0, CHART_MAX_WIDTH);
        let left = (viewport.width as i32 - width) / 2;

        let plot_left = left + PLOT_MARGIN_LEFT;
        let plot_right = left + width - PLOT_MARGIN_RIGHT;
        let plot_top = top + PLOT_MARGIN_TOP;
        let plot_bottom = top + CHART_HEIGHT - PLOT_MARGIN_BOTTOM;

        scene.push(Primitive::text(
            Point::new(left + width / 2, top + 15),
            "Chakra Frequencies (Hz)",
            WHITE,
            FontClass::Label,
            Anchor::Center,
        ));
        scene.push(Primitive::text(
            Point::new(plot_left, plot_top - 12),
            "Frequency (Hz)",
            WHITE,
            FontClass::Caption,
            Anchor::West,
        ));

        let y_max = axis_ceiling(self.chakras.iter().map(|c| c.frequency_hz).max().unwrap_or(0));
        let axis = AxisMapper::linear(0.0, y_max as f64, (plot_bottom - plot_top).max(0) as u32)?;

        for value in (0..=y_max).step_by(TICK_STEP_HZ as usize) {
            let y = plot_bottom - axis.map(value as f64)?;
            scene.push(Primitive::line(
                Point::new(plot_left - 5, y),
                Point::new(plot_left, y),
                WHITE,
                1,
            ));
            scene.push(Primitive::text(
                Point::new(plot_left - 8, y),
                format!("{value}"),
                WHITE,
                FontClass::Caption,
                Anchor::East,
            ));
        }

        let count = self.chakras.len().max(1) as i32;
        let slot = (plot_right - plot_left) / count;
        let bar_width = slot * 4 / 5;
        for (i, chakra) in self.chakras.iter().enumerate() {
            let color = parse_hex_color(chakra.color_code)?;
            let x = plot_left + i as i32 * slot + slot / 10;
            let height = axis.map(chakra.frequency_hz as f64)?;
            scene.push(Primitive::rectangle(
                Point::new(x, plot_bottom - height),
                Point::new(x + bar_width, plot_bottom),
                ShapeStyle::filled(color),
            ));
            // Stagger names so neighbours do not overlap.
            let label_y = plot_bottom + 12 + (i as i32 % 2) * 10;
            scene.push(Primitive::text(
                Point::new(x + bar_width / 2, label_y),
                chakra.name,
                WHITE,
                FontClass::Caption,
                Anchor::Center,
            ));
        }

        // Spines last so bars never cover them.
        scene.push(Primitive::line(
            Point::new(plot_left, plot_top),
            Point::new(plot_left, plot_bottom),
            WHITE,
            1,
        ));
        scene.push(Primitive::line(
            Point::new(plot_left, plot_bottom),
            Point::new(plot_right, plot_bottom),
            WHITE,
            1,
        ));
        Ok(())
    }
}

impl SceneBuilder for ChakraPanel {
    fn build(&self, viewport: &Viewport, scene: &mut Scene) -> Result<()> {
        let mut content = Scene::new();
        content.push(Primitive::text(
            Point::new(viewport.width as i32 / 2, HEADER_Y),
            "Chakras & Frequencies",
            WHITE,
            FontClass::Title,
            Anchor::Center,
        ));
        for (index, chakra) in self.chakras.iter().enumerate() {
            self.push_row(index, chakra, &mut content)?;
        }
        self.push_chart(viewport, &mut content)?;

        scene.extend(content.into_iter().map(|mut primitive| {
            primitive.offset_y(-viewport.scroll_y);
            primitive
        }));
        Ok(())
    }

    fn content_height(&self, _viewport: &Viewport) -> u32 {
        (self.chart_top() + CHART_HEIGHT + CHART_GAP) as u32
    }
}

fn row_top(index: usize) -> i32 {
    ROWS_TOP + index as i32 * ROW_HEIGHT
}

/// Smallest multiple of the tick step that is at least `max_hz`, and never 0.
fn axis_ceiling(max_hz: u32) -> u32 {
    max_hz.div_ceil(TICK_STEP_HZ).max(1) * TICK_STEP_HZ
}
