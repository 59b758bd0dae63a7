use alloc::format;

use embedded_graphics::geometry::Point;
use log::trace;

use crate::animation::AnimationCursor;
use crate::coordinate_mapper::{spiral_points, PolarLayout};
use crate::error::Result;
use crate::palette::{self, BLACK, CYAN, WHITE, YELLOW};
use crate::primitive::{Anchor, FontClass, Primitive, ShapeStyle};
use crate::scene::{Scene, SceneBuilder, Viewport};

pub const NODE_COUNT: usize = 9;
pub const TESLA_NUMBERS: [usize; 3] = [3, 6, 9];
/// Digital roots of successive doublings; 3, 6 and 9 never appear.
pub const DOUBLING_SEQUENCE: [usize; 7] = [1, 2, 4, 8, 7, 5, 1];

const SPIRAL_LOOPS: u32 = 4;
const SPIRAL_STEP_DEG: u32 = 5;
const GLOW_RADIUS: i32 = 24;
const NODE_RADIUS: i32 = 20;
const NODE_STROKE: u32 = 2;
const STATIC_LINE_WIDTH: u32 = 2;
const HIGHLIGHT_WIDTH: u32 = 3;

/// Numbers 1 to 9 around a circle, linked in doubling order, with one
/// segment of the chain highlighted per animation tick.
#[derive(Debug, Clone)]
pub struct NumerologyCircle {
    sequence: &'static [usize],
    cursor: AnimationCursor,
}

impl Default for NumerologyCircle {
    fn default() -> Self {
        Self::new(&DOUBLING_SEQUENCE)
    }
}

impl NumerologyCircle {
    pub fn new(sequence: &'static [usize]) -> Self {
        Self {
            sequence,
            cursor: AnimationCursor::new(sequence.len().saturating_sub(1)),
        }
    }

    pub fn sequence(&self) -> &'static [usize] {
        self.sequence
    }

    pub fn cursor(&self) -> &AnimationCursor {
        &self.cursor
    }

    /// Node numbers joined by the segment under the cursor.
    pub fn highlighted_segment(&self) -> Option<(usize, usize)> {
        if self.cursor.is_empty() {
            return None;
        }
        let i = self.cursor.position();
        Some((self.sequence[i], self.sequence[i + 1]))
    }

    pub fn layout(viewport: &Viewport) -> Result<PolarLayout> {
        let radius = viewport.width.min(viewport.height) / 3;
        PolarLayout::new(
            (viewport.width / 2) as f64,
            (viewport.height / 2) as f64,
            radius as f64,
            NODE_COUNT,
        )
    }

    fn push_nodes(&self, layout: &PolarLayout, scene: &mut Scene) -> Result<()> {
        for number in 1..=NODE_COUNT {
            let center = layout.point(number)?;
            let tesla = TESLA_NUMBERS.contains(&number);
            let color = if tesla { CYAN } else { WHITE };
            if tesla {
                scene.push(Primitive::circle(
                    center,
                    GLOW_RADIUS,
                    ShapeStyle::filled(palette::BLUE),
                ));
            }
            scene.push(Primitive::circle(
                center,
                NODE_RADIUS,
                ShapeStyle::outlined(BLACK, color).with_stroke_width(NODE_STROKE),
            ));
            scene.push(Primitive::text(
                center,
                format!("{number}"),
                color,
                FontClass::Heading,
                Anchor::Center,
            ));
        }
        Ok(())
    }
}

impl SceneBuilder for NumerologyCircle {
    fn build(&self, viewport: &Viewport, scene: &mut Scene) -> Result<()> {
        let layout = Self::layout(viewport)?;
        let (cx, cy) = layout.center();
        let center = Point::new(cx as i32, cy as i32);

        let spiral = spiral_points(center, layout.radius() as f32, SPIRAL_LOOPS, SPIRAL_STEP_DEG);
        scene.extend(
            spiral
                .windows(2)
                .map(|pair| Primitive::line(pair[0], pair[1], palette::GRAY20, 1)),
        );

        self.push_nodes(&layout, scene)?;

        for pair in self.sequence.windows(2) {
            scene.push(Primitive::arrow(
                layout.point(pair[0])?,
                layout.point(pair[1])?,
                YELLOW,
                STATIC_LINE_WIDTH,
            ));
        }

        if let Some((from, to)) = self.highlighted_segment() {
            trace!("highlighting {} -> {}", from, to);
            scene.push(Primitive::arrow(
                layout.point(from)?,
                layout.point(to)?,
                YELLOW,
                HIGHLIGHT_WIDTH,
            ));
        }
        Ok(())
    }

    fn on_tick(&mut self) {
        self.cursor.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VizError;

    fn last_line(scene: &Scene) -> &Primitive {
        scene.primitives().last().unwrap()
    }

    #[test]
    fn test_layout_matches_window() {
        let layout = NumerologyCircle::layout(&Viewport::new(600, 600)).unwrap();
        assert_eq!(layout.center(), (300.0, 300.0));
        assert_eq!(layout.radius(), 200.0);
        assert_eq!(layout.point(1), Ok(Point::new(300, 100)));
        assert_eq!(layout.point(NODE_COUNT + 1).map(|_| ()), Err(VizError::IndexOutOfRange {
            index: 10,
            count: 9,
        }));
    }

    #[test]
    fn test_highlight_walks_the_doubling_chain() {
        let mut circle = NumerologyCircle::default();
        let mut seen = alloc::vec::Vec::new();
        for _ in 0..7 {
            seen.push(circle.highlighted_segment().unwrap());
            circle.on_tick();
        }
        assert_eq!(
            seen,
            [(1, 2), (2, 4), (4, 8), (8, 7), (7, 5), (5, 1), (1, 2)]
        );
    }

    #[test]
    fn test_highlight_is_painted_last() {
        let viewport = Viewport::new(600, 600);
        let mut circle = NumerologyCircle::default();
        circle.on_tick();
        let mut scene = Scene::new();
        circle.build(&viewport, &mut scene).unwrap();

        let layout = NumerologyCircle::layout(&viewport).unwrap();
        assert_eq!(
            last_line(&scene),
            &Primitive::arrow(
                layout.point(2).unwrap(),
                layout.point(4).unwrap(),
                YELLOW,
                HIGHLIGHT_WIDTH
            )
        );
    }

    #[test]
    fn test_scene_composition() {
        let mut scene = Scene::new();
        NumerologyCircle::default()
            .build(&Viewport::new(600, 600), &mut scene)
            .unwrap();
        // 288 spiral points give 287 segments.
        let spiral = 287;
        let nodes = NODE_COUNT * 2 + TESLA_NUMBERS.len();
        let static_lines = DOUBLING_SEQUENCE.len() - 1;
        assert_eq!(scene.len(), spiral + nodes + static_lines + 1);

        let glows = scene
            .iter()
            .filter(|p| matches!(p, Primitive::Oval { style, .. } if style.outline.is_none()))
            .count();
        assert_eq!(glows, 3);
    }

    static SINGLE: [usize; 1] = [5];

    #[test]
    fn test_sequence_without_segments_has_no_highlight() {
        let circle = NumerologyCircle::new(&SINGLE);
        assert_eq!(circle.highlighted_segment(), None);
        let mut scene = Scene::new();
        circle.build(&Viewport::new(600, 600), &mut scene).unwrap();
        assert!(matches!(last_line(&scene), Primitive::Text { .. }));
    }
}
