use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    mono_font::MonoTextStyle,
    pixelcolor::Rgb888,
    primitives::{
        Ellipse, Line, Primitive as _, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, Triangle,
    },
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};

use crate::primitive::{Anchor, Primitive, ShapeStyle};
use crate::scene::Scene;

// Arrow head shape in pixels: length along the line, half-width at the base.
const ARROW_LENGTH: f64 = 10.0;
const ARROW_HALF_WIDTH: f64 = 4.0;

pub trait Renderer {
    fn draw<D: DrawTarget<Color = Rgb888>>(&self, target: &mut D) -> Result<(), D::Error>;
}

impl Renderer for Scene {
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        for primitive in self.iter() {
            primitive.draw(target)?;
        }
        Ok(())
    }
}

impl Renderer for Primitive {
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        match self {
            Primitive::Rectangle {
                corner_a,
                corner_b,
                style,
            } => Rectangle::with_corners(*corner_a, *corner_b)
                .into_styled(primitive_style(style))
                .draw(target),
            Primitive::Oval {
                corner_a,
                corner_b,
                style,
            } => {
                let top_left = Point::new(corner_a.x.min(corner_b.x), corner_a.y.min(corner_b.y));
                let size = Size::new(
                    corner_a.x.abs_diff(corner_b.x),
                    corner_a.y.abs_diff(corner_b.y),
                );
                Ellipse::new(top_left, size)
                    .into_styled(primitive_style(style))
                    .draw(target)
            }
            Primitive::Line {
                start,
                end,
                color,
                width,
                arrow,
            } => {
                Line::new(*start, *end)
                    .into_styled(PrimitiveStyle::with_stroke(*color, (*width).max(1)))
                    .draw(target)?;
                if *arrow {
                    if let Some(head) = arrow_head(*start, *end, *width) {
                        head.into_styled(PrimitiveStyle::with_fill(*color))
                            .draw(target)?;
                    }
                }
                Ok(())
            }
            Primitive::Text {
                position,
                text,
                color,
                font,
                anchor,
            } => {
                let alignment = match anchor {
                    Anchor::Center => Alignment::Center,
                    Anchor::West => Alignment::Left,
                    Anchor::East => Alignment::Right,
                };
                let text_style = TextStyleBuilder::new()
                    .alignment(alignment)
                    .baseline(Baseline::Middle)
                    .build();
                Text::with_text_style(
                    text,
                    *position,
                    MonoTextStyle::new(font.font(), *color),
                    text_style,
                )
                .draw(target)?;
                Ok(())
            }
        }
    }
}

fn primitive_style(style: &ShapeStyle) -> PrimitiveStyle<Rgb888> {
    let mut builder = PrimitiveStyleBuilder::new();
    if let Some(fill) = style.fill {
        builder = builder.fill_color(fill);
    }
    if let Some(outline) = style.outline {
        builder = builder
            .stroke_color(outline)
            .stroke_width(style.stroke_width.max(1));
    }
    builder.build()
}

/// Filled triangle whose tip sits on `end`, pointing away from `start`.
fn arrow_head(start: Point, end: Point, width: u32) -> Option<Triangle> {
    let dx = (end.x - start.x) as f64;
    let dy = (end.y - start.y) as f64;
    let length = libm::hypot(dx, dy);
    if length < 1.0 {
        return None;
    }
    let (ux, uy) = (dx / length, dy / length);
    let half_width = ARROW_HALF_WIDTH + width as f64 / 2.0;
    let base_x = end.x as f64 - ux * ARROW_LENGTH;
    let base_y = end.y as f64 - uy * ARROW_LENGTH;
    let wing = |side: f64| {
        Point::new(
            libm::round(base_x - uy * half_width * side) as i32,
            libm::round(base_y + ux * half_width * side) as i32,
        )
    };
    Some(Triangle::new(end, wing(1.0), wing(-1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::FontClass;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::RgbColor;

    fn display() -> MockDisplay<Rgb888> {
        let mut display = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn test_rectangle_fill_and_outline() {
        let mut fb = display();
        Primitive::rectangle(
            Point::new(20, 10),
            Point::new(2, 2),
            ShapeStyle::outlined(Rgb888::BLUE, Rgb888::WHITE),
        )
        .draw(&mut fb)
        .unwrap();

        assert_eq!(fb.get_pixel(Point::new(2, 2)), Some(Rgb888::WHITE));
        assert_eq!(fb.get_pixel(Point::new(10, 6)), Some(Rgb888::BLUE));
        assert_eq!(fb.get_pixel(Point::new(30, 6)), None);
    }

    #[test]
    fn test_arrow_head_drawn_at_end() {
        let mut plain = display();
        let mut arrowed = display();
        Primitive::line(Point::new(2, 30), Point::new(40, 30), Rgb888::YELLOW, 1)
            .draw(&mut plain)
            .unwrap();
        Primitive::arrow(Point::new(2, 30), Point::new(40, 30), Rgb888::YELLOW, 1)
            .draw(&mut arrowed)
            .unwrap();

        assert_eq!(plain.get_pixel(Point::new(33, 32)), None);
        assert_eq!(arrowed.get_pixel(Point::new(33, 32)), Some(Rgb888::YELLOW));
    }

    #[test]
    fn test_degenerate_arrow_has_no_head() {
        assert!(arrow_head(Point::new(5, 5), Point::new(5, 5), 2).is_none());
    }

    #[test]
    fn test_scene_paints_in_order() {
        let mut scene = Scene::new();
        scene.push(Primitive::rectangle(
            Point::new(0, 0),
            Point::new(10, 10),
            ShapeStyle::filled(Rgb888::RED),
        ));
        scene.push(Primitive::rectangle(
            Point::new(5, 5),
            Point::new(10, 10),
            ShapeStyle::filled(Rgb888::GREEN),
        ));
        scene.push(Primitive::text(
            Point::new(40, 40),
            "1",
            Rgb888::WHITE,
            FontClass::Label,
            Anchor::Center,
        ));

        let mut fb = display();
        scene.draw(&mut fb).unwrap();
        assert_eq!(fb.get_pixel(Point::new(2, 2)), Some(Rgb888::RED));
        assert_eq!(fb.get_pixel(Point::new(7, 7)), Some(Rgb888::GREEN));
    }
}
