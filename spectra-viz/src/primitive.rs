use alloc::string::String;

use embedded_graphics::{
    geometry::Point,
    mono_font::{ascii, MonoFont},
    pixelcolor::Rgb888,
};

/// Font classes used by the diagrams, mapped onto fixed-size mono fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontClass {
    Caption,
    Label,
    LabelBold,
    Italic,
    Heading,
    Title,
}

impl FontClass {
    pub fn font(self) -> &'static MonoFont<'static> {
        match self {
            FontClass::Caption => &ascii::FONT_5X8,
            FontClass::Label => &ascii::FONT_6X10,
            FontClass::LabelBold => &ascii::FONT_7X13_BOLD,
            FontClass::Italic => &ascii::FONT_6X13_ITALIC,
            FontClass::Heading => &ascii::FONT_9X15_BOLD,
            FontClass::Title => &ascii::FONT_10X20,
        }
    }
}

/// Horizontal anchor of a text primitive; text is always vertically centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    West,
    East,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeStyle {
    pub fill: Option<Rgb888>,
    pub outline: Option<Rgb888>,
    pub stroke_width: u32,
}

impl ShapeStyle {
    pub const fn filled(fill: Rgb888) -> Self {
        Self {
            fill: Some(fill),
            outline: None,
            stroke_width: 0,
        }
    }

    pub const fn outlined(fill: Rgb888, outline: Rgb888) -> Self {
        Self {
            fill: Some(fill),
            outline: Some(outline),
            stroke_width: 1,
        }
    }

    pub const fn with_stroke_width(mut self, stroke_width: u32) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// One drawable element of a scene. Corner pairs may come in any order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rectangle {
        corner_a: Point,
        corner_b: Point,
        style: ShapeStyle,
    },
    Oval {
        corner_a: Point,
        corner_b: Point,
        style: ShapeStyle,
    },
    Line {
        start: Point,
        end: Point,
        color: Rgb888,
        width: u32,
        arrow: bool,
    },
    Text {
        position: Point,
        text: String,
        color: Rgb888,
        font: FontClass,
        anchor: Anchor,
    },
}

impl Primitive {
    pub fn rectangle(corner_a: Point, corner_b: Point, style: ShapeStyle) -> Self {
        Primitive::Rectangle {
            corner_a,
            corner_b,
            style,
        }
    }

    pub fn oval(corner_a: Point, corner_b: Point, style: ShapeStyle) -> Self {
        Primitive::Oval {
            corner_a,
            corner_b,
            style,
        }
    }

    /// Oval inscribed in the square of half-size `radius` around `center`.
    pub fn circle(center: Point, radius: i32, style: ShapeStyle) -> Self {
        let half = Point::new(radius, radius);
        Self::oval(center - half, center + half, style)
    }

    pub fn line(start: Point, end: Point, color: Rgb888, width: u32) -> Self {
        Primitive::Line {
            start,
            end,
            color,
            width,
            arrow: false,
        }
    }

    /// A line with an arrow head at `end`.
    pub fn arrow(start: Point, end: Point, color: Rgb888, width: u32) -> Self {
        Primitive::Line {
            start,
            end,
            color,
            width,
            arrow: true,
        }
    }

    pub fn text(
        position: Point,
        text: impl Into<String>,
        color: Rgb888,
        font: FontClass,
        anchor: Anchor,
    ) -> Self {
        Primitive::Text {
            position,
            text: text.into(),
            color,
            font,
            anchor,
        }
    }

    /// Moves the primitive down by `dy` pixels.
    pub fn offset_y(&mut self, dy: i32) {
        let delta = Point::new(0, dy);
        match self {
            Primitive::Rectangle {
                corner_a, corner_b, ..
            }
            | Primitive::Oval {
                corner_a, corner_b, ..
            } => {
                *corner_a += delta;
                *corner_b += delta;
            }
            Primitive::Line { start, end, .. } => {
                *start += delta;
                *end += delta;
            }
            Primitive::Text { position, .. } => *position += delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::RgbColor;

    #[test]
    fn test_circle_bounds() {
        let p = Primitive::circle(Point::new(100, 50), 20, ShapeStyle::filled(Rgb888::BLACK));
        assert_eq!(
            p,
            Primitive::oval(
                Point::new(80, 30),
                Point::new(120, 70),
                ShapeStyle::filled(Rgb888::BLACK)
            )
        );
    }

    #[test]
    fn test_offset_y_moves_every_point() {
        let mut line = Primitive::arrow(Point::new(0, 0), Point::new(10, 10), Rgb888::RED, 2);
        line.offset_y(-5);
        assert_eq!(
            line,
            Primitive::arrow(Point::new(0, -5), Point::new(10, 5), Rgb888::RED, 2)
        );

        let mut text = Primitive::text(
            Point::new(3, 4),
            "Root",
            Rgb888::WHITE,
            FontClass::Label,
            Anchor::West,
        );
        text.offset_y(10);
        match text {
            Primitive::Text { position, .. } => assert_eq!(position, Point::new(3, 14)),
            other => panic!("unexpected primitive {other:?}"),
        }
    }
}
