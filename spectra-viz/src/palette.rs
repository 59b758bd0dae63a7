use embedded_graphics::pixelcolor::Rgb888;

use crate::error::{Result, VizError};

// X11 color names.
pub const BLACK: Rgb888 = Rgb888::new(0, 0, 0);
pub const WHITE: Rgb888 = Rgb888::new(255, 255, 255);
pub const GRAY: Rgb888 = Rgb888::new(190, 190, 190);
pub const GRAY20: Rgb888 = Rgb888::new(51, 51, 51);
pub const LIGHT_GRAY: Rgb888 = Rgb888::new(211, 211, 211);
pub const PURPLE: Rgb888 = Rgb888::new(160, 32, 240);
pub const DARK_RED: Rgb888 = Rgb888::new(139, 0, 0);
pub const RED: Rgb888 = Rgb888::new(255, 0, 0);
pub const BLUE: Rgb888 = Rgb888::new(0, 0, 255);
pub const SKY_BLUE: Rgb888 = Rgb888::new(135, 206, 235);
pub const DEEP_SKY_BLUE: Rgb888 = Rgb888::new(0, 191, 255);
pub const CYAN: Rgb888 = Rgb888::new(0, 255, 255);
pub const ORANGE: Rgb888 = Rgb888::new(255, 165, 0);
pub const GOLD: Rgb888 = Rgb888::new(255, 215, 0);
pub const YELLOW: Rgb888 = Rgb888::new(255, 255, 0);
pub const LIME: Rgb888 = Rgb888::new(0, 255, 0);
pub const VIOLET: Rgb888 = Rgb888::new(238, 130, 238);

/// Parses a `#rrggbb` color code.
pub fn parse_hex_color(code: &str) -> Result<Rgb888> {
    let digits = code.strip_prefix('#').ok_or(VizError::InvalidColor)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(VizError::InvalidColor);
    }
    let channel = |range: core::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| VizError::InvalidColor)
    };
    Ok(Rgb888::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff7f00"), Ok(Rgb888::new(255, 127, 0)));
        assert_eq!(parse_hex_color("#4B0082"), Ok(Rgb888::new(75, 0, 130)));
        assert_eq!(parse_hex_color("#8f00ff"), Ok(Rgb888::new(143, 0, 255)));
    }

    #[test]
    fn test_parse_hex_color_rejects_malformed_codes() {
        assert_eq!(parse_hex_color("ff7f00"), Err(VizError::InvalidColor));
        assert_eq!(parse_hex_color("#ff7f0"), Err(VizError::InvalidColor));
        assert_eq!(parse_hex_color("#gg0000"), Err(VizError::InvalidColor));
        assert_eq!(parse_hex_color("#ffé000"), Err(VizError::InvalidColor));
    }
}
