use std::time::Duration;

pub const SPECTRUM_WIDTH: u32 = 1200;
pub const SPECTRUM_HEIGHT: u32 = 700;

pub const CHAKRA_WIDTH: u32 = 700;
pub const CHAKRA_HEIGHT: u32 = 800;

pub const NUMEROLOGY_WIDTH: u32 = 600;
pub const NUMEROLOGY_HEIGHT: u32 = 600;

pub const FRAME_DELAY_MS: u64 = 16;
/// One highlighted segment per half second.
pub const ANIMATION_PERIOD: Duration = Duration::from_millis(500);
/// Pixels scrolled per mouse wheel notch.
pub const SCROLL_STEP: i32 = 40;
pub const TONE_QUEUE_CAPACITY: usize = 4;
