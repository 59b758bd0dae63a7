use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb888;

use crate::error::Result;
use crate::palette;
use crate::primitive::Primitive;

/// Explicit drawing context handed to scene builders instead of a global
/// canvas handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Vertical scroll offset in pixels; content is shifted up by this much.
    pub scroll_y: i32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0,
        }
    }

    pub const fn with_scroll(mut self, scroll_y: i32) -> Self {
        self.scroll_y = scroll_y;
        self
    }
}

/// Ordered primitives for one frame. Later entries paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            primitives: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }
}

impl IntoIterator for Scene {
    type Item = Primitive;
    type IntoIter = alloc::vec::IntoIter<Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.into_iter()
    }
}

impl Extend<Primitive> for Scene {
    fn extend<I: IntoIterator<Item = Primitive>>(&mut self, iter: I) {
        self.primitives.extend(iter);
    }
}

/// Turns a static dataset into the primitives of one frame.
pub trait SceneBuilder {
    /// Appends this frame's primitives to `scene`, in paint order.
    fn build(&self, viewport: &Viewport, scene: &mut Scene) -> Result<()>;

    fn background(&self) -> Rgb888 {
        palette::BLACK
    }

    /// Total height of the content; anything above the viewport height can
    /// be scrolled into view.
    fn content_height(&self, viewport: &Viewport) -> u32 {
        viewport.height
    }

    /// Advances the animation state by one timer tick.
    fn on_tick(&mut self) {}
}
