use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888};
use log::{debug, trace};

use crate::error::Result;
use crate::renderer::Renderer;
use crate::scene::{Scene, SceneBuilder, Viewport};

/// Events the render task reacts to. Background tasks only ever produce
/// these; drawing stays on the task that owns the `FrameDriver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    Resized { width: u32, height: u32 },
    /// Scroll by this many pixels; positive moves the content up.
    Scrolled(i32),
    Tick,
    Redraw,
}

/// Rebuilds a builder's scene from scratch on every trigger.
pub struct FrameDriver<B> {
    builder: B,
    viewport: Viewport,
    scene: Scene,
    frame_count: u32,
}

impl<B: SceneBuilder> FrameDriver<B> {
    pub fn new(builder: B, viewport: Viewport) -> Self {
        Self {
            builder,
            viewport,
            scene: Scene::new(),
            frame_count: 0,
        }
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut B {
        &mut self.builder
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The scene produced by the last successful `render`.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Discards the current scene and builds a fresh one.
    ///
    /// On error the previous scene is kept so the window still shows the last
    /// good frame.
    pub fn render(&mut self) -> Result<&Scene> {
        let mut next = Scene::with_capacity(self.scene.len());
        self.builder.build(&self.viewport, &mut next)?;
        self.scene = next;
        self.frame_count = self.frame_count.wrapping_add(1);
        trace!(
            "frame {}: {} primitives at {}x{}",
            self.frame_count,
            self.scene.len(),
            self.viewport.width,
            self.viewport.height
        );
        Ok(&self.scene)
    }

    /// Applies `event` and re-renders.
    pub fn handle(&mut self, event: FrameEvent) -> Result<&Scene> {
        match event {
            FrameEvent::Resized { width, height } => {
                debug!("viewport resized to {}x{}", width, height);
                self.viewport.width = width;
                self.viewport.height = height;
                self.scroll_to(self.viewport.scroll_y);
            }
            FrameEvent::Scrolled(delta) => {
                self.scroll_to(self.viewport.scroll_y.saturating_add(delta));
            }
            FrameEvent::Tick => self.builder.on_tick(),
            FrameEvent::Redraw => {}
        }
        self.render()
    }

    /// Clears `target` to the builder's background and paints the current scene.
    pub fn present<D>(&self, target: &mut D) -> core::result::Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        target.clear(self.builder.background())?;
        self.scene.draw(target)
    }

    fn scroll_to(&mut self, scroll_y: i32) {
        let max_scroll = self
            .builder
            .content_height(&self.viewport)
            .saturating_sub(self.viewport.height)
            .min(i32::MAX as u32) as i32;
        self.viewport.scroll_y = scroll_y.clamp(0, max_scroll);
    }
}
