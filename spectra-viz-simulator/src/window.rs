use std::{thread, time::Duration};

use anyhow::Result;
use crossbeam_channel::Receiver;
use embedded_graphics::{
    geometry::{Point, Size},
    pixelcolor::Rgb888,
};
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use log::{debug, info};
use spectra_viz::{FrameDriver, FrameEvent, SceneBuilder, Viewport};

use crate::config::{FRAME_DELAY_MS, SCROLL_STEP};

/// Translates a wheel delta into a content scroll. Wheel up reveals content
/// above, so it scrolls backwards.
pub fn wheel_to_scroll(delta: Point) -> FrameEvent {
    FrameEvent::Scrolled(-delta.y.saturating_mul(SCROLL_STEP))
}

/// Runs the window until it is closed.
///
/// Events from `background` (timer ticks) are applied on this thread before
/// each frame; `on_click` sees the builder and viewport of the frame the
/// user clicked on.
pub fn run_window<B, F>(
    title: &str,
    driver: &mut FrameDriver<B>,
    background: &Receiver<FrameEvent>,
    mut on_click: F,
) -> Result<()>
where
    B: SceneBuilder,
    F: FnMut(&B, &Viewport, Point),
{
    let viewport = driver.viewport();
    let mut display: SimulatorDisplay<Rgb888> =
        SimulatorDisplay::new(Size::new(viewport.width, viewport.height));
    let mut window = Window::new(
        title,
        &OutputSettingsBuilder::new()
            .theme(BinaryColorTheme::Default)
            .build(),
    );

    driver.render()?;
    info!("{} open at {}x{}", title, viewport.width, viewport.height);

    'running: loop {
        for event in background.try_iter() {
            driver.handle(event)?;
        }

        driver.present(&mut display)?;
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    debug!("click at {:?}", point);
                    on_click(driver.builder(), &driver.viewport(), point);
                }
                SimulatorEvent::MouseWheel { scroll_delta, .. } => {
                    driver.handle(wheel_to_scroll(scroll_delta))?;
                }
                _ => {}
            }
        }

        thread::sleep(Duration::from_millis(FRAME_DELAY_MS));
    }

    info!("{} closed after {} frames", title, driver.frame_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_up_scrolls_back() {
        assert_eq!(wheel_to_scroll(Point::new(0, 1)), FrameEvent::Scrolled(-40));
        assert_eq!(wheel_to_scroll(Point::new(0, -2)), FrameEvent::Scrolled(80));
        assert_eq!(wheel_to_scroll(Point::new(3, 0)), FrameEvent::Scrolled(0));
    }
}
