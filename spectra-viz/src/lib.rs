#![no_std]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod animation;
pub mod chakra_panel;
pub mod coordinate_mapper;
pub mod error;
pub mod frame_driver;
pub mod numerology_circle;
pub mod palette;
pub mod primitive;
pub mod renderer;
pub mod resolve;
pub mod scene;
pub mod spectrum_chart;
#[cfg(feature = "std")]
pub mod ticker;
pub mod types;

pub use error::{Result, VizError};
pub use frame_driver::{FrameDriver, FrameEvent};
pub use renderer::Renderer;
pub use scene::{Scene, SceneBuilder, Viewport};
