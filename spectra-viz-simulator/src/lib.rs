//! Desktop host for the spectra-viz diagrams: window loop, timer wiring and
//! the tone worker behind the chakra panel's play buttons.

pub mod audio;
pub mod config;
pub mod window;
