use anyhow::Result;
use spectra_viz::spectrum_chart::SpectrumChart;
use spectra_viz::{FrameDriver, Viewport};
use spectra_viz_simulator::config::{SPECTRUM_HEIGHT, SPECTRUM_WIDTH};
use spectra_viz_simulator::window::run_window;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut driver = FrameDriver::new(
        SpectrumChart::default(),
        Viewport::new(SPECTRUM_WIDTH, SPECTRUM_HEIGHT),
    );
    // Static chart: no background events.
    run_window(
        "Electromagnetic Spectrum",
        &mut driver,
        &crossbeam_channel::never(),
        |_, _, _| {},
    )
}
