use anyhow::Result;
use log::info;
use spectra_dsp::ToneRequest;
use spectra_viz::chakra_panel::ChakraPanel;
use spectra_viz::{FrameDriver, Viewport};
use spectra_viz_simulator::audio::{LoggingSink, ToneWorker};
use spectra_viz_simulator::config::{CHAKRA_HEIGHT, CHAKRA_WIDTH, TONE_QUEUE_CAPACITY};
use spectra_viz_simulator::window::run_window;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let tones = ToneWorker::spawn(LoggingSink::default(), TONE_QUEUE_CAPACITY)?;
    let mut driver = FrameDriver::new(
        ChakraPanel::default(),
        Viewport::new(CHAKRA_WIDTH, CHAKRA_HEIGHT),
    );

    run_window(
        "Chakra Frequency Visualizer",
        &mut driver,
        &crossbeam_channel::never(),
        |panel, viewport, point| {
            if let Some(index) = panel.button_at(viewport, point) {
                let chakra = &panel.chakras()[index];
                info!("playing {} chakra at {} Hz", chakra.name, chakra.frequency_hz);
                tones.request(ToneRequest::new(chakra.frequency_hz as f32));
            }
        },
    )
}
