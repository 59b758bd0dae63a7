use anyhow::Result;
use crossbeam_channel::unbounded;
use log::info;
use spectra_viz::numerology_circle::NumerologyCircle;
use spectra_viz::ticker::Ticker;
use spectra_viz::{FrameDriver, Viewport};
use spectra_viz_simulator::config::{ANIMATION_PERIOD, NUMEROLOGY_HEIGHT, NUMEROLOGY_WIDTH};
use spectra_viz_simulator::window::run_window;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (tx, rx) = unbounded();
    let ticker = Ticker::spawn(ANIMATION_PERIOD, tx)?;
    let mut driver = FrameDriver::new(
        NumerologyCircle::default(),
        Viewport::new(NUMEROLOGY_WIDTH, NUMEROLOGY_HEIGHT),
    );

    run_window("Tesla 3-6-9 Animated Diagram", &mut driver, &rx, |_, _, _| {})?;
    info!("animation stopped after {} ticks", ticker.stop());
    Ok(())
}
