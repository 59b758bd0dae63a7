use std::fmt::Display;
use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Sender, TrySendError};
use log::{debug, info, warn};
use spectra_dsp::{analyze_tone, synthesize_tone, AudioSink, ToneBuffer, ToneError, ToneRequest};

/// Background thread that synthesizes requested tones and hands them to a
/// sink. Never touches rendering state.
pub struct ToneWorker {
    requests: Option<Sender<ToneRequest>>,
    handle: Option<JoinHandle<()>>,
}

impl ToneWorker {
    pub fn spawn<S>(mut sink: S, capacity: usize) -> io::Result<Self>
    where
        S: AudioSink + Send + 'static,
        S::Error: Display,
    {
        let (tx, rx) = bounded::<ToneRequest>(capacity);
        let handle = thread::Builder::new()
            .name("tone-worker".into())
            .spawn(move || {
                for request in rx.iter() {
                    let tone = match synthesize_tone(&request) {
                        Ok(tone) => tone,
                        Err(e) => {
                            warn!("skipping {} Hz tone: {}", request.frequency_hz, e);
                            continue;
                        }
                    };
                    if let Err(e) = sink.play(&tone) {
                        warn!("sink rejected {} Hz tone: {}", request.frequency_hz, e);
                    }
                }
                debug!("tone worker exiting");
            })?;
        Ok(Self {
            requests: Some(tx),
            handle: Some(handle),
        })
    }

    /// Queues a tone without blocking. Returns false when the queue is full
    /// or the worker is gone; the request is dropped in that case.
    pub fn request(&self, request: ToneRequest) -> bool {
        let Some(requests) = &self.requests else {
            return false;
        };
        match requests.try_send(request) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!("tone queue full, dropping {} Hz", request.frequency_hz);
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

impl Drop for ToneWorker {
    fn drop(&mut self) {
        // Disconnecting the queue ends the worker loop once it drains.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Sink for hosts without an audio device: reports what would have played.
#[derive(Debug, Default)]
pub struct LoggingSink {
    played: usize,
}

impl LoggingSink {
    pub fn played(&self) -> usize {
        self.played
    }
}

impl AudioSink for LoggingSink {
    type Error = ToneError;

    fn play(&mut self, tone: &ToneBuffer) -> Result<(), ToneError> {
        let spectrum = analyze_tone(tone)?;
        self.played += 1;
        info!(
            "tone: {} samples ({:.2} s), peak {}, rms {:.3}, dominant {:.0} Hz",
            tone.len(),
            tone.duration_secs(),
            tone.peak(),
            tone.rms(),
            spectrum.peak_hz
        );
        Ok(())
    }
}
