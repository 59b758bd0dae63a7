use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, Sender};
use log::{debug, info};

use crate::frame_driver::FrameEvent;

/// Background timer that feeds `FrameEvent::Tick` to the render task.
///
/// The ticker never touches the scene. It stops when the receiving side goes
/// away or when the `Ticker` itself is dropped, whichever comes first.
pub struct Ticker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl Ticker {
    pub fn spawn(period: Duration, events: Sender<FrameEvent>) -> io::Result<Self> {
        let (stop_tx, stop_rx) = bounded::<()>(0);
        let handle = thread::Builder::new()
            .name("frame-ticker".into())
            .spawn(move || {
                info!("Starting frame ticker every {:?}", period);
                let mut ticks = 0u64;
                loop {
                    select! {
                        recv(stop_rx) -> _ => break,
                        default(period) => {
                            if events.send(FrameEvent::Tick).is_err() {
                                debug!("render task gone, ticker exiting");
                                break;
                            }
                            ticks += 1;
                        }
                    }
                }
                ticks
            })?;
        Ok(Self {
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Stops the thread and returns how many ticks it delivered.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        // Dropping the sender disconnects `stop_rx`, which wakes the select.
        self.stop.take();
        let ticks = self
            .handle
            .take()
            .and_then(|handle| handle.join().ok())
            .unwrap_or(0);
        debug!("frame ticker stopped after {} ticks", ticks);
        ticks
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::time::Instant;

    #[test]
    fn test_ticks_arrive_on_channel() {
        let (tx, rx) = unbounded();
        let ticker = Ticker::spawn(Duration::from_millis(5), tx).unwrap();
        let first = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        let second = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(first, FrameEvent::Tick);
        assert_eq!(second, FrameEvent::Tick);
        assert!(ticker.stop() >= 2);
    }

    #[test]
    fn test_drop_stops_thread_promptly() {
        let (tx, rx) = unbounded();
        let ticker = Ticker::spawn(Duration::from_secs(60), tx).unwrap();
        let started = Instant::now();
        drop(ticker);
        assert!(started.elapsed() < Duration::from_secs(5));
        // The thread owned the only sender, so the channel is now disconnected.
        assert!(rx.recv().is_err());
    }

    #[test]
    fn test_exits_when_receiver_dropped() {
        let (tx, rx) = unbounded();
        let ticker = Ticker::spawn(Duration::from_millis(1), tx).unwrap();
        drop(rx);
        std::thread::sleep(Duration::from_millis(200));
        assert!(ticker.handle.as_ref().is_some_and(|h| h.is_finished()));
    }
}
