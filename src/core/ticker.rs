//! Periodic timer with an explicit start/stop lifecycle.
//!
//! The callback runs on a dedicated thread once per period. It keeps running
//! until the callback returns `false`, `stop()` is called, or the `Ticker` is
//! dropped; dropping always joins the thread.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl Ticker {
    /// Start ticking. The callback receives the 1-based tick number.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(u64) -> bool + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            let mut ticks = 0u64;
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        ticks += 1;
                        if !on_tick(ticks) {
                            break;
                        }
                    }
                    // explicit stop, or the owner is gone
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            ticks
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Block until the callback asks to stop. Returns the number of ticks fired.
    pub fn join(mut self) -> u64 {
        self.handle
            .take()
            .map(|h| h.join().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Stop the timer and wait for the thread. Returns the number of ticks fired.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn shutdown(&mut self) -> u64 {
        if let Some(tx) = self.stop_tx.take() {
            // the thread may already be gone
            let _ = tx.send(());
        }
        self.handle
            .take()
            .map(|h| h.join().unwrap_or_default())
            .unwrap_or_default()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
