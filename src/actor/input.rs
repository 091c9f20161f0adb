//! Input Actor: Dedicated thread for polling terminal events.
//!
//! This actor runs in its own thread and uses crossterm's event polling
//! to capture key presses and resizes, mapping them to [`Action`](super::Action)s before
//! they reach the session. Keys pressed while a command is running queue
//! up in the channel and are handled once it finishes.

use super::keymap::action_for_event;
use super::messages::InputEvent;
use crossbeam_channel::Sender;
use crossterm::event;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send input events to the session.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("txtmanip-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.try_send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        let Some(action) = action_for_event(event) else {
                            continue;
                        };
                        tracing::trace!(target: "input", ?action, "key");
                        if sender.send(InputEvent::Action(action)).is_err() {
                            // Session gone
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!(target: "input", error = %e, "read_failed");
                        let _ = sender.send(InputEvent::Error(e.to_string()));
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(target: "input", error = %e, "poll_failed");
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                    break;
                }
            }
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
