//! System clipboard access
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux).
//!
//! On X11 and Wayland the clipboard only holds text while its owner keeps
//! answering requests, so yanking goes through a long-lived worker that
//! owns one `arboard::Clipboard` for the whole session. The worker opens it
//! as soon as it starts and reports `Unavailable` if that fails. The board
//! hands it an owned copy of the text; nothing else is shared. The worker
//! ends when every sender is dropped.
//!
//! Pasting is a one-off read with a fresh handle.

use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use tokio::sync::mpsc;

/// Outcome of a publish request, reported back to the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardStatus {
    /// The text is now on the clipboard
    Published(String),
    /// The clipboard could not be set
    Failed(String),
    /// No clipboard at startup (no display server, missing backend)
    Unavailable(String),
}

/// Handle to the background clipboard owner
pub struct ClipboardWorker {
    requests: mpsc::UnboundedSender<String>,
}

impl ClipboardWorker {
    /// Start the worker on tokio's blocking pool
    ///
    /// Results of each publish are sent to `status`.
    pub fn spawn(status: mpsc::UnboundedSender<ClipboardStatus>) -> Self {
        let (requests, mut rx) = mpsc::unbounded_channel::<String>();

        tokio::task::spawn_blocking(move || {
            let mut owner = match Clipboard::new() {
                Ok(clipboard) => Some(clipboard),
                Err(e) => {
                    let _ = status.send(ClipboardStatus::Unavailable(e.to_string()));
                    None
                }
            };
            while let Some(text) = rx.blocking_recv() {
                let report = match set_text(&mut owner, &text) {
                    Ok(()) => ClipboardStatus::Published(text),
                    Err(e) => {
                        // Recreate the handle next time in case the display came back
                        owner = None;
                        ClipboardStatus::Failed(format!("{:#}", e))
                    }
                };
                if status.send(report).is_err() {
                    break;
                }
            }
            tracing::debug!("Clipboard worker stopped");
        });

        Self { requests }
    }

    /// Handle whose requests go to `requests` instead of a worker
    #[cfg(test)]
    pub(crate) fn from_sender(requests: mpsc::UnboundedSender<String>) -> Self {
        Self { requests }
    }

    /// Queue text for the clipboard
    pub fn publish(&self, text: String) -> Result<()> {
        self.requests
            .send(text)
            .map_err(|_| anyhow!("Clipboard worker is not running"))
    }
}

fn set_text(owner: &mut Option<Clipboard>, text: &str) -> Result<()> {
    let clipboard = match owner.take() {
        Some(clipboard) => clipboard,
        None => Clipboard::new().context("Failed to access clipboard")?,
    };
    owner
        .insert(clipboard)
        .set_text(text)
        .context("Failed to set clipboard text")
}

/// Read text from the system clipboard
///
/// `Ok(None)` means the clipboard is reachable but holds no text (empty, or
/// an image, or a payload the backend refuses to transfer).
pub fn fetch_text() -> Result<Option<String>> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    match clipboard.get_text() {
        Ok(text) => Ok(Some(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(e).context("Failed to read clipboard text"),
    }
}
