//! Synchronous content read for the embedded rich-text editor.
//!
//! The editor widget can only hand out its content asynchronously: it is asked
//! for it and answers through a callback, possibly never. Callers that need a
//! plain "current text" accessor get one here, bounded by a timeout. When the
//! editor does not answer in time the accessor returns [`UNAVAILABLE_TEXT`]
//! instead of an error.

use crate::config::EditorConfig;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::sync::oneshot;
use tracing::warn;

/// Returned when the editor did not deliver its content in time.
pub const UNAVAILABLE_TEXT: &str = "Unable to get Text";

/// Default bound on a content read (100 polls of 200 ms in the widget it replaces).
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(20);

/// One-shot reply slot handed to the editor with each content request.
#[derive(Debug)]
pub struct ContentReply {
    tx: oneshot::Sender<String>,
}

impl ContentReply {
    /// Delivers the editor's content. Late replies are ignored.
    pub fn send(self, content: String) {
        // The reader may already have given up
        let _ = self.tx.send(content);
    }
}

/// The editor side of the bridge.
pub trait EditorBridge: Send + Sync {
    /// Asks the editor for its current content. The editor answers through
    /// `reply` whenever it gets to it, from any thread, or drops it.
    fn request_content(&self, reply: ContentReply);
}

/// Reads editor content with a bounded wait.
#[derive(Debug)]
pub struct RichTextReader<B> {
    bridge: B,
    timeout: Duration,
}

impl<B: EditorBridge> RichTextReader<B> {
    /// Reader with the default 20 second bound.
    pub const fn new(bridge: B) -> Self {
        Self::with_timeout(bridge, DEFAULT_READ_TIMEOUT)
    }

    /// Reader with the bound taken from configuration.
    pub const fn from_config(bridge: B, config: &EditorConfig) -> Self {
        Self::with_timeout(bridge, config.read_timeout())
    }

    /// Reader with an explicit bound.
    pub const fn with_timeout(bridge: B, timeout: Duration) -> Self {
        Self { bridge, timeout }
    }

    /// The configured bound.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Current editor content, or [`UNAVAILABLE_TEXT`] if the editor does not
    /// answer within the bound.
    pub async fn text(&self) -> String {
        let (tx, rx) = oneshot::channel();
        self.bridge.request_content(ContentReply { tx });

        match tokio::time::timeout(self.timeout, rx).await {
            Ok(Ok(content)) => content,
            Ok(Err(_)) => {
                warn!("Editor dropped the content request without answering");
                UNAVAILABLE_TEXT.to_string()
            }
            Err(_) => {
                warn!("Editor did not answer within {:?}", self.timeout);
                UNAVAILABLE_TEXT.to_string()
            }
        }
    }

    /// Blocking form of [`text`](Self::text) for a thread outside any runtime
    /// (a UI thread).
    ///
    /// The wait runs on a private single-threaded runtime with its own timer, so
    /// the bound holds whatever runtime the rest of the application uses.
    ///
    /// # Panics
    /// Panics if called from within an asynchronous execution context.
    pub fn text_blocking(&self) -> String {
        match Builder::new_current_thread().enable_time().build() {
            Ok(waiter) => waiter.block_on(self.text()),
            Err(e) => {
                warn!("Could not start a timer for the editor read: {}", e);
                UNAVAILABLE_TEXT.to_string()
            }
        }
    }
}
