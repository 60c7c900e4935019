//! Transient user-facing notices

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral information
    Info,
    /// An operation succeeded
    Sucesso,
    /// An operation failed
    Erro,
}

impl ToastKind {
    /// Icon shown next to the message
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Sucesso => "✓",
            Self::Erro => "✗",
        }
    }
}

/// A single notice
#[derive(Debug, Clone)]
pub struct Toast {
    /// Text shown to the user
    pub message: String,
    /// Severity
    pub kind: ToastKind,
    /// When it was raised
    pub raised_at: Instant,
}

/// Queue of notices, oldest first. Each one is shown until it expires.
#[derive(Debug, Clone)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    ttl: Duration,
}

impl Toasts {
    /// Create a queue whose notices live for `ttl`
    pub const fn new(ttl: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            ttl,
        }
    }

    /// Raise a notice
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        match kind {
            ToastKind::Erro => tracing::warn!("toast: {}", message),
            _ => tracing::info!("toast: {}", message),
        }
        self.queue.push_back(Toast {
            message,
            kind,
            raised_at: Instant::now(),
        });
    }

    /// The notice currently on screen
    pub fn current(&self) -> Option<&Toast> {
        self.queue.front()
    }

    /// Drop the notice on screen
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    /// Drop notices older than the ttl
    pub fn expire(&mut self, now: Instant) {
        while let Some(toast) = self.queue.front() {
            if now.saturating_duration_since(toast.raised_at) >= self.ttl {
                self.queue.pop_front();
            } else {
                break;
            }
        }
    }

    /// Every pending notice, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    /// Whether any pending notice has exactly this text
    pub fn contains(&self, message: &str) -> bool {
        self.queue.iter().any(|t| t.message == message)
    }

    /// Number of pending notices
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
