use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::render::Color;

use super::ToastPosition;

/// Opaque handle of a toast, unique within its manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(u64);

impl ToastId {
    pub(super) fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Visual flavor of a toast. Only the accent and icon differ between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn accent_color(self) -> Color {
        match self {
            Self::Info => Color::from_rgb8(0x3B, 0x82, 0xF6),
            Self::Success => Color::from_rgb8(0x22, 0xC5, 0x5E),
            Self::Warning => Color::from_rgb8(0xF5, 0x9E, 0x0B),
            Self::Error => Color::from_rgb8(0xEF, 0x44, 0x44),
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✕",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastPhase {
    Visible,
    /// Exit transition running; still on screen but no longer counted as visible.
    Dismissing,
}

/// Per-call overrides for `ToastManager::show`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastOptions {
    #[serde(default)]
    pub title: Option<String>,
    /// Overrides the configured timeout; `Some(Duration::ZERO)` is persistent.
    #[serde(default)]
    pub timeout: Option<Duration>,
    #[serde(default = "default_closable")]
    pub closable: bool,
    /// Overrides the configured stack position.
    #[serde(default)]
    pub position: Option<ToastPosition>,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            title: None,
            timeout: None,
            closable: default_closable(),
            position: None,
        }
    }
}

impl ToastOptions {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_timeout_ms(self, millis: u64) -> Self {
        self.with_timeout(Duration::from_millis(millis))
    }

    /// Never auto-dismisses.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.with_timeout(Duration::ZERO)
    }

    #[must_use]
    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }
}

fn default_closable() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ToastTimer {
    /// Persistent toast, or timer cancelled by a hide.
    Idle,
    Armed { deadline: Instant },
    Paused { remaining: Duration },
}

/// Notification record owned by `ToastManager`.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub(super) id: ToastId,
    pub(super) message: String,
    pub(super) title: Option<String>,
    pub(super) kind: ToastKind,
    pub(super) timeout: Duration,
    pub(super) closable: bool,
    pub(super) position: ToastPosition,
    pub(super) phase: ToastPhase,
    pub(super) created_at: Instant,
    pub(super) timer: ToastTimer,
    /// End of the exit transition while dismissing.
    pub(super) removal_at: Option<Instant>,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Auto-dismiss delay the toast was created with; zero when persistent.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.timeout.is_zero()
    }

    #[must_use]
    pub fn closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.position
    }

    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.phase == ToastPhase::Visible
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self.timer, ToastTimer::Paused { .. })
    }

    pub(super) fn matches(&self, message: &str, kind: ToastKind) -> bool {
        self.kind == kind && self.message == message
    }
}
