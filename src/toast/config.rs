use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

/// Screen anchor of a toast stack container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub const ALL: [Self; 6] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
    }
}

/// Toast queue configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastConfig {
    #[serde(default)]
    pub position: ToastPosition,
    /// Default auto-dismiss delay; zero makes toasts persistent.
    #[serde(rename = "timeout", default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,
    #[serde(default = "default_prevent_duplicates")]
    pub prevent_duplicates: bool,
    /// Length of the exit transition between hide and removal.
    #[serde(rename = "transition", default = "default_transition_ms")]
    pub transition_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: ToastPosition::default(),
            timeout_ms: default_timeout_ms(),
            max_toasts: default_max_toasts(),
            prevent_duplicates: default_prevent_duplicates(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl ToastConfig {
    #[must_use]
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub fn with_max_toasts(mut self, max_toasts: usize) -> Self {
        self.max_toasts = max_toasts;
        self
    }

    #[must_use]
    pub fn with_prevent_duplicates(mut self, prevent_duplicates: bool) -> Self {
        self.prevent_duplicates = prevent_duplicates;
        self
    }

    #[must_use]
    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if self.max_toasts == 0 {
            return Err(WidgetError::InvalidConfig(
                "maxToasts must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| WidgetError::InvalidConfig(format!("failed to parse toast config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_timeout_ms() -> u64 {
    5_000
}

fn default_max_toasts() -> usize {
    5
}

fn default_prevent_duplicates() -> bool {
    true
}

fn default_transition_ms() -> u64 {
    300
}
