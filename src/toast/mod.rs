//! Toast notification queue.
//!
//! - [`ToastManager`] owns the toasts and their timers.
//! - [`layout_stack`] positions cards inside one of the six anchors.
//! - [`Clock`] decouples timers from the wall clock.
//!
//! ```
//! use widget_rs::toast::{ManualClock, ToastConfig, ToastKind, ToastManager, ToastOptions};
//!
//! let clock = ManualClock::new();
//! let mut toasts = ToastManager::new(ToastConfig::default(), clock.clone()).unwrap();
//! let id = toasts.show("Saved", ToastKind::Success, ToastOptions::default()).unwrap();
//!
//! clock.advance_ms(5_000);
//! toasts.tick();
//! assert!(!toasts.get(id).unwrap().visible());
//! ```

mod clock;
mod config;
mod layout;
mod manager;
mod notification;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ToastConfig, ToastPosition};
pub use layout::{ToastMetrics, ToastRect, layout_stack};
pub use manager::{DismissReason, ToastEvent, ToastManager};
pub use notification::{Toast, ToastId, ToastKind, ToastOptions, ToastPhase};
