//! Component-tagged diagnostic logging.
//!
//! Every component receives a [`Logger`] at construction instead of reaching
//! for a global. Events go to whatever `tracing` subscriber the binary
//! installed; with none installed they are dropped.
//!
//! ```
//! use burrow::log::Logger;
//!
//! let log = Logger::new("http").scoped("127.0.0.1:50412");
//! log.debug("request line received");
//! ```

use std::fmt::Display;
use std::panic::Location;

/// Logging handle carrying a component tag and an optional context label.
#[derive(Debug, Clone)]
pub struct Logger {
    component: &'static str,
    context: Option<String>,
}

impl Logger {
    pub const fn new(component: &'static str) -> Self {
        Self {
            component,
            context: None,
        }
    }

    /// Returns a logger for the same component that also labels each event
    /// with `context` (a peer address, a file name, ...).
    pub fn scoped(&self, context: impl Into<String>) -> Self {
        Self {
            component: self.component,
            context: Some(context.into()),
        }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    #[track_caller]
    pub fn debug(&self, msg: impl Display) {
        let caller = Location::caller();
        tracing::debug!(
            component = self.component,
            context = self.context.as_deref().unwrap_or("-"),
            caller = %caller,
            "{}",
            msg
        );
    }

    #[track_caller]
    pub fn info(&self, msg: impl Display) {
        let caller = Location::caller();
        tracing::info!(
            component = self.component,
            context = self.context.as_deref().unwrap_or("-"),
            caller = %caller,
            "{}",
            msg
        );
    }

    #[track_caller]
    pub fn warn(&self, msg: impl Display) {
        let caller = Location::caller();
        tracing::warn!(
            component = self.component,
            context = self.context.as_deref().unwrap_or("-"),
            caller = %caller,
            "{}",
            msg
        );
    }
}
