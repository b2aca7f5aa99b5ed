//! Application Context
//!
//! Shared state provided via Leptos Context API.

use birthday_core::{PageConfig, PageSnapshot};
use leptos::prelude::*;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page configuration, fixed after startup
    pub config: StoredValue<PageConfig>,
    /// Countdown, birthday flag and wishes for the current tick
    pub snapshot: Memo<PageSnapshot>,
}

impl AppContext {
    pub fn new(config: StoredValue<PageConfig>, snapshot: Memo<PageSnapshot>) -> Self {
        Self { config, snapshot }
    }

    pub fn is_birthday(&self) -> bool {
        self.snapshot.with(|s| s.is_birthday)
    }
}
