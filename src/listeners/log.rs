//! # LogWriter: simple activation printer
//!
//! A minimal listener that prints every activation it sees to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [activated] event="Click"
//! [activated] event="Scored" payload=42
//! [activated] event="Renamed" payload="main"
//! ```

use std::any::TypeId;
use std::fmt::Debug;

use crate::listeners::Listen;

/// Activation writer listener.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn line<T: Debug + 'static>(event: &str, payload: &T) -> String {
        if TypeId::of::<T>() == TypeId::of::<()>() {
            format!("[activated] event={event:?}")
        } else {
            format!("[activated] event={event:?} payload={payload:?}")
        }
    }
}

impl<T: Debug + 'static> Listen<T> for LogWriter {
    fn on_event(&self, event: &str, payload: &T) {
        println!("{}", Self::line(event, payload));
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
