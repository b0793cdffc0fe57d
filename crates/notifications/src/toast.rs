//! Toast records and the four-verb toaster.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::ToastSink;

/// Display time applied when a toast does not specify one, in milliseconds.
pub const DEFAULT_TOAST_DURATION: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Toast tone.
pub enum ToastKind {
    /// Completed action.
    Success,
    /// Failed action.
    Error,
    /// Neutral information.
    Info,
    /// Action needing attention.
    Warning,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Optional toast fields supplied by the caller.
pub struct ToastOptions {
    /// Secondary line under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display time in milliseconds. `None` means [`DEFAULT_TOAST_DURATION`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl ToastOptions {
    /// Options carrying only a description.
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            duration: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Finished toast record handed to a [`ToastSink`].
pub struct Toast {
    /// Identifier unique within one [`Toaster`].
    pub id: u64,
    /// Tone.
    pub kind: ToastKind,
    /// Headline.
    pub title: String,
    /// Secondary line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display time in milliseconds.
    pub duration: u32,
}

/// Four-verb toast front end over a [`ToastSink`].
#[derive(Debug)]
pub struct Toaster<S: ToastSink> {
    sink: S,
    next_id: Cell<u64>,
}

impl<S: ToastSink> Toaster<S> {
    /// Wraps `sink`. Identifiers start at 1.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            next_id: Cell::new(1),
        }
    }

    /// Underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Queues a success toast and returns its id.
    pub fn success(&self, title: impl Into<String>, options: ToastOptions) -> u64 {
        self.show(ToastKind::Success, title.into(), options)
    }

    /// Queues an error toast and returns its id.
    pub fn error(&self, title: impl Into<String>, options: ToastOptions) -> u64 {
        self.show(ToastKind::Error, title.into(), options)
    }

    /// Queues an info toast and returns its id.
    pub fn info(&self, title: impl Into<String>, options: ToastOptions) -> u64 {
        self.show(ToastKind::Info, title.into(), options)
    }

    /// Queues a warning toast and returns its id.
    pub fn warning(&self, title: impl Into<String>, options: ToastOptions) -> u64 {
        self.show(ToastKind::Warning, title.into(), options)
    }

    fn show(&self, kind: ToastKind, title: String, options: ToastOptions) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.sink.push(Toast {
            id,
            kind,
            title,
            description: options.description,
            duration: options.duration.unwrap_or(DEFAULT_TOAST_DURATION),
        });
        id
    }
}
