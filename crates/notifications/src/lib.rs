//! Toast notification contract used by primitive hosts.
//!
//! [`Toaster`] exposes the four user-facing verbs and fills in defaults; a [`ToastSink`] is the
//! host seam that actually queues or displays the resulting [`Toast`] records.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod sink;
mod toast;

pub use sink::{NoopToastSink, ToastQueue, ToastSink};
pub use toast::{Toast, ToastKind, ToastOptions, Toaster, DEFAULT_TOAST_DURATION};
