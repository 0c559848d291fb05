//! Configuration for typed access: which codec, and what happens on failure.

use std::fmt;
use std::sync::Arc;

use json_map_path::Path;
use thiserror::Error;
use tracing::warn;

use crate::codec::{CodecError, JsonCodec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessOp {
    Select,
    Remove,
    Insert,
}

impl AccessOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessOp::Select => "select",
            AccessOp::Remove => "remove",
            AccessOp::Insert => "insert",
        }
    }
}

impl fmt::Display for AccessOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A codec failure during typed access, as handed to an [`ErrorHandler`].
#[derive(Debug, Error)]
#[error("{op} of `{type_name}` at `{path}` failed: {source}")]
pub struct AccessError {
    pub op: AccessOp,
    pub path: Path,
    pub type_name: &'static str,
    #[source]
    pub source: CodecError,
}

type HandlerFn = dyn Fn(&AccessError) + Send + Sync;

/// Where codec failures go.
///
/// Typed access never returns codec failures to the caller; the operation
/// yields nothing and the failure is handed here instead.
#[derive(Clone, Default)]
pub enum ErrorHandler {
    /// Drop the failure.
    Ignore,
    /// Log the failure with `tracing` at warn level.
    #[default]
    Report,
    Custom(Arc<HandlerFn>),
}

impl ErrorHandler {
    pub fn custom(handler: impl Fn(&AccessError) + Send + Sync + 'static) -> Self {
        ErrorHandler::Custom(Arc::new(handler))
    }

    pub fn handle(&self, err: &AccessError) {
        match self {
            ErrorHandler::Ignore => {}
            ErrorHandler::Report => warn!(
                target: "json_map",
                op = %err.op,
                path = %err.path,
                type_name = err.type_name,
                error = %err.source,
                "codec failure"
            ),
            ErrorHandler::Custom(handler) => handler(err),
        }
    }
}

impl fmt::Debug for ErrorHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorHandler::Ignore => f.write_str("Ignore"),
            ErrorHandler::Report => f.write_str("Report"),
            ErrorHandler::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Options for typed access.
///
/// The default uses [`JsonCodec`] and reports failures through `tracing`.
/// There is no process-wide default to swap: keep an `AccessOptions` with
/// another codec and pass it to the `_with` methods instead.
///
/// # Example
///
/// ```
/// use json_map::{AccessOptions, ErrorHandler};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let failures = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&failures);
/// let options: AccessOptions = AccessOptions::default().with_handler(ErrorHandler::custom(move |_| {
///     counter.fetch_add(1, Ordering::Relaxed);
/// }));
/// # let _ = options;
/// ```
#[derive(Debug, Clone)]
pub struct AccessOptions<C = JsonCodec> {
    pub codec: C,
    pub on_error: ErrorHandler,
}

impl Default for AccessOptions {
    fn default() -> Self {
        Self::new(JsonCodec)
    }
}

impl AccessOptions {
    /// Default codec, failures ignored.
    pub fn quiet() -> Self {
        Self {
            codec: JsonCodec,
            on_error: ErrorHandler::Ignore,
        }
    }
}

impl<C> AccessOptions<C> {
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            on_error: ErrorHandler::default(),
        }
    }

    pub fn with_handler(mut self, on_error: ErrorHandler) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn with_codec<D>(self, codec: D) -> AccessOptions<D> {
        AccessOptions {
            codec,
            on_error: self.on_error,
        }
    }
}
