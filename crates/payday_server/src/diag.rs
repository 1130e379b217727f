//! Debug-gated diagnostics.
//!
//! Mirrors the plugin's console logging convention: a `[PAYDAY]` prefix, an
//! uppercased context label, and optional pretty-printed payloads. Nothing
//! here is emitted unless the `debug` config flag is on.

use serde::Serialize;

/// Conditional diagnostic logger, cheap to clone and copy around.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Diagnostics {
    enabled: bool,
}

impl Diagnostics {
    pub(crate) const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Logs a plain message under a context label.
    pub(crate) fn message(self, context: &str, message: &str) {
        if !self.enabled {
            return;
        }
        tracing::debug!(target: "payday", "[PAYDAY] => [{}] {message}", context.to_uppercase());
    }

    /// Logs a structured payload as pretty-printed JSON.
    ///
    /// A payload that fails to serialize is replaced with an inline error
    /// marker; diagnostics never propagate failures.
    pub(crate) fn object<T: Serialize>(self, context: &str, payload: &T) {
        if !self.enabled {
            return;
        }
        let rendered = match serde_json::to_string_pretty(payload) {
            Ok(text) => text,
            Err(err) => format!("[error serializing object: {err}]"),
        };
        tracing::debug!(target: "payday", "[PAYDAY] => [{}] {rendered}", context.to_uppercase());
    }
}
