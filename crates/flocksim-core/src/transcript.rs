//! Transcript of produced calls.
//!
//! Every quacker writes its call text into a [`Transcript`] instead of
//! printing directly, so a driver can render the output once at the end and
//! tests can assert on exactly what was produced, in order.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// An ordered record of every call produced during a simulation.
///
/// A `Transcript` is a cheap handle: cloning it yields another handle to the
/// same underlying record, so a driver can keep one clone while passing
/// another down through a flock.
///
/// # Example
///
/// ```
/// use flocksim_core::Transcript;
///
/// let transcript = Transcript::new();
/// transcript.record("Mallard Duck quack.");
///
/// assert_eq!(transcript.len(), 1);
/// assert_eq!(transcript.to_text(), "Mallard Duck quack.");
/// ```
#[derive(Clone, Default)]
pub struct Transcript {
    calls: Arc<RwLock<Vec<String>>>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one produced call.
    pub fn record(&self, call: impl Into<String>) {
        let call = call.into();
        tracing::trace!(call = %call, "Call recorded");
        self.calls.write().push(call);
    }

    /// Get all recorded calls, in production order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().clone()
    }

    /// Get the number of recorded calls.
    pub fn len(&self) -> usize {
        self.calls.read().len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.read().is_empty()
    }

    /// Discard all recorded calls.
    pub fn clear(&self) {
        self.calls.write().clear();
    }

    /// Render the transcript as newline-joined text.
    pub fn to_text(&self) -> String {
        self.calls.read().join("\n")
    }
}

impl fmt::Debug for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transcript")
            .field("calls", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_order() {
        let transcript = Transcript::new();
        transcript.record("first");
        transcript.record("second");
        transcript.record("third");

        assert_eq!(transcript.calls(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_clones_share_the_record() {
        let transcript = Transcript::new();
        let handle = transcript.clone();

        handle.record("via clone");

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.calls(), vec!["via clone"]);
    }

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.to_text(), "");
    }

    #[test]
    fn test_to_text_joins_with_newlines() {
        let transcript = Transcript::new();
        transcript.record("a");
        transcript.record("b");
        assert_eq!(transcript.to_text(), "a\nb");
    }

    #[test]
    fn test_clear() {
        let transcript = Transcript::new();
        transcript.record("gone");
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
