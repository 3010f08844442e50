//! Time-based document number generation.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::document::DocumentKind;

/// Generates `PREFIX-<epoch-millis>` document numbers.
///
/// The suffix is forced strictly past the previously issued one, so two
/// documents created back-to-back within the same millisecond never share a
/// number.
#[derive(Debug, Default)]
pub struct DocumentNumbers {
    last_ms: AtomicI64,
}

impl DocumentNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, kind: DocumentKind) -> String {
        format!("{}-{}", kind.prefix(), self.next_ms())
    }

    fn next_ms(&self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0);

        let mut last = self.last_ms.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self
                .last_ms
                .compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(observed) => last = observed,
            }
        }
    }
}
