//! Pure business logic for the IT Planet storefront.
//!
//! Everything the document forms rely on lives here, free of I/O: line items
//! and their staging validation, document ledgers with derived totals,
//! time-based document numbers, due-payment reconciliation arithmetic, and
//! the substring filter used by the list views.

pub mod document;
pub mod error;
pub mod item;
pub mod number;
pub mod payment;
pub mod search;

pub use document::{DocumentKind, DocumentLedger};
pub use error::LedgerError;
pub use item::{ItemInput, LineItem};
pub use number::DocumentNumbers;
pub use payment::{PaymentState, Settlement};
