//! Due-payment reconciliation arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One due-payment round: the backend's authoritative due amount plus the
/// amount currently tendered by the operator.
///
/// The due amount is always fetched from the backend when the round opens;
/// it is never reconstructed locally from payment history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentState {
    pub total_due: Decimal,
    pub tendered: Decimal,
}

impl PaymentState {
    /// A fresh round with nothing tendered yet.
    pub fn open(total_due: Decimal) -> Self {
        Self {
            total_due,
            tendered: Decimal::ZERO,
        }
    }

    pub fn with_tendered(self, tendered: Decimal) -> Self {
        Self { tendered, ..self }
    }

    /// Exact remaining balance. Negative when the tendered amount exceeds
    /// the due; that preview is shown as-is to signal overpayment.
    pub fn remaining(&self) -> Decimal {
        self.total_due - self.tendered
    }

    /// The amounts persisted on submit. Only non-negative values are ever
    /// written back: overpayment settles the document exactly.
    pub fn settlement(&self) -> Settlement {
        let paid = self.tendered.min(self.total_due).max(Decimal::ZERO);
        Settlement {
            paid,
            due: self.total_due - paid,
        }
    }
}

/// Non-negative amounts written back to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub paid: Decimal,
    pub due: Decimal,
}
