use ledger_core::Settlement;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The due-payment endpoints return the amount as a bare JSON number.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DueAmount(#[serde(with = "rust_decimal::serde::float")] pub Decimal);

/// Payload for the `update-due-payments` endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SettlementPayload {
    #[serde(with = "rust_decimal::serde::float")]
    pub paid: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub due: Decimal,
}

impl From<Settlement> for SettlementPayload {
    fn from(settlement: Settlement) -> Self {
        Self {
            paid: settlement.paid,
            due: settlement.due,
        }
    }
}
