//! Document ledgers: an ordered line-item sequence plus header metadata and
//! the derived total.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::item::LineItem;

/// The three document families that carry a line-item ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Purchase,
    Quotation,
    Invoice,
}

impl DocumentKind {
    /// Document-number prefix for this family.
    pub fn prefix(&self) -> &'static str {
        match self {
            DocumentKind::Purchase => "PUR",
            DocumentKind::Quotation => "QUO",
            DocumentKind::Invoice => "INV",
        }
    }
}

/// One document under construction.
///
/// `total` always equals the sum of the current items' subtotals; every
/// mutation recomputes it from scratch rather than adjusting it
/// incrementally, so it cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLedger {
    pub kind: DocumentKind,
    pub party_name: String,
    pub contact_number: String,
    pub document_number: String,
    pub date: NaiveDate,
    /// Fixed once inherited from the active section.
    pub category: String,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    /// Amount paid at creation time; the rest becomes the document's due.
    pub paid: Decimal,
}

impl DocumentLedger {
    /// A fresh, empty ledger with generated metadata.
    pub fn new(kind: DocumentKind, document_number: String, date: NaiveDate, category: String) -> Self {
        Self {
            kind,
            party_name: String::new(),
            contact_number: String::new(),
            document_number,
            date,
            category,
            items: Vec::new(),
            total: Decimal::ZERO,
            paid: Decimal::ZERO,
        }
    }

    /// Append `item`, or replace the entry at `edit_index` in place (order
    /// preserved), then recompute the total.
    pub fn add_or_update(&mut self, item: LineItem, edit_index: Option<usize>) -> Result<(), LedgerError> {
        match edit_index {
            Some(index) => {
                let slot = self
                    .items
                    .get_mut(index)
                    .ok_or(LedgerError::IndexOutOfRange(index))?;
                *slot = item;
            }
            None => self.items.push(item),
        }
        self.recompute_total();
        Ok(())
    }

    /// Delete the entry at `index`, shifting subsequent entries down, and
    /// recompute the total.
    pub fn remove(&mut self, index: usize) -> Result<LineItem, LedgerError> {
        if index >= self.items.len() {
            return Err(LedgerError::IndexOutOfRange(index));
        }
        let removed = self.items.remove(index);
        self.recompute_total();
        Ok(removed)
    }

    /// The staged input for editing the item at `index`.
    pub fn item_input(&self, index: usize) -> Result<crate::item::ItemInput, LedgerError> {
        let item = self
            .items
            .get(index)
            .ok_or(LedgerError::IndexOutOfRange(index))?;
        Ok(crate::item::ItemInput {
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
            unit_price: item.unit_price.to_string(),
        })
    }

    /// A completed ledger needs every header field and at least one item
    /// before anything is sent to the backend.
    pub fn validate_for_submit(&self) -> Result<(), LedgerError> {
        let header = [
            self.party_name.as_str(),
            self.contact_number.as_str(),
            self.document_number.as_str(),
            self.category.as_str(),
        ];
        if header.iter().any(|field| field.trim().is_empty()) {
            return Err(LedgerError::MissingFields);
        }
        if self.items.is_empty() {
            return Err(LedgerError::NoItems);
        }
        Ok(())
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(|item| item.subtotal).sum();
    }
}
