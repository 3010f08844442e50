use thiserror::Error;

/// Validation failures surfaced to the operator verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Product name cannot be empty!")]
    EmptyName,

    #[error("Quantity must be a positive number!")]
    InvalidQuantity,

    #[error("Price must be a positive number!")]
    InvalidPrice,

    #[error("All fields are required!")]
    MissingFields,

    #[error("Please add at least one product!")]
    NoItems,

    #[error("No item at position {0}")]
    IndexOutOfRange(usize),
}
