//! Car Entity
//!
//! A car record and its two-state stock flag.

/// Stock status of a car record
///
/// Stored as INTEGER 1/0; defaults to `InStock` at creation and can only be
/// changed by the toggle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// Flip to the other state.
    pub fn toggle(self) -> Self {
        match self {
            StockStatus::InStock => StockStatus::OutOfStock,
            StockStatus::OutOfStock => StockStatus::InStock,
        }
    }

    /// Integer code for storage
    pub fn code(self) -> i64 {
        match self {
            StockStatus::InStock => 1,
            StockStatus::OutOfStock => 0,
        }
    }

    /// Map a stored integer code back to a status.
    pub fn from_code(code: i64) -> Self {
        if code == 0 {
            StockStatus::OutOfStock
        } else {
            StockStatus::InStock
        }
    }

    /// Display label used by the listing view
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::InStock => "Sí",
            StockStatus::OutOfStock => "No",
        }
    }
}

/// Car record
///
/// `brand` and `origin` are required non-empty at creation and immutable
/// after; only the stock flag ever changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub origin: String,
    pub stock: StockStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(StockStatus::InStock.toggle().toggle(), StockStatus::InStock);
        assert_eq!(
            StockStatus::OutOfStock.toggle().toggle(),
            StockStatus::OutOfStock
        );
    }

    #[test]
    fn code_roundtrip() {
        assert_eq!(StockStatus::from_code(StockStatus::InStock.code()), StockStatus::InStock);
        assert_eq!(
            StockStatus::from_code(StockStatus::OutOfStock.code()),
            StockStatus::OutOfStock
        );
    }

    #[test]
    fn labels_match_display_language() {
        assert_eq!(StockStatus::InStock.label(), "Sí");
        assert_eq!(StockStatus::OutOfStock.label(), "No");
    }
}
