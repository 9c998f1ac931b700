use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct InventoryItemModel {
    pub id: Uuid,
    pub category: String,
    pub family: Option<String>,
    pub name: String,
    pub brand: Option<String>,
    pub quantity: i32,
    pub min_stock_level: i32,
    pub expiry_date: Option<NaiveDate>,
    pub supplier_name: Option<String>,
    pub supplier_contact: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Medication,
    Instrument,
    Consumable,
    NonConsumable,
    Inox,
}

impl Category {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "medication" => Some(Category::Medication),
            "instrument" => Some(Category::Instrument),
            "consumable" => Some(Category::Consumable),
            "non_consumable" => Some(Category::NonConsumable),
            "inox" => Some(Category::Inox),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Medication => "medication",
            Category::Instrument => "instrument",
            Category::Consumable => "consumable",
            Category::NonConsumable => "non_consumable",
            Category::Inox => "inox",
        }
    }
}

/// Medication sub-collection discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Family1,
    Family2,
    Family3,
    Family4,
    Family5,
}

impl Family {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "family1" => Some(Family::Family1),
            "family2" => Some(Family::Family2),
            "family3" => Some(Family::Family3),
            "family4" => Some(Family::Family4),
            "family5" => Some(Family::Family5),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Family1 => "family1",
            Family::Family2 => "family2",
            Family::Family3 => "family3",
            Family::Family4 => "family4",
            Family::Family5 => "family5",
        }
    }

    /// Short code used in generated medication identifiers.
    pub fn code(&self) -> &'static str {
        match self {
            Family::Family1 => "F1",
            Family::Family2 => "F2",
            Family::Family3 => "F3",
            Family::Family4 => "F4",
            Family::Family5 => "F5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockOp {
    Addition,
    Consumption,
}

impl StockOp {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "addition" => Some(StockOp::Addition),
            "consumption" => Some(StockOp::Consumption),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockOp::Addition => "addition",
            StockOp::Consumption => "consumption",
        }
    }

    /// Signed delta applied to the quantity column.
    pub fn delta(&self, quantity: i32) -> i32 {
        match self {
            StockOp::Addition => quantity,
            StockOp::Consumption => -quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for cat in [
            Category::Medication,
            Category::Instrument,
            Category::Consumable,
            Category::NonConsumable,
            Category::Inox,
        ] {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
        assert_eq!(Category::parse("nonconsumable"), None);
    }

    #[test]
    fn test_stock_op_delta_sign() {
        assert_eq!(StockOp::Addition.delta(5), 5);
        assert_eq!(StockOp::Consumption.delta(5), -5);
    }

    #[test]
    fn test_family_codes() {
        assert_eq!(Family::parse("family3"), Some(Family::Family3));
        assert_eq!(Family::Family3.code(), "F3");
        assert_eq!(Family::parse("family6"), None);
    }
}
