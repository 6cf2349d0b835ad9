//! Колонки списков: что показывать и как форматировать значение ячейки.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::shared::components::table::{format_money, format_number_with_decimals};
use crate::shared::date_utils::{format_date, format_datetime};

const EMPTY_CELL: &str = "—";

/// Raw value a row exposes for one column
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Missing,
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Flag(value)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) if s.is_empty() => f.write_str(EMPTY_CELL),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Flag(true) => f.write_str("Yes"),
            CellValue::Flag(false) => f.write_str("No"),
            CellValue::Missing => f.write_str(EMPTY_CELL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnKind {
    Text,
    /// Codes and SKUs
    Mono,
    Date,
    DateTime,
    Money,
    Number { decimals: usize, unit: &'static str },
    /// Status-like text rendered as a colored badge
    Badge,
    Flag,
}

impl ColumnKind {
    pub fn format(&self, value: &CellValue) -> String {
        match (self, value) {
            (_, CellValue::Missing) => EMPTY_CELL.to_string(),
            (ColumnKind::Date, CellValue::Text(s)) if !s.is_empty() => format_date(s),
            (ColumnKind::DateTime, CellValue::Text(s)) if !s.is_empty() => format_datetime(s),
            (ColumnKind::Money, CellValue::Number(n)) => format_money(*n),
            (ColumnKind::Number { decimals, unit }, CellValue::Number(n)) => {
                let number = format_number_with_decimals(*n, *decimals);
                if unit.is_empty() {
                    number
                } else {
                    format!("{} {}", number, unit)
                }
            }
            (_, other) => other.to_string(),
        }
    }

    pub fn align(&self) -> &'static str {
        match self {
            ColumnKind::Money | ColumnKind::Number { .. } => "right",
            _ => "left",
        }
    }
}

/// Badge modifier class for a status value
pub fn badge_tone(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "won" | "complete" | "completed" | "resolved" => "badge--success",
        "lost" | "cancelled" | "canceled" | "archived" => "badge--danger",
        "new" | "open" | "scheduled" => "badge--primary",
        "in progress" | "contacted" | "awaiting parts" | "low stock" => "badge--warning",
        _ => "badge--secondary",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDef {
    /// Row field and, for sortable columns, the `sortBy` key
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub min_width: f64,
}

impl ColumnDef {
    pub const fn new(key: &'static str, label: &'static str, kind: ColumnKind) -> Self {
        Self {
            key,
            label,
            kind,
            sortable: true,
            min_width: 120.0,
        }
    }

    /// Computed columns the server cannot sort by
    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub const fn width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }
}

/// A record type a collection screen can render
pub trait ListRow: DeserializeOwned + Clone + Send + Sync + 'static {
    fn row_id(&self) -> String;

    fn cell(&self, key: &str) -> CellValue;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_empty_values() {
        assert_eq!(ColumnKind::Money.format(&CellValue::Missing), "—");
        assert_eq!(ColumnKind::Text.format(&CellValue::Text(String::new())), "—");
        assert_eq!(ColumnKind::Date.format(&CellValue::Text(String::new())), "—");
        assert_eq!(CellValue::from(None::<f64>), CellValue::Missing);
    }

    #[test]
    fn test_kinds_format_their_values() {
        assert_eq!(
            ColumnKind::Date.format(&"2024-05-02T09:30:00Z".into()),
            "2024-05-02"
        );
        assert_eq!(ColumnKind::Money.format(&CellValue::Number(24_500.0)), "$24,500.00");
        let kw = ColumnKind::Number { decimals: 1, unit: "kW" };
        assert_eq!(kw.format(&CellValue::Number(6.4)), "6.4 kW");
        assert_eq!(ColumnKind::Flag.format(&true.into()), "Yes");
        assert_eq!(ColumnKind::Money.align(), "right");
        assert_eq!(ColumnKind::Badge.align(), "left");
    }

    #[test]
    fn test_badge_tone() {
        assert_eq!(badge_tone("Won"), "badge--success");
        assert_eq!(badge_tone("In Progress"), "badge--warning");
        assert_eq!(badge_tone("whatever"), "badge--secondary");
    }

    #[test]
    fn test_column_builders() {
        const COL: ColumnDef = ColumnDef::new("adjustment", "Adjustment", ColumnKind::Text)
            .unsortable()
            .width(160.0);
        assert!(!COL.sortable);
        assert_eq!(COL.min_width, 160.0);
    }
}
