use serde::{Deserialize, Serialize};

/// Kind of value a filterable property holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Date,
    Boolean,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::String,
        PropertyType::Number,
        PropertyType::Date,
        PropertyType::Boolean,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Date => "date",
            PropertyType::Boolean => "boolean",
        }
    }

    /// Parse a type key; unknown keys yield `None`
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == key)
    }
}

/// Number of operands an operator needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No operand (is-blank / is-present)
    None,
    /// One comparison value
    One,
}

const ANY_TYPE: &[PropertyType] = &PropertyType::ALL;
const TEXT_ONLY: &[PropertyType] = &[PropertyType::String];
const NUMBER_ONLY: &[PropertyType] = &[PropertyType::Number];
const DATE_ONLY: &[PropertyType] = &[PropertyType::Date];

/// Filter operator. The set is closed: the backend understands exactly these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterOperator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    IsAfter,
    IsBefore,
    IsBlank,
    IsPresent,
}

impl FilterOperator {
    /// Canonical order, also the order shown in the filter builder
    pub const ALL: [FilterOperator; 12] = [
        FilterOperator::Equals,
        FilterOperator::NotEquals,
        FilterOperator::Contains,
        FilterOperator::NotContains,
        FilterOperator::StartsWith,
        FilterOperator::EndsWith,
        FilterOperator::GreaterThan,
        FilterOperator::LessThan,
        FilterOperator::IsAfter,
        FilterOperator::IsBefore,
        FilterOperator::IsBlank,
        FilterOperator::IsPresent,
    ];

    /// Display label for UI
    pub fn label(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::NotEquals => "not equals",
            FilterOperator::Contains => "contains",
            FilterOperator::NotContains => "does not contain",
            FilterOperator::StartsWith => "starts with",
            FilterOperator::EndsWith => "ends with",
            FilterOperator::GreaterThan => "greater than",
            FilterOperator::LessThan => "less than",
            FilterOperator::IsAfter => "is after",
            FilterOperator::IsBefore => "is before",
            FilterOperator::IsBlank => "is blank",
            FilterOperator::IsPresent => "is present",
        }
    }

    /// Machine key sent to the backend (matches the serde representation)
    pub fn value(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::NotEquals => "not-equals",
            FilterOperator::Contains => "contains",
            FilterOperator::NotContains => "not-contains",
            FilterOperator::StartsWith => "starts-with",
            FilterOperator::EndsWith => "ends-with",
            FilterOperator::GreaterThan => "greater-than",
            FilterOperator::LessThan => "less-than",
            FilterOperator::IsAfter => "is-after",
            FilterOperator::IsBefore => "is-before",
            FilterOperator::IsBlank => "is-blank",
            FilterOperator::IsPresent => "is-present",
        }
    }

    pub fn applicable_types(&self) -> &'static [PropertyType] {
        match self {
            FilterOperator::Equals | FilterOperator::NotEquals => ANY_TYPE,
            FilterOperator::Contains
            | FilterOperator::NotContains
            | FilterOperator::StartsWith
            | FilterOperator::EndsWith => TEXT_ONLY,
            FilterOperator::GreaterThan | FilterOperator::LessThan => NUMBER_ONLY,
            FilterOperator::IsAfter | FilterOperator::IsBefore => DATE_ONLY,
            FilterOperator::IsBlank | FilterOperator::IsPresent => ANY_TYPE,
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            FilterOperator::IsBlank | FilterOperator::IsPresent => Arity::None,
            _ => Arity::One,
        }
    }

    pub fn applies_to(&self, property_type: PropertyType) -> bool {
        self.applicable_types().contains(&property_type)
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.value() == value)
    }
}

/// Operators usable with the given property type, in canonical order
pub fn operators_for(property_type: PropertyType) -> Vec<FilterOperator> {
    FilterOperator::ALL
        .into_iter()
        .filter(|op| op.applies_to(property_type))
        .collect()
}

/// Same as [`operators_for`] but keyed by the type name; unknown names give an empty list
pub fn operators_for_type_key(key: &str) -> Vec<FilterOperator> {
    PropertyType::parse(key)
        .map(operators_for)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_operators_for_respects_applicable_types() {
        for t in PropertyType::ALL {
            for op in operators_for(t) {
                assert!(op.applicable_types().contains(&t), "{:?} on {:?}", op, t);
            }
        }
    }

    #[test]
    fn test_operators_for_keeps_canonical_order() {
        assert_eq!(
            operators_for(PropertyType::String),
            vec![
                FilterOperator::Equals,
                FilterOperator::NotEquals,
                FilterOperator::Contains,
                FilterOperator::NotContains,
                FilterOperator::StartsWith,
                FilterOperator::EndsWith,
                FilterOperator::IsBlank,
                FilterOperator::IsPresent,
            ]
        );
        assert_eq!(
            operators_for(PropertyType::Date),
            vec![
                FilterOperator::Equals,
                FilterOperator::NotEquals,
                FilterOperator::IsAfter,
                FilterOperator::IsBefore,
                FilterOperator::IsBlank,
                FilterOperator::IsPresent,
            ]
        );
        assert_eq!(operators_for(PropertyType::Number)[2], FilterOperator::GreaterThan);
    }

    #[test]
    fn test_unknown_type_key_yields_empty_list() {
        assert!(operators_for_type_key("currency").is_empty());
        assert_eq!(operators_for_type_key("boolean").len(), 4);
    }

    #[test]
    fn test_operator_values_are_unique_and_match_serde() {
        let values: HashSet<&str> = FilterOperator::ALL.iter().map(|op| op.value()).collect();
        assert_eq!(values.len(), FilterOperator::ALL.len());

        for op in FilterOperator::ALL {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.value()));
            assert_eq!(FilterOperator::from_value(op.value()), Some(op));
        }
    }

    #[test]
    fn test_property_type_serde_matches_key() {
        for t in PropertyType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            assert_eq!(PropertyType::parse(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(FilterOperator::IsBlank.arity(), Arity::None);
        assert_eq!(FilterOperator::IsPresent.arity(), Arity::None);
        assert_eq!(FilterOperator::Contains.arity(), Arity::One);
    }
}
