use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::FilterValidationError;
use super::operator::{Arity, FilterOperator, PropertyType};
use super::property::{find_property, FilterableProperty};

/// Transport shape of a clause: `{ property, operator, value? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClauseDto {
    pub property: String,
    pub operator: FilterOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Well-formed filter condition: the operator applies to the property type and
/// the value is present exactly when the operator needs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    property: FilterableProperty,
    operator: FilterOperator,
    value: Option<String>,
}

impl FilterClause {
    pub fn new(
        property: FilterableProperty,
        operator: FilterOperator,
        value: Option<String>,
    ) -> Result<Self, FilterValidationError> {
        let value = match operator.arity() {
            Arity::None => None,
            Arity::One => value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()),
        };
        let clause = Self {
            property,
            operator,
            value,
        };
        clause.validate()?;
        Ok(clause)
    }

    pub fn property(&self) -> FilterableProperty {
        self.property
    }

    pub fn operator(&self) -> FilterOperator {
        self.operator
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn validate(&self) -> Result<(), FilterValidationError> {
        let property = self.property;
        if !self.operator.applies_to(property.property_type) {
            return Err(FilterValidationError::OperatorNotApplicable {
                property: property.label.to_string(),
                operator: self.operator.value(),
            });
        }

        match (self.operator.arity(), self.value.as_deref()) {
            (Arity::None, _) => Ok(()),
            (Arity::One, None) => Err(FilterValidationError::MissingValue {
                property: property.label.to_string(),
                operator: self.operator.value(),
            }),
            (Arity::One, Some(v)) => check_operand(property, v),
        }
    }

    pub fn to_dto(&self) -> FilterClauseDto {
        FilterClauseDto {
            property: self.property.name.to_string(),
            operator: self.operator,
            value: self.value.clone(),
        }
    }

    /// Resolve a transport clause against the screen's property list
    pub fn from_dto(
        dto: FilterClauseDto,
        properties: &[FilterableProperty],
    ) -> Result<Self, FilterValidationError> {
        let property = find_property(properties, &dto.property)
            .ok_or(FilterValidationError::UnknownProperty(dto.property))?;
        Self::new(property, dto.operator, dto.value)
    }

    /// Chip text, e.g. `Status contains "Win"`
    pub fn display_text(&self) -> String {
        match &self.value {
            Some(v) => format!("{} {} \"{}\"", self.property.label, self.operator.label(), v),
            None => format!("{} {}", self.property.label, self.operator.label()),
        }
    }
}

impl Serialize for FilterClause {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_dto().serialize(serializer)
    }
}

fn check_operand(property: FilterableProperty, value: &str) -> Result<(), FilterValidationError> {
    let invalid = |expected: &'static str| FilterValidationError::InvalidValue {
        property: property.label.to_string(),
        value: value.to_string(),
        expected,
    };

    match property.property_type {
        PropertyType::String => Ok(()),
        PropertyType::Number => value
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(|_| ())
            .ok_or_else(|| invalid("number")),
        PropertyType::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|_| ())
            .map_err(|_| invalid("date (YYYY-MM-DD)")),
        PropertyType::Boolean => match value {
            "true" | "false" => Ok(()),
            _ => Err(invalid("boolean")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: FilterableProperty =
        FilterableProperty::new("Status", "status", PropertyType::String);
    const ADDRESS: FilterableProperty =
        FilterableProperty::new("Address", "address", PropertyType::String);
    const SYSTEM_SIZE: FilterableProperty =
        FilterableProperty::new("System size (kW)", "systemSize", PropertyType::Number);
    const INSTALL_DATE: FilterableProperty =
        FilterableProperty::new("Install date", "installDate", PropertyType::Date);

    #[test]
    fn test_blank_operator_serializes_without_value() {
        let clause = FilterClause::new(ADDRESS, FilterOperator::IsBlank, None).unwrap();
        let json = serde_json::to_value(&clause).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "property": "address", "operator": "is-blank" })
        );
        assert!(json.get("value").is_none());
    }

    #[test]
    fn test_arity_zero_drops_supplied_value() {
        let clause =
            FilterClause::new(ADDRESS, FilterOperator::IsPresent, Some("x".into())).unwrap();
        assert_eq!(clause.value(), None);
        assert!(serde_json::to_value(&clause).unwrap().get("value").is_none());
    }

    #[test]
    fn test_round_trip_through_dto() {
        let clause =
            FilterClause::new(STATUS, FilterOperator::Contains, Some("Win".into())).unwrap();
        let json = serde_json::to_string(&clause).unwrap();
        let dto: FilterClauseDto = serde_json::from_str(&json).unwrap();
        let back = FilterClause::from_dto(dto, &[ADDRESS, STATUS]).unwrap();

        assert_eq!(back, clause);
        assert_eq!(back.property().name, "status");
        assert_eq!(back.operator().value(), "contains");
        assert_eq!(back.value(), Some("Win"));
    }

    #[test]
    fn test_operator_type_mismatch_is_rejected() {
        let err = FilterClause::new(STATUS, FilterOperator::GreaterThan, Some("3".into()))
            .unwrap_err();
        assert!(matches!(err, FilterValidationError::OperatorNotApplicable { .. }));

        let err = FilterClause::new(SYSTEM_SIZE, FilterOperator::Contains, Some("3".into()))
            .unwrap_err();
        assert!(matches!(err, FilterValidationError::OperatorNotApplicable { .. }));
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let err = FilterClause::new(STATUS, FilterOperator::Equals, None).unwrap_err();
        assert!(matches!(err, FilterValidationError::MissingValue { .. }));

        let err = FilterClause::new(STATUS, FilterOperator::Equals, Some("   ".into())).unwrap_err();
        assert!(matches!(err, FilterValidationError::MissingValue { .. }));
    }

    #[test]
    fn test_operand_must_match_property_type() {
        assert!(FilterClause::new(SYSTEM_SIZE, FilterOperator::GreaterThan, Some("6.5".into())).is_ok());
        assert!(matches!(
            FilterClause::new(SYSTEM_SIZE, FilterOperator::GreaterThan, Some("big".into())),
            Err(FilterValidationError::InvalidValue { .. })
        ));
        for v in ["NaN", "inf", "-infinity", "1e400"] {
            assert!(
                matches!(
                    FilterClause::new(SYSTEM_SIZE, FilterOperator::GreaterThan, Some(v.into())),
                    Err(FilterValidationError::InvalidValue { .. })
                ),
                "{v} should be rejected"
            );
        }
        assert!(FilterClause::new(INSTALL_DATE, FilterOperator::IsAfter, Some("2024-03-01".into())).is_ok());
        assert!(matches!(
            FilterClause::new(INSTALL_DATE, FilterOperator::IsAfter, Some("01/03/2024".into())),
            Err(FilterValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_unknown_property_in_dto() {
        let dto = FilterClauseDto {
            property: "colour".into(),
            operator: FilterOperator::Equals,
            value: Some("red".into()),
        };
        assert_eq!(
            FilterClause::from_dto(dto, &[STATUS]),
            Err(FilterValidationError::UnknownProperty("colour".into()))
        );
    }

    #[test]
    fn test_display_text() {
        let c = FilterClause::new(STATUS, FilterOperator::Contains, Some("Win".into())).unwrap();
        assert_eq!(c.display_text(), "Status contains \"Win\"");
        let c = FilterClause::new(ADDRESS, FilterOperator::IsBlank, None).unwrap();
        assert_eq!(c.display_text(), "Address is blank");
    }
}
