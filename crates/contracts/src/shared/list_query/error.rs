use thiserror::Error;

/// Local validation failure of a filter clause. Never reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterValidationError {
    #[error("operator \"{operator}\" cannot be used with {property}")]
    OperatorNotApplicable {
        property: String,
        operator: &'static str,
    },

    #[error("{property} {operator}: a value is required")]
    MissingValue {
        property: String,
        operator: &'static str,
    },

    #[error("{property}: \"{value}\" is not a valid {expected}")]
    InvalidValue {
        property: String,
        value: String,
        expected: &'static str,
    },

    #[error("unknown filter property \"{0}\"")]
    UnknownProperty(String),

    #[error("unknown filter operator \"{0}\"")]
    UnknownOperator(String),
}
