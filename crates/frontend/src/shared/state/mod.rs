pub mod form_state;

pub use form_state::{FieldKind, FormField, FormState, Rule, SelectOption, ValidationError};
