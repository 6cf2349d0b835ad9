//! Lead intake form
//!
//! - model.rs: fields, validation rules and the create call
//! - view.rs: Leptos component

mod model;
mod view;

pub use model::{intake_form, submit_lead, INTAKE_FIELDS};
pub use view::LeadIntakeForm;
