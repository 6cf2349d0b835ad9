//! List query model shared by every collection screen and the backend:
//! operator registry, filterable properties, filter clauses, page request/response.

pub mod clause;
pub mod error;
pub mod operator;
pub mod property;
pub mod request;
pub mod response;
pub mod view;

pub use clause::{FilterClause, FilterClauseDto};
pub use error::FilterValidationError;
pub use operator::{operators_for, operators_for_type_key, Arity, FilterOperator, PropertyType};
pub use property::{find_property, FilterableProperty};
pub use request::{CollectionQuery, SortDirection, DEFAULT_PAGE_SIZE};
pub use response::CollectionPage;
pub use view::{ListView, DEFAULT_VIEW};
