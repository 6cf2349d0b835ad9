pub mod dto;
pub mod pricing;

pub use dto::*;
pub use pricing::PriceAdjustment;
