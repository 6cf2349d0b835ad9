use super::operator::{operators_for, FilterOperator, PropertyType};

/// A field a list screen allows filtering on.
///
/// Declared statically per screen (see `domain::*::FILTERABLE_PROPERTIES`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterableProperty {
    /// Human-readable name shown in the filter builder
    pub label: &'static str,
    /// Backend field key
    pub name: &'static str,
    pub property_type: PropertyType,
}

impl FilterableProperty {
    pub const fn new(label: &'static str, name: &'static str, property_type: PropertyType) -> Self {
        Self {
            label,
            name,
            property_type,
        }
    }

    pub fn operators(&self) -> Vec<FilterOperator> {
        operators_for(self.property_type)
    }
}

pub fn find_property(
    properties: &[FilterableProperty],
    name: &str,
) -> Option<FilterableProperty> {
    properties.iter().copied().find(|p| p.name == name)
}
