//! Модель диалога фильтров: черновик строки и пакет ожидающих условий.

use contracts::shared::list_query::{
    find_property, Arity, FilterClause, FilterOperator, FilterValidationError, FilterableProperty,
};

use crate::shared::list_controller::{ListControllerError, ListControllerState};

#[derive(Debug, Clone, PartialEq)]
pub struct FilterDialogState {
    properties: &'static [FilterableProperty],
    property: Option<FilterableProperty>,
    operator: Option<FilterOperator>,
    value: String,
    pending: Vec<FilterClause>,
    last_error: Option<String>,
}

impl FilterDialogState {
    /// Opens the dialog with the filters already applied to the list
    pub fn open(properties: &'static [FilterableProperty], applied: &[FilterClause]) -> Self {
        let mut state = Self {
            properties,
            property: None,
            operator: None,
            value: String::new(),
            pending: applied.to_vec(),
            last_error: None,
        };
        if let Some(first) = properties.first() {
            state.select(*first);
        }
        state
    }

    pub fn properties(&self) -> &'static [FilterableProperty] {
        self.properties
    }

    pub fn property(&self) -> Option<FilterableProperty> {
        self.property
    }

    pub fn operator(&self) -> Option<FilterOperator> {
        self.operator
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn pending(&self) -> &[FilterClause] {
        &self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Operators selectable for the current property
    pub fn available_operators(&self) -> Vec<FilterOperator> {
        self.property.map(|p| p.operators()).unwrap_or_default()
    }

    pub fn select_property(&mut self, name: &str) -> Result<(), FilterValidationError> {
        let property = find_property(self.properties, name)
            .ok_or_else(|| FilterValidationError::UnknownProperty(name.to_string()))?;
        self.select(property);
        Ok(())
    }

    fn select(&mut self, property: FilterableProperty) {
        self.property = Some(property);
        self.operator = property.operators().first().copied();
        self.value.clear();
        self.last_error = None;
    }

    /// Takes the operator's machine key, as delivered by the `<select>`
    pub fn select_operator(&mut self, key: &str) -> Result<(), FilterValidationError> {
        let operator = FilterOperator::from_value(key)
            .ok_or_else(|| FilterValidationError::UnknownOperator(key.to_string()))?;
        let property = self
            .property
            .ok_or_else(|| FilterValidationError::UnknownProperty(String::new()))?;
        if !operator.applies_to(property.property_type) {
            return Err(FilterValidationError::OperatorNotApplicable {
                property: property.label.to_string(),
                operator: operator.value(),
            });
        }
        self.operator = Some(operator);
        if operator.arity() == Arity::None {
            self.value.clear();
        }
        self.last_error = None;
        Ok(())
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// is-blank / is-present take no operand
    pub fn value_input_visible(&self) -> bool {
        self.operator.map(|op| op.arity() == Arity::One).unwrap_or(false)
    }

    pub fn can_add(&self) -> bool {
        self.property.is_some() && self.operator.is_some()
    }

    /// Validates the draft row and appends it to the pending batch
    pub fn add_pending(&mut self) -> Result<(), FilterValidationError> {
        let result = self.build_clause();
        match result {
            Ok(clause) => {
                self.pending.push(clause);
                self.value.clear();
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn build_clause(&self) -> Result<FilterClause, FilterValidationError> {
        let property = self
            .property
            .ok_or_else(|| FilterValidationError::UnknownProperty(String::new()))?;
        let operator = self
            .operator
            .ok_or_else(|| FilterValidationError::UnknownOperator(String::new()))?;
        let value = match operator.arity() {
            Arity::None => None,
            Arity::One => Some(self.value.clone()),
        };
        FilterClause::new(property, operator, value)
    }

    pub fn remove_pending(&mut self, index: usize) {
        if index < self.pending.len() {
            self.pending.remove(index);
        }
    }

    /// Hands the whole batch to the controller; all or nothing
    pub fn apply(&mut self, controller: &mut ListControllerState) -> Result<(), ListControllerError> {
        match controller.apply_filters(self.pending.clone()) {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Empties the batch and drops any filters already applied to the list
    pub fn clear(&mut self, controller: &mut ListControllerState) {
        self.pending.clear();
        self.value.clear();
        self.last_error = None;
        if !controller.filters().is_empty() {
            controller.clear_filters();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::PropertyType;

    const PROPERTIES: &[FilterableProperty] = &[
        FilterableProperty::new("Status", "status", PropertyType::String),
        FilterableProperty::new("System size (kW)", "systemSize", PropertyType::Number),
        FilterableProperty::new("Created", "createdAt", PropertyType::Date),
    ];

    #[test]
    fn test_open_selects_first_property_and_operator() {
        let dialog = FilterDialogState::open(PROPERTIES, &[]);
        assert_eq!(dialog.property().map(|p| p.name), Some("status"));
        assert_eq!(dialog.operator(), Some(FilterOperator::Equals));
        assert!(dialog.value_input_visible());
    }

    #[test]
    fn test_switching_property_resets_operator() {
        let mut dialog = FilterDialogState::open(PROPERTIES, &[]);
        dialog.select_operator("contains").unwrap();
        dialog.select_property("systemSize").unwrap();
        assert_eq!(dialog.operator(), Some(FilterOperator::Equals));
        assert!(!dialog.available_operators().contains(&FilterOperator::Contains));

        assert!(matches!(
            dialog.select_operator("contains"),
            Err(FilterValidationError::OperatorNotApplicable { .. })
        ));
        assert_eq!(dialog.operator(), Some(FilterOperator::Equals));
    }

    #[test]
    fn test_blank_operator_hides_value_input() {
        let mut dialog = FilterDialogState::open(PROPERTIES, &[]);
        dialog.set_value("leftover");
        dialog.select_operator("is-blank").unwrap();
        assert!(!dialog.value_input_visible());
        assert_eq!(dialog.value(), "");
        dialog.add_pending().unwrap();
        assert_eq!(dialog.pending()[0].value(), None);
    }

    #[test]
    fn test_missing_value_is_rejected_locally() {
        let mut dialog = FilterDialogState::open(PROPERTIES, &[]);
        let err = dialog.add_pending().unwrap_err();
        assert!(matches!(err, FilterValidationError::MissingValue { .. }));
        assert!(dialog.pending().is_empty());
        assert!(dialog.last_error().is_some());
    }

    #[test]
    fn test_apply_hands_batch_to_controller() {
        let mut controller = ListControllerState::new("createdAt");
        controller.change_page(3).unwrap();

        let mut dialog = FilterDialogState::open(PROPERTIES, controller.filters());
        dialog.set_value("New");
        dialog.add_pending().unwrap();
        dialog.select_property("systemSize").unwrap();
        dialog.select_operator("greater-than").unwrap();
        dialog.set_value("6");
        dialog.add_pending().unwrap();

        dialog.apply(&mut controller).unwrap();
        assert_eq!(controller.filters().len(), 2);
        assert_eq!(controller.filters()[1].to_dto().operator, FilterOperator::GreaterThan);
        assert_eq!(controller.page(), 0);
    }

    #[test]
    fn test_reopen_starts_from_applied_filters() {
        let mut controller = ListControllerState::new("createdAt");
        let mut dialog = FilterDialogState::open(PROPERTIES, &[]);
        dialog.set_value("Won");
        dialog.add_pending().unwrap();
        dialog.apply(&mut controller).unwrap();

        let mut reopened = FilterDialogState::open(PROPERTIES, controller.filters());
        assert_eq!(reopened.pending().len(), 1);
        reopened.remove_pending(0);
        assert!(reopened.pending().is_empty());
        assert_eq!(controller.filters().len(), 1);
    }

    #[test]
    fn test_clear_also_clears_applied_filters() {
        let mut controller = ListControllerState::new("createdAt");
        let mut dialog = FilterDialogState::open(PROPERTIES, &[]);
        dialog.set_value("Won");
        dialog.add_pending().unwrap();
        dialog.apply(&mut controller).unwrap();
        controller.change_page(2).unwrap();

        dialog.clear(&mut controller);
        assert!(dialog.pending().is_empty());
        assert!(controller.filters().is_empty());
        assert_eq!(controller.page(), 0);
    }

    #[test]
    fn test_clear_without_applied_filters_leaves_page() {
        let mut controller = ListControllerState::new("createdAt");
        controller.change_page(2).unwrap();
        let mut dialog = FilterDialogState::open(PROPERTIES, &[]);
        dialog.clear(&mut controller);
        assert_eq!(controller.page(), 1);
    }

    #[test]
    fn test_empty_property_list_disables_adding() {
        let dialog = FilterDialogState::open(&[], &[]);
        assert!(!dialog.can_add());
        assert!(dialog.available_operators().is_empty());
    }
}
