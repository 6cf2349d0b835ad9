//! Состояние списка: страница, сортировка, поиск, представление и фильтры.
//!
//! All transitions are synchronous and perform no I/O; the owning screen
//! issues a fetch after each one.

use contracts::shared::list_query::{
    CollectionQuery, FilterClause, FilterValidationError, SortDirection, DEFAULT_VIEW,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListControllerError {
    #[error(transparent)]
    InvalidFilter(#[from] FilterValidationError),

    #[error("page {0} is out of range (pages start at 1)")]
    InvalidPage(usize),

    #[error("no filter at position {0}")]
    NoSuchFilter(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListControllerState {
    /// Zero-based
    page: usize,
    sort: SortDirection,
    sort_by: String,
    query: String,
    view: String,
    /// ANDed on the server; order is display order only
    filters: Vec<FilterClause>,
}

impl ListControllerState {
    pub fn new(default_sort_by: &str) -> Self {
        Self {
            page: 0,
            sort: SortDirection::Asc,
            sort_by: default_sort_by.to_string(),
            query: String::new(),
            view: DEFAULT_VIEW.to_string(),
            filters: Vec::new(),
        }
    }

    /// Zero-based
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn sort(&self) -> SortDirection {
        self.sort
    }

    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view(&self) -> &str {
        &self.view
    }

    pub fn filters(&self) -> &[FilterClause] {
        &self.filters
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.page = 0;
    }

    pub fn set_view(&mut self, view: impl Into<String>) {
        self.view = view.into();
        self.page = 0;
    }

    /// Replaces the filter list. Either every clause is accepted or the state is left as is.
    pub fn apply_filters(&mut self, clauses: Vec<FilterClause>) -> Result<(), ListControllerError> {
        for clause in &clauses {
            clause.validate()?;
        }
        self.filters = clauses;
        self.page = 0;
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 0;
    }

    pub fn remove_filter(&mut self, index: usize) -> Result<FilterClause, ListControllerError> {
        if index >= self.filters.len() {
            return Err(ListControllerError::NoSuchFilter(index));
        }
        let removed = self.filters.remove(index);
        self.page = 0;
        Ok(removed)
    }

    /// `page_one_based` comes straight from the pagination control
    pub fn change_page(&mut self, page_one_based: usize) -> Result<(), ListControllerError> {
        let page = page_one_based
            .checked_sub(1)
            .ok_or(ListControllerError::InvalidPage(page_one_based))?;
        self.page = page;
        Ok(())
    }

    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_by == column {
            self.sort = self.sort.flipped();
        } else {
            self.sort_by = column.to_string();
            self.sort = SortDirection::Asc;
        }
        self.page = 0;
    }

    pub fn active_filter_count(&self) -> usize {
        let search = usize::from(!self.query.trim().is_empty());
        let view = usize::from(self.view != DEFAULT_VIEW);
        self.filters.len() + search + view
    }

    pub fn to_query(&self, page_size: usize) -> CollectionQuery {
        CollectionQuery {
            filters: self.filters.iter().map(FilterClause::to_dto).collect(),
            page: self.page,
            page_size,
            query: self.query.clone(),
            sort: self.sort,
            sort_by: self.sort_by.clone(),
            view: self.view.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::{FilterOperator, FilterableProperty, PropertyType};

    const STATUS: FilterableProperty =
        FilterableProperty::new("Status", "status", PropertyType::String);

    fn status_equals(value: &str) -> FilterClause {
        FilterClause::new(STATUS, FilterOperator::Equals, Some(value.to_string())).unwrap()
    }

    fn on_page_three() -> ListControllerState {
        let mut s = ListControllerState::new("createdAt");
        s.change_page(3).unwrap();
        s
    }

    #[test]
    fn test_defaults() {
        let s = ListControllerState::new("createdAt");
        assert_eq!(s.page(), 0);
        assert_eq!(s.sort(), SortDirection::Asc);
        assert_eq!(s.sort_by(), "createdAt");
        assert_eq!(s.view(), "all");
        assert!(s.query().is_empty());
        assert!(s.filters().is_empty());
    }

    #[test]
    fn test_setters_reset_page() {
        let mut s = on_page_three();
        s.set_query("smith");
        assert_eq!(s.page, 0);

        let mut s = on_page_three();
        s.apply_filters(vec![status_equals("New")]).unwrap();
        assert_eq!(s.page, 0);

        let mut s = on_page_three();
        s.set_view("Complete");
        assert_eq!(s.page, 0);

        let mut s = on_page_three();
        s.toggle_sort("name");
        assert_eq!(s.page, 0);
    }

    #[test]
    fn test_repeated_setter_is_idempotent() {
        let mut s = on_page_three();
        s.set_query("smith");
        let once = s.clone();
        s.set_query("smith");
        assert_eq!(s, once);

        s.set_view("Won");
        let once = s.clone();
        s.set_view("Won");
        assert_eq!(s, once);
    }

    #[test]
    fn test_apply_then_clear() {
        let mut s = ListControllerState::new("createdAt");
        s.apply_filters(vec![status_equals("New"), status_equals("Won")]).unwrap();
        s.change_page(2).unwrap();
        s.clear_filters();
        assert!(s.filters.is_empty());
        assert_eq!(s.page, 0);
    }

    #[test]
    fn test_toggle_sort() {
        let mut s = ListControllerState::new("createdAt");
        s.toggle_sort("name");
        assert_eq!(s.sort_by, "name");
        assert_eq!(s.sort, SortDirection::Asc);

        s.toggle_sort("name");
        assert_eq!(s.sort, SortDirection::Desc);
        s.toggle_sort("name");
        assert_eq!(s.sort, SortDirection::Asc);
        assert_eq!(s.sort_by, "name");

        s.toggle_sort("name");
        s.toggle_sort("status");
        assert_eq!(s.sort, SortDirection::Asc);
    }

    #[test]
    fn test_change_page_is_one_based() {
        let mut s = ListControllerState::new("createdAt");
        s.change_page(3).unwrap();
        s.change_page(5).unwrap();
        assert_eq!(s.page, 4);
    }

    #[test]
    fn test_change_page_rejects_zero() {
        let mut s = on_page_three();
        assert_eq!(s.change_page(0), Err(ListControllerError::InvalidPage(0)));
        assert_eq!(s.page, 2);
    }

    #[test]
    fn test_page_change_keeps_query_and_filters() {
        let mut s = ListControllerState::new("createdAt");
        s.set_query("smith");
        s.apply_filters(vec![status_equals("New")]).unwrap();
        s.change_page(2).unwrap();

        assert_eq!(s.query, "smith");
        assert_eq!(s.filters, vec![status_equals("New")]);
        assert_eq!(s.page, 1);

        let q = s.to_query(10);
        assert_eq!(q.page, 1);
        assert_eq!(q.query, "smith");
        assert_eq!(q.filters[0].property, "status");
        assert_eq!(q.filters[0].value.as_deref(), Some("New"));
    }

    #[test]
    fn test_remove_filter() {
        let mut s = ListControllerState::new("createdAt");
        s.apply_filters(vec![status_equals("New"), status_equals("Won")]).unwrap();
        s.change_page(4).unwrap();

        let removed = s.remove_filter(0).unwrap();
        assert_eq!(removed, status_equals("New"));
        assert_eq!(s.filters, vec![status_equals("Won")]);
        assert_eq!(s.page, 0);
        assert_eq!(s.remove_filter(5), Err(ListControllerError::NoSuchFilter(5)));
    }

    #[test]
    fn test_active_filter_count() {
        let mut s = ListControllerState::new("createdAt");
        assert_eq!(s.active_filter_count(), 0);
        s.set_query("  ");
        assert_eq!(s.active_filter_count(), 0);
        s.set_query("smith");
        s.set_view("Won");
        s.apply_filters(vec![status_equals("New")]).unwrap();
        assert_eq!(s.active_filter_count(), 3);
    }
}
