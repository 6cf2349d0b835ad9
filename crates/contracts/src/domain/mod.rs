pub mod a001_lead;
pub mod a002_install;
pub mod a003_service;
pub mod a004_stock_item;

#[cfg(test)]
mod tests {
    use crate::shared::list_query::{FilterableProperty, ListView, DEFAULT_VIEW};
    use std::collections::HashSet;

    fn screens() -> Vec<(&'static str, &'static [FilterableProperty], &'static [ListView])> {
        vec![
            (super::a001_lead::DEFAULT_SORT_BY, super::a001_lead::FILTERABLE_PROPERTIES, super::a001_lead::VIEWS),
            (super::a002_install::DEFAULT_SORT_BY, super::a002_install::FILTERABLE_PROPERTIES, super::a002_install::VIEWS),
            (super::a003_service::DEFAULT_SORT_BY, super::a003_service::FILTERABLE_PROPERTIES, super::a003_service::VIEWS),
            (super::a004_stock_item::DEFAULT_SORT_BY, super::a004_stock_item::FILTERABLE_PROPERTIES, super::a004_stock_item::VIEWS),
        ]
    }

    #[test]
    fn test_screen_tables_are_consistent() {
        for (sort_by, properties, views) in screens() {
            let names: HashSet<&str> = properties.iter().map(|p| p.name).collect();
            assert_eq!(names.len(), properties.len(), "duplicate property key");
            assert!(names.contains(sort_by), "default sort {} is not a property", sort_by);
            assert_eq!(views[0].value, DEFAULT_VIEW);
            assert!(properties.iter().all(|p| !p.operators().is_empty()));
        }
    }
}
