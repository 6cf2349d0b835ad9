use serde::{Deserialize, Serialize};

use super::clause::FilterClauseDto;

/// Rows per page when a screen does not say otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Request for one page of a collection (`GET <endpoint>?...`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionQuery {
    #[serde(default)]
    pub filters: Vec<FilterClauseDto>,
    /// Zero-based page index
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub sort: SortDirection,
    pub sort_by: String,
    #[serde(default = "default_view")]
    pub view: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_view() -> String {
    super::view::DEFAULT_VIEW.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::FilterOperator;

    #[test]
    fn test_query_wire_shape() {
        let q = CollectionQuery {
            filters: vec![FilterClauseDto {
                property: "status".into(),
                operator: FilterOperator::Equals,
                value: Some("New".into()),
            }],
            page: 1,
            page_size: 10,
            query: "smith".into(),
            sort: SortDirection::Desc,
            sort_by: "createdAt".into(),
            view: "all".into(),
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["sortBy"], "createdAt");
        assert_eq!(json["sort"], "desc");
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["filters"][0]["operator"], "equals");
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let q: CollectionQuery = serde_json::from_str(r#"{"sortBy":"name"}"#).unwrap();
        assert_eq!(q.page, 0);
        assert_eq!(q.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(q.sort, SortDirection::Asc);
        assert_eq!(q.view, "all");
        assert!(q.filters.is_empty());
    }

    #[test]
    fn test_sort_flip() {
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Asc.flipped().flipped(), SortDirection::Asc);
    }
}
