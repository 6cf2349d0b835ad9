use serde::{Deserialize, Serialize};

/// One page of a collection plus the server-computed match count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage<T> {
    pub rows: Vec<T>,
    pub total_count: usize,
}

impl<T> CollectionPage<T> {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of pages for the given page size (at least 1)
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        self.total_count.div_ceil(page_size).max(1)
    }
}

impl<T> Default for CollectionPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}
