//! PageFrame: standard root wrapper for every routed page.
//!
//! Puts two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a001_lead--list"`
//!   - `data-page-category`: see [`PageCategory`]
//!
//! The `--` separator keeps the entity searchable: copy the id from the DOM
//! inspector and it leads to `domain/a001_lead/`.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Table with filters and pagination
    List,
    /// Create / edit form for a single record
    Form,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Form => "form",
        }
    }

    pub fn base_class(&self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Form => "page page--form",
        }
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    category: PageCategory,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        category.base_class().to_string()
    } else {
        format!("{} {class}", category.base_class())
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category.as_str()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_attributes() {
        assert_eq!(PageCategory::List.as_str(), "list");
        assert_eq!(PageCategory::Form.base_class(), "page page--form");
    }
}
