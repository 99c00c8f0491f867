//! Resource naming
//!
//! A [`ResourceName`] is derived once from user input and carries every
//! identifier the generators need. All forms are computed together in
//! [`ResourceName::derive`], so the table, URI, view folder and route name of a
//! resource can never drift apart.

mod inflect;

pub use inflect::Inflect;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static STUDLY_SINGULAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("valid resource name pattern"));

/// A validated resource name and its derived identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName {
    class: String,
    variable: String,
    plural_variable: String,
    table: String,
    uri: String,
    view_folder: String,
    title: String,
    plural_title: String,
}

impl ResourceName {
    /// Validate `raw` and derive every identifier from it
    ///
    /// Input already in `StudlyCase` is kept verbatim. Anything else is
    /// studly-cased first (`product_category` -> `ProductCategory`) and then
    /// validated.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`] when the (normalized) name does
    /// not match `^[A-Z][A-Za-z0-9]*$`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crud_pack::naming::ResourceName;
    /// let name = ResourceName::derive("ProductCategory").unwrap();
    /// assert_eq!(name.table(), "product_categories");
    /// assert_eq!(name.uri(), "product-categories");
    /// assert_eq!(name.route_name(), name.uri());
    /// ```
    pub fn derive(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let class = if STUDLY_SINGULAR.is_match(trimmed) {
            trimmed.to_string()
        } else {
            Inflect::studly(trimmed)
        };

        if !STUDLY_SINGULAR.is_match(&class) {
            return Err(ValidationError::InvalidName {
                name: raw.to_string(),
            });
        }

        let plural = Inflect::plural(&class);

        Ok(Self {
            variable: Inflect::camel(&class),
            plural_variable: Inflect::camel(&plural),
            table: Inflect::snake(&plural),
            uri: Inflect::kebab(&plural),
            view_folder: Inflect::snake(&plural),
            title: Inflect::title(&class),
            plural_title: Inflect::title(&plural),
            class,
        })
    }

    /// Class identifier (`ProductCategory`)
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Instance variable (`productCategory`)
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Plural instance variable (`productCategories`)
    #[must_use]
    pub fn plural_variable(&self) -> &str {
        &self.plural_variable
    }

    /// Table identifier (`product_categories`)
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// URI path segment (`product-categories`)
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// View folder under `resources/views` (`product_categories`)
    #[must_use]
    pub fn view_folder(&self) -> &str {
        &self.view_folder
    }

    /// Route-name prefix, always identical to [`uri`](Self::uri)
    #[must_use]
    pub fn route_name(&self) -> &str {
        &self.uri
    }

    /// Human-readable singular title (`Product Category`)
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Human-readable plural title (`Product Categories`)
    #[must_use]
    pub fn plural_title(&self) -> &str {
        &self.plural_title
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_word() {
        let name = ResourceName::derive("Category").unwrap();
        assert_eq!(name.class(), "Category");
        assert_eq!(name.variable(), "category");
        assert_eq!(name.plural_variable(), "categories");
        assert_eq!(name.table(), "categories");
        assert_eq!(name.uri(), "categories");
        assert_eq!(name.view_folder(), "categories");
        assert_eq!(name.route_name(), "categories");
    }

    #[test]
    fn test_multi_word_pluralizes_whole_phrase() {
        let name = ResourceName::derive("ProductCategory").unwrap();
        assert_eq!(name.variable(), "productCategory");
        assert_eq!(name.plural_variable(), "productCategories");
        assert_eq!(name.table(), "product_categories");
        assert_eq!(name.uri(), "product-categories");
        assert_eq!(name.view_folder(), "product_categories");
        assert_eq!(name.route_name(), "product-categories");
        assert_eq!(name.plural_title(), "Product Categories");
    }

    #[test]
    fn test_irregular_and_uncountable_plurals() {
        let child = ResourceName::derive("Child").unwrap();
        assert_eq!(child.table(), "children");
        assert_eq!(child.plural_variable(), "children");
        assert_eq!(child.uri(), "children");

        let person = ResourceName::derive("Person").unwrap();
        assert_eq!(person.table(), "people");
        assert_eq!(person.plural_title(), "People");

        let staff = ResourceName::derive("Staff").unwrap();
        assert_eq!(staff.table(), "staff");
        assert_eq!(staff.variable(), "staff");
        assert_eq!(staff.plural_variable(), "staff");

        let data = ResourceName::derive("UserData").unwrap();
        assert_eq!(data.table(), "user_data");
        assert_eq!(data.uri(), "user-data");
    }

    #[test]
    fn test_digits_stay_on_their_word() {
        let name = ResourceName::derive("Item2").unwrap();
        assert_eq!(name.variable(), "item2");
        assert_eq!(name.plural_variable(), "item2s");
        assert_eq!(name.table(), "item2s");
        assert_eq!(name.uri(), "item2s");
        assert_eq!(name.view_folder(), "item2s");
    }

    #[test]
    fn test_snake_input_is_normalized() {
        let name = ResourceName::derive("product_category").unwrap();
        assert_eq!(name.class(), "ProductCategory");
    }

    #[test]
    fn test_invalid_names() {
        for raw in ["", "   ", "123Widget", "_"] {
            let result = ResourceName::derive(raw);
            assert!(
                matches!(result, Err(ValidationError::InvalidName { .. })),
                "expected {raw:?} to be rejected"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_route_name_always_equals_uri(
            raw in "[A-Z][a-z]{1,8}([A-Z][a-z]{1,8}){0,2}"
        ) {
            let first = ResourceName::derive(&raw).unwrap();
            let second = ResourceName::derive(&raw).unwrap();
            prop_assert_eq!(first.route_name(), first.uri());
            prop_assert_eq!(first.uri(), second.uri());
            prop_assert_eq!(&first, &second);
        }

        #[test]
        fn prop_derived_forms_are_lowercase(
            raw in "[A-Z][a-z]{1,8}([A-Z][a-z]{1,8}){0,2}"
        ) {
            let name = ResourceName::derive(&raw).unwrap();
            prop_assert!(!name.uri().chars().any(char::is_uppercase));
            prop_assert!(!name.table().contains('-'));
            prop_assert!(!name.uri().contains('_'));
        }
    }
}
