use serde::{Deserialize, Serialize};

use crate::naming::ResourceName;

/// One entry of `config/crud-pack.php`'s `resources` list
///
/// The installed navigation reads these entries and links to
/// `<route>.index`, `<route>.create` and, with soft deletes, the trash route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavResource {
    /// Text shown in the navigation dropdown
    pub label: String,

    /// Base route name (`product-categories`)
    pub route: String,

    /// Whether a Trash link is shown
    pub soft_deletes: bool,

    /// Trash route override; defaults to `<route>.trash`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trash_route: Option<String>,
}

impl NavResource {
    /// Entry for a freshly generated resource
    #[must_use]
    pub fn for_resource(name: &ResourceName, soft_deletes: bool) -> Self {
        Self {
            label: name.plural_title().to_string(),
            route: name.route_name().to_string(),
            soft_deletes,
            trash_route: None,
        }
    }

    /// `<route>.index`
    #[must_use]
    pub fn index_route(&self) -> String {
        format!("{}.index", self.route)
    }

    /// `<route>.create`
    #[must_use]
    pub fn create_route(&self) -> String {
        format!("{}.create", self.route)
    }

    /// Trash route name, `None` without soft deletes
    #[must_use]
    pub fn trash_route(&self) -> Option<String> {
        if !self.soft_deletes {
            return None;
        }
        Some(
            self.trash_route
                .clone()
                .unwrap_or_else(|| format!("{}.trash", self.route)),
        )
    }

    /// PHP array literal ready to paste into `config/crud-pack.php`
    #[must_use]
    pub fn to_php_entry(&self) -> String {
        let mut entry = format!(
            "[\n    'label' => '{}',\n    'route' => '{}',\n    'soft_deletes' => {},\n",
            self.label, self.route, self.soft_deletes
        );
        if let Some(trash) = &self.trash_route {
            entry.push_str(&format!("    'trash_route' => '{trash}',\n"));
        }
        entry.push_str("],");
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names_follow_resource_route() {
        let name = ResourceName::derive("ProductCategory").unwrap();
        let nav = NavResource::for_resource(&name, true);

        assert_eq!(nav.label, "Product Categories");
        assert_eq!(nav.index_route(), "product-categories.index");
        assert_eq!(nav.create_route(), "product-categories.create");
        assert_eq!(nav.trash_route().as_deref(), Some("product-categories.trash"));
    }

    #[test]
    fn test_no_trash_without_soft_deletes() {
        let name = ResourceName::derive("Category").unwrap();
        let nav = NavResource::for_resource(&name, false);
        assert_eq!(nav.trash_route(), None);
    }

    #[test]
    fn test_trash_override() {
        let nav = NavResource {
            label: "Products".to_string(),
            route: "products".to_string(),
            soft_deletes: true,
            trash_route: Some("admin.products.trash".to_string()),
        };
        assert_eq!(nav.trash_route().as_deref(), Some("admin.products.trash"));
        assert!(nav.to_php_entry().contains("'trash_route' => 'admin.products.trash',"));
    }

    #[test]
    fn test_php_entry() {
        let name = ResourceName::derive("Category").unwrap();
        let entry = NavResource::for_resource(&name, false).to_php_entry();
        assert_eq!(
            entry,
            "[\n    'label' => 'Categories',\n    'route' => 'categories',\n    'soft_deletes' => false,\n],"
        );
    }
}
