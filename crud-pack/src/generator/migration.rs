//! Create-table migration lookup
//!
//! A table gets at most one create-table migration. Regeneration reuses the
//! existing file name instead of adding a second timestamped file.

use chrono::NaiveDateTime;

/// Laravel migration timestamp prefix format
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// `<ts>_create_<table>_table.php`
#[must_use]
pub fn new_file_name(table: &str, timestamp: NaiveDateTime) -> String {
    format!("{}_create_{table}_table.php", timestamp.format(TIMESTAMP_FORMAT))
}

/// Existing create-table migrations for `table`, sorted
///
/// The Laravel `_create_<table>_table.php` form wins; the legacy
/// `create<table>_table.php` form is only considered when no file has it.
#[must_use]
pub fn find_existing(file_names: &[String], table: &str) -> Vec<String> {
    let standard = format!("_create_{table}_table.php");
    let legacy = format!("create{table}_table.php");

    let mut matches: Vec<String> = file_names
        .iter()
        .filter(|f| f.ends_with(&standard))
        .cloned()
        .collect();

    if matches.is_empty() {
        matches = file_names
            .iter()
            .filter(|f| f.ends_with(&legacy))
            .cloned()
            .collect();
    }

    matches.sort();
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_new_file_name() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();
        assert_eq!(
            new_file_name("product_categories", ts),
            "2025_03_09_140507_create_product_categories_table.php"
        );
    }

    #[test]
    fn test_find_standard_form() {
        let files = names(&[
            "0001_01_01_000000_create_users_table.php",
            "2025_01_01_000000_create_posts_table.php",
            "2025_01_02_000000_create_blog_posts_table.php",
        ]);
        assert_eq!(
            find_existing(&files, "posts"),
            vec!["2025_01_01_000000_create_posts_table.php"]
        );
    }

    #[test]
    fn test_legacy_form_only_as_fallback() {
        let files = names(&["2024_01_01_000000createposts_table.php"]);
        assert_eq!(find_existing(&files, "posts"), files);

        let both = names(&[
            "2024_01_01_000000createposts_table.php",
            "2025_01_01_000000_create_posts_table.php",
        ]);
        assert_eq!(
            find_existing(&both, "posts"),
            vec!["2025_01_01_000000_create_posts_table.php"]
        );
    }

    #[test]
    fn test_multiple_matches_sorted() {
        let files = names(&[
            "2025_02_01_000000_create_posts_table.php",
            "2025_01_01_000000_create_posts_table.php",
        ]);
        let found = find_existing(&files, "posts");
        assert_eq!(found[0], "2025_01_01_000000_create_posts_table.php");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_no_match() {
        let files = names(&["2025_01_01_000000_create_users_table.php"]);
        assert!(find_existing(&files, "posts").is_empty());
    }
}
