//! Inflection helpers for code generation
//!
//! Word boundaries follow Laravel's `Str` helpers: a new word starts at each
//! uppercase letter, and digits stay attached to the word before them
//! (`Item2` -> `item2`). Pluralization touches only the trailing word and
//! checks irregular and uncountable nouns before handing regular nouns to the
//! `Inflector` crate.

use inflector::Inflector;

/// Nouns with no plural form
const UNCOUNTABLE: &[&str] = &[
    "advice",
    "audio",
    "cattle",
    "data",
    "deer",
    "education",
    "equipment",
    "evidence",
    "feedback",
    "fish",
    "furniture",
    "hardware",
    "information",
    "knowledge",
    "luggage",
    "metadata",
    "money",
    "moose",
    "music",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
    "traffic",
];

/// Singular to plural for nouns the regular rules get wrong
const IRREGULAR: &[(&str, &str)] = &[
    ("analysis", "analyses"),
    ("cactus", "cacti"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("human", "humans"),
    ("leaf", "leaves"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Naming-convention helpers
pub struct Inflect;

impl Inflect {
    /// Convert string to `snake_case`
    ///
    /// # Examples
    ///
    /// ```
    /// # use crud_pack::naming::Inflect;
    /// assert_eq!(Inflect::snake("ProductCategories"), "product_categories");
    /// assert_eq!(Inflect::snake("Item2s"), "item2s");
    /// ```
    #[must_use]
    pub fn snake(input: &str) -> String {
        Self::delimited(input, '_')
    }

    /// Convert string to `StudlyCase` (`PascalCase`)
    ///
    /// # Examples
    ///
    /// ```
    /// # use crud_pack::naming::Inflect;
    /// assert_eq!(Inflect::studly("product_category"), "ProductCategory");
    /// assert_eq!(Inflect::studly("product category"), "ProductCategory");
    /// ```
    #[must_use]
    pub fn studly(input: &str) -> String {
        input.to_pascal_case()
    }

    /// Lowercase the first character of a `StudlyCase` string
    ///
    /// # Examples
    ///
    /// ```
    /// # use crud_pack::naming::Inflect;
    /// assert_eq!(Inflect::camel("ProductCategory"), "productCategory");
    /// ```
    #[must_use]
    pub fn camel(input: &str) -> String {
        let mut chars = input.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_lowercase().chain(chars).collect()
        })
    }

    /// Convert string to kebab-case
    ///
    /// # Examples
    ///
    /// ```
    /// # use crud_pack::naming::Inflect;
    /// assert_eq!(Inflect::kebab("ProductCategories"), "product-categories");
    /// ```
    #[must_use]
    pub fn kebab(input: &str) -> String {
        Self::delimited(input, '-')
    }

    /// Pluralize the trailing word of a `StudlyCase` phrase
    ///
    /// # Examples
    ///
    /// ```
    /// # use crud_pack::naming::Inflect;
    /// assert_eq!(Inflect::plural("ProductCategory"), "ProductCategories");
    /// assert_eq!(Inflect::plural("Child"), "Children");
    /// assert_eq!(Inflect::plural("UserData"), "UserData");
    /// ```
    #[must_use]
    pub fn plural(input: &str) -> String {
        let split = input
            .char_indices()
            .filter(|&(i, c)| i > 0 && c.is_uppercase())
            .map(|(i, _)| i)
            .last()
            .unwrap_or(0);
        let (head, word) = input.split_at(split);

        format!("{head}{}", Self::plural_word(word))
    }

    /// Human-readable title (`ProductCategory` -> `Product Category`)
    #[must_use]
    pub fn title(input: &str) -> String {
        let mut out = String::with_capacity(input.len() + 4);
        for (i, c) in input.chars().enumerate() {
            if i > 0 && c.is_uppercase() {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }

    fn delimited(input: &str, delimiter: char) -> String {
        let mut out = String::with_capacity(input.len() + 4);
        for (i, c) in input.chars().enumerate() {
            if i > 0 && c.is_uppercase() {
                out.push(delimiter);
            }
            out.extend(c.to_lowercase());
        }
        out
    }

    fn plural_word(word: &str) -> String {
        let lower = word.to_lowercase();

        let plural = if UNCOUNTABLE.contains(&lower.as_str()) {
            lower.clone()
        } else if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
            (*plural).to_string()
        } else {
            lower.to_plural()
        };

        Self::match_case(word, &plural)
    }

    /// Give `plural` the casing of `word`: all caps, leading capital, or as is
    fn match_case(word: &str, plural: &str) -> String {
        let letters = || word.chars().filter(|c| c.is_alphabetic());
        if word.chars().count() > 1 && letters().all(char::is_uppercase) {
            return plural.to_uppercase();
        }
        if word.chars().next().is_some_and(char::is_uppercase) {
            let mut chars = plural.chars();
            return chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            });
        }
        plural.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake() {
        assert_eq!(Inflect::snake("UserProfile"), "user_profile");
        assert_eq!(Inflect::snake("simple"), "simple");
        assert_eq!(Inflect::snake("Item2s"), "item2s");
    }

    #[test]
    fn test_studly() {
        assert_eq!(Inflect::studly("user_profile"), "UserProfile");
        assert_eq!(Inflect::studly("Simple"), "Simple");
    }

    #[test]
    fn test_camel() {
        assert_eq!(Inflect::camel("UserProfile"), "userProfile");
        assert_eq!(Inflect::camel("Post"), "post");
        assert_eq!(Inflect::camel("Item2s"), "item2s");
        assert_eq!(Inflect::camel(""), "");
    }

    #[test]
    fn test_kebab() {
        assert_eq!(Inflect::kebab("UserProfiles"), "user-profiles");
        assert_eq!(Inflect::kebab("simple"), "simple");
    }

    #[test]
    fn test_plural() {
        assert_eq!(Inflect::plural("Post"), "Posts");
        assert_eq!(Inflect::plural("Category"), "Categories");
        assert_eq!(Inflect::plural("ProductCategory"), "ProductCategories");
        assert_eq!(Inflect::plural("Box"), "Boxes");
    }

    #[test]
    fn test_plural_irregular_and_uncountable() {
        assert_eq!(Inflect::plural("Child"), "Children");
        assert_eq!(Inflect::plural("Person"), "People");
        assert_eq!(Inflect::plural("SalesPerson"), "SalesPeople");
        assert_eq!(Inflect::plural("Human"), "Humans");
        assert_eq!(Inflect::plural("Staff"), "Staff");
        assert_eq!(Inflect::plural("UserData"), "UserData");
        assert_eq!(Inflect::plural("person"), "people");
    }

    #[test]
    fn test_plural_keeps_digits_on_the_word() {
        assert_eq!(Inflect::plural("Item2"), "Item2s");
    }

    #[test]
    fn test_title() {
        assert_eq!(Inflect::title("UserProfile"), "User Profile");
        assert_eq!(Inflect::title("ProductCategories"), "Product Categories");
    }
}
