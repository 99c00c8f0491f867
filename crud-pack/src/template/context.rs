/// Ordered token -> replacement mapping for one artifact
///
/// Tokens are stored without braces. Inserting an existing token replaces its
/// value in place, so the last write wins while first-insertion order is
/// kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    entries: Vec<(String, String)>,
}

impl TemplateContext {
    /// Empty context
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `token` to `value`
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        let token = token.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((token, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(token, value);
        self
    }

    /// Insert every pair of `entries`
    pub fn extend<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (token, value) in entries {
            self.insert(token, value);
        }
    }

    /// Value for `token`
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v.as_str())
    }

    /// Token names in insertion order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    /// `(token, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    /// Number of tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the context is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_in_place() {
        let mut ctx = TemplateContext::new().with("A", "1").with("B", "2");
        ctx.insert("A", "3");

        assert_eq!(ctx.get("A"), Some("3"));
        assert_eq!(ctx.tokens().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn test_extend() {
        let mut ctx = TemplateContext::new();
        ctx.extend([("X", "x"), ("Y", "y")]);
        assert_eq!(ctx.iter().collect::<Vec<_>>(), vec![("X", "x"), ("Y", "y")]);
    }
}
