//! Search context and results.

use std::collections::HashMap;

use serde::Serialize;

/// Passwords the caller has made available to a search.
///
/// Keyed by zero-based note position. Protected notes without an entry are
/// matched on title only.
#[derive(Debug, Clone, Default)]
pub struct SearchScope {
    passwords: HashMap<usize, String>,
}

impl SearchScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`SearchScope::insert`].
    pub fn with_password(mut self, index: usize, password: impl Into<String>) -> Self {
        self.insert(index, password);
        self
    }

    pub fn insert(&mut self, index: usize, password: impl Into<String>) {
        self.passwords.insert(index, password.into());
    }

    pub fn password_for(&self, index: usize) -> Option<&str> {
        self.passwords.get(&index).map(String::as_str)
    }
}

/// A note matched by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Zero-based position in the vault.
    pub index: usize,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::Vault;
    use tempfile::tempdir;

    fn sample_vault(dir: &std::path::Path) -> Vault {
        let mut vault = Vault::open(dir.join("notes.vault"));
        vault.create("Shopping", "Buy MILK and eggs", None).unwrap();
        vault.create("Diary", "the milkman came", Some("pw")).unwrap();
        vault.create("Milk recipes", "custard", Some("other")).unwrap();
        vault
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let vault = sample_vault(dir.path());

        let hits = vault.search("mIlK", &SearchScope::new());
        let titles: Vec<_> = hits.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Shopping", "Milk recipes"]);
    }

    #[test]
    fn test_protected_body_needs_password_in_scope() {
        let dir = tempdir().unwrap();
        let vault = sample_vault(dir.path());

        assert!(vault
            .search("milkman", &SearchScope::new())
            .is_empty());

        let scope = SearchScope::new().with_password(1, "pw");
        let hits = vault.search("milkman", &scope);
        assert_eq!(
            hits,
            vec![SearchHit {
                index: 1,
                title: "Diary".to_string()
            }]
        );
    }

    #[test]
    fn test_wrong_password_in_scope_is_silently_skipped() {
        let dir = tempdir().unwrap();
        let vault = sample_vault(dir.path());

        let scope = SearchScope::new().with_password(1, "wrong");
        assert!(vault.search("milkman", &scope).is_empty());
    }

    #[test]
    fn test_title_match_on_locked_note_without_password() {
        let dir = tempdir().unwrap();
        let vault = sample_vault(dir.path());

        let hits = vault.search("recipes", &SearchScope::new());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 2);
    }
}
