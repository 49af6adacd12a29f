use thiserror::Error;

/// Tabs shown in the navigation bar, in display order.
const BUILTIN_TABS: [(&str, &str); 3] = [
    ("Overview", "A quick look at everything stored in your vault."),
    ("Vault", "All your passwords, notes and secrets in one place."),
    ("Settings", "Manage your account name and profile avatar."),
];

/// Errors raised when a tab catalog is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CatalogError {
    #[error("tab catalog is empty")]
    Empty,
    #[error("tab name must not be blank")]
    BlankName,
    #[error("duplicate tab `{name}`")]
    DuplicateTab { name: String },
}

/// A single navigation tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TabEntry {
    name: String,
    description: String,
    key: String,
}

impl TabEntry {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            key: tab_key(name),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    /// Lower-cased name used as URL segment and selection value.
    pub(crate) fn key(&self) -> &str {
        &self.key
    }
}

/// Ordered, immutable list of tabs with case-insensitively unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TabCatalog {
    entries: Vec<TabEntry>,
}

impl TabCatalog {
    pub(crate) fn new<'a>(
        specs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, CatalogError> {
        let mut entries: Vec<TabEntry> = Vec::new();
        for (name, description) in specs {
            let name = name.trim();
            if name.is_empty() {
                return Err(CatalogError::BlankName);
            }

            let entry = TabEntry::new(name, description);
            if entries.iter().any(|existing| existing.key == entry.key) {
                return Err(CatalogError::DuplicateTab {
                    name: name.to_string(),
                });
            }
            entries.push(entry);
        }

        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    /// The catalog compiled into the application.
    pub(crate) fn builtin() -> Self {
        Self::new(BUILTIN_TABS).unwrap_or_else(|err| {
            log::error!("builtin tab catalog rejected: {err}");
            Self {
                entries: BUILTIN_TABS
                    .iter()
                    .map(|(name, description)| TabEntry::new(name, description))
                    .collect(),
            }
        })
    }

    pub(crate) fn entries(&self) -> &[TabEntry] {
        &self.entries
    }

    /// Find a tab by name or key, ignoring case.
    pub(crate) fn find(&self, name: &str) -> Option<&TabEntry> {
        let key = tab_key(name);
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Key of the first tab, the landing page after sign-in.
    pub(crate) fn default_key(&self) -> &str {
        self.entries.first().map(TabEntry::key).unwrap_or_default()
    }
}

/// Derive the routable key of a tab name.
pub(crate) fn tab_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_builtin_tabs_when_validated_then_catalog_is_accepted() {
        let validated = TabCatalog::new(BUILTIN_TABS).expect("builtin valid");

        assert_eq!(validated, TabCatalog::builtin());
        assert_eq!(validated.default_key(), "overview");
    }

    #[test]
    fn given_names_differing_only_in_case_then_duplicate_is_rejected() {
        let result = TabCatalog::new([("Vault", "a"), ("VAULT", "b")]);

        assert_eq!(
            result,
            Err(CatalogError::DuplicateTab {
                name: String::from("VAULT")
            })
        );
    }

    #[test]
    fn given_empty_specs_then_catalog_is_rejected() {
        let specs: [(&str, &str); 0] = [];

        assert_eq!(TabCatalog::new(specs), Err(CatalogError::Empty));
    }

    #[test]
    fn given_mixed_case_lookup_then_entry_is_found_with_lower_key() {
        let catalog = TabCatalog::builtin();

        let entry = catalog.find("SeTtInGs").expect("tab exists");

        assert_eq!(entry.name(), "Settings");
        assert_eq!(entry.key(), "settings");
    }

    #[test]
    fn given_catalog_then_insertion_order_is_display_order() {
        let catalog = TabCatalog::new([("b", ""), ("a", ""), ("c", "")])
            .expect("catalog valid");

        let keys: Vec<&str> =
            catalog.entries().iter().map(TabEntry::key).collect();

        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
