//! Per-model registry of translatable logical field names.

/// Append-only, insertion-ordered set of logical field names.
///
/// Registering a name twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatableRegistry {
    names: Vec<String>,
}

impl TranslatableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a logical field name. Returns `false` if it was already present.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        tracing::debug!(field = %name, "Registered translatable field");
        self.names.push(name);
        true
    }

    /// Whether `name` is a registered translatable field.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Registered names in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = TranslatableRegistry::new();
        assert!(registry.register("name"));
        assert!(registry.register("description"));
        assert!(!registry.register("name"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.iter().collect::<Vec<_>>(), ["name", "description"]);
        assert!(registry.contains("description"));
        assert!(!registry.contains("price"));
    }
}
