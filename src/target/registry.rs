use rustc_hash::FxHashMap;

use super::TargetConfig;

/// Target configurations keyed by name.
///
/// Every stored config's `name` equals its key; [`insert`](Self::insert)
/// takes the key from the config itself.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    targets: FxHashMap<String, TargetConfig>,
}

impl TargetRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `config` under its name, returning whatever it replaced.
    /// Replacement is wholesale; no fields carry over from the old entry.
    pub fn insert(&mut self, config: TargetConfig) -> Option<TargetConfig> {
        self.targets.insert(config.name.clone(), config)
    }

    /// Look up a target by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TargetConfig> {
        self.targets.get(name)
    }

    /// Whether a target with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    /// Number of registered targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True when no targets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> =
            self.targets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over all targets in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &TargetConfig> {
        self.targets.values()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::target::TargetSettings;

    #[test]
    fn insert_keys_by_name() {
        let mut registry = TargetRegistry::new();
        assert!(registry.is_empty());
        let _ = registry.insert(TargetSettings::new("orbit").into());
        let _ = registry.insert(TargetSettings::new("chase").into());
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("orbit"));
        assert!(!registry.contains("missing"));
        assert_eq!(registry.names(), vec!["chase", "orbit"]);
        assert!(registry.get("orbit").is_some_and(|t| t.name == "orbit"));

        let mut seen: Vec<&str> =
            registry.iter().map(|t| t.name.as_str()).collect();
        seen.sort_unstable();
        assert_eq!(seen, registry.names());
    }

    #[test]
    fn second_insert_replaces_entirely() {
        let mut registry = TargetRegistry::new();
        let first = TargetSettings::new("orbit")
            .with_offset(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Quat::from_rotation_x(0.5))
            .with_stiffness(0.9)
            .with_match_rotation(false);
        assert!(registry.insert(first.into()).is_none());

        let replaced = registry.insert(TargetSettings::new("orbit").into());
        assert!(replaced.is_some_and(|old| old.stiffness == 0.9));

        assert_eq!(registry.len(), 1);
        let stored = registry.get("orbit");
        assert!(stored.is_some_and(|t| {
            t.offset == Vec3::new(0.0, 30.0, 50.0)
                && t.rotation.is_none()
                && t.stiffness == 0.4
                && t.match_rotation
        }));
    }
}
