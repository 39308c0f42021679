//! The class-to-subpackage assignment table.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, bail};

/// Immutable mapping from class name to target subpackage.
///
/// Built once from the configuration and passed by reference to every phase
/// of a run. It is the single authority for where a class lives after the
/// migration and for how a cross-package reference to it must be qualified.
#[derive(Debug, Clone)]
pub struct PackageMap {
    base: String,
    assignments: BTreeMap<String, String>,
}

impl PackageMap {
    /// Build the table by inverting a group -> classes mapping.
    ///
    /// Fails if any class is assigned more than once; the table must be a
    /// function over class names.
    pub fn new(
        base_package: impl Into<String>,
        packages: &BTreeMap<String, Vec<String>>,
    ) -> Result<Self> {
        let mut assignments: BTreeMap<String, String> = BTreeMap::new();
        for (group, classes) in packages {
            for class in classes {
                if let Some(previous) = assignments.insert(class.clone(), group.clone()) {
                    bail!(
                        "class '{}' is assigned to both '{}' and '{}'",
                        class,
                        previous,
                        group
                    );
                }
            }
        }
        Ok(Self {
            base: base_package.into(),
            assignments,
        })
    }

    /// The base package every qualified name starts with.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The subpackage a class is assigned to, if it is in the table.
    pub fn group_of(&self, class: &str) -> Option<&str> {
        self.assignments.get(class).map(String::as_str)
    }

    /// All `(class, group)` pairs, ordered by class name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments
            .iter()
            .map(|(class, group)| (class.as_str(), group.as_str()))
    }

    /// The distinct subpackage names.
    pub fn groups(&self) -> BTreeSet<&str> {
        self.assignments.values().map(String::as_str).collect()
    }

    /// Fully-qualified name of a class after relocation.
    pub fn qualified(&self, class: &str) -> Option<String> {
        self.group_of(class)
            .map(|group| format!("{}.{}.{}", self.base, group, class))
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
