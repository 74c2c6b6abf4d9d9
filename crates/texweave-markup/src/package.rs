//! Package declarations and the deduplicating registry that aggregates them.

use std::collections::HashSet;

use crate::node::Markup;
use crate::utils::dumps_list;

/// A `\usepackage` declaration: a package name plus its load options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    options: Vec<String>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Adds a load option. Empty options are ignored.
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        let option = option.into();
        if !option.is_empty() {
            self.options.push(option);
        }
        self
    }

    pub fn with_options<I, S>(self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        options.into_iter().fold(self, Package::with_option)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl Markup for Package {
    fn dumps(&self) -> String {
        let mut out = String::from(r"\usepackage");
        if !self.options.is_empty() {
            out.push('[');
            out.push_str(&self.options.join(","));
            out.push(']');
        }
        out.push('{');
        out.push_str(&self.name);
        out.push('}');
        out
    }
}

/// Insertion-ordered set of packages keyed by name.
///
/// The first declaration of a name wins; later declarations of the same name
/// are dropped together with their options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Packages {
    entries: Vec<Package>,
    seen: HashSet<String>,
}

impl Packages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `package` unless one with the same name is already present.
    /// Returns `true` if the package was added.
    pub fn insert(&mut self, package: Package) -> bool {
        if !self.seen.insert(package.name.clone()) {
            return false;
        }
        self.entries.push(package);
        true
    }

    /// Folds `other` into this registry, keeping existing entries on conflict.
    pub fn merge(&mut self, other: Packages) {
        self.extend(other.entries);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.entries.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Package> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One `\usepackage` line per package, in insertion order.
    pub fn dumps(&self) -> String {
        dumps_list(&self.entries, "\n")
    }
}

impl Extend<Package> for Packages {
    fn extend<I: IntoIterator<Item = Package>>(&mut self, iter: I) {
        for package in iter {
            self.insert(package);
        }
    }
}

impl FromIterator<Package> for Packages {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        let mut packages = Packages::new();
        packages.extend(iter);
        packages
    }
}

impl IntoIterator for Packages {
    type Item = Package;
    type IntoIter = std::vec::IntoIter<Package>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Packages {
    type Item = &'a Package;
    type IntoIter = std::slice::Iter<'a, Package>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
