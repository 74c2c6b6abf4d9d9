//! Ordered, heterogeneous sequences of children.

use crate::node::{Child, Markup};
use crate::package::{Package, Packages};

/// An ordered list of children rendered one after another.
///
/// Children keep the exact order in which they were appended; nothing is
/// reordered or deduplicated. Packages are deduplicated by name, with the
/// container's own packages taking precedence over those of its children.
#[derive(Debug, Default)]
pub struct Container {
    children: Vec<Child>,
    packages: Packages,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the container with packages it requires regardless of content.
    pub fn with_packages(packages: impl IntoIterator<Item = Package>) -> Self {
        Self {
            children: Vec::new(),
            packages: packages.into_iter().collect(),
        }
    }

    pub fn append(&mut self, child: impl Into<Child>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn extend<I, C>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Renders every child and joins them with `separator`.
    pub fn dumps_with(&self, separator: &str) -> String {
        self.children
            .iter()
            .map(Child::dumps)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl Markup for Container {
    fn dumps(&self) -> String {
        self.dumps_with("\n")
    }

    fn packages(&self) -> Packages {
        let mut packages = self.packages.clone();
        for child in &self.children {
            packages.merge(child.packages());
        }
        packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Command;

    #[test]
    fn test_children_keep_order() {
        let mut container = Container::new();
        container
            .append("first")
            .append(Command::new("newline").unwrap())
            .append(String::from("first"));

        assert_eq!(container.len(), 3);
        assert_eq!(container.dumps(), "first\n\\newline\nfirst");
    }

    #[test]
    fn test_custom_separator() {
        let mut container = Container::new();
        container.extend(["a", "b", "c"]);
        assert_eq!(container.dumps_with(" "), "a b c");
        assert_eq!(container.dumps_with(""), "abc");
    }

    #[test]
    fn test_empty_container() {
        let container = Container::new();
        assert!(container.is_empty());
        assert_eq!(container.dumps(), "");
        assert!(container.packages().is_empty());
    }

    #[test]
    fn test_packages_recurse_into_nested_containers() {
        let mut inner = Container::new();
        inner.append(
            Command::new("url")
                .unwrap()
                .arg("https://ctan.org")
                .with_package(Package::new("hyperref")),
        );

        let mut outer = Container::with_packages([Package::new("graphicx").with_option("draft")]);
        outer.append(inner);
        outer.append(
            Command::new("includegraphics")
                .unwrap()
                .arg("plot.png")
                .with_package(Package::new("graphicx")),
        );

        let packages = outer.packages();
        let names: Vec<_> = packages.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["graphicx", "hyperref"]);
        assert_eq!(packages.get("graphicx").unwrap().options(), ["draft"]);
    }
}
