//! The capability shared by every renderable node.

use std::fmt;

use crate::package::Packages;
use crate::utils::escape_latex;

/// Anything that can serialize itself to LaTeX and declare the packages it needs.
///
/// Implementations must be pure: calling [`dumps`](Markup::dumps) or
/// [`packages`](Markup::packages) any number of times yields identical results.
pub trait Markup: fmt::Debug {
    /// Returns the LaTeX source for this node.
    fn dumps(&self) -> String;

    /// Returns the packages this node (and anything nested in it) requires.
    fn packages(&self) -> Packages {
        Packages::new()
    }
}

/// An entry in a container or a command argument: literal text or a nested node.
///
/// Literal text is emitted verbatim. Use [`Child::escaped`] for author-supplied
/// strings that must not be interpreted by LaTeX.
#[derive(Debug)]
pub enum Child {
    Text(String),
    Node(Box<dyn Markup>),
}

impl Child {
    /// Builds a text child with LaTeX special characters escaped.
    pub fn escaped(text: &str) -> Self {
        Child::Text(escape_latex(text))
    }

    pub fn dumps(&self) -> String {
        match self {
            Child::Text(text) => text.clone(),
            Child::Node(node) => node.dumps(),
        }
    }

    pub fn packages(&self) -> Packages {
        match self {
            Child::Text(_) => Packages::new(),
            Child::Node(node) => node.packages(),
        }
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl<M: Markup + 'static> From<M> for Child {
    fn from(node: M) -> Self {
        Child::Node(Box::new(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Command, Package};

    #[test]
    fn test_text_child_is_verbatim() {
        let child = Child::from("50% of $x$");
        assert_eq!(child.dumps(), "50% of $x$");
        assert!(child.packages().is_empty());
    }

    #[test]
    fn test_escaped_child() {
        let child = Child::escaped("50%");
        assert_eq!(child.dumps(), r"50\%");
    }

    #[test]
    fn test_node_child_delegates() {
        let cmd = Command::new("textbf")
            .unwrap()
            .arg("bold")
            .with_package(Package::new("bm"));
        let child = Child::from(cmd);
        assert_eq!(child.dumps(), r"\textbf{bold}");
        assert!(child.packages().contains("bm"));
    }
}
