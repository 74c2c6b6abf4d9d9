//! A single LaTeX directive: `\name[options]{arg}{arg}...`.

use crate::error::{MarkupError, Result};
use crate::node::{Child, Markup};
use crate::package::{Package, Packages};

/// A LaTeX command with ordered arguments and named options.
///
/// Options render in insertion order inside one bracket group; each argument
/// gets its own brace group. An empty argument still renders as `{}`.
///
/// ```
/// use texweave_markup::{Command, Markup};
///
/// let cmd = Command::new("includegraphics")?
///     .option_value("width", "5cm")
///     .arg("plot.pdf");
/// assert_eq!(cmd.dumps(), r"\includegraphics[width=5cm]{plot.pdf}");
/// # Ok::<(), texweave_markup::MarkupError>(())
/// ```
#[derive(Debug)]
pub struct Command {
    name: String,
    arguments: Vec<Child>,
    options: Vec<(String, Option<String>)>,
    packages: Packages,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(MarkupError::EmptyCommandName);
        }
        Ok(Self::named(name))
    }

    /// Infallible constructor for the fixed command names used inside this crate.
    pub(crate) fn builtin(name: &'static str) -> Self {
        debug_assert!(!name.is_empty());
        Self::named(name.to_string())
    }

    fn named(name: String) -> Self {
        Self {
            name,
            arguments: Vec::new(),
            options: Vec::new(),
            packages: Packages::new(),
        }
    }

    pub fn arg(mut self, argument: impl Into<Child>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Adds a bare option such as `[draft]`.
    pub fn option(mut self, flag: impl Into<String>) -> Self {
        self.set_option(flag.into(), None);
        self
    }

    /// Adds a `key=value` option. Setting a key twice replaces the value in place.
    pub fn option_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_option(key.into(), Some(value.into()));
        self
    }

    /// Declares a package this command cannot work without.
    pub fn with_package(mut self, package: Package) -> Self {
        self.packages.insert(package);
        self
    }

    fn set_option(&mut self, key: String, value: Option<String>) {
        match self.options.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.options.push((key, value)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[Child] {
        &self.arguments
    }
}

impl Markup for Command {
    fn dumps(&self) -> String {
        let mut out = format!("\\{}", self.name);

        if !self.options.is_empty() {
            let rendered: Vec<String> = self
                .options
                .iter()
                .map(|(key, value)| match value {
                    Some(value) => format!("{key}={value}"),
                    None => key.clone(),
                })
                .collect();
            out.push('[');
            out.push_str(&rendered.join(","));
            out.push(']');
        }

        for argument in &self.arguments {
            out.push('{');
            out.push_str(&argument.dumps());
            out.push('}');
        }

        out
    }

    fn packages(&self) -> Packages {
        let mut packages = self.packages.clone();
        for argument in &self.arguments {
            packages.merge(argument.packages());
        }
        packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_rejected() {
        assert_eq!(Command::new("").unwrap_err(), MarkupError::EmptyCommandName);
    }

    #[test]
    fn test_no_arguments_no_groups() {
        let cmd = Command::new("maketitle").unwrap();
        assert_eq!(cmd.dumps(), r"\maketitle");
    }

    #[test]
    fn test_arguments_each_get_a_group() {
        let cmd = Command::new("setcounter")
            .unwrap()
            .arg("page")
            .arg("3");
        assert_eq!(cmd.dumps(), r"\setcounter{page}{3}");
    }

    #[test]
    fn test_empty_argument_still_renders() {
        let cmd = Command::new("author").unwrap().arg("");
        assert_eq!(cmd.dumps(), r"\author{}");
    }

    #[test]
    fn test_options_precede_arguments() {
        let cmd = Command::new("documentclass")
            .unwrap()
            .option("12pt")
            .option_value("paper", "a4")
            .arg("report");
        assert_eq!(cmd.dumps(), r"\documentclass[12pt,paper=a4]{report}");
    }

    #[test]
    fn test_option_reassignment_keeps_position() {
        let cmd = Command::new("geometry")
            .unwrap()
            .option_value("margin", "1in")
            .option("landscape")
            .option_value("margin", "2cm");
        assert_eq!(cmd.dumps(), r"\geometry[margin=2cm,landscape]");
    }

    #[test]
    fn test_nested_node_argument() {
        let inner = Command::new("emph").unwrap().arg("really");
        let outer = Command::new("textbf").unwrap().arg(inner);
        assert_eq!(outer.dumps(), r"\textbf{\emph{really}}");
    }

    #[test]
    fn test_packages_include_nested_arguments() {
        let inner = Command::new("bm")
            .unwrap()
            .arg("x")
            .with_package(Package::new("bm"));
        let outer = Command::new("hat")
            .unwrap()
            .arg(inner)
            .with_package(Package::new("amsmath"));

        let names: Vec<_> = outer.packages().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, ["amsmath", "bm"]);
    }

    #[test]
    fn test_escaped_argument() {
        let cmd = Command::new("section").unwrap().arg(Child::escaped("50% & more"));
        assert_eq!(cmd.dumps(), r"\section{50\% \& more}");
    }

    #[test]
    fn test_dumps_is_repeatable() {
        let cmd = Command::new("title").unwrap().arg("Report");
        assert_eq!(cmd.dumps(), cmd.dumps());
    }
}
