//! The root node: preamble, package list and body of a compilable document.

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::container::Container;
use crate::node::{Child, Markup};
use crate::package::{Package, Packages};
use crate::utils::dumps_list;

/// Construction parameters for a [`Document`].
///
/// Every field has a default, so a partial JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Path (without extension) used when no explicit output path is given.
    pub default_filepath: String,
    pub documentclass: String,
    /// Option passed to `fontenc`.
    pub fontenc: String,
    /// Option passed to `inputenc`.
    pub inputenc: String,
    pub title: String,
    pub author: String,
    pub date: String,
    /// Emit `\maketitle` at the start of the body.
    pub maketitle: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            default_filepath: "default_filepath".to_string(),
            documentclass: "article".to_string(),
            fontenc: "T1".to_string(),
            inputenc: "utf8".to_string(),
            title: String::new(),
            author: String::new(),
            date: String::new(),
            maketitle: false,
        }
    }
}

/// A complete LaTeX document.
///
/// The document class and the title/author/date preamble are fixed at
/// construction; only the body grows afterwards. `fontenc`, `inputenc` and
/// `lmodern` are always loaded, ahead of any package required by the body.
///
/// ```
/// use texweave_markup::{Document, DocumentOptions, Markup};
///
/// let mut doc = Document::with_options(DocumentOptions {
///     title: "Notes".into(),
///     maketitle: true,
///     ..DocumentOptions::default()
/// });
/// doc.append("Hello");
///
/// let source = doc.dumps();
/// assert!(source.starts_with("\\documentclass{article}\n"));
/// assert!(source.ends_with("Hello\n\\end{document}\n"));
/// ```
#[derive(Debug)]
pub struct Document {
    default_filepath: String,
    maketitle: bool,
    documentclass: Command,
    preamble: Vec<Command>,
    content: Container,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_options(DocumentOptions::default())
    }

    pub fn with_options(options: DocumentOptions) -> Self {
        let packages = [
            Package::new("fontenc").with_option(options.fontenc),
            Package::new("inputenc").with_option(options.inputenc),
            Package::new("lmodern"),
        ];

        let preamble = vec![
            Command::builtin("title").arg(options.title),
            Command::builtin("author").arg(options.author),
            Command::builtin("date").arg(options.date),
        ];

        Self {
            default_filepath: options.default_filepath,
            maketitle: options.maketitle,
            documentclass: Command::builtin("documentclass").arg(options.documentclass),
            preamble,
            content: Container::with_packages(packages),
        }
    }

    /// Replaces the class directive, e.g. to pass class options.
    pub fn with_documentclass(mut self, documentclass: Command) -> Self {
        self.documentclass = documentclass;
        self
    }

    pub fn append(&mut self, child: impl Into<Child>) -> &mut Self {
        self.content.append(child);
        self
    }

    pub fn extend<I, C>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.content.extend(children);
        self
    }

    pub fn default_filepath(&self) -> &str {
        &self.default_filepath
    }

    pub fn maketitle(&self) -> bool {
        self.maketitle
    }

    pub fn content(&self) -> &Container {
        &self.content
    }
}

impl Markup for Document {
    fn dumps(&self) -> String {
        let mut head = self.documentclass.dumps();
        head.push('\n');
        head.push_str(&self.packages().dumps());
        head.push('\n');
        head.push_str(&dumps_list(&self.preamble, "\n"));
        head.push('\n');

        let mut body = String::from("\\begin{document}\n");
        if self.maketitle {
            body.push_str("\\maketitle\n");
        }
        body.push_str(&self.content.dumps());
        body.push('\n');
        body.push_str("\\end{document}\n");

        format!("{head}\n{body}")
    }

    fn packages(&self) -> Packages {
        let mut packages = self.content.packages();
        packages.merge(self.documentclass.packages());
        for command in &self.preamble {
            packages.merge(command.packages());
        }
        packages
    }
}
