//! # TeXWeave Markup
//!
//! Build LaTeX documents as trees of typed nodes and render them to source
//! text that `pdflatex` (or any other engine) can compile.
//!
//! ## Overview
//!
//! Every node implements [`Markup`], which has two jobs:
//!
//! - **Serialization**: [`Markup::dumps`] returns the node's LaTeX source.
//! - **Dependencies**: [`Markup::packages`] reports the packages the node needs,
//!   recursively including its children.
//!
//! Rendering is a pure traversal. Nodes are never consumed or modified by
//! `dumps`, so a tree can be rendered any number of times with identical output.
//!
//! ## Node types
//!
//! - [`Command`] - `\name[options]{arg}...`
//! - [`Container`] - ordered children joined by a separator
//! - [`Math`] - inline (`$...$`) or display (`$$...$$`) formulas
//! - [`Matrix`] - a rectangular array as an amsmath matrix environment
//! - [`VectorName`] - a bold vector symbol
//! - [`Package`] - a `\usepackage` declaration
//! - [`Document`] - the root, owning the preamble and the body
//!
//! Plain strings can be appended anywhere a child is accepted and are emitted
//! verbatim. [`escape_latex`] (or [`Child::escaped`]) protects untrusted text.
//!
//! ## Package aggregation
//!
//! Packages flow bottom-up. [`Packages`] keeps the first declaration of each
//! package name and drops later ones, so the rendered preamble contains every
//! package exactly once in first-seen order.
//!
//! ## Examples
//!
//! ```
//! use texweave_markup::{Document, DocumentOptions, Markup, Math, Matrix, MatrixType};
//!
//! let mut doc = Document::with_options(DocumentOptions {
//!     title: "Linear maps".into(),
//!     author: "A. Author".into(),
//!     maketitle: true,
//!     ..DocumentOptions::default()
//! });
//!
//! let identity = Matrix::new(vec![vec![1, 0], vec![0, 1]])?.with_type(MatrixType::Bracket);
//! doc.append(Math::block().with("I =").with(identity));
//!
//! let source = doc.dumps();
//! assert!(source.contains("\\usepackage{amsmath}"));
//! assert!(source.contains("\\begin{bmatrix}"));
//! assert_eq!(source, doc.dumps());
//! # Ok::<(), texweave_markup::MarkupError>(())
//! ```

pub mod command;
pub mod container;
pub mod document;
pub mod error;
pub mod math;
pub mod node;
pub mod package;
pub mod utils;

pub use command::Command;
pub use container::Container;
pub use document::{Document, DocumentOptions};
pub use error::{MarkupError, Result};
pub use math::{Math, Matrix, MatrixType, VectorName};
pub use node::{Child, Markup};
pub use package::{Package, Packages};
pub use utils::{dumps_list, escape_latex};
