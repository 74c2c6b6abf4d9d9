//! # TeXWeave Build
//!
//! Turns a [`Document`](texweave_markup::Document) into files on disk and runs
//! a TeX engine over them.
//!
//! ## Pipeline
//!
//! ```text
//! Document ──dumps()──► <path>.tex ──engine──► <path>.pdf
//!                                      │
//!                                      └─► .aux/.log/.out (removed when cleaning)
//! ```
//!
//! - [`paths::select_filepath`] decides where output goes.
//! - [`pdf::generate_tex`] writes the source only.
//! - [`pdf::generate_pdf`] writes, compiles and cleans up.
//! - [`compiler::Compiler`] runs the engine through a [`compiler::CommandExecutor`],
//!   passing the output directory as the child's working directory. The
//!   caller's current directory is never changed, so independent builds may
//!   run concurrently as long as they target different directories.
//! - [`cleanup::ScratchDir`] is a caller-owned temporary directory that is
//!   released when the build finishes, whatever the outcome.
//!
//! ## Errors
//!
//! Engine failures surface as [`BuildError::CompilerFailed`] with the engine's
//! captured output attached. Cleanup ignores files that are already gone and
//! reports every other filesystem error.
//!
//! ## Examples
//!
//! ```no_run
//! use texweave_build::{generate_pdf, PdfOptions};
//! use texweave_markup::Document;
//!
//! let mut doc = Document::new();
//! doc.append("Hello");
//!
//! let options = PdfOptions {
//!     filepath: "out/hello".into(),
//!     silent: false,
//!     ..PdfOptions::default()
//! };
//! match generate_pdf(&doc, &options, None) {
//!     Ok(output) => println!("{}", output.pdf_path.display()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod cleanup;
pub mod compiler;
pub mod config;
pub mod error;
pub mod paths;
pub mod pdf;

pub use cleanup::{remove_intermediates, ScratchDir, INTERMEDIATE_EXTENSIONS};
pub use compiler::{CommandExecutor, CompileOutput, Compiler, RealCommandExecutor};
pub use config::BuildConfig;
pub use error::{BuildError, Result};
pub use paths::{select_filepath, split_output};
pub use pdf::{generate_pdf, generate_pdf_with, generate_tex, PdfOptions, PdfOutput};
