use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use texweave_markup::{Document, Markup};

use crate::cleanup::{remove_intermediates, ScratchDir};
use crate::compiler::Compiler;
use crate::error::Result;
use crate::paths::{append_extension, select_filepath, split_output};

/// How [`generate_pdf`] writes, compiles and tidies up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    /// Output path without extension; empty means the document's default.
    pub filepath: String,
    /// Remove engine byproducts after a successful run.
    pub clean: bool,
    /// When cleaning, also remove the generated `.tex` source.
    pub clean_tex: bool,
    /// Engine executable.
    pub compiler: String,
    /// Drop the engine's stdout instead of returning it.
    pub silent: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            filepath: String::new(),
            clean: true,
            clean_tex: true,
            compiler: "pdflatex".to_string(),
            silent: true,
        }
    }
}

/// Result of a successful [`generate_pdf`].
#[derive(Debug, Clone)]
pub struct PdfOutput {
    pub pdf_path: PathBuf,
    /// The source file, unless cleanup removed it.
    pub tex_path: Option<PathBuf>,
    /// Engine stdout, present when the build was not silent.
    pub stdout: Option<String>,
}

/// Writes the document source to `<filepath>.tex` and returns the written path.
///
/// `filepath` is resolved against the document's default path with
/// [`select_filepath`].
pub fn generate_tex(document: &Document, filepath: &str) -> Result<PathBuf> {
    let (dir, basename) = resolve_output(filepath, document)?;
    write_tex(document, &dir.join(basename))
}

/// Output directory and job name shared by [`generate_tex`] and [`generate_pdf`].
fn resolve_output(filepath: &str, document: &Document) -> Result<(PathBuf, String)> {
    let path = select_filepath(filepath, Path::new(document.default_filepath()))?;
    split_output(&path)
}

fn write_tex(document: &Document, path: &Path) -> Result<PathBuf> {
    let tex_path = append_extension(path, "tex");
    if let Some(parent) = tex_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&tex_path, document.dumps())?;
    debug!("Wrote {:?}", tex_path);
    Ok(tex_path)
}

/// Renders, compiles and optionally cleans up using the engine named in `options`.
pub fn generate_pdf(
    document: &Document,
    options: &PdfOptions,
    scratch: Option<ScratchDir>,
) -> Result<PdfOutput> {
    let compiler = Compiler::new(&options.compiler);
    generate_pdf_with(document, options, &compiler, scratch)
}

/// [`generate_pdf`] with an explicitly configured [`Compiler`].
///
/// The engine runs with the output directory as its working directory.
/// `scratch`, if given, is released whether or not the build succeeds; a
/// build error takes precedence over a release error.
pub fn generate_pdf_with(
    document: &Document,
    options: &PdfOptions,
    compiler: &Compiler,
    scratch: Option<ScratchDir>,
) -> Result<PdfOutput> {
    let built = build(document, options, compiler);
    let released = scratch.map_or(Ok(()), ScratchDir::release);
    let output = built?;
    released?;
    Ok(output)
}

fn build(document: &Document, options: &PdfOptions, compiler: &Compiler) -> Result<PdfOutput> {
    let (dir, basename) = resolve_output(&options.filepath, document)?;
    let stem = dir.join(&basename);

    let tex_path = write_tex(document, &stem)?;
    let compiled = compiler.compile(&dir, &basename)?;

    let removed_tex = options.clean && options.clean_tex;
    if options.clean {
        remove_intermediates(&dir, &basename, options.clean_tex)?;
    }

    let pdf_path = append_extension(&stem, "pdf");
    info!("Generated {:?}", pdf_path);

    Ok(PdfOutput {
        pdf_path,
        tex_path: (!removed_tex).then_some(tex_path),
        stdout: (!options.silent).then_some(compiled.stdout),
    })
}
