use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use tempfile::TempDir;

use crate::error::{BuildError, Result};
use crate::paths::append_extension;

/// Byproducts of an engine run removed after a successful compile.
pub const INTERMEDIATE_EXTENSIONS: &[&str] = &["aux", "log", "out"];

/// Removes `<dir>/<basename>.{aux,log,out}` and, if `include_tex`, the source.
///
/// Files that do not exist are skipped; any other failure aborts the cleanup.
pub fn remove_intermediates(dir: &Path, basename: &str, include_tex: bool) -> Result<()> {
    let stem = dir.join(basename);
    let tex = include_tex.then_some("tex");
    for extension in INTERMEDIATE_EXTENSIONS.iter().copied().chain(tex) {
        remove_if_exists(&append_extension(&stem, extension))?;
    }
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(BuildError::Cleanup {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// A temporary working directory owned by the caller for the length of a build.
///
/// Assets the document refers to (plots, images) can be written here before
/// compiling. The directory is deleted by [`release`](Self::release), or on
/// drop if it was never released.
#[derive(Debug)]
pub struct ScratchDir {
    inner: TempDir,
}

impl ScratchDir {
    pub fn new() -> Result<Self> {
        let inner = tempfile::Builder::new().prefix("texweave").tempdir()?;
        Ok(Self { inner })
    }

    pub fn new_in(parent: &Path) -> Result<Self> {
        let inner = tempfile::Builder::new()
            .prefix("texweave")
            .tempdir_in(parent)?;
        Ok(Self { inner })
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Deletes the directory and its contents, reporting any failure.
    pub fn release(self) -> Result<()> {
        let path = self.inner.path().to_path_buf();
        match self.inner.close() {
            Ok(()) => {
                debug!("Released scratch directory {:?}", path);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(BuildError::Cleanup { path, source }),
        }
    }
}
