use std::ffi::OsString;
use std::path::{is_separator, Path, PathBuf};

use crate::error::{BuildError, Result};

/// Chooses the output path (without extension) for a render.
///
/// - empty `explicit`: `default` as is
/// - `explicit` ending in a separator: that directory joined with the file name of `default`
/// - anything else: `explicit`
///
/// Fails with [`BuildError::InvalidOutputPath`] when the chosen path has no
/// file name to derive the job name from.
pub fn select_filepath(explicit: &str, default: &Path) -> Result<PathBuf> {
    let selected = if explicit.is_empty() {
        default.to_path_buf()
    } else if explicit.ends_with(is_separator) {
        let file_name = default
            .file_name()
            .ok_or_else(|| BuildError::InvalidOutputPath(default.to_path_buf()))?;
        Path::new(explicit).join(file_name)
    } else {
        PathBuf::from(explicit)
    };

    if selected.file_name().is_none() {
        return Err(BuildError::InvalidOutputPath(selected));
    }
    Ok(selected)
}

/// Splits an output path into the directory the engine runs in and the job name.
pub fn split_output(path: &Path) -> Result<(PathBuf, String)> {
    let basename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| BuildError::InvalidOutputPath(path.to_path_buf()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, basename))
}

/// `report` + `tex` -> `report.tex`, keeping any dots already in the name.
pub(crate) fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_os_string();
    raw.push(".");
    raw.push(extension);
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_uses_default() {
        let default = Path::new("build/default_filepath");
        assert_eq!(select_filepath("", default).unwrap(), default);
    }

    #[test]
    fn test_directory_gets_default_file_name() {
        let default = Path::new("build/report");
        assert_eq!(
            select_filepath("out/", default).unwrap(),
            PathBuf::from("out").join("report")
        );
    }

    #[test]
    fn test_explicit_path_wins() {
        let default = Path::new("build/report");
        assert_eq!(
            select_filepath("out/final", default).unwrap(),
            PathBuf::from("out/final")
        );
        assert_eq!(select_filepath("final", default).unwrap(), PathBuf::from("final"));
    }

    #[test]
    fn test_default_without_file_name_is_rejected() {
        let nameless = Path::new("");
        assert!(matches!(
            select_filepath("build/", nameless),
            Err(BuildError::InvalidOutputPath(_))
        ));
        assert!(matches!(
            select_filepath("", nameless),
            Err(BuildError::InvalidOutputPath(_))
        ));
        assert!(matches!(
            select_filepath("", Path::new("..")),
            Err(BuildError::InvalidOutputPath(_))
        ));
    }

    #[test]
    fn test_split_output() {
        let (dir, basename) = split_output(Path::new("out/report")).unwrap();
        assert_eq!(dir, PathBuf::from("out"));
        assert_eq!(basename, "report");

        let (dir, basename) = split_output(Path::new("report")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(basename, "report");
    }

    #[test]
    fn test_split_output_without_file_name() {
        assert!(matches!(
            split_output(Path::new("..")),
            Err(BuildError::InvalidOutputPath(_))
        ));
    }

    #[test]
    fn test_append_extension_keeps_dots() {
        assert_eq!(
            append_extension(Path::new("out/v1.2"), "tex"),
            PathBuf::from("out/v1.2.tex")
        );
    }
}
