use log::{debug, info, warn};
use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::error::{BuildError, Result};

/// Runs an external program. Abstracted so tests can stand in for a TeX engine.
pub trait CommandExecutor: Send + Sync + fmt::Debug {
    /// Runs `program` with `args` inside `cwd` and collects its output.
    ///
    /// The working directory is handed to the child process; the caller's
    /// current directory is never changed.
    fn execute(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<Output>;
}

/// [`CommandExecutor`] backed by `std::process::Command`.
#[derive(Debug)]
pub struct RealCommandExecutor;

impl CommandExecutor for RealCommandExecutor {
    fn execute(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<Output> {
        let resolved = which::which(program)
            .map_err(|e| io::Error::new(io::ErrorKind::NotFound, format!("{program}: {e}")))?;
        Command::new(resolved)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
    }
}

/// Captured output of a successful engine run.
#[derive(Debug, Clone, Default)]
pub struct CompileOutput {
    pub stdout: String,
    pub stderr: String,
}

/// A Compiler holds the configuration for executing an external TeX engine.
#[derive(Debug)]
pub struct Compiler {
    engine: String, // e.g. "pdflatex", "lualatex", "xelatex"
    extra_args: Vec<String>,
    executor: Box<dyn CommandExecutor>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new("pdflatex")
    }
}

impl Compiler {
    pub fn new(engine: &str) -> Self {
        Self {
            engine: engine.to_string(),
            extra_args: Vec::new(),
            executor: Box::new(RealCommandExecutor),
        }
    }

    /// Replaces the process runner (for testing).
    pub fn with_executor(mut self, executor: Box<dyn CommandExecutor>) -> Self {
        self.executor = executor;
        self
    }

    /// Extra engine flags, placed before the source file.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// The engine command line for job `basename`.
    pub fn arguments(&self, basename: &str) -> Vec<String> {
        let mut args = vec![
            "--interaction".to_string(),
            "nonstopmode".to_string(),
            "--jobname".to_string(),
            basename.to_string(),
        ];
        args.extend(self.extra_args.iter().cloned());
        args.push(format!("{basename}.tex"));
        args
    }

    /// Compiles `<dir>/<basename>.tex` with `dir` as the working directory.
    ///
    /// A non-zero exit status becomes [`BuildError::CompilerFailed`] carrying
    /// the engine's stdout and stderr.
    pub fn compile(&self, dir: &Path, basename: &str) -> Result<CompileOutput> {
        let args = self.arguments(basename);
        debug!("Running {} {:?} in {:?}", self.engine, args, dir);

        let output = self
            .executor
            .execute(&self.engine, &args, dir)
            .map_err(|source| BuildError::Spawn {
                engine: self.engine.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            info!("{} finished job {}", self.engine, basename);
            return Ok(CompileOutput { stdout, stderr });
        }

        warn!("{} failed on job {} ({})", self.engine, basename, output.status);
        let mut diagnostic = stdout;
        if !stderr.is_empty() {
            if !diagnostic.is_empty() && !diagnostic.ends_with('\n') {
                diagnostic.push('\n');
            }
            diagnostic.push_str(&stderr);
        }
        Err(BuildError::CompilerFailed {
            engine: self.engine.clone(),
            status: output.status,
            diagnostic,
        })
    }
}

/// A mocked executor that records invocations and returns canned output.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MockCommandExecutor {
    pub stdout: String,
    pub stderr: String,
    pub status_code: i32,
    pub calls: std::sync::Mutex<Vec<(String, Vec<String>, std::path::PathBuf)>>,
}

#[cfg(test)]
pub(crate) fn exit_status(code: i32) -> std::process::ExitStatus {
    #[cfg(unix)]
    let status = {
        use std::os::unix::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code << 8)
    };
    #[cfg(windows)]
    let status = {
        use std::os::windows::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code as u32)
    };
    status
}

#[cfg(test)]
impl CommandExecutor for MockCommandExecutor {
    fn execute(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<Output> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec(), cwd.to_path_buf()));
        Ok(Output {
            status: exit_status(self.status_code),
            stdout: self.stdout.as_bytes().to_vec(),
            stderr: self.stderr.as_bytes().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Debug)]
    struct Shared(Arc<MockCommandExecutor>);

    impl CommandExecutor for Shared {
        fn execute(&self, program: &str, args: &[String], cwd: &Path) -> io::Result<Output> {
            self.0.execute(program, args, cwd)
        }
    }

    #[test]
    fn test_arguments() {
        let compiler = Compiler::new("lualatex").with_args(vec!["--shell-escape".to_string()]);
        assert_eq!(
            compiler.arguments("report"),
            [
                "--interaction",
                "nonstopmode",
                "--jobname",
                "report",
                "--shell-escape",
                "report.tex"
            ]
        );
    }

    #[test]
    fn test_compile_passes_working_directory() {
        let mock = Arc::new(MockCommandExecutor {
            stdout: "Output written on report.pdf".to_string(),
            ..Default::default()
        });
        let compiler = Compiler::new("pdflatex").with_executor(Box::new(Shared(mock.clone())));

        let output = compiler.compile(Path::new("out"), "report").unwrap();
        assert_eq!(output.stdout, "Output written on report.pdf");

        let calls = mock.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "pdflatex");
        assert_eq!(calls[0].2, PathBuf::from("out"));
        assert_eq!(calls[0].1.last().unwrap(), "report.tex");
    }

    #[test]
    fn test_failure_carries_diagnostic() {
        let mock = MockCommandExecutor {
            stdout: "! Undefined control sequence.".to_string(),
            stderr: "undefined control sequence".to_string(),
            status_code: 1,
            ..Default::default()
        };
        let compiler = Compiler::default().with_executor(Box::new(mock));

        let err = compiler.compile(Path::new("."), "report").unwrap_err();
        match &err {
            BuildError::CompilerFailed {
                engine, diagnostic, ..
            } => {
                assert_eq!(engine, "pdflatex");
                assert_eq!(
                    diagnostic,
                    "! Undefined control sequence.\nundefined control sequence"
                );
            }
            other => panic!("expected compiler failure, got {:?}", other),
        }
        assert!(err.to_string().contains("undefined control sequence"));
        assert!(err.diagnostic().is_some());
    }

    #[test]
    fn test_missing_engine_is_spawn_error() {
        let compiler = Compiler::new("texweave-no-such-engine");
        let err = compiler.compile(Path::new("."), "report").unwrap_err();
        assert!(matches!(err, BuildError::Spawn { .. }), "{err:?}");
        assert!(err.diagnostic().is_none());
    }
}
