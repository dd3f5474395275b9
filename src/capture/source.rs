//! Trace sources.

use crate::utils::error::CaptureError;
use log::{debug, info, warn};
use std::io::Read;
use std::path::PathBuf;
use std::process::Command;

/// Something that produces raw include-trace text
pub trait TraceSource {
    fn capture(&self) -> Result<String, CaptureError>;
}

impl<F> TraceSource for F
where
    F: Fn() -> Result<String, CaptureError>,
{
    fn capture(&self) -> Result<String, CaptureError> {
        self()
    }
}

/// Trace text saved to a file, or piped through stdin
#[derive(Debug, Clone)]
pub enum FileTraceSource {
    File(PathBuf),
    Stdin,
}

impl FileTraceSource {
    /// `None` or `-` reads stdin
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => Self::File(p),
            _ => Self::Stdin,
        }
    }
}

impl TraceSource for FileTraceSource {
    fn capture(&self) -> Result<String, CaptureError> {
        let text = match self {
            Self::File(path) => {
                debug!("Reading trace from: {}", path.display());
                std::fs::read_to_string(path)?
            }
            Self::Stdin => {
                debug!("Reading trace from stdin");
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            }
        };

        non_empty(text)
    }
}

/// Runs a compiler with include reporting switched on and captures its output
///
/// The command line is used verbatim; it is up to the caller to pass
/// `/showIncludes` (MSVC) or `-H` (gcc, clang). Both output streams are
/// captured since MSVC reports on stdout and gcc on stderr.
#[derive(Debug, Clone)]
pub struct CompilerTraceSource {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CompilerTraceSource {
    /// Build from a full command line, program first
    pub fn new(command: &[String]) -> Result<Self, CaptureError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| CaptureError::CommandFailed("no compiler command given".to_string()))?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            working_dir: None,
        })
    }

    /// Run the compiler from `dir` instead of the current directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl TraceSource for CompilerTraceSource {
    fn capture(&self) -> Result<String, CaptureError> {
        info!("Running: {} {}", self.program, self.args.join(" "));

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let output = command.output()?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            // A failed compile still lists the includes it got through
            warn!("Compiler exited with {}", output.status);
            if text.trim().is_empty() {
                return Err(CaptureError::CommandFailed(output.status.to_string()));
            }
        }

        non_empty(text)
    }
}

fn non_empty(text: String) -> Result<String, CaptureError> {
    if text.trim().is_empty() {
        Err(CaptureError::EmptyOutput)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Note: including file: /p/a.h").unwrap();

        let source = FileTraceSource::from_arg(Some(file.path().to_path_buf()));
        assert!(source.capture().unwrap().contains("/p/a.h"));
    }

    #[test]
    fn test_file_source_empty() {
        let file = NamedTempFile::new().unwrap();
        let source = FileTraceSource::File(file.path().to_path_buf());
        assert!(matches!(source.capture(), Err(CaptureError::EmptyOutput)));
    }

    #[test]
    fn test_file_source_missing() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileTraceSource::File(dir.path().join("missing.log"));
        assert!(matches!(source.capture(), Err(CaptureError::Io(_))));
    }

    #[test]
    fn test_dash_means_stdin() {
        assert!(matches!(
            FileTraceSource::from_arg(Some(PathBuf::from("-"))),
            FileTraceSource::Stdin
        ));
        assert!(matches!(FileTraceSource::from_arg(None), FileTraceSource::Stdin));
    }

    #[test]
    fn test_compiler_source_requires_command() {
        assert!(matches!(
            CompilerTraceSource::new(&[]),
            Err(CaptureError::CommandFailed(_))
        ));
    }

    fn sh(script: &str) -> CompilerTraceSource {
        let command = ["sh", "-c", script].map(String::from);
        CompilerTraceSource::new(&command).unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn test_compiler_source_captures_stdout_then_stderr() {
        let source = sh("echo 'Note: including file: /a.h'; echo 'Note: including file:  /b.h' >&2");

        let tree = crate::parser::parse_trace(&source.capture().unwrap(), &["/"]).unwrap();
        let names: Vec<_> = tree
            .depth_first()
            .map(|(depth, node)| (depth, node.display_name.as_str()))
            .collect();
        assert_eq!(names, vec![(0, "a.h"), (1, "b.h")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_compiler_source_failed_exit_keeps_output() {
        let source = sh("echo 'Note: including file: /a.h'; exit 2");
        assert!(source.capture().unwrap().contains("/a.h"));
    }

    #[cfg(unix)]
    #[test]
    fn test_compiler_source_failed_exit_without_output() {
        match sh("exit 3").capture() {
            Err(CaptureError::CommandFailed(status)) => assert!(status.contains('3')),
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_compiler_source_silent_success() {
        assert!(matches!(
            sh("true").capture(),
            Err(CaptureError::EmptyOutput)
        ));
    }

    #[test]
    fn test_compiler_source_missing_program() {
        let command = ["include-viewer-no-such-compiler".to_string()];
        let source = CompilerTraceSource::new(&command).unwrap();
        assert!(matches!(source.capture(), Err(CaptureError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_compiler_source_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.h"), "").unwrap();

        let source = sh("ls").with_working_dir(dir.path());
        assert!(source.capture().unwrap().contains("marker.h"));
    }

    #[test]
    fn test_closure_source() {
        let source = || Ok::<_, CaptureError>("Note: including file: x.h".to_string());
        assert_eq!(source.capture().unwrap(), "Note: including file: x.h");
    }
}
