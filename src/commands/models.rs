use crate::formatter::PathMode;
use crate::output::GraphFormat;
use crate::parser::{DepthPolicy, ParseOptions, TraceDialect};
use crate::utils::config::{ViewerConfig, DEFAULT_GRAPH_FILE};
use std::path::PathBuf;

/// Where the trace comes from and how to interpret it
///
/// **Public** - shared by the tree and graph commands
#[derive(Debug, Clone, Default)]
pub struct TraceInput {
    /// Saved compiler output (`None` or `-` = stdin, unless a command is given)
    pub trace_file: Option<PathBuf>,

    /// Translation unit; its directory is the first base directory
    pub source_file: Option<PathBuf>,

    /// Compiler command line to run instead of reading a saved trace
    pub compiler_command: Vec<String>,

    /// Directory the compiler command runs in (current directory when `None`)
    pub working_dir: Option<PathBuf>,

    /// Include search directories
    pub include_dirs: Vec<String>,

    /// Display mode for include paths (config or default when `None`)
    pub path_mode: Option<PathMode>,

    /// Trace dialect (config or default when `None`)
    pub dialect: Option<TraceDialect>,

    /// Clamp depth jumps instead of failing
    pub lenient: bool,
}

impl TraceInput {
    /// Fill in everything the command line left open from the config file
    ///
    /// Command-line include directories come before configured ones.
    pub fn with_config(mut self, config: &ViewerConfig) -> Self {
        self.include_dirs.extend(config.include_dirs.iter().cloned());
        self.path_mode = self.path_mode.or(config.path_mode);
        self.dialect = self.dialect.or(config.dialect);
        self.lenient |= config.lenient;
        self
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new()
            .with_dialect(self.dialect.unwrap_or_default())
            .with_path_mode(self.path_mode.unwrap_or_default())
            .with_depth_policy(if self.lenient {
                DepthPolicy::Clamp
            } else {
                DepthPolicy::Strict
            })
    }
}

/// Arguments for the tree command
#[derive(Debug, Clone, Default)]
pub struct TreeArgs {
    pub input: TraceInput,

    /// Append raw paths to display names
    pub show_paths: bool,

    /// Print the tree as JSON instead of text
    pub json: bool,

    /// Print include statistics after the tree
    pub summary: bool,
}

/// Arguments for the graph command
#[derive(Debug, Clone)]
pub struct GraphArgs {
    pub input: TraceInput,

    /// Output path for the graph document
    pub output: PathBuf,

    /// Output format, inferred from the extension when `None`
    pub format: Option<GraphFormat>,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            input: TraceInput::default(),
            output: PathBuf::from(DEFAULT_GRAPH_FILE),
            format: None,
        }
    }
}

impl GraphArgs {
    /// Explicit format, else the one implied by the output extension, else DGML
    pub fn resolved_format(&self) -> GraphFormat {
        self.format
            .or_else(|| GraphFormat::from_path(&self.output))
            .unwrap_or_default()
    }
}
