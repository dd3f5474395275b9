//! Include Viewer CLI
//!
//! Shows the include tree of a C/C++ source file and exports it as a graph.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use include_viewer::commands::{
    display_version, execute_graph, execute_tree, format_single_path, validate_graph_file,
    validate_input, GraphArgs, TraceInput, TreeArgs,
};
use include_viewer::formatter::PathMode;
use include_viewer::output::GraphFormat;
use include_viewer::parser::TraceDialect;
use include_viewer::utils::config::{resolve_config, DEFAULT_GRAPH_FILE};

/// Include Viewer - include trees from compiler traces
#[derive(Parser, Debug)]
#[command(name = "include-viewer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./include-viewer.toml when present)
    #[arg(long, global = true, env = "INCLUDE_VIEWER_CONFIG")]
    config: Option<PathBuf>,
}

/// Options shared by every command that parses a trace
#[derive(Args, Debug)]
struct InputOpts {
    /// Saved compiler output; stdin when omitted or `-`
    #[arg(short, long)]
    trace: Option<PathBuf>,

    /// Source file that was compiled
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Include directory (repeatable, searched in order)
    #[arg(short = 'I', long = "include-dir")]
    include_dirs: Vec<String>,

    /// How include paths are displayed
    #[arg(long, value_enum)]
    mode: Option<PathMode>,

    /// Compiler that produced the trace
    #[arg(long, value_enum)]
    dialect: Option<TraceDialect>,

    /// Clamp malformed depth jumps instead of failing
    #[arg(long)]
    lenient: bool,

    /// Directory to run the compiler command in
    #[arg(short = 'C', long)]
    working_dir: Option<PathBuf>,

    /// Compiler command to run, e.g. `-- cl /nologo /c /showIncludes main.cpp`
    #[arg(last = true)]
    command: Vec<String>,
}

impl From<InputOpts> for TraceInput {
    fn from(opts: InputOpts) -> Self {
        Self {
            trace_file: opts.trace,
            source_file: opts.source,
            compiler_command: opts.command,
            working_dir: opts.working_dir,
            include_dirs: opts.include_dirs,
            path_mode: opts.mode,
            dialect: opts.dialect,
            lenient: opts.lenient,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the include tree
    Tree {
        #[command(flatten)]
        input: InputOpts,

        /// Show raw paths next to display names
        #[arg(long)]
        show_paths: bool,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,

        /// Print include statistics
        #[arg(long)]
        summary: bool,
    },

    /// Export the include tree as a graph document
    Graph {
        #[command(flatten)]
        input: InputOpts,

        /// Output path for the graph
        #[arg(short, long, default_value = DEFAULT_GRAPH_FILE)]
        output: PathBuf,

        /// Output format (inferred from the extension by default)
        #[arg(short, long, value_enum)]
        format: Option<GraphFormat>,
    },

    /// Format a single include path
    Format {
        /// Path to format
        path: String,

        /// Include directory (repeatable, searched in order)
        #[arg(short = 'I', long = "include-dir")]
        include_dirs: Vec<String>,

        /// Display mode
        #[arg(long, value_enum)]
        mode: Option<PathMode>,
    },

    /// Validate a JSON graph file
    Validate {
        /// Path to graph JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = resolve_config(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Tree {
            input,
            show_paths,
            json,
            summary,
        } => {
            let args = TreeArgs {
                input: TraceInput::from(input).with_config(&config),
                show_paths,
                json,
                summary,
            };
            validate_input(&args.input)?;
            execute_tree(&args)?;
        }

        Commands::Graph {
            input,
            output,
            format,
        } => {
            let args = GraphArgs {
                input: TraceInput::from(input).with_config(&config),
                output,
                format,
            };
            validate_input(&args.input)?;
            execute_graph(&args)?;
        }

        Commands::Format {
            path,
            mut include_dirs,
            mode,
        } => {
            include_dirs.extend(config.include_dirs.iter().cloned());
            let mode = mode.or(config.path_mode).unwrap_or_default();
            format_single_path(&path, mode, &include_dirs)?;
        }

        Commands::Validate { file } => {
            validate_graph_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
