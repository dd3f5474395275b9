//! Main parser for compiler include traces.
//!
//! Turns the line-oriented output of `cl /showIncludes` (or `gcc -H`) into an
//! include tree. Build output interleaved with the trace is skipped.
//!
//! Nesting is rebuilt with an explicit ancestor stack. The stack owns the
//! nodes on the current chain: descending takes the last child off its
//! parent, ascending hands it back. When parsing fails the partially built
//! chain is simply dropped, so no half-built tree ever escapes.

use super::schema::{IncludeNode, IncludeTree};
use crate::formatter::{format_path, PathMode};
use crate::utils::config::{GCC_DEPTH_MARKER, MSVC_INCLUDE_MARKER};
use crate::utils::error::ParseError;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// Compiler family that produced the trace
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TraceDialect {
    /// `Note: including file:` notices, nesting shown by extra spaces
    #[default]
    Msvc,
    /// `-H` output, nesting shown by the number of leading dots
    Gcc,
}

/// What to do when an include line skips nesting levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthPolicy {
    /// Reject the whole trace
    #[default]
    Strict,
    /// Treat the include as one level below the deepest reachable file
    Clamp,
}

/// Parser settings
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub dialect: TraceDialect,
    pub path_mode: PathMode,
    pub depth_policy: DepthPolicy,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(mut self, dialect: TraceDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_path_mode(mut self, path_mode: PathMode) -> Self {
        self.path_mode = path_mode;
        self
    }

    pub fn with_depth_policy(mut self, depth_policy: DepthPolicy) -> Self {
        self.depth_policy = depth_policy;
        self
    }
}

/// Parse an include trace with default options
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `trace_text` - Raw compiler output
/// * `base_dirs` - Candidate base directories for display names, own directory first
///
/// # Errors
/// * `ParseError::MalformedTrace` - Include depth jumps more than one level
pub fn parse_trace<S: AsRef<str>>(
    trace_text: &str,
    base_dirs: &[S],
) -> Result<IncludeTree, ParseError> {
    parse_trace_with(trace_text, base_dirs, &ParseOptions::default())
}

/// Parse an include trace
///
/// # Errors
/// * `ParseError::MalformedTrace` - Under `DepthPolicy::Strict`, an include
///   deeper than the ancestor chain allows
pub fn parse_trace_with<S: AsRef<str>>(
    trace_text: &str,
    base_dirs: &[S],
    options: &ParseOptions,
) -> Result<IncludeTree, ParseError> {
    // Current ancestor chain, synthetic root at position 0
    let mut stack: Vec<IncludeNode> = vec![IncludeNode::root()];
    let mut num_includes = 0;

    for (index, line) in trace_text.split('\n').enumerate() {
        let Some((depth, raw_path)) = parse_line(line, options.dialect) else {
            continue;
        };
        let depth = checked_depth(&stack, depth, index + 1, options.depth_policy)?;

        if depth >= stack.len() {
            descend(&mut stack);
        }
        while depth < stack.len() - 1 {
            ascend(&mut stack);
        }

        let display_name = format_path(raw_path, options.path_mode, base_dirs)
            .unwrap_or_else(|| {
                debug!("No display form for {}, keeping raw path", raw_path);
                raw_path.to_string()
            });
        trace!("depth {}: {}", depth, display_name);

        if let Some(parent) = stack.last_mut() {
            parent.children.push(IncludeNode::new(raw_path, display_name));
        }
        num_includes += 1;
    }

    while stack.len() > 1 {
        ascend(&mut stack);
    }
    let root = stack.pop().unwrap_or_else(IncludeNode::root);

    debug!("Parsed {} includes", num_includes);

    Ok(IncludeTree { root, num_includes })
}

/// Extract depth and path from one trace line
///
/// **Public** - exposed for tests and tools that filter traces
///
/// Returns `None` for lines that are not include notices.
pub fn parse_line(line: &str, dialect: TraceDialect) -> Option<(usize, &str)> {
    let (depth, path) = match dialect {
        TraceDialect::Msvc => {
            let start = line.find(MSVC_INCLUDE_MARKER)? + MSVC_INCLUDE_MARKER.len();
            let rest = &line[start..];
            // The notice itself ends with a single space
            let rest = rest.strip_prefix(' ').unwrap_or(rest);
            let path = rest.trim_start_matches(' ');
            (rest.len() - path.len(), path)
        }
        TraceDialect::Gcc => {
            let path = line.trim_start_matches(GCC_DEPTH_MARKER);
            let dots = line.len() - path.len();
            if dots == 0 {
                return None;
            }
            (dots - 1, path.strip_prefix(' ')?)
        }
    };

    let path = path.trim_end();
    if path.is_empty() {
        return None;
    }
    Some((depth, path))
}

/// Validate a reported depth against the current ancestor chain
///
/// **Private** - internal helper for parse_trace_with
fn checked_depth(
    stack: &[IncludeNode],
    depth: usize,
    line: usize,
    policy: DepthPolicy,
) -> Result<usize, ParseError> {
    let can_descend = stack.last().is_some_and(|top| !top.children.is_empty());
    let max_depth = if can_descend {
        stack.len()
    } else {
        stack.len() - 1
    };

    if depth <= max_depth {
        return Ok(depth);
    }

    match policy {
        DepthPolicy::Strict => Err(ParseError::MalformedTrace {
            line,
            depth,
            max_depth,
        }),
        DepthPolicy::Clamp => {
            warn!(
                "Line {}: depth {} clamped to {}",
                line, depth, max_depth
            );
            Ok(max_depth)
        }
    }
}

/// Make the last child of the top node the new top
fn descend(stack: &mut Vec<IncludeNode>) {
    if let Some(child) = stack.last_mut().and_then(|top| top.children.pop()) {
        stack.push(child);
    }
}

/// Return the top node to its parent
fn ascend(stack: &mut Vec<IncludeNode>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(done);
        }
    }
}
