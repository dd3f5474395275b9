//! Canonical display form of include paths.
//!
//! Compiler traces report every include as an absolute (or otherwise verbose)
//! path. The formatter rewrites such a path relative to the include
//! directories of the project, picking the shortest result.
//!
//! Two path styles are recognized:
//! - Windows style: a drive prefix (`C:`) or any backslash. Rendered with `\`,
//!   compared ASCII case-insensitively.
//! - POSIX style: everything else. Rendered with `/`, compared exactly.

use log::trace;
use serde::{Deserialize, Serialize};

/// How an include path is displayed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum PathMode {
    /// Keep the path exactly as the compiler reported it
    Unchanged,
    /// Normalized absolute path
    Absolute,
    /// Shortest path relative to any base, `..` steps allowed
    Shortest,
    /// Shortest path relative to a base that contains the file
    #[default]
    ShortestAvoidUpSteps,
}

/// A path split into root and resolved components
#[derive(Debug, Clone)]
struct NormalizedPath {
    /// `""` for relative paths, otherwise the drive and/or leading separator(s)
    root: String,
    components: Vec<String>,
    windows: bool,
}

impl NormalizedPath {
    fn parse(path: &str) -> Self {
        let windows = is_windows_style(path);
        let sep = separator(windows);

        let mut root = String::new();
        let mut rest = path;

        if has_drive_prefix(path) {
            root.push_str(&path[..2]);
            rest = &path[2..];
        }

        let trimmed = rest.trim_start_matches(is_separator);
        let leading = rest.len() - trimmed.len();
        if leading > 0 {
            root.push(sep);
            // UNC share: \\server\share
            if leading >= 2 && root.len() == 1 && windows {
                root.push(sep);
            }
        }
        rest = trimmed;

        let mut components: Vec<String> = Vec::new();
        for part in rest.split(is_separator) {
            match part {
                "" | "." => {}
                ".." => {
                    if components.last().is_some_and(|c| c != "..") {
                        components.pop();
                    } else if root.is_empty() {
                        components.push("..".to_string());
                    }
                    // `..` at the root stays at the root
                }
                other => components.push(other.to_string()),
            }
        }

        Self {
            root,
            components,
            windows,
        }
    }

    fn render(&self) -> String {
        let sep = separator(self.windows).to_string();
        let mut out = self.root.clone();
        out.push_str(&self.components.join(sep.as_str()));
        out
    }
}

/// Relative form of `path` as seen from `base`
struct Relative {
    up_steps: usize,
    text: String,
}

fn relative_to(base: &NormalizedPath, path: &NormalizedPath) -> Option<Relative> {
    let ignore_case = base.windows || path.windows;
    let same = |a: &str, b: &str| {
        if ignore_case {
            a.eq_ignore_ascii_case(b)
        } else {
            a == b
        }
    };

    if !same(base.root.as_str(), path.root.as_str()) {
        return None;
    }

    let common = base
        .components
        .iter()
        .zip(&path.components)
        .take_while(|(a, b)| same(a.as_str(), b.as_str()))
        .count();

    let remaining_base = &base.components[common..];
    // Can't step up out of an unresolved `..`
    if remaining_base.iter().any(|c| c == "..") {
        return None;
    }

    let rest = &path.components[common..];
    if remaining_base.is_empty() && rest.is_empty() {
        return None;
    }

    let up_steps = remaining_base.len();
    let parts: Vec<&str> = std::iter::repeat("..")
        .take(up_steps)
        .chain(rest.iter().map(String::as_str))
        .collect();

    let sep = separator(ignore_case).to_string();
    Some(Relative {
        up_steps,
        text: parts.join(sep.as_str()),
    })
}

/// Format an include path for display
///
/// **Public** - main entry point for path formatting
///
/// # Arguments
/// * `path` - Include path as the compiler reported it
/// * `mode` - Display mode
/// * `base_dirs` - Candidate base directories in priority order
///
/// # Returns
/// The display form, or `None` if no base directory yields one for the
/// relative modes. Callers fall back to the raw path.
pub fn format_path<S: AsRef<str>>(path: &str, mode: PathMode, base_dirs: &[S]) -> Option<String> {
    match mode {
        PathMode::Unchanged => Some(path.to_string()),
        PathMode::Absolute => Some(normalize_path(path)),
        PathMode::Shortest => shortest(path, base_dirs, true),
        PathMode::ShortestAvoidUpSteps => shortest(path, base_dirs, false),
    }
}

fn shortest<S: AsRef<str>>(path: &str, base_dirs: &[S], allow_up_steps: bool) -> Option<String> {
    let target = NormalizedPath::parse(path);

    // (length in characters, text)
    let mut best: Option<(usize, String)> = None;
    for base in base_dirs {
        let base = NormalizedPath::parse(base.as_ref());
        let Some(candidate) = relative_to(&base, &target) else {
            continue;
        };
        if candidate.up_steps > 0 && !allow_up_steps {
            continue;
        }
        // Strictly shorter only, so the earliest base wins ties
        let len = candidate.text.chars().count();
        if best.as_ref().map_or(true, |(best_len, _)| len < *best_len) {
            trace!("{} -> {} (base {})", path, candidate.text, base.render());
            best = Some((len, candidate.text));
        }
    }

    best.map(|(_, text)| text)
}

/// Normalize separators and resolve `.` and `..` segments
pub fn normalize_path(path: &str) -> String {
    NormalizedPath::parse(path).render()
}

/// Path of `path` relative to `base`, `..` steps allowed
///
/// Returns `None` if the two are on different roots or identical.
pub fn relative_path(base: &str, path: &str) -> Option<String> {
    relative_to(&NormalizedPath::parse(base), &NormalizedPath::parse(path)).map(|r| r.text)
}

/// Check whether a path follows Windows conventions
pub fn is_windows_style(path: &str) -> bool {
    has_drive_prefix(path) || path.contains('\\')
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

fn separator(windows: bool) -> char {
    if windows {
        '\\'
    } else {
        '/'
    }
}
