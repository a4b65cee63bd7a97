use std::path::Path;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and, where there is one,
/// how to fix it.
pub fn render_error(e: &Error) -> String {
    return match e {
        Error::ConfigNotFound { path } => render_config_not_found(path),
        Error::FileNotFound { path } => render_file_not_found(path),
        Error::FileUnreadable { path, source } => format!("\
# Error: File Unreadable

`{}` exists but could not be read: {source}

No output was produced; every input must be readable.
", path.display()),
        Error::Io(err) => format!("\
# Error: I/O

{err}
"),
        Error::TomlDe(err) => format!("\
# Error: Invalid Config

{err}

## Fix

Check `{DEFAULT_CONFIG_FILE}` (or the file passed to `--config`). Known keys
are `exclude`, `extensions` and `separators`.
"),
        Error::Walk(err) => format!("\
# Error: Directory Traversal

{err}
"),
    };
}

fn render_config_not_found(path: &Path) -> String {
    return format!("\
# Error: Config Not Found

`{}` does not exist.

## Fix

Pass an existing file to `--config`, or drop the flag to use
`{DEFAULT_CONFIG_FILE}` from the working directory when present.
", path.display());
}

fn render_file_not_found(path: &Path) -> String {
    return format!("\
# Error: File Not Found

`{}` does not exist.

No output was produced; every input must be readable. Use `-` to read
standard input.
", path.display());
}
