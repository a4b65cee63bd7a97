use std::collections::{BTreeSet, HashMap};
use std::io::Read as _;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Error;
use crate::grammar;
use crate::record::DependencyRecord;

/// Input path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Every unique record found, with the inputs it was seen in.
pub type Extraction = HashMap<DependencyRecord, BTreeSet<PathBuf>>;

/// Replace each directory argument by the files beneath it, sorted by name.
/// Files are kept only if the config's extension filter allows them.
/// Anything that is not a directory, including missing paths and `-`,
/// passes through untouched so `extract` reports it.
///
/// # Errors
///
/// Returns `Error::Walk` if a directory cannot be traversed.
pub fn expand_inputs(inputs: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }

        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && config.should_scan(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }

    return Ok(files);
}

/// Scan every input with both grammars and aggregate unique records.
/// Records whose group id contains any of `exclusions` are dropped.
///
/// # Errors
///
/// Returns `Error::FileNotFound` or `Error::FileUnreadable` for the first input
/// that cannot be read; nothing is returned for the inputs before it.
pub fn extract(paths: &[PathBuf], exclusions: &[String]) -> Result<Extraction, Error> {
    let mut extraction = Extraction::new();

    for path in paths {
        let text = read_input(path)?;
        let kept = extract_from_text(&text, path, exclusions, &mut extraction);
        tracing::debug!(path = %path.display(), kept, "scanned");
    }

    tracing::debug!(unique = extraction.len(), "extraction complete");
    return Ok(extraction);
}

/// Apply both grammars to `text`, attributing matches to `source`.
/// Returns how many matches survived the exclusion filter.
pub fn extract_from_text(
    text: &str,
    source: &Path,
    exclusions: &[String],
    extraction: &mut Extraction,
) -> usize {
    let mut kept = 0_usize;

    for pattern in grammar::all() {
        for cap in pattern.captures_iter(text) {
            let Some(record) = DependencyRecord::from_captures(&cap) else {
                continue;
            };
            if is_excluded(&record, exclusions) {
                tracing::trace!(%record, "excluded");
                continue;
            }
            extraction.entry(record).or_default().insert(source.to_path_buf());
            kept = kept.saturating_add(1);
        }
    }

    return kept;
}

/// Whether the record's group id contains any exclusion pattern.
fn is_excluded(record: &DependencyRecord, exclusions: &[String]) -> bool {
    return exclusions
        .iter()
        .any(|pattern| return record.group_id.contains(pattern.as_str()));
}

/// Read a whole input as text. Invalid UTF-8 is replaced, not rejected.
///
/// # Errors
///
/// Returns `Error::FileNotFound` or `Error::FileUnreadable` naming `path`.
fn read_input(path: &Path) -> Result<String, Error> {
    let bytes = if path == Path::new(STDIN_PATH) {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| return Error::from_read(path.to_path_buf(), e))?;
        buf
    } else {
        std::fs::read(path).map_err(|e| return Error::from_read(path.to_path_buf(), e))?
    };
    return Ok(String::from_utf8_lossy(&bytes).into_owned());
}
