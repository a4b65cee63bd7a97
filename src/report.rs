//! Text reports over an extraction: summary, file attribution, version
//! properties, and normalized dependency blocks.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::record::DependencyRecord;
use crate::scanner::Extraction;

/// Which reports to render, in the order they are printed.
#[derive(Debug, Clone, Copy, Default)]
#[allow(clippy::struct_excessive_bools, reason = "one independent switch per report")]
pub struct Selection {
    /// Grouped `<dependency>` blocks.
    pub dependencies: bool,
    /// Records with the files they were found in.
    pub files: bool,
    /// `<name>version</name>` property lines.
    pub properties: bool,
    /// Records with their derived property name.
    pub summary: bool,
}

/// Records in canonical order, ready for rendering.
pub struct Report<'a> {
    /// The extraction the records come from.
    extraction: &'a Extraction,
    /// All records, sorted by their canonical string.
    records: Vec<&'a DependencyRecord>,
    /// Separators used for property names.
    separators: &'a [char],
}

impl<'a> Report<'a> {
    /// Sort the extraction's records by canonical string.
    pub fn new(extraction: &'a Extraction, separators: &'a [char]) -> Self {
        let mut keyed: Vec<(String, &DependencyRecord)> = extraction
            .keys()
            .map(|record| return (record.to_string(), record))
            .collect();
        keyed.sort_by(|a, b| return a.0.cmp(&b.0));
        let records = keyed.into_iter().map(|(_, record)| return record).collect();
        return Self {
            extraction,
            records,
            separators,
        };
    }

    /// One normalized `<dependency>` block per `(artifact_id, group_id)` pair.
    /// The first record of each pair in canonical order is the one rendered,
    /// so differing versions of one artifact yield a single block.
    pub fn dependencies(&self) -> String {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut out = String::new();
        for record in &self.records {
            if !seen.insert((record.artifact_id.as_str(), record.group_id.as_str())) {
                continue;
            }
            out.push_str(&record.render_dependency_block(self.separators));
            out.push('\n');
        }
        return out;
    }

    /// Each record followed by the files it was found in.
    pub fn files(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            let files = self
                .extraction
                .get(*record)
                .map(|paths| {
                    return paths
                        .iter()
                        .map(|p| return p.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                })
                .unwrap_or_default();
            let _ = writeln!(out, "{record} {files}");
        }
        return out;
    }

    /// One property line per record, then a blank line.
    pub fn properties(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.render_property_definition(self.separators));
            out.push('\n');
        }
        out.push('\n');
        return out;
    }

    /// Render every selected report, concatenated.
    pub fn render(&self, selection: Selection) -> String {
        let mut out = String::new();
        if selection.summary {
            out.push_str(&self.summary());
        }
        if selection.files {
            out.push_str(&self.files());
        }
        if selection.properties {
            out.push_str(&self.properties());
        }
        if selection.dependencies {
            out.push_str(&self.dependencies());
        }
        return out;
    }

    /// Each record followed by its derived property name.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            let _ = writeln!(out, "{record} {}", record.property_name(self.separators));
        }
        return out;
    }
}
