//! Dependency records: identity, property naming, and XML rendering.

use std::fmt;

use regex::Captures;

use crate::grammar;
use crate::overlap::find_overlap;
use crate::tokenizer::{join, tokenize};
use crate::version::Version;

/// One `(group, artifact, version)` triple found in the input.
/// Two records with the same triple are the same record, wherever they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyRecord {
    /// Artifact id, possibly carrying a `_` qualifier such as `_2.12`.
    pub artifact_id: String,
    /// Dotted group id.
    pub group_id: String,
    /// Declared version.
    pub version: Version,
}

impl DependencyRecord {
    /// Build a record from a match of either extraction grammar.
    /// Returns `None` if a named group is missing from the capture.
    pub fn from_captures(cap: &Captures<'_>) -> Option<Self> {
        let group_id = cap.name(grammar::GROUP)?.as_str();
        let artifact_id = cap.name(grammar::ARTIFACT)?.as_str();
        let version = cap.name(grammar::VERSION)?.as_str();
        return Some(Self::new(group_id, artifact_id, version));
    }

    /// Create a record from its three coordinates.
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        return Self {
            artifact_id: artifact_id.to_string(),
            group_id: group_id.to_string(),
            version: Version::new(version),
        };
    }

    /// Derive the version property name, eliding words the artifact id
    /// repeats from the end of the group id.
    ///
    /// `com.example` + `example-core_2.12` gives `com.example.core.version`.
    pub fn property_name(&self, separators: &[char]) -> String {
        let artifact = self
            .artifact_id
            .split_once('_')
            .map_or(self.artifact_id.as_str(), |(head, _)| return head);

        let group_tokens = tokenize(&self.group_id, separators);
        let artifact_tokens = tokenize(artifact, separators);
        let pos = find_overlap(&group_tokens, &artifact_tokens);
        let remainder = artifact_tokens.get(pos..).map(join).unwrap_or_default();

        let mut name = self.group_id.clone();
        if !remainder.is_empty() {
            name.push('.');
            name.push_str(&remainder);
        }
        name.push_str(".version");
        return name;
    }

    /// Render a normalized `<dependency>` block whose version refers to the
    /// derived property.
    pub fn render_dependency_block(&self, separators: &[char]) -> String {
        let name = self.property_name(separators);
        return format!(
            "<dependency>\n\t<groupId>{}</groupId>\n\t<artifactId>{}</artifactId>\n\t<version>${{{name}}}</version>\n</dependency>",
            self.group_id, self.artifact_id,
        );
    }

    /// Render the `<name>version</name>` property line.
    pub fn render_property_definition(&self, separators: &[char]) -> String {
        let name = self.property_name(separators);
        return format!("<{name}>{}</{name}>", self.version);
    }
}

impl fmt::Display for DependencyRecord {
    /// Canonical form, also the report sort key.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "POM('{}','{}','{}')", self.group_id, self.artifact_id, self.version);
    }
}
