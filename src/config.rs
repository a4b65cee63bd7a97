use std::path::Path;

use crate::error::Error;
use crate::tokenizer::DEFAULT_SEPARATORS;

/// File name looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = ".pomprops.toml";

/// Project configuration loaded from `.pomprops.toml`.
/// Command-line exclusions are merged in after loading.
#[derive(Debug)]
pub struct Config {
    /// Group-id substrings whose records are dropped.
    pub exclude: Vec<String>,
    /// File extensions kept when expanding input directories. Empty keeps all.
    pub extensions: Vec<String>,
    /// Characters that split identifiers when deriving property names.
    pub separators: Vec<char>,
}

/// Raw TOML structure for `.pomprops.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct PomPropsTomlConfig {
    /// See `Config::exclude`.
    #[serde(default)]
    exclude: Vec<String>,
    /// See `Config::extensions`.
    #[serde(default)]
    extensions: Vec<String>,
    /// Separator characters as a single string, e.g. `".-"`.
    separators: Option<String>,
}

impl Default for Config {
    /// Exclude nothing, keep every file, split on `.` and `-`.
    fn default() -> Self {
        return Self {
            exclude: Vec::new(),
            extensions: Vec::new(),
            separators: DEFAULT_SEPARATORS.to_vec(),
        };
    }
}

impl Config {
    /// Load config from an explicit path, or from `.pomprops.toml` in `root`.
    ///
    /// A missing default file yields `Config::default()`. A missing explicit
    /// file is an error, and a malformed file is always an error: the user
    /// wrote it, so it is never silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigNotFound` if `explicit` does not exist,
    /// `Error::Io` for other read failures, or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, Error> {
        let path = explicit.map_or_else(|| return root.join(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if explicit.is_some() {
                    return Err(Error::ConfigNotFound { path });
                }
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            },
            Err(e) => return Err(Error::Io(e)),
        };

        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        return Ok(config);
    }

    /// Parse config from TOML content.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlDe` if the content is not valid config TOML.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let raw: PomPropsTomlConfig = toml::from_str(content)?;
        let separators = raw
            .separators
            .map_or_else(|| return DEFAULT_SEPARATORS.to_vec(), |s| return s.chars().collect());
        return Ok(Self {
            exclude: raw.exclude,
            extensions: raw.extensions,
            separators,
        });
    }

    /// Append exclusion patterns given on the command line.
    pub fn with_excludes(mut self, patterns: impl IntoIterator<Item = String>) -> Self {
        self.exclude.extend(patterns);
        return self;
    }

    /// Check whether a file found under an input directory should be scanned.
    pub fn should_scan(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let Some(ext) = path.extension().and_then(|e| return e.to_str()) else {
            return false;
        };
        return self.extensions.iter().any(|wanted| return wanted.trim_start_matches('.') == ext);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert!(config.exclude.is_empty());
        assert_eq!(config.separators, vec!['.', '-']);
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::parse(
            "exclude = [\"com.evil\"]\nseparators = \".\"\nextensions = [\"xml\", \".md\"]\n",
        )
        .unwrap();
        assert_eq!(config.exclude, vec!["com.evil".to_string()]);
        assert_eq!(config.separators, vec!['.']);
        assert!(config.should_scan(Path::new("a/pom.xml")));
        assert!(config.should_scan(Path::new("README.md")));
        assert!(!config.should_scan(Path::new("build.gradle")));
        assert!(!config.should_scan(Path::new("Makefile")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(Config::parse("exlude = []"), Err(Error::TomlDe(_))));
    }

    #[test]
    fn missing_default_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path(), None).unwrap();
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let err = Config::load(dir.path(), Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn loads_default_file_and_merges_cli_excludes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "exclude = [\"org.internal\"]\n").unwrap();
        let config = Config::load(dir.path(), None)
            .unwrap()
            .with_excludes(vec!["com.evil".to_string()]);
        assert_eq!(config.exclude, vec!["org.internal".to_string(), "com.evil".to_string()]);
    }

    #[test]
    fn no_extension_filter_scans_everything() {
        assert!(Config::default().should_scan(Path::new("Makefile")));
    }
}
