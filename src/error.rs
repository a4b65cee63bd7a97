/// Crate-level error types for pomprops diagnostics.
use std::path::PathBuf;

/// All errors in pomprops carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the file or reason for failure.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An explicitly requested config file does not exist on disk.
    #[error("config not found: {}", path.display())]
    ConfigNotFound {
        /// Path to the missing config file.
        path: PathBuf,
    },

    /// An input file passed on the command line does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// An input file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    FileUnreadable {
        /// Path to the unreadable file.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// Underlying I/O error not tied to a specific input file.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// TOML deserialization of the config file failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// Directory traversal failed while expanding an input directory.
    #[error("walk: {0}")]
    Walk(
        /// The wrapped traversal error.
        #[from]
        walkdir::Error,
    ),
}

impl Error {
    /// Classify a failed read of `path` into a not-found or unreadable error.
    pub fn from_read(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound { path };
        }
        return Self::FileUnreadable { path, source };
    }
}
