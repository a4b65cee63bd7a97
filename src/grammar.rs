/// Extraction grammars for dependency declarations embedded in loose text.
use std::sync::LazyLock;

use regex::Regex;

/// Capture group holding the group id in both grammars.
pub const GROUP: &str = "group";

/// Capture group holding the artifact id in both grammars.
pub const ARTIFACT: &str = "artifact";

/// Capture group holding the version in both grammars.
pub const VERSION: &str = "version";

/// Verbose form: a `<dependency>` block whose first three children are
/// `groupId`, `artifactId` and `version`, in that order. Anything else up to
/// the closing tag is skipped lazily, across lines.
#[allow(clippy::expect_used, reason = "pattern is a compile-time constant")]
pub static VERBOSE: LazyLock<Regex> = LazyLock::new(|| {
    return Regex::new(concat!(
        r"(?s)<dependency>\s*",
        r"<groupId>(?P<group>[\w.\-]+)</groupId>\s*",
        r"<artifactId>(?P<artifact>[\w.\-${}]+)</artifactId>\s*",
        r"<version>(?P<version>[\w.\-${}]+)</version>\s*",
        r".*?</dependency>",
    ))
    .expect("valid verbose dependency regex");
});

/// Compact form: `POM group; artifact; version` on one line.
#[allow(clippy::expect_used, reason = "pattern is a compile-time constant")]
pub static COMPACT: LazyLock<Regex> = LazyLock::new(|| {
    return Regex::new(concat!(
        r"\bPOM[ \t]+",
        r"(?P<group>[\w.\-]+)[ \t]*;[ \t]*",
        r"(?P<artifact>[\w.\-${}]+)[ \t]*;[ \t]*",
        r"(?P<version>[\w.\-${}]+)",
    ))
    .expect("valid compact dependency regex");
});

/// Both grammars, in the order the scanner applies them.
pub fn all() -> [&'static Regex; 2] {
    return [&*VERBOSE, &*COMPACT];
}
