use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn pomprops_cmd(fixture: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pomprops"));
    cmd.current_dir(Path::new("tests/fixtures").join(fixture));
    cmd.env_remove("POMPROPS_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn property_versions_across_two_files() {
    let out = pomprops_cmd("basic")
        .args(["-v", "-x", "com.evil", "a.xml", "b.txt"])
        .output()
        .unwrap();
    assert!(out.status.success(), "failed: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        stdout(&out),
        "<org.foo.bar.version>1.0</org.foo.bar.version>\n\
         <org.foo.baz.version>2.0</org.foo.baz.version>\n\n"
    );
}

#[test]
fn file_attribution_unions_sources() {
    let out = pomprops_cmd("basic")
        .args(["--print-with-files", "--exclude-pattern", "com.evil", "a.xml", "b.txt"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "POM('org.foo','foo-bar','1.0') a.xml, b.txt\n\
         POM('org.foo','foo-baz','2.0') b.txt\n"
    );
}

#[test]
fn excluded_groups_never_appear() {
    let out = pomprops_cmd("basic")
        .args(["-f", "-v", "-d", "-s", "-x", "com.evil", "a.xml", "b.txt"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(!text.contains("com.evil"), "excluded group leaked:\n{text}");
    assert!(text.contains("org.foo.baz.version"));
}

#[test]
fn without_exclusion_every_group_is_reported() {
    let out = pomprops_cmd("basic").args(["-s", "a.xml"]).output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "POM('com.evil.tools','evil-tools','6.6.6') com.evil.tools.version\n\
         POM('org.foo','foo-bar','1.0') org.foo.bar.version\n"
    );
}

#[test]
fn dependency_blocks_reference_the_property() {
    let out = pomprops_cmd("basic")
        .args(["-d", "-x", "com.evil", "b.txt"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "<dependency>\n\
         \t<groupId>org.foo</groupId>\n\
         \t<artifactId>foo-bar</artifactId>\n\
         \t<version>${org.foo.bar.version}</version>\n\
         </dependency>\n\
         <dependency>\n\
         \t<groupId>org.foo</groupId>\n\
         \t<artifactId>foo-baz</artifactId>\n\
         \t<version>${org.foo.baz.version}</version>\n\
         </dependency>\n"
    );
}

#[test]
fn no_report_flags_print_nothing() {
    let out = pomprops_cmd("basic").args(["a.xml", "b.txt"]).output().unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn unreadable_input_aborts_without_output() {
    let out = pomprops_cmd("basic")
        .args(["-v", "a.xml", "missing.xml"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing.xml"), "diagnostic should name the path: {stderr}");
}

#[test]
fn missing_file_list_is_a_usage_error() {
    let out = pomprops_cmd("basic").arg("-v").output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn reads_standard_input() {
    let mut child = pomprops_cmd("basic")
        .args(["-v", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"POM com.example; example-core_2.12; 3.1\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(stdout(&out), "<com.example.core.version>3.1</com.example.core.version>\n\n");
}

#[test]
fn directory_inputs_are_walked() {
    let out = pomprops_cmd("")
        .args(["-f", "-x", "com.evil", "basic"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("POM('org.foo','foo-bar','1.0') basic/a.xml, basic/b.txt\n"), "{text}");
}

#[test]
fn config_file_supplies_excludes_and_separators() {
    let out = pomprops_cmd("configured").args(["-v", "deps.txt"]).output().unwrap();
    assert!(out.status.success(), "failed: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        stdout(&out),
        "<com.example.example-core.version>3.1</com.example.example-core.version>\n\n"
    );
}

#[test]
fn explicit_missing_config_is_an_error() {
    let out = pomprops_cmd("basic")
        .args(["-c", "nope.toml", "-v", "a.xml"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.toml"));
}
