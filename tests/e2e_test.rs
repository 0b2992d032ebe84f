/// End-to-end tests for the CLI
///
/// Every run works against a temporary project: an inventory, jars built on
/// the fly, and a Maven-layout repository served through a `file://` base URI.
mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_utilities::fixtures::{file_base_uri, pom, write_jar, write_maven_pom};

/// Lays out a project with one `runtime` artifact `com.example:foo:1.0`
/// and returns the inventory path.
fn create_project(dir: &Path) -> PathBuf {
    let repo = dir.join("repo");
    write_maven_pom(
        &repo,
        "com.example",
        "foo",
        "1.0",
        &pom(None, Some("http://x"), &["MIT"]),
    );
    write_jar(
        &dir.join("libs/foo-1.0.jar"),
        &[("META-INF/LICENSE", "MIT"), ("META-INF/MANIFEST.MF", "Manifest-Version: 1.0")],
    );

    let inventory = json!({
        "project": { "name": "demo", "description": "Demo project" },
        "repositories": [
            { "kind": "remote", "base_uris": [file_base_uri(&repo)] }
        ],
        "configurations": [
            { "name": "compileClasspath", "artifacts": [] },
            {
                "name": "runtime",
                "description": "Runtime classpath",
                "artifacts": [
                    { "group": "com.example", "name": "foo", "version": "1.0",
                      "file": "libs/foo-1.0.jar" }
                ]
            }
        ]
    });
    let path = dir.join("dependency-inventory.json");
    fs::write(&path, serde_json::to_string_pretty(&inventory).unwrap()).unwrap();
    path
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        let inventory = create_project(dir.path());

        cargo_bin_cmd!("dependency-license-report")
            .arg("-i")
            .arg(&inventory)
            .arg("-o")
            .arg(dir.path().join("out"))
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("dependency-license-report")
            .arg("--help")
            .assert()
            .code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("dependency-license-report")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("dependency-license-report")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Zero timeout
    #[test]
    fn test_exit_code_zero_timeout() {
        cargo_bin_cmd!("dependency-license-report")
            .args(["--timeout-secs", "0"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - missing inventory
    #[test]
    fn test_exit_code_missing_inventory() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("dependency-license-report")
            .arg("-i")
            .arg(dir.path().join("nope.json"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Dependency inventory not found"));
    }

    /// Exit code 3: Application error - malformed inventory
    #[test]
    fn test_exit_code_malformed_inventory() {
        let dir = TempDir::new().unwrap();
        let inventory = dir.path().join("inventory.json");
        fs::write(&inventory, "{ not json").unwrap();

        cargo_bin_cmd!("dependency-license-report")
            .arg("-i")
            .arg(&inventory)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse dependency inventory"));
    }

    /// Exit code 3: Application error - invalid exclusion pattern
    #[test]
    fn test_exit_code_invalid_exclude_pattern() {
        let dir = TempDir::new().unwrap();
        let inventory = create_project(dir.path());

        cargo_bin_cmd!("dependency-license-report")
            .arg("-i")
            .arg(&inventory)
            .arg("-o")
            .arg(dir.path().join("out"))
            .args(["-e", "*"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("only wildcards"));

        assert!(!dir.path().join("out/index.html").exists());
    }
}

#[test]
fn test_e2e_report_contents() {
    let dir = TempDir::new().unwrap();
    let inventory = create_project(dir.path());
    let out = dir.path().join("out");

    cargo_bin_cmd!("dependency-license-report")
        .arg("-i")
        .arg(&inventory)
        .arg("-o")
        .arg(&out)
        .arg("-q")
        .assert()
        .success();

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.starts_with("<html><head><meta charset=\"utf-8\">"));
    assert!(html.contains("<title>demo Third Party Dependency License Report</title>"));
    assert!(html.contains("<meta name=\"generator\" content=\"dependency-license-report "));
    assert!(html.contains("<meta name=\"report-id\" content=\"urn:uuid:"));
    assert!(html.contains("<h1>demo</h1><p>Demo project</p>"));
    assert!(html.contains("<h2>runtime</h2><p>Runtime classpath</p>"));
    assert!(!html.contains("compileClasspath"));
    assert!(html.contains(
        "<tr><td><h3>foo</h3></td><td>1.0</td><td>com.example</td>\
         <td><a href=\"http://x\">http://x</a></td>\
         <td>MIT</td>\
         <td><a href=\"foo/META-INF/LICENSE\">META-INF/LICENSE</a></td></tr>"
    ));
    assert!(html.ends_with("</body></html>\n"));

    assert_eq!(
        fs::read_to_string(out.join("foo/META-INF/LICENSE")).unwrap(),
        "MIT"
    );
    assert!(!out.join("foo/META-INF/MANIFEST.MF").exists());
}

#[test]
fn test_e2e_explicit_html_output_file() {
    let dir = TempDir::new().unwrap();
    let inventory = create_project(dir.path());
    let out = dir.path().join("site/licenses.html");

    cargo_bin_cmd!("dependency-license-report")
        .arg("-i")
        .arg(&inventory)
        .arg("-o")
        .arg(&out)
        .arg("-q")
        .assert()
        .success();

    assert!(out.is_file());
    assert!(dir.path().join("site/foo/META-INF/LICENSE").is_file());
}

#[test]
fn test_e2e_selects_configuration_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let inventory = create_project(dir.path());
    let out = dir.path().join("out");

    cargo_bin_cmd!("dependency-license-report")
        .arg("-i")
        .arg(&inventory)
        .arg("-o")
        .arg(&out)
        .args(["-c", "COMPILECLASSPATH", "-c", "missing"])
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Configuration 'missing' does not exist in the inventory",
        ));

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains("<h2>compileClasspath</h2>"));
    assert!(!html.contains("<h2>runtime</h2>"));
}

#[test]
fn test_e2e_exclude_artifact() {
    let dir = TempDir::new().unwrap();
    let inventory = create_project(dir.path());
    let out = dir.path().join("out");

    cargo_bin_cmd!("dependency-license-report")
        .arg("-i")
        .arg(&inventory)
        .arg("-o")
        .arg(&out)
        .args(["-e", "com.example:*", "-e", "unused-*"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Excluded 1 artifact(s)"))
        .stderr(predicate::str::contains(
            "Exclude pattern 'unused-*' did not match any artifacts",
        ));

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(!html.contains("<h3>foo</h3>"));
    assert!(!out.join("foo").exists());
}

#[test]
fn test_e2e_local_directory_repository() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("poms/nested")).unwrap();
    fs::write(
        dir.path().join("poms/nested/bar-2.0.pom"),
        pom(None, Some("https://bar.example"), &["BSD-3-Clause"]),
    )
    .unwrap();
    write_jar(&dir.path().join("bar-2.0.jar"), &[]);

    let inventory = json!({
        "project": { "name": "local" },
        "repositories": [ { "kind": "local_directory", "roots": ["poms"] } ],
        "configurations": [
            { "name": "runtime", "artifacts": [
                { "group": "org.bar", "name": "bar", "version": "2.0", "file": "bar-2.0.jar" }
            ] }
        ]
    });
    let inventory_path = dir.path().join("inventory.json");
    fs::write(&inventory_path, inventory.to_string()).unwrap();
    let out = dir.path().join("out");

    cargo_bin_cmd!("dependency-license-report")
        .arg("-i")
        .arg(&inventory_path)
        .arg("-o")
        .arg(&out)
        .arg("-q")
        .assert()
        .success();

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains("<a href=\"https://bar.example\">https://bar.example</a>"));
    assert!(html.contains("<td>BSD-3-Clause</td>"));
}

#[test]
fn test_e2e_missing_artifact_leaves_closed_document() {
    let dir = TempDir::new().unwrap();
    let inventory = create_project(dir.path());
    fs::remove_file(dir.path().join("libs/foo-1.0.jar")).unwrap();
    let out = dir.path().join("out");

    cargo_bin_cmd!("dependency-license-report")
        .arg("-i")
        .arg(&inventory)
        .arg("-o")
        .arg(&out)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("com.example:foo:1.0"))
        .stderr(predicate::str::contains("💡 Hint:"));

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.ends_with("</body></html>\n"));
    assert!(!html.contains("<h3>foo</h3>"));
}

#[test]
fn test_e2e_unreachable_repository_leaves_blank_cells() {
    let dir = TempDir::new().unwrap();
    write_jar(&dir.path().join("baz-1.0.jar"), &[]);
    let inventory = json!({
        "project": { "name": "offline" },
        "repositories": [
            { "kind": "remote", "base_uris": [file_base_uri(dir.path()) + "no-such-repo/"] }
        ],
        "configurations": [
            { "name": "runtime", "artifacts": [
                { "group": "org.baz", "name": "baz", "version": "1.0", "file": "baz-1.0.jar" }
            ] }
        ]
    });
    let inventory_path = dir.path().join("inventory.json");
    fs::write(&inventory_path, inventory.to_string()).unwrap();
    let out = dir.path().join("out");

    cargo_bin_cmd!("dependency-license-report")
        .arg("-i")
        .arg(&inventory_path)
        .arg("-o")
        .arg(&out)
        .arg("-q")
        .assert()
        .success();

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains("<td>org.baz</td><td></td><td></td><td></td></tr>"));
}

#[test]
fn test_e2e_malformed_repository_uri_is_skipped() {
    let dir = TempDir::new().unwrap();
    let repo = dir.path().join("repo");
    write_maven_pom(
        &repo,
        "org.baz",
        "baz",
        "1.0",
        &pom(None, Some("https://baz.example"), &["MIT"]),
    );
    write_jar(&dir.path().join("baz-1.0.jar"), &[]);
    let inventory = json!({
        "project": { "name": "partial" },
        "repositories": [
            { "kind": "remote", "base_uris": ["ht tp://bad uri", file_base_uri(&repo)] }
        ],
        "configurations": [
            { "name": "runtime", "artifacts": [
                { "group": "org.baz", "name": "baz", "version": "1.0", "file": "baz-1.0.jar" }
            ] }
        ]
    });
    let inventory_path = dir.path().join("inventory.json");
    fs::write(&inventory_path, inventory.to_string()).unwrap();
    let out = dir.path().join("out");

    cargo_bin_cmd!("dependency-license-report")
        .arg("-i")
        .arg(&inventory_path)
        .arg("-o")
        .arg(&out)
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::contains("ht tp://bad uri"));

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains("<a href=\"https://baz.example\">https://baz.example</a>"));
}
