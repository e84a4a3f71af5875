// ABOUTME: Integration tests for the fundboard CLI binary.
// ABOUTME: Tests offline HTML file parsing, error exit codes, and fetch mode against a mock portal.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn fundboard_cmd() -> Command {
    Command::cargo_bin("fundboard").unwrap()
}

#[test]
fn application_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("application.html");

    let html_content = r#"<!DOCTYPE html>
<html>
<body>
  <dl>
    <dt>Organization</dt>
    <dd>Chess Club</dd>
  </dl>
  <table><tbody>
    <tr><td>Food</td><td>Snacks</td><td>$50.00</td><td>$40.00</td><td></td><td></td></tr>
  </tbody></table>
  <a href="/Home/DownloadFile?id=9">Quote.pdf</a>
</body>
</html>"#;

    fs::write(&html_path, html_content).unwrap();

    fundboard_cmd()
        .arg("application")
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chess Club"))
        .stdout(predicate::str::contains("\"requested\": 50.0"))
        .stdout(predicate::str::contains("/Home/DownloadFile?id=9"));
}

#[test]
fn evaluation_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("evaluation.html");

    let html_content = "<!DOCTYPE html>\n<html>\n<body>\n  <div class=\"form-group\">\n    <label>Actual attendance</label>\n    180\n  </div>\n</body>\n</html>";

    fs::write(&html_path, html_content).unwrap();

    fundboard_cmd()
        .arg("evaluation")
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Actual attendance"))
        .stdout(predicate::str::contains("180"));
}

/// A page missing its cost table is rejected loudly, not printed partially.
#[test]
fn malformed_application_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("broken.html");

    fs::write(&html_path, "<html><body><p>login required</p></body></html>").unwrap();

    fundboard_cmd()
        .arg("application")
        .arg(&html_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("required structure missing"));
}

#[test]
fn events_fetch_mode_prints_listing() {
    let server = MockServer::start();

    let listing = server.mock(|when, then| {
        when.method(GET)
            .path("/Home/Events")
            .query_param("term", "2024-spring");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(
                r#"<table id="results">
  <thead><tr><th></th></tr></thead>
  <tbody>
    <tr><td>42*</td><td>Org A</td><td>Spring Mixer</td><td>20240301</td>
        <td>Hall 101</td><td>$500.00</td><td>20240310
Mon</td></tr>
  </tbody>
</table>"#,
            );
    });

    fundboard_cmd()
        .arg("--base-url")
        .arg(server.base_url())
        .arg("--compact")
        .arg("events")
        .arg("2024-spring")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":42"))
        .stdout(predicate::str::contains("Spring Mixer"))
        .stdout(predicate::str::contains("2024-03-01T00:00:00Z"));

    listing.assert();
}
