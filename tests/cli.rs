use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use std::process::Command;

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are incorrectly will cause clap to panic regardless of the arguments or
// options provided.
// Calling help does not require any application logic so if this tests fails then we know it
// is to do with the clap cli setup code.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("olr")?;

    cmd.arg("--help");
    cmd.assert().success();

    Ok(())
}

#[test]
fn search_requires_isbn() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("olr")?;

    cmd.arg("search");
    cmd.assert().failure();

    Ok(())
}

// A short ISBN is rejected before the network is checked so this test does not need a connection.
#[test]
fn short_isbn_shows_alert_and_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    let cover = temp.child("cover.jpg");

    let mut cmd = Command::cargo_bin("olr")?;
    cmd.args(["search", "12345", "--cover"]).arg(cover.path());

    let output = cmd.output()?;
    assert_eq!(Some(2), output.status.code());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("Request Error: Please provide a valid ISBN."),
        "{stderr}"
    );

    assert!(!cover.path().exists());
    temp.close()?;
    Ok(())
}

// Errors are reported through the logger, which keeps the error level when quiet.
#[test]
fn quiet_still_reports_alert() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("olr")?;
    cmd.args(["--quiet", "search", "12345"]);

    let output = cmd.output()?;
    assert_eq!(Some(2), output.status.code());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("Request Error: Please provide a valid ISBN."),
        "{stderr}"
    );
    Ok(())
}
