#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dork() -> Command {
    let mut cmd = Command::cargo_bin("dork").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// startup
// ---------------------------------------------------------------------------

#[test]
fn welcome_and_first_look() {
    dork()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to Dork\n\n"))
        .stdout(predicate::str::contains(
            "You are standing in a large field. \nRows of tall trees",
        ))
        .stdout(predicate::str::contains(
            "Below you, you see a manhole with a ladder leads into darkness",
        ))
        .stdout(predicate::str::contains(
            "You see the following items before you:\n  hammer\n0> ",
        ));
}

#[test]
fn eof_exits_cleanly() {
    dork()
        .write_stdin("look\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("1> \n"));
}

#[test]
fn config_file_sets_title() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dork.toml");
    fs::write(&path, "title = \"the Underground\"\n").unwrap();

    dork()
        .arg(&path)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to the Underground\n"));
}

#[test]
fn bad_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dork.toml");
    fs::write(&path, "rooms = [\"field\"]\n").unwrap();

    dork()
        .arg(&path)
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config file"));
}

// ---------------------------------------------------------------------------
// commands
// ---------------------------------------------------------------------------

#[test]
fn take_hammer_twice() {
    dork()
        .write_stdin("take hammer\ntake hammer\nlook\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0> You take the hammer\n1> "))
        .stdout(predicate::str::contains("1> You already have the hammer\n2> "))
        .stdout(predicate::str::contains("  hammer").count(1));
}

#[test]
fn down_the_manhole_and_back() {
    dork()
        .write_stdin("d\nu\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0> Graffiti lines the wall around the manhole ladder.\nAbove you, you see large field\n1> ",
        ))
        .stdout(predicate::str::contains("1> You are standing in a large field."));
}

#[test]
fn no_exit_that_way() {
    dork()
        .write_stdin("w\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0> You can't go that way\n1> "));
}

#[test]
fn unknown_verb_keeps_counter() {
    dork()
        .write_stdin("xyzzy\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0> Hm?\n0> "));
}

#[test]
fn placeholder_verb_counts() {
    dork()
        .write_stdin("examine\njump\nrun\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0> Nothing happens\n1> Nothing happens\n2> Nothing happens\n3> "));
}

#[test]
fn take_without_argument() {
    dork()
        .write_stdin("take\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0> Take what?\n1> "));
}

#[test]
fn take_something_absent() {
    dork()
        .write_stdin("take lamp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0> You can't take the lamp\n1> "));
}

#[test]
fn invalid_utf8_line_does_not_end_session() {
    dork()
        .write_stdin(&b"take \xff\xfe\nlook\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("0> You can't take the \u{fffd}\u{fffd}\n1> "))
        .stdout(predicate::str::contains("1> You are standing in a large field."))
        .stdout(predicate::str::ends_with("2> \n"));
}

#[test]
fn invalid_utf8_verb_is_unrecognised() {
    dork()
        .write_stdin(&b"\xc3\nlook\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("0> Hm?\n0> You are standing in a large field."));
}
