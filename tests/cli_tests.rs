use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG_VARS: &[&str] = &[
    "RSS_BRIDGE",
    "FEEDGEN_PLATFORMS",
    "FEEDGEN_FETCH_TIMEOUT",
    "NOTEBROOK_URL",
    "NOTEBROOK_TOKEN",
    "NOTEBROOK_CHANNEL",
];

/// Binary with a clean configuration environment
fn feedgen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("feedgen").unwrap();
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn configured_cmd() -> Command {
    let mut cmd = feedgen_cmd();
    cmd.env("RSS_BRIDGE", "https://bridge.example.org/");
    cmd
}

#[test]
fn test_help_shows_generate_flags() {
    feedgen_cmd()
        .arg("generate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--notify"));
}

#[test]
fn test_playlist_link() {
    configured_cmd()
        .arg("generate")
        .arg("https://www.youtube.com/playlist?list=PL123")
        .assert()
        .success()
        .stdout(predicate::eq(
            "Enjoy your YouTube playlist RSS:\nhttps://www.youtube.com/feeds/videos.xml?playlist_id=PL123\n",
        ));
}

#[test]
fn test_instagram_username_link() {
    configured_cmd()
        .arg("generate")
        .arg("https://instagram.com/someuser/")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enjoy your Instagram Username feed"))
        .stdout(predicate::str::contains(
            "https://bridge.example.org/?action=display&media_type=all&format=Atom&bridge=Instagram&context=Username&u=someuser",
        ));
}

#[test]
fn test_json_output() {
    configured_cmd()
        .arg("generate")
        .arg("--json")
        .arg("https://www.youtube.com/playlist?list=PL123")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""identifier": "PL123""#))
        .stdout(predicate::str::contains(r#""kind": "playlist""#))
        .stdout(predicate::str::contains("Enjoy").not());
}

#[test]
fn test_json_cannot_be_delivered_to_notebrook() {
    configured_cmd()
        .arg("generate")
        .arg("--json")
        .arg("--notify")
        .arg("https://www.youtube.com/playlist?list=PL123")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_not_a_url_is_rejected() {
    configured_cmd()
        .arg("generate")
        .arg("not a url")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Looks like this is not a URL"))
        .stderr(predicate::str::contains("Not a URL"));
}

#[test]
fn test_unsupported_link_is_rejected() {
    configured_cmd()
        .arg("generate")
        .arg("https://example.com")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Looks like I do not support such link"))
        .stdout(predicate::str::contains("https://").not());
}

#[test]
fn test_missing_bridge_host() {
    feedgen_cmd()
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing environment variable: RSS_BRIDGE"));
}

#[test]
fn test_notify_requires_notebrook() {
    configured_cmd()
        .arg("generate")
        .arg("--notify")
        .arg("https://www.youtube.com/playlist?list=PL123")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOTEBROOK_URL"));
}

mod youtube_only_deployment {
    use super::*;

    fn youtube_only_cmd() -> Command {
        let mut cmd = feedgen_cmd();
        cmd.env("FEEDGEN_PLATFORMS", "youtube");
        cmd
    }

    #[test]
    fn test_runs_without_bridge_host() {
        youtube_only_cmd()
            .arg("info")
            .assert()
            .success()
            .stdout(predicate::str::contains("YouTube: channels and playlists"))
            .stdout(predicate::str::contains("Instagram").not());
    }

    #[test]
    fn test_instagram_link_is_unsupported() {
        youtube_only_cmd()
            .arg("generate")
            .arg("https://instagram.com/someuser/")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Looks like I do not support such link"));
    }
}

mod dotenv_config {
    use super::*;

    #[test]
    fn test_bridge_host_read_from_dotenv_in_working_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".env"), "RSS_BRIDGE=dotenv-bridge.example\n").unwrap();

        feedgen_cmd()
            .current_dir(temp_dir.path())
            .arg("generate")
            .arg("https://instagram.com/explore/tags/sunset/")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "https://dotenv-bridge.example/?action=display&media_type=all&format=Atom&bridge=Instagram&context=Hashtag&h=sunset",
            ));
    }

    #[test]
    fn test_invalid_timeout_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".env"),
            "FEEDGEN_PLATFORMS=youtube\nFEEDGEN_FETCH_TIMEOUT=soon\n",
        )
        .unwrap();

        feedgen_cmd()
            .current_dir(temp_dir.path())
            .arg("info")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Configuration error"));
    }
}

mod listen {
    use super::*;

    #[test]
    fn test_replies_to_every_line_and_keeps_going() {
        configured_cmd()
            .arg("listen")
            .write_stdin("hello\nhttps://example.com\n\nhttps://instagram.com/someuser/\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Looks like this is not a URL"))
            .stdout(predicate::str::contains("Looks like I do not support such link"))
            .stdout(predicate::str::contains("context=Username&u=someuser"));
    }
}
