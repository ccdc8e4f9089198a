//! The `mapscore-rescore` binary end to end, with a shell stand-in for oppai.

#![cfg(unix)]

mod common;

use std::process::{Command, Output};

use common::{fake_oppai, fixture_scores, Workspace};
use mapscore_core::{AssetLocator, IScoringOracle, ScoringRequest};
use mapscore_rescore::errors::EXIT_INCOMPLETE;
use mapscore_rescore::OppaiOracle;

fn run_binary(ws: &Workspace, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mapscore-rescore"))
        .current_dir(ws.root())
        .arg("--oracle")
        .arg(fake_oppai())
        .args(extra)
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

#[test]
fn oppai_adapter_parses_fake_oppai_output() {
    let ws = Workspace::new(&[]);
    ws.write_asset(12);
    let oracle = OppaiOracle::new(fake_oppai());
    let request = ScoringRequest::rescore(AssetLocator::under(&ws.maps_dir(), "osu", 12));

    assert_eq!(oracle.compute_score(&request).unwrap(), fixture_scores(12));
}

#[test]
fn oppai_adapter_classifies_invalid_beatmap() {
    let ws = Workspace::new(&[]);
    ws.write_raw_asset(13, "osu file format v14\n");
    let oracle = OppaiOracle::new(fake_oppai());
    let request = ScoringRequest::rescore(AssetLocator::under(&ws.maps_dir(), "osu", 13));

    let err = oracle.compute_score(&request).unwrap_err();
    assert!(matches!(err, mapscore_core::errors::OracleError::AssetMalformed { .. }), "{err:?}");
}

#[test]
fn default_layout_run_scores_everything_and_exits_zero() {
    let ws = Workspace::new(&[1, 2, 3]);
    for id in [1, 2, 3] {
        ws.write_asset(id);
    }

    let out = run_binary(&ws, &[]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    let mut lines: Vec<&str> = stdout.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["maps/1.osu", "maps/2.osu", "maps/3.osu"]);
    for id in [1, 2, 3] {
        assert_eq!(ws.scores(id), Some(fixture_scores(id)));
    }
}

#[test]
fn missing_store_exits_one() {
    let ws = Workspace::new(&[]);
    let out = run_binary(&ws, &["--db", "absent.db"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent.db"));
    assert!(!ws.root().join("absent.db").exists());
}

#[test]
fn abort_policy_with_missing_asset_exits_nonzero_and_writes_nothing() {
    let ws = Workspace::new(&[1, 2, 5]);
    ws.write_asset(1);
    ws.write_asset(2);

    let out = run_binary(&ws, &["--on-asset-error", "abort"]);

    assert_eq!(out.status.code(), Some(3));
    for id in [1, 2, 5] {
        assert_eq!(ws.scores(id), None);
    }
}

#[test]
fn skip_policy_commits_the_rest_but_exits_incomplete() {
    let ws = Workspace::new(&[1, 5]);
    ws.write_asset(1);

    let out = run_binary(&ws, &["--durability", "safe"]);

    assert_eq!(out.status.code(), Some(i32::from(EXIT_INCOMPLETE)));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("skipped map 5 (maps/5.osu): [ASSET_MISSING]"), "stderr: {stderr}");
    assert_eq!(ws.scores(1), Some(fixture_scores(1)));
    assert_eq!(ws.scores(5), None);
}

#[test]
fn unusable_oracle_skips_every_map_and_exits_incomplete() {
    let ws = Workspace::new(&[1, 2]);
    ws.write_asset(1);
    ws.write_asset(2);

    let out = Command::new(env!("CARGO_BIN_EXE_mapscore-rescore"))
        .current_dir(ws.root())
        .args(["--oracle", "./no-such-oppai"])
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(i32::from(EXIT_INCOMPLETE)));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("skipped map 1 (maps/1.osu): [ORACLE_INTERNAL_ERROR]"), "stderr: {stderr}");
    assert!(stderr.contains("skipped map 2 (maps/2.osu)"), "stderr: {stderr}");
    assert_eq!(ws.scores(1), None);
    assert_eq!(ws.scores(2), None);
}

#[test]
fn fatal_error_is_reported_once_on_stderr() {
    let ws = Workspace::new(&[]);
    let out = run_binary(&ws, &["--db", "absent.db"]);

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("absent.db").count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("[STORE_UNAVAILABLE]"), "stderr: {stderr}");
}

#[test]
fn config_file_is_picked_up_from_working_directory() {
    let ws = Workspace::new(&[4]);
    std::fs::create_dir(ws.root().join("songs")).unwrap();
    let s = fixture_scores(4);
    std::fs::write(
        ws.root().join("songs").join("4.osu"),
        format!("{} {} {} {}\n", s.aim, s.speed, s.accuracy, s.overall),
    )
    .unwrap();
    std::fs::write(ws.root().join("mapscore.toml"), "[assets]\ndir = \"songs\"\n").unwrap();

    let out = run_binary(&ws, &[]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "songs/4.osu\n");
    assert_eq!(ws.scores(4), Some(s));
}

#[test]
fn broken_config_exits_two() {
    let ws = Workspace::new(&[1]);
    std::fs::write(ws.root().join("mapscore.toml"), "[store]\ndurability = 3\n").unwrap();

    let out = run_binary(&ws, &[]);

    assert_eq!(out.status.code(), Some(2));
}
