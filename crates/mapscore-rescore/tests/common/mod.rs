//! Shared fixtures: file-backed map stores, asset files and a fake oracle.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use mapscore_core::errors::OracleError;
use mapscore_core::{IScoringOracle, ModifierSet, ScoringRequest, ScoringResult};
use rusqlite::{params, Connection};
use tempfile::TempDir;

pub const MAP_SCHEMA: &str = "
    CREATE TABLE map (
        id INTEGER PRIMARY KEY,
        set_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        stars REAL NOT NULL,
        ar REAL NOT NULL,
        dt_aim_pp REAL,
        dt_speed_pp REAL,
        dt_acc_pp REAL,
        dt_overall_pp REAL
    )";

/// A scratch directory laid out like the job's working directory:
/// `maps.db` next to a `maps/` asset directory.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(ids: &[i64]) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("maps")).unwrap();
        let conn = Connection::open(dir.path().join("maps.db")).unwrap();
        conn.execute_batch(MAP_SCHEMA).unwrap();
        for id in ids {
            conn.execute(
                "INSERT INTO map (id, set_id, name, stars, ar) VALUES (?1, ?2, ?3, 5.5, 9.0)",
                params![id, id * 10, format!("map {id}")],
            )
            .unwrap();
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("maps.db")
    }

    pub fn maps_dir(&self) -> String {
        self.dir.path().join("maps").to_str().unwrap().to_string()
    }

    /// Write an asset whose scores are `fixture_scores(id)`.
    pub fn write_asset(&self, id: i64) {
        let s = fixture_scores(id);
        self.write_raw_asset(id, &format!("{} {} {} {}\n", s.aim, s.speed, s.accuracy, s.overall));
    }

    pub fn write_raw_asset(&self, id: i64, contents: &str) {
        std::fs::write(self.dir.path().join("maps").join(format!("{id}.osu")), contents).unwrap();
    }

    /// Seed one map's score columns directly.
    pub fn set_scores(&self, id: i64, s: ScoringResult) {
        Connection::open(self.db_path())
            .unwrap()
            .execute(
                "UPDATE map SET dt_aim_pp = ?1, dt_speed_pp = ?2, dt_acc_pp = ?3, dt_overall_pp = ?4 WHERE id = ?5",
                params![s.aim, s.speed, s.accuracy, s.overall, id],
            )
            .unwrap();
    }

    /// Committed scores for one map, `None` while unscored.
    pub fn scores(&self, id: i64) -> Option<ScoringResult> {
        let conn = Connection::open(self.db_path()).unwrap();
        let row: (Option<f64>, Option<f64>, Option<f64>, Option<f64>) = conn
            .query_row(
                "SELECT dt_aim_pp, dt_speed_pp, dt_acc_pp, dt_overall_pp FROM map WHERE id = ?1",
                [id],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
            )
            .unwrap();
        match row {
            (Some(aim), Some(speed), Some(accuracy), Some(overall)) => {
                Some(ScoringResult { aim, speed, accuracy, overall })
            }
            (None, None, None, None) => None,
            partial => panic!("map {id} has partially written scores: {partial:?}"),
        }
    }
}

/// Scores the fixtures encode for a map id.
pub fn fixture_scores(id: i64) -> ScoringResult {
    let base = id as f64;
    ScoringResult {
        aim: base * 10.0 + 0.5,
        speed: base * 7.0 + 0.25,
        accuracy: base * 3.0,
        overall: base * 21.0 + 0.75,
    }
}

/// Oracle that reads four whitespace-separated numbers from the asset file.
/// Only answers for 100% accuracy with double-time.
pub struct FixtureOracle;

impl IScoringOracle for FixtureOracle {
    fn compute_score(&self, request: &ScoringRequest) -> Result<ScoringResult, OracleError> {
        let path = request.asset.to_string();
        if request.accuracy_percent != 100.0 || request.mods != ModifierSet::DOUBLE_TIME {
            return Err(OracleError::Internal { message: "unexpected conditions".into() });
        }
        let contents = std::fs::read_to_string(request.asset.as_path())
            .map_err(|_| OracleError::AssetMissing { path: path.clone() })?;
        let values: Vec<f64> = contents
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|e| OracleError::AssetMalformed { path: path.clone(), message: format!("{e}") })?;
        match values.as_slice() {
            [aim, speed, accuracy, overall] => Ok(ScoringResult {
                aim: *aim,
                speed: *speed,
                accuracy: *accuracy,
                overall: *overall,
            }),
            _ => Err(OracleError::AssetMalformed { path, message: "expected 4 values".into() }),
        }
    }
}

/// Shell stand-in for oppai-ng: prints the `-ojson` document for a fixture asset.
#[cfg(unix)]
pub const FAKE_OPPAI: &str = r#"#!/bin/sh
if [ "$2" != "100%" ] || [ "$3" != "+DT" ] || [ "$4" != "-ojson" ]; then
  echo '{"code":-7,"errstr":"unexpected arguments"}'
  exit 1
fi
read aim speed acc pp < "$1"
case "$aim$speed$acc$pp" in
  *[!0-9.]*|"")
    echo '{"code":-6,"errstr":"invalid beatmap"}'
    exit 1
    ;;
esac
printf '{"oppai_version":"fake","code":200,"errstr":"no error","aim_pp":%s,"speed_pp":%s,"acc_pp":%s,"pp":%s}\n' "$aim" "$speed" "$acc" "$pp"
"#;

/// Path of the fake oppai script, written once per test binary before any
/// test spawns it. It lives under cargo's target tmp dir, keyed by process id
/// so test binaries running side by side never rewrite each other's copy.
#[cfg(unix)]
pub fn fake_oppai() -> &'static Path {
    use std::os::unix::fs::PermissionsExt;
    use std::sync::OnceLock;

    static SCRIPT: OnceLock<PathBuf> = OnceLock::new();
    SCRIPT.get_or_init(|| {
        let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(format!("fake-oppai-{}", std::process::id()));
        std::fs::write(&path, FAKE_OPPAI).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    })
}
