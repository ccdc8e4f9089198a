//! `OppaiOracle` — runs the oppai-ng command line once per asset.
//!
//! Invocation: `oppai <asset> <acc>% +<MODS> -ojson`. The JSON document on
//! stdout carries `code`/`errstr` plus the pp components. The child is
//! waited on inside `compute_score`, so no process outlives its record.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use mapscore_core::errors::OracleError;
use mapscore_core::{IScoringOracle, ScoringRequest, ScoringResult};
use serde::Deserialize;
use tracing::debug;

/// oppai-ng result code for success.
const OPPAI_OK: i64 = 200;
const OPPAI_ERR_SYNTAX: i64 = -2;
const OPPAI_ERR_TRUNCATED: i64 = -3;
const OPPAI_ERR_NOTIMPLEMENTED: i64 = -4;
const OPPAI_ERR_IO: i64 = -5;
const OPPAI_ERR_FORMAT: i64 = -6;

#[derive(Debug, Deserialize)]
struct OppaiOutput {
    code: i64,
    #[serde(default)]
    errstr: String,
    aim_pp: Option<f64>,
    speed_pp: Option<f64>,
    acc_pp: Option<f64>,
    pp: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct OppaiOracle {
    command: OsString,
}

impl OppaiOracle {
    pub fn new(command: impl Into<OsString>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn build_command(&self, request: &ScoringRequest) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.arg(request.asset.as_path())
            .arg(format!("{}%", request.accuracy_percent));
        if !request.mods.is_empty() {
            cmd.arg(format!("+{}", request.mods.acronyms()));
        }
        cmd.arg("-ojson")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Default for OppaiOracle {
    fn default() -> Self {
        Self::new("oppai")
    }
}

impl IScoringOracle for OppaiOracle {
    fn compute_score(&self, request: &ScoringRequest) -> Result<ScoringResult, OracleError> {
        let path = request.asset.to_string();
        if !request.asset.as_path().is_file() {
            return Err(OracleError::AssetMissing { path });
        }

        let output = self.build_command(request).output().map_err(|e| OracleError::Internal {
            message: format!("failed to run {}: {e}", self.command.to_string_lossy()),
        })?;
        debug!(asset = %path, status = %output.status, "oppai finished");

        if output.stdout.iter().all(u8::is_ascii_whitespace) {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OracleError::Internal {
                message: format!("oppai produced no output ({}): {}", output.status, stderr.trim()),
            });
        }

        parse_oppai_json(&path, &output.stdout)
    }
}

/// Turn oppai's `-ojson` document into scores or a classified error.
pub fn parse_oppai_json(path: &str, stdout: &[u8]) -> Result<ScoringResult, OracleError> {
    let parsed: OppaiOutput = serde_json::from_slice(stdout).map_err(|e| OracleError::AssetMalformed {
        path: path.to_string(),
        message: format!("unparsable oppai output: {e}"),
    })?;

    if parsed.code != OPPAI_OK {
        return Err(classify(path, parsed.code, &parsed.errstr));
    }

    let field = |name: &str, value: Option<f64>| -> Result<f64, OracleError> {
        match value {
            Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
            Some(v) => Err(OracleError::Internal {
                message: format!("{path}: {name} out of range: {v}"),
            }),
            None => Err(OracleError::AssetMalformed {
                path: path.to_string(),
                message: format!("oppai output lacks {name}"),
            }),
        }
    };

    Ok(ScoringResult {
        aim: field("aim_pp", parsed.aim_pp)?,
        speed: field("speed_pp", parsed.speed_pp)?,
        accuracy: field("acc_pp", parsed.acc_pp)?,
        overall: field("pp", parsed.pp)?,
    })
}

fn classify(path: &str, code: i64, errstr: &str) -> OracleError {
    match code {
        OPPAI_ERR_IO => OracleError::AssetMissing {
            path: path.to_string(),
        },
        OPPAI_ERR_SYNTAX | OPPAI_ERR_TRUNCATED | OPPAI_ERR_NOTIMPLEMENTED | OPPAI_ERR_FORMAT => {
            OracleError::AssetMalformed {
                path: path.to_string(),
                message: format!("oppai code {code}: {errstr}"),
            }
        }
        _ => OracleError::Internal {
            message: format!("{path}: oppai code {code}: {errstr}"),
        },
    }
}
