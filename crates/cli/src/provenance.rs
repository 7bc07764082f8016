//! Provenance sidecars for files written by `uigeom-cli`.
//!
//! Every artifact `foo.json` gets a `foo.provenance.json` next to it that
//! records how it was made (subcommand, arguments, library version, git
//! revision) and a short summary of what it contains, so a curve dump can be
//! matched back to the easing text that produced it without reopening it.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact and what it holds.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    /// Command-specific digest of the artifact, e.g. the canonical easing text.
    pub summary: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            summary: Value::Null,
        }
    }

    pub fn with_summary(mut self, summary: Value) -> Self {
        self.summary = summary;
        self
    }
}

/// Write `<artifact-stem>.provenance.json` next to `artifact`. The artifact
/// must already exist; its size is recorded.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let callsite = Location::caller();
    let artifact = artifact.as_ref();
    let bytes = fs::metadata(artifact)
        .with_context(|| format!("reading metadata of {}", artifact.display()))?
        .len();

    let doc = json!({
        "code_rev": current_git_rev(),
        "version": uigeom::VERSION,
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "command": payload.command,
        "params": payload.params,
        "summary": payload.summary,
        "outputs": [{ "path": artifact.to_string_lossy(), "bytes": bytes }],
    });

    let sidecar = provenance_path(artifact);
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    rev_from_env()
        .or_else(rev_from_git)
        .unwrap_or_else(|| "unknown".to_string())
}

fn rev_from_env() -> Option<String> {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
}

fn rev_from_git() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_name_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/curves/ease.json"));
        assert_eq!(derived, Path::new("/tmp/curves/ease.provenance.json"));
    }

    #[test]
    fn sidecar_records_command_summary_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("curve.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("bezier", json!({"text": "ease", "samples": 4}))
            .with_summary(json!({"css_text": "ease"}));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "bezier");
        assert_eq!(parsed["params"]["text"], "ease");
        assert_eq!(parsed["summary"]["css_text"], "ease");
        assert_eq!(parsed["version"], uigeom::VERSION);
        assert_eq!(parsed["outputs"][0]["path"], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["outputs"][0]["bytes"], 2);
    }

    #[test]
    fn sidecar_needs_the_artifact() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(write_sidecar(&missing, Payload::new("bezier", json!({}))).is_err());
    }
}
