use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: command parameters plus any input files.
pub struct Provenance {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input<P: AsRef<Path>>(mut self, input: P) -> Self {
        self.inputs
            .push(input.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Write `<stem>.provenance.json` beside `artifact`; returns its path.
    pub fn write_next_to<P: AsRef<Path>>(&self, artifact: P) -> Result<PathBuf> {
        let artifact = artifact.as_ref();
        let path = sidecar_path(artifact);
        let doc = json!({
            "tool": "vecgeom",
            "version": vecgeom::VERSION,
            "code_rev": current_git_rev(),
            "params": self.params,
            "inputs": self.inputs,
            "outputs": [artifact.to_string_lossy()]
        });
        fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `arrows.png` → `arrows.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// First non-empty candidate, in order.
fn first_set<I: IntoIterator<Item = Option<String>>>(candidates: I) -> Option<String> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    first_set([
        option_env!("GIT_COMMIT").map(String::from),
        std::env::var("GIT_COMMIT").ok(),
    ])
    .or_else(|| {
        let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
        out.status
            .success()
            .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
    })
    .unwrap_or_else(|| "unknown".to_string())
}
