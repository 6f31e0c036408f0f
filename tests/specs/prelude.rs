//! Shared helpers for CLI specs.
//!
//! A `Project` is a scratch directory with its own config home. Commands run
//! against it and return a `RunAssert` for checking output.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manual mode: discovery configured, everything else missing
pub const MANUAL_DOC: &str = r#"{
  "campaign_id": "c-1",
  "statuses": {
    "discovery": { "status": "configured" }
  }
}"#;

/// Same phase data in full-sequence mode
pub const AUTO_DOC: &str = r#"{
  "campaign_id": "c-1",
  "full_sequence_mode": true,
  "statuses": {
    "discovery": { "status": "configured" }
  }
}"#;

/// A campaign mid-run with a finished discovery phase
pub const RUNNING_DOC: &str = r#"{
  "campaign_id": "c-1",
  "statuses": {
    "discovery": { "status": "completed" },
    "validation": { "status": "in_progress", "progress_pct": 40 },
    "extraction": { "status": "configured" }
  },
  "events": [
    { "type": "phase_started", "campaign_id": "c-1", "phase": "discovery", "ts": 1000 },
    { "type": "phase_completed", "campaign_id": "c-1", "phase": "discovery", "ts": 1500 },
    { "type": "phase_started", "campaign_id": "c-1", "phase": "validation", "ts": 2000 }
  ],
  "guidance": [
    { "phase": "validation", "text": "Set DNS resolvers" }
  ]
}"#;

/// Discovery failed; validation is configured and ready
pub const FAILED_DOC: &str = r#"{
  "campaign_id": "c-1",
  "statuses": {
    "discovery": { "status": "failed", "last_error": "dns timeout" },
    "validation": { "status": "configured" }
  },
  "events": [
    { "type": "phase_started", "campaign_id": "c-1", "phase": "discovery", "ts": 100 },
    { "type": "phase_failed", "campaign_id": "c-1", "phase": "discovery", "ts": 350, "error": "dns timeout" }
  ]
}"#;

pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project holding one campaign document at `campaign.json`
    pub fn with_doc(contents: &str) -> Self {
        let project = Self::empty();
        project.file("campaign.json", contents);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel)).unwrap()
    }

    fn config_home(&self) -> PathBuf {
        self.path().join("config")
    }

    pub fn cpo(&self) -> CliBuilder {
        let mut cmd = Command::cargo_bin("cpo").unwrap();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("CPO_LOG");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    fn run(mut self) -> (bool, RunAssert) {
        let output = self.cmd.output().unwrap();
        (
            output.status.success(),
            RunAssert {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
        )
    }

    /// Run and require a zero exit
    pub fn passes(self) -> RunAssert {
        let (ok, run) = self.run();
        assert!(
            ok,
            "expected success\nstdout:\n{}\nstderr:\n{}",
            run.stdout, run.stderr
        );
        run
    }

    /// Run and require a non-zero exit
    pub fn fails(self) -> RunAssert {
        let (ok, run) = self.run();
        assert!(
            !ok,
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout, run.stderr
        );
        run
    }
}

pub struct RunAssert {
    pub stdout: String,
    pub stderr: String,
}

impl RunAssert {
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}
