use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub config: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        // no delay so scripted sessions run fast
        let config = tmp.path().join("config.toml");
        fs::write(&config, "[label]\nmock_delay_ms = 0\n").expect("write config fixture");

        Self {
            _tmp: tmp,
            home,
            config,
        }
    }

    pub fn write_config(&self, body: &str) {
        fs::write(&self.config, body).expect("write config fixture");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("unstitched").expect("binary builds");
        cmd.env("HOME", &self.home)
            .env_remove("UNSTITCHED_API_KEY")
            .arg("--config")
            .arg(&self.config);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Drive the interactive session with a stdin script; returns one JSON
    /// event per executed action.
    pub fn run_session_json(&self, script: &str) -> Vec<Value> {
        let out = self
            .cmd()
            .arg("--json")
            .arg("session")
            .write_stdin(script.to_string())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out)
            .expect("utf8 output")
            .lines()
            .map(|l| serde_json::from_str(l).expect("json event line"))
            .collect()
    }
}
