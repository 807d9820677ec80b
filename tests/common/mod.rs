#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the diff-lint binary, isolated from the
/// user's git and diff-lint configuration.
#[macro_export]
macro_rules! diff_lint {
    ($fixture:expr) => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("diff-lint"));
        cmd.current_dir($fixture.path());
        for (key, value) in $fixture.env() {
            cmd.env(key, value);
        }
        cmd
    }};
}

/// Python source used by most tests, before modification.
pub const ORIGINAL_SOURCE: &str = "import os\nx=1\nprint(x)\n";

/// The same source after line 2 was rewritten.
pub const CHANGED_SOURCE: &str = "import os\nx = undefined_name\nprint(x)\n";

/// A temporary git repository with a committed file.
pub struct GitFixture {
    pub dir: TempDir,
    home: TempDir,
}

impl GitFixture {
    /// Creates an empty repository with a configured identity.
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            home: TempDir::new().expect("Failed to create temp home"),
        };
        fixture.git(&["init", "-q"]);
        fixture.git(&["config", "user.email", "test@test.com"]);
        fixture.git(&["config", "user.name", "Test User"]);
        fixture.git(&["config", "commit.gpgsign", "false"]);
        fixture
    }

    /// Repository with `app.py` committed as `ORIGINAL_SOURCE`.
    pub fn with_committed_app() -> Self {
        let fixture = Self::new();
        fixture.create_file("app.py", ORIGINAL_SOURCE);
        fixture.commit_all("initial");
        fixture
    }

    /// Returns the path to the repository.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Environment that keeps global configuration out of the run.
    pub fn env(&self) -> Vec<(&'static str, String)> {
        let home = self.home.path().to_string_lossy().to_string();
        vec![
            ("HOME", home.clone()),
            ("XDG_CONFIG_HOME", format!("{home}/.config")),
            ("GIT_CONFIG_NOSYSTEM", "1".to_string()),
        ]
    }

    /// Runs git in the repository and returns its stdout.
    pub fn git(&self, args: &[&str]) -> String {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(self.path());
        for (key, value) in self.env() {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to run git");
        assert!(output.status.success(), "git {args:?} failed");
        String::from_utf8(output.stdout).expect("git output is UTF-8")
    }

    /// Creates a file with the given content in the repository.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Stages and commits everything.
    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "."]);
        self.git(&["commit", "-q", "-m", message]);
    }

    /// Writes `.diff-lint.toml` whose checkers print canned output files.
    ///
    /// Call after the last commit so the files stay untracked.
    pub fn create_checkers(&self, style_output: &str, correctness_output: &str) {
        self.create_file("style.out", style_output);
        self.create_file("correctness.out", correctness_output);
        self.create_file(".diff-lint.toml", &checker_config("cat style.out", "cat correctness.out"));
    }
}

impl Default for GitFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config whose checkers run the given shell scripts.
pub fn checker_config(style_script: &str, correctness_script: &str) -> String {
    let mut config = String::new();
    let _ = writeln!(config, "[checkers.style]");
    let _ = writeln!(config, "command = [\"sh\", \"-c\", \"{style_script}\"]");
    let _ = writeln!(config, "\n[checkers.correctness]");
    let _ = writeln!(config, "command = [\"sh\", \"-c\", \"{correctness_script}\"]");
    config
}
