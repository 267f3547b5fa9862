use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_sxssion");
pub const HELP_HINT: &str = "Run `sxssion --help` for more info.";

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

/// Sandbox for one binary invocation: the generated script lands in a temp
/// directory and the launcher is replaced by `/bin/cat`.
pub struct Sandbox {
    pub temp: TempDir,
    pub template: PathBuf,
    pub startx: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().expect("can create temp directory"),
            template: fixture("xinitrc"),
            startx: PathBuf::from("/bin/cat"),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.temp.path().join("generated-xinitrc")
    }

    pub fn write_config(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("can create config directory");
        }
        fs::write(&path, content).expect("can write config");
        path
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(BINARY_PATH);
        command
            .env_remove("RUST_LOG")
            .env("SXSSION_TEMPLATE_PATH", &self.template)
            .env("SXSSION_OUTPUT_PATH", self.output_path())
            .env("SXSSION_STARTX_PATH", &self.startx);
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("sxssion should start")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Template text preceding the `$twm &` line.
pub fn pre_anchor_lines(template: &Path) -> String {
    let text = fs::read_to_string(template).expect("can read template");
    let end = text.find("\n$twm &\n").expect("template contains the anchor");
    text[..=end].to_string()
}

pub fn assert_failed_with(output: &Output, message: &str) {
    let stderr = stderr(output);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains(message), "expected `{message}` in: {stderr}");
    assert!(
        stderr.trim_end().ends_with(HELP_HINT),
        "diagnostic must end with the help hint: {stderr}"
    );
}
