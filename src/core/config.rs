//! # Configuration / 配置
//!
//! `Settings` holds the tunables that may come from an optional TOML file,
//! `HarnessConfig` is the fully resolved configuration for one invocation.
//! Both are built once by the CLI layer and borrowed by every component.
//!
//! `Settings` 保存可以来自可选 TOML 文件的可调参数，
//! `HarnessConfig` 是单次调用的完整配置。

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Tunables loaded from a settings file. Every field has a default, so an
/// empty file (or no file at all) is valid.
///
/// 从设置文件加载的可调参数。每个字段都有默认值。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Wall-clock limit per test case for `run`, in seconds.
    /// 每个测试用例的时间限制（秒），仅用于 `run`。
    #[serde(default = "default_timelimit_secs")]
    pub timelimit_secs: u64,

    /// Name of the subdirectory holding input files.
    /// 存放输入文件的子目录名称。
    #[serde(default = "default_input_dir")]
    pub input_dir: String,

    /// Name of the subdirectory holding expected-output files.
    /// 存放期望输出文件的子目录名称。
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_timelimit_secs() -> u64 {
    1
}

fn default_input_dir() -> String {
    "input".to_string()
}

fn default_output_dir() -> String {
    "output".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timelimit_secs: default_timelimit_secs(),
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Settings {
    /// Reads and parses a TOML settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
        if settings.timelimit_secs == 0 {
            anyhow::bail!("timelimit_secs in {} must be at least 1", path.display());
        }
        Ok(settings)
    }
}

/// Resolved configuration for a single `run` or `generate` invocation.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Launcher prefixed to the target, e.g. `python3`. Empty runs the target directly.
    pub command: String,
    /// Target filename, expected in the current working directory.
    pub target: String,
    /// Root of the test suite, containing the input and output subdirectories.
    pub tests_root: PathBuf,
    /// Per-case wall-clock limit. `None` waits for the program indefinitely.
    pub timeout: Option<Duration>,
    pub settings: Settings,
}

impl HarnessConfig {
    /// Configuration for checking a candidate. A time limit given on the
    /// command line wins over the one from the settings file.
    pub fn for_run(
        command: impl Into<String>,
        target: impl Into<String>,
        tests_root: impl Into<PathBuf>,
        timelimit_secs: Option<u64>,
        settings: Settings,
    ) -> Self {
        let secs = timelimit_secs.unwrap_or(settings.timelimit_secs);
        Self {
            command: command.into(),
            target: target.into(),
            tests_root: tests_root.into(),
            timeout: Some(Duration::from_secs(secs)),
            settings,
        }
    }

    /// Configuration for generating answers. The reference program is trusted,
    /// so no time limit applies.
    pub fn for_generate(
        command: impl Into<String>,
        target: impl Into<String>,
        tests_root: impl Into<PathBuf>,
        settings: Settings,
    ) -> Self {
        Self {
            command: command.into(),
            target: target.into(),
            tests_root: tests_root.into(),
            timeout: None,
            settings,
        }
    }

    pub fn input_dir(&self) -> PathBuf {
        self.tests_root.join(&self.settings.input_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.tests_root.join(&self.settings.output_dir)
    }
}
