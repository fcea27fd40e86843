//! # Test Set Loader Module / 测试集加载模块
//!
//! Validates the target and the on-disk suite layout, then orders the input
//! (and output) files by the integer value of their stems.
//!
//! 验证目标程序和磁盘上的测试集结构，然后按文件名主干的整数值对输入（和输出）文件排序。

use std::path::Path;
use tracing::{debug, info};

use crate::{
    core::{
        config::HarnessConfig,
        error::LoadError,
        models::{Mode, TestCase, TestSuite},
    },
    infra::fs::{ensure_directory, has_entry, is_directory, list_file_names},
    reporting::console,
};

/// Confirms the target program is an entry of the current working directory.
pub fn check_target(target: &str) -> Result<(), LoadError> {
    check_target_in(Path::new("."), target)
}

/// Confirms `target` is an entry of `dir`.
pub fn check_target_in(dir: &Path, target: &str) -> Result<(), LoadError> {
    let present = has_entry(dir, target).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    if present {
        Ok(())
    } else {
        Err(LoadError::MissingTarget(target.to_string()))
    }
}

/// Integer value of a file name's stem (the part before the last extension).
///
/// # Examples
/// `"10.txt"` gives `Some(10)`, `"a.txt"` gives `None`.
pub fn numeric_stem(name: &str) -> Option<u128> {
    Path::new(name).file_stem()?.to_str()?.parse().ok()
}

/// Sorts file names ascending by numeric stem.
///
/// When any stem is not an integer the list is sorted lexically instead and
/// `false` is returned, so the caller can warn about a possibly misordered
/// suite. Names with equal ids keep a lexical tie-break.
pub fn sort_by_numeric_stem(names: &mut [String]) -> bool {
    let keys: Option<Vec<u128>> = names.iter().map(|name| numeric_stem(name)).collect();
    match keys {
        Some(_) => {
            names.sort_by(|a, b| numeric_stem(a).cmp(&numeric_stem(b)).then_with(|| a.cmp(b)));
            true
        }
        None => {
            names.sort();
            false
        }
    }
}

/// Validates the suite under `config.tests_root` and returns it in execution order.
///
/// # Arguments
/// * `config` - Resolved configuration naming the tests root and subdirectories
/// * `mode` - `Run` requires the output directory to be populated and consistent
///   with the inputs; `Generate` creates it when missing
///
/// # Returns
/// The ordered `TestSuite`, or the first structural problem found. All checks,
/// including the pairing of input and output names, happen before any program
/// is run.
///
/// 验证 `config.tests_root` 下的测试集并按执行顺序返回。
/// 所有检查（包括输入和输出文件名的配对）都在运行任何程序之前完成。
pub fn load_suite(config: &HarnessConfig, mode: Mode) -> Result<TestSuite, LoadError> {
    let root = &config.tests_root;
    let input_dir = config.input_dir();
    let output_dir = config.output_dir();

    require_directory(root)?;
    require_directory(&input_dir)?;
    if mode == Mode::Run {
        require_directory(&output_dir)?;
    }

    let mut inputs = list_files(&input_dir)?;
    if inputs.is_empty() {
        return Err(LoadError::EmptyDirectory(input_dir));
    }

    let outputs = match mode {
        Mode::Run => {
            let outputs = list_files(&output_dir)?;
            if outputs.is_empty() {
                return Err(LoadError::EmptyDirectory(output_dir));
            }
            Some(outputs)
        }
        Mode::Generate => {
            let created = ensure_directory(&output_dir).map_err(|source| LoadError::Io {
                path: output_dir.clone(),
                source,
            })?;
            if created {
                info!(path = %output_dir.display(), "created output directory");
            }
            None
        }
    };

    order(&mut inputs, &input_dir);

    if let Some(mut outputs) = outputs {
        order(&mut outputs, &output_dir);
        check_pairing(&inputs, &outputs, &input_dir, &output_dir)?;
    }

    let cases = inputs
        .into_iter()
        .enumerate()
        .map(|(index, name)| TestCase {
            position: index + 1,
            id: numeric_stem(&name),
            input: input_dir.join(&name),
            output: output_dir.join(&name),
            name,
        })
        .collect();
    let suite = TestSuite::new(cases);
    debug!(cases = suite.len(), root = %root.display(), order = ?suite.names(), "suite loaded");
    Ok(suite)
}

fn require_directory(path: &Path) -> Result<(), LoadError> {
    if is_directory(path) {
        Ok(())
    } else {
        Err(LoadError::MissingDirectory(path.to_path_buf()))
    }
}

fn list_files(dir: &Path) -> Result<Vec<String>, LoadError> {
    list_file_names(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn order(names: &mut [String], dir: &Path) {
    if !sort_by_numeric_stem(names) {
        console::print_warning(&format!(
            "Directory {} contains bad files (filename != int), using name order",
            dir.display()
        ));
    }
}

fn check_pairing(
    inputs: &[String],
    outputs: &[String],
    input_dir: &Path,
    output_dir: &Path,
) -> Result<(), LoadError> {
    if inputs.len() != outputs.len() {
        return Err(LoadError::CountMismatch {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            inputs: inputs.len(),
            outputs: outputs.len(),
        });
    }
    match inputs.iter().zip(outputs).find(|(input, output)| input != output) {
        Some((input, output)) => Err(LoadError::NameMismatch {
            input: input.clone(),
            output: output.clone(),
        }),
        None => Ok(()),
    }
}
