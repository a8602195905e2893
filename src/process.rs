//! The generation pipeline, end to end.

use std::fmt;
use std::path::PathBuf;

use rand::RngCore;
use tracing::{debug, info};

use crate::collect;
use crate::error::{Error, Result};
use crate::ident::is_valid_identifier;
use crate::model::ModelBuilder;
use crate::render;
use crate::resolve;

/// Default name of the generated code file.
pub const DEFAULT_OUTPUT: &str = "blobgen.go";

/// Inputs of one run. Unset package and import path are inferred.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_dir: Option<PathBuf>,
    pub output: PathBuf,
    pub package: Option<String>,
    pub import_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_dir: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            package: None,
            import_path: None,
        }
    }
}

/// What a successful run processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub bytes: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "files: {}, bytes: {}", self.files, self.bytes)
    }
}

/// Generates the asset file and its test file described by `config`.
///
/// See [`process_with_rng`].
pub fn process(config: &Config) -> Result<Summary> {
    process_with_rng(config, &mut rand::thread_rng())
}

/// Generates the asset file and its test file described by `config`.
///
/// Inputs are checked before anything is read or written. Both output
/// files are overwritten. The first error stops the run; a code file that
/// was already written is left in place.
///
/// `rng` is only used to name the placeholder asset of an empty directory.
pub fn process_with_rng(config: &Config, rng: &mut dyn RngCore) -> Result<Summary> {
    let source_dir = config
        .source_dir
        .as_deref()
        .filter(|dir| !dir.as_os_str().is_empty())
        .ok_or(Error::SourceNotSpecified)?;

    let code_path = config.output.as_path();
    if code_path.extension().map_or(true, |ext| ext != "go") {
        return Err(Error::OutputNotGo);
    }
    collect::check_root(source_dir)?;

    let package = match &config.package {
        Some(pkg) if !is_valid_identifier(pkg) => return Err(Error::InvalidPackage(pkg.clone())),
        Some(pkg) => pkg.clone(),
        None => resolve::find_package(code_path)?,
    };
    let import_path = match &config.import_path {
        Some(path) => path.clone(),
        None => resolve::find_import_path(code_path)?,
    };
    debug!(package = %package, import_path = %import_path, "Resolved target package");

    let files = collect::collect(source_dir)?;
    let test_path = render::test_file_path(code_path);
    let model = ModelBuilder::new(code_path, &test_path, &package, &import_path).build(files, rng)?;

    let rendered = render::render(&model);
    render::write_output(code_path, &rendered.code)?;
    render::write_output(&test_path, &rendered.tests)?;

    let (files, bytes) = model.totals();
    let summary = Summary { files, bytes };
    info!(
        "Generated {} and {} ({summary})",
        code_path.display(),
        test_path.display()
    );
    Ok(summary)
}
