//! Guessing the Go package name and import path for generated files.
//!
//! Both lookups start from the path of the code file about to be written;
//! that file need not exist yet.
//!
//! Policy: package detection always skips `_test` package clauses, and the
//! import path always comes from the nearest `go.mod`. There is no fallback
//! from a missing `go.mod` to the package name, because the generated test
//! file cannot import the package without a real module path.

pub mod manifest;
pub mod scan;

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::ident::is_valid_identifier;
use manifest::MANIFEST_NAME;

/// Package used when nothing better can be inferred.
pub const FALLBACK_PACKAGE: &str = "main";

/// Guesses the package for the generated file at `output`.
///
/// Go files next to `output` are scanned smallest first, since the largest
/// one is likely a previously generated asset file. The first non-test
/// package clause wins. Failing that the directory name is used if it is a
/// valid identifier, otherwise `main`.
pub fn find_package(output: &Path) -> Result<String> {
    let dir = output_dir(output)?;
    for file in go_files_by_size(&dir)? {
        let src = fs::read(&file).map_err(|e| Error::read(&file, e))?;
        match scan::scan_for_package(&String::from_utf8_lossy(&src)) {
            Some(pkg) if !pkg.ends_with("_test") => {
                debug!(file = %file.display(), package = %pkg, "package clause found");
                return Ok(pkg);
            }
            Some(pkg) => debug!(file = %file.display(), package = %pkg, "skipping test package"),
            None => {}
        }
    }

    let pkg = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| is_valid_identifier(name))
        .unwrap_or_else(|| FALLBACK_PACKAGE.to_string());
    debug!(dir = %dir.display(), package = %pkg, "no package clause, using fallback");
    Ok(pkg)
}

/// Lists the `.go` files directly inside `dir`, smallest first.
///
/// Entries that are not regular files once symlinks are followed are left
/// out. Equal sizes are ordered by path.
pub fn go_files_by_size(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::read(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::read(dir, e))?;
        let path = entry.path();
        if !entry.file_name().to_string_lossy().ends_with(".go") {
            continue;
        }
        let meta = fs::metadata(&path).map_err(|e| Error::read(&path, e))?;
        if meta.is_file() {
            files.push((meta.len(), path));
        }
    }
    files.sort();
    Ok(files.into_iter().map(|(_, path)| path).collect())
}

/// Works out the import path of the package that will contain `output`.
///
/// Climbs from the output directory towards the root looking for `go.mod`,
/// then appends the directories between the module root and the output
/// directory to the declared module path.
pub fn find_import_path(output: &Path) -> Result<String> {
    let dir = output_dir(output)?;

    let mut module_dir = dir.as_path();
    let (manifest_path, src) = loop {
        let candidate = module_dir.join(MANIFEST_NAME);
        match fs::read(&candidate) {
            Ok(src) => break (candidate, src),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::read(candidate, e)),
        }
        match module_dir.parent() {
            Some(parent) if parent != module_dir => module_dir = parent,
            _ => return Err(Error::ManifestNotFound),
        }
    };

    let module = manifest::parse_module_path(&String::from_utf8_lossy(&src)).map_err(|source| {
        Error::Manifest {
            path: manifest_path.clone(),
            source,
        }
    })?;

    let suffix = slash_path(dir.strip_prefix(module_dir).unwrap_or(Path::new("")))
        .ok_or_else(|| Error::NonUtf8Name(dir.clone()))?;
    let import_path = if suffix.is_empty() {
        module
    } else {
        format!("{}/{suffix}", module.trim_end_matches('/'))
    };
    debug!(manifest = %manifest_path.display(), import_path = %import_path, "import path resolved");
    Ok(import_path)
}

/// Absolute, lexically cleaned directory of `output`.
fn output_dir(output: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(output).map_err(|e| Error::read(output, e))?;
    let abs = path_clean::clean(abs);
    Ok(abs.parent().map_or_else(|| abs.clone(), Path::to_path_buf))
}

/// Joins the normal components of a relative path with `/`.
/// `None` if any component is not valid UTF-8.
pub(crate) fn slash_path(path: &Path) -> Option<String> {
    let parts = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
