//! The render context for one generation run.

use std::path::Path;

use rand::RngCore;
use serde::Serialize;
use tracing::debug;

use crate::codec;
use crate::collect::SourceFile;
use crate::error::{Error, Result};

/// Payload of the placeholder asset: `"ok\n"`, gzipped and base64-encoded.
pub const PLACEHOLDER_PAYLOAD: &str = "H4sIAAAAAAAA/8rP5gIEAAD//30OFtoDAAAA";

/// SHA-256 of the placeholder asset's decoded content.
pub const PLACEHOLDER_CHECKSUM: &str =
    "dc51b8c96c2d745df3bd5590d990230a482fd247123599548e0632fdbf97fc22";

const PLACEHOLDER_PREFIX_LEN: usize = 256;
const PLACEHOLDER_RANDOM_BYTES: usize = 256;

/// Appended to the last asset name to get a name that is never present.
pub const MISSING_SUFFIX: &str = "--not-found";

/// An asset ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub name: String,
    pub size: usize,
    pub checksum: String,
    pub payload: String,
}

/// The asset the generated tests look up successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub name: String,
    pub checksum: String,
}

/// Everything the templates need, and nothing time- or host-dependent.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationModel {
    pub code_file: String,
    pub test_file: String,
    pub package: String,
    pub import_path: String,
    /// Sorted by name. Holds only the placeholder when `assets_empty`.
    pub assets: Vec<Asset>,
    pub assets_empty: bool,
    pub existing: Sample,
    pub missing_name: String,
    pub version: &'static str,
}

impl GenerationModel {
    /// Number of real files and their total size in bytes.
    pub fn totals(&self) -> (usize, u64) {
        if self.assets_empty {
            return (0, 0);
        }
        let bytes = self.assets.iter().map(|a| a.size as u64).sum();
        (self.assets.len(), bytes)
    }
}

/// Collects the metadata around the assets and builds a [`GenerationModel`].
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    code_file: String,
    test_file: String,
    package: String,
    import_path: String,
}

impl ModelBuilder {
    pub fn new(code_path: &Path, test_path: &Path, package: &str, import_path: &str) -> Self {
        ModelBuilder {
            code_file: base_name(code_path),
            test_file: base_name(test_path),
            package: package.to_string(),
            import_path: import_path.to_string(),
        }
    }

    /// Encodes `files` (already sorted by name) into a model.
    ///
    /// With no files a single placeholder asset is used, so the generated
    /// lookup code and its tests still have something to chew on. `rng`
    /// only feeds the placeholder's name.
    pub fn build(self, files: Vec<SourceFile>, rng: &mut dyn RngCore) -> Result<GenerationModel> {
        let assets_empty = files.is_empty();
        let assets = if assets_empty {
            vec![placeholder(rng)]
        } else {
            files
                .into_iter()
                .map(encode_asset)
                .collect::<Result<Vec<_>>>()?
        };

        let sample = &assets[sample_index(assets.len())];
        let existing = Sample {
            name: sample.name.clone(),
            checksum: sample.checksum.clone(),
        };
        let missing_name = match assets.last() {
            Some(last) => format!("{}{MISSING_SUFFIX}", last.name),
            None => MISSING_SUFFIX.to_string(),
        };

        Ok(GenerationModel {
            code_file: self.code_file,
            test_file: self.test_file,
            package: self.package,
            import_path: self.import_path,
            assets,
            assets_empty,
            existing,
            missing_name,
            version: env!("CARGO_PKG_VERSION"),
        })
    }
}

/// Index of the asset used as the "found" test fixture.
pub fn sample_index(len: usize) -> usize {
    len / 2
}

fn encode_asset(file: SourceFile) -> Result<Asset> {
    let payload = codec::encode(&file.contents).map_err(|source| Error::Encode {
        name: file.name.clone(),
        source,
    })?;
    debug!(
        "Encoded {}: {} -> {} bytes",
        file.name,
        file.contents.len(),
        payload.len()
    );
    Ok(Asset {
        checksum: codec::checksum(&file.contents),
        size: file.contents.len(),
        name: file.name,
        payload,
    })
}

/// Builds the stand-in asset for an empty asset directory.
///
/// The name is 256 underscores followed by 256 random bytes in hex, which
/// no real asset is going to be called.
pub fn placeholder(rng: &mut dyn RngCore) -> Asset {
    let mut noise = [0u8; PLACEHOLDER_RANDOM_BYTES];
    rng.fill_bytes(&mut noise);
    Asset {
        name: format!("{}{}", "_".repeat(PLACEHOLDER_PREFIX_LEN), hex::encode(noise)),
        size: 0,
        checksum: PLACEHOLDER_CHECKSUM.to_string(),
        payload: PLACEHOLDER_PAYLOAD.to_string(),
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
