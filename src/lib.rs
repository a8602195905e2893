//! blobgen - embed a directory of files into Go source
//!
//! Copyright (c) 2025 Blobgen Contributors
//! Licensed under MIT License
//!
//! Walks an asset directory, gzips and base64-encodes every regular file,
//! and writes a Go file exposing the contents through `Asset`,
//! `MustAsset`, `MustAssetString` and `AssetNames`, together with a
//! `_test.go` file that exercises them. The generated Go only uses the
//! standard library.
//!
//! The Go package name and import path of the output are inferred from the
//! files around it (existing `package` clauses and the nearest `go.mod`)
//! unless given in [`Config`].
//!
//! ```no_run
//! use blobgen::{process, Config};
//!
//! let config = Config {
//!     source_dir: Some("static".into()),
//!     output: "internal/assets/assets.go".into(),
//!     ..Config::default()
//! };
//! let summary = process(&config)?;
//! println!("{summary}");
//! # Ok::<(), blobgen::Error>(())
//! ```

pub mod cli;
pub mod codec;
pub mod collect;
pub mod error;
pub mod ident;
pub mod model;
pub mod process;
pub mod render;
pub mod resolve;

pub use error::{Error, Result};
pub use process::{process, process_with_rng, Config, Summary};
