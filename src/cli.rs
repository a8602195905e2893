//! CLI interface for blobgen
//!
//! Parses the command line into a [`Config`], runs the pipeline and reports
//! the outcome. The writers are passed in so the whole front end can be
//! driven from tests.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::process::{process, Config, DEFAULT_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "blobgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Embed a directory of files into a Go source file")]
#[command(
    long_about = "blobgen - Generate Go source embedding every file under a directory\n\n\
    Each file is gzipped, base64-encoded and stored in a sorted table behind\n\
    Asset, MustAsset, MustAssetString and AssetNames. A matching _test.go file\n\
    is written next to the output.\n\n\
    The package name is taken from the Go files already in the output\n\
    directory, and the import path from the nearest go.mod above it, unless\n\
    given explicitly.\n\n\
    Examples:\n\
      blobgen ./static\n\
      blobgen -o internal/assets/assets.go ./static\n\
      blobgen -p assets -m example.com/app/assets -o assets.go ./static -v"
)]
#[command(author = "Blobgen Contributors")]
pub struct Cli {
    /// Directory whose files are embedded (walked recursively)
    #[arg(value_name = "ASSET_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Generated Go file; the test file is written beside it
    #[arg(short, long, default_value = DEFAULT_OUTPUT, value_name = "FILE")]
    pub output: PathBuf,

    /// Go package name (default: inferred from the output directory)
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Import path of the package (default: inferred from go.mod)
    #[arg(short = 'm', long = "module", value_name = "IMPORT_PATH")]
    pub import_path: Option<String>,

    /// Log each resolution step and encoded file to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            source_dir: cli.source_dir,
            output: cli.output,
            package: cli.package,
            import_path: cli.import_path,
        }
    }
}

/// Runs blobgen with `args` (program name first) and returns the exit status.
pub fn run<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too.
            if e.use_stderr() {
                let _ = write!(err, "{}", e.render());
                return 1;
            }
            let _ = write!(out, "{}", e.render());
            return 0;
        }
    };

    init_logging(cli.verbose);

    match process(&Config::from(cli)) {
        Ok(summary) => {
            let _ = writeln!(out, "{summary}");
            0
        }
        Err(e) => {
            let _ = writeln!(err, "{e}");
            1
        }
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed when run() is called twice.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbose: bool) {}
