//! Go source emission.
//!
//! The two templates are compiled into the binary with [`include_str!`] and
//! rendered with `minijinja`. They are fixed, so a template that fails to
//! compile or render is a bug in blobgen and panics instead of returning
//! an error.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use minijinja::Environment;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::GenerationModel;

const CODE_TEMPLATE: &str = "code.go.tmpl";
const TEST_TEMPLATE: &str = "test.go.tmpl";

const TEMPLATES: [(&str, &str); 2] = [
    (CODE_TEMPLATE, include_str!("templates/code.go.tmpl")),
    (TEST_TEMPLATE, include_str!("templates/test.go.tmpl")),
];

/// The two generated files' contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub code: String,
    pub tests: String,
}

/// Renders the asset code file and its test file.
///
/// # Panics
///
/// Panics if a built-in template is broken.
pub fn render(model: &GenerationModel) -> Rendered {
    let env = environment();
    Rendered {
        code: render_one(&env, CODE_TEMPLATE, model),
        tests: render_one(&env, TEST_TEMPLATE, model),
    }
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("goquote", go_quote);
    for (name, source) in TEMPLATES {
        if let Err(err) = env.add_template(name, source) {
            panic!("built-in template {name} does not compile: {err:#}");
        }
    }
    env
}

fn render_one(env: &Environment<'_>, name: &str, model: &GenerationModel) -> String {
    let rendered = env
        .get_template(name)
        .and_then(|tmpl| tmpl.render(model));
    match rendered {
        Ok(text) => text,
        Err(err) => panic!("built-in template {name} failed to render: {err:#}"),
    }
}

/// Quotes `s` as a Go interpreted string literal.
pub fn go_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Go rejects a BOM anywhere but the start of a file.
            c if c.is_control() || c == '\u{feff}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `dir/name.go` -> `dir/name_test.go`.
pub fn test_file_path(code_path: &Path) -> PathBuf {
    let stem = code_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    code_path.with_file_name(format!("{stem}_test.go"))
}

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::SourceFile;
    use crate::model::ModelBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn model(names: &[&str]) -> GenerationModel {
        let files = names
            .iter()
            .map(|n| SourceFile {
                name: n.to_string(),
                contents: format!("content of {n}").into_bytes(),
            })
            .collect();
        ModelBuilder::new(
            Path::new("blobgen.go"),
            Path::new("blobgen_test.go"),
            "assets",
            "example.com/app/assets",
        )
        .build(files, &mut StdRng::seed_from_u64(3))
        .unwrap()
    }

    #[test]
    fn templates_compile() {
        let env = environment();
        assert!(env.get_template(CODE_TEMPLATE).is_ok());
        assert!(env.get_template(TEST_TEMPLATE).is_ok());
    }

    #[test]
    fn code_lists_names_in_order() {
        let out = render(&model(&["a.txt", "b/c.txt", "d.bin"]));
        assert!(out.code.contains("package assets\n"));
        let a = out.code.find("\t\"a.txt\",\n").unwrap();
        let b = out.code.find("\t\"b/c.txt\",\n").unwrap();
        let d = out.code.find("\t\"d.bin\",\n").unwrap();
        assert!(a < b && b < d);
        assert!(out.code.contains("copy(names, blobgenNames)"));
        assert!(out.code.ends_with("}\n"));
    }

    #[test]
    fn tests_reference_package_and_import() {
        let out = render(&model(&["a.txt", "b.txt", "c.txt"]));
        assert!(out.tests.contains("package assets_test\n"));
        assert!(out.tests.contains("\t\"example.com/app/assets\"\n"));
        assert!(out.tests.contains("const blobgenPresent = \"b.txt\"\n"));
        assert!(out
            .tests
            .contains("const blobgenMissing = \"c.txt--not-found\"\n"));
        assert!(out.tests.contains("assets.MustAssetString(blobgenMissing)"));
    }

    #[test]
    fn empty_model_hides_placeholder_from_names() {
        let m = ModelBuilder::new(
            Path::new("blobgen.go"),
            Path::new("blobgen_test.go"),
            "assets",
            "example.com/a",
        )
        .build(Vec::new(), &mut StdRng::seed_from_u64(3))
        .unwrap();
        let placeholder = go_quote(&m.assets[0].name);
        let out = render(&m);

        assert!(out.code.contains("\treturn []string{}\n"));
        assert!(!out.code.contains("copy(names, blobgenNames)"));
        assert!(out.code.contains(&placeholder));
        assert!(out.tests.contains("var blobgenWantNames = []string{\n}\n"));
        assert!(out.tests.contains(&format!("const blobgenPresent = {placeholder}\n")));
    }

    #[test]
    fn decode_failures_share_one_panic() {
        let out = render(&model(&["a"]));
        assert_eq!(out.code.matches("panic(").count(), 2);
        assert_eq!(
            out.code
                .matches("\tpanic(\"blobgen: corrupt payload for \" + name")
                .count(),
            1
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let names = ["x", "y/z", "ü.txt"];
        assert_eq!(render(&model(&names)), render(&model(&names)));
    }

    #[test]
    fn no_template_syntax_leaks() {
        let out = render(&model(&["a"]));
        for text in [&out.code, &out.tests] {
            assert!(!text.contains("{{") && !text.contains("{%"));
            assert!(!text.contains("\n\n\n"));
        }
    }

    #[test]
    fn go_quote_escapes() {
        assert_eq!(go_quote("plain/name.txt"), "\"plain/name.txt\"");
        assert_eq!(go_quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(go_quote("tab\there\nnl"), "\"tab\\there\\nnl\"");
        assert_eq!(go_quote("\u{1}\u{7f}"), "\"\\u0001\\u007f\"");
        assert_eq!(go_quote("\u{feff}x"), "\"\\ufeffx\"");
        assert_eq!(go_quote("ßมาก"), "\"ßมาก\"");
    }

    #[test]
    fn test_path_replaces_extension() {
        assert_eq!(
            test_file_path(Path::new("pkg/blobgen.go")),
            PathBuf::from("pkg/blobgen_test.go")
        );
        assert_eq!(test_file_path(Path::new("x.go")), PathBuf::from("x_test.go"));
    }
}
