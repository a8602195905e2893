//! Reading the `module` directive out of a `go.mod` file.

/// File name of the Go module manifest.
pub const MANIFEST_NAME: &str = "go.mod";

/// Why a `go.mod` could not provide a module path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    #[error("no module directive")]
    MissingModule,
    #[error("line {line}: malformed module path")]
    MalformedPath { line: usize },
}

/// Returns the module path declared in `go.mod` source `src`.
///
/// Supports `module example.com/x`, the quoted forms, trailing `//`
/// comments and the `module ( ... )` block.
pub fn parse_module_path(src: &str) -> Result<String, ManifestError> {
    let mut in_block = false;
    for (idx, raw) in src.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        let arg = if in_block {
            if line == ")" {
                in_block = false;
                continue;
            }
            line
        } else {
            match directive_arg(line, "module") {
                Some("(") => {
                    in_block = true;
                    continue;
                }
                Some(arg) => arg,
                None => continue,
            }
        };

        return parse_path(arg).ok_or(ManifestError::MalformedPath { line: line_no });
    }
    Err(ManifestError::MissingModule)
}

/// `module foo` -> `Some("foo")`; other directives -> `None`.
fn directive_arg<'a>(line: &'a str, verb: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(verb)?;
    if rest.starts_with(|c: char| c.is_whitespace() || c == '(') {
        Some(rest.trim())
    } else {
        None
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(i) => &line[..i],
        None => line,
    }
}

fn parse_path(arg: &str) -> Option<String> {
    let path = if let Some(body) = arg.strip_prefix('`') {
        body.strip_suffix('`')?.to_string()
    } else if let Some(body) = arg.strip_prefix('"') {
        unquote(body.strip_suffix('"')?)?
    } else {
        let mut words = arg.split_whitespace();
        let path = words.next()?;
        if words.next().is_some() {
            return None;
        }
        path.to_string()
    };
    (!path.is_empty()).then_some(path)
}

/// Minimal Go string unescaping; module paths only ever need `\\` and `\"`.
fn unquote(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                c @ ('\\' | '"') => out.push(c),
                _ => return None,
            },
            '"' => return None,
            c => out.push(c),
        }
    }
    Some(out)
}
