//! Post-init manifest patching.
//!
//! After the toolchain init step the workspace contains a `package.json` and
//! a `tsconfig.json` in whatever shape the toolchain produced. This module
//! applies the fixed set of field mutations the generated project needs and
//! rewrites both documents pretty-printed. No schema validation is performed;
//! a missing or unparseable document is a surfaced error.

use crate::error::ScaffoldError;
use crate::templates::{COMPILER_CONFIG, GUARD_FILE};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::info;

/// Watch-mode dev script added to the package manifest.
pub const DEV_SCRIPT: &str = "bun --watch index.ts";

/// Production start script added to the package manifest.
pub const START_SCRIPT: &str = "NODE_ENV=production bun index.ts";

/// Entry point the generated server boots from.
pub const ENTRY_POINT: &str = "index.ts";

/// Compiler library entry appended for the browser-side templates.
pub const BROWSER_LIB: &str = "DOM";

/// Patch `package.json`: add dev/start scripts, module type, and entry point.
///
/// Fields the init step produced are preserved; the `scripts` object is
/// created when absent.
pub fn patch_package_manifest(root: &Path) -> Result<(), ScaffoldError> {
    let path = root.join(GUARD_FILE);
    let mut pkg = read_json(&path)?;
    let obj = as_object(&mut pkg, &path)?;

    let scripts = obj
        .entry("scripts")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or_else(|| {
            ScaffoldError::ManifestError(format!(
                "`scripts` in {} is not a JSON object",
                path.display()
            ))
        })?;
    scripts.insert("dev".to_string(), json!(DEV_SCRIPT));
    scripts.insert("start".to_string(), json!(START_SCRIPT));

    obj.insert("type".to_string(), json!("module"));
    obj.insert("main".to_string(), json!(ENTRY_POINT));

    write_json(&path, &pkg)?;
    info!(path = %path.display(), "patched package manifest");
    Ok(())
}

/// Patch `tsconfig.json`: append the browser library to `compilerOptions.lib`.
///
/// The document may carry JSONC comments (the init step emits them); comments
/// are stripped before parsing. The entry is only appended when not already
/// present, so the patch is idempotent.
pub fn patch_compiler_config(root: &Path) -> Result<(), ScaffoldError> {
    let path = root.join(COMPILER_CONFIG);
    let raw = fs::read_to_string(&path).map_err(|e| {
        ScaffoldError::ManifestError(format!("failed to read {}: {}", path.display(), e))
    })?;
    let cleaned = strip_jsonc_comments(&raw);
    let mut cfg: Value = serde_json::from_str(&cleaned).map_err(|e| {
        ScaffoldError::ManifestError(format!("failed to parse {}: {}", path.display(), e))
    })?;
    let obj = as_object(&mut cfg, &path)?;

    let options = obj
        .entry("compilerOptions")
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or_else(|| {
            ScaffoldError::ManifestError(format!(
                "`compilerOptions` in {} is not a JSON object",
                path.display()
            ))
        })?;
    let lib = options
        .entry("lib")
        .or_insert_with(|| json!([]))
        .as_array_mut()
        .ok_or_else(|| {
            ScaffoldError::ManifestError(format!(
                "`compilerOptions.lib` in {} is not a JSON array",
                path.display()
            ))
        })?;
    if !lib.iter().any(|v| v.as_str() == Some(BROWSER_LIB)) {
        lib.push(json!(BROWSER_LIB));
    }

    write_json(&path, &cfg)?;
    info!(path = %path.display(), "patched compiler configuration");
    Ok(())
}

/// Remove `//` and `/* */` comments from a JSONC document.
///
/// String literals are respected, including escaped quotes. Newlines inside
/// stripped comments are preserved so parse errors keep meaningful line numbers.
pub fn strip_jsonc_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    chars.next();
                    for rest in chars.by_ref() {
                        if rest == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = ' ';
                    for rest in chars.by_ref() {
                        if prev == '*' && rest == '/' {
                            break;
                        }
                        if rest == '\n' {
                            out.push('\n');
                        }
                        prev = rest;
                    }
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    out
}

fn read_json(path: &Path) -> Result<Value, ScaffoldError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        ScaffoldError::ManifestError(format!("failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        ScaffoldError::ManifestError(format!("failed to parse {}: {}", path.display(), e))
    })
}

fn as_object<'a>(
    value: &'a mut Value,
    path: &Path,
) -> Result<&'a mut serde_json::Map<String, Value>, ScaffoldError> {
    value.as_object_mut().ok_or_else(|| {
        ScaffoldError::ManifestError(format!("{} is not a JSON object", path.display()))
    })
}

fn write_json(path: &Path, value: &Value) -> Result<(), ScaffoldError> {
    let rendered = serde_json::to_string_pretty(value)?;
    fs::write(path, rendered).map_err(|e| ScaffoldError::fs(path, e))
}
