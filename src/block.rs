//! Scoped block injection for shared text files
//!
//! Packages contribute lines to the project's `.env` and `.gitignore` inside
//! delimited regions keyed by package name:
//!
//! ```text
//! ###> acme/widget ###
//! FOO=bar
//! ###< acme/widget ###
//! ```
//!
//! Writing is idempotent per (file, scope): a file already containing the
//! opening delimiter for a scope is left untouched. Detection and removal use
//! literal substring scanning, so package names never need escaping.

use std::path::Path;

use crate::error::{GraftError, Result};

fn open_delimiter(scope: &str) -> String {
    format!("###> {scope} ###")
}

fn close_delimiter(scope: &str) -> String {
    format!("###< {scope} ###")
}

fn file_read_error(path: &Path, e: std::io::Error) -> GraftError {
    GraftError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn file_write_error(path: &Path, e: std::io::Error) -> GraftError {
    GraftError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Append a scoped block of `lines` to `target`, unless one already exists
///
/// The target is created when missing. Existing content is preserved with
/// trailing whitespace trimmed, followed by one blank line and the delimited
/// block. Returns `true` when the file was written, `false` when the call was
/// a no-op (empty `lines`, or the scope is already present).
pub fn write_block(target: &Path, scope: &str, lines: &[String]) -> Result<bool> {
    if lines.is_empty() {
        return Ok(false);
    }

    let content = if target.exists() {
        std::fs::read_to_string(target).map_err(|e| file_read_error(target, e))?
    } else {
        String::new()
    };

    let open = open_delimiter(scope);
    if content.contains(&open) {
        return Ok(false);
    }

    let mut updated = String::with_capacity(content.len() + 64);
    updated.push_str(content.trim_end());
    updated.push_str("\n\n");
    updated.push_str(&open);
    updated.push('\n');
    for line in lines {
        updated.push_str(line);
        updated.push('\n');
    }
    updated.push_str(&close_delimiter(scope));
    updated.push('\n');

    std::fs::write(target, updated).map_err(|e| file_write_error(target, e))?;
    Ok(true)
}

/// Read `source` and inject its lines into `target` as a scoped block
///
/// A missing `source` is normal and yields `Ok(false)`.
pub fn inject_from(source: &Path, target: &Path, scope: &str) -> Result<bool> {
    if !source.is_file() {
        return Ok(false);
    }

    let snippet = std::fs::read_to_string(source).map_err(|e| file_read_error(source, e))?;
    let lines: Vec<String> = snippet.lines().map(str::to_string).collect();
    write_block(target, scope, &lines)
}

/// Remove the scoped block for `scope` from `target`
///
/// The first region enclosed by the scope's delimiters is removed inclusive
/// of both delimiter lines; the remainder is trimmed and left with exactly
/// one trailing newline (or empty). A missing file, missing block, or block
/// without a closing delimiter is a no-op returning `false`.
pub fn remove_block(target: &Path, scope: &str) -> Result<bool> {
    if !target.exists() {
        return Ok(false);
    }

    let content = std::fs::read_to_string(target).map_err(|e| file_read_error(target, e))?;

    let open = open_delimiter(scope);
    let close = close_delimiter(scope);

    let Some(open_idx) = content.find(&open) else {
        return Ok(false);
    };
    let Some(close_rel) = content[open_idx..].find(&close) else {
        return Ok(false);
    };

    let mut end = open_idx + close_rel + close.len();
    if content[end..].starts_with('\n') {
        end += 1;
    }

    let mut remainder = String::with_capacity(content.len());
    remainder.push_str(&content[..open_idx]);
    remainder.push_str(&content[end..]);

    let trimmed = remainder.trim_end();
    let updated = if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}\n")
    };

    std::fs::write(target, updated).map_err(|e| file_write_error(target, e))?;
    Ok(true)
}
