use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Replaces the lines between `{prefix}++Autogenerated` and
/// `{prefix}--Autogenerated` with `block`. Marker lines and everything
/// outside them are kept byte for byte; new lines take the start marker's
/// line ending.
pub fn regenerate(text: &str, prefix: &str, block: &str) -> Result<String> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let (start, end) = find_region(&lines, prefix)?;

    let eol = if lines[start].ends_with("\r\n") { "\r\n" } else { "\n" };
    let mut result = String::with_capacity(text.len() + block.len());
    for line in &lines[..=start] {
        result.push_str(line);
    }
    for line in block.lines() {
        result.push_str(line);
        result.push_str(eol);
    }
    for line in &lines[end..] {
        result.push_str(line);
    }
    Ok(result)
}

/// The lines currently between the markers, without line endings.
pub fn region<'a>(text: &'a str, prefix: &str) -> Result<Vec<&'a str>> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let (start, end) = find_region(&lines, prefix)?;
    Ok(lines[start + 1..end]
        .iter()
        .map(|line| line.trim_end_matches(&['\r', '\n'][..]))
        .collect())
}

fn find_region(lines: &[&str], prefix: &str) -> Result<(usize, usize)> {
    let start_marker = format!("{}++Autogenerated", prefix);
    let end_marker = format!("{}--Autogenerated", prefix);
    let missing = || Error::MissingMarker {
        prefix: prefix.to_owned(),
    };

    let start = lines
        .iter()
        .position(|line| line.trim_start().starts_with(&start_marker))
        .ok_or_else(missing)?;
    let end = lines[start + 1..]
        .iter()
        .position(|line| line.trim_start().starts_with(&end_marker))
        .map(|index| start + 1 + index)
        .ok_or_else(missing)?;
    Ok((start, end))
}

/// Splices `block` into the file at `path`, writing only when the text
/// changes. Returns whether it did.
pub fn update_file(path: &Path, prefix: &str, block: &str) -> Result<bool> {
    let text = read_file(path)?;
    let updated = regenerate(&text, prefix, block)?;
    if updated == text {
        debug!("Unchanged {} ({})", path.display(), prefix);
        return Ok(false);
    }
    fs::write(path, updated).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    info!("Changed {} ({})", path.display(), prefix);
    Ok(true)
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}
