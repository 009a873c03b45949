use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// One row of the documented table, as cached in the JSON checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputInfo {
    /// `U+XXXX`, or `U+XXXX + U+YYYY` for a character pair.
    pub code: String,
    pub character: String,
    pub sequence: String,
    pub name: String,
}

/// Input sequence, without prefix or suffix, to its character.
pub type InputMap = BTreeMap<String, InputInfo>;

/// The two datasets collected from the scraped table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceMaps {
    pub latex: InputMap,
    pub emoji: InputMap,
}

impl SourceMaps {
    pub fn new() -> Self {
        SourceMaps::default()
    }

    /// Adds one table row of `[code, character, sequences, name]` columns.
    /// A row without columns is the table header and is skipped.
    pub fn push_row<S: AsRef<str>>(&mut self, columns: &[S]) -> Result<()> {
        let items: Vec<&str> = columns.iter().map(|column| column.as_ref().trim()).collect();
        if items.is_empty() {
            return Ok(());
        }
        let row = items.join("\t");
        let malformed = |reason: &str| Error::MalformedRow {
            reason: reason.to_owned(),
            row: row.clone(),
        };

        let &[code, character, sequences, name] = items.as_slice() else {
            return Err(malformed("expected 4 columns"));
        };
        if !code.starts_with("U+") {
            return Err(malformed("code does not start with U+"));
        }
        if !sequences.starts_with('\\') {
            return Err(malformed("sequence does not start with a backslash"));
        }

        let (ok, character, code) = fix_character_and_code(character, code);
        let chars: Vec<char> = character.chars().collect();
        if !ok || chars.is_empty() || chars.len() > 2 {
            return Err(malformed("character does not match its code"));
        }
        if let &[first, second] = chars.as_slice() {
            let high = char::MAX as u32 >> 16;
            let second = second as u32;
            if first as u32 > 0xFFFF || second <= high || second > 0xFFFF {
                return Err(malformed("unsupported character pair"));
            }
        }

        for sequence in sequences.split(',').map(str::trim) {
            let sequence = match sequence.strip_prefix('\\') {
                Some(rest) if !rest.is_empty() => rest,
                _ => return Err(malformed("empty or unprefixed sequence")),
            };
            let (map, sequence) = if sequence.starts_with(':') {
                match sequence.strip_prefix(':').and_then(|s| s.strip_suffix(':')) {
                    Some(inner) if !inner.is_empty() => (&mut self.emoji, inner),
                    _ => return Err(malformed("unterminated emoji sequence")),
                }
            } else {
                (&mut self.latex, sequence)
            };
            if sequence.contains(':') {
                return Err(malformed("colon inside sequence"));
            }
            map.insert(
                sequence.to_owned(),
                InputInfo {
                    code: code.clone(),
                    character: character.clone(),
                    sequence: sequence.to_owned(),
                    name: name.to_owned(),
                },
            );
        }
        Ok(())
    }

    /// Reads a tab separated dump of the table, one row per line.
    pub fn parse_rows(text: &str) -> Result<Self> {
        let mut maps = SourceMaps::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let columns: Vec<&str> = line.split('\t').collect();
            maps.push_row(&columns)?;
        }
        Ok(maps)
    }
}

/// Rebuilds the character from the `U+` items of `code`. The displayed
/// character may have lost surrounding spaces, in which case it only has to
/// be contained in the rebuilt one.
fn fix_character_and_code(character: &str, code: &str) -> (bool, String, String) {
    static CODE_POINT: OnceLock<Regex> = OnceLock::new();
    let regex = CODE_POINT
        .get_or_init(|| Regex::new(r"U\+(\w+)").expect("code point pattern is valid"));

    let mut items = Vec::new();
    let mut ch = String::new();
    for capture in regex.captures_iter(code) {
        let item = &capture[1];
        match u32::from_str_radix(item, 16).ok().and_then(char::from_u32) {
            Some(c) => ch.push(c),
            None => return (false, ch, code.to_owned()),
        }
        items.push(format!("U+{}", item));
    }
    let code = items.join(" + ");
    let ok = if character.chars().count() != ch.chars().count() {
        ch.contains(character)
    } else {
        character == ch
    };
    (ok, ch, code)
}

pub fn load_map(path: &Path) -> Result<InputMap> {
    let json = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| Error::Json {
        path: path.to_owned(),
        source,
    })
}

/// Writes the checkpoint with tab indentation and unescaped characters.
pub fn save_map(path: &Path, map: &InputMap) -> Result<()> {
    let mut json = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut json, formatter);
    map.serialize(&mut serializer).map_err(|source| Error::Json {
        path: path.to_owned(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}
