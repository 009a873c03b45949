use crate::error::{Error, Result};
use crate::output::{escape_c_string, Output};
use crate::table::HashTable;
use tracing::info;

/// The two regions generated for one dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRegions {
    /// Hash index and sequence descriptor arrays, spliced at `//{name} hash`.
    pub hash: Output,
    /// Content literals, spliced at `//{name} sequences`.
    pub sequences: Output,
    pub summary: TableSummary,
}

/// Size figures printed for human review.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableSummary {
    pub count: usize,
    pub content: usize,
    /// Bytes of the hash index.
    pub hash_bytes: usize,
    /// Bytes of the descriptor array.
    pub entry_bytes: usize,
    pub max_magic_run: usize,
    pub total: usize,
}

/// The code units stored in a descriptor: a BMP character as is, otherwise
/// the first UTF-16 unit in the low half and the second in the high half.
/// `None` if the character needs more than two units.
pub fn encode_character(character: &str) -> Option<u32> {
    let mut units = character.encode_utf16();
    let first = u32::from(units.next()?);
    match (units.next(), units.next()) {
        (None, _) => Some(first),
        (Some(second), None) => Some(u32::from(second) << 16 | first),
        (Some(_), Some(_)) => None,
    }
}

fn code_literal(value: u32) -> String {
    if value > 0xFFFF {
        format!("0x{:04X}'{:04X}", value >> 16, value & 0xFFFF)
    } else {
        format!("0x{:04X}", value)
    }
}

pub fn table_regions(table: &HashTable) -> Result<TableRegions> {
    let name = table.config.name;

    let mut hash = Output::new();
    writeln!(hash, "static const uint16_t {}HashTable[] = {{", name);
    for value in &table.table {
        writeln!(hash, "0x{:04x},", value);
    }
    writeln!(hash, "}};");
    writeln!(hash);

    writeln!(hash, "static const InputSequence {}SequenceList[] = {{", name);
    for entry in &table.entries {
        let key = &entry.key;
        let value = encode_character(&key.character).ok_or_else(|| Error::InvalidSequence {
            dataset: name.to_owned(),
            sequence: key.sequence.clone(),
            reason: "maps to more than two UTF-16 code units",
        })?;
        let mut chars = key.character.chars();
        let character = match (chars.next(), chars.next()) {
            (Some(ch), None) if value > 0xFFFF => format!("U+{:X}, {}", ch as u32, key.character),
            _ => key.character.clone(),
        };
        writeln!(
            hash,
            "{{0x{:04x}, 0x{:04x}, {}}}, // {}, {}{}{}, {}",
            key.magic,
            entry.offset,
            code_literal(value),
            character,
            table.config.prefix,
            key.sequence,
            table.config.suffix,
            key.name,
        );
    }
    writeln!(hash, "}};");

    let mut sequences = Output::new();
    let last = table.segments.len().saturating_sub(1);
    for (index, segment) in table.segments.iter().enumerate() {
        let text = escape_c_string(&table.content[segment.clone()]);
        let terminator = if index == last { ";" } else { "" };
        writeln!(sequences, "\"{}\"{}", text, terminator);
    }

    let count = table.entries.len();
    let summary = TableSummary {
        count,
        content: table.content.len(),
        hash_bytes: 2 * table.size(),
        entry_bytes: 8 * count,
        max_magic_run: table.max_magic_run,
        total: table.content.len() + 2 * table.size() + 8 * count,
    };
    info!(
        "{} count: {} content: {} map: ({}, {}, {}) total: ({}, {:.2})",
        name,
        summary.count,
        summary.content,
        summary.hash_bytes,
        summary.entry_bytes,
        summary.max_magic_run,
        summary.total,
        summary.total as f64 / 1024.0,
    );

    Ok(TableRegions {
        hash,
        sequences,
        summary,
    })
}
