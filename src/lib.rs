//! Generator for the LaTeX and emoji input sequence tables used by the
//! editor's input method.
//!
//! Each dataset is turned into three flat arrays joined only by indices: a
//! hash index of 16-bit `(start << 4) | count` words, a list of sequence
//! descriptors `(magic, offset, code units)`, and one packed content buffer
//! holding the sequence text. The arrays are emitted as C literals and
//! spliced into the editor's source by [`regenerate()`].

mod charset;
mod emit;
mod error;
mod header;
mod key;
mod output;
mod regenerate;
mod size;
mod source;
mod table;

pub use crate::charset::Charset;
pub use crate::emit::{encode_character, table_regions, TableRegions, TableSummary};
pub use crate::error::{Error, Result};
pub use crate::header::{header_block, source_comments, SizeInfo};
pub use crate::key::{djb2_hash, magic, normalize, Key};
pub use crate::output::Output;
pub use crate::regenerate::{read_file, regenerate, region, update_file};
pub use crate::size::{initial_hash_size, select_hash_size, HashSize, HashStats};
pub use crate::source::{load_map, save_map, InputInfo, InputMap, SourceMaps};
pub use crate::table::{Entry, HashTable, Layout};

/// A bucket holds at most this many entries minus one: the count lives in
/// the low 4 bits of a table slot.
pub const COLLISION_LIMIT: usize = 16;

/// Smallest table size searched, the span of printable ASCII letters.
pub const MIN_HASH_SIZE: usize = (b'z' - b' ') as usize;

/// Compiled-in settings for one dataset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DatasetConfig {
    /// Used in the emitted array names and the region markers.
    pub name: &'static str,
    /// What the user types before the sequence.
    pub prefix: &'static str,
    /// What the user types after the sequence.
    pub suffix: &'static str,
    /// Upper bound of the table size search.
    pub max_hash_size: usize,
}

pub const LATEX: DatasetConfig = DatasetConfig {
    name: "LaTeX",
    prefix: "\\",
    suffix: "",
    max_hash_size: 512,
};

pub const EMOJI: DatasetConfig = DatasetConfig {
    name: "Emoji",
    prefix: "\\:",
    suffix: ":",
    max_hash_size: 128,
};

/// Characters around an emoji shortcode that the run-time input buffer
/// must also accept, without the leading backslash.
pub const EMOJI_PREFIX: &str = ":";
pub const EMOJI_SUFFIX: &str = ":";

/// Builds one dataset end to end: normalize, pick a table size, bucket and
/// pack.
pub fn build_dataset(config: &DatasetConfig, map: &InputMap, layout: Layout) -> Result<HashTable> {
    let keys = key::normalize(config, map)?;
    let min_size = size::initial_hash_size(keys.len());
    let chosen = size::select_hash_size(config.name, &keys, min_size..=config.max_hash_size)?;
    HashTable::build(config, keys, chosen.size, layout)
}
