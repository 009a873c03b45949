use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that aborts a generation run.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No candidate table size keeps every bucket below the collision limit.
    #[error("{dataset}: best hash table size {size} still has {max_collision} keys in one bucket (limit {limit}), enlarge max_hash_size")]
    CollisionLimit {
        dataset: String,
        size: usize,
        max_collision: usize,
        limit: usize,
    },

    #[error("{dataset}: hash table size range {min}..={max} is empty")]
    EmptySizeRange {
        dataset: String,
        min: usize,
        max: usize,
    },

    /// The packed `(start << 4) | count` value does not fit in 16 bits.
    #[error("{dataset}: bucket {bucket} with {count} entries starting at {start} does not fit in a 16-bit table slot")]
    BucketOverflow {
        dataset: String,
        bucket: usize,
        count: usize,
        start: usize,
    },

    #[error("{dataset}: content offset {offset} for {sequence:?} does not fit in 16 bits")]
    ContentOverflow {
        dataset: String,
        sequence: String,
        offset: usize,
    },

    #[error("{dataset}: input sequence {sequence:?} {reason}")]
    InvalidSequence {
        dataset: String,
        sequence: String,
        reason: &'static str,
    },

    #[error("{dataset}: invalid input sequence characters {chars:?} (code points {codes:?})", codes = code_points(.chars))]
    InvalidCharacters { dataset: String, chars: Vec<char> },

    #[error("{dataset}: no input sequences")]
    EmptyDataset { dataset: String },

    #[error("malformed row ({reason}): {row}")]
    MalformedRow { reason: String, row: String },

    #[error("no `{prefix}++Autogenerated` .. `{prefix}--Autogenerated` region")]
    MissingMarker { prefix: String },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn code_points(chars: &[char]) -> Vec<u32> {
    chars.iter().map(|&ch| ch as u32).collect()
}
