use crate::error::{Error, Result};
use crate::key::{djb2_hash, magic, Key};
use crate::{DatasetConfig, COLLISION_LIMIT};
use std::ops::Range;

/// How sequence text is packed into the content buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Every sequence in full, each followed by a space. Offsets skip the
    /// first byte.
    #[default]
    Full,
    /// Drops the first byte of every sequence (it is in `magic`) and the
    /// separator. The run-time must slice by the length from `magic`.
    LookupOnly,
}

/// A key placed in the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: Key,
    /// Bucket index.
    pub hash: usize,
    /// Where `sequence[1..]` starts in the content buffer.
    pub offset: u16,
}

impl Entry {
    /// Length of the sequence tail stored at `offset`.
    pub fn tail_len(&self) -> usize {
        usize::from(self.key.magic & 0xFF) - 1
    }
}

/// One dataset's generated tables.
///
/// `table`, `entries` and `content` are independent flat arrays: a table
/// slot packs `(start << 4) | count` into `entries`, and each entry points
/// into `content` by offset.
#[derive(Clone, Debug)]
pub struct HashTable {
    pub config: DatasetConfig,
    pub layout: Layout,
    pub table: Vec<u16>,
    pub entries: Vec<Entry>,
    pub content: String,
    /// The slice of `content` belonging to each non-empty bucket, in
    /// bucket order.
    pub segments: Vec<Range<usize>>,
    /// Longest run of entries sharing one `magic` within a bucket, the
    /// worst case number of string comparisons at lookup.
    pub max_magic_run: usize,
}

impl HashTable {
    pub fn build(config: &DatasetConfig, keys: Vec<Key>, size: usize, layout: Layout) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptySizeRange {
                dataset: config.name.to_owned(),
                min: 0,
                max: 0,
            });
        }
        let mut buckets: Vec<Vec<Key>> = vec![Vec::new(); size];
        for key in keys {
            let hash = djb2_hash(key.hash_key()) as usize % size;
            buckets[hash].push(key);
        }

        let mut table = vec![0u16; size];
        let mut entries = Vec::new();
        let mut content = String::new();
        let mut segments = Vec::new();
        let mut max_magic_run = 0;

        for (hash, mut items) in buckets.into_iter().enumerate() {
            if items.is_empty() {
                continue;
            }
            items.sort_by(|a, b| (a.magic, a.hash_key()).cmp(&(b.magic, b.hash_key())));
            max_magic_run = max_magic_run.max(longest_magic_run(&items));

            let start = entries.len();
            let count = items.len();
            let value = start << 4 | count;
            if count >= COLLISION_LIMIT || value > usize::from(u16::MAX) {
                return Err(Error::BucketOverflow {
                    dataset: config.name.to_owned(),
                    bucket: hash,
                    count,
                    start,
                });
            }
            table[hash] = value as u16;

            let segment_start = content.len();
            for key in items {
                let position = content.len();
                let offset = match layout {
                    Layout::Full => {
                        content.push_str(&key.sequence);
                        content.push(' ');
                        position + 1
                    }
                    Layout::LookupOnly => {
                        let tail = key.sequence.get(1..).ok_or_else(|| Error::InvalidSequence {
                            dataset: config.name.to_owned(),
                            sequence: key.sequence.clone(),
                            reason: "does not start with an ASCII character",
                        })?;
                        content.push_str(tail);
                        position
                    }
                };
                let offset = u16::try_from(offset).map_err(|_| Error::ContentOverflow {
                    dataset: config.name.to_owned(),
                    sequence: key.sequence.clone(),
                    offset,
                })?;
                entries.push(Entry { key, hash, offset });
            }
            segments.push(segment_start..content.len());
        }

        Ok(HashTable {
            config: *config,
            layout,
            table,
            entries,
            content,
            segments,
            max_magic_run,
        })
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// The entries of one bucket, as the run-time sees them.
    pub fn bucket(&self, hash: usize) -> &[Entry] {
        let value = usize::from(self.table[hash]);
        let start = value >> 4;
        let count = value & 0xF;
        &self.entries[start..start + count]
    }

    /// The stored tail of an entry's sequence.
    pub fn tail(&self, entry: &Entry) -> &[u8] {
        let start = usize::from(entry.offset);
        &self.content.as_bytes()[start..start + entry.tail_len()]
    }

    /// Finds `sequence` using only the table, the magic words and the
    /// content buffer.
    pub fn lookup(&self, sequence: &str) -> Option<&Entry> {
        let buf = sequence.as_bytes();
        let magic = magic(buf)?;
        if self.table.is_empty() {
            return None;
        }
        let hash = djb2_hash(buf) as usize % self.size();
        self.bucket(hash)
            .iter()
            .filter(|entry| entry.key.magic == magic)
            .find(|entry| self.tail(entry) == &buf[1..])
    }
}

fn longest_magic_run(items: &[Key]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut prev = None;
    for item in items {
        if prev == Some(item.magic) {
            run += 1;
        } else {
            run = 1;
        }
        prev = Some(item.magic);
        longest = longest.max(run);
    }
    longest
}
