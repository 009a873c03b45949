use crate::error::{Error, Result};
use crate::source::InputMap;
use crate::DatasetConfig;

/// One input sequence ready to be hashed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Key {
    pub sequence: String,
    /// One code point, or a pair of BMP code points.
    pub character: String,
    pub code: String,
    pub name: String,
    /// Byte length in the low byte, first byte in the high byte.
    pub magic: u16,
}

impl Key {
    pub fn hash_key(&self) -> &[u8] {
        self.sequence.as_bytes()
    }
}

/// The string hash shared with the run-time lookup. Starts from zero and
/// wraps like a C `unsigned int`.
pub fn djb2_hash(buf: &[u8]) -> u32 {
    buf.iter()
        .fold(0u32, |value, &ch| value.wrapping_mul(33).wrapping_add(u32::from(ch)))
}

/// `None` when the sequence is empty or too long for the length byte.
pub fn magic(buf: &[u8]) -> Option<u16> {
    let (&first, _) = buf.split_first()?;
    let len = u8::try_from(buf.len()).ok()?;
    Some(u16::from(len) | u16::from(first) << 8)
}

/// Turns the loaded map into keys, in map (sequence) order.
pub fn normalize(config: &DatasetConfig, map: &InputMap) -> Result<Vec<Key>> {
    map.iter()
        .map(|(sequence, info)| {
            let magic = magic(sequence.as_bytes()).ok_or_else(|| Error::InvalidSequence {
                dataset: config.name.to_owned(),
                sequence: sequence.clone(),
                reason: if sequence.is_empty() {
                    "is empty"
                } else {
                    "is longer than 255 bytes"
                },
            })?;
            Ok(Key {
                sequence: sequence.clone(),
                character: info.character.clone(),
                code: info.code.clone(),
                name: info.name.clone(),
                magic,
            })
        })
        .collect()
}
