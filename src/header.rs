use crate::charset::Charset;
use crate::error::{Error, Result};
use crate::output::Output;
use crate::source::InputMap;
use crate::{EMOJI, EMOJI_PREFIX, EMOJI_SUFFIX, LATEX};
use tracing::{debug, info};

const VERSION_COMMENT: &str = "// input sequences based on ";
const LINK_COMMENT: &str = "// documented at ";

/// Sequence length bounds of one dataset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SizeInfo {
    pub count: usize,
    /// Bytes of all sequences plus one separator each.
    pub content: usize,
    pub min_len: usize,
    pub max_len: usize,
}

impl SizeInfo {
    pub fn of(dataset: &str, map: &InputMap) -> Result<Self> {
        let lengths = map.keys().map(String::len);
        let (min_len, max_len) = match (lengths.clone().min(), lengths.clone().max()) {
            (Some(min), Some(max)) => (min, max),
            _ => {
                return Err(Error::EmptyDataset {
                    dataset: dataset.to_owned(),
                })
            }
        };
        let info = SizeInfo {
            count: map.len(),
            content: lengths.sum::<usize>() + map.len(),
            min_len,
            max_len,
        };
        info!(
            "{} count: {} content: {} length: ({}, {})",
            dataset, info.count, info.content, info.min_len, info.max_len,
        );
        Ok(info)
    }
}

/// The header region: length limits for the input buffer followed by the
/// character classification predicate.
pub fn header_block(
    version: Option<&str>,
    link: Option<&str>,
    latex: &InputMap,
    emoji: &InputMap,
    charset: &Charset,
) -> Result<Output> {
    let latex_size = SizeInfo::of(LATEX.name, latex)?;
    let emoji_size = SizeInfo::of(EMOJI.name, emoji)?;
    debug!("{} punctuation: {:?}", LATEX.name, words_with_punctuation(latex));
    debug!("{} punctuation: {:?}", EMOJI.name, words_with_punctuation(emoji));

    let mut out = Output::new();
    if let Some(version) = version {
        writeln!(out, "{}{}", VERSION_COMMENT, version);
    }
    if let Some(link) = link {
        writeln!(out, "{}{}", LINK_COMMENT, link);
    }
    writeln!(out);

    writeln!(out, "enum {{");
    writeln!(out, "\tMinLaTeXInputSequenceLength = {},", latex_size.min_len);
    writeln!(out, "\tMaxLaTeXInputSequenceLength = {},", latex_size.max_len);
    writeln!(out);

    writeln!(out, "#if EnableLaTeXLikeEmojiInput");
    writeln!(out, "\tEmojiInputSequencePrefixLength = {},", EMOJI_PREFIX.len());
    writeln!(out, "\tEmojiInputSequenceSuffixLength = {},", EMOJI_SUFFIX.len());
    writeln!(
        out,
        "\tMinEmojiInputSequenceLength = {} + EmojiInputSequencePrefixLength, // suffix is optional",
        emoji_size.min_len,
    );
    writeln!(
        out,
        "\tMaxEmojiInputSequenceLength = {} + EmojiInputSequencePrefixLength + EmojiInputSequenceSuffixLength,",
        emoji_size.max_len,
    );
    writeln!(out);
    let longest = if latex_size.max_len >= emoji_size.max_len + EMOJI_PREFIX.len() + EMOJI_SUFFIX.len() {
        LATEX.name
    } else {
        EMOJI.name
    };
    writeln!(out, "\tMaxLaTeXInputBufferLength = 1 + Max{}InputSequenceLength + 1,", longest);
    writeln!(out, "#else");
    writeln!(out, "\tMaxLaTeXInputBufferLength = 1 + MaxLaTeXInputSequenceLength + 1,");
    writeln!(out, "#endif");
    writeln!(out, "}};");

    write!(out, "{}", charset.predicate().as_str());
    Ok(out)
}

/// The version and link comments of a previously generated header region,
/// so a run without them does not erase them.
pub fn source_comments<'a>(region: &[&'a str]) -> (Option<&'a str>, Option<&'a str>) {
    let find = |prefix: &'static str| region.iter().find_map(|&line| line.strip_prefix(prefix));
    (find(VERSION_COMMENT), find(LINK_COMMENT))
}

/// Sequences containing punctuation other than `_`, for review.
fn words_with_punctuation(map: &InputMap) -> Vec<&str> {
    map.keys()
        .filter(|key| key.chars().any(|ch| ch.is_ascii_punctuation() && ch != '_'))
        .map(String::as_str)
        .collect()
}
