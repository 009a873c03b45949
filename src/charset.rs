use crate::error::{Error, Result};
use crate::output::{quote_c_char, Output};
use crate::{EMOJI, EMOJI_PREFIX, EMOJI_SUFFIX, LATEX};
use std::collections::BTreeSet;
use tracing::{info, warn};

const CHUNK: usize = 5;

/// Punctuation that may appear inside an input sequence, beyond the ASCII
/// letters and digits the run-time accepts with range checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Charset {
    pub latex: Vec<char>,
    /// Emoji punctuation not already accepted for LaTeX.
    pub emoji: Vec<char>,
}

impl Charset {
    pub fn build<'a, L, E>(latex_keys: L, emoji_keys: E) -> Result<Self>
    where
        L: IntoIterator<Item = &'a String>,
        E: IntoIterator<Item = &'a String>,
    {
        let latex = punctuation(latex_keys.into_iter().flat_map(|key| key.chars()));
        let emoji = punctuation(
            emoji_keys
                .into_iter()
                .flat_map(|key| key.chars())
                .chain(EMOJI_PREFIX.chars())
                .chain(EMOJI_SUFFIX.chars()),
        );

        validate(LATEX.name, &latex)?;
        validate(EMOJI.name, &emoji)?;
        info!("{} punctuation: {:?}", LATEX.name, latex);
        info!("{} punctuation: {:?}", EMOJI.name, emoji);

        let emoji = emoji.difference(&latex).copied().collect();
        Ok(Charset {
            latex: latex.into_iter().collect(),
            emoji,
        })
    }

    /// `IsLaTeXInputSequenceChar()`, preceded by an empty line.
    pub fn predicate(&self) -> Output {
        let mut out = Output::new();
        writeln!(out);
        writeln!(out, "static inline bool IsLaTeXInputSequenceChar(char ch) {{");
        writeln!(out, "\treturn (ch >= 'a' && ch <= 'z')");
        writeln!(out, "\t\t|| (ch >= 'A' && ch <= 'Z')");
        writeln!(out, "\t\t|| (ch >= '0' && ch <= '9')");
        writeln!(out, "{}", char_equals(&self.latex));
        writeln!(out, "#if EnableLaTeXLikeEmojiInput");
        writeln!(out, "{}", char_equals(&self.emoji));
        writeln!(out, "#endif");
        writeln!(out, "\t;");
        writeln!(out, "}}");
        out
    }
}

fn punctuation(chars: impl Iterator<Item = char>) -> BTreeSet<char> {
    chars.filter(|ch| !ch.is_ascii_alphanumeric()).collect()
}

fn validate(dataset: &str, charset: &BTreeSet<char>) -> Result<()> {
    let invalid: Vec<char> = charset
        .iter()
        .copied()
        .filter(|ch| !ch.is_ascii_punctuation())
        .collect();
    if invalid.is_empty() {
        return Ok(());
    }
    let codes: Vec<u32> = invalid.iter().map(|&ch| ch as u32).collect();
    warn!("Invalid {} character: {:?} {:?}", dataset, invalid, codes);
    Err(Error::InvalidCharacters {
        dataset: dataset.to_owned(),
        chars: invalid,
    })
}

fn char_equals(charset: &[char]) -> String {
    charset
        .chunks(CHUNK)
        .map(|chunk| {
            let line: Vec<String> = chunk
                .iter()
                .map(|&ch| format!("ch == {}", quote_c_char(ch)))
                .collect();
            format!("\t\t|| {}", line.join(" || "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
