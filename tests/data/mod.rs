#![allow(dead_code)]

use latex_input::{InputInfo, InputMap};

pub fn map(items: &[(&str, &str, &str)]) -> InputMap {
    items
        .iter()
        .map(|&(sequence, character, name)| {
            let code = character
                .chars()
                .map(|ch| format!("U+{:04X}", ch as u32))
                .collect::<Vec<_>>()
                .join(" + ");
            let info = InputInfo {
                code,
                character: character.to_owned(),
                sequence: sequence.to_owned(),
                name: name.to_owned(),
            };
            (sequence.to_owned(), info)
        })
        .collect()
}

/// Two and three letter sequences plus a few with punctuation, enough to
/// spread over a few hundred buckets.
pub fn latex_map() -> InputMap {
    let letters = 'a'..='z';
    let mut items = Vec::new();
    for a in letters.clone() {
        for b in letters.clone() {
            items.push(format!("{}{}", a, b));
        }
        items.push(format!("^{}", a));
        items.push(format!("_{}", a));
        items.push(format!("bf{}", a.to_ascii_uppercase()));
    }
    let items: Vec<(String, char)> = items
        .into_iter()
        .enumerate()
        .map(|(i, sequence)| (sequence, char::from_u32(0x2100 + i as u32).unwrap()))
        .collect();
    let mut map = InputMap::new();
    for (sequence, ch) in items {
        let character = ch.to_string();
        let info = InputInfo {
            code: format!("U+{:04X}", ch as u32),
            character,
            sequence: sequence.clone(),
            name: format!("SYMBOL {}", sequence.to_uppercase()),
        };
        map.insert(sequence, info);
    }
    map
}

pub fn emoji_map() -> InputMap {
    map(&[
        ("smile", "😄", "SMILING FACE WITH OPEN MOUTH AND SMILING EYES"),
        ("grin", "😁", "GRINNING FACE WITH SMILING EYES"),
        ("joy", "😂", "FACE WITH TEARS OF JOY"),
        ("heart", "❤", "HEAVY BLACK HEART"),
        ("+1", "👍", "THUMBS UP SIGN"),
        ("-1", "👎", "THUMBS DOWN SIGN"),
        ("wave", "👋", "WAVING HAND SIGN"),
        ("cat", "🐈", "CAT"),
        ("dog", "🐕", "DOG"),
        ("grinning", "😀", "GRINNING FACE"),
    ])
}
