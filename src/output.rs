use std::fmt;

/// Text of one generated region, built with `write!`/`writeln!`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Output(String);

impl Output {
    pub fn new() -> Self {
        Output(String::new())
    }

    pub fn write_fmt(&mut self, arguments: fmt::Arguments) {
        fmt::Write::write_fmt(&mut self.0, arguments).unwrap();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Output {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Escapes `ch` for a C character or string literal.
pub(crate) fn escape_c_char(ch: char) -> String {
    match ch {
        '\\' | '\'' | '"' => format!("\\{}", ch),
        ' '..='~' => ch.to_string(),
        _ if (ch as u32) < 0x100 => format!("\\x{:02x}", ch as u32),
        _ => ch.to_string(),
    }
}

pub(crate) fn quote_c_char(ch: char) -> String {
    format!("'{}'", escape_c_char(ch))
}

/// Escapes `text` for a C string literal without changing its bytes.
/// Control characters use three digit octal escapes, which cannot swallow a
/// following character the way `\x` does.
pub(crate) fn escape_c_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '"' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '\0'..='\x1f' | '\x7f' => escaped.push_str(&format!("\\{:03o}", ch as u32)),
            _ => escaped.push(ch),
        }
    }
    escaped
}
