//! Splitting flag strings into arguments.
//!
//! Whitespace (the C-locale set: space, `\t`, `\n`, `\v`, `\f`, `\r`)
//! separates tokens unless it appears between double quotes. Quote characters
//! only group; they are removed from the token, so `-DMSG="a b"` becomes the
//! single argument `-DMSG=a b`. There is no escape character.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{CmdError, Result};

/// Longest token kept by [`tokenize`], in bytes. Longer tokens are truncated.
pub const MAX_TOKEN_LEN: usize = 4095;

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// A scanned token: text capped at [`MAX_TOKEN_LEN`] plus its full length.
struct Scanned {
    text: String,
    full_len: usize,
}

struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Scanned;

    fn next(&mut self) -> Option<Scanned> {
        while self.chars.next_if(|c| is_separator(*c)).is_some() {}
        self.chars.peek()?;

        let mut text = String::new();
        let mut full_len = 0;
        let mut in_quote = false;
        while let Some(&c) = self.chars.peek() {
            if !in_quote && is_separator(c) {
                break;
            }
            self.chars.next();
            if c == '"' {
                in_quote = !in_quote;
                continue;
            }
            full_len += c.len_utf8();
            // Once a char is dropped, drop the rest too so the kept text is
            // always a prefix.
            if full_len <= MAX_TOKEN_LEN {
                text.push(c);
            }
        }
        Some(Scanned { text, full_len })
    }
}

/// Split `input` into arguments, truncating any token longer than
/// [`MAX_TOKEN_LEN`] bytes.
///
/// ```
/// use zenc_cmd::tokenize;
///
/// assert_eq!(tokenize(r#"-DFOO="a b" -O2"#), vec!["-DFOO=a b", "-O2"]);
/// ```
pub fn tokenize(input: &str) -> Vec<String> {
    Scanner::new(input).map(|token| token.text).collect()
}

/// Like [`tokenize`], but an over-long token is an error instead of being
/// truncated.
pub fn try_tokenize(input: &str) -> Result<Vec<String>> {
    Scanner::new(input)
        .map(|token| {
            if token.full_len > MAX_TOKEN_LEN {
                Err(CmdError::TokenTooLong {
                    len: token.full_len,
                    max: MAX_TOKEN_LEN,
                    prefix: token.text.chars().take(32).collect(),
                })
            } else {
                Ok(token.text)
            }
        })
        .collect()
}
