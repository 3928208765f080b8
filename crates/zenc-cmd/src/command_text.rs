//! Human-readable command rendering.
//!
//! [`CommandText`] builds the space-joined form of a command for logs and
//! `--verbose` output. It is never executed; [`crate::ArgList`] is what runs.

use std::fmt::{self, Write as _};

/// Starting capacity, in bytes.
pub const INITIAL_CAPACITY: usize = 1024;

/// An append-only, space-separated command string.
///
/// Capacity doubles until an append fits; appended text is never moved or
/// altered by growth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandText {
    buf: String,
    cap: usize,
}

impl CommandText {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(INITIAL_CAPACITY),
            cap: INITIAL_CAPACITY,
        }
    }

    /// Append `token`, preceded by a space unless the text is empty or
    /// already ends in one. Empty tokens are ignored.
    pub fn push(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.reserve_token(token.len());
        self.push_separator();
        self.buf.push_str(token);
    }

    /// Append formatted text as one token.
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(token) => self.push(token),
            None => {
                let mut token = String::new();
                // Writing into a String cannot fail.
                let _ = token.write_fmt(args);
                self.push(&token);
            }
        }
    }

    /// The text so far. Valid until the next mutating call.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current capacity under the doubling policy.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    /// Grow so that a separator, `len` bytes, and a terminator fit.
    fn reserve_token(&mut self, len: usize) {
        let needed = len + 2;
        if self.buf.len() + needed < self.cap {
            return;
        }
        while self.buf.len() + needed >= self.cap {
            self.cap *= 2;
        }
        self.buf.reserve(self.cap - self.buf.len());
    }

    fn push_separator(&mut self) {
        if !self.buf.is_empty() && !self.buf.ends_with(' ') {
            self.buf.push(' ');
        }
    }
}

impl Default for CommandText {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommandText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl AsRef<str> for CommandText {
    fn as_ref(&self) -> &str {
        &self.buf
    }
}
