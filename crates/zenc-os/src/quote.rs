//! Windows command-line quoting.
//!
//! Windows process creation takes one command line instead of an argument
//! vector, so each argument is quoted before joining. The rule is the
//! simplified one sufficient for compiler flags:
//!
//! - an argument without space, tab, newline, vertical tab, or `"` is passed
//!   through unchanged;
//! - otherwise it is wrapped in `"` and every embedded `"` becomes `\"`.
//!
//! Backslash runs are not doubled, so an argument ending in `\` that needs
//! quoting (e.g. `C:\My Dir\`) is not reproduced exactly by
//! `CommandLineToArgvW`. Empty arguments are written as `""` so they survive
//! the join.
//!
//! These functions are pure and compiled on every host.

use std::borrow::Cow;

fn needs_quoting(arg: &str) -> bool {
    arg.is_empty()
        || arg
            .chars()
            .any(|c| matches!(c, ' ' | '\t' | '\n' | '\x0b' | '"'))
}

/// Quote one argument for a Windows command line.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    if !needs_quoting(arg) {
        return Cow::Borrowed(arg);
    }
    let embedded = arg.matches('"').count();
    let mut quoted = String::with_capacity(arg.len() + embedded + 2);
    quoted.push('"');
    for c in arg.chars() {
        if c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Quote every argument and join them with single spaces.
pub fn join_command_line<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|arg| quote_arg(arg.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a command line produced by [`join_command_line`] back into
/// arguments.
///
/// Spaces and tabs outside quotes separate arguments, `"` toggles quoting,
/// and `\"` is a literal quote. Any other backslash is literal.
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut in_quote = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
                in_arg = true;
            }
            '"' => {
                in_quote = !in_quote;
                in_arg = true;
            }
            ' ' | '\t' if !in_quote => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            _ => {
                current.push(c);
                in_arg = true;
            }
        }
    }
    if in_arg {
        args.push(current);
    }
    args
}
