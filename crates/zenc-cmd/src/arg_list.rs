//! Owned argument vectors.

use std::fmt::{self, Write as _};

use tracing::debug;
use zenc_os::host::{Host, NativeHost};

use crate::command_text::CommandText;
use crate::error::Result;
use crate::tokenize::{tokenize, try_tokenize};

/// Starting capacity, in slots (arguments plus the null marker).
pub const INITIAL_CAPACITY: usize = 32;

/// An ordered list of owned process arguments.
///
/// The slot after the last argument is always an empty marker, mirroring the
/// null-terminated `argv` handed to process creation. Capacity doubles when
/// the next argument and its marker would not fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgList {
    slots: Vec<Option<String>>,
    cap: usize,
}

impl ArgList {
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(INITIAL_CAPACITY);
        slots.push(None);
        Self {
            slots,
            cap: INITIAL_CAPACITY,
        }
    }

    /// Append one argument. An empty string is a real (empty) argument.
    pub fn push(&mut self, arg: impl Into<String>) {
        let count = self.len();
        if count + 1 >= self.cap {
            self.cap *= 2;
            self.slots.reserve_exact(self.cap - self.slots.len());
        }
        self.slots[count] = Some(arg.into());
        self.slots.push(None);
    }

    /// Append `arg` if present. `None` adds nothing; `Some("")` adds an empty
    /// argument.
    pub fn push_opt(&mut self, arg: Option<&str>) {
        if let Some(arg) = arg {
            self.push(arg);
        }
    }

    /// Append formatted text as one argument.
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) {
        let mut arg = String::new();
        // Writing into a String cannot fail.
        let _ = arg.write_fmt(args);
        self.push(arg);
    }

    /// Split `flags` with [`tokenize`] and append each token. Tokens longer
    /// than [`crate::MAX_TOKEN_LEN`] bytes are truncated.
    pub fn add_from_string(&mut self, flags: &str) {
        for token in tokenize(flags) {
            self.push(token);
        }
    }

    /// Like [`ArgList::add_from_string`], but rejects over-long tokens.
    /// Nothing is appended on error.
    pub fn try_add_from_string(&mut self, flags: &str) -> Result<()> {
        for token in try_tokenize(flags)? {
            self.push(token);
        }
        Ok(())
    }

    /// Number of arguments, not counting the marker.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current capacity in slots under the doubling policy.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The argument at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index)?.as_deref()
    }

    /// Raw slot access: `Some(None)` is the marker at `len()`, `None` is past
    /// the end of the vector.
    pub fn slot(&self, index: usize) -> Option<Option<&str>> {
        self.slots.get(index).map(Option::as_deref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map_while(Option::as_deref)
    }

    pub fn contains(&self, arg: &str) -> bool {
        self.iter().any(|a| a == arg)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    /// Render the arguments space-joined, for display.
    pub fn to_command_text(&self) -> CommandText {
        let mut text = CommandText::new();
        for arg in self.iter() {
            text.push(arg);
        }
        text
    }

    /// Execute on the native host. See [`ArgList::run_on`].
    pub fn run(&self) -> i32 {
        self.run_on(&NativeHost::default())
    }

    /// Execute the first argument as a program with the rest as its
    /// arguments, wait, and return the exit status (`-1` on spawn failure or
    /// abnormal termination).
    pub fn run_on(&self, host: &impl Host) -> i32 {
        debug!(host = host.name(), command = %self.to_command_text(), "running");
        let argv: Vec<&str> = self.iter().collect();
        host.run_command(&argv)
    }
}

impl Default for ArgList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&ArgList> for CommandText {
    fn from(list: &ArgList) -> Self {
        list.to_command_text()
    }
}

impl<S: Into<String>> FromIterator<S> for ArgList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ArgList::new();
        list.extend(iter);
        list
    }
}

impl<S: Into<String>> Extend<S> for ArgList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for arg in iter {
            self.push(arg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records the argv it is asked to run.
    #[derive(Default)]
    struct RecordingHost {
        seen: RefCell<Vec<Vec<String>>>,
    }

    impl Host for RecordingHost {
        fn name(&self) -> &'static str {
            "recording"
        }
        fn enable_virtual_terminal(&self) {}
        fn is_tty(&self, _fd: i32) -> bool {
            false
        }
        fn raw_temp_dir(&self) -> Option<String> {
            None
        }
        fn temp_dir_fallback(&self) -> &'static str {
            "/tmp"
        }
        fn run_command(&self, argv: &[&str]) -> i32 {
            self.seen
                .borrow_mut()
                .push(argv.iter().map(|a| a.to_string()).collect());
            42
        }
    }

    #[test]
    fn starts_empty_with_marker() {
        let list = ArgList::new();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), INITIAL_CAPACITY);
        assert_eq!(list.slot(0), Some(None));
        assert_eq!(list.slot(1), None);
    }

    #[test]
    fn marker_follows_every_append() {
        let mut list = ArgList::new();
        let inputs: Vec<String> = (0..100).map(|i| format!("arg{i}")).collect();
        for (n, arg) in inputs.iter().enumerate() {
            list.push(arg.as_str());
            assert_eq!(list.len(), n + 1);
            assert_eq!(list.slot(n + 1), Some(None), "marker after {} args", n + 1);
            assert!(list.len() < list.capacity());
        }
        assert_eq!(list.to_vec(), inputs);
    }

    #[test]
    fn arguments_are_owned_copies() {
        let mut list = ArgList::new();
        let mut source = String::from("-O2");
        list.push(source.as_str());
        source.push_str("-changed");
        assert_eq!(list.get(0), Some("-O2"));
    }

    #[test]
    fn capacity_doubles() {
        let mut list = ArgList::new();
        // 31 arguments plus the marker fill the first 32 slots exactly.
        for i in 0..31 {
            list.push(i.to_string());
        }
        assert_eq!(list.capacity(), 32);
        list.push("31");
        assert_eq!(list.capacity(), 64);
        for i in 32..64 {
            list.push(i.to_string());
        }
        assert_eq!(list.capacity(), 128);
        assert_eq!(list.get(0), Some("0"));
        assert_eq!(list.get(63), Some("63"));
        assert_eq!(list.slot(64), Some(None));
    }

    #[test]
    fn none_is_skipped_but_empty_is_kept() {
        let mut list = ArgList::new();
        list.push_opt(None);
        assert!(list.is_empty());
        list.push_opt(Some(""));
        list.push("");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Some(""));
        assert_eq!(list.slot(2), Some(None));
    }

    #[test]
    fn renders_as_command_text() {
        let list: ArgList = ["gcc", "-o", "out.bin", "out.c"].into_iter().collect();
        let text = CommandText::from(&list);
        assert_eq!(text.as_str(), "gcc -o out.bin out.c");
        assert_eq!(text, list.to_command_text());
    }

    #[test]
    fn formatted_arguments() {
        let mut list = ArgList::new();
        list.push_fmt(format_args!("-I{}/std", "/opt/zenc"));
        assert_eq!(list.get(0), Some("-I/opt/zenc/std"));
    }

    #[test]
    fn add_from_string_tokenizes() {
        let mut list = ArgList::new();
        list.add_from_string("-DFOO=\"a b\" -O2");
        list.add_from_string("");
        assert_eq!(list.to_vec(), vec!["-DFOO=a b", "-O2"]);
    }

    #[test]
    fn strict_add_is_all_or_nothing() {
        let mut list = ArgList::new();
        let long = "z".repeat(crate::MAX_TOKEN_LEN + 1);
        assert!(list.try_add_from_string(&format!("-O2 {long}")).is_err());
        assert!(list.is_empty());
        list.try_add_from_string("-O2 -g").unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn runs_through_host() {
        let host = RecordingHost::default();
        let list: ArgList = ["cc", "-o", "out file", "main.c"].into_iter().collect();
        assert_eq!(list.run_on(&host), 42);
        assert_eq!(
            host.seen.borrow().as_slice(),
            &[vec!["cc", "-o", "out file", "main.c"]]
        );
    }

    #[test]
    fn renders_command_text() {
        let list: ArgList = ["gcc", "-c", "x.c"].into_iter().collect();
        assert_eq!(list.to_command_text().as_str(), "gcc -c x.c");
        assert!(list.contains("-c"));
        assert!(!list.contains("-S"));
    }

    #[cfg(unix)]
    #[test]
    fn runs_natively() {
        let list: ArgList = ["sh", "-c", "exit 7"].into_iter().collect();
        assert_eq!(list.run(), 7);
        assert_eq!(ArgList::new().run(), -1);
    }
}
