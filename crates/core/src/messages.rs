//! Artifact messages.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

const BUILTIN: &[&str] = &[
    "A rubber duck. It looks at you knowingly.",
    "An old floppy disk labelled \"backup_final_v2\".",
    "A sock. Just the one.",
    "A very small umbrella, for a very small rain.",
    "A postcard from the edge of the screen.",
    "Someone's lost semicolon;",
    "A jar of pickled cursor blinks.",
    "A coupon for one free segfault.",
    "A map of this room. You are here. Also there.",
    "The number 42, slightly dented.",
    "A houseplant that needs watering.",
    "A lonely stack frame.",
    "A stopwatch stuck at 00:00:12.",
    "A kazoo. You resist the urge.",
    "A spare pixel, still warm.",
    "A paperback titled \"Wrapping Around For Beginners\".",
    "An unread manual page.",
    "A ball of yarn. Promising!",
    "A bowl of cat food. Getting warmer...",
    "Found key!",
];

/// Messages handed out to artifacts, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBook {
    messages: Vec<String>,
}

impl MessageBook {
    pub fn builtin() -> Self {
        Self {
            messages: BUILTIN.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Build a book from text, one message per non-empty line.
    ///
    /// Every character must fill exactly one terminal cell, so anything that is
    /// not printable ASCII becomes `?`.
    pub fn parse(text: &str) -> Result<Self> {
        let messages: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(narrow)
            .collect();
        if messages.is_empty() {
            bail!("message book is empty");
        }
        Ok(Self { messages })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read messages from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("no messages in {}", path.display()))
    }

    /// Message for artifact `index`; cycles when there are more artifacts than messages.
    pub fn get(&self, index: usize) -> &str {
        &self.messages[index % self.messages.len()]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn narrow(line: &str) -> String {
    line.chars()
        .map(|ch| if ch == ' ' || ch.is_ascii_graphic() { ch } else { '?' })
        .collect()
}

impl Default for MessageBook {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines() {
        let book = MessageBook::parse("one\n\n  two  \n\t\nthree\n").unwrap();
        assert_eq!(book.len(), 3);
        assert_eq!(book.get(1), "two");
    }

    #[test]
    fn wide_and_combining_characters_are_replaced() {
        let book = MessageBook::parse("猫 found\ncafe\u{301}\ntab\there").unwrap();
        assert_eq!(book.get(0), "? found");
        assert_eq!(book.get(1), "cafe?");
        assert_eq!(book.get(2), "tab?here");
        for i in 0..book.len() {
            assert_eq!(book.get(i).chars().count(), book.get(i).len());
        }
    }

    #[test]
    fn builtin_messages_are_narrow() {
        let book = MessageBook::builtin();
        for i in 0..book.len() {
            assert!(book.get(i).chars().all(|c| c == ' ' || c.is_ascii_graphic()));
        }
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(MessageBook::parse("\n  \n").is_err());
    }

    #[test]
    fn get_cycles() {
        let book = MessageBook::parse("a\nb").unwrap();
        assert_eq!(book.get(0), "a");
        assert_eq!(book.get(3), "b");
    }

    #[test]
    fn builtin_is_never_empty() {
        assert!(!MessageBook::builtin().is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = MessageBook::load("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read messages"));
    }
}
