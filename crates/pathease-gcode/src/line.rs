//! G-code line model
//!
//! A deliberately small parser: each line is split into its comment, its
//! leading G/M command and a map of parameter words. Modal state is not
//! tracked; the scanner only needs to know which axes a line mentions.
//!
//! `$` system commands (`$H`, `$X`, ...) and lines that do not parse are
//! kept as opaque lines with no command and no words.

use crate::error::{GcodeError, ProgramResult};
use regex::Regex;
use tracing::debug;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"([A-Za-z])\s*([+-]?[0-9]*\.?[0-9]*)").expect("invalid word regex"))
}

fn comment_regex() -> &'static Regex {
    static COMMENT: OnceLock<Regex> = OnceLock::new();
    COMMENT.get_or_init(|| Regex::new(r"\(([^)]*)\)|;(.*)$").expect("invalid comment regex"))
}

/// A G or M command word, e.g. `G0` or `M3`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Command {
    /// `G` or `M`
    pub letter: char,
    /// Command number (fractional for codes like G61.1)
    pub number: f64,
}

impl Command {
    /// Whether this is a G0 rapid move
    pub fn is_rapid(&self) -> bool {
        self.letter == 'G' && self.number == 0.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.number)
    }
}

/// One parsed line of a G-code program
#[derive(Debug, Clone, PartialEq)]
pub struct GcodeLine {
    /// 1-based line number in the program
    pub line_number: usize,
    /// The line exactly as read
    pub raw: String,
    /// The first G or M word, if any
    pub command: Option<Command>,
    /// Remaining words keyed by upper-case letter
    pub words: BTreeMap<char, f64>,
    /// Comment text without delimiters
    pub comment: Option<String>,
}

impl GcodeLine {
    /// Parse a single line
    ///
    /// `$` system commands parse as opaque lines. A letter without a number
    /// is a [`GcodeError::InvalidWord`].
    pub fn parse(line_number: usize, text: &str) -> ProgramResult<Self> {
        if text.trim_start().starts_with('$') {
            return Ok(Self::opaque(line_number, text));
        }

        let mut comment = None;
        for captures in comment_regex().captures_iter(text) {
            if let Some(body) = captures.get(1).or_else(|| captures.get(2)) {
                comment.get_or_insert_with(|| body.as_str().trim().to_string());
            }
        }
        let code = comment_regex().replace_all(text, " ");

        let mut command = None;
        let mut words = BTreeMap::new();
        for captures in word_regex().captures_iter(&code) {
            let letter = captures[1].chars().next().unwrap_or_default().to_ascii_uppercase();
            let number: f64 = captures[2].parse().map_err(|_| GcodeError::InvalidWord {
                line_number,
                word: captures[0].trim().to_string(),
            })?;

            if command.is_none() && matches!(letter, 'G' | 'M') {
                command = Some(Command { letter, number });
            } else {
                words.insert(letter, number);
            }
        }

        Ok(Self {
            line_number,
            raw: text.to_string(),
            command,
            words,
            comment,
        })
    }

    /// A line carried through without interpretation
    pub fn opaque(line_number: usize, text: &str) -> Self {
        Self {
            line_number,
            raw: text.to_string(),
            command: None,
            words: BTreeMap::new(),
            comment: None,
        }
    }

    /// The value of a parameter word
    pub fn word(&self, letter: char) -> Option<f64> {
        self.words.get(&letter).copied()
    }

    /// X parameter
    pub fn x(&self) -> Option<f64> {
        self.word('X')
    }

    /// Y parameter
    pub fn y(&self) -> Option<f64> {
        self.word('Y')
    }

    /// Z parameter
    pub fn z(&self) -> Option<f64> {
        self.word('Z')
    }

    /// Whether the line carries both X and Y
    pub fn has_xy(&self) -> bool {
        self.x().is_some() && self.y().is_some()
    }

    /// Whether the line moves in the XY plane at all
    pub fn moves_xy(&self) -> bool {
        self.x().is_some() || self.y().is_some()
    }

    /// Whether this is a G0 rapid move
    pub fn is_rapid(&self) -> bool {
        self.command.is_some_and(|c| c.is_rapid())
    }
}

/// Parse every line of a program. Blank and comment-only lines are kept,
/// and lines that fail to parse are kept as opaque lines.
pub fn parse_program(text: &str) -> Vec<GcodeLine> {
    text.lines()
        .enumerate()
        .map(|(index, text)| {
            let line_number = index + 1;
            GcodeLine::parse(line_number, text).unwrap_or_else(|err| {
                debug!(line_number, "Keeping unparsed line: {}", err);
                GcodeLine::opaque(line_number, text)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_motion_line() {
        let line = GcodeLine::parse(3, "G1 X10.5 Y-2 Z0.25 F1200").unwrap();
        assert_eq!(line.line_number, 3);
        assert_eq!(
            line.command,
            Some(Command {
                letter: 'G',
                number: 1.0
            })
        );
        assert_eq!(line.x(), Some(10.5));
        assert_eq!(line.y(), Some(-2.0));
        assert_eq!(line.z(), Some(0.25));
        assert_eq!(line.word('F'), Some(1200.0));
        assert!(line.has_xy());
        assert!(!line.is_rapid());
    }

    #[test]
    fn test_parse_compact_and_lower_case() {
        let line = GcodeLine::parse(1, "g00x1y2").unwrap();
        assert!(line.is_rapid());
        assert_eq!(line.x(), Some(1.0));
        assert_eq!(line.y(), Some(2.0));
    }

    #[test]
    fn test_comments_are_separated() {
        let line = GcodeLine::parse(1, "G0 Z5 ; lift pen").unwrap();
        assert_eq!(line.comment.as_deref(), Some("lift pen"));
        assert_eq!(line.z(), Some(5.0));

        let line = GcodeLine::parse(1, "(X99 is not a word) G1 X1").unwrap();
        assert_eq!(line.comment.as_deref(), Some("X99 is not a word"));
        assert_eq!(line.x(), Some(1.0));
    }

    #[test]
    fn test_blank_line() {
        let line = GcodeLine::parse(1, "").unwrap();
        assert_eq!(line.command, None);
        assert!(line.words.is_empty());
    }

    #[test]
    fn test_command_display() {
        let line = GcodeLine::parse(1, "G61.1").unwrap();
        assert_eq!(line.command.map(|c| c.to_string()).as_deref(), Some("G61.1"));
        let line = GcodeLine::parse(1, "G01 Z-1").unwrap();
        assert_eq!(line.command.map(|c| c.to_string()).as_deref(), Some("G1"));
    }

    #[test]
    fn test_invalid_word() {
        let err = GcodeLine::parse(7, "G1 X").unwrap_err();
        assert!(matches!(err, GcodeError::InvalidWord { line_number: 7, .. }));
    }

    #[test]
    fn test_system_command_is_opaque() {
        let line = GcodeLine::parse(1, "$H").unwrap();
        assert_eq!(line.command, None);
        assert!(line.words.is_empty());
        assert_eq!(line.raw, "$H");
    }

    #[test]
    fn test_parse_program_keeps_unparsable_lines() {
        let lines = parse_program("G21\nG1 X\nG0 X1 Y1");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].raw, "G1 X");
        assert_eq!(lines[1].command, None);
        assert!(lines[1].words.is_empty());
        assert!(lines[2].is_rapid());
    }

    #[test]
    fn test_parse_program_numbers_lines() {
        let lines = parse_program("G21\n\nG0 X1 Y1\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].line_number, 3);
        assert!(lines[2].is_rapid());
    }
}
