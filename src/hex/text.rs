//! Hex stimulus text format
//!
//! One frame per line: `LLLLLLLL RRRRRRRR`, two 8-digit uppercase words.
//! Simulation dumps may also contain undriven values (`xxxxxxxx`) and
//! truncated lines; those are skipped rather than treated as errors.

use std::fmt;
use ndarray::{Array2, ArrayView2};
use super::word::{narrow, widen};

/// Marker simulators print for undefined / high-impedance bits
pub const PLACEHOLDER: char = 'x';

/// Format one stereo frame as a text line (without newline)
pub fn format_frame(left: i16, right: i16) -> String {
    format!("{:08X} {:08X}", widen(left), widen(right))
}

/// Render `(frames, 2)` sample data as newline-terminated hex lines
pub fn encode_frames(frames: ArrayView2<i16>) -> String {
    let mut out = String::with_capacity(frames.nrows() * 18);
    for row in frames.rows() {
        out.push_str(&format_frame(row[0], row[1]));
        out.push('\n');
    }
    out
}

/// What a single input line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Frame(i16, i16),
    /// Fewer than two whitespace-separated tokens
    Short,
    /// Either word contains an undriven marker
    Placeholder,
    /// Either word is not valid base-16
    Malformed,
}

/// Classify one line. Only the first two tokens are looked at.
pub fn parse_line(line: &str) -> LineOutcome {
    let mut tokens = line.split_whitespace();
    let (Some(left), Some(right)) = (tokens.next(), tokens.next()) else {
        return LineOutcome::Short;
    };

    if is_placeholder(left) || is_placeholder(right) {
        return LineOutcome::Placeholder;
    }

    match (parse_word(left), parse_word(right)) {
        (Some(l), Some(r)) => LineOutcome::Frame(narrow(l), narrow(r)),
        _ => LineOutcome::Malformed,
    }
}

fn is_placeholder(token: &str) -> bool {
    token.chars().any(|c| c.eq_ignore_ascii_case(&PLACEHOLDER))
}

/// Parse a base-16 token and reduce it modulo 2^32.
///
/// Words are normally exactly 8 digits, but tokens of any length with an
/// optional sign and single `_` separators between digits are accepted;
/// only the low 32 bits reach the bus.
fn parse_word(token: &str) -> Option<u32> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let low = u32::from_str_radix(&digits[digits.len().saturating_sub(8)..], 16).ok()?;
    Some(if negative { low.wrapping_neg() } else { low })
}

/// Split on `\n`, `\r\n` and lone `\r`, the way text-mode readers do.
/// A trailing terminator does not produce an extra empty line.
fn universal_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Per-category count of lines that did not produce a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipStats {
    pub short: usize,
    pub placeholder: usize,
    pub malformed: usize,
}

impl SkipStats {
    pub fn total(&self) -> usize {
        self.short + self.placeholder + self.malformed
    }
}

impl fmt::Display for SkipStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} short, {} placeholder, {} malformed",
               self.short, self.placeholder, self.malformed)
    }
}

/// Decoded contents of a hex text file
#[derive(Debug, Clone, Default)]
pub struct HexDocument {
    pub left: Vec<i16>,
    pub right: Vec<i16>,
    pub skipped: SkipStats,
}

impl HexDocument {
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Interleave the channels into `(frames, 2)` data
    pub fn to_frames(&self) -> Array2<i16> {
        Array2::from_shape_fn((self.len(), 2), |(i, ch)| {
            if ch == 0 { self.left[i] } else { self.right[i] }
        })
    }
}

/// Parse a whole hex file, keeping frames in line order
pub fn parse_document(text: &str) -> HexDocument {
    let mut doc = HexDocument::default();

    for (line_no, line) in universal_lines(text).enumerate() {
        match parse_line(line) {
            LineOutcome::Frame(l, r) => {
                doc.left.push(l);
                doc.right.push(r);
            }
            LineOutcome::Short => doc.skipped.short += 1,
            LineOutcome::Placeholder => doc.skipped.placeholder += 1,
            LineOutcome::Malformed => {
                log::debug!("Skipping malformed line {}: {:?}", line_no + 1, line);
                doc.skipped.malformed += 1;
            }
        }
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_format_frame() {
        assert_eq!(format_frame(-1, 32767), "FFFF0000 7FFF0000");
        assert_eq!(format_frame(-32768, 0), "80000000 00000000");
        assert_eq!(format_frame(0x0A0B, 1), "0A0B0000 00010000");
    }

    #[test]
    fn test_encode_frames() {
        let frames = array![[1i16, -1], [0, -32768]];
        assert_eq!(
            encode_frames(frames.view()),
            "00010000 FFFF0000\n00000000 80000000\n"
        );
        assert_eq!(encode_frames(Array2::<i16>::zeros((0, 2)).view()), "");
    }

    #[test]
    fn test_parse_valid_line() {
        assert_eq!(parse_line("FFFF0000 7FFF0000"), LineOutcome::Frame(-1, 32767));
        assert_eq!(parse_line("  80000000\t0001FFFF  "), LineOutcome::Frame(-32768, 1));
        assert_eq!(parse_line("ffff1234 00020000 trailing"), LineOutcome::Frame(-1, 2));
    }

    #[test]
    fn test_parse_placeholder() {
        assert_eq!(parse_line("xxxxxxxx xxxxxxxx"), LineOutcome::Placeholder);
        assert_eq!(parse_line("00010000 XXXXXXXX"), LineOutcome::Placeholder);
        assert_eq!(parse_line("0001x000 00010000"), LineOutcome::Placeholder);
    }

    #[test]
    fn test_parse_short_tokens_without_length_check() {
        // 0x1234 >> 16 == 0, 0x56 >> 16 == 0
        assert_eq!(parse_line("1234 56"), LineOutcome::Frame(0, 0));
        assert_eq!(parse_line("10000 FFFFFFFFF"), LineOutcome::Frame(1, -1));
    }

    #[test]
    fn test_parse_signed_token() {
        assert_eq!(parse_line("-1 +10000"), LineOutcome::Frame(-1, 1));
    }

    #[test]
    fn test_parse_separators_and_long_tokens() {
        assert_eq!(parse_line("FFFF_0000 7FFF_0000"), LineOutcome::Frame(-1, 32767));
        // only the low 32 bits of an oversized word count
        assert_eq!(
            parse_line("123456789ABCDEF0123456789ABCDEF000010000 0000000000000000000000000000000000020000"),
            LineOutcome::Frame(1, 2)
        );
        assert_eq!(parse_line("-10000 -0"), LineOutcome::Frame(-1, 0));
        assert_eq!(parse_line("_FFFF0000 00000000"), LineOutcome::Malformed);
        assert_eq!(parse_line("FFFF0000_ 00000000"), LineOutcome::Malformed);
        assert_eq!(parse_line("FFFF__0000 00000000"), LineOutcome::Malformed);
        assert_eq!(parse_line("- 00000000"), LineOutcome::Malformed);
        assert_eq!(parse_line("+-1 00000000"), LineOutcome::Malformed);
    }

    #[test]
    fn test_parse_malformed_and_short() {
        assert_eq!(parse_line("ZZZZZZZZ 00000000"), LineOutcome::Malformed);
        assert_eq!(parse_line("00000000 0000G000"), LineOutcome::Malformed);
        assert_eq!(parse_line("00010000"), LineOutcome::Short);
        assert_eq!(parse_line(""), LineOutcome::Short);
        assert_eq!(parse_line("   "), LineOutcome::Short);
    }

    #[test]
    fn test_parse_document() {
        let text = "00010000 FFFF0000\n\
                    xxxxxxxx xxxxxxxx\n\
                    ZZZZZZZZ 00000000\n\
                    \n\
                    7FFF0000 80000000\r\n";
        let doc = parse_document(text);
        assert_eq!(doc.left, vec![1, 32767]);
        assert_eq!(doc.right, vec![-1, -32768]);
        assert_eq!(doc.skipped, SkipStats { short: 1, placeholder: 1, malformed: 1 });
        assert_eq!(doc.skipped.total(), 3);
        assert_eq!(doc.to_frames(), array![[1i16, -1], [32767, -32768]]);
    }

    #[test]
    fn test_parse_document_cr_line_endings() {
        let doc = parse_document("00010000 00010000\r00020000 00020000\r00030000 00030000\r");
        assert_eq!(doc.left, vec![1, 2, 3]);
        assert_eq!(doc.right, vec![1, 2, 3]);
        assert_eq!(doc.skipped, SkipStats::default());
    }

    #[test]
    fn test_parse_document_mixed_line_endings() {
        let doc = parse_document("00010000 00010000\r\n\r00020000 00020000\n\n00030000 00030000");
        assert_eq!(doc.left, vec![1, 2, 3]);
        assert_eq!(doc.skipped.short, 2);
    }

    #[test]
    fn test_parse_document_without_frames() {
        let doc = parse_document("xxxxxxxx xxxxxxxx\nnot hex\n");
        assert!(doc.is_empty());
        assert_eq!(doc.to_frames().nrows(), 0);
    }
}
