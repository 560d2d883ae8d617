//! Text escaping for LaTeX output
//!
//! Three escapers share the tables in [`super::tables`]:
//!
//! - [`escape_for_link_target`] only escapes reserved characters, for strings
//!   that must stay literal (e.g. `\href` targets).
//! - [`escape_mixed_mode`] turns prose into LaTeX text, wrapping characters
//!   that only exist in math mode in `$...$`.
//! - [`escape_math_only`] produces content for an existing math environment.
//!
//! None of these are idempotent. Escaping already-escaped text escapes the
//! backslashes again, so each literal value must go through exactly once.

use super::tables::{MATH_MODE, RESERVED, TEXT_MODE};
use super::whitespace::{is_zero_width, normalize_whitespace};

/// Inline math delimiter of the target markup.
pub const MATH_DELIMITER: char = '$';

/// Non-breaking space command of the target markup.
pub const NBSP: &str = "~";

const BACKSLASH_SPACE_OUT: &str = "{\\textbackslash}~";
const BACKSLASH_OUT: &str = "{\\textbackslash}";
const TILDE_OUT: &str = "{\\textasciitilde}";

/// Rendering mode of an output run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Text,
    Math,
}

/// A maximal run of output sharing one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub mode: RunMode,
    pub text: String,
}

/// Input split into protected sequences and ordinary characters.
///
/// The protected sequences would otherwise be mangled by the table lookup
/// (`~` is itself a LaTeX command, and a backslash must never reach output
/// unescaped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    BackslashSpace,
    Backslash,
    Tilde,
    Char(char),
}

fn segments(text: &str) -> impl Iterator<Item = Segment> + '_ {
    let mut chars = text.chars().peekable();
    std::iter::from_fn(move || {
        let ch = chars.next()?;
        Some(match ch {
            '\\' if chars.peek() == Some(&' ') => {
                chars.next();
                Segment::BackslashSpace
            }
            '\\' => Segment::Backslash,
            '~' => Segment::Tilde,
            _ => Segment::Char(ch),
        })
    })
}

#[derive(Debug, Clone, Copy)]
enum Piece {
    Str(&'static str),
    Char(char),
}

fn classify(segment: Segment) -> Option<(RunMode, Piece)> {
    let piece = match segment {
        Segment::BackslashSpace => (RunMode::Text, Piece::Str(BACKSLASH_SPACE_OUT)),
        Segment::Backslash => (RunMode::Text, Piece::Str(BACKSLASH_OUT)),
        Segment::Tilde => (RunMode::Text, Piece::Str(TILDE_OUT)),
        // Dropped here rather than by the final cleanup so that they cannot
        // split a math run in two.
        Segment::Char(ch) if is_zero_width(ch) => return None,
        Segment::Char(ch) => {
            if let Some(&rep) = TEXT_MODE.get(&ch) {
                (RunMode::Text, Piece::Str(rep))
            } else if let Some(&rep) = MATH_MODE.get(&ch) {
                (RunMode::Math, Piece::Str(rep))
            } else {
                (RunMode::Text, Piece::Char(ch))
            }
        }
    };
    Some(piece)
}

fn merge(mut runs: Vec<Run>, (mode, piece): (RunMode, Piece)) -> Vec<Run> {
    if runs.last().map(|run| run.mode) != Some(mode) {
        runs.push(Run {
            mode,
            text: String::new(),
        });
    }
    if let Some(run) = runs.last_mut() {
        match piece {
            Piece::Str(s) => run.text.push_str(s),
            Piece::Char(ch) => run.text.push(ch),
        }
    }
    runs
}

/// Classify `text` and merge it into alternating text/math runs.
///
/// Adjacent runs never share a mode.
pub fn tokenize_runs(text: &str) -> Vec<Run> {
    segments(text).filter_map(classify).fold(Vec::new(), merge)
}

/// Escape a string for use as a literal link target.
///
/// Only reserved characters are replaced; no math delimiters are inserted.
pub fn escape_for_link_target(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match RESERVED.get(&ch) {
            Some(rep) => out.push_str(rep),
            None => out.push(ch),
        }
    }
    out
}

/// Escape prose for LaTeX text, switching to inline math for characters
/// that need it.
///
/// ```
/// use mystex::escape_mixed_mode;
///
/// assert_eq!(escape_mixed_mode("δ and μ"), "$\\delta$ and $\\mu$");
/// assert_eq!(escape_mixed_mode("a_b"), "a\\_b");
/// ```
pub fn escape_mixed_mode(text: &str) -> String {
    let runs = tokenize_runs(text);
    let mut out = String::with_capacity(text.len() + 8);
    for run in &runs {
        match run.mode {
            RunMode::Text => out.push_str(&run.text),
            RunMode::Math => {
                out.push(MATH_DELIMITER);
                out.push_str(&run.text);
                out.push(MATH_DELIMITER);
            }
        }
    }
    normalize_whitespace(&out, NBSP)
}

/// Escape text that already sits inside a math environment.
///
/// Each substituted command is preceded by a space unless the output already
/// ends in one, so `αβ` becomes `\alpha \beta`. The result is trimmed and
/// carries no math delimiters.
pub fn escape_math_only(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match MATH_MODE.get(&ch) {
            Some(rep) => {
                if !out.ends_with(' ') {
                    out.push(' ');
                }
                out.push_str(rep);
            }
            None => out.push(ch),
        }
    }
    let trimmed = out.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{FEFF}');
    normalize_whitespace(trimmed, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_protected_sequences() {
        let segs: Vec<_> = segments("\\ a\\~").collect();
        assert_eq!(
            segs,
            vec![
                Segment::BackslashSpace,
                Segment::Char('a'),
                Segment::Backslash,
                Segment::Tilde,
            ]
        );
    }

    #[test]
    fn test_segments_double_backslash_space() {
        // only the second backslash is followed by the space
        let segs: Vec<_> = segments("\\\\ ").collect();
        assert_eq!(segs, vec![Segment::Backslash, Segment::BackslashSpace]);
    }

    #[test]
    fn test_runs_alternate() {
        let runs = tokenize_runs("δμ and ν");
        assert_eq!(
            runs,
            vec![
                Run {
                    mode: RunMode::Math,
                    text: "\\delta\\mu".to_string()
                },
                Run {
                    mode: RunMode::Text,
                    text: " and ".to_string()
                },
                Run {
                    mode: RunMode::Math,
                    text: "\\nu".to_string()
                },
            ]
        );
        for pair in runs.windows(2) {
            assert_ne!(pair[0].mode, pair[1].mode);
        }
    }

    #[test]
    fn test_runs_empty() {
        assert!(tokenize_runs("").is_empty());
    }

    #[test]
    fn test_zero_width_does_not_split_math() {
        assert_eq!(escape_mixed_mode("δ\u{200B}μ"), "$\\delta\\mu$");
    }

    #[test]
    fn test_link_target_reserved() {
        assert_eq!(
            escape_for_link_target("https://x.org/a_b?c=1&d=50%#top"),
            "https://x.org/a\\_b?c=1\\&d=50\\%\\#top"
        );
        // no math, no text-only substitutions
        assert_eq!(escape_for_link_target("α–β"), "α–β");
    }

    #[test]
    fn test_math_only_spacing() {
        assert_eq!(escape_math_only("αβ"), "\\alpha \\beta");
        assert_eq!(escape_math_only("x ≤ y"), "x \\leq y");
        assert_eq!(escape_math_only("α=β"), "\\alpha= \\beta");
        assert_eq!(escape_math_only("½x"), "\\frac{1}{2}x");
    }
}
