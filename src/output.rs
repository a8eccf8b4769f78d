//! Output formatting for search results
//!
//! Plain output prints one match per line as `offset:snippet`, with the
//! match highlighted, in the spirit of ripgrep's `--byte-offset` mode.

use crate::trie::Offset;
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// Characters of context printed on each side of a match
pub const SNIPPET_CONTEXT: usize = 20;

/// JSON shape of a search result
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport<'a> {
    pub query: &'a str,
    pub found: bool,
    pub offsets: &'a [Offset],
}

/// Values accepted by `--color`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Print every match as `offset:snippet`
pub fn print_matches<W: WriteColor>(
    out: &mut W,
    text: &[char],
    query_len: usize,
    offsets: &[Offset],
) -> io::Result<()> {
    for &offset in offsets {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", offset)?;
        out.reset()?;
        write!(out, ":")?;

        let start = offset.saturating_sub(SNIPPET_CONTEXT);
        let match_end = (offset + query_len).min(text.len());
        let end = (match_end + SNIPPET_CONTEXT).min(text.len());

        write_flat(out, &text[start..offset])?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write_flat(out, &text[offset..match_end])?;
        out.reset()?;
        write_flat(out, &text[match_end..end])?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write characters on a single line, flattening line breaks and tabs
fn write_flat<W: Write>(out: &mut W, chars: &[char]) -> io::Result<()> {
    let flat: String = chars
        .iter()
        .map(|&c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    out.write_all(flat.as_bytes())
}

/// Print a search report as a single JSON line
pub fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_print_matches_plain() {
        let text = chars("This is a test");
        let mut buf = Buffer::no_color();
        print_matches(&mut buf, &text, 2, &[2, 5]).unwrap();

        let printed = String::from_utf8(buf.into_inner()).unwrap();
        assert_eq!(printed, "2:This is a test\n5:This is a test\n");
    }

    #[test]
    fn test_snippet_is_clipped_and_flattened() {
        let text = chars(&format!("{}\nneedle\n{}", "x".repeat(30), "y".repeat(30)));
        let mut buf = Buffer::no_color();
        print_matches(&mut buf, &text, 6, &[31]).unwrap();

        let printed = String::from_utf8(buf.into_inner()).unwrap();
        let expected = format!("31:{} needle {}\n", "x".repeat(19), "y".repeat(19));
        assert_eq!(printed, expected);
    }

    #[test]
    fn test_print_json() {
        let mut out = Vec::new();
        let report = SearchReport {
            query: "is",
            found: true,
            offsets: &[2, 5],
        };
        print_json(&mut out, &report).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"query\":\"is\",\"found\":true,\"offsets\":[2,5]}\n"
        );
    }

    #[test]
    fn test_color_mode() {
        assert_eq!(ColorChoice::from(ColorMode::Never), ColorChoice::Never);
        assert_eq!(ColorChoice::from(ColorMode::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorMode::default()), ColorChoice::Auto);

        assert_eq!(ColorMode::from_str("never", false), Ok(ColorMode::Never));
        assert!(ColorMode::from_str("bogus", false).is_err());
    }
}
