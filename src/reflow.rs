// Reflow engine
//
// - Each input line (split on '\n') is handled on its own and always ends with '\n' in the output.
// - Lines that already fit pass through untouched.
// - Longer lines are split on single spaces and greedily refilled. Continuation lines are
//   prefixed with as many spaces as the line's indent marker is wide ("3.1. ", "- ", "  a) "),
//   so the marker itself is never repeated. The prefix shrinks when prefix + word would not fit.
// - A single token wider than the limit is split after each ',' as a last resort, and the pieces
//   are filled in order across as many lines as they need. A piece (fragment plus its comma)
//   wider than the limit gets a line of its own and is the only way a line exceeds the width.
// - Physical lines are never left empty by a break; only an input line that is all spaces
//   produces an empty output line.
// - Widths count chars, not bytes or display columns.

use memchr::memchr_iter;
use tracing::{debug, trace, warn};

use crate::cleanup::{self, HtmlToText, ScraperText};
use crate::error::{Error, Result};

/// Reflow options. Built with [`Reflower::new`], which rejects a zero width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reflower {
    max_width: usize,
    cleanup: bool,
}

impl Reflower {
    pub fn new(max_width: usize) -> Result<Self> {
        if max_width == 0 {
            return Err(Error::InvalidWidth(max_width));
        }
        Ok(Self {
            max_width,
            cleanup: false,
        })
    }

    /// Run the HTML cleanup pre-pass before wrapping.
    pub fn cleanup(mut self, on: bool) -> Self {
        self.cleanup = on;
        self
    }

    /// Reflow `text`, using [`ScraperText`] for cleanup.
    pub fn run(&self, text: &str) -> Result<String> {
        self.run_with(text, &ScraperText)
    }

    /// Reflow `text`, using `html` for cleanup. `html` is not called when cleanup is off.
    pub fn run_with(&self, text: &str, html: &dyn HtmlToText) -> Result<String> {
        debug!(bytes = text.len(), max_width = self.max_width, cleanup = self.cleanup, "reflow");

        let cleaned;
        let text = if self.cleanup {
            cleaned = cleanup::clean(text, html)?;
            cleaned.as_str()
        } else {
            text
        };

        let mut out = String::with_capacity(text.len() + text.len() / 8 + 1);
        let mut start = 0usize;
        for nl in memchr_iter(b'\n', text.as_bytes()) {
            wrap_line(&text[start..nl], self.max_width, &mut out);
            start = nl + 1;
        }
        wrap_line(&text[start..], self.max_width, &mut out);
        Ok(out)
    }
}

/// Reflow `text` so no line is wider than `max_width` chars.
///
/// ```
/// let out = reflowcell::reflow("1. first word second word", 10, false).unwrap();
/// assert_eq!(out, "1. first\n   word\n   second\n   word\n");
/// ```
pub fn reflow(text: &str, max_width: usize, cleanup: bool) -> Result<String> {
    Reflower::new(max_width)?.cleanup(cleanup).run(text)
}

/// [`reflow`] with a caller-supplied HTML converter for the cleanup pass.
pub fn reflow_with(text: &str, max_width: usize, cleanup: bool, html: &dyn HtmlToText) -> Result<String> {
    Reflower::new(max_width)?.cleanup(cleanup).run_with(text, html)
}

/* ============================= Indent sniffing =========================== */

#[inline]
fn is_indent_marker(c: char) -> bool {
    c.is_numeric() || matches!(c, '.' | '-' | '_' | '[')
}

#[inline]
fn is_indent_terminator(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '"' | '[' | '?')
}

/// Width (in chars) of the indent marker that opens `line`, if any.
///
/// The marker is: leading whitespace, then the shortest run of marker chars
/// (digits `.` `-` `_` `[`) that, after optional whitespace, reaches a letter,
/// `"`, `[` or `?`. Lines that never reach such a char have no indent.
pub fn indent_width(line: &str) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let n = chars.len();

    let mut p = 0usize;
    while p < n && chars[p].is_whitespace() {
        p += 1;
    }
    loop {
        let mut q = p;
        while q < n && chars[q].is_whitespace() {
            q += 1;
        }
        if q < n && is_indent_terminator(chars[q]) {
            return Some(q);
        }
        if p < n && is_indent_marker(chars[p]) {
            p += 1;
        } else {
            return None;
        }
    }
}

/* ================================ Wrapping =============================== */

/// Physical line being filled, with its width in chars kept alongside.
struct LineBuf {
    text: String,
    width: usize,
    indent: usize,
    max_width: usize,
}

impl LineBuf {
    fn new(indent: usize, max_width: usize) -> Self {
        Self {
            text: String::new(),
            width: 0,
            indent,
            max_width,
        }
    }

    fn fits(&self, width: usize) -> bool {
        self.width + width <= self.max_width
    }

    fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
        self.width += s.chars().count();
    }

    fn push(&mut self, c: char) {
        self.text.push(c);
        self.width += 1;
    }

    fn trim_end(&mut self) {
        while self.text.ends_with(' ') {
            self.text.pop();
            self.width -= 1;
        }
    }

    fn emit(&mut self, out: &mut String) {
        if self.width > self.max_width {
            warn!(width = self.width, max_width = self.max_width, line = %self.text, "line exceeds max width");
        }
        trace!(width = self.width, "line");
        out.push_str(&self.text);
        out.push('\n');
        self.text.clear();
        self.width = 0;
    }

    /// End the current line (unless it is blank) and start the next one for something `width` wide.
    fn break_before(&mut self, out: &mut String, width: usize) {
        self.trim_end();
        if self.width > 0 {
            self.emit(out);
        } else {
            self.text.clear();
        }
        let prefix = self.indent.min(self.max_width.saturating_sub(width));
        self.text.extend(std::iter::repeat(' ').take(prefix));
        self.width = prefix;
    }

    fn finish(mut self, out: &mut String) {
        self.trim_end();
        self.emit(out);
    }
}

fn wrap_line(line: &str, max_width: usize, out: &mut String) {
    if line.chars().count() <= max_width {
        out.push_str(line);
        out.push('\n');
        return;
    }

    let mut buf = LineBuf::new(indent_width(line).unwrap_or(0), max_width);

    for word in line.split(' ') {
        let word_width = word.chars().count();

        if word_width > max_width {
            // Run-on token: fill its comma pieces in order.
            trace!(token = word, "split on commas");
            for piece in word.split_inclusive(',') {
                let piece_width = piece.chars().count();
                if !buf.fits(piece_width) {
                    buf.break_before(out, piece_width);
                }
                buf.push_str(piece);
            }
            buf.push(' ');
            continue;
        }

        if !buf.fits(word_width) {
            buf.break_before(out, word_width);
        }
        buf.push_str(word);
        buf.push(' ');
    }

    buf.finish(out);
}
