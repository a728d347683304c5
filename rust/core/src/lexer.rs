// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Table-driven lexer for the OBJ/MTL line grammar
//!
//! A deterministic finite automaton consumes the input one byte at a time.
//! Bytes are first collapsed into a small set of equivalence classes, then a
//! dense `(state, class)` table decides the next state. Both tables are built
//! at compile time and shared read-only across all parses.

use smallvec::SmallVec;

use crate::error::{Diagnostic, DiagnosticKind, Result};

/// Coarse category assigned to each input byte.
///
/// The automaton branches on classes instead of raw byte values, which keeps
/// the transition table at `3 x 6` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EquivClass {
    /// Printable ASCII excluding whitespace and `#` (`!`..`~`).
    Alphanum = 0,
    /// Space, horizontal tab, vertical tab, carriage return.
    Whitespace,
    /// Comment start (`#`), runs to the end of the physical line.
    Comment,
    /// Line feed (`\n`).
    LineFeed,
    /// End of the input buffer. Never produced by a byte; the tokenizer feeds
    /// it once the cursor reaches the buffer end.
    EndOfInput,
    /// Anything else (control bytes, non-ASCII).
    Invalid,
}

const NUM_CLASSES: usize = 6;

/// Automaton state.
///
/// `Whitespace` is the start state. States from `FinalAlphanum` on are final:
/// they end the scan of the current token. On `FinalAlphanum` the byte that
/// ended the run has been over-read and the cursor must roll back by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum State {
    /// Skipping whitespace between tokens (start state).
    Whitespace = 0,
    /// Inside a run of alphanumeric bytes.
    Alphanum,
    /// Inside a comment, consuming to the end of the line.
    Comment,
    /// A complete token was scanned (one byte over-read).
    FinalAlphanum,
    /// A line feed was consumed.
    FinalNewline,
    /// The input buffer is exhausted.
    FinalEndOfInput,
    /// Sink state for malformed byte sequences.
    FinalError,
}

const NUM_NONFINAL_STATES: usize = 3;

/// Byte value -> equivalence class, total over all 256 byte values.
///
/// Carriage returns classify as whitespace, which collapses `\r\n` line
/// endings to a single logical line feed without a normalization pre-pass.
const CLASSES: [EquivClass; 256] = build_classes();

const fn build_classes() -> [EquivClass; 256] {
    let mut table = [EquivClass::Invalid; 256];

    let mut b = b'!' as usize;
    while b <= b'~' as usize {
        table[b] = EquivClass::Alphanum;
        b += 1;
    }

    table[b' ' as usize] = EquivClass::Whitespace;
    table[b'\t' as usize] = EquivClass::Whitespace;
    table[0x0b] = EquivClass::Whitespace; // vertical tab
    table[b'\r' as usize] = EquivClass::Whitespace;
    table[b'#' as usize] = EquivClass::Comment;
    table[b'\n' as usize] = EquivClass::LineFeed;

    table
}

/// `(state, class)` -> state transition table.
///
/// Unlisted pairs sink to `FinalError`.
const TRANSITIONS: [[State; NUM_CLASSES]; NUM_NONFINAL_STATES] = build_transitions();

const fn build_transitions() -> [[State; NUM_CLASSES]; NUM_NONFINAL_STATES] {
    let mut t = [[State::FinalError; NUM_CLASSES]; NUM_NONFINAL_STATES];

    let ws = State::Whitespace as usize;
    t[ws][EquivClass::Alphanum as usize] = State::Alphanum;
    t[ws][EquivClass::Whitespace as usize] = State::Whitespace;
    t[ws][EquivClass::Comment as usize] = State::Comment;
    t[ws][EquivClass::LineFeed as usize] = State::FinalNewline;
    t[ws][EquivClass::EndOfInput as usize] = State::FinalEndOfInput;

    // A comment consumes everything up to the line feed, invalid bytes included.
    let cm = State::Comment as usize;
    t[cm][EquivClass::Alphanum as usize] = State::Comment;
    t[cm][EquivClass::Whitespace as usize] = State::Comment;
    t[cm][EquivClass::Comment as usize] = State::Comment;
    t[cm][EquivClass::Invalid as usize] = State::Comment;
    t[cm][EquivClass::LineFeed as usize] = State::FinalNewline;
    t[cm][EquivClass::EndOfInput as usize] = State::FinalEndOfInput;

    let an = State::Alphanum as usize;
    t[an][EquivClass::Alphanum as usize] = State::Alphanum;
    t[an][EquivClass::Whitespace as usize] = State::FinalAlphanum;
    t[an][EquivClass::Comment as usize] = State::FinalAlphanum;
    t[an][EquivClass::LineFeed as usize] = State::FinalAlphanum;
    t[an][EquivClass::EndOfInput as usize] = State::FinalAlphanum;

    t
}

/// Classify a single byte.
#[inline]
pub fn classify(byte: u8) -> EquivClass {
    CLASSES[byte as usize]
}

/// Run one automaton step. `state` must be non-final.
#[inline]
pub fn advance(state: State, class: EquivClass) -> State {
    debug_assert!((state as usize) < NUM_NONFINAL_STATES);
    TRANSITIONS[state as usize][class as usize]
}

/// A lexical token: a non-empty, non-owning view into the source buffer.
///
/// Tokens compare by content, not identity; the byte offset locates the token
/// for diagnostics and does not participate in equality.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Token<'a> {
    #[inline]
    pub(crate) fn new(text: &'a str, offset: usize) -> Self {
        debug_assert!(!text.is_empty());
        Self { text, offset }
    }

    /// The token's bytes as seen in the source.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the token's first character in the source buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Token<'_> {}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

/// Per-line token buffer. Statement lines rarely exceed eight tokens, so the
/// buffer normally lives on the stack.
pub type TokenBuf<'a> = SmallVec<[Token<'a>; 8]>;

/// Compute the 1-based line and column of a byte offset.
pub(crate) fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let prefix = &source.as_bytes()[..offset.min(source.len())];
    let line = memchr::memchr_iter(b'\n', prefix).count() + 1;
    let line_start = memchr::memrchr(b'\n', prefix).map_or(0, |i| i + 1);
    (line, offset - line_start + 1)
}

/// Lex a single physical line starting at byte offset `pos`.
///
/// Appends the line's tokens to `tokens` and returns the offset just past the
/// terminating line feed, or the buffer length at end of input. This is the
/// primitive the grammar parsers drive; it never reads across a line boundary
/// and never re-scans.
pub fn lex_line<'a>(source: &'a str, mut pos: usize, tokens: &mut TokenBuf<'a>) -> Result<usize> {
    let bytes = source.as_bytes();

    'token: loop {
        let mut state = State::Whitespace;
        let mut start = pos;

        loop {
            let class = if pos < bytes.len() {
                CLASSES[bytes[pos] as usize]
            } else {
                EquivClass::EndOfInput
            };

            let next = TRANSITIONS[state as usize][class as usize];
            match next {
                State::Whitespace => pos += 1,
                State::Comment => {
                    // The table keeps a comment alive until the line feed, so
                    // jumping straight to it is equivalent and much faster.
                    pos = match memchr::memchr(b'\n', &bytes[pos..]) {
                        Some(i) => pos + i,
                        None => bytes.len(),
                    };
                }
                State::Alphanum => {
                    if state == State::Whitespace {
                        start = pos;
                    }
                    pos += 1;
                }
                State::FinalAlphanum => {
                    // The byte that ended the run was not consumed; `pos`
                    // already points at it.
                    tokens.push(Token::new(&source[start..pos], start));
                    continue 'token;
                }
                State::FinalNewline => return Ok(pos + 1),
                State::FinalEndOfInput => return Ok(pos),
                State::FinalError => {
                    return Err(Diagnostic::new(DiagnosticKind::InvalidCharacter, source, pos))
                }
            }
            state = next;
        }
    }
}

/// Lex a whole buffer.
///
/// Line feeds segment scanning but are not emitted as tokens; the returned
/// sequence is exactly the alphanumeric tokens in source order.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>> {
    let mut out = Vec::with_capacity(source.len() / 4);
    let mut line = TokenBuf::new();
    let mut pos = 0;
    while pos < source.len() {
        line.clear();
        pos = lex_line(source, pos, &mut line)?;
        out.extend_from_slice(&line);
    }
    Ok(out)
}
