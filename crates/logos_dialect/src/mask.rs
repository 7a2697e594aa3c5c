//! Masking of Logos directives into plain Objective-C tokens.
//!
//! `mask` rewrites every `%directive` outside comments and literals into an
//! `@<sigil><name>` token that clang-format treats as an Objective-C
//! at-keyword. Block directives also get a trailing `;` so the formatter sees
//! a complete statement. `unmask` finds the tokens again by their text, so it
//! is unaffected by whatever whitespace the formatter moves around them.

use std::ops::Range;

use regex::Regex;
use tracing::{debug, warn};

use crate::directive::Directive;
use crate::error::{DialectError, DialectResult};

/// Base name of the substitution tokens.
pub const SIGIL_BASE: &str = "logosformat";

/// A directive located in the original content and the token that replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectMarker {
    pub directive: Directive,
    /// Byte range of `%name` in the original content.
    pub span: Range<usize>,
    /// Substitution token written in its place.
    pub token: String,
    /// Whether a `;` was appended after the directive's line.
    pub terminated: bool,
}

/// Ordered markers of one masked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    sigil: String,
    markers: Vec<DialectMarker>,
}

impl MarkerSet {
    pub fn sigil(&self) -> &str {
        &self.sigil
    }

    pub fn markers(&self) -> &[DialectMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DialectMarker> {
        self.markers.iter()
    }
}

/// Result of masking one file.
#[derive(Debug, Clone)]
pub struct MaskedSource {
    pub content: String,
    pub markers: MarkerSet,
}

impl MaskedSource {
    pub fn into_parts(self) -> (String, MarkerSet) {
        (self.content, self.markers)
    }
}

/// Pick a sigil that does not occur anywhere in `content`.
pub fn choose_sigil(content: &str) -> String {
    if !content.contains(SIGIL_BASE) {
        return SIGIL_BASE.to_string();
    }
    (1usize..)
        .map(|n| format!("{}{}", SIGIL_BASE, n))
        .find(|candidate| !content.contains(candidate.as_str()))
        .unwrap_or_else(|| SIGIL_BASE.to_string())
}

/// Mask all Logos directives in `content`.
///
/// Content without directives is returned unchanged.
pub fn mask(content: &str) -> MaskedSource {
    let sigil = choose_sigil(content);
    let masked = Masker::new(content, &sigil).run();
    debug!("Masked {} Logos directive(s)", masked.markers.len());
    masked
}

/// Restore the directives hidden by [`mask`] in `formatted`.
pub fn unmask(formatted: &str, markers: &MarkerSet) -> DialectResult<String> {
    if markers.is_empty() {
        return Ok(formatted.to_string());
    }

    let token_re = Regex::new(&format!("@{}([A-Za-z]*)", regex::escape(&markers.sigil)))
        .map_err(|e| DialectError::InvalidSigil(e.to_string()))?;

    let tokens: Vec<(Range<usize>, &str)> = token_re
        .captures_iter(formatted)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some((whole.range(), name.as_str()))
        })
        .collect();

    let mut out = String::with_capacity(formatted.len());
    let mut cursor = 0;

    for (index, marker) in markers.iter().enumerate() {
        let Some((range, name)) = tokens.get(index) else {
            return Err(DialectError::MarkerMissing {
                index,
                expected: marker.directive.name().to_string(),
            });
        };

        let found =
            Directive::from_name(name).ok_or_else(|| DialectError::UnknownDirective(name.to_string()))?;
        if found != marker.directive {
            return Err(DialectError::MarkerMismatch {
                index,
                expected: marker.directive.name().to_string(),
                found: found.name().to_string(),
            });
        }

        out.push_str(&formatted[cursor..range.start]);
        out.push('%');
        out.push_str(found.name());
        cursor = range.end;

        if marker.terminated {
            let limit = tokens
                .get(index + 1)
                .map(|(next, _)| next.start)
                .unwrap_or(formatted.len());
            let Some(offset) = formatted[cursor..limit].find(';') else {
                return Err(DialectError::TerminatorMissing {
                    index,
                    directive: found.name().to_string(),
                });
            };
            let semicolon = cursor + offset;
            out.push_str(&formatted[cursor..semicolon]);
            cursor = semicolon + 1;
        }
    }

    if tokens.len() > markers.len() {
        return Err(DialectError::UnexpectedMarkers(tokens.len() - markers.len()));
    }

    out.push_str(&formatted[cursor..]);
    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Code,
    LineComment,
    BlockComment,
    Str,
    Char,
}

struct Masker<'a> {
    src: &'a str,
    bytes: &'a [u8],
    sigil: &'a str,
    out: String,
    /// Bytes of `src` already copied to `out`.
    copied: usize,
    markers: Vec<DialectMarker>,
    /// Marker waiting for its `;`.
    pending: Option<usize>,
    /// End of the last non-whitespace code byte since the pending directive.
    code_end: usize,
    open_blocks: Vec<(Directive, usize)>,
    line: usize,
}

impl<'a> Masker<'a> {
    fn new(src: &'a str, sigil: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            sigil,
            out: String::with_capacity(src.len()),
            copied: 0,
            markers: Vec::new(),
            pending: None,
            code_end: 0,
            open_blocks: Vec::new(),
            line: 1,
        }
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.bytes.get(i).copied()
    }

    fn run(mut self) -> MaskedSource {
        let mut state = ScanState::Code;
        let mut i = 0;

        while i < self.bytes.len() {
            let b = self.bytes[i];
            if b == b'\n' {
                self.line += 1;
            }

            match state {
                ScanState::Code => match b {
                    b'/' if self.peek(i + 1) == Some(b'/') => {
                        self.flush_pending();
                        state = ScanState::LineComment;
                        i += 2;
                        continue;
                    }
                    b'/' if self.peek(i + 1) == Some(b'*') => {
                        self.flush_pending();
                        state = ScanState::BlockComment;
                        i += 2;
                        continue;
                    }
                    b'"' => {
                        self.pending = None;
                        state = ScanState::Str;
                    }
                    b'\'' if self.is_digit_separator(i) => self.code_end = i + 1,
                    b'\'' => {
                        self.pending = None;
                        state = ScanState::Char;
                    }
                    b'\n' => self.flush_pending(),
                    b';' | b'{' | b'}' => self.pending = None,
                    b'%' => {
                        if let Some((directive, end)) = self.directive_at(i) {
                            self.flush_pending();
                            self.push_marker(directive, i, end);
                            i = end;
                            continue;
                        }
                        self.code_end = i + 1;
                    }
                    _ if !b.is_ascii_whitespace() => self.code_end = i + 1,
                    _ => {}
                },
                ScanState::LineComment => {
                    if b == b'\n' {
                        state = ScanState::Code;
                    }
                }
                ScanState::BlockComment => {
                    if b == b'*' && self.peek(i + 1) == Some(b'/') {
                        state = ScanState::Code;
                        i += 2;
                        continue;
                    }
                }
                ScanState::Str | ScanState::Char => {
                    let quote = if state == ScanState::Str { b'"' } else { b'\'' };
                    if b == b'\\' {
                        if self.peek(i + 1) == Some(b'\n') {
                            self.line += 1;
                        }
                        i += 2;
                        continue;
                    }
                    if b == quote || b == b'\n' {
                        state = ScanState::Code;
                    }
                }
            }
            i += 1;
        }

        self.flush_pending();
        for (directive, line) in &self.open_blocks {
            warn!("{} opened on line {} is never closed with %end", directive, line);
        }

        self.out.push_str(&self.src[self.copied..]);
        MaskedSource {
            content: self.out,
            markers: MarkerSet {
                sigil: self.sigil.to_string(),
                markers: self.markers,
            },
        }
    }

    /// A `'` inside a numeric literal such as `1'000` (C++14).
    fn is_digit_separator(&self, i: usize) -> bool {
        let mut start = i;
        while start > 0 {
            let b = self.bytes[start - 1];
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'\'' || b == b'.' {
                start -= 1;
            } else {
                break;
            }
        }
        start < i
            && self.bytes[start].is_ascii_digit()
            && self.peek(i + 1).is_some_and(|b| b.is_ascii_alphanumeric())
    }

    /// Recognize `%name` at `i`, returning the directive and the end offset.
    fn directive_at(&self, i: usize) -> Option<(Directive, usize)> {
        if i > 0 {
            let prev = self.bytes[i - 1];
            if prev.is_ascii_alphanumeric() || prev == b'_' || prev == b')' || prev == b']' || !prev.is_ascii() {
                return None;
            }
        }

        let start = i + 1;
        let end = self.bytes[start..]
            .iter()
            .position(|b| !(b.is_ascii_alphanumeric() || *b == b'_'))
            .map_or(self.bytes.len(), |n| start + n);

        Directive::from_name(&self.src[start..end]).map(|d| (d, end))
    }

    fn push_marker(&mut self, directive: Directive, start: usize, end: usize) {
        self.out.push_str(&self.src[self.copied..start]);
        let token = format!("@{}{}", self.sigil, directive.name());
        self.out.push_str(&token);
        self.copied = end;
        self.code_end = end;

        self.track_block(directive);

        self.markers.push(DialectMarker {
            directive,
            span: start..end,
            token,
            terminated: false,
        });
        if directive.needs_terminator() {
            self.pending = Some(self.markers.len() - 1);
        }
    }

    fn track_block(&mut self, directive: Directive) {
        if directive.opens_block() {
            self.open_blocks.push((directive, self.line));
        } else if directive == Directive::End && self.open_blocks.pop().is_none() {
            warn!("%end on line {} has no matching %hook, %group or %subclass", self.line);
        }
    }

    fn flush_pending(&mut self) {
        let Some(index) = self.pending.take() else {
            return;
        };
        self.out.push_str(&self.src[self.copied..self.code_end]);
        self.out.push(';');
        self.copied = self.code_end;
        self.markers[index].terminated = true;
    }
}
