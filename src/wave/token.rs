//! Numeric token extraction from path text
//!
//! This is not a path grammar. It finds every maximal run of the form
//! `-?digits(.digits)?` (or `-?.digits`) and treats everything else as opaque
//! text that must survive untouched.

use serde::{Deserialize, Serialize};

/// Coordinate role guessed from token position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// One number found in a path description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathToken {
    pub value: f64,
    /// Byte offset of the first character (including any minus sign)
    pub offset: usize,
    /// Byte length of the numeric text
    pub len: usize,
    /// Index among the numbers of the source text
    pub ordinal: usize,
}

impl PathToken {
    /// Even ordinals read as X, odd as Y.
    ///
    /// Commands with an odd argument count (H, V, arcs) shift every later
    /// token onto the wrong axis; the animation only needs the two roles to
    /// move out of step, not geometric accuracy.
    #[inline]
    pub fn axis(&self) -> Axis {
        if self.ordinal % 2 == 0 { Axis::X } else { Axis::Y }
    }

    /// Byte range in the source text
    #[inline]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Length of the digit run starting at `start`
fn digit_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Match a number at `start`; returns its byte length
fn match_number(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }

    let int_len = digit_run(bytes, i);
    i += int_len;

    // A fraction only counts when digits follow the point
    if bytes.get(i) == Some(&b'.') {
        let frac_len = if i + 1 < bytes.len() { digit_run(bytes, i + 1) } else { 0 };
        if frac_len > 0 {
            i += 1 + frac_len;
        } else if int_len == 0 {
            return None;
        }
    } else if int_len == 0 {
        return None;
    }

    Some(i - start)
}

/// Extract every number in `text`, left to right
pub fn tokenize(text: &str) -> Vec<PathToken> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match match_number(bytes, i) {
            Some(len) => {
                let raw = &text[i..i + len];
                // Digit runs too long for f64 stay text
                if let Some(value) = raw.parse::<f64>().ok().filter(|v| v.is_finite()) {
                    tokens.push(PathToken {
                        value,
                        offset: i,
                        len,
                        ordinal: tokens.len(),
                    });
                }
                i += len;
            }
            None => i += 1,
        }
    }

    tokens
}
