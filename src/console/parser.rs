//! Command line parser
//!
//! A line is a single command letter followed by an optional number:
//!
//! ```text
//! line   := ws* letter ws* [ number ] anything*
//! number := ['+'|'-'] digits ['.' digits] [('e'|'E') ['+'|'-'] digits]
//! ```
//!
//! The number is the longest numeric prefix after the letter; anything that
//! follows it is ignored.

/// Command letter plus optional numeric argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedCommand {
    /// First non-whitespace byte of the line, as typed
    pub letter: u8,
    /// Numeric argument, if one could be read
    pub arg: Option<f32>,
}

impl ParsedCommand {
    /// Letter folded to lowercase for dispatch
    pub fn key(&self) -> u8 {
        self.letter.to_ascii_lowercase()
    }
}

/// Parse a buffered line.
///
/// Returns `None` for an empty or whitespace-only line.
pub fn parse_line(line: &[u8]) -> Option<ParsedCommand> {
    let rest = skip_whitespace(line);
    let (&letter, rest) = rest.split_first()?;
    let rest = skip_whitespace(rest);

    let arg = scan_number(rest).map(|(value, _)| value);

    Some(ParsedCommand { letter, arg })
}

/// Read the longest numeric prefix of `text`.
///
/// Returns the value and the number of bytes consumed, or `None` when the
/// text does not start with a number. Either side of the decimal point may
/// be empty but not both; an exponent marker without digits is left
/// unconsumed.
pub fn scan_number(text: &[u8]) -> Option<(f32, usize)> {
    let mut end = 0;

    if matches!(text.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&text[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if text.get(end) == Some(&b'.') {
        frac_digits = count_digits(&text[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(text.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(text.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&text[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    // The scanned prefix is ASCII by construction
    let literal = core::str::from_utf8(&text[..end]).ok()?;
    let value = literal.parse::<f32>().ok()?;
    Some((value, end))
}

fn skip_whitespace(text: &[u8]) -> &[u8] {
    let start = text
        .iter()
        .position(|b| !is_space(*b))
        .unwrap_or(text.len());
    &text[start..]
}

fn count_digits(text: &[u8]) -> usize {
    text.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\x0B' | b'\x0C' | b'\r' | b'\n')
}
