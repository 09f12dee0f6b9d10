use super::error::Error;
use super::CRLF;

// Name/value separator in a header line.  Exactly one space is required
// after the colon; lines that omit it are treated as malformed rather
// than repaired.
const NAME_VALUE_SEPARATOR: &str = ": ";

/// One `name: value` pair parsed out of the head of a message.
#[derive(Debug, Eq, PartialEq)]
pub struct HeaderField {
    pub name: String,
    pub value: String,

    /// Byte length of the header line, including its terminating CRLF.
    pub consumed: usize,
}

/// Copy the part of `text` before the first occurrence of `delimiter`,
/// returning it along with the remainder of `text` just past the
/// delimiter.  The prefix is empty if `text` starts with the delimiter.
/// Returns `None` if the delimiter never occurs; nothing is copied in
/// that case.
pub(crate) fn split_prefix<'a>(
    text: &'a str,
    delimiter: &str,
) -> Option<(String, &'a str)> {
    let end = text.find(delimiter)?;
    Some((
        text[..end].to_string(),
        &text[end + delimiter.len()..],
    ))
}

/// Parse the decimal digits at the front of `text`, stopping at the first
/// non-digit, and yielding 0 when `text` does not start with a digit.
/// Non-conformant peers send non-numeric status codes and header values;
/// tolerating them beats failing the whole message.  Accumulation
/// saturates, so a crafted digit run cannot wrap.
pub(crate) fn lenient_number(text: &str) -> usize {
    let mut value: usize = 0;
    for digit in text.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(usize::from(digit - b'0'));
    }
    value
}

/// Parse one `NAME: SP VALUE CRLF` header line from the front of `line`,
/// which may contain further content after the terminating CRLF.
///
/// The separator must appear before the line terminator, so a line that
/// is missing its separator cannot swallow the lines after it.
pub fn parse_header_line(line: &str) -> Result<HeaderField, Error> {
    let current = match line.find(CRLF) {
        Some(end) => &line[..end],
        None => line,
    };
    let (name, _) = split_prefix(current, NAME_VALUE_SEPARATOR)
        .ok_or_else(|| Error::MalformedHeaderLine(current.into()))?;
    let at_value = &line[name.len() + NAME_VALUE_SEPARATOR.len()..];
    let (value, at_rest) = split_prefix(at_value, CRLF)
        .ok_or_else(|| Error::MalformedHeaderLine(current.into()))?;
    Ok(HeaderField {
        name,
        value,
        consumed: line.len() - at_rest.len(),
    })
}
