use super::error::Error;
use super::fields::{lenient_number, parse_header_line, split_prefix};
use super::CRLF;
use tracing::{debug, warn};

/// The first line of a response, broken into its three fields.
#[derive(Debug, Eq, PartialEq)]
pub struct StatusLine {
    pub version: String,

    /// Best-effort integer; a non-numeric status code from a
    /// non-conformant server yields 0 rather than failing the parse.
    pub status_code: usize,
    pub phrase: String,

    /// Byte length of the line, including its terminating CRLF.
    pub consumed: usize,
}

/// Everything the proxy needs out of a response head: the status line
/// fields, plus `Content-Length` for body framing and the raw
/// `Cache-Control` value for caching policy.
#[derive(Debug, Eq, PartialEq)]
pub struct ResponseHead {
    pub version: String,
    pub status_code: usize,
    pub phrase: String,
    pub content_length: Option<usize>,
    pub cache_control: Option<String>,
}

/// Parse a `VERSION SP STATUS_CODE SP PHRASE CRLF` status line from the
/// front of `line`, which may contain further content after the
/// terminating CRLF.
pub fn parse_status_line(line: &str) -> Result<StatusLine, Error> {
    let end = line
        .find(CRLF)
        .ok_or_else(|| Error::MalformedStatusLine(line.into()))?;
    let current = &line[..end];
    let (version, at_status) = split_prefix(current, " ")
        .ok_or_else(|| Error::MalformedStatusLine(current.into()))?;
    let (status_code, phrase) = split_prefix(at_status, " ")
        .ok_or_else(|| Error::MalformedStatusLine(current.into()))?;
    Ok(StatusLine{
        version,
        status_code: lenient_number(&status_code),
        phrase: phrase.into(),
        consumed: end + CRLF.len(),
    })
}

/// Assemble a complete response head (as produced by
/// [`split_head_body`](fn.split_head_body.html)): the status line
/// followed by every header line.  `Content-Length` and `Cache-Control`
/// are retained; if either is repeated, the last occurrence wins.  Every
/// other header is inspected and discarded.
///
/// A header line that fails to parse aborts the rest of the head.
pub fn parse_response_head(head: &str) -> Result<ResponseHead, Error> {
    let status_line = parse_status_line(head)?;
    let mut content_length = None;
    let mut cache_control = None;
    let mut cursor = status_line.consumed;
    while cursor < head.len() {
        let field = parse_header_line(&head[cursor..]).map_err(|error| {
            warn!(offset = %cursor, "response head has a malformed header line");
            error
        })?;
        cursor += field.consumed;
        if field.name == "Content-Length" {
            content_length = Some(lenient_number(&field.value));
        } else if field.name == "Cache-Control" {
            cache_control = Some(field.value);
        }
    }
    let assembled = ResponseHead{
        version: status_line.version,
        status_code: status_line.status_code,
        phrase: status_line.phrase,
        content_length,
        cache_control,
    };
    debug!(
        status_code = %assembled.status_code,
        content_length = ?assembled.content_length,
        "parsed response head",
    );
    Ok(assembled)
}
