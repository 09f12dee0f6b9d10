use super::error::Error;
use super::{CRLF, CRLF_CRLF};

/// The two halves of a raw message buffer: the head, which upstream
/// guarantees is complete, and whatever portion of the entity body
/// arrived along with it.
#[derive(Debug, Eq, PartialEq)]
pub struct MessageParts {
    /// Request or status line plus every header line, through the CRLF
    /// ending the last header line.  The blank line is not included.
    pub head: String,

    /// All bytes after the blank line.  May be empty, and may be only a
    /// prefix of the full entity body.
    pub body: Vec<u8>,
}

fn find_blank_line(raw: &[u8]) -> Option<usize> {
    raw.windows(CRLF_CRLF.len())
        .position(|window| window == CRLF_CRLF)
}

/// Split a raw message buffer at the blank line ending its head.
///
/// The buffer is not assumed to be text or null-terminated; only the
/// head must be valid UTF-8, and the body is returned as raw bytes.  How
/// much of the body has arrived is deliberately not reconciled against
/// `Content-Length` here; that is the connection layer's concern.
///
/// Until the blank line arrives this returns
/// [`Error::IncompleteHead`](enum.Error.html#variant.IncompleteHead),
/// and the caller may safely retry with a larger buffer.
pub fn split_head_body<T>(raw: T) -> Result<MessageParts, Error>
    where T: AsRef<[u8]>
{
    let raw = raw.as_ref();
    let boundary = find_blank_line(raw).ok_or(Error::IncompleteHead)?;
    let head = &raw[..boundary + CRLF.len()];
    let head = std::str::from_utf8(head)
        .map_err(|_| Error::HeadNotValidText(head.to_vec()))?;
    Ok(MessageParts{
        head: head.into(),
        body: raw[boundary + CRLF_CRLF.len()..].to_vec(),
    })
}

/// Remove the first complete request head from `buf` and return it,
/// including its terminating blank line.  While no complete head has
/// accumulated yet, this returns `None` and leaves `buf` untouched.
pub fn drain_first_request(buf: &mut Vec<u8>) -> Option<Vec<u8>> {
    let boundary = find_blank_line(buf)?;
    Some(buf.drain(..boundary + CRLF_CRLF.len()).collect())
}
