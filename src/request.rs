use super::error::Error;
use super::fields::{parse_header_line, split_prefix};
use super::CRLF;
use tracing::{debug, warn};

/// The first line of a request, broken into its three fields.
#[derive(Debug, Eq, PartialEq)]
pub struct RequestLine {
    pub method: String,
    pub url: String,
    pub version: String,

    /// Byte length of the line, including its terminating CRLF.
    pub consumed: usize,
}

/// Everything the proxy needs out of a request head: the request line
/// fields, plus the value of the last `Host` header for routing.
#[derive(Debug, Eq, PartialEq)]
pub struct RequestHead {
    pub method: String,
    pub url: String,
    pub version: String,
    pub host: Option<String>,
}

/// Parse a `METHOD SP URL SP VERSION CRLF` request line from the front
/// of `line`, which may contain further content after the terminating
/// CRLF.  Fields are copied as-is; in particular the URL is not decoded.
pub fn parse_request_line(line: &str) -> Result<RequestLine, Error> {
    let end = line
        .find(CRLF)
        .ok_or_else(|| Error::MalformedRequestLine(line.into()))?;
    let current = &line[..end];
    let (method, at_url) = split_prefix(current, " ")
        .ok_or_else(|| Error::MalformedRequestLine(current.into()))?;
    let (url, version) = split_prefix(at_url, " ")
        .ok_or_else(|| Error::MalformedRequestLine(current.into()))?;
    Ok(RequestLine{
        method,
        url,
        version: version.into(),
        consumed: end + CRLF.len(),
    })
}

/// Assemble a complete request head (as produced by
/// [`split_head_body`](fn.split_head_body.html)): the request line
/// followed by every header line.  If the peer repeats the `Host`
/// header, the last occurrence wins.
///
/// A header line that fails to parse aborts the rest of the head; the
/// cursor otherwise advances by each line's consumed length until it
/// reaches the end of the head.
pub fn parse_request_head(head: &str) -> Result<RequestHead, Error> {
    let request_line = parse_request_line(head)?;
    let mut host = None;
    let mut cursor = request_line.consumed;
    while cursor < head.len() {
        let field = parse_header_line(&head[cursor..]).map_err(|error| {
            warn!(offset = %cursor, "request head has a malformed header line");
            error
        })?;
        cursor += field.consumed;
        if field.name == "Host" {
            host = Some(field.value);
        }
    }
    let assembled = RequestHead{
        method: request_line.method,
        url: request_line.url,
        version: request_line.version,
        host,
    };
    debug!(
        method = %assembled.method,
        url = %assembled.url,
        host = assembled.host.as_deref().unwrap_or(""),
        "parsed request head",
    );
    Ok(assembled)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_get_request_line() {
        let line = "GET /index.html HTTP/1.1\r\n";
        assert_eq!(
            Ok(RequestLine{
                method: "GET".into(),
                url: "/index.html".into(),
                version: "HTTP/1.1".into(),
                consumed: line.len(),
            }),
            parse_request_line(line)
        );
    }

    #[test]
    fn request_line_consumed_reslices_to_remainder() {
        let head = concat!(
            "GET / HTTP/1.1\r\n",
            "Host: a\r\n",
        );
        let line = parse_request_line(head).unwrap();
        assert_eq!("Host: a\r\n", &head[line.consumed..]);
    }

    #[test]
    fn request_line_without_spaces_is_malformed() {
        assert_eq!(
            Err(Error::MalformedRequestLine("GET/index.html".into())),
            parse_request_line("GET/index.html\r\n")
        );
    }

    #[test]
    fn request_line_with_one_space_is_malformed() {
        assert_eq!(
            Err(Error::MalformedRequestLine("GET /index.html".into())),
            parse_request_line("GET /index.html\r\n")
        );
    }

    #[test]
    fn request_line_without_terminator_is_malformed() {
        assert_eq!(
            Err(Error::MalformedRequestLine(
                "GET /index.html HTTP/1.1".into()
            )),
            parse_request_line("GET /index.html HTTP/1.1")
        );
    }

    #[test]
    fn parse_request_head_collects_host() {
        let head = concat!(
            "GET /index.html HTTP/1.1\r\n",
            "Host: example.com:8080\r\n",
            "User-Agent: test\r\n",
        );
        assert_eq!(
            Ok(RequestHead{
                method: "GET".into(),
                url: "/index.html".into(),
                version: "HTTP/1.1".into(),
                host: Some("example.com:8080".into()),
            }),
            parse_request_head(head)
        );
    }

    #[test]
    fn parse_request_head_without_host() {
        let head = concat!(
            "GET / HTTP/1.1\r\n",
            "User-Agent: test\r\n",
            "Accept-Language: en, mi\r\n",
        );
        assert_eq!(
            Ok(RequestHead{
                method: "GET".into(),
                url: "/".into(),
                version: "HTTP/1.1".into(),
                host: None,
            }),
            parse_request_head(head)
        );
    }

    #[test]
    fn parse_request_head_with_no_headers_at_all() {
        assert_eq!(
            Ok(RequestHead{
                method: "GET".into(),
                url: "/".into(),
                version: "HTTP/1.1".into(),
                host: None,
            }),
            parse_request_head("GET / HTTP/1.1\r\n")
        );
    }

    #[test]
    fn repeated_host_last_occurrence_wins() {
        let head = concat!(
            "GET / HTTP/1.1\r\n",
            "Host: first.example.com\r\n",
            "Host: second.example.com\r\n",
        );
        assert_eq!(
            Some("second.example.com"),
            parse_request_head(head).unwrap().host.as_deref()
        );
    }

    #[test]
    fn host_name_match_is_case_sensitive() {
        let head = concat!(
            "GET / HTTP/1.1\r\n",
            "host: example.com\r\n",
        );
        assert_eq!(None, parse_request_head(head).unwrap().host);
    }

    #[test]
    fn malformed_header_line_stops_assembly() {
        let head = concat!(
            "GET / HTTP/1.1\r\n",
            "Host: a\r\n",
            "User-Agent curl/7.16.3\r\n",
        );
        assert_eq!(
            Err(Error::MalformedHeaderLine(
                "User-Agent curl/7.16.3".into()
            )),
            parse_request_head(head)
        );
    }

    #[test]
    fn parse_request_head_twice_produces_identical_output() {
        let head = concat!(
            "GET /index.html HTTP/1.1\r\n",
            "Host: example.com\r\n",
        );
        assert_eq!(parse_request_head(head), parse_request_head(head));
    }

    #[test]
    fn assemble_request_from_raw_buffer() {
        let raw = concat!(
            "GET /index.html HTTP/1.1\r\n",
            "Host: example.com:8080\r\n",
            "User-Agent: test\r\n",
            "\r\n",
        );
        let parts = crate::split_head_body(raw).unwrap();
        assert!(parts.body.is_empty());
        let head = parse_request_head(&parts.head).unwrap();
        assert_eq!("GET", head.method);
        assert_eq!("/index.html", head.url);
        assert_eq!("HTTP/1.1", head.version);
        assert_eq!(
            crate::HostAddress{
                hostname: "example.com".into(),
                port: Some(8080),
            },
            crate::parse_host_field(head.host.as_deref().unwrap())
        );
    }
}
