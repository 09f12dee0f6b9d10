#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod cache_control;
mod error;
mod fields;
mod host;
mod message;
mod request;
mod response;

pub use crate::cache_control::parse_max_age;
pub use crate::error::Error;
pub use crate::fields::{parse_header_line, HeaderField};
pub use crate::host::{parse_host_field, HostAddress};
pub use crate::message::{drain_first_request, split_head_body, MessageParts};
pub use crate::request::{parse_request_head, parse_request_line, RequestHead, RequestLine};
pub use crate::response::{parse_response_head, parse_status_line, ResponseHead, StatusLine};

// Carriage return followed by line feed, which terminates every line of
// an HTTP message head.
const CRLF: &str = "\r\n";

// Two consecutive line terminators form the blank line separating the
// head of an HTTP message from its body.
const CRLF_CRLF: &[u8] = b"\r\n\r\n";
