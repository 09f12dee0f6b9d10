/// This is the enumeration of all the different kinds of errors which this
/// crate generates.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The head of the message contains bytes which do not form valid text.
    #[error("message head is not valid text")]
    HeadNotValidText(Vec<u8>),

    /// The blank line ending the head of the message has not arrived yet.
    /// This is not a parse failure; the caller should read more bytes from
    /// the connection and try again.
    #[error("message head is incomplete")]
    IncompleteHead,

    /// A header line was missing its name/value separator or its line
    /// terminator.  The attached text is the offending line.
    #[error("unable to parse header line")]
    MalformedHeaderLine(String),

    /// The request line was missing one of its delimiters.  The attached
    /// text is the offending line.
    #[error("unable to parse request line")]
    MalformedRequestLine(String),

    /// The status line was missing one of its delimiters.  The attached
    /// text is the offending line.
    #[error("unable to parse status line")]
    MalformedStatusLine(String),
}
