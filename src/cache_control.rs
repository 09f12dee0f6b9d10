use super::fields::lenient_number;

// Cache directive whose value is the freshness lifetime in seconds.
const MAX_AGE_KEY: &str = "max-age=";

/// Extract the `max-age` directive from a `Cache-Control` header value.
///
/// Returns `None` when the directive is absent or has no value after the
/// `=`; many responses legitimately omit it.  A non-numeric value yields
/// `Some(0)`, the same leniency applied to status codes.
#[must_use]
pub fn parse_max_age(value: &str) -> Option<usize> {
    let key = value.find(MAX_AGE_KEY)?;
    let seconds = &value[key + MAX_AGE_KEY.len()..];
    if seconds.is_empty() {
        return None;
    }
    Some(lenient_number(seconds))
}
