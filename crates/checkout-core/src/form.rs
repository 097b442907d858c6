//! Form Body Decoding
//!
//! Strict `application/x-www-form-urlencoded` reader for the checkout
//! request body. Lossy decoders swallow broken escapes; the endpoint
//! contract needs them to be errors, so escapes are validated before
//! percent-decoding.

use percent_encoding::percent_decode_str;

use crate::error::{CheckoutError, Result};

/// Decoded url-encoded request body.
///
/// Absent fields stay absent: [`FormBody::get`] returns `None` rather
/// than an empty string, so callers can tell a missing `callback` from
/// an empty one.
#[derive(Clone, Debug, Default)]
pub struct FormBody {
    fields: Vec<(String, String)>,
}

impl FormBody {
    /// Decode a request body.
    ///
    /// Pairs split on `&`, empty segments are skipped, and a segment
    /// without `=` is a field with an empty value. Fails with
    /// [`CheckoutError::Parse`] on a malformed percent escape or
    /// non-UTF-8 field data anywhere in the body.
    pub fn parse(body: &str) -> Result<Self> {
        let mut fields = Vec::new();

        for segment in body.split('&') {
            if segment.is_empty() {
                continue;
            }

            let (raw_name, raw_value) = match segment.split_once('=') {
                Some((name, value)) => (name, value),
                None => (segment, ""),
            };

            let name = decode_component(raw_name)?;
            if name.is_empty() {
                continue;
            }
            let value = decode_component(raw_value)?;

            fields.push((name, value));
        }

        Ok(Self { fields })
    }

    /// First value for `name`, or `None` if the field is absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Decode one name or value component.
fn decode_component(raw: &str) -> Result<String> {
    // percent_decode passes broken escapes through untouched, so reject
    // them up front: every '%' must introduce two hex digits.
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(CheckoutError::Parse(format!(
                    "invalid percent escape at byte {i}"
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let unplussed = raw.replace('+', " ");
    percent_decode_str(&unplussed)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|err| CheckoutError::Parse(format!("field data is not UTF-8: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_fields() {
        let form = FormBody::parse("stripeToken=tok_visa&sku=mug&callback=https%3A%2F%2Fexample.com%2Fx").unwrap();
        assert_eq!(form.get("stripeToken"), Some("tok_visa"));
        assert_eq!(form.get("sku"), Some("mug"));
        assert_eq!(form.get("callback"), Some("https://example.com/x"));
    }

    #[test]
    fn absent_field_is_none_but_empty_field_is_present() {
        let form = FormBody::parse("sku=mug&callback=").unwrap();
        assert_eq!(form.get("stripeToken"), None);
        assert_eq!(form.get("callback"), Some(""));
    }

    #[test]
    fn plus_and_percent_escapes_decode() {
        let form = FormBody::parse("name=coffee+mug%2C+large").unwrap();
        assert_eq!(form.get("name"), Some("coffee mug, large"));
    }

    #[test]
    fn segment_without_equals_is_an_empty_value() {
        let form = FormBody::parse("flag&sku=mug").unwrap();
        assert_eq!(form.get("flag"), Some(""));
        assert_eq!(form.get("sku"), Some("mug"));
    }

    #[test]
    fn empty_segments_are_skipped() {
        let form = FormBody::parse("&sku=mug&&").unwrap();
        assert_eq!(form.get("sku"), Some("mug"));
    }

    #[test]
    fn empty_body_has_no_fields() {
        let form = FormBody::parse("").unwrap();
        assert_eq!(form.get("sku"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let form = FormBody::parse("sku=mug&sku=towel").unwrap();
        assert_eq!(form.get("sku"), Some("mug"));
    }

    #[test]
    fn malformed_escape_is_a_parse_error() {
        for body in ["sku=%zz", "sku=%2", "sku=100%", "%G0=x"] {
            let err = FormBody::parse(body).unwrap_err();
            assert!(matches!(err, CheckoutError::Parse(_)), "{body}");
        }
    }

    #[test]
    fn non_utf8_field_data_is_a_parse_error() {
        let err = FormBody::parse("sku=%FF").unwrap_err();
        assert!(matches!(err, CheckoutError::Parse(_)));
    }
}
