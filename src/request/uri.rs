//! URL assembly: path template substitution and query strings.

use crate::schema::FieldSchema;
use crate::value::{Record, scalar_to_string};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::form_urlencoded;

/// Characters escaped in a path segment: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const PATH_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes one path value.
pub fn encode_path_value(value: &str) -> String {
    utf8_percent_encode(value, PATH_VALUE).to_string()
}

/// Replaces every `{name}` placeholder in `template` with the encoded value of `name`.
///
/// Placeholders without a value, or with an empty one, stay in the output verbatim.
pub fn substitute_path(template: &str, values: &Record) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(len) = rest[open..].find('}') else {
            break;
        };
        let close = open + len;
        out.push_str(&rest[..open]);

        let name = &rest[open + 1..close];
        match values
            .get(name)
            .and_then(scalar_to_string)
            .filter(|v| !v.is_empty())
        {
            Some(value) => out.push_str(&encode_path_value(&value)),
            None => out.push_str(&rest[open..=close]),
        }
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Form-encodes the set query values in schema order. Unset, `null` and empty values are skipped.
pub fn query_string(params: &[FieldSchema], values: &Record) -> Option<String> {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;

    for field in params {
        let Some(value) = values
            .get(&field.key)
            .and_then(scalar_to_string)
            .filter(|v| !v.is_empty())
        else {
            continue;
        };
        serializer.append_pair(&field.key, &value);
        any = true;
    }

    any.then(|| serializer.finish())
}

/// Joins the base URL, the substituted path and the query string.
pub fn build_url(base_url: &str, path: &str, query: Option<&str>) -> String {
    let base = base_url.trim_end_matches('/');
    match query {
        Some(q) => format!("{}{}?{}", base, path, q),
        None => format!("{}{}", base, path),
    }
}
