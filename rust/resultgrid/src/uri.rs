//! Result-URI query handling.
//!
//! Result URIs carry `dimensions`, `limit`, and `offset` query parameters,
//! with multi-dimension limit/offset values comma-joined and the comma
//! percent-escaped on the wire (`limit=5%2C5`). Paging means rewriting just
//! those two keys while leaving everything else, including key order, alone.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// Parsed query string as an ordered key/value list (decoded values).
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let decode = |s: &str| {
                urlencoding::decode(s)
                    .map(Cow::into_owned)
                    .unwrap_or_else(|_| s.to_string())
            };
            (decode(key), decode(value))
        })
        .collect()
}

fn serialize_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Splits a URI into its path and query parts at the first `?`.
fn split_uri(uri: &str) -> (&str, &str) {
    match uri.split_once('?') {
        Some((path, query)) => (path, query),
        None => (uri, ""),
    }
}

/// Number of result dimensions declared by the URI, validated to be 1 or 2.
pub fn dimensions_from_uri(uri: &str) -> Result<usize> {
    let (_, query) = split_uri(uri);
    let dimensions = parse_query(query)
        .into_iter()
        .find(|(key, _)| key == "dimensions")
        .and_then(|(_, value)| value.parse::<i64>().ok())
        .ok_or_else(|| Error::MissingDimensions {
            uri: uri.to_string(),
        })?;

    match dimensions {
        1 | 2 => Ok(dimensions as usize),
        other => Err(Error::InvalidDimensions(other)),
    }
}

/// Rewrites the `limit` and `offset` query parameters of a result URI,
/// keeping every other parameter and the overall key order intact.
pub fn replace_limit_and_offset(uri: &str, limit: &[i64], offset: &[i64]) -> String {
    let (path, query) = split_uri(uri);
    let mut pairs = parse_query(query);

    let join = |values: &[i64]| {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };

    let mut set = |key: &str, value: String| {
        if let Some(pair) = pairs.iter_mut().find(|(k, _)| k == key) {
            pair.1 = value;
        } else {
            pairs.push((key.to_string(), value));
        }
    };

    set("limit", join(limit));
    set("offset", join(offset));

    format!("{}?{}", path, serialize_query(&pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_window_for_one_dimension() {
        let uri = "/gdc/app/projects/projectId/executionResults/123?dimensions=1&limit=1000&offset=0";

        assert_eq!(
            replace_limit_and_offset(uri, &[5], &[3]),
            "/gdc/app/projects/projectId/executionResults/123?dimensions=1&limit=5&offset=3"
        );
    }

    #[test]
    fn replaces_window_for_two_dimensions() {
        let uri =
            "/gdc/app/projects/projectId/executionResults/123?dimensions=2&limit=1000%2C1000&offset=0%2C0";

        assert_eq!(
            replace_limit_and_offset(uri, &[12, 12], &[3, 9]),
            "/gdc/app/projects/projectId/executionResults/123?dimensions=2&limit=12%2C12&offset=3%2C9"
        );
    }

    #[test]
    fn appends_window_when_uri_has_none() {
        let uri = "/gdc/app/projects/projectId/executionResults/123?dimensions=2";

        assert_eq!(
            replace_limit_and_offset(uri, &[5, 5], &[0, 0]),
            "/gdc/app/projects/projectId/executionResults/123?dimensions=2&limit=5%2C5&offset=0%2C0"
        );
    }

    #[test]
    fn replacement_is_idempotent() {
        let uri =
            "/gdc/app/projects/projectId/executionResults/123?dimensions=2&limit=1000%2C1000&offset=0%2C0";

        let once = replace_limit_and_offset(uri, &[5, 5], &[0, 10]);
        let twice = replace_limit_and_offset(&once, &[5, 5], &[0, 10]);
        assert_eq!(once, twice);
    }

    #[test]
    fn reads_dimensionality() {
        assert_eq!(
            dimensions_from_uri("/gdc/executionResults/1?dimensions=1&limit=5&offset=0").unwrap(),
            1
        );
        assert_eq!(
            dimensions_from_uri("/gdc/executionResults/1?dimensions=2&limit=5%2C5&offset=0%2C0")
                .unwrap(),
            2
        );
    }

    #[test]
    fn rejects_unsupported_dimensionality() {
        let err = dimensions_from_uri("/gdc/executionResults/1?dimensions=3").unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions(3)));

        let err = dimensions_from_uri("/gdc/executionResults/1?limit=5").unwrap_err();
        assert!(matches!(err, Error::MissingDimensions { .. }));
    }
}
