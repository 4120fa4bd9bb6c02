use crate::directives::starts_with_marker;
use crate::robots::HeaderValue;
use log::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderEntry {
    name: Option<String>,
    value: HeaderValue,
}

impl HeaderEntry {
    pub fn new(name: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self {
            name: None,
            value: HeaderValue::Single(line.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> &HeaderValue {
        &self.value
    }
}

/// Selects by name, or by the comma-joined value for folded headers. Each
/// value of a repeated header stays its own candidate.
pub fn extract_robots_headers(entries: &[HeaderEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| {
            entry.name().is_some_and(starts_with_marker)
                || starts_with_marker(&entry.value().flatten())
        })
        .flat_map(|entry| entry.value().values().iter().cloned())
        .inspect(|value| debug!("selected robots header value: {}", value))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_selects_by_name_case_insensitively() {
        let entries = vec![
            HeaderEntry::new("Content-Type", "text/html"),
            HeaderEntry::new("x-ROBOTS-tag", "noindex"),
        ];

        assert_eq!(extract_robots_headers(&entries), vec!["noindex"]);
    }

    #[test]
    fn test_selects_by_value_prefix() {
        let entries = vec![
            HeaderEntry::line("HTTP/1.1 200 OK"),
            HeaderEntry::line("X-Robots-Tag: google: nofollow"),
            HeaderEntry::new("Link", "x-robots-tag: noindex"),
        ];

        assert_eq!(
            extract_robots_headers(&entries),
            vec!["X-Robots-Tag: google: nofollow", "x-robots-tag: noindex"]
        );
    }

    #[test]
    fn test_repeated_headers_stay_separate_in_order() {
        let entries = vec![
            HeaderEntry::new("X-Robots-Tag", ["google: noindex", "nofollow"]),
            HeaderEntry::new("X-Robots-Tag-Extra", "none"),
        ];

        assert_eq!(
            extract_robots_headers(&entries),
            vec!["google: noindex", "nofollow", "none"]
        );
    }

    #[test]
    fn test_selects_repeated_value_by_joined_prefix() {
        let entries = vec![HeaderEntry::new("Link", ["x-robots-tag: noindex", "<https://a>"])];

        assert_eq!(
            extract_robots_headers(&entries),
            vec!["x-robots-tag: noindex", "<https://a>"]
        );
    }

    #[test]
    fn test_no_headers() {
        assert!(extract_robots_headers(&[]).is_empty());
    }
}
