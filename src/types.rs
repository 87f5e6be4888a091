use std::borrow::Cow;

use url::Url;

use crate::error::{HelperError, Result};

/// Registrable domain lookup result
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainMatch {
    /// Best-effort registrable domain (eTLD+1), or the whole host when no suffix applied
    pub domain: String,
    /// Whether a suffix list entry was used to compute `domain`
    pub matched_suffix: bool,
}

impl DomainMatch {
    pub(crate) fn unmatched(host: &str) -> Self {
        Self {
            domain: host.to_string(),
            matched_suffix: false,
        }
    }
}

/// Split a host into its dot-separated labels.
///
/// One trailing dot is stripped first. An empty host yields a single empty label.
pub fn split_host_labels(host: &str) -> Vec<&str> {
    ParsedHost::new(host).labels()
}

/// Strip a single trailing dot from a host.
pub(crate) fn trim_host(host: &str) -> &str {
    host.strip_suffix('.').unwrap_or(host)
}

/// Host of a URL prepared for suffix comparison
#[derive(Debug, Clone)]
pub struct ParsedHost<'a> {
    /// Host with one trailing dot removed, original casing
    host: &'a str,
    /// Lowercased copy used for comparisons
    lowered: String,
}

impl<'a> ParsedHost<'a> {
    pub fn new(host: &'a str) -> Self {
        let host = trim_host(host);
        Self {
            host,
            lowered: host.to_ascii_lowercase(),
        }
    }

    /// Host of a URL; URLs without a host parse as the empty host.
    pub fn from_url(url: &'a Url) -> Self {
        Self::new(url.host_str().unwrap_or(""))
    }

    pub fn as_str(&self) -> &'a str {
        self.host
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    pub fn labels(&self) -> Vec<&'a str> {
        self.host.split('.').collect()
    }

    pub fn label_count(&self) -> usize {
        self.host.split('.').count()
    }

    /// Join the last `count` labels of the host, keeping the original casing.
    /// Returns the whole host when it has fewer labels than requested.
    pub fn trailing_labels(&self, count: usize) -> &'a str {
        if count == 0 {
            return "";
        }
        let mut remaining = count;
        for (idx, byte) in self.host.bytes().enumerate().rev() {
            if byte == b'.' {
                remaining -= 1;
                if remaining == 0 {
                    return &self.host[idx + 1..];
                }
            }
        }
        self.host
    }
}

/// Parse an absolute URL.
pub fn parse_url(input: &str) -> Result<Url> {
    Url::parse(input).map_err(|source| HelperError::InvalidUrlFormat {
        url: input.to_string(),
        source,
    })
}

/// Anything that can be viewed as a parsed URL.
///
/// Implemented for [`Url`] (borrowed as-is) and for strings, which are parsed
/// with [`parse_url`] and may fail with [`HelperError::InvalidUrlFormat`].
pub trait AsUrl {
    fn as_url(&self) -> Result<Cow<'_, Url>>;
}

impl AsUrl for Url {
    fn as_url(&self) -> Result<Cow<'_, Url>> {
        Ok(Cow::Borrowed(self))
    }
}

impl AsUrl for str {
    fn as_url(&self) -> Result<Cow<'_, Url>> {
        parse_url(self).map(Cow::Owned)
    }
}

impl AsUrl for String {
    fn as_url(&self) -> Result<Cow<'_, Url>> {
        self.as_str().as_url()
    }
}

impl<T: AsUrl + ?Sized> AsUrl for &T {
    fn as_url(&self) -> Result<Cow<'_, Url>> {
        (**self).as_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_host_labels() {
        assert_eq!(split_host_labels("www.example.com"), vec!["www", "example", "com"]);
        assert_eq!(split_host_labels("example.com."), vec!["example", "com"]);
        assert_eq!(split_host_labels("localhost"), vec!["localhost"]);
        assert_eq!(split_host_labels(""), vec![""]);
    }

    #[test]
    fn test_split_strips_only_one_trailing_dot() {
        assert_eq!(split_host_labels("example.com.."), vec!["example", "com", ""]);
    }

    #[test]
    fn test_parsed_host_lowered_keeps_original() {
        let host = ParsedHost::new("WWW.Example.COM.");
        assert_eq!(host.as_str(), "WWW.Example.COM");
        assert_eq!(host.lowered(), "www.example.com");
        assert_eq!(host.label_count(), 3);
    }

    #[test]
    fn test_parsed_host_labels_keep_casing() {
        let host = ParsedHost::new("Mail.Example.COM.");
        assert_eq!(host.labels(), vec!["Mail", "Example", "COM"]);
        assert_eq!(host.labels().len(), host.label_count());
    }

    #[test]
    fn test_trailing_labels() {
        let host = ParsedHost::new("a.B.example.co.uk");
        assert_eq!(host.trailing_labels(3), "example.co.uk");
        assert_eq!(host.trailing_labels(4), "B.example.co.uk");
        assert_eq!(host.trailing_labels(1), "uk");
        assert_eq!(host.trailing_labels(5), "a.B.example.co.uk");
        assert_eq!(host.trailing_labels(9), "a.B.example.co.uk");
        assert_eq!(host.trailing_labels(0), "");
    }

    #[test]
    fn test_parse_url_rejects_relative() {
        let err = parse_url("/just/a/path").unwrap_err();
        assert!(matches!(err, HelperError::InvalidUrlFormat { .. }));
    }

    #[test]
    fn test_as_url_borrows_parsed() {
        let url = Url::parse("http://example.com/").unwrap();
        assert!(matches!(url.as_url().unwrap(), Cow::Borrowed(_)));
        assert!(matches!("http://example.com/".as_url().unwrap(), Cow::Owned(_)));
        assert!("::".to_string().as_url().is_err());
    }

    #[test]
    fn test_hostless_url_is_empty_host() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        let host = ParsedHost::from_url(&url);
        assert_eq!(host.as_str(), "");
        assert_eq!(host.label_count(), 1);
    }
}
