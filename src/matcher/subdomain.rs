use url::{Host, Url};

use super::DomainMatcher;
use crate::types::trim_host;

impl DomainMatcher<'_> {
    /// Subdomain part of a URL's host: everything before the second-to-last dot.
    ///
    /// Returns `None` for IP hosts, URLs without a host, and hosts with two or
    /// fewer labels. The suffix list is not consulted, so a multi-label suffix
    /// such as `co.uk` leaves one suffix label in the result
    /// (`www.example.co.uk` gives `www.example`).
    pub fn subdomain_of(&self, url: &Url) -> Option<String> {
        match url.host() {
            Some(Host::Domain(host)) => subdomain_of_host(trim_host(host)).map(str::to_string),
            _ => None,
        }
    }

    /// Host of a URL with its subdomain prefix removed.
    pub fn host_without_subdomain(&self, url: &Url) -> String {
        let host = trim_host(url.host_str().unwrap_or(""));
        let subdomain = match self.subdomain_of(url) {
            Some(subdomain) => subdomain,
            None => return host.to_string(),
        };

        // Remove the first case-insensitive occurrence of "<subdomain>."
        let needle = format!("{}.", subdomain).to_ascii_lowercase();
        match host.to_ascii_lowercase().find(&needle) {
            Some(idx) => format!("{}{}", &host[..idx], &host[idx + needle.len()..]),
            None => host.to_string(),
        }
    }
}

fn subdomain_of_host(host: &str) -> Option<&str> {
    if host.split('.').count() <= 2 {
        return None;
    }
    let last_dot = host.rfind('.')?;
    let second_last_dot = host[..last_dot].rfind('.')?;
    Some(&host[..second_last_dot])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_subdomain_of_host() {
        assert_eq!(subdomain_of_host("foo.bar.example.com"), Some("foo.bar"));
        assert_eq!(subdomain_of_host("foo.example.com"), Some("foo"));
        assert_eq!(subdomain_of_host("example.com"), None);
        assert_eq!(subdomain_of_host("localhost"), None);
    }

    #[test]
    fn test_subdomain_of() {
        let matcher = DomainMatcher::default();
        assert_eq!(
            matcher.subdomain_of(&url("http://foo.bar.example.com")),
            Some("foo.bar".to_string())
        );
        assert_eq!(
            matcher.subdomain_of(&url("http://foo.example.com/path")),
            Some("foo".to_string())
        );
        assert_eq!(matcher.subdomain_of(&url("http://example.com")), None);
    }

    #[test]
    fn test_subdomain_ignores_multi_label_suffix() {
        let matcher = DomainMatcher::default();
        assert_eq!(
            matcher.subdomain_of(&url("http://www.example.co.uk")),
            Some("www.example".to_string())
        );
    }

    #[test]
    fn test_subdomain_of_trailing_dot() {
        let matcher = DomainMatcher::default();
        assert_eq!(matcher.subdomain_of(&url("http://example.com./")), None);
        assert_eq!(
            matcher.subdomain_of(&url("http://www.example.com./")),
            Some("www".to_string())
        );
    }

    #[test]
    fn test_subdomain_of_ip_host() {
        let matcher = DomainMatcher::default();
        assert_eq!(matcher.subdomain_of(&url("http://192.168.10.20/")), None);
        assert_eq!(matcher.subdomain_of(&url("http://[::1]:8080/")), None);
        assert_eq!(matcher.subdomain_of(&url("mailto:a@b.example.com")), None);
    }

    #[test]
    fn test_host_without_subdomain() {
        let matcher = DomainMatcher::default();
        assert_eq!(
            matcher.host_without_subdomain(&url("http://foo.example.com")),
            "example.com"
        );
        assert_eq!(
            matcher.host_without_subdomain(&url("http://a.b.example.com./x")),
            "example.com"
        );
        assert_eq!(
            matcher.host_without_subdomain(&url("http://example.com")),
            "example.com"
        );
        assert_eq!(
            matcher.host_without_subdomain(&url("http://127.0.0.1:3000/")),
            "127.0.0.1"
        );
    }
}
