//! Registrable domain matching.
//!
//! The registrable domain (eTLD+1) of a host is its longest matching public
//! suffix plus one more label to the left. Hosts with one or two labels are
//! returned whole, since no suffix can be told apart from the host itself.

use url::Url;

use super::SuffixMatchMode;
use crate::error::Result;
use crate::suffix::SuffixList;
use crate::types::{parse_url, trim_host, DomainMatch, ParsedHost};
use crate::uri::uri_extension;

/// Domain matcher over a borrowed suffix list
#[derive(Debug, Clone, Copy)]
pub struct DomainMatcher<'a> {
    suffixes: &'a SuffixList,
    mode: SuffixMatchMode,
}

impl Default for DomainMatcher<'static> {
    /// Matcher over the process-wide suffix list, label-aligned.
    fn default() -> Self {
        Self::new(SuffixList::global())
    }
}

impl<'a> DomainMatcher<'a> {
    /// Create a matcher using label-aligned suffix comparison
    pub fn new(suffixes: &'a SuffixList) -> Self {
        Self::with_mode(suffixes, SuffixMatchMode::default())
    }

    /// Create a matcher with explicit comparison mode
    pub fn with_mode(suffixes: &'a SuffixList, mode: SuffixMatchMode) -> Self {
        Self { suffixes, mode }
    }

    pub fn mode(&self) -> SuffixMatchMode {
        self.mode
    }

    pub fn suffixes(&self) -> &'a SuffixList {
        self.suffixes
    }

    /// Registrable domain of a URL. URLs without a host yield `("", false)`.
    pub fn domain_of(&self, url: &Url) -> DomainMatch {
        self.domain_of_host(url.host_str().unwrap_or(""))
    }

    /// Registrable domain of a bare host name.
    pub fn domain_of_host(&self, host: &str) -> DomainMatch {
        let host = ParsedHost::new(host);
        if host.label_count() <= 2 {
            // e.g. "localhost" or "example.com"
            return DomainMatch::unmatched(host.as_str());
        }

        let suffix_labels = match self.mode {
            SuffixMatchMode::LabelAligned => self.longest_label_suffix(host.lowered()),
            SuffixMatchMode::Substring => self.longest_string_suffix(host.lowered()),
        };

        match suffix_labels {
            Some(labels) => DomainMatch {
                domain: host.trailing_labels(labels + 1).to_string(),
                matched_suffix: true,
            },
            None => DomainMatch::unmatched(host.as_str()),
        }
    }

    /// Label count of the longest entry that is a proper parent of `host`.
    /// Assumes `host` is already lowercased.
    fn longest_label_suffix(&self, host: &str) -> Option<usize> {
        // Parents shrink as we walk right, so the first hit is the longest
        let mut pos = 0;
        while let Some(dot_pos) = host[pos..].find('.') {
            let parent = &host[pos + dot_pos + 1..];
            if self.suffixes.contains_lowered(parent) {
                return Some(label_count(parent));
            }
            pos += dot_pos + 1;
        }
        None
    }

    /// Label count of the longest entry `host` ends with, compared as plain strings.
    /// Equal lengths keep the entry seen first.
    fn longest_string_suffix(&self, host: &str) -> Option<usize> {
        let mut best: Option<&str> = None;
        for entry in self.suffixes.iter() {
            if host.ends_with(entry) && best.map_or(true, |b| entry.len() > b.len()) {
                best = Some(entry);
            }
        }
        best.map(label_count)
    }

    /// Check if both URLs have the same registrable domain
    pub fn same_domain(&self, a: &Url, b: &Url) -> bool {
        self.domain_of(a)
            .domain
            .eq_ignore_ascii_case(&self.domain_of(b).domain)
    }

    /// Check if `referrer` has the same host or the same registrable domain as `target`
    pub fn is_local_referrer(&self, referrer: &Url, target: &Url) -> bool {
        let referrer_host = trim_host(referrer.host_str().unwrap_or(""));
        let target_host = trim_host(target.host_str().unwrap_or(""));
        referrer_host.eq_ignore_ascii_case(target_host) || self.same_domain(referrer, target)
    }

    /// Check if `candidate` belongs to the same registrable domain as `site_root`.
    ///
    /// A blank `site_root` is never a match; an unparsable one is an error.
    pub fn is_referrer_to_this_site(&self, candidate: &Url, site_root: &str) -> Result<bool> {
        if site_root.trim().is_empty() {
            return Ok(false);
        }
        let site_root = parse_url(site_root)?;
        Ok(self
            .domain_of(candidate)
            .domain
            .eq_ignore_ascii_case(&self.domain_of(&site_root).domain))
    }

    /// Check if the URL looks like an application page rather than a static
    /// resource, i.e. its path and query carry no file extension
    pub fn is_application_page(&self, url: &Url) -> bool {
        uri_extension(url).trim().is_empty()
    }
}

fn label_count(name: &str) -> usize {
    name.split('.').count()
}
