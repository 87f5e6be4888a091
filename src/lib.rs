//! Domain helpers - registrable domain and referrer checks for web applications
//!
//! This library provides:
//! - Registrable domain (eTLD+1) lookup against a public suffix list
//! - Subdomain extraction and removal
//! - Same-domain, local referrer and same-site referrer checks
//! - Application page detection (paths without a file extension)
//! - URL combination (reference resolution)
//! - A JSON serialization provider (`serialization` feature)
//!
//! # Example
//!
//! ```rust
//! use domain_helpers::{domain_of, is_local_referrer, subdomain_of};
//!
//! let result = domain_of("https://www.example.co.uk/shop").unwrap();
//! assert_eq!(result.domain, "example.co.uk");
//! assert!(result.matched_suffix);
//!
//! assert_eq!(subdomain_of("https://foo.example.com/").unwrap(), Some("foo".to_string()));
//! assert!(is_local_referrer("https://sub.example.com/x", "https://example.com/y").unwrap());
//! ```
//!
//! The free functions use the process-wide suffix list and accept either a
//! parsed [`url::Url`] or a string. For a custom suffix list or matching mode,
//! build a [`DomainMatcher`] directly:
//!
//! ```rust
//! use domain_helpers::{DomainMatcher, SuffixList, SuffixMatchMode};
//!
//! let list = SuffixList::parse("uk\nco.uk\n").unwrap();
//! let matcher = DomainMatcher::with_mode(&list, SuffixMatchMode::Substring);
//! assert_eq!(matcher.domain_of_host("www.evilco.uk").domain, "www.evilco.uk");
//! ```
//!
//! # Suffix matching
//!
//! | Mode | `co.uk` vs `www.evilco.uk` | Notes |
//! |------|----------------------------|-------|
//! | `LabelAligned` (default) | no match | Entry must cover whole trailing labels |
//! | `Substring` | match | Plain case-insensitive string suffix |

pub mod error;
pub mod matcher;
#[cfg(feature = "serialization")]
pub mod serialization;
pub mod suffix;
pub mod types;
pub mod uri;

// Re-export commonly used items
pub use error::{HelperError, Result};
pub use matcher::{DomainMatcher, SuffixMatchMode};
#[cfg(feature = "serialization")]
pub use serialization::{JsonSerializationProvider, SerializationProvider, SerializerOptions};
pub use suffix::{SuffixCategory, SuffixList};
pub use types::{parse_url, split_host_labels, AsUrl, DomainMatch, ParsedHost};
pub use uri::{combine_url, try_uri_extension, uri_extension};

/// Registrable domain of a URL.
pub fn domain_of<U: AsUrl + ?Sized>(url: &U) -> Result<DomainMatch> {
    let url = url.as_url()?;
    Ok(DomainMatcher::default().domain_of(&url))
}

/// Subdomain part of a URL's host, if it has one.
pub fn subdomain_of<U: AsUrl + ?Sized>(url: &U) -> Result<Option<String>> {
    let url = url.as_url()?;
    Ok(DomainMatcher::default().subdomain_of(&url))
}

/// Host of a URL without its subdomain.
pub fn host_without_subdomain<U: AsUrl + ?Sized>(url: &U) -> Result<String> {
    let url = url.as_url()?;
    Ok(DomainMatcher::default().host_without_subdomain(&url))
}

/// Check if two URLs have the same registrable domain.
pub fn same_domain<A, B>(a: &A, b: &B) -> Result<bool>
where
    A: AsUrl + ?Sized,
    B: AsUrl + ?Sized,
{
    let (a, b) = (a.as_url()?, b.as_url()?);
    Ok(DomainMatcher::default().same_domain(&a, &b))
}

/// Check if `referrer` has the same host or registrable domain as `target`.
pub fn is_local_referrer<A, B>(referrer: &A, target: &B) -> Result<bool>
where
    A: AsUrl + ?Sized,
    B: AsUrl + ?Sized,
{
    let (referrer, target) = (referrer.as_url()?, target.as_url()?);
    Ok(DomainMatcher::default().is_local_referrer(&referrer, &target))
}

/// Check if `candidate` belongs to the same registrable domain as `site_root`.
///
/// Blank inputs are never a match.
pub fn is_referrer_to_this_site(candidate: &str, site_root: &str) -> Result<bool> {
    if candidate.trim().is_empty() || site_root.trim().is_empty() {
        return Ok(false);
    }
    DomainMatcher::default().is_referrer_to_this_site(&parse_url(candidate)?, site_root)
}

/// Check if a URL has no file extension in its path and query.
pub fn is_application_page<U: AsUrl + ?Sized>(url: &U) -> Result<bool> {
    let url = url.as_url()?;
    Ok(DomainMatcher::default().is_application_page(&url))
}
