mod domain;
mod subdomain;

pub use domain::DomainMatcher;

/// How suffix entries are compared against a host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuffixMatchMode {
    /// Entry must match whole trailing labels: "co.uk" matches "example.co.uk"
    /// but not "evilco.uk"
    #[default]
    LabelAligned,
    /// Plain case-insensitive string suffix: "co.uk" also matches "evilco.uk"
    Substring,
}
