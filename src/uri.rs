//! URL path helpers: extension extraction and reference resolution.

use url::Url;

use crate::error::{HelperError, Result};

/// Extension of a URL's path and query, including the leading dot.
///
/// Failures are swallowed and reported as an empty extension; use
/// [`try_uri_extension`] to get them as errors instead.
pub fn uri_extension(url: &Url) -> String {
    match try_uri_extension(url) {
        Ok(extension) => extension,
        Err(e) => {
            log::trace!("treating '{}' as extensionless: {}", url, e);
            String::new()
        }
    }
}

/// Extension of a URL's path and query, including the leading dot.
///
/// The extension starts at the last `.` after the last path separator, so
/// `/a/b.php?x=1` gives `.php?x=1`. URLs without a hierarchical path
/// (`mailto:`, `data:`) fail with [`HelperError::InvalidExtension`].
pub fn try_uri_extension(url: &Url) -> Result<String> {
    if url.cannot_be_a_base() {
        return Err(HelperError::InvalidExtension(url.to_string()));
    }

    let path_and_query = match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    };
    Ok(path_extension(&path_and_query).to_string())
}

fn path_extension(path: &str) -> &str {
    for (idx, ch) in path.char_indices().rev() {
        match ch {
            '.' if idx + 1 == path.len() => return "",
            '.' => return &path[idx..],
            '/' | '\\' => break,
            _ => {}
        }
    }
    ""
}

/// Resolve `relative` against `base`, like joining paths for URLs.
///
/// Absolute paths replace the base path, relative ones are merged with it.
pub fn combine_url(base: &str, relative: &str) -> Result<String> {
    let combination_error = |reason: String| HelperError::InvalidUrlCombination {
        base: base.to_string(),
        relative: relative.to_string(),
        reason,
    };

    let base_url = Url::parse(base).map_err(|e| combination_error(e.to_string()))?;
    let combined = base_url
        .join(relative)
        .map_err(|e| combination_error(e.to_string()))?;
    Ok(combined.to_string())
}
