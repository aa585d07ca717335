use std::fmt;

/// One job listing extracted from a search page during a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub url: String,
}

impl Posting {
    /// Build a posting from raw card text and the card's link href.
    pub fn new(title: &str, organization: &str, href: &str) -> Self {
        let url = canonicalize_url(href);
        Self {
            id: derive_id(&url),
            title: title.trim().to_string(),
            organization: organization.trim().to_string(),
            url,
        }
    }
}

impl fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} ({})", self.title, self.organization, self.url)
    }
}

/// Drop the query string (tracking params, result position) from a link.
pub fn canonicalize_url(href: &str) -> String {
    let base = match href.split_once('?') {
        Some((base, _)) => base,
        None => href,
    };
    base.trim().to_string()
}

/// Posting id: everything after the last `-` of the canonical url, or the
/// whole url when there is no `-` or nothing follows it.
///
/// The id is written as the first field of a store line, so it is trimmed
/// and `|` and line breaks are replaced with `_`.
///
/// Not globally unique. Two postings whose urls end in the same suffix
/// collide and the later one is treated as already seen.
pub fn derive_id(url: &str) -> String {
    let url = url.trim();
    let id = match url.rsplit_once('-') {
        Some((_, suffix)) if !suffix.trim().is_empty() => suffix,
        _ => url,
    };
    id.trim()
        .chars()
        .map(|c| match c {
            '|' | '\n' | '\r' => '_',
            other => other,
        })
        .collect()
}
