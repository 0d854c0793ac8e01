//! Title/URL records behind the overlay panels, keyed by anchor index. An
//! external file may override them; anything short or malformed silently
//! falls back to the built-in set, so the player never sees a fetch error.
#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LinkEntry {
    pub title: String,
    pub url: String,
}

/// Number of entries an override file must supply to be accepted.
pub const EXPECTED_LINKS: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkSet {
    entries: Vec<LinkEntry>,
}

impl LinkSet {
    /// The shipped defaults.
    pub fn fallback() -> Self {
        let entry = |title: &str, url: &str| LinkEntry {
            title: title.to_string(),
            url: url.to_string(),
        };
        Self {
            entries: vec![
                entry("YouTube 360", "https://www.youtube.com/360"),
                entry("Vimeo 360", "https://vimeo.com/360"),
                entry("AirPano 360 Videos", "https://www.airpano.com/video/"),
                entry(
                    "NatGeo 360",
                    "https://www.youtube.com/playlist?list=PLivjPDlt6ApQUgZgY2hLpcZ3g4Zz4icZT",
                ),
                entry(
                    "NYT The Daily 360",
                    "https://www.nytimes.com/spotlight/the-daily-360",
                ),
                entry(
                    "GoPro 360 (YouTube)",
                    "https://www.youtube.com/@GoPro/search?query=360",
                ),
            ],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for an anchor index; out-of-range indices clamp to the edges so
    /// an anchor always has something to show.
    pub fn get(&self, idx: usize) -> &LinkEntry {
        &self.entries[idx.min(self.entries.len() - 1)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkEntry> {
        self.entries.iter()
    }
}

#[derive(Debug)]
pub struct MalformedLinks {
    got: usize,
}

impl fmt::Display for MalformedLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "links override has {} entr(ies), expected at least {}",
            self.got, EXPECTED_LINKS
        )
    }
}

impl Error for MalformedLinks {}

#[derive(Deserialize)]
struct LinksFile {
    #[serde(default, rename = "link")]
    links: Vec<LinkEntry>,
}

/// Strict parse of an override payload: well-formed TOML with at least
/// [`EXPECTED_LINKS`] entries; extras beyond the expected count are dropped.
pub fn parse_links(s: &str) -> Result<LinkSet, Box<dyn Error>> {
    let file: LinksFile = toml::from_str(s)?;
    if file.links.len() < EXPECTED_LINKS {
        return Err(Box::new(MalformedLinks {
            got: file.links.len(),
        }));
    }
    let mut entries = file.links;
    entries.truncate(EXPECTED_LINKS);
    Ok(LinkSet { entries })
}

pub fn load_links_from_path(path: &Path) -> Result<LinkSet, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    parse_links(&s)
}

/// Loader the harness actually calls: any failure substitutes the fallback
/// set, indistinguishable from a successful fetch of default content.
pub fn load_links_or_fallback(path: Option<&Path>) -> LinkSet {
    match path {
        None => LinkSet::fallback(),
        Some(p) => match load_links_from_path(p) {
            Ok(set) => set,
            Err(e) => {
                log::warn!("links override {} unusable ({}); using defaults", p.display(), e);
                LinkSet::fallback()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toml_links(n: usize) -> String {
        (0..n)
            .map(|i| {
                format!(
                    "[[link]]\ntitle = \"Link {i}\"\nurl = \"https://example.com/{i}\"\n\n"
                )
            })
            .collect()
    }

    #[test]
    fn fallback_has_expected_shape() {
        let set = LinkSet::fallback();
        assert_eq!(set.len(), EXPECTED_LINKS);
        assert_eq!(set.get(0).title, "YouTube 360");
        assert!(set.iter().all(|e| e.url.starts_with("https://")));
    }

    #[test]
    fn index_clamps_to_edges() {
        let set = LinkSet::fallback();
        assert_eq!(set.get(99), set.get(EXPECTED_LINKS - 1));
    }

    #[test]
    fn parse_accepts_exact_and_truncates_extra() {
        let set = parse_links(&toml_links(6)).expect("six entries");
        assert_eq!(set.len(), 6);
        let set = parse_links(&toml_links(9)).expect("nine entries");
        assert_eq!(set.len(), 6);
        assert_eq!(set.get(0).title, "Link 0");
    }

    #[test]
    fn parse_rejects_short_and_garbage_payloads() {
        assert!(parse_links(&toml_links(4)).is_err());
        assert!(parse_links("not toml at all [").is_err());
        // Wrong shape: entries missing the url field.
        assert!(parse_links("[[link]]\ntitle = \"x\"\n").is_err());
    }

    #[test]
    fn fallback_substitution_is_silent() {
        let set = load_links_or_fallback(Some(Path::new("/definitely/missing.toml")));
        assert_eq!(set, LinkSet::fallback());
        assert_eq!(load_links_or_fallback(None), LinkSet::fallback());
    }
}
