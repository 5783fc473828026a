use crate::codec::fragment::encode_component;
use crate::model::config::ShareConfig;

/// The page address the widget lives at: a base URL plus the fragment
/// carrying the encoded list. Mirrors `location` in a browser page — the
/// fragment is everything after the `#`, without the `#` itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub base: String,
    pub fragment: String,
}

impl Location {
    /// A location with no fragment (a freshly opened, empty page).
    pub fn new(base: impl Into<String>) -> Self {
        Location {
            base: base.into(),
            fragment: String::new(),
        }
    }

    /// Split a full link into base and fragment. A missing `#` means an
    /// empty fragment; only the first `#` delimits (fragments produced by
    /// the codec never contain a raw `#`).
    pub fn parse(href: &str) -> Self {
        match href.split_once('#') {
            Some((base, fragment)) => Location {
                base: base.to_string(),
                fragment: fragment.to_string(),
            },
            None => Location::new(href),
        }
    }

    /// The full shareable address.
    pub fn href(&self) -> String {
        if self.fragment.is_empty() {
            self.base.clone()
        } else {
            format!("{}#{}", self.base, self.fragment)
        }
    }
}

/// Build the QR image reference for a page address: a GET URL to the
/// configured generator, carrying the full address as its payload. The
/// image is only ever referenced (an `src`), never fetched by this crate.
pub fn qr_image_url(share: &ShareConfig, href: &str) -> String {
    format!(
        "{}?size={size}x{size}&data={data}",
        share.qr_endpoint,
        size = share.qr_size,
        data = encode_component(href)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_at_first_hash() {
        let loc = Location::parse("https://lyst.page/#%5B%5D");
        assert_eq!(loc.base, "https://lyst.page/");
        assert_eq!(loc.fragment, "%5B%5D");
    }

    #[test]
    fn test_parse_without_fragment() {
        let loc = Location::parse("https://lyst.page/");
        assert_eq!(loc.base, "https://lyst.page/");
        assert_eq!(loc.fragment, "");
        assert_eq!(loc.href(), "https://lyst.page/");
    }

    #[test]
    fn test_href_round_trips() {
        let loc = Location::parse("https://lyst.page/#abc");
        assert_eq!(Location::parse(&loc.href()), loc);
    }

    #[test]
    fn test_qr_image_url() {
        let share = ShareConfig::default();
        let url = qr_image_url(&share, "https://lyst.page/#%5B%5D");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=https%3A%2F%2Flyst.page%2F%23%255B%255D"
        );
    }

    #[test]
    fn test_qr_size_from_config() {
        let share = ShareConfig {
            qr_size: 300,
            ..ShareConfig::default()
        };
        let url = qr_image_url(&share, "x");
        assert!(url.contains("size=300x300"));
    }
}
