//! Platform detection from raw URLs.

use std::fmt;

/// A platform recognized by URL pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    Facebook,
    TikTok,
    X,
    YouTube,
    Spotify,
    Pinterest,
    MediaFire,
    CapCut,
    SoundCloud,
    Threads,
}

/// Ordered detection table. First matching rule wins; the order is part of
/// the contract and must not be reshuffled.
const DETECTION_RULES: &[(&[&str], Platform)] = &[
    (&["instagram.com"], Platform::Instagram),
    (&["facebook.com", "fb.watch"], Platform::Facebook),
    (&["tiktok.com"], Platform::TikTok),
    (&["twitter.com", "x.com"], Platform::X),
    (&["youtube.com", "youtu.be"], Platform::YouTube),
    (&["spotify.com"], Platform::Spotify),
    (&["pinterest.com", "pin.it"], Platform::Pinterest),
    (&["mediafire.com"], Platform::MediaFire),
    (&["capcut.com"], Platform::CapCut),
    (&["soundcloud.com"], Platform::SoundCloud),
    (&["threads.net"], Platform::Threads),
];

/// Map a raw URL to a platform by substring containment.
///
/// Returns `None` when no rule matches; absence is not an error.
pub fn detect_platform(url: &str) -> Option<Platform> {
    for (patterns, platform) in DETECTION_RULES {
        if patterns.iter().any(|p| url.contains(p)) {
            return Some(*platform);
        }
    }
    None
}

impl Platform {
    /// User-facing platform name, used in results and error envelopes.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::TikTok => "TikTok",
            Platform::X => "X (Twitter)",
            Platform::YouTube => "YouTube",
            Platform::Spotify => "Spotify",
            Platform::Pinterest => "Pinterest",
            Platform::MediaFire => "MediaFire",
            Platform::CapCut => "Capcut",
            Platform::SoundCloud => "Soundcloud",
            Platform::Threads => "Threads",
        }
    }

    /// Platforms that are detectable but deliberately not resolved.
    pub fn is_preview_only(&self) -> bool {
        matches!(
            self,
            Platform::CapCut | Platform::SoundCloud | Platform::Threads
        )
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_domains() {
        assert_eq!(
            detect_platform("https://www.instagram.com/p/abc/"),
            Some(Platform::Instagram)
        );
        assert_eq!(
            detect_platform("https://fb.watch/xyz"),
            Some(Platform::Facebook)
        );
        assert_eq!(
            detect_platform("https://x.com/user/status/1"),
            Some(Platform::X)
        );
        assert_eq!(
            detect_platform("https://twitter.com/user/status/1"),
            Some(Platform::X)
        );
        assert_eq!(detect_platform("https://youtu.be/abc"), Some(Platform::YouTube));
        assert_eq!(detect_platform("https://pin.it/abc"), Some(Platform::Pinterest));
        assert_eq!(
            detect_platform("https://soundcloud.com/artist/track"),
            Some(Platform::SoundCloud)
        );
    }

    #[test]
    fn test_detect_miss() {
        assert_eq!(detect_platform("https://example.com/video"), None);
        assert_eq!(detect_platform("not a url"), None);
        assert_eq!(detect_platform(""), None);
    }

    #[test]
    fn test_detect_is_stable() {
        let url = "https://www.youtube.com/watch?v=abc";
        assert_eq!(detect_platform(url), detect_platform(url));
    }

    #[test]
    fn test_preview_only_set() {
        assert!(Platform::CapCut.is_preview_only());
        assert!(Platform::SoundCloud.is_preview_only());
        assert!(Platform::Threads.is_preview_only());
        assert!(!Platform::YouTube.is_preview_only());
        assert!(!Platform::Instagram.is_preview_only());
    }
}
