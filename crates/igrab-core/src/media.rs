//! Media descriptors and the medium dispatch table.

/// Result of resolving a post page: a direct media URL, or nothing usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaDescriptor {
    Video(String),
    Image(String),
    /// The page declared a medium this tool does not handle (e.g. a
    /// carousel). Distinct from a parse failure: the page was well-formed.
    NotFound,
}

impl MediaDescriptor {
    /// Direct media URL, if one was found.
    pub fn url(&self) -> Option<&str> {
        match self {
            MediaDescriptor::Video(url) | MediaDescriptor::Image(url) => Some(url),
            MediaDescriptor::NotFound => None,
        }
    }
}

/// Content category a medium rule maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn descriptor(self, url: String) -> MediaDescriptor {
        match self {
            MediaKind::Video => MediaDescriptor::Video(url),
            MediaKind::Image => MediaDescriptor::Image(url),
        }
    }
}

/// One row of the medium dispatch table: a declared medium value and the
/// meta property that carries its direct URL.
#[derive(Debug, Clone, Copy)]
pub struct MediumRule {
    pub medium: &'static str,
    pub property: &'static str,
    pub kind: MediaKind,
}

/// Declarative mapping from `meta[name=medium]` content to the required
/// secondary tag. A medium absent from this table resolves to `NotFound`.
pub const MEDIUM_TABLE: &[MediumRule] = &[
    MediumRule {
        medium: "video",
        property: "og:video",
        kind: MediaKind::Video,
    },
    MediumRule {
        medium: "image",
        property: "og:image",
        kind: MediaKind::Image,
    },
];

/// Looks up the dispatch rule for a declared medium.
pub fn rule_for(medium: &str) -> Option<&'static MediumRule> {
    MEDIUM_TABLE.iter().find(|rule| rule.medium == medium)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_video_and_image() {
        let video = rule_for("video").unwrap();
        assert_eq!(video.property, "og:video");
        assert_eq!(video.kind, MediaKind::Video);

        let image = rule_for("image").unwrap();
        assert_eq!(image.property, "og:image");
        assert_eq!(image.kind, MediaKind::Image);
    }

    #[test]
    fn unknown_medium_has_no_rule() {
        assert!(rule_for("carousel").is_none());
        assert!(rule_for("").is_none());
        assert!(rule_for("VIDEO").is_none());
    }

    #[test]
    fn descriptor_url_accessor() {
        let v = MediaKind::Video.descriptor("https://cdn.example/v.mp4".into());
        assert_eq!(v, MediaDescriptor::Video("https://cdn.example/v.mp4".into()));
        assert_eq!(v.url(), Some("https://cdn.example/v.mp4"));
        assert_eq!(MediaDescriptor::NotFound.url(), None);
    }
}
