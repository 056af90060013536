use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Music,
    Artist,
    Album,
}

impl ContentKind {
    /// Normalizes a URL path segment ("music", "artists", ...) to a kind.
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment.to_ascii_lowercase().as_str() {
            "music" => Some(Self::Music),
            "artist" | "artists" => Some(Self::Artist),
            "album" | "albums" => Some(Self::Album),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Artist => "artist",
            Self::Album => "album",
        }
    }

    /// Listing-page title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Music => "音楽一覧",
            Self::Artist => "有名人一覧",
            Self::Album => "アルバム一覧",
        }
    }

    /// Badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Music => "音楽",
            Self::Artist => "アーティスト",
            Self::Album => "アルバム",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub kind: ContentKind,
    pub description: String,
    pub image_url: String,
    pub slug: String,
    pub release_date: String,
}

#[cfg(feature = "ssr")]
impl ContentItem {
    pub fn find(kind: ContentKind, slug: &str) -> Option<Self> {
        FEATURED_CONTENT
            .iter()
            .find(|item| item.kind == kind && item.slug == slug)
            .cloned()
    }

    pub fn for_kind(kind: ContentKind) -> Vec<Self> {
        FEATURED_CONTENT
            .iter()
            .filter(|item| item.kind == kind)
            .cloned()
            .collect()
    }
}

// Editorial picks; replaced by a real catalog table when one lands.
#[cfg(feature = "ssr")]
static FEATURED_CONTENT: once_cell::sync::Lazy<Vec<ContentItem>> = once_cell::sync::Lazy::new(|| {
    vec![
        ContentItem {
            id: "3".into(),
            title: "Kind of Blue".into(),
            kind: ContentKind::Music,
            description: "アメリカのジャズトランペット奏者マイルス・デイヴィスによるスタジオ・アルバム。".into(),
            image_url: "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=800&auto=format&fit=crop&q=60".into(),
            slug: "kind-of-blue".into(),
            release_date: "1959-08-17".into(),
        },
        ContentItem {
            id: "5".into(),
            title: "Abbey Road".into(),
            kind: ContentKind::Music,
            description: "ビートルズによる12作目のスタジオ・アルバム。".into(),
            image_url: "https://images.unsplash.com/photo-1493225255756-d9584f8606e9?w=800&auto=format&fit=crop&q=60".into(),
            slug: "abbey-road".into(),
            release_date: "1969-09-26".into(),
        },
        ContentItem {
            id: "6".into(),
            title: "The Dark Side of the Moon".into(),
            kind: ContentKind::Music,
            description: "ピンク・フロイドによる8作目のスタジオ・アルバム。".into(),
            image_url: "https://images.unsplash.com/photo-1481833761820-0509d3217039?w=800&auto=format&fit=crop&q=60".into(),
            slug: "dark-side-of-the-moon".into(),
            release_date: "1973-03-01".into(),
        },
        ContentItem {
            id: "8".into(),
            title: "Thriller".into(),
            kind: ContentKind::Music,
            description: "マイケル・ジャクソンによる6作目のスタジオ・アルバム。".into(),
            image_url: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=800&auto=format&fit=crop&q=60".into(),
            slug: "thriller".into(),
            release_date: "1982-11-30".into(),
        },
        ContentItem {
            id: "9".into(),
            title: "The Beatles".into(),
            kind: ContentKind::Artist,
            description: "イギリス・リヴァプール出身のロックバンド。20世紀を代表する音楽グループ。".into(),
            image_url: "https://images.unsplash.com/photo-1526478806334-5fd488fcaabc?w=800&auto=format&fit=crop&q=60".into(),
            slug: "the-beatles".into(),
            release_date: "1960-01-01".into(),
        },
        ContentItem {
            id: "10".into(),
            title: "Revolver".into(),
            kind: ContentKind::Album,
            description: "ビートルズの7作目のイギリス盤公式オリジナル・アルバム。".into(),
            image_url: "https://images.unsplash.com/photo-1514525253440-b393452e8d26?w=800&auto=format&fit=crop&q=60".into(),
            slug: "revolver".into(),
            release_date: "1966-08-05".into(),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_normalize_to_kinds() {
        assert_eq!(ContentKind::from_path("music"), Some(ContentKind::Music));
        assert_eq!(ContentKind::from_path("artist"), Some(ContentKind::Artist));
        assert_eq!(ContentKind::from_path("artists"), Some(ContentKind::Artist));
        assert_eq!(ContentKind::from_path("album"), Some(ContentKind::Album));
        assert_eq!(ContentKind::from_path("albums"), Some(ContentKind::Album));
        assert_eq!(ContentKind::from_path("ALBUM"), Some(ContentKind::Album));
        assert_eq!(ContentKind::from_path("movies"), None);
        assert_eq!(ContentKind::from_path(""), None);
    }

    #[test]
    fn kind_labels_are_japanese() {
        assert_eq!(ContentKind::Music.title(), "音楽一覧");
        assert_eq!(ContentKind::Artist.label(), "アーティスト");
        assert_eq!(ContentKind::Album.path(), "album");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn featured_lookup_matches_kind_and_slug() {
        let hit = ContentItem::find(ContentKind::Music, "abbey-road");
        assert_eq!(hit.map(|x| x.title), Some("Abbey Road".to_string()));

        // same slug under the wrong kind is a miss
        assert!(ContentItem::find(ContentKind::Album, "abbey-road").is_none());
        assert!(ContentItem::find(ContentKind::Music, "nope").is_none());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn for_kind_filters_the_table() {
        let albums = ContentItem::for_kind(ContentKind::Album);
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].slug, "revolver");
    }
}
