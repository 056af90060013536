//! Music-catalog client, mock edition.
//!
//! The lookup functions below stand in for the real catalog API; swap their
//! bodies for live calls when the site goes to production. The types and
//! formatting helpers are shared with the client bundle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub genres: Vec<String>,
    pub followers: u64,
    pub popularity: u8,
    pub external_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub image_url: Option<String>,
    pub release_date: String,
    pub total_tracks: u32,
    pub album_type: String,
    pub external_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
    pub track_number: u32,
    pub external_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub top_tracks: Vec<Track>,
    pub albums: Vec<Album>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct AlbumDetail {
    pub album: Album,
    pub tracks: Vec<Track>,
    pub label: String,
    pub copyright: String,
}

/// Formats a duration in milliseconds as "m:ss".
pub fn format_duration(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Groups digits with commas, the way the site renders follower counts.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(feature = "ssr")]
mod mock {
    use super::*;
    use once_cell::sync::Lazy;

    pub(super) static ARTISTS: Lazy<Vec<Artist>> = Lazy::new(|| {
        vec![
            Artist {
                id: "mock-artist-1".into(),
                name: "Mock Artist 1".into(),
                image_url: Some("https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=800&auto=format&fit=crop&q=60".into()),
                genres: vec!["Pop".into(), "Rock".into()],
                followers: 1_234_567,
                popularity: 85,
                external_url: "https://open.spotify.com/artist/mock1".into(),
            },
            Artist {
                id: "mock-artist-2".into(),
                name: "Mock Artist 2".into(),
                image_url: Some("https://images.unsplash.com/photo-1493225255756-d9584f8606e9?w=800&auto=format&fit=crop&q=60".into()),
                genres: vec!["Jazz".into(), "Blues".into()],
                followers: 54_321,
                popularity: 65,
                external_url: "https://open.spotify.com/artist/mock2".into(),
            },
            Artist {
                id: "mock-artist-3".into(),
                name: "Mock Artist 3".into(),
                image_url: Some("https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=800&auto=format&fit=crop&q=60".into()),
                genres: vec!["Indie".into(), "Alternative".into()],
                followers: 98_765,
                popularity: 72,
                external_url: "https://open.spotify.com/artist/mock3".into(),
            },
        ]
    });

    pub(super) static ALBUMS: Lazy<Vec<Album>> = Lazy::new(|| {
        vec![
            Album {
                id: "mock-album-1".into(),
                name: "Greatest Hits".into(),
                artists: vec![ArtistRef { id: "mock-artist-1".into(), name: "Mock Artist 1".into() }],
                image_url: Some("https://images.unsplash.com/photo-1614613535308-eb5fbd3d2c17?w=800&auto=format&fit=crop&q=60".into()),
                release_date: "2023-01-01".into(),
                total_tracks: 12,
                album_type: "album".into(),
                external_url: "https://open.spotify.com/album/mock1".into(),
            },
            Album {
                id: "mock-album-2".into(),
                name: "Live at Tokyo".into(),
                artists: vec![ArtistRef { id: "mock-artist-2".into(), name: "Mock Artist 2".into() }],
                image_url: Some("https://images.unsplash.com/photo-1496293455970-f8581aae0e3c?w=800&auto=format&fit=crop&q=60".into()),
                release_date: "2024-05-20".into(),
                total_tracks: 8,
                album_type: "compilation".into(),
                external_url: "https://open.spotify.com/album/mock2".into(),
            },
        ]
    });

    pub(super) static TRACKS: Lazy<Vec<Track>> = Lazy::new(|| {
        vec![
            Track {
                id: "mock-track-1".into(),
                name: "Mock Song 1".into(),
                duration_ms: 210_000,
                track_number: 1,
                external_url: "https://open.spotify.com/track/mock1".into(),
            },
            Track {
                id: "mock-track-2".into(),
                name: "Mock Song 2".into(),
                duration_ms: 180_000,
                track_number: 2,
                external_url: "https://open.spotify.com/track/mock2".into(),
            },
            Track {
                id: "mock-track-3".into(),
                name: "Mock Song 3".into(),
                duration_ms: 240_000,
                track_number: 3,
                external_url: "https://open.spotify.com/track/mock3".into(),
            },
        ]
    });
}

/// Case-insensitive substring search; an empty result falls back to the
/// whole table so the demo site never renders a dead end.
#[cfg(feature = "ssr")]
pub fn search_artists(query: &str) -> Vec<Artist> {
    let needle = query.to_lowercase();
    let results: Vec<Artist> = mock::ARTISTS
        .iter()
        .filter(|artist| artist.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    if results.is_empty() {
        mock::ARTISTS.clone()
    } else {
        results
    }
}

#[cfg(feature = "ssr")]
pub fn search_albums(query: &str) -> Vec<Album> {
    let needle = query.to_lowercase();
    let results: Vec<Album> = mock::ALBUMS
        .iter()
        .filter(|album| album.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    if results.is_empty() {
        mock::ALBUMS.clone()
    } else {
        results
    }
}

#[cfg(feature = "ssr")]
pub fn artist_details(artist_id: &str) -> ArtistDetail {
    let artist = mock::ARTISTS
        .iter()
        .find(|a| a.id == artist_id)
        .unwrap_or(&mock::ARTISTS[0])
        .clone();
    ArtistDetail {
        artist,
        top_tracks: mock::TRACKS.clone(),
        albums: mock::ALBUMS.clone(),
    }
}

#[cfg(feature = "ssr")]
pub fn album_details(album_id: &str) -> AlbumDetail {
    let album = mock::ALBUMS
        .iter()
        .find(|a| a.id == album_id)
        .unwrap_or(&mock::ALBUMS[0])
        .clone();
    AlbumDetail {
        album,
        tracks: mock::TRACKS.clone(),
        label: "Mock Records".into(),
        copyright: "© 2024 Mock Records".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_format_as_minutes_and_seconds() {
        assert_eq!(format_duration(210_000), "3:30");
        assert_eq!(format_duration(180_000), "3:00");
        assert_eq!(format_duration(59_999), "0:59");
        assert_eq!(format_duration(0), "0:00");
    }

    #[test]
    fn numbers_group_digits_with_commas() {
        assert_eq!(format_number(1_234_567), "1,234,567");
        assert_eq!(format_number(54_321), "54,321");
        assert_eq!(format_number(100), "100");
        assert_eq!(format_number(0), "0");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn artist_search_is_case_insensitive() {
        let hits = search_artists("mock artist 2");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "mock-artist-2");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn empty_search_results_fall_back_to_the_full_table() {
        assert_eq!(search_artists("no such artist").len(), 3);
        assert_eq!(search_albums("no such album").len(), 2);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn unknown_artist_id_falls_back_to_the_first_entry() {
        let detail = artist_details("missing");
        assert_eq!(detail.artist.id, "mock-artist-1");
        assert_eq!(detail.top_tracks.len(), 3);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn album_details_carry_label_and_tracks() {
        let detail = album_details("mock-album-2");
        assert_eq!(detail.album.name, "Live at Tokyo");
        assert_eq!(detail.label, "Mock Records");
        assert_eq!(detail.tracks.len(), 3);
    }
}
