//! Classification of page URLs.

/// What kind of page a URL points at, as far as durations are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A dedicated playlist listing (`/playlist?list=...`).
    Playlist,
    /// A watch page playing from a playlist (`/watch?v=...&list=...`).
    WatchWithPlaylist,
    /// Anything else.
    Other,
}

impl PageKind {
    #[must_use]
    pub fn has_playlist(self) -> bool {
        !matches!(self, Self::Other)
    }
}

#[must_use]
pub fn classify_url(url: &str) -> PageKind {
    if url.contains("/playlist") {
        PageKind::Playlist
    } else if url.contains("/watch") && url.contains("list=") {
        PageKind::WatchWithPlaylist
    } else {
        PageKind::Other
    }
}

/// True when the page lists playlist items whose durations can be summed.
#[must_use]
pub fn is_playlist_page(url: &str) -> bool {
    classify_url(url).has_playlist()
}

/// Stricter check used before asking a tab for its total: the URL must also
/// belong to youtube.com.
#[must_use]
pub fn is_youtube_playlist_url(url: &str) -> bool {
    url.contains("youtube.com") && is_playlist_page(url)
}
