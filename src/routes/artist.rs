use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::catalog::{format_duration, format_number, Album, ArtistDetail, Track};

#[server(ArtistDetailsAction, "/api", "GetJson")]
#[tracing::instrument]
pub async fn artist_details(artist_id: String) -> Result<ArtistDetail, ServerFnError> {
    Ok(crate::catalog::artist_details(&artist_id))
}

#[tracing::instrument]
#[component]
pub fn ArtistPage() -> impl IntoView {
    let params = use_params_map();
    let detail = create_resource(
        move || params.with(|p| p.get("id").cloned().unwrap_or_default()),
        |id| async move { artist_details(id).await },
    );

    let title = create_rw_signal(String::from("Loading"));

    view! {
        <Title text=move || title.get()/>

        <Suspense fallback=move || view! {
            <div class="container page">
                <p class="loading-hint">"読み込み中..."</p>
            </div>
        }>
            <ErrorBoundary fallback=|_| view! {
                <div class="container page">
                    <p class="error-messages">
                        "アーティスト情報の読み込みに失敗しました。時間をおいて再度お試しください。"
                    </p>
                </div>
            }>
                {move || {
                    detail.get().map(move |x| {
                        x.map(move |detail| {
                            title.set(detail.artist.name.clone());
                            view! { <ArtistDetailView detail/> }
                        })
                    })
                }}
            </ErrorBoundary>
        </Suspense>
    }
}

#[component]
fn ArtistDetailView(detail: ArtistDetail) -> impl IntoView {
    let artist = detail.artist;
    let followers = format_number(artist.followers);

    view! {
        <div class="container page">
            <header class="artist-header">
                <div class="artist-portrait">
                    <img src=artist.image_url.clone().unwrap_or_default() alt=artist.name.clone()/>
                </div>
                <div class="artist-summary">
                    <h1 class="page-title">{artist.name.clone()}</h1>
                    <ul class="genre-list">
                        <For
                            each={let genres = artist.genres.clone(); move || genres.clone()}
                            key=|genre| genre.clone()
                            children=|genre| view! { <li class="genre-badge">{genre}</li> }
                        />
                    </ul>
                    <p class="artist-stats">
                        "フォロワー: " {followers} " ・ 人気度: " {artist.popularity}
                    </p>
                    <a class="external-link" href=artist.external_url.clone() target="_blank" rel="noopener">
                        "Spotifyで開く"
                    </a>
                </div>
            </header>

            <section class="artist-tracks">
                <h2>"人気の曲"</h2>
                <TrackList tracks=detail.top_tracks/>
            </section>

            <section class="artist-albums">
                <h2>"アルバム"</h2>
                <div class="album-grid">
                    <For
                        each={let albums = detail.albums; move || albums.clone()}
                        key=|album| album.id.clone()
                        children=|album| view! { <AlbumCard album/> }
                    />
                </div>
            </section>
        </div>
    }
}

#[component]
pub(crate) fn TrackList(tracks: Vec<Track>) -> impl IntoView {
    view! {
        <ol class="track-list">
            <For
                each=move || tracks.clone()
                key=|track| track.id.clone()
                children=|track| {
                    view! {
                        <li class="track-row">
                            <span class="track-number">{track.track_number}</span>
                            <span class="track-name">{track.name.clone()}</span>
                            <span class="track-duration">{format_duration(track.duration_ms)}</span>
                        </li>
                    }
                }
            />
        </ol>
    }
}

#[component]
pub(crate) fn AlbumCard(album: Album) -> impl IntoView {
    let artist_names = album
        .artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <A href=format!("/album/{}", album.id) class="album-card">
            <div class="album-card-image">
                <img src=album.image_url.clone().unwrap_or_default() alt=album.name.clone()/>
            </div>
            <p class="album-card-name">{album.name.clone()}</p>
            <p class="album-card-artists">{artist_names}</p>
        </A>
    }
}
