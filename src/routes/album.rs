use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use super::artist::TrackList;
use crate::catalog::AlbumDetail;

#[server(AlbumDetailsAction, "/api", "GetJson")]
#[tracing::instrument]
pub async fn album_details(album_id: String) -> Result<AlbumDetail, ServerFnError> {
    Ok(crate::catalog::album_details(&album_id))
}

#[tracing::instrument]
#[component]
pub fn AlbumPage() -> impl IntoView {
    let params = use_params_map();
    let detail = create_resource(
        move || params.with(|p| p.get("id").cloned().unwrap_or_default()),
        |id| async move { album_details(id).await },
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
                        "アルバム情報の読み込みに失敗しました。時間をおいて再度お試しください。"
                    </p>
                </div>
            }>
                {move || {
                    detail.get().map(move |x| {
                        x.map(move |detail| {
                            title.set(detail.album.name.clone());
                            view! { <AlbumDetailView detail/> }
                        })
                    })
                }}
            </ErrorBoundary>
        </Suspense>
    }
}

#[component]
fn AlbumDetailView(detail: AlbumDetail) -> impl IntoView {
    let album = detail.album;
    let artist_names = album
        .artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let release_date = album.release_date.replace('-', "/");

    view! {
        <div class="container page">
            <header class="album-header">
                <div class="album-cover">
                    <img src=album.image_url.clone().unwrap_or_default() alt=album.name.clone()/>
                </div>
                <div class="album-summary">
                    <h1 class="page-title">{album.name.clone()}</h1>
                    <p class="album-artists">{artist_names}</p>
                    <p class="album-facts">
                        "発売日: " {release_date} " ・ " {album.total_tracks} "曲 ・ " {detail.label.clone()}
                    </p>
                    <a class="external-link" href=album.external_url.clone() target="_blank" rel="noopener">
                        "Spotifyで開く"
                    </a>
                </div>
            </header>

            <section class="album-tracks">
                <h2>"収録曲"</h2>
                <TrackList tracks=detail.tracks/>
            </section>

            <p class="album-copyright">{detail.copyright.clone()}</p>
        </div>
    }
}
