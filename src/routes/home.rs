use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::catalog::Artist;
use crate::components::SearchBar;

#[server(SearchArtistsAction, "/api", "GetJson")]
#[tracing::instrument]
pub async fn search_artists(query: String) -> Result<Vec<Artist>, ServerFnError> {
    Ok(crate::catalog::search_artists(&query))
}

#[tracing::instrument]
#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let search_term = create_memo(move |_| query.with(|q| q.get("q").cloned().unwrap_or_default()));

    let artists = create_resource(
        move || search_term.get(),
        |term| async move {
            if term.trim().is_empty() {
                Ok(Vec::new())
            } else {
                search_artists(term).await
            }
        },
    );

    view! {
        <Title text="Culture DB"/>

        <section class="hero">
            <div class="container">
                <h1 class="hero-title">"音楽の世界を探索しよう"</h1>
                <p class="hero-subtitle">
                    "Spotifyの膨大な音楽データベースから、お気に入りのアーティストやアルバムを見つけましょう。"
                </p>
                <SearchBar placeholder="アーティストやアルバムを検索..."/>
            </div>
        </section>

        <section class="container page">
            <Show
                when=move || !search_term.get().trim().is_empty()
                fallback=|| view! { <EmptySearchState/> }
            >
                <Suspense fallback=move || view! { <p class="loading-hint">"検索中..."</p> }>
                    <ErrorBoundary fallback=|_| view! {
                        <p class="error-messages">"検索エラーが発生しました"</p>
                    }>
                        {move || {
                            artists.get().map(move |x| {
                                x.map(move |artists| {
                                    view! { <SearchResults query=search_term artists/> }
                                })
                            })
                        }}
                    </ErrorBoundary>
                </Suspense>
            </Show>
        </section>
    }
}

#[component]
fn SearchResults(query: Memo<String>, artists: Vec<Artist>) -> impl IntoView {
    if artists.is_empty() {
        return view! {
            <p class="search-empty">
                "「" {move || query.get()} "」の検索結果が見つかりませんでした。"
            </p>
        }
        .into_view();
    }

    let count = artists.len();
    view! {
        <div class="search-results">
            <div class="search-results-heading">
                <h2>"アーティスト"</h2>
                <span class="count-badge">{count}</span>
            </div>
            <div class="artist-grid">
                <For
                    each=move || artists.clone()
                    key=|artist| artist.id.clone()
                    children=|artist| view! { <ArtistCard artist/> }
                />
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn ArtistCard(artist: Artist) -> impl IntoView {
    let genre = artist.genres.first().cloned();

    view! {
        <A href=format!("/artist/{}", artist.id) class="artist-card">
            <div class="artist-card-image">
                <img src=artist.image_url.clone().unwrap_or_default() alt=artist.name.clone()/>
            </div>
            <p class="artist-card-name">{artist.name.clone()}</p>
            {genre.map(|genre| view! { <p class="artist-card-genre">{genre}</p> })}
        </A>
    }
}

#[component]
fn EmptySearchState() -> impl IntoView {
    view! {
        <div class="search-empty-state">
            <h2>"音楽を検索して始めましょう"</h2>
            <p>
                "上の検索バーにアーティスト名やアルバム名を入力して、お気に入りの音楽を探してください。"
            </p>
        </div>
    }
}
