use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use super::NotFound;
use crate::components::ContentGrid;
use crate::models::{ContentItem, ContentKind};

#[server(ContentListAction, "/api", "GetJson")]
#[tracing::instrument]
pub async fn content_list(kind: String) -> Result<Vec<ContentItem>, ServerFnError> {
    Ok(ContentKind::from_path(&kind)
        .map(ContentItem::for_kind)
        .unwrap_or_default())
}

#[tracing::instrument]
#[component]
pub fn ContentListPage() -> impl IntoView {
    let params = use_params_map();
    let kind = create_memo(move |_| {
        params.with(|p| p.get("kind").map(String::as_str).and_then(ContentKind::from_path))
    });

    let items = create_resource(
        move || params.with(|p| p.get("kind").cloned().unwrap_or_default()),
        |kind| async move { content_list(kind).await },
    );

    view! {
        <Title text=move || {
            kind.get()
                .map(|k| k.title().to_string())
                .unwrap_or_else(|| "ページが見つかりません".into())
        }/>

        <Show when=move || kind.get().is_some() fallback=|| view! { <NotFound/> }>
            <div class="container page">
                <h1 class="page-title">{move || kind.get().map(|k| k.title()).unwrap_or_default()}</h1>

                <Suspense fallback=move || view! { <p class="loading-hint">"読み込み中..."</p> }>
                    <ErrorBoundary fallback=|_| view! {
                        <p class="error-messages">
                            "コンテンツの読み込みに失敗しました。時間をおいて再度お試しください。"
                        </p>
                    }>
                        {move || {
                            items.get().map(move |x| {
                                x.map(move |items| view! { <ContentGrid items/> })
                            })
                        }}
                    </ErrorBoundary>
                </Suspense>
            </div>
        </Show>
    }
}
