use leptos::*;
use leptos_router::*;

use crate::models::ContentItem;

#[component]
pub fn ContentGrid(items: Vec<ContentItem>) -> impl IntoView {
    if items.is_empty() {
        return view! {
            <p class="content-empty">"コンテンツが見つかりませんでした。"</p>
        }
        .into_view();
    }

    view! {
        <div class="content-grid">
            <For
                each=move || items.clone()
                key=|item| item.id.clone()
                children=|item| view! { <ContentCard item/> }
            />
        </div>
    }
    .into_view()
}

#[component]
fn ContentCard(item: ContentItem) -> impl IntoView {
    let href = format!("/{}/{}", item.kind.path(), item.slug);

    view! {
        <div class="content-card">
            <div class="content-card-image">
                <img src=item.image_url.clone() alt=item.title.clone()/>
                <span class="content-badge">{item.kind.label()}</span>
            </div>
            <h3 class="content-card-title">{item.title.clone()}</h3>
            <p class="content-card-description">{item.description.clone()}</p>
            <A href=href class="btn-outline">"詳細を見る"</A>
        </div>
    }
}
