use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="ページが見つかりません"/>

        <div class="container page not-found">
            <h1 class="page-title">"404"</h1>
            <p>"お探しのページは見つかりませんでした。"</p>
            <A href="/" class="btn-outline">"ホームに戻る"</A>
        </div>
    }
}
