use leptos::*;
use leptos_router::*;

#[component]
pub(crate) fn NavItems() -> impl IntoView {
    view! {
        <li class="nav-item">
            <A class="nav-link" href="/" exact=true>"ホーム"</A>
        </li>
        <li class="nav-item">
            <A class="nav-link" href="/music">"音楽"</A>
        </li>
        <li class="nav-item">
            <A class="nav-link" href="/artists">"アーティスト"</A>
        </li>
        <li class="nav-item">
            <A class="nav-link" href="/albums">"アルバム"</A>
        </li>
        <li class="nav-item">
            <A class="nav-link" href="/about">"About"</A>
        </li>
    }
}
