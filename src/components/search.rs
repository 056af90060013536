use leptos::*;
use leptos_router::*;

/// Search box that mirrors its value into the `?q=` query parameter; the
/// home page resource re-runs as the parameter changes.
#[component]
pub fn SearchBar(#[prop(default = "コンテンツを検索...")] placeholder: &'static str) -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let term = create_rw_signal(query.with_untracked(|q| q.get("q").cloned().unwrap_or_default()));

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        term.set(value.clone());

        let mut params = query.get_untracked();
        if value.is_empty() {
            params.remove("q");
        } else {
            params.insert("q".to_string(), value);
        }
        navigate(
            &format!("/{}", params.to_query_string()),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <div class="search-bar">
            <input
                type="search"
                class="search-input"
                placeholder=placeholder
                prop:value=move || term.get()
                on:input=on_input
            />
        </div>
    }
}
