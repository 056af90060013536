use crate::components::NavItems;
use crate::routes::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="app-css" href="/pkg/culturedb-leptos.css"/>

        <Title text="Culture DB"/>

        <Router>
            // Navigation
            <nav class="navbar">
                <div class="container">
                    <A class="navbar-brand" href="/" exact=true>
                        "Culture DB"
                    </A>
                    <ul class="nav">
                        <NavItems/>
                    </ul>
                </div>
            </nav>

            // Main content
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/about" view=AboutPage/>
                    <Route path="/artist/:id" view=ArtistPage/>
                    <Route path="/album/:id" view=AlbumPage/>
                    <Route path="/:kind" view=ContentListPage/>
                    <Route path="/:kind/:slug" view=ContentPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>

            // Footer
            <footer>
                <div class="container">
                    <A href="/" class="logo-font">
                        "Culture DB"
                    </A>
                    <span class="attribution">
                        "© 2026 Culture DB. All rights reserved."
                    </span>
                </div>
            </footer>
        </Router>
    }
}
