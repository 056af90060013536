#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::{routing::post, Router};
    use culturedb_leptos::app::App;
    use culturedb_leptos::fileserv::file_and_error_handler;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("culturedb_leptos=debug,tower_http=info")
            }),
        )
        .init();

    culturedb_leptos::config::Config::init().expect("invalid configuration");
    tracing::info!(
        "starting in {:?} mode",
        culturedb_leptos::config::Config::global().environment
    );

    culturedb_leptos::database::init_db()
        .await
        .expect("could not connect to the database");

    let conf = get_configuration(None)
        .await
        .expect("failed to read leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .route(
            "/api/*fn_name",
            post(leptos_axum::handle_server_fns).get(leptos_axum::handle_server_fns),
        )
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server failed");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // the browser entry point is `hydrate` in lib.rs
}
