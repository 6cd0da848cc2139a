#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::{http::header, routing::get, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio::{app::*, logger, seo};
    use tower_http::trace::TraceLayer;

    logger::init_server_logger();

    let site = seo::SiteConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to {}", seo::DEFAULT_SITE_URL);
        seo::SiteConfig::default()
    });
    tracing::info!(base_url = site.base_url(), "site metadata configured");

    let conf = get_configuration(None).expect("Should be able to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let sitemap_xml = seo::render_sitemap(&seo::sitemap(&site, seo::BUILD_TIME))
        .expect("Should be able to render the sitemap");
    let robots_txt = seo::robots_txt(&site);

    let app = Router::new()
        .route(
            "/sitemap.xml",
            get(move || async move { ([(header::CONTENT_TYPE, "application/xml")], sitemap_xml) }),
        )
        .route(
            "/robots.txt",
            get(move || async move { ([(header::CONTENT_TYPE, "text/plain")], robots_txt) }),
        )
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let site = site.clone();
                move || provide_context(site.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server should run until shutdown");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
