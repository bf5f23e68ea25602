use dioxus::prelude::*;

use ui::{use_auth, AuthProvider, Toaster};
use views::{Login, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/admin/profile")]
    Profile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        let runtime = tokio::runtime::Runtime::new().expect("Failed to start tokio runtime");
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server stopped: {:#}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> anyhow::Result<()> {
    use anyhow::Context as _;
    use api::settings::Settings;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::SameSite;
    use tower_sessions::cookie::time::Duration;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = Settings::new().context("Failed to load settings")?;

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .context("Failed to connect to database")?;

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to create session table")?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(settings.session.days)));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        AuthProvider {
            Toaster {
                Router::<Route> {}
            }
        }
    }
}

/// Send `/` to the profile page when signed in, else to the login page.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let auth = use_auth();

    use_effect(move || {
        let state = auth();
        if state.loading {
            return;
        }
        if state.user.is_some() {
            nav.replace(Route::Profile {});
        } else {
            nav.replace(Route::Login {});
        }
    });

    rsx! {}
}
