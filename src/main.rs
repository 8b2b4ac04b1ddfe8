use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use activities_api::config::AppConfig;
use activities_api::database;
use activities_api::state::AppState;
use activities_api::web::middleware::auth as auth_middleware;
use activities_api::web::routes::{activities, announcements};

#[tokio::main]
async fn main() {
    dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::load();

    let pool = database::connect(&config.database_url)
        .await
        .expect("Cannot connect to database");
    database::seed::seed_if_empty(&pool)
        .await
        .expect("Database seeding failed");

    let state = AppState::new(pool, &config.auth);

    // Announcement writes sit behind bearer-token auth; everything else is open.
    let protected_routes = Router::new()
        .route(
            "/announcements",
            post(announcements::create_announcement_handler),
        )
        .route(
            "/announcements/:id",
            put(announcements::update_announcement_handler)
                .delete(announcements::delete_announcement_handler),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::require_auth,
        ));

    let app = Router::new()
        .route("/activities", get(activities::list_activities_handler))
        .route("/activities/days", get(activities::list_days_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activities::unregister_handler),
        )
        .route(
            "/announcements",
            get(announcements::list_announcements_handler),
        )
        .merge(protected_routes)
        .layer(CatchPanicLayer::new())
        .with_state(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .expect("Cannot bind listener");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
