use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use banking_api::bootstrap::app_context::{AppContext, AppServices};
use banking_api::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        banking_api::presentation::http::users::create_user,
        banking_api::presentation::http::users::show_user,
        banking_api::presentation::http::users::update_user,
        banking_api::presentation::http::users::delete_user,
        banking_api::presentation::http::health::health,
    ),
    components(schemas(
        banking_api::presentation::http::users::CreateUserRequest,
        banking_api::presentation::http::users::UpdateUserRequest,
        banking_api::presentation::http::users::UserView,
        banking_api::presentation::http::users::CreateUserResponse,
        banking_api::presentation::http::users::ShowUserResponse,
        banking_api::presentation::http::users::UpdateUserResponse,
        banking_api::presentation::http::users::DeleteUserResponse,
        banking_api::presentation::http::health::HealthResponse,
    )),
    tags(
        (name = "Users", description = "User lifecycle management"),
        (name = "Health", description = "System health checks")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "banking_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting banking API");

    let pool = banking_api::infrastructure::db::connect_pool(&cfg.database_url).await?;
    banking_api::infrastructure::db::migrate(&pool).await?;

    let user_repo = Arc::new(
        banking_api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository::new(
            pool.clone(),
        ),
    );
    let ctx = AppContext::new(cfg.clone(), AppServices::new(user_repo));

    let methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::OPTIONS,
    ];
    let cors = match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers([http::header::CONTENT_TYPE]),
        _ if cfg.is_production => CorsLayer::new()
            // FRONTEND_URL is mandatory in production; deny all if it
            // still slipped through unusable.
            .allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
            .allow_methods(methods)
            .allow_headers([http::header::CONTENT_TYPE]),
        _ => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(methods)
            .allow_headers([http::header::CONTENT_TYPE]),
    };

    let app = Router::new()
        .nest(
            "/api",
            banking_api::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api",
            banking_api::presentation::http::users::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
