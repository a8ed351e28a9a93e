use std::sync::Arc;

use auth::Authenticator;
use booking_service::config::Config;
use booking_service::domain::room::service::RoomService;
use booking_service::domain::subject::service::SubjectService;
use booking_service::domain::user::service::UserService;
use booking_service::inbound::http::router::create_router;
use booking_service::outbound::repositories::PostgresRoomRepository;
use booking_service::outbound::repositories::PostgresSubjectRepository;
use booking_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "booking-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The secret key is deliberately absent from this log line
    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.auth.token_ttl_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.auth.secret_key.as_bytes(),
        config.auth.token_ttl_minutes,
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let room_repository = Arc::new(PostgresRoomRepository::new(pg_pool.clone()));
    let subject_repository = Arc::new(PostgresSubjectRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::clone(&authenticator),
    ));
    let room_service = Arc::new(RoomService::new(room_repository));
    let subject_service = Arc::new(SubjectService::new(subject_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, room_service, subject_service, authenticator);

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
