use tullamore_qa::application::{ports::time::Clock, services::ApplicationServices};
use tullamore_qa::config::AppConfig;
use tullamore_qa::domain::{
    answer::AnswerRepository,
    question::{QuestionReadRepository, QuestionWriteRepository},
    tag::TagRepository,
    user::UserRepository,
};
use tullamore_qa::infrastructure::{
    database,
    repositories::{
        SqliteAnswerRepository, SqliteQuestionReadRepository, SqliteQuestionWriteRepository,
        SqliteTagRepository, SqliteUserRepository,
    },
    time::SystemClock,
};
use tullamore_qa::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!(database_url = %config.database_url(), "database ready");

    let tag_repo: Arc<dyn TagRepository> = Arc::new(SqliteTagRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let question_write_repo: Arc<dyn QuestionWriteRepository> =
        Arc::new(SqliteQuestionWriteRepository::new(pool.clone()));
    let question_read_repo: Arc<dyn QuestionReadRepository> =
        Arc::new(SqliteQuestionReadRepository::new(pool.clone()));
    let answer_repo: Arc<dyn AnswerRepository> =
        Arc::new(SqliteAnswerRepository::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        tag_repo,
        user_repo,
        question_write_repo,
        question_read_repo,
        answer_repo,
        clock,
    ));

    let state = HttpState {
        services,
        public_base_url: config.public_base_url().map(str::to_string),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
