use sea_orm::Database;
use tracing::info;

use shamba_accounts::config::AccountsConfig;
use shamba_accounts::infra::email::HttpCredentialMailer;
use shamba_accounts::router::build_router;
use shamba_accounts::state::AppState;

#[tokio::main]
async fn main() {
    shamba_core::tracing::init_tracing();

    let config = AccountsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = HttpCredentialMailer::new(
        config.mail_api_url.clone(),
        config.mail_api_key.clone(),
        config.mail_from.clone(),
    );

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        mailer,
        login_url: config.login_url,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("accounts service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
