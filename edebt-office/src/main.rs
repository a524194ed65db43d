use edebt_office::utils::currency::format_vnd;
use edebt_office::{Config, SessionStore, StoredSession, print_banner, setup_environment};
use shared::models::DashboardQuery;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Set up the environment (dotenv, logging)
    setup_environment()?;

    print_banner();

    tracing::info!("E-DEBT office starting...");

    // 2. Load configuration
    let config = Config::from_env();
    tracing::info!(
        "Configuration loaded (api: {}, env: {})",
        config.api_base_url,
        config.environment
    );

    // 3. Restore the persisted session, or log in with env credentials
    let store = SessionStore::new(&config.session_file);
    let mut session = store.load()?;

    if session.is_none()
        && let (Ok(username), Ok(password)) = (
            std::env::var("EDEBT_USERNAME"),
            std::env::var("EDEBT_PASSWORD"),
        )
    {
        let client = config.client_config().build_http_client();
        match client.login(&username, &password, true).await {
            Ok(login) => {
                let fresh = StoredSession::from_login(login);
                store.save(&fresh)?;
                tracing::info!("Logged in as {}", username);
                session = Some(fresh);
            }
            Err(e) => {
                tracing::error!("Login failed: {}", e);
                return Err(e.into());
            }
        }
    }

    let Some(session) = session else {
        tracing::warn!("No session available; set EDEBT_USERNAME and EDEBT_PASSWORD to log in");
        return Ok(());
    };

    // 4. Build the authenticated client and land on a permitted page
    let client = config
        .client_config()
        .with_token(&session.access_token)
        .build_http_client();

    match session.resolve_page("debt") {
        Some(page) => tracing::info!("Opening page '{}'", page),
        None => {
            tracing::error!("Account has no permitted pages");
            return Ok(());
        }
    }

    // 5. Headline numbers from the dashboard
    match client.dashboard(&DashboardQuery::default()).await {
        Ok(data) => {
            tracing::info!(
                "Debt this month: {} (collected rate {:.1}%)",
                format_vnd(data.kpi.total_debt_this_month),
                data.kpi.collected_rate_this_month
            );
            tracing::info!(
                "Coming due: {} order(s) worth {}; overdue: {} order(s) worth {}",
                data.kpi.coming_due_count,
                format_vnd(data.kpi.coming_due_amount),
                data.kpi.overdue_count,
                format_vnd(data.kpi.overdue_amount)
            );
        }
        Err(e) => {
            tracing::error!("Dashboard fetch failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
