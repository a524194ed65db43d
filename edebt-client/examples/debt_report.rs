// edebt-client/examples/debt_report.rs
// Logs in, fetches the customer debt listing and prints a short report

use edebt_client::{ClientConfig, HttpClient};
use shared::debt::{self, DebtStatus};
use shared::models::DebtQuery;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <username> <password> [search]", args[0]);
        println!("  Example: {} ketoan1 password123 \"Hòa Phát\"", args[0]);
        return Ok(());
    }

    let username = &args[1];
    let password = &args[2];
    let search = args.get(3).cloned().unwrap_or_default();

    let base_url =
        std::env::var("EDEBT_API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

    // Log in, then rebuild the client with the token attached
    let client = HttpClient::new(&ClientConfig::new(&base_url));
    let session = match client.login(username, password, false).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to login: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!("Logged in, {} page(s) permitted", session.pages.len());

    let client = client.with_token(session.access_token);

    let query = DebtQuery {
        search,
        ..DebtQuery::default()
    };
    let page = client.get_customer_debts(&query).await?;

    let today = chrono::Utc::now().date_naive();
    for row in &page.list_data {
        tracing::info!(
            "{} ({}): {} order(s), total debt {}",
            row.name,
            row.sales_person,
            row.order_count,
            row.total_debt
        );
        for order in &row.orders {
            if order.status == DebtStatus::Overdue {
                tracing::warn!(
                    "  {} overdue {} day(s), outstanding {}",
                    order.order_number,
                    debt::display_overdue_days(order, today),
                    debt::outstanding_amount(order)
                );
            }
        }
    }

    Ok(())
}
