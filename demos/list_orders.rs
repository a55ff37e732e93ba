//! List new orders and the status of a task.
//!
//! Configuration is read from the environment:
//! - BACKMARKET_TOKEN (required)
//! - BACKMARKET_API_URL, BACKMARKET_USER_AGENT, BACKMARKET_LANGUAGE (optional)
//! - BACKMARKET_TASK_ID (optional)
//!
//! Run with: cargo run --example list_orders

use backmarket_rs::{BackMarketClient, Query, TaskId};

#[tokio::main]
async fn main() -> backmarket_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = BackMarketClient::from_env()?;
    println!("Connecting to {}...", client.config().api_base_url());

    // State 1 = new orders awaiting acceptance
    let result = client
        .orders()
        .list(Some(&Query::new().param("state", 1)))
        .await;

    match result.json::<serde_json::Value>() {
        Ok(body) => {
            let count = body["count"].as_u64().unwrap_or(0);
            println!("\nFound {} new order(s)", count);
            if let Some(orders) = body["results"].as_array() {
                for order in orders {
                    println!("  - {} ({})", order["order_id"], order["date_creation"]);
                }
            }
        }
        Err(err) => eprintln!("Failed to list orders: {}", err),
    }

    if let Ok(task_id) = std::env::var("BACKMARKET_TASK_ID") {
        let status = client.tasks().status(&TaskId::new(task_id), None).await;
        println!("\nTask: {}", serde_json::to_string_pretty(&status)?);
    }

    println!("\nDone!");
    Ok(())
}
