//! Command line access to the shop API
//!
//! Usage:
//!   cargo run --bin shop_cli -- addresses
//!   cargo run --bin shop_cli -- orders [status]
//!   cargo run --bin shop_cli -- order <id>
//!   cargo run --bin shop_cli -- owned
//!   cargo run --bin shop_cli -- reviews
//!
//! The bearer token is read from SHOP_API_TOKEN.

use anyhow::{anyhow, Result};
use shopfront::bin_common::{load_client_config, parse_args, ConfigType};
use shopfront::shop_api::{init_tracing_with_level, OrderFilters, OrderStatus, ShopClient};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = load_client_config(ConfigType::Client)?;
    init_tracing_with_level(&config.log_level);

    let token = std::env::var("SHOP_API_TOKEN")
        .map_err(|_| anyhow!("SHOP_API_TOKEN is not set"))?;
    let client = ShopClient::from_config(&config)?;
    let args = parse_args();

    debug!("Using API at {}", client.transport().base_url());

    let response = match args.first().map(|s| s.as_str()) {
        Some("addresses") => client.addresses().list(&token).await?,

        Some("orders") => match args.get(1) {
            Some(status) => {
                let status: OrderStatus = status.parse().map_err(|e: String| anyhow!(e))?;
                let filters = OrderFilters::new().with_status(status);
                client.orders().list(&filters, &token).await?
            }
            None => client.orders().list_mine(&token).await?,
        },

        Some("order") => {
            let id = args.get(1).ok_or(anyhow!("Missing order id"))?;
            client.orders().detail(id, &token).await?
        }

        Some("owned") => client.owned_products().list_mine(&token).await?,

        Some("reviews") => client.reviews().list_mine(&token).await?,

        _ => {
            println!("Usage: shop_cli <addresses|orders [status]|order <id>|owned|reviews>");
            return Ok(());
        }
    };

    println!("{} {}", response.status(), response.text());
    Ok(())
}
