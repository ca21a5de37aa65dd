use std::sync::Arc;

use letscout::api::{HttpPropertySource, MockPropertySource};
use letscout::config::AppConfig;
use letscout::format::format_rent;
use letscout::models::Property;
use letscout::search::{FeedState, PropertyFeed};
use tracing::{info, warn, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 LetScout - rental listings browser");
    info!("======================================");
    info!("");

    let config = AppConfig::from_env();
    // Optional county filter, e.g. `letscout Dublin`
    let county = std::env::args().nth(1);

    if let Some(county) = &county {
        info!("Fetching listings in county {county}...");
    } else {
        info!("Fetching all listings...");
    }

    let source = HttpPropertySource::new(&config)?;
    let mut feed = PropertyFeed::new(Arc::new(source), config.clone());
    feed.update_criteria(|criteria| criteria.county = county.clone())
        .await?;

    let properties = match feed.state().await {
        FeedState::Loaded(properties) => properties,
        _ => {
            warn!("Backend unreachable, falling back to the mock dataset");
            let mut feed = PropertyFeed::new(Arc::new(MockPropertySource::new()), config.clone());
            feed.update_criteria(|criteria| criteria.county = county.clone())
                .await?;
            feed.properties().await
        }
    };

    display(&properties);

    // Save to JSON for inspection
    let json = serde_json::to_string_pretty(&properties)?;
    tokio::fs::write("listings.json", json).await?;
    info!("💾 Saved {} listings to listings.json", properties.len());

    Ok(())
}

fn display(properties: &[Property]) {
    info!("\n✅ Loaded {} listings\n", properties.len());

    for (i, property) in properties.iter().enumerate() {
        println!("{}. {} ({})", i + 1, property.title, format_rent(property.rent));
        println!("   {} · {}", property.property_type.label(), property.area);
        if let Some(county) = &property.county {
            println!("   County: {county}");
        }
        println!("   ID: {}", property.id);
        println!("   Photos: {}", property.images.len());
        println!();
    }
}
