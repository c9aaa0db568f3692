//! Drive a data-access session against the configured API and report what it saw.
//!
//! Prints the health status, then the size and source of every collection.

use vidhigya_backend::client::{DataService, Sourced};
use vidhigya_backend::config::{logging_from_env, ClientConfig};
use vidhigya_backend::init_tracing;
use vidhigya_backend::models::Collection;

fn summarize<T>(rows: Sourced<Vec<T>>) -> (usize, &'static str) {
    let source = if rows.is_remote() { "remote" } else { "local" };
    (rows.data().len(), source)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let (log_level, log_format) = logging_from_env();
    init_tracing(&log_level, log_format);

    tracing::info!("Probing {}", config.base_url);

    let mut service = DataService::new(&config)?;
    let health = service.check_health().await;
    println!("health    {}", health.status());

    for collection in Collection::ALL {
        let (count, source) = match collection {
            Collection::Posts => summarize(service.get_posts().await),
            Collection::Members => summarize(service.get_members().await),
            Collection::Jobs => summarize(service.get_jobs().await),
            Collection::Hearings => summarize(service.get_hearings().await),
            Collection::News => summarize(service.get_news().await),
            Collection::Blogs => summarize(service.get_blogs().await),
        };
        println!("{:<9} {:>4} records ({})", collection, count, source);
    }

    Ok(())
}
