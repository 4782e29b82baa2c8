//! Send Reminder Lambda - Handles /send endpoint.
//!
//! Accepts `userId` and `date` (GET query or POST JSON body), looks up the
//! user's reservation in Airtable and pushes a reminder over LINE.

use lambda_http::{run, service_fn, Error};
use shared::{Config, ReminderService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    let service = Arc::new(ReminderService::new(config)?);
    info!(
        default_account = %service.credentials().default_label(),
        accounts = service.credentials().labels().count(),
        "Reminder service ready"
    );

    run(service_fn(move |event| {
        let service = service.clone();
        async move { shared::handle(&service, event).await }
    }))
    .await
}
