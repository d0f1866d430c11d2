//! Dental Registry - registration driver
//!
//! Reads one registration document from stdin, runs it through the matching
//! form and prints either the accepted record or the field errors as JSON.
//!
//! ```text
//! {"kind": "natural", "document_number": "1234567", ...}
//! {"kind": "company", "tax_id": "900123456-6", ...}
//! ```

use anyhow::{Context, Result};
use dental_registry::forms::{CompanyForm, CompanyInput, NaturalPersonForm, NaturalPersonInput};
use dental_registry::{
    Config, NotificationQueue, PortalMetrics, RegistrationService, RegistrationServiceImpl,
    SimulatedScanner,
};
use serde::Deserialize;
use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RegistrationRequest {
    Natural(NaturalPersonInput),
    Company(CompanyInput),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only; stdout carries the result document)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read registration from stdin")?;

    let request: RegistrationRequest =
        serde_json::from_str(&raw).context("Registration document is not valid JSON")?;

    let queue = NotificationQueue::new(config.notification_ttl());
    let metrics = PortalMetrics::new();
    let service = RegistrationServiceImpl::new(
        Arc::new(SimulatedScanner::from_config(&config)),
        queue.clone(),
        metrics.clone(),
    );

    let result = match request {
        RegistrationRequest::Natural(input) => {
            service.submit_natural(&NaturalPersonForm::new(input))
        }
        RegistrationRequest::Company(input) => service.submit_company(&CompanyForm::new(input)),
    };

    info!("{}", metrics.summary());

    match result {
        Ok(registration) => {
            for notification in queue.list() {
                info!(title = %notification.title, "{}", notification.message);
            }
            println!("{}", serde_json::to_string_pretty(&registration)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            error!(count = errors.len(), "Registration rejected");
            println!("{}", serde_json::to_string_pretty(&errors)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
