use std::process;

use clap::Parser;
use env_logger;
use indicatif::ProgressBar;
use log::{error, info, warn};
use reqwest::Client;

use crate::cep::Cep;
use crate::cli::Cli;
use crate::lookup::error::LookupError;
use crate::lookup::models::AddressRecord;

mod cep;
mod cli;
mod export;
mod lookup;
mod cep_tests;
mod export_tests;

#[actix_rt::main]
async fn main() {
    dotenv::dotenv().ok();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let cli = Cli::parse();

    let mut ceps = Vec::with_capacity(cli.ceps.len());
    for raw in &cli.ceps {
        match Cep::parse(raw) {
            Ok(cep) => { ceps.push(cep); },
            Err(err) => {
                error!("{}", err);
                process::exit(1);
            }
        }
    }

    let client = match lookup::build_client() {
        Ok(client) => client,
        Err(err) => {
            error!("Could not build HTTP client: {}", err);
            process::exit(1);
        }
    };

    let records = fetch_all(&client, &ceps).await;
    if records.is_empty() {
        error!("Could not save data: no CEP was found");
        process::exit(1);
    }

    if let Err(err) = export::write_records(&cli.output, &records) {
        error!("{}", err);
        process::exit(1);
    }
    info!("Saved {} address(es) to {}", records.len(), cli.output.display());
}

/// Sequential lookups; unresolved CEPs are logged and skipped.
async fn fetch_all(client: &Client, ceps: &[Cep]) -> Vec<AddressRecord> {
    let progress_bar = if ceps.len() > 1 {
        Some(ProgressBar::new(ceps.len() as u64))
    } else {
        None
    };

    let mut records = Vec::with_capacity(ceps.len());
    for cep in ceps {
        match lookup::fetch_address(client, cep).await {
            Ok(record) => { records.push(record); },
            Err(LookupError::CepNotFound) => {
                warn!("CEP {} not found", cep);
            },
            Err(err) => {
                error!("Error while fetching CEP {}: {}", cep, err);
            }
        }
        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }
    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    records
}
