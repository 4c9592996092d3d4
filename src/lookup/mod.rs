use std::env;
use std::time::Duration;

use bytes::Bytes;
use log::debug;
use reqwest::Client;

use crate::cep::Cep;
use crate::lookup::error::LookupError;
use crate::lookup::models::AddressRecord;

pub mod error;
pub mod models;

const USER_AGENT: &str = concat!("cep-export/", env!("CARGO_PKG_VERSION"));
const DEFAULT_BASE_URL: &str = "https://viacep.com.br";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub fn build_client() -> Result<Client, reqwest::Error> {
    let timeout_secs = env::var("HTTP_TIMEOUT_SECS")
        .map(|secs| secs
            .parse::<u64>()
            .expect("HTTP_TIMEOUT_SECS must be an integer")
        )
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

fn base_url() -> String {
    env::var("VIACEP_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned())
}

/// One GET against the ViaCEP API, no retries.
pub async fn fetch_address(
    client: &Client,
    cep: &Cep
) -> Result<AddressRecord, LookupError> {
    let url = format!("{}/ws/{}/json/", base_url(), cep.digits());
    debug!("GET {}", url);

    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::UnexpectedStatus(status));
    }

    let body = response.bytes().await?;
    parse_lookup_response(&body)
}

/// Turns a response body into a record.
///
/// ViaCEP signals an unknown CEP with an `erro` key in the payload
/// (the value has been both `true` and `"true"` across API versions,
/// so only key presence is checked) and the check must happen before
/// field deserialization.
pub fn parse_lookup_response(body: &Bytes) -> Result<AddressRecord, LookupError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if value.get("erro").is_some() {
        return Err(LookupError::CepNotFound);
    }

    let record = serde_json::from_value(value)?;
    Ok(record)
}
