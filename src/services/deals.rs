// src/services/deals.rs
use anyhow::{Context, Result};
use csv::Reader;
use log::{error, info};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;

use crate::models::Deal;

/// Read-only client for the CRM's deal list endpoint.
#[derive(Clone)]
pub struct DealsClient {
    url: String,
    client: Client,
}

impl DealsClient {
    pub fn new(url: impl Into<String>) -> Self {
        DealsClient {
            url: url.into(),
            client: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_deals(&self) -> Result<Vec<Deal>> {
        info!("Fetching deals from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.url))?;

        let status = response.status();
        if !status.is_success() {
            error!("Deal collaborator answered {}", status);
            anyhow::bail!("deal collaborator answered {}", status);
        }

        let deals: Vec<Deal> = response
            .json()
            .await
            .context("deal list was not valid JSON")?;
        info!("Fetched {} deals", deals.len());
        Ok(deals)
    }
}

#[derive(Debug, Deserialize)]
struct DealRow {
    stage: String,
    value: String,
    #[serde(default)]
    status: String,
}

/// Load a CRM export with a `stage,value,status` header. Blank values count as 0.
pub fn load_deals_csv(path: impl AsRef<Path>) -> Result<Vec<Deal>> {
    let path = path.as_ref();
    let mut rdr = Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_deals(&mut rdr)
}

pub fn parse_deals_csv(text: &str) -> Result<Vec<Deal>> {
    let mut rdr = Reader::from_reader(text.as_bytes());
    read_deals(&mut rdr)
}

fn read_deals<R: std::io::Read>(rdr: &mut Reader<R>) -> Result<Vec<Deal>> {
    let mut deals = Vec::new();
    for (line, result) in rdr.deserialize::<DealRow>().enumerate() {
        let row = result.with_context(|| format!("malformed deal record {}", line + 1))?;
        let value = match row.value.trim() {
            "" => 0.0,
            raw => raw
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .with_context(|| format!("deal record {} has invalid value {:?}", line + 1, raw))?,
        };
        deals.push(Deal {
            stage: row.stage.trim().to_string(),
            value,
            status: row.status.trim().to_string(),
        });
    }
    info!("Loaded {} deals from CSV", deals.len());
    Ok(deals)
}
