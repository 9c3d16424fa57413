use crate::entities::deal::Deal;
use crate::sheet_interface::deal_rows::{parse_deal_rows, DealSheet};
use crate::sheet_interface::sheet_error::SheetError;
use crate::sheet_interface::sheet_reference::export_url;
use log::{debug, error, info, warn};
use reqwest::Client;
use std::time::Duration;

/// How a fetch ended, kept alongside the deals so callers can tell an empty sheet from a failed read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Loaded,
    Empty,
    Failed,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Loaded => "loaded",
            FetchStatus::Empty => "empty",
            FetchStatus::Failed => "failed",
        }
    }
}

#[derive(Debug)]
pub struct FetchedDeals {
    pub deals: Vec<Deal>,
    pub status: FetchStatus,
}

/// Reads deals sheets over HTTP. Every call goes to the network.
#[derive(Clone)]
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(SheetClient { client })
    }

    pub async fn load(&self, reference: &str) -> Result<DealSheet, SheetError> {
        let csv_url = export_url(reference)?;
        debug!("Reading deals from {}", csv_url);

        let response = match self.client.get(&csv_url).send().await {
            Ok(response) => response,
            Err(send_error) => return Err(SheetError::unreachable("send", send_error)),
        };
        if !response.status().is_success() {
            return Err(SheetError::unreachable("status", response.status()));
        }
        let payload = match response.text().await {
            Ok(payload) => payload,
            Err(body_error) => return Err(SheetError::unreachable("body", body_error)),
        };

        let sheet = parse_deal_rows(&payload)?;
        for skipped in &sheet.skipped_rows {
            warn!("Skipping sheet row {}", skipped);
        }
        info!("Loaded {} deals from sheet, {} rows skipped", sheet.deals.len(), sheet.skipped_rows.len());
        Ok(sheet)
    }

    /// Never fails: a sheet that cannot be read yields no deals and a `Failed` status.
    pub async fn fetch_deals(&self, reference: &str) -> FetchedDeals {
        match self.load(reference).await {
            Ok(sheet) if sheet.deals.is_empty() => FetchedDeals { deals: sheet.deals, status: FetchStatus::Empty },
            Ok(sheet) => FetchedDeals { deals: sheet.deals, status: FetchStatus::Loaded },
            Err(sheet_error) => {
                error!("Could not read deals sheet: {}", sheet_error);
                FetchedDeals { deals: Vec::new(), status: FetchStatus::Failed }
            }
        }
    }
}
