use crate::constants::{NO_DEAL_URL, NO_TITLE, UNKNOWN_STORE};
use crate::entities::deal::Deal;
use crate::sheet_interface::sheet_error::{RowError, SheetError};
use csv::{ReaderBuilder, StringRecord, Trim};

pub const TITLE: &str = "title";
pub const STORE: &str = "store";
pub const CURRENT_PRICE: &str = "current_price";
pub const ORIGINAL_PRICE: &str = "original_price";
pub const DEAL_URL: &str = "deal_url";

pub const REQUIRED_COLUMNS: [&str; 5] = [TITLE, STORE, CURRENT_PRICE, ORIGINAL_PRICE, DEAL_URL];

// Cell contents a spreadsheet export uses for "no value".
const MISSING_MARKERS: [&str; 8] = ["NA", "N/A", "NaN", "nan", "null", "NULL", "None", "#N/A"];

/// Deals read from one payload, plus the rows that had to be left out.
#[derive(Debug, Default)]
pub struct DealSheet {
    pub deals: Vec<Deal>,
    pub skipped_rows: Vec<RowError>,
}

struct ColumnIndexes {
    title: usize,
    store: usize,
    current_price: usize,
    original_price: usize,
    deal_url: usize,
}

/// Parses a CSV payload whose header row names the deal columns. Extra columns are ignored
/// and rows keep their source order. A row with an unusable price is recorded in
/// `skipped_rows` instead of failing the whole payload.
pub fn parse_deal_rows(payload: &str) -> Result<DealSheet, SheetError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(payload.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(csv_error) => return Err(SheetError::malformed("reading header row", csv_error)),
    };
    let columns = column_indexes(&headers)?;

    let mut sheet = DealSheet::default();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(csv_error) => return Err(SheetError::malformed("reading rows", csv_error)),
        };
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        match normalize_row(&record, &columns) {
            Ok(deal) => sheet.deals.push(deal),
            Err(row_error) => sheet.skipped_rows.push(row_error),
        }
    }
    Ok(sheet)
}

fn column_indexes(headers: &StringRecord) -> Result<ColumnIndexes, SheetError> {
    let position = |name: &str| headers.iter().position(|header| header == name);

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|&name| position(name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(SheetError::malformed("missing required columns", missing.join(", ")));
    }

    let index = |name: &str| position(name).unwrap_or_default();
    Ok(ColumnIndexes {
        title: index(TITLE),
        store: index(STORE),
        current_price: index(CURRENT_PRICE),
        original_price: index(ORIGINAL_PRICE),
        deal_url: index(DEAL_URL),
    })
}

fn normalize_row(record: &StringRecord, columns: &ColumnIndexes) -> Result<Deal, RowError> {
    let line = record.position().map_or(0, |position| position.line());

    Ok(Deal {
        title: text_cell(record, columns.title, NO_TITLE),
        store: text_cell(record, columns.store, UNKNOWN_STORE),
        current_price: price_cell(record, columns.current_price, CURRENT_PRICE, line)?,
        original_price: price_cell(record, columns.original_price, ORIGINAL_PRICE, line)?,
        deal_url: text_cell(record, columns.deal_url, NO_DEAL_URL),
    })
}

fn present_cell(record: &StringRecord, index: usize) -> Option<&str> {
    record
        .get(index)
        .filter(|cell| {
            let trimmed = cell.trim();
            !trimmed.is_empty() && !MISSING_MARKERS.contains(&trimmed)
        })
}

fn text_cell(record: &StringRecord, index: usize, default: &str) -> String {
    match present_cell(record, index) {
        Some(cell) => cell.to_string(),
        None => default.to_string(),
    }
}

fn price_cell(record: &StringRecord, index: usize, column: &'static str, line: u64) -> Result<f64, RowError> {
    let cell = match present_cell(record, index) {
        Some(cell) => cell,
        None => return Ok(0.0),
    };
    let row_error = |reason: &str| RowError {
        line,
        column,
        value: cell.to_string(),
        reason: reason.to_string(),
    };
    match cell.trim().parse::<f64>() {
        Ok(price) if !price.is_finite() => Err(row_error("is not a finite number")),
        Ok(price) if price < 0.0 => Err(row_error("is negative")),
        Ok(price) => Ok(price),
        Err(parse_error) => Err(row_error(&parse_error.to_string())),
    }
}
