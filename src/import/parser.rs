use std::io::Read;

use chrono::NaiveDate;
use tracing::warn;

use super::normalizer;

/// One usable row from a comparable-sales export.
#[derive(Debug, Clone)]
pub(crate) struct ComparableRow {
    pub address: String,
    pub price: f64,
    pub sqft: Option<u32>,
    pub beds: Option<u32>,
    pub baths: Option<f32>,
    pub sold_date: Option<NaiveDate>,
    pub days_on_market: Option<u32>,
}

const ADDRESS_HEADERS: [&str; 3] = ["address", "street address", "property address"];
const PRICE_HEADERS: [&str; 4] = ["price", "sold price", "sale price", "close price"];
const SQFT_HEADERS: [&str; 4] = ["sqft", "sq ft", "square feet", "living area"];
const BEDS_HEADERS: [&str; 3] = ["beds", "bedrooms", "br"];
const BATHS_HEADERS: [&str; 3] = ["baths", "bathrooms", "ba"];
const SOLD_DATE_HEADERS: [&str; 3] = ["sold date", "close date", "sale date"];
const DOM_HEADERS: [&str; 3] = ["days on market", "dom", "cdom"];

/// Parse the export, keeping rows that carry at least an address and a
/// positive price. Rows that don't are skipped with a warning; one messy
/// row should never sink the whole import.
pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<ComparableRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(normalizer::normalize_header)
        .collect();

    let find = |candidates: &[&str]| -> Option<usize> {
        columns
            .iter()
            .position(|column| candidates.contains(&column.as_str()))
    };

    let address_col = find(&ADDRESS_HEADERS);
    let price_col = find(&PRICE_HEADERS);
    let sqft_col = find(&SQFT_HEADERS);
    let beds_col = find(&BEDS_HEADERS);
    let baths_col = find(&BATHS_HEADERS);
    let sold_date_col = find(&SOLD_DATE_HEADERS);
    let dom_col = find(&DOM_HEADERS);

    let mut rows = Vec::new();

    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        let cell = |col: Option<usize>| col.and_then(|idx| record.get(idx));

        let address = cell(address_col).unwrap_or_default().to_string();
        let price = cell(price_col).and_then(normalizer::parse_money);

        let Some(price) = price.filter(|value| *value > 0.0) else {
            warn!(row = index + 1, "skipping comparable without a usable price");
            continue;
        };
        if address.is_empty() {
            warn!(row = index + 1, "skipping comparable without an address");
            continue;
        }

        rows.push(ComparableRow {
            address,
            price,
            sqft: cell(sqft_col).and_then(normalizer::parse_count),
            beds: cell(beds_col).and_then(normalizer::parse_count),
            baths: cell(baths_col).and_then(normalizer::parse_fractional),
            sold_date: cell(sold_date_col).and_then(normalizer::parse_date),
            days_on_market: cell(dom_col).and_then(normalizer::parse_count),
        });
    }

    Ok(rows)
}
