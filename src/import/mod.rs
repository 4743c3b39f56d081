//! Comparable-sales import: turns an MLS-style CSV export into a
//! `MarketContext` with derived area statistics. Tolerant of header drift
//! and messy rows; one bad line never sinks the import.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::analysis::domain::{ComparableProperty, InventoryLevel, MarketContext};

use parser::ComparableRow;

/// Sales moving faster than this many days on market read as low inventory.
const INVENTORY_FAST_DOM: u32 = 15;
/// Slower than this reads as a high-inventory market.
const INVENTORY_SLOW_DOM: u32 = 45;

#[derive(Debug)]
pub enum ComparablesImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ComparablesImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparablesImportError::Io(err) => {
                write!(f, "failed to read comparables export: {}", err)
            }
            ComparablesImportError::Csv(err) => write!(f, "invalid comparables CSV data: {}", err),
        }
    }
}

impl std::error::Error for ComparablesImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComparablesImportError::Io(err) => Some(err),
            ComparablesImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ComparablesImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ComparablesImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct ComparablesImporter;

impl ComparablesImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<MarketContext, ComparablesImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<MarketContext, ComparablesImportError> {
        let rows = parser::parse_rows(reader)?;
        Ok(market_from_rows(rows))
    }
}

fn market_from_rows(rows: Vec<ComparableRow>) -> MarketContext {
    let comparables: Vec<ComparableProperty> = rows
        .iter()
        .map(|row| ComparableProperty {
            address: row.address.clone(),
            price: row.price,
            sqft: row.sqft,
            beds: row.beds,
            baths: row.baths,
            sold_date: row.sold_date,
            price_per_sqft: row
                .sqft
                .filter(|sqft| *sqft > 0)
                .map(|sqft| row.price / f64::from(sqft)),
        })
        .collect();

    let median_area_price = median(comparables.iter().map(|comp| comp.price).collect());
    let area_median_ppsf = median(
        comparables
            .iter()
            .filter_map(|comp| comp.price_per_sqft)
            .collect(),
    );

    let dom_values: Vec<u32> = rows.iter().filter_map(|row| row.days_on_market).collect();
    let avg_days_on_market = if dom_values.is_empty() {
        None
    } else {
        Some(dom_values.iter().sum::<u32>() / dom_values.len() as u32)
    };

    let inventory_level = avg_days_on_market.map(|dom| {
        if dom < INVENTORY_FAST_DOM {
            InventoryLevel::Low
        } else if dom <= INVENTORY_SLOW_DOM {
            InventoryLevel::Balanced
        } else {
            InventoryLevel::High
        }
    });

    MarketContext {
        median_area_price,
        // The subject property's own price per square foot is not derivable
        // from comparables; callers fill it when they know the listing.
        price_per_sqft: None,
        area_median_ppsf,
        avg_days_on_market,
        inventory_level,
        comparables,
    }
}

fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXPORT: &str = "\
Address,Sold Price,SqFt,Beds,Baths,Sold_Date,DOM
101 Cedar Ln,\"$400,000\",2000,3,2,2025-05-02,12
88 Birch Ave,\"$450,000\",1800,3,2.5,04/18/2025,20
n/a,,,,,,
7 Willow Way,\"$500,000\",2500,4,3,2025-03-30,28
";

    #[test]
    fn import_derives_market_statistics() {
        let market =
            ComparablesImporter::from_reader(Cursor::new(EXPORT)).expect("valid export");

        assert_eq!(market.comparables.len(), 3);
        assert_eq!(market.median_area_price, Some(450_000.0));
        assert_eq!(market.avg_days_on_market, Some(20));
        assert_eq!(market.inventory_level, Some(InventoryLevel::Balanced));

        let first = &market.comparables[0];
        assert_eq!(first.address, "101 Cedar Ln");
        let ppsf = first.price_per_sqft.expect("sqft present");
        assert!((ppsf - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rows_without_price_are_skipped_not_fatal() {
        let market = ComparablesImporter::from_reader(Cursor::new(
            "Address,Price\nno-price house,\n1 Elm St,\"$300,000\"\n",
        ))
        .expect("valid export");

        assert_eq!(market.comparables.len(), 1);
        assert_eq!(market.median_area_price, Some(300_000.0));
        assert_eq!(market.inventory_level, None);
    }

    #[test]
    fn missing_optional_columns_leave_fields_empty() {
        let market = ComparablesImporter::from_reader(Cursor::new(
            "Address,Price\n1 Elm St,\"$300,000\"\n",
        ))
        .expect("valid export");

        let comp = &market.comparables[0];
        assert_eq!(comp.sqft, None);
        assert_eq!(comp.price_per_sqft, None);
        assert_eq!(market.area_median_ppsf, None);
    }
}
