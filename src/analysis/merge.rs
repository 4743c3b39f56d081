//! Per-field merge of partially populated snapshots and the effective-price
//! fallback chain. Both priority orders are deliberate contracts, kept as
//! named functions rather than inline fallback chains.

use super::domain::PropertySnapshot;

/// Take the authoritative value when present, otherwise the inferred one.
fn merge_field<T: Clone>(authoritative: &Option<T>, inferred: &Option<T>) -> Option<T> {
    authoritative.clone().or_else(|| inferred.clone())
}

/// Combine an authoritative external-record snapshot with an
/// inferred/estimated one. The priority is per-field, not per-object: a
/// snapshot missing `hoa` from the record source still takes the inferred
/// `hoa` while preferring the record's `beds`. No validation or clamping
/// happens here; malformed values pass through unchanged.
pub fn merge_snapshots(
    authoritative: Option<&PropertySnapshot>,
    inferred: Option<&PropertySnapshot>,
) -> Option<PropertySnapshot> {
    match (authoritative, inferred) {
        (None, None) => None,
        (Some(record), None) => Some(record.clone()),
        (None, Some(estimated)) => Some(estimated.clone()),
        (Some(record), Some(estimated)) => Some(PropertySnapshot {
            beds: merge_field(&record.beds, &estimated.beds),
            baths: merge_field(&record.baths, &estimated.baths),
            sqft: merge_field(&record.sqft, &estimated.sqft),
            lot_sqft: merge_field(&record.lot_sqft, &estimated.lot_sqft),
            year_built: merge_field(&record.year_built, &estimated.year_built),
            stories: merge_field(&record.stories, &estimated.stories),
            garage: merge_field(&record.garage, &estimated.garage),
            hoa: merge_field(&record.hoa, &estimated.hoa),
            zoning: merge_field(&record.zoning, &estimated.zoning),
            tax_assessed_value: merge_field(
                &record.tax_assessed_value,
                &estimated.tax_assessed_value,
            ),
            last_sale_date: merge_field(&record.last_sale_date, &estimated.last_sale_date),
            last_sale_price: merge_field(&record.last_sale_price, &estimated.last_sale_price),
        }),
    }
}

/// Resolve the single price used for budget comparison: listing price, then
/// tax-assessed value, then last sale price. The first positive value wins;
/// zero and negative candidates are skipped so stale placeholder records
/// never masquerade as a price.
pub fn resolve_effective_price(
    list_price: Option<f64>,
    snapshot: Option<&PropertySnapshot>,
) -> Option<f64> {
    let candidates = [
        list_price,
        snapshot.and_then(|snap| snap.tax_assessed_value),
        snapshot.and_then(|snap| snap.last_sale_price),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|price| *price > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_snapshot() -> PropertySnapshot {
        PropertySnapshot {
            beds: Some(3),
            baths: None,
            sqft: Some(1850),
            stories: Some(2),
            tax_assessed_value: Some(412_000.0),
            ..PropertySnapshot::default()
        }
    }

    fn estimated_snapshot() -> PropertySnapshot {
        PropertySnapshot {
            beds: Some(2),
            baths: Some(2.0),
            hoa: Some(180.0),
            stories: Some(1),
            ..PropertySnapshot::default()
        }
    }

    #[test]
    fn merge_prefers_record_per_field_not_per_object() {
        let merged = merge_snapshots(Some(&record_snapshot()), Some(&estimated_snapshot()))
            .expect("one input present");

        assert_eq!(merged.beds, Some(3));
        assert_eq!(merged.baths, Some(2.0));
        assert_eq!(merged.hoa, Some(180.0));
        assert_eq!(merged.stories, Some(2));
        assert_eq!(merged.sqft, Some(1850));
    }

    #[test]
    fn merge_of_two_missing_snapshots_is_missing() {
        assert_eq!(merge_snapshots(None, None), None);
    }

    #[test]
    fn merge_passes_single_source_through() {
        let merged = merge_snapshots(None, Some(&estimated_snapshot()));
        assert_eq!(merged, Some(estimated_snapshot()));

        let merged = merge_snapshots(Some(&record_snapshot()), None);
        assert_eq!(merged, Some(record_snapshot()));
    }

    #[test]
    fn effective_price_prefers_list_price() {
        let snapshot = record_snapshot();
        let price = resolve_effective_price(Some(435_000.0), Some(&snapshot));
        assert_eq!(price, Some(435_000.0));
    }

    #[test]
    fn effective_price_falls_back_through_assessment_and_last_sale() {
        let mut snapshot = record_snapshot();
        assert_eq!(
            resolve_effective_price(None, Some(&snapshot)),
            Some(412_000.0)
        );

        snapshot.tax_assessed_value = None;
        snapshot.last_sale_price = Some(365_000.0);
        assert_eq!(
            resolve_effective_price(None, Some(&snapshot)),
            Some(365_000.0)
        );
    }

    #[test]
    fn effective_price_skips_non_positive_candidates() {
        let snapshot = PropertySnapshot {
            tax_assessed_value: Some(0.0),
            last_sale_price: Some(298_500.0),
            ..PropertySnapshot::default()
        };

        assert_eq!(
            resolve_effective_price(Some(-1.0), Some(&snapshot)),
            Some(298_500.0)
        );
        assert_eq!(resolve_effective_price(None, None), None);
    }
}
