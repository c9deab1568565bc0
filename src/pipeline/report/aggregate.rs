use super::guarded_ratio;
use crate::pipeline::domain::{City, ClaimRecord};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
struct CityTotals {
    claims: usize,
    claim_amount: f64,
    premium: f64,
    paid: f64,
    rejection_count: usize,
}

/// Accumulated and derived performance figures for one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityPerformance {
    pub city: City,
    pub claims: usize,
    pub total_claim_amount: f64,
    pub total_premium: f64,
    pub total_paid: f64,
    pub rejection_count: usize,
    pub profit: f64,
    pub profit_margin: f64,
    pub rejection_rate: f64,
    pub avg_claim: f64,
    pub avg_premium: f64,
}

/// Folds the full record set into per-city performance figures, emitted in
/// the fixed city order. `Unknown` accumulates like any other city but is
/// never reported; neither are cities with zero claims.
pub fn analyze_city_performance(records: &[ClaimRecord]) -> Vec<CityPerformance> {
    let mut totals: HashMap<City, CityTotals> = City::ordered()
        .into_iter()
        .map(|city| (city, CityTotals::default()))
        .collect();

    for record in records {
        let entry = totals.entry(record.city).or_default();
        entry.claims += 1;
        entry.claim_amount += record.claim_amount;
        entry.premium += record.premium_collected;
        entry.paid += record.paid_amount;

        // A rejection is an unpaid claim that carries a remark; what the
        // remark classified as does not matter here.
        if record.paid_amount == 0.0 && record.has_rejection_remark() {
            entry.rejection_count += 1;
        }
    }

    City::ordered()
        .into_iter()
        .filter(|city| !matches!(city, City::Unknown))
        .filter_map(|city| {
            let metrics = &totals[&city];
            (metrics.claims > 0).then(|| derive_performance(city, metrics))
        })
        .collect()
}

fn derive_performance(city: City, totals: &CityTotals) -> CityPerformance {
    let claims = totals.claims as f64;
    let profit = totals.premium - totals.paid;

    CityPerformance {
        city,
        claims: totals.claims,
        total_claim_amount: totals.claim_amount,
        total_premium: totals.premium,
        total_paid: totals.paid,
        rejection_count: totals.rejection_count,
        profit,
        profit_margin: guarded_ratio(profit, totals.premium) * 100.0,
        rejection_rate: guarded_ratio(totals.rejection_count as f64, claims) * 100.0,
        avg_claim: guarded_ratio(totals.claim_amount, claims),
        avg_premium: guarded_ratio(totals.premium, claims),
    }
}
