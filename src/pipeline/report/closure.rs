use super::aggregate::CityPerformance;
use super::normalization_floor;
use crate::config::ScoringConfig;
use crate::pipeline::domain::City;
use serde::Serialize;
use std::fmt::Write;

/// The closure verdict: the weakest-performing city, or none when there was
/// nothing to rank, plus a human-readable justification either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosureRecommendation {
    pub city: Option<City>,
    pub justification: String,
}

/// Scores every city on a weighted blend of normalized profit and profit
/// margin and recommends the lowest scorer. Ties keep the earlier city, so
/// the fixed aggregate order makes the selection deterministic.
pub fn recommend_closure(
    summary: &[CityPerformance],
    scoring: &ScoringConfig,
) -> ClosureRecommendation {
    let Some(first) = summary.first() else {
        return ClosureRecommendation {
            city: None,
            justification: "No city data available for analysis".to_string(),
        };
    };

    let max_profit = normalization_floor(
        summary
            .iter()
            .map(|entry| entry.profit)
            .fold(f64::NEG_INFINITY, f64::max),
    );
    let max_margin = normalization_floor(
        summary
            .iter()
            .map(|entry| entry.profit_margin)
            .fold(f64::NEG_INFINITY, f64::max),
    );

    let mut weakest = first;
    let mut weakest_score = composite_score(first, scoring, max_profit, max_margin);

    for entry in &summary[1..] {
        let score = composite_score(entry, scoring, max_profit, max_margin);
        if score < weakest_score {
            weakest = entry;
            weakest_score = score;
        }
    }

    ClosureRecommendation {
        city: Some(weakest.city),
        justification: justification_for(weakest),
    }
}

fn composite_score(
    entry: &CityPerformance,
    scoring: &ScoringConfig,
    max_profit: f64,
    max_margin: f64,
) -> f64 {
    scoring.profit_weight * (entry.profit / max_profit)
        + scoring.margin_weight * (entry.profit_margin / max_margin)
}

fn justification_for(entry: &CityPerformance) -> String {
    let mut text = String::new();
    let _ = writeln!(
        text,
        "Based on the analysis, {} should be considered for closure due to:",
        entry.city.label()
    );
    let _ = writeln!(text, "- Profit: ₹{:.2}", entry.profit);
    let _ = writeln!(text, "- Profit Margin: {:.2}%", entry.profit_margin);
    let _ = writeln!(text, "- Total Claims: {}", entry.claims);
    let _ = writeln!(text, "- Average Claim Amount: ₹{:.2}", entry.avg_claim);
    let _ = writeln!(text, "- Rejection Rate: {:.2}%", entry.rejection_rate);
    text
}
