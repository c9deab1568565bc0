use super::aggregate::CityPerformance;
use super::closure::ClosureRecommendation;
use crate::pipeline::domain::City;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CityPerformanceEntry {
    pub city: City,
    pub city_label: &'static str,
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

impl CityPerformanceEntry {
    pub(crate) fn from_performance(performance: &CityPerformance) -> Self {
        Self {
            city: performance.city,
            city_label: performance.city.label(),
            claims: performance.claims,
            total_claim_amount: performance.total_claim_amount,
            total_premium: performance.total_premium,
            total_paid: performance.total_paid,
            rejection_count: performance.rejection_count,
            profit: performance.profit,
            profit_margin: performance.profit_margin,
            rejection_rate: performance.rejection_rate,
            avg_claim: performance.avg_claim,
            avg_premium: performance.avg_premium,
        }
    }
}

/// Serialization-ready shape of one analysis run, for presentation
/// collaborators that render or export the result.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReportView {
    pub cities: Vec<CityPerformanceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_city: Option<&'static str>,
    pub justification: String,
}

impl AnalysisReportView {
    pub(crate) fn build(
        summary: &[CityPerformance],
        recommendation: &ClosureRecommendation,
    ) -> Self {
        Self {
            cities: summary
                .iter()
                .map(CityPerformanceEntry::from_performance)
                .collect(),
            recommended_city: recommendation.city.map(City::label),
            justification: recommendation.justification.clone(),
        }
    }
}
