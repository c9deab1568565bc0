pub mod domain;
mod ingest;
mod rejection;
pub mod report;

use crate::config::{AnalysisConfig, ScoringConfig};
use domain::{ClaimRecord, RejectionClass};
use report::views::AnalysisReportView;
use report::{CityPerformance, ClosureRecommendation};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

pub use ingest::{ClaimsImporter, IngestError};
pub use rejection::RejectionClassifier;

/// Runs the full pipeline: ingest, remark classification, per-city
/// aggregation, closure recommendation.
pub struct ClaimsAnalysis {
    classifier: RejectionClassifier,
    scoring: ScoringConfig,
}

/// The assembled result of one run. A degraded run carries empty records and
/// summary, the no-data recommendation, and the failure kind in `condition`.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub records: Vec<ClaimRecord>,
    pub city_summary: Vec<CityPerformance>,
    pub recommendation: ClosureRecommendation,
    pub condition: Option<IngestError>,
}

impl AnalysisOutcome {
    pub fn is_degraded(&self) -> bool {
        self.condition.is_some()
    }

    pub fn report(&self) -> AnalysisReportView {
        AnalysisReportView::build(&self.city_summary, &self.recommendation)
    }
}

impl ClaimsAnalysis {
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            classifier: RejectionClassifier::new(config.classifier),
            scoring: config.scoring,
        }
    }

    pub fn run_path<P: AsRef<Path>>(&self, path: P) -> AnalysisOutcome {
        match ClaimsImporter::from_path(path) {
            Ok(records) => self.run_records(records),
            Err(condition) => self.degraded(condition),
        }
    }

    pub fn run_reader<R: Read>(&self, reader: R) -> AnalysisOutcome {
        match ClaimsImporter::from_reader(reader) {
            Ok(records) => self.run_records(records),
            Err(condition) => self.degraded(condition),
        }
    }

    /// Runs the post-ingest stages over records the caller already holds.
    pub fn run_records(&self, mut records: Vec<ClaimRecord>) -> AnalysisOutcome {
        for record in &mut records {
            let class = self.classify_remark(record.rejection_remarks.as_deref());
            record.rejection_class = Some(class);
        }

        let city_summary = report::analyze_city_performance(&records);
        let recommendation = report::recommend_closure(&city_summary, &self.scoring);

        info!(
            records = records.len(),
            cities = city_summary.len(),
            "claims analysis complete"
        );

        AnalysisOutcome {
            records,
            city_summary,
            recommendation,
            condition: None,
        }
    }

    /// An absent remark never reaches the classifier; it is tagged
    /// `NoRemark` directly. Present remarks, including empty-looking ones,
    /// go through the rule table.
    fn classify_remark(&self, remark: Option<&str>) -> RejectionClass {
        match remark {
            Some(text) => self.classifier.classify(text),
            None => RejectionClass::NoRemark,
        }
    }

    fn degraded(&self, condition: IngestError) -> AnalysisOutcome {
        warn!(%condition, "claims analysis degraded to empty result");

        AnalysisOutcome {
            records: Vec::new(),
            city_summary: Vec::new(),
            recommendation: report::recommend_closure(&[], &self.scoring),
            condition: Some(condition),
        }
    }
}

impl Default for ClaimsAnalysis {
    fn default() -> Self {
        Self::new()
    }
}
