use claims_insight::pipeline::domain::{City, Identifier, RejectionClass};
use claims_insight::{ClaimsAnalysis, IngestError};

const FULL_HEADER: &str =
    "CLAIM_ID,CLAIM_DATE,CUSTOMER_ID,CLAIM_AMOUNT,PREMIUM_COLLECTED,PAID_AMOUNT,CITY,REJECTION_REMARKS";

fn sample_export() -> String {
    format!(
        "{FULL_HEADER}\n\
CLM001,2024-01-15,CUST001,1000,500,250,Pune,\n\
CLM002,2024-02-20,CUST002,2000,800,0,Kolkata,Policy_expired\n\
X99,2024-13-01,CUST003,abc,600,600,kolkata,\n\
CLM004,2024-03-05,,1500,700,0,RANCHI,customer withdrew the claim\n\
CLM005,2024-03-09,CUST005,1200,400,0,Mumbai,rejected for fake_document and not_covered\n"
    )
}

#[test]
fn pipeline_normalizes_and_annotates_every_row() {
    let outcome = ClaimsAnalysis::new().run_reader(sample_export().as_bytes());

    assert!(!outcome.is_degraded());
    assert_eq!(outcome.records.len(), 5);

    let first = &outcome.records[0];
    assert_eq!(first.claim_id, Identifier::Valid("CLM001".to_string()));
    assert_eq!(first.city, City::Pune);
    assert_eq!(first.rejection_class, Some(RejectionClass::NoRemark));

    let malformed = &outcome.records[2];
    assert_eq!(malformed.claim_id_value(), "INVALID_X99");
    assert_eq!(malformed.claim_date, None);
    assert_eq!(malformed.claim_amount, 0.0);
    assert_eq!(malformed.city, City::Kolkata);

    let unmatched = &outcome.records[3];
    assert_eq!(unmatched.customer_id_value(), "MISSING_CUSTOMER_ID");
    assert_eq!(unmatched.rejection_class, Some(RejectionClass::Unknown));

    let multi_token = &outcome.records[4];
    assert_eq!(multi_token.city, City::Unknown);
    assert_eq!(
        multi_token.rejection_class,
        Some(RejectionClass::FakeDocument),
        "first rule in the table wins over later matches"
    );
}

#[test]
fn pipeline_aggregates_cities_in_fixed_order() {
    let outcome = ClaimsAnalysis::new().run_reader(sample_export().as_bytes());

    let cities: Vec<City> = outcome
        .city_summary
        .iter()
        .map(|entry| entry.city)
        .collect();
    assert_eq!(cities, vec![City::Pune, City::Kolkata, City::Ranchi]);

    let kolkata = &outcome.city_summary[1];
    assert_eq!(kolkata.claims, 2);
    assert_eq!(kolkata.total_premium, 1400.0);
    assert_eq!(kolkata.total_paid, 600.0);
    assert_eq!(kolkata.profit, 800.0);
    assert_eq!(kolkata.rejection_count, 1);

    let ranchi = &outcome.city_summary[2];
    assert_eq!(ranchi.rejection_count, 1);
    assert_eq!(ranchi.rejection_rate, 100.0);
}

#[test]
fn pipeline_recommends_the_weakest_city() {
    let outcome = ClaimsAnalysis::new().run_reader(sample_export().as_bytes());

    // Pune has both the lowest profit (250) and the lowest margin (50%).
    assert_eq!(outcome.recommendation.city, Some(City::Pune));
    let justification = &outcome.recommendation.justification;
    assert!(justification.starts_with("Based on the analysis, PUNE should be considered"));
    assert!(justification.contains("- Profit: ₹250.00"));
    assert!(justification.contains("- Profit Margin: 50.00%"));
    assert!(justification.contains("- Total Claims: 1"));
    assert!(justification.contains("- Rejection Rate: 0.00%"));
}

#[test]
fn identical_cities_resolve_to_the_earlier_one() {
    let csv = format!(
        "{FULL_HEADER}\n\
CLM010,2024-04-01,CUST010,900,300,100,Kolkata,\n\
CLM011,2024-04-02,CUST011,900,300,100,Pune,\n"
    );

    let outcome = ClaimsAnalysis::new().run_reader(csv.as_bytes());
    assert_eq!(outcome.recommendation.city, Some(City::Pune));
}

#[test]
fn unknown_only_data_yields_no_recommendation() {
    let csv = format!(
        "{FULL_HEADER}\n\
CLM020,2024-05-01,CUST020,100,50,25,Mumbai,\n\
CLM021,2024-05-02,CUST021,100,50,25,Delhi,\n"
    );

    let outcome = ClaimsAnalysis::new().run_reader(csv.as_bytes());
    assert!(!outcome.is_degraded());
    assert_eq!(outcome.records.len(), 2);
    assert!(outcome.city_summary.is_empty());
    assert_eq!(outcome.recommendation.city, None);
    assert_eq!(
        outcome.recommendation.justification,
        "No city data available for analysis"
    );
}

#[test]
fn missing_file_degrades_with_file_access_condition() {
    let outcome = ClaimsAnalysis::new().run_path("./no-such-claims.csv");

    assert!(matches!(outcome.condition, Some(IngestError::FileAccess(_))));
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.recommendation.city, None);
    assert!(!outcome.recommendation.justification.is_empty());
}

#[test]
fn empty_source_degrades_with_empty_input_condition() {
    let outcome = ClaimsAnalysis::new().run_reader("".as_bytes());
    assert!(matches!(outcome.condition, Some(IngestError::EmptyInput)));

    let header_only = format!("{FULL_HEADER}\n");
    let outcome = ClaimsAnalysis::new().run_reader(header_only.as_bytes());
    assert!(matches!(outcome.condition, Some(IngestError::EmptyInput)));
}

#[test]
fn report_view_serializes_for_presentation() {
    let outcome = ClaimsAnalysis::new().run_reader(sample_export().as_bytes());
    let view = outcome.report();

    let json = serde_json::to_value(&view).expect("view serializes");
    let cities = json["cities"].as_array().expect("cities array");
    assert_eq!(cities.len(), 3);
    assert_eq!(cities[0]["city_label"], "PUNE");
    assert_eq!(cities[1]["claims"], 2);
    assert_eq!(json["recommended_city"], "PUNE");
    assert!(json["justification"]
        .as_str()
        .expect("justification text")
        .contains("closure"));
}

#[test]
fn degraded_report_view_omits_the_recommended_city() {
    let outcome = ClaimsAnalysis::new().run_reader("".as_bytes());
    let json = serde_json::to_value(outcome.report()).expect("view serializes");

    assert!(json["cities"].as_array().expect("cities array").is_empty());
    assert!(json.get("recommended_city").is_none());
    assert_eq!(json["justification"], "No city data available for analysis");
}
