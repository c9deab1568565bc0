use super::parser::RawClaimRow;
use crate::pipeline::domain::{City, ClaimDate, ClaimRecord, Identifier, IdentifierKind};

pub(crate) fn normalize_row(row: RawClaimRow) -> ClaimRecord {
    ClaimRecord {
        claim_id: Identifier::normalize(row.claim_id.as_deref(), IdentifierKind::Claim),
        claim_date: row.claim_date.as_deref().and_then(ClaimDate::parse),
        customer_id: Identifier::normalize(row.customer_id.as_deref(), IdentifierKind::Customer),
        claim_amount: parse_amount(row.claim_amount.as_deref()),
        premium_collected: parse_amount(row.premium_collected.as_deref()),
        paid_amount: parse_amount(row.paid_amount.as_deref()),
        city: City::from_raw(row.city.as_deref()),
        rejection_remarks: row.rejection_remarks,
        rejection_class: None,
    }
}

/// Lossy monetary parse: absent or unparseable values collapse to 0.0.
pub(crate) fn parse_amount(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(0.0)
}
