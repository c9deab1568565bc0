use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Pune,
    Kolkata,
    Ranchi,
    Guwahati,
    Unknown,
}

impl City {
    /// Aggregation iteration order. `Unknown` accumulates last and never
    /// appears in reported summaries.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Pune,
            Self::Kolkata,
            Self::Ranchi,
            Self::Guwahati,
            Self::Unknown,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pune => "PUNE",
            Self::Kolkata => "KOLKATA",
            Self::Ranchi => "RANCHI",
            Self::Guwahati => "GUWAHATI",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Case-insensitive match against the served cities; anything else,
    /// including an absent value, is `Unknown`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(value) = raw else {
            return Self::Unknown;
        };

        Self::ordered()
            .into_iter()
            .filter(|city| !matches!(city, Self::Unknown))
            .find(|city| value.eq_ignore_ascii_case(city.label()))
            .unwrap_or(Self::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    Claim,
    Customer,
}

impl IdentifierKind {
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Claim => "CLM",
            Self::Customer => "CUST",
        }
    }

    pub const fn missing_sentinel(self) -> &'static str {
        match self {
            Self::Claim => "MISSING_CLAIM_ID",
            Self::Customer => "MISSING_CUSTOMER_ID",
        }
    }
}

/// An identifier field after normalization: well-formed values are kept
/// verbatim, malformed values are retained for audit, absent values carry no
/// text of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "value")]
pub enum Identifier {
    Valid(String),
    Invalid(String),
    Missing,
}

impl Identifier {
    /// Prefix matching is case-sensitive.
    pub fn normalize(raw: Option<&str>, kind: IdentifierKind) -> Self {
        match raw {
            Some(value) if value.starts_with(kind.prefix()) => Self::Valid(value.to_string()),
            Some(value) => Self::Invalid(value.to_string()),
            None => Self::Missing,
        }
    }

    /// Canonical rendering: valid values verbatim, invalid values tagged
    /// `INVALID_<original>`, missing values replaced by the field sentinel.
    pub fn canonical(&self, kind: IdentifierKind) -> String {
        match self {
            Self::Valid(value) => value.clone(),
            Self::Invalid(value) => format!("INVALID_{value}"),
            Self::Missing => kind.missing_sentinel().to_string(),
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// A claim date that passed the bounds check. The check is bounds-only, not
/// calendar-aware: February 31 is accepted, so the components are stored as
/// plain integers rather than a `NaiveDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl ClaimDate {
    pub const YEAR_MIN: i32 = 1900;
    pub const YEAR_MAX: i32 = 2030;

    /// Accepts exactly three dash-separated integer components within
    /// bounds; everything else is discarded as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw.split('-').collect();
        if parts.len() != 3 {
            return None;
        }

        let year: i32 = parts[0].trim().parse().ok()?;
        let month: u32 = parts[1].trim().parse().ok()?;
        let day: u32 = parts[2].trim().parse().ok()?;

        if !(Self::YEAR_MIN..=Self::YEAR_MAX).contains(&year)
            || !(1..=12).contains(&month)
            || !(1..=31).contains(&day)
        {
            return None;
        }

        Some(Self { year, month, day })
    }

    /// Lossy conversion for callers that want a real calendar date;
    /// bounds-valid but calendar-invalid dates yield `None`.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for ClaimDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionClass {
    FakeDocument,
    NotCovered,
    PolicyExpired,
    Unknown,
    NoRemark,
    InvalidRemark,
    Error,
}

impl RejectionClass {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FakeDocument => "Fake_document",
            Self::NotCovered => "Not_Covered",
            Self::PolicyExpired => "Policy_expired",
            Self::Unknown => "Unknown",
            Self::NoRemark => "NoRemark",
            Self::InvalidRemark => "Invalid Remark",
            Self::Error => "Error",
        }
    }
}

/// One normalized insurance claim. Immutable after construction except for
/// `rejection_class`, which the classification stage fills in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimRecord {
    pub claim_id: Identifier,
    pub claim_date: Option<ClaimDate>,
    pub customer_id: Identifier,
    pub claim_amount: f64,
    pub premium_collected: f64,
    pub paid_amount: f64,
    pub city: City,
    pub rejection_remarks: Option<String>,
    pub rejection_class: Option<RejectionClass>,
}

impl ClaimRecord {
    pub fn claim_id_value(&self) -> String {
        self.claim_id.canonical(IdentifierKind::Claim)
    }

    pub fn customer_id_value(&self) -> String {
        self.customer_id.canonical(IdentifierKind::Customer)
    }

    pub fn has_rejection_remark(&self) -> bool {
        self.rejection_remarks.is_some()
    }
}
