use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One data row zipped against the header, before normalization. Every
/// declared column is present; absent and empty fields are `None`.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub(crate) struct RawClaimRow {
    #[serde(
        rename = "CLAIM_ID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) claim_id: Option<String>,
    #[serde(
        rename = "CLAIM_DATE",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) claim_date: Option<String>,
    #[serde(
        rename = "CUSTOMER_ID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) customer_id: Option<String>,
    #[serde(
        rename = "CLAIM_AMOUNT",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) claim_amount: Option<String>,
    #[serde(
        rename = "PREMIUM_COLLECTED",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) premium_collected: Option<String>,
    #[serde(
        rename = "PAID_AMOUNT",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) paid_amount: Option<String>,
    #[serde(rename = "CITY", default, deserialize_with = "empty_string_as_none")]
    pub(crate) city: Option<String>,
    #[serde(
        rename = "REJECTION_REMARKS",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) rejection_remarks: Option<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RawClaimRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let mut record = record?;

        // A whitespace-only line trims down to a single empty field; skip it
        // the same way a blank line is skipped.
        if record.len() <= 1 && record.iter().all(|field| field.is_empty()) {
            continue;
        }

        // Zip against the header row: short rows pad their missing trailing
        // columns, columns without a header are dropped.
        while record.len() < headers.len() {
            record.push_field("");
        }
        record.truncate(headers.len());

        rows.push(record.deserialize(Some(&headers))?);
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
