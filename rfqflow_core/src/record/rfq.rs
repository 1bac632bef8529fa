use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;
use crate::error::RecordError;

/// State of the e-signature envelope sent to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SigningStatus {
    Pending,
    Completed,
    /// Any other status string the signing provider reported.
    Other,
}

/// An RFQ as the backend returns it.
///
/// Every field is optional. Blank strings, `null` and values of the wrong
/// shape all decode to `None`, so presence here means "holds a usable value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRecord {
    #[serde(default, deserialize_with = "lenient::integer", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub request_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub assigned_quoter: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub quote_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub quote_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub quote_pdf_path: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub quote_pdf_upload_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::signing_status", skip_serializing_if = "Option::is_none")]
    pub docusign_status: Option<SigningStatus>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub signed_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::integer", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub job_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub job_created_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::amount", skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
}

/// Names a field of [`WorkflowRecord`] so milestone definitions can refer to
/// it as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    RequestDate,
    AssignedQuoter,
    QuoteNumber,
    QuoteDate,
    QuotePdfPath,
    QuotePdfUploadDate,
    DocusignStatus,
    SignedDate,
    OrderNumber,
    OrderDate,
    JobId,
    JobNumber,
    JobCreatedDate,
    InvoiceNumber,
    InvoiceDate,
    AmountPaid,
    PaymentDate,
}

impl WorkflowRecord {
    pub fn new(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        if !value.is_object() {
            return Err(RecordError::Shape(kind_of(&value).to_string()));
        }

        serde_json::from_value(value)
            .map_err(|e| RecordError::Parsing(format!("Failed to decode record: {}", e)))
    }

    pub fn from_json_str(json: &str) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| RecordError::Parsing(format!("Failed to parse record JSON: {}", e)))?;

        Self::from_value(value)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, RecordError> {
        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| RecordError::Parsing(format!("Failed to parse record YAML: {}", e)))?;

        Self::from_value(value)
    }

    pub fn is_present(&self, field: Field) -> bool {
        match field {
            Field::Id => self.id.is_some(),
            Field::JobId => self.job_id.is_some(),
            Field::AmountPaid => self.amount_paid.is_some(),
            Field::DocusignStatus => self.docusign_status.is_some(),
            _ => self.text(field).is_some(),
        }
    }

    /// Text-valued fields. Numeric and status fields return `None`; use the
    /// typed accessors for those.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::RequestDate => &self.request_date,
            Field::AssignedQuoter => &self.assigned_quoter,
            Field::QuoteNumber => &self.quote_number,
            Field::QuoteDate => &self.quote_date,
            Field::QuotePdfPath => &self.quote_pdf_path,
            Field::QuotePdfUploadDate => &self.quote_pdf_upload_date,
            Field::SignedDate => &self.signed_date,
            Field::OrderNumber => &self.order_number,
            Field::OrderDate => &self.order_date,
            Field::JobNumber => &self.job_number,
            Field::JobCreatedDate => &self.job_created_date,
            Field::InvoiceNumber => &self.invoice_number,
            Field::InvoiceDate => &self.invoice_date,
            Field::PaymentDate => &self.payment_date,
            Field::Id | Field::JobId | Field::AmountPaid | Field::DocusignStatus => return None,
        };
        value.as_deref()
    }

    pub fn integer(&self, field: Field) -> Option<i64> {
        match field {
            Field::Id => self.id,
            Field::JobId => self.job_id,
            _ => None,
        }
    }

    pub fn amount(&self, field: Field) -> Option<f64> {
        match field {
            Field::AmountPaid => self.amount_paid,
            _ => None,
        }
    }

    /// Short label for logs and headings, e.g. `RFQ #42`.
    pub fn display_name(&self) -> String {
        match self.id {
            Some(id) => format!("RFQ #{}", id),
            None => "RFQ (no id)".to_string(),
        }
    }
}

/// Decodes either a single record object or an array of them.
pub fn records_from_value(value: Value) -> Result<Vec<WorkflowRecord>, RecordError> {
    match value {
        Value::Array(items) => items.into_iter().map(WorkflowRecord::from_value).collect(),
        Value::Object(_) => Ok(vec![WorkflowRecord::from_value(value)?]),
        other => Err(RecordError::Shape(kind_of(&other).to_string())),
    }
}

pub fn records_from_json_str(json: &str) -> Result<Vec<WorkflowRecord>, RecordError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| RecordError::Parsing(format!("Failed to parse records JSON: {}", e)))?;

    records_from_value(value)
}

pub fn records_from_yaml_str(yaml: &str) -> Result<Vec<WorkflowRecord>, RecordError> {
    let value: Value = serde_yaml::from_str(yaml)
        .map_err(|e| RecordError::Parsing(format!("Failed to parse records YAML: {}", e)))?;

    records_from_value(value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
