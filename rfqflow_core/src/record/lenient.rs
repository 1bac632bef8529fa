//! Field decoders for backend payloads.
//!
//! The backend is inconsistent about types: decimals arrive as strings,
//! references sometimes as numbers, blanks as `""`. None of that should fail a
//! record; a value we can't make sense of is simply treated as absent.

use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::rfq::SigningStatus;

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
    #[allow(dead_code)]
    Other(serde::de::IgnoredAny),
}

fn loose<'de, D>(deserializer: D) -> Result<Option<Loose>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Loose>::deserialize(deserializer)
}

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match loose(deserializer)? {
        Some(Loose::Text(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(Loose::Int(n)) => Some(n.to_string()),
        Some(Loose::Float(f)) if f.is_finite() => Some(f.to_string()),
        Some(_) => {
            debug!("ignoring non-text value in text field");
            None
        }
        None => None,
    })
}

pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match loose(deserializer)? {
        Some(Loose::Int(n)) => Some(n),
        Some(Loose::Float(f)) => {
            // 2^63 itself is out of range; anything below converts exactly
            let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
            if f.is_finite() && f.fract() == 0.0 && in_range {
                Some(f as i64)
            } else {
                debug!(value = f, "ignoring identifier outside the integer range");
                None
            }
        }
        Some(Loose::Text(s)) => {
            let parsed = s.trim().parse::<i64>().ok();
            if parsed.is_none() {
                debug!(value = %s, "ignoring non-numeric identifier");
            }
            parsed
        }
        _ => None,
    })
}

pub fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match loose(deserializer)? {
        Some(Loose::Int(n)) => Some(n as f64),
        Some(Loose::Float(f)) => f.is_finite().then_some(f),
        Some(Loose::Text(s)) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ',')
                .collect();
            let parsed = cleaned.parse::<f64>().ok().filter(|f| f.is_finite());
            if parsed.is_none() {
                debug!(value = %s, "ignoring non-numeric amount");
            }
            parsed
        }
        _ => None,
    })
}

pub fn signing_status<'de, D>(deserializer: D) -> Result<Option<SigningStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match loose(deserializer)? {
        Some(Loose::Text(s)) => match s.trim() {
            "" => None,
            "PENDING" => Some(SigningStatus::Pending),
            "COMPLETED" => Some(SigningStatus::Completed),
            _ => Some(SigningStatus::Other),
        },
        _ => None,
    })
}
