// src/domain/de.rs
//
// The API isn't strict about scalar types: booleans come back as 0/1 and
// decimals as strings. These accept either.
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Flexible {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

fn to_f64(v: Flexible) -> Option<f64> {
    match v {
        Flexible::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
        Flexible::Int(n) => Some(n as f64),
        Flexible::Float(f) => Some(f),
        Flexible::Text(s) => s.trim().parse().ok(),
    }
}

pub fn lenient_bool<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Flexible>::deserialize(d)?;
    Ok(match v {
        Some(Flexible::Bool(b)) => b,
        Some(Flexible::Int(n)) => n != 0,
        Some(Flexible::Float(f)) => f != 0.0,
        Some(Flexible::Text(s)) => matches!(s.trim(), "1" | "true" | "yes"),
        None => false,
    })
}

pub fn lenient_f64<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(d)?.unwrap_or(0.0))
}

pub fn lenient_opt_f64<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Flexible>::deserialize(d)?;
    Ok(v.and_then(to_f64))
}

pub fn lenient_opt_i64<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(d)?.map(|f| f as i64))
}

pub fn lenient_i64<'de, D>(d: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_i64(d)?.unwrap_or(0))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringList {
    List(Vec<String>),
    Encoded(String),
}

/// Image lists arrive either as a JSON array or as a string holding one.
/// Anything else reads as empty.
pub fn json_string_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<StringList>::deserialize(d)?;
    Ok(match v {
        Some(StringList::List(items)) => items,
        Some(StringList::Encoded(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
        None => Vec::new(),
    })
}
