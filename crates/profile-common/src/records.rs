//! Adapters from ingested records to render inputs.
//!
//! Survey parsing and the inversion live elsewhere; they hand over flat
//! records with coordinates plus any number of named value columns (`rho`,
//! `log10rho`, `ip_gate_<n>`, ...). These helpers select one column and
//! drop records whose coordinates or chosen value are missing or
//! non-finite.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ProfileError;
use crate::sample::{Sample, Triangle};

const IP_GATE_PREFIX: &str = "ip_gate_";

/// A named value column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueField {
    Rho,
    Log10Rho,
    /// One induced-polarization gate, numbered as in the survey file.
    /// Only canonical column names (`ip_gate_3`, not `ip_gate_03`) parse
    /// to this variant; anything else stays [`ValueField::Named`].
    IpGate(u32),
    Named(String),
}

impl ValueField {
    /// Column name as it appears in the records.
    pub fn column(&self) -> String {
        match self {
            ValueField::Rho => "rho".to_string(),
            ValueField::Log10Rho => "log10rho".to_string(),
            ValueField::IpGate(n) => format!("{}{}", IP_GATE_PREFIX, n),
            ValueField::Named(name) => name.clone(),
        }
    }
}

impl fmt::Display for ValueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.column())
    }
}

impl FromStr for ValueField {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ProfileError::UnknownField(s.to_string()));
        }
        if name == "rho" {
            return Ok(ValueField::Rho);
        }
        if name == "log10rho" {
            return Ok(ValueField::Log10Rho);
        }
        if let Some(gate) = name.strip_prefix(IP_GATE_PREFIX).and_then(canonical_gate) {
            return Ok(ValueField::IpGate(gate));
        }
        Ok(ValueField::Named(name.to_string()))
    }
}

/// Gate number whose decimal form is exactly `digits`.
fn canonical_gate(digits: &str) -> Option<u32> {
    digits
        .parse::<u32>()
        .ok()
        .filter(|n| n.to_string() == digits)
}

/// Access to the value columns of a record.
///
/// Columns keep whatever JSON the ingester wrote; only numbers count as
/// values, so labels, ids and `"NaN"` strings read as missing.
pub trait ValueColumns {
    fn columns(&self) -> &BTreeMap<String, Value>;

    /// Finite value of `field`, if present.
    fn value(&self, field: &ValueField) -> Option<f64> {
        self.columns()
            .get(&field.column())
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
    }
}

/// Coordinate that is `None` unless the record holds a JSON number.
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// A scattered point with its value columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub y: Option<f64>,
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
}

impl ValueColumns for PointRecord {
    fn columns(&self) -> &BTreeMap<String, Value> {
        &self.values
    }
}

impl PointRecord {
    pub fn to_sample(&self, field: &ValueField) -> Option<Sample> {
        let x = self.x.filter(|v| v.is_finite())?;
        let y = self.y.filter(|v| v.is_finite())?;
        Some(Sample::new(x, y, self.value(field)?))
    }
}

/// A mesh cell with its three vertices and value columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleRecord {
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub x1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub y1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub x2: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub y2: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub x3: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub y3: Option<f64>,
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
}

impl ValueColumns for TriangleRecord {
    fn columns(&self) -> &BTreeMap<String, Value> {
        &self.values
    }
}

impl TriangleRecord {
    pub fn to_triangle(&self, field: &ValueField) -> Option<Triangle> {
        let coord = |v: Option<f64>| v.filter(|c| c.is_finite());
        let v1 = (coord(self.x1)?, coord(self.y1)?);
        let v2 = (coord(self.x2)?, coord(self.y2)?);
        let v3 = (coord(self.x3)?, coord(self.y3)?);
        Some(Triangle::new(v1, v2, v3, self.value(field)?))
    }
}

/// Samples for one value column; unusable records are skipped.
pub fn samples_from_records(records: &[PointRecord], field: &ValueField) -> Vec<Sample> {
    records.iter().filter_map(|r| r.to_sample(field)).collect()
}

/// Triangles for one value column; unusable records are skipped.
pub fn triangles_from_records(records: &[TriangleRecord], field: &ValueField) -> Vec<Triangle> {
    records.iter().filter_map(|r| r.to_triangle(field)).collect()
}

/// Columns holding a number in at least one record, in name order.
pub fn available_fields<R: ValueColumns>(records: &[R]) -> Vec<ValueField> {
    let names: BTreeSet<&String> = records
        .iter()
        .flat_map(|r| r.columns().iter())
        .filter(|(_, value)| value.is_number())
        .map(|(name, _)| name)
        .collect();
    names
        .into_iter()
        .filter_map(|name| name.parse().ok())
        .collect()
}
