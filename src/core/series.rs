use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, seconds_between};
use crate::error::{ChartError, ChartResult};

/// Field written by [`Series::prepare_dates`] and used for all positional math
/// on date-based x axes.
pub const SECONDS_FROM_FIRST: &str = "seconds_from_first";

/// One field value of a data record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Date(DateTime<Utc>),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

/// Opaque data point: named fields in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_number(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, FieldValue::Number(value));
        self
    }

    #[must_use]
    pub fn with_date(mut self, name: impl Into<String>, value: DateTime<Utc>) -> Self {
        self.insert(name, FieldValue::Date(value));
        self
    }

    pub fn with_decimal(self, name: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        let name = name.into();
        let number = decimal_to_f64(value, &name)?;
        Ok(self.with_number(name, number))
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.fields.get(name)? {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Date(_) => None,
        }
    }

    #[must_use]
    pub fn date(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.fields.get(name)? {
            FieldValue::Date(value) => Some(*value),
            FieldValue::Number(_) => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, FieldValue)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

/// Ordered collection of records plotted by one chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    records: Vec<Record>,
}

impl Series {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Numeric value of `field` at `index`, if present.
    #[must_use]
    pub fn value_at(&self, index: usize, field: &str) -> Option<f64> {
        self.records.get(index)?.number(field)
    }

    /// Stable ascending sort by a numeric field.
    ///
    /// Records lacking the field keep their relative order after all others.
    pub fn sort_by_field(&mut self, field: &str) {
        self.records.sort_by_key(|record| {
            OrderedFloat(
                record
                    .number(field)
                    .filter(|value| value.is_finite())
                    .unwrap_or(f64::INFINITY),
            )
        });
    }

    /// Sorts by a date field and writes [`SECONDS_FROM_FIRST`] into every record.
    ///
    /// The original date field is left untouched for label formatting.
    pub fn prepare_dates(&mut self, date_field: &str) -> ChartResult<()> {
        if self
            .records
            .iter()
            .any(|record| record.date(date_field).is_none())
        {
            return Err(ChartError::MissingField(date_field.to_owned()));
        }

        self.records
            .sort_by_key(|record| record.date(date_field).unwrap_or_default());

        let Some(origin) = self.records.first().and_then(|r| r.date(date_field)) else {
            return Ok(());
        };
        for record in &mut self.records {
            if let Some(time) = record.date(date_field) {
                record.insert(
                    SECONDS_FROM_FIRST,
                    FieldValue::Number(seconds_between(origin, time)),
                );
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn min_value(&self, field: &str) -> Option<f64> {
        self.finite_values(field).map(OrderedFloat).min().map(|v| v.0)
    }

    #[must_use]
    pub fn max_value(&self, field: &str) -> Option<f64> {
        self.finite_values(field).map(OrderedFloat).max().map(|v| v.0)
    }

    /// Maximum across several numeric fields.
    #[must_use]
    pub fn max_value_across<S: AsRef<str>>(&self, fields: &[S]) -> Option<f64> {
        fields
            .iter()
            .filter_map(|field| self.max_value(field.as_ref()))
            .map(OrderedFloat)
            .max()
            .map(|v| v.0)
    }

    /// First and last dates of an already sorted date field.
    #[must_use]
    pub fn date_extent(&self, date_field: &str) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.records.first()?.date(date_field)?;
        let last = self.records.last()?.date(date_field)?;
        Some((first, last))
    }

    fn finite_values<'a>(&'a self, field: &'a str) -> impl Iterator<Item = f64> + 'a {
        self.records
            .iter()
            .filter_map(move |record| record.number(field))
            .filter(|value| value.is_finite())
    }
}

impl From<Vec<Record>> for Series {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
