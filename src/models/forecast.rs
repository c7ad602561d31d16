//! Per-segment multi-day wind forecast
//!
//! The forecast arrives as a JSON object keyed by day label. Key order matters
//! (the first key is the default day), so the days are kept in a `Vec` and the
//! serde impls below walk the object in document order.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::WindSample;

/// Wind samples for one labelled forecast day
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    /// Day label as supplied upstream (usually an ISO date)
    pub label: String,
    /// Samples in forecast order; `None` marks a null entry
    pub samples: Vec<Option<WindSample>>,
}

impl ForecastDay {
    /// Representative sample for the day: the first entry, if it holds data
    #[must_use]
    pub fn representative(&self) -> Option<&WindSample> {
        self.samples.first().and_then(Option::as_ref)
    }
}

/// Today / Tomorrow / weekday name for an ISO-date label, other labels verbatim
#[must_use]
pub fn day_display_name(label: &str, today: NaiveDate) -> String {
    let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") else {
        return label.to_string();
    };

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%A, %B %d").to_string(),
    }
}

/// Ordered mapping from day label to that day's wind samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    days: Vec<ForecastDay>,
}

impl Forecast {
    /// Create an empty forecast
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a day, replacing an existing day with the same label in place
    pub fn insert(&mut self, label: impl Into<String>, samples: Vec<Option<WindSample>>) {
        let label = label.into();
        match self.days.iter_mut().find(|day| day.label == label) {
            Some(day) => day.samples = samples,
            None => self.days.push(ForecastDay { label, samples }),
        }
    }

    /// Builder-style variant of [`Forecast::insert`] for a single known sample
    #[must_use]
    pub fn with_day(mut self, label: impl Into<String>, sample: WindSample) -> Self {
        self.insert(label, vec![Some(sample)]);
        self
    }

    /// Look up a day by label
    #[must_use]
    pub fn day(&self, label: &str) -> Option<&ForecastDay> {
        self.days.iter().find(|day| day.label == label)
    }

    /// First wind sample of the given day, if the day exists and has data
    #[must_use]
    pub fn first_sample(&self, label: &str) -> Option<&WindSample> {
        self.day(label).and_then(ForecastDay::representative)
    }

    /// Days in input order
    pub fn days(&self) -> impl Iterator<Item = &ForecastDay> {
        self.days.iter()
    }

    /// Day labels in input order
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.days.iter().map(|day| day.label.as_str()).collect()
    }

    /// Label of the first day
    #[must_use]
    pub fn first_day(&self) -> Option<&str> {
        self.days.first().map(|day| day.label.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }
}

impl Serialize for Forecast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.label, &day.samples)?;
        }
        map.end()
    }
}

struct ForecastVisitor;

impl<'de> Visitor<'de> for ForecastVisitor {
    type Value = Forecast;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping day labels to arrays of wind samples")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut forecast = Forecast::new();
        while let Some((label, samples)) = access.next_entry::<String, Vec<Option<WindSample>>>()? {
            forecast.insert(label, samples);
        }
        Ok(forecast)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Forecast::new())
    }
}

impl<'de> Deserialize<'de> for Forecast {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ForecastVisitor)
    }
}
