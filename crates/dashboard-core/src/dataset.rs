// File: crates/dashboard-core/src/dataset.rs
// Summary: The two monthly consumption series and their validated container.
// Notes:
// - Series are immutable once a `Dataset` is built; renderers only borrow them.
// - A zero maximum is valid here; each renderer owns its zero-height fallback.

use std::fmt;
use std::str::FromStr;

use crate::error::{DatasetError, UnknownTag};
use crate::i18n::PERIODS;

/// Identity of a series. The tag form (`cityA`/`cityB`) is what the selector submits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CityId {
    #[default]
    CityA,
    CityB,
}

impl CityId {
    pub const ALL: [CityId; 2] = [CityId::CityA, CityId::CityB];

    pub const fn tag(self) -> &'static str {
        match self {
            CityId::CityA => "cityA",
            CityId::CityB => "cityB",
        }
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CityId {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cityA" => Ok(CityId::CityA),
            "cityB" => Ok(CityId::CityB),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub id: CityId,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(id: CityId, values: Vec<f64>) -> Self {
        Self { id, values }
    }

    /// Largest observation, or 0.0 for an empty series.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Arithmetic mean rounded half up; `None` for an empty series.
    pub fn rounded_mean(&self) -> Option<i64> {
        if self.values.is_empty() {
            return None;
        }
        let sum: f64 = self.values.iter().sum();
        Some(round_half_up(sum / self.values.len() as f64))
    }

    fn validate(&self) -> Result<(), DatasetError> {
        if self.values.is_empty() {
            return Err(DatasetError::Empty(self.id));
        }
        if self.values.len() != PERIODS {
            return Err(DatasetError::LengthMismatch {
                city: self.id,
                expected: PERIODS,
                actual: self.values.len(),
            });
        }
        for (index, &value) in self.values.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(DatasetError::InvalidValue { city: self.id, index, value });
            }
        }
        Ok(())
    }
}

/// Both city series, validated against the period labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    city_a: Series,
    city_b: Series,
}

impl Dataset {
    pub fn try_new(city_a: Vec<f64>, city_b: Vec<f64>) -> Result<Self, DatasetError> {
        let city_a = Series::new(CityId::CityA, city_a);
        let city_b = Series::new(CityId::CityB, city_b);
        city_a.validate()?;
        city_b.validate()?;
        tracing::debug!(periods = PERIODS, "dataset validated");
        Ok(Self { city_a, city_b })
    }

    /// Monthly coffee consumption (cups per person), January to June.
    pub fn coffee() -> Self {
        Self {
            city_a: Series::new(CityId::CityA, vec![120.0, 135.0, 145.0, 160.0, 155.0, 170.0]),
            city_b: Series::new(CityId::CityB, vec![100.0, 115.0, 125.0, 140.0, 135.0, 150.0]),
        }
    }

    pub fn series(&self, city: CityId) -> &Series {
        match city {
            CityId::CityA => &self.city_a,
            CityId::CityB => &self.city_b,
        }
    }

    /// Number of periods (identical for both series).
    pub fn len(&self) -> usize { self.city_a.values.len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Maximum across both series; the bar chart's scale.
    pub fn combined_max(&self) -> f64 {
        self.city_a.max_value().max(self.city_b.max_value())
    }
}

impl Default for Dataset {
    fn default() -> Self { Self::coffee() }
}

/// Round to the nearest integer, halves toward positive infinity.
#[inline]
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}
