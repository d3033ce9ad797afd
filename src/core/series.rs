use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One named, colored sequence of samples plotted against the index axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub color: Color,
    values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color,
            values,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(index) = self.values.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` has non-finite value at index {index}",
                self.name
            )));
        }
        self.color.validate()
    }
}

/// Series rendered together in one pass; insertion order is draw and legend order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    series: Vec<Series>,
}

impl SeriesSet {
    #[must_use]
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for series in &self.series {
            series.validate()?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SeriesSet {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}
