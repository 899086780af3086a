use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Data role a dataset column can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnRole {
    Category,
    Value,
    TargetValue,
    TargetValue2,
    Minimum,
    NeedsImprovement,
    Satisfactory,
    Good,
    VeryGood,
    Maximum,
}

impl ColumnRole {
    pub const ALL: [Self; 10] = [
        Self::Category,
        Self::Value,
        Self::TargetValue,
        Self::TargetValue2,
        Self::Minimum,
        Self::NeedsImprovement,
        Self::Satisfactory,
        Self::Good,
        Self::VeryGood,
        Self::Maximum,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Value => "Value",
            Self::TargetValue => "TargetValue",
            Self::TargetValue2 => "TargetValue2",
            Self::Minimum => "Minimum",
            Self::NeedsImprovement => "NeedsImprovement",
            Self::Satisfactory => "Satisfactory",
            Self::Good => "Good",
            Self::VeryGood => "VeryGood",
            Self::Maximum => "Maximum",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnRole {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.name() == value)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown column role `{value}`")))
    }
}

/// Metadata of the dataset column a role is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSource {
    pub display_name: String,
    pub query_name: String,
    pub format: Option<String>,
}

impl ColumnSource {
    #[must_use]
    pub fn new(display_name: impl Into<String>, query_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            query_name: query_name.into(),
            format: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Numeric column aligned by row index.
///
/// Cells that are missing or non-finite read as "not present".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureColumn {
    pub source: ColumnSource,
    pub values: Vec<Option<f64>>,
    pub highlights: Option<Vec<Option<f64>>>,
}

impl MeasureColumn {
    #[must_use]
    pub fn new(source: ColumnSource, values: Vec<Option<f64>>) -> Self {
        Self {
            source,
            values,
            highlights: None,
        }
    }

    #[must_use]
    pub fn with_highlights(mut self, highlights: Vec<Option<f64>>) -> Self {
        self.highlights = Some(highlights);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        finite_cell(&self.values, index)
    }

    #[must_use]
    pub fn highlight(&self, index: usize) -> Option<f64> {
        self.highlights
            .as_deref()
            .and_then(|highlights| finite_cell(highlights, index))
    }

    /// True when the host supplied a non-empty highlighted variant.
    #[must_use]
    pub fn has_highlights(&self) -> bool {
        self.highlights
            .as_ref()
            .is_some_and(|highlights| !highlights.is_empty())
    }

    /// True when every value row has a present highlighted cell.
    #[must_use]
    pub fn all_highlights_defined(&self) -> bool {
        self.highlights.as_ref().is_some_and(|highlights| {
            !highlights.is_empty()
                && highlights.len() >= self.values.len()
                && highlights
                    .iter()
                    .all(|cell| cell.is_some_and(f64::is_finite))
        })
    }
}

fn finite_cell(cells: &[Option<f64>], index: usize) -> Option<f64> {
    cells
        .get(index)
        .copied()
        .flatten()
        .filter(|value| value.is_finite())
}

/// Category label column aligned by row index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryColumn {
    pub source: ColumnSource,
    pub values: Vec<Option<String>>,
}

impl CategoryColumn {
    #[must_use]
    pub fn new(source: ColumnSource, values: Vec<Option<String>>) -> Self {
        Self { source, values }
    }

    #[must_use]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|cell| cell.as_deref())
    }
}

/// Every role the bullet chart reads, resolved once per update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulletColumns {
    pub category: Option<CategoryColumn>,
    pub value: Option<MeasureColumn>,
    pub target_value: Option<MeasureColumn>,
    pub target_value2: Option<MeasureColumn>,
    pub minimum: Option<MeasureColumn>,
    pub needs_improvement: Option<MeasureColumn>,
    pub satisfactory: Option<MeasureColumn>,
    pub good: Option<MeasureColumn>,
    pub very_good: Option<MeasureColumn>,
    pub maximum: Option<MeasureColumn>,
}

impl BulletColumns {
    /// Returns the numeric column bound to `role`.
    ///
    /// `ColumnRole::Category` is not numeric and always yields `None`.
    #[must_use]
    pub fn measure(&self, role: ColumnRole) -> Option<&MeasureColumn> {
        match role {
            ColumnRole::Category => None,
            ColumnRole::Value => self.value.as_ref(),
            ColumnRole::TargetValue => self.target_value.as_ref(),
            ColumnRole::TargetValue2 => self.target_value2.as_ref(),
            ColumnRole::Minimum => self.minimum.as_ref(),
            ColumnRole::NeedsImprovement => self.needs_improvement.as_ref(),
            ColumnRole::Satisfactory => self.satisfactory.as_ref(),
            ColumnRole::Good => self.good.as_ref(),
            ColumnRole::VeryGood => self.very_good.as_ref(),
            ColumnRole::Maximum => self.maximum.as_ref(),
        }
    }

    /// Reads one numeric cell of the column bound to `role`.
    #[must_use]
    pub fn measure_value(&self, role: ColumnRole, index: usize) -> Option<f64> {
        self.measure(role).and_then(|column| column.value(index))
    }

    /// Number of category rows, driven by the mandatory Value role.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.value.as_ref().map_or(0, MeasureColumn::len)
    }
}

/// Host collaborator that maps dataset columns to chart roles.
pub trait ColumnExtractor {
    fn category_column(&self) -> Option<CategoryColumn>;

    /// Returns the numeric column bound to `role`, or `None` when unbound.
    fn measure_column(&self, role: ColumnRole) -> Option<MeasureColumn>;

    /// Resolves every role once into an explicit record.
    fn extract(&self) -> BulletColumns {
        BulletColumns {
            category: self.category_column(),
            value: self.measure_column(ColumnRole::Value),
            target_value: self.measure_column(ColumnRole::TargetValue),
            target_value2: self.measure_column(ColumnRole::TargetValue2),
            minimum: self.measure_column(ColumnRole::Minimum),
            needs_improvement: self.measure_column(ColumnRole::NeedsImprovement),
            satisfactory: self.measure_column(ColumnRole::Satisfactory),
            good: self.measure_column(ColumnRole::Good),
            very_good: self.measure_column(ColumnRole::VeryGood),
            maximum: self.measure_column(ColumnRole::Maximum),
        }
    }
}

impl ColumnExtractor for BulletColumns {
    fn category_column(&self) -> Option<CategoryColumn> {
        self.category.clone()
    }

    fn measure_column(&self, role: ColumnRole) -> Option<MeasureColumn> {
        self.measure(role).cloned()
    }

    fn extract(&self) -> BulletColumns {
        self.clone()
    }
}
