use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::columns::{
    CategoryColumn, ColumnExtractor, ColumnRole, ColumnSource, MeasureColumn,
};
use crate::error::{ChartError, ChartResult};

/// One raw table cell as delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Null,
}

impl CellValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_label(&self) -> Option<String> {
        match self {
            Self::Number(value) => Some(value.to_string()),
            Self::Text(text) => Some(text.clone()),
            Self::Null => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// One named dataset column and the roles it is bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetColumn {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<ColumnRole>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub values: Vec<CellValue>,
    #[serde(default)]
    pub highlights: Option<Vec<Option<f64>>>,
}

impl DatasetColumn {
    #[must_use]
    pub fn new(role: ColumnRole, values: Vec<CellValue>) -> Self {
        Self {
            display_name: None,
            roles: vec![role],
            format: None,
            values,
            highlights: None,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: ColumnRole) -> Self {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_highlights(mut self, highlights: Vec<Option<f64>>) -> Self {
        self.highlights = Some(highlights);
        self
    }
}

/// Categorical table keyed by column query name.
///
/// `IndexMap` keeps column order stable so role lookups pick the first
/// bound column deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoricalDataset {
    #[serde(default)]
    pub columns: IndexMap<String, DatasetColumn>,
}

impl CategoricalDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_column(mut self, query_name: impl Into<String>, column: DatasetColumn) -> Self {
        self.columns.insert(query_name.into(), column);
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset json: {e}")))
    }

    fn bound_column(&self, role: ColumnRole) -> Option<(&str, &DatasetColumn)> {
        self.columns
            .iter()
            .find(|(_, column)| column.roles.contains(&role))
            .map(|(query_name, column)| (query_name.as_str(), column))
    }
}

fn column_source(query_name: &str, column: &DatasetColumn) -> ColumnSource {
    ColumnSource {
        display_name: column
            .display_name
            .clone()
            .unwrap_or_else(|| query_name.to_owned()),
        query_name: query_name.to_owned(),
        format: column.format.clone(),
    }
}

impl ColumnExtractor for CategoricalDataset {
    fn category_column(&self) -> Option<CategoryColumn> {
        let (query_name, column) = self.bound_column(ColumnRole::Category)?;
        Some(CategoryColumn::new(
            column_source(query_name, column),
            column.values.iter().map(CellValue::as_label).collect(),
        ))
    }

    fn measure_column(&self, role: ColumnRole) -> Option<MeasureColumn> {
        if role == ColumnRole::Category {
            return None;
        }
        let (query_name, column) = self.bound_column(role)?;
        Some(MeasureColumn {
            source: column_source(query_name, column),
            values: column.values.iter().map(CellValue::as_number).collect(),
            highlights: column.highlights.clone(),
        })
    }
}
