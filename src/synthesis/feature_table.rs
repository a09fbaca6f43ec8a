use color_eyre::eyre::{eyre, Result};

use crate::{float,Float};

#[derive(Debug,Clone,PartialEq)]
pub struct FeatureColumn {
    pub name: String,
    pub samples: Vec<Float>
}

/// Named sample columns in insertion order. The order is the stacking order of the ridges.
/// All columns hold the same number of samples.
#[derive(Debug,Clone,PartialEq,Default)]
pub struct FeatureTable {
    columns: Vec<FeatureColumn>
}

impl FeatureTable {

    pub fn new() -> FeatureTable {
        FeatureTable { columns: Vec::new() }
    }

    pub fn with_capacity(column_count: usize) -> FeatureTable {
        FeatureTable { columns: Vec::with_capacity(column_count) }
    }

    pub fn push_column(&mut self, name: &str, samples: Vec<Float>) -> Result<()> {
        if self.column(name).is_some() {
            return Err(eyre!("duplicate column name {}", name));
        }
        if let Some(first) = self.columns.first() {
            if first.samples.len() != samples.len() {
                return Err(eyre!("column {} has {} samples, expected {}", name, samples.len(), first.samples.len()));
            }
        }
        self.columns.push(FeatureColumn { name: name.to_string(), samples });
        Ok(())
    }

    pub fn columns(&self) -> &Vec<FeatureColumn> {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&FeatureColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        match self.columns.first() {
            Some(c) => c.samples.len(),
            None => 0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Global (min, max) over every sample. None for a table without samples.
    pub fn value_range(&self) -> Option<(Float,Float)> {
        if self.is_empty() {
            return None;
        }

        let mut min = float::MAX;
        let mut max = float::MIN;
        for column in &self.columns {
            for &v in &column.samples {
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
            }
        }
        Some((min,max))
    }
}
