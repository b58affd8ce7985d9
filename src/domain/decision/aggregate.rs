//! Decision input aggregate - options, categories, and metric types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{Importance, MetricType, RawMetric};
use crate::domain::scoring::extract_value;

/// A candidate choice being evaluated.
///
/// Options are identified by position; names may be empty or duplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub name: String,
}

impl DecisionOption {
    /// Creates a new option.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A weighted decision criterion with one raw metric per option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    /// One raw value per option, index-aligned with the option list.
    pub metrics: Vec<RawMetric>,
    pub importance: Importance,
}

impl Category {
    /// Creates a new category.
    pub fn new(
        title: impl Into<String>,
        metrics: Vec<RawMetric>,
        importance: Importance,
    ) -> Self {
        Self {
            title: title.into(),
            metrics,
            importance,
        }
    }
}

/// The full input to one evaluation: options x categories x metric types,
/// plus the free-text context forwarded to the feedback service.
///
/// Immutable once scoring begins; every evaluation is a pure function of
/// this record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub options: Vec<DecisionOption>,
    pub categories: Vec<Category>,
    /// Index-aligned with `categories`. Missing entries fall back to
    /// `HigherIsBetter`.
    pub metric_types: Vec<MetricType>,
    #[serde(default)]
    pub main_consideration: String,
    /// Per-option free-text notes, keyed by option name.
    #[serde(default)]
    pub choice_considerations: HashMap<String, String>,
}

impl Decision {
    /// Creates a new decision input.
    pub fn new(
        options: Vec<DecisionOption>,
        categories: Vec<Category>,
        metric_types: Vec<MetricType>,
    ) -> Self {
        Self {
            options,
            categories,
            metric_types,
            main_consideration: String::new(),
            choice_considerations: HashMap::new(),
        }
    }

    /// Creates a builder for constructing a decision.
    pub fn builder() -> DecisionBuilder {
        DecisionBuilder::default()
    }

    /// Returns the number of options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Returns the number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if there is nothing to score.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() || self.categories.is_empty()
    }

    /// Returns the metric type aligned with the given category index.
    pub fn metric_type(&self, category_index: usize) -> MetricType {
        self.metric_types
            .get(category_index)
            .copied()
            .unwrap_or_default()
    }

    /// Returns the option names in input order.
    pub fn option_names(&self) -> Vec<String> {
        self.options.iter().map(|o| o.name.clone()).collect()
    }

    /// Extracts the numeric row for one category: one finite value per
    /// option, with missing cells treated as absent.
    pub fn extracted_row(&self, category_index: usize) -> Vec<f64> {
        let Some(category) = self.categories.get(category_index) else {
            return Vec::new();
        };
        (0..self.options.len())
            .map(|option_index| {
                category
                    .metrics
                    .get(option_index)
                    .map(extract_value)
                    .unwrap_or(0.0)
            })
            .collect()
    }
}

/// Builder for constructing Decision instances.
#[derive(Debug, Default)]
pub struct DecisionBuilder {
    options: Vec<DecisionOption>,
    categories: Vec<Category>,
    metric_types: Vec<MetricType>,
    main_consideration: String,
    choice_considerations: HashMap<String, String>,
}

impl DecisionBuilder {
    /// Sets the options by name.
    pub fn options(mut self, names: Vec<impl Into<String>>) -> Self {
        self.options = names.into_iter().map(DecisionOption::new).collect();
        self
    }

    /// Adds a category with its metric type.
    pub fn category(
        mut self,
        title: impl Into<String>,
        metrics: Vec<RawMetric>,
        importance: u8,
        metric_type: MetricType,
    ) -> Self {
        self.categories
            .push(Category::new(title, metrics, Importance::new(importance)));
        self.metric_types.push(metric_type);
        self
    }

    /// Sets the main consideration text.
    pub fn main_consideration(mut self, text: impl Into<String>) -> Self {
        self.main_consideration = text.into();
        self
    }

    /// Adds a per-option consideration note.
    pub fn choice_consideration(
        mut self,
        option: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        self.choice_considerations.insert(option.into(), note.into());
        self
    }

    /// Builds the decision.
    pub fn build(self) -> Decision {
        Decision {
            options: self.options,
            categories: self.categories,
            metric_types: self.metric_types,
            main_consideration: self.main_consideration,
            choice_considerations: self.choice_considerations,
        }
    }
}
