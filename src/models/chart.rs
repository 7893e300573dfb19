//! Chart ranking models.

use serde::{Deserialize, Serialize};

use super::common::Date;

/// A platform chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// Chart handle, e.g. "global-spotify".
    pub slug: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,

    /// Publication frequency, e.g. "daily".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

/// A song's rank on a chart at a given date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartEntry {
    pub chart: Chart,

    pub position: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_position: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_evolution: Option<i64>,

    /// Number of periods spent on the chart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_on_chart: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<Date>,
}
