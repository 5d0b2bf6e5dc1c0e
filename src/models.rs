use serde::Serialize;
use std::fmt;
use utoipa::{IntoParams, ToSchema};

/// Aggregation period of the TMDB trending list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    Day,
    Week,
}

impl TimeWindow {
    /// Resolves the raw `time_window` parameter.
    ///
    /// Only the exact string `"week"` selects the weekly window. Anything else,
    /// including a missing or empty value, falls back to the daily window.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("week") => TimeWindow::Week,
            _ => TimeWindow::Day,
        }
    }

    /// Path segment used by TMDB.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query string accepted by `GET /api/tmdb/trending`.
#[derive(Debug, Clone, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrendingQuery {
    /// `day` or `week`. Unrecognized values are treated as `day`.
    pub time_window: Option<String>,
}

impl TrendingQuery {
    /// Parses the raw query string without ever rejecting it.
    ///
    /// A `time_window` key repeated more than once is treated as absent.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let mut values = url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes())
            .filter(|(key, _)| key == "time_window")
            .map(|(_, value)| value.into_owned());

        let time_window = match (values.next(), values.next()) {
            (Some(value), None) => Some(value),
            _ => None,
        };

        Self { time_window }
    }

    pub fn time_window(&self) -> TimeWindow {
        TimeWindow::from_param(self.time_window.as_deref())
    }
}
