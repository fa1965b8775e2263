//! Active view and selected time range for one dashboard session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;

/// One of the five presentation modes over the same snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Overview,
    Financial,
    Clients,
    Projects,
    Team,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Overview,
        View::Financial,
        View::Clients,
        View::Projects,
        View::Team,
    ];

    /// Identifier used by hosts and in error messages
    pub fn name(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Financial => "financial",
            View::Clients => "clients",
            View::Projects => "projects",
            View::Team => "team",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Financial => "Financial",
            View::Clients => "Clients",
            View::Projects => "Projects",
            View::Team => "Team",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            View::Overview => 0,
            View::Financial => 1,
            View::Clients => 2,
            View::Projects => 3,
            View::Team => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .iter()
            .copied()
            .find(|view| view.name() == s)
            .ok_or_else(|| InvalidArgument::UnknownView(s.to_string()))
    }
}

/// Time window applied to monthly series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Range {
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "12m")]
    TwelveMonths,
}

impl Range {
    pub const ALL: [Range; 3] = [Range::ThreeMonths, Range::SixMonths, Range::TwelveMonths];

    pub fn months(&self) -> usize {
        match self {
            Range::ThreeMonths => 3,
            Range::SixMonths => 6,
            Range::TwelveMonths => 12,
        }
    }

    /// Short code, as accepted by [`Range::from_str`]
    pub fn code(&self) -> &'static str {
        match self {
            Range::ThreeMonths => "3m",
            Range::SixMonths => "6m",
            Range::TwelveMonths => "12m",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Range::ThreeMonths => "Last 3 months",
            Range::SixMonths => "Last 6 months",
            Range::TwelveMonths => "Last 12 months",
        }
    }

    /// Next range in the 3 -> 6 -> 12 -> 3 cycle
    pub fn next(&self) -> Self {
        match self {
            Range::ThreeMonths => Range::SixMonths,
            Range::SixMonths => Range::TwelveMonths,
            Range::TwelveMonths => Range::ThreeMonths,
        }
    }

    /// The last `months()` entries of `series`, or all of it when shorter
    pub fn window<'a, T>(&self, series: &'a [T]) -> &'a [T] {
        let start = series.len().saturating_sub(self.months());
        &series[start..]
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Range {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3m" | "3-month" => Ok(Range::ThreeMonths),
            "6m" | "6-month" => Ok(Range::SixMonths),
            "12m" | "12-month" => Ok(Range::TwelveMonths),
            _ => Err(InvalidArgument::UnknownRange(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub active_view: View,
    pub selected_range: Range,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_view: View::Overview,
            selected_range: Range::SixMonths,
        }
    }
}

/// Session-scoped owner of [`ViewState`]. All mutation goes through here.
#[derive(Debug, Default)]
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn current_view(&self) -> View {
        self.state.active_view
    }

    pub fn current_range(&self) -> Range {
        self.state.selected_range
    }

    pub fn select_view(&mut self, view: View) {
        if self.state.active_view != view {
            tracing::debug!(from = %self.state.active_view, to = %view, "select view");
            self.state.active_view = view;
        }
    }

    /// Select a view by name; unknown names leave the state untouched
    pub fn select_view_named(&mut self, name: &str) -> Result<View, InvalidArgument> {
        let view = name.parse::<View>()?;
        self.select_view(view);
        Ok(view)
    }

    pub fn select_range(&mut self, range: Range) {
        if self.state.selected_range != range {
            tracing::debug!(from = %self.state.selected_range, to = %range, "select range");
            self.state.selected_range = range;
        }
    }

    pub fn select_range_named(&mut self, name: &str) -> Result<Range, InvalidArgument> {
        let range = name.parse::<Range>()?;
        self.select_range(range);
        Ok(range)
    }

    pub fn next_view(&mut self) -> View {
        let next = (self.current_view().index() + 1) % View::ALL.len();
        self.select_view(View::ALL[next]);
        self.current_view()
    }

    pub fn previous_view(&mut self) -> View {
        let len = View::ALL.len();
        let prev = (self.current_view().index() + len - 1) % len;
        self.select_view(View::ALL[prev]);
        self.current_view()
    }

    pub fn cycle_range(&mut self) -> Range {
        self.select_range(self.current_range().next());
        self.current_range()
    }
}
