//! Server-side rendering
//!
//! Sections are leptos components rendered to a string on the server.
//! Dynamic text and attribute values are escaped by leptos.
//!
//! - [`chart`]: SVG line chart
//! - [`dashboard`]: Page sections
//! - [`format`]: Revenue and percent formatting
//! - [`styles`]: Stylesheet

pub mod chart;
pub mod dashboard;
pub mod format;
pub mod styles;

use leptos::IntoView;

pub use chart::{revenue_chart, ChartSeries, LineChart, LineChartSvg};
pub use dashboard::{render_page, Tab};
pub use format::{format_percent, format_revenue};

/// Render a view to an HTML string
pub fn render_html<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}
