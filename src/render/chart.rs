//! Line Chart
//!
//! Month-indexed line chart rendered as inline SVG. The chart model is
//! also served as JSON so the series can be checked without parsing SVG.

use leptos::*;
use serde::Serialize;

use super::format::format_revenue;
use super::render_html;
use crate::data::RevenueMonth;

/// Color of the total revenue series
pub const TOTAL_COLOR: &str = "#0d6efd";

/// Color of the personal revenue series
pub const PERSONAL_COLOR: &str = "#ff9800";

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 36.0;
const MARGIN_BOTTOM: f64 = 28.0;
const GRID_LINES: u64 = 5;

/// One line of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Stable key, e.g. "total"
    pub key: String,
    /// Legend label
    pub label: String,
    pub color: String,
    pub values: Vec<u64>,
}

/// A line chart over shared x labels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub y_label: String,
}

/// Build the revenue chart from the monthly history
pub fn revenue_chart(history: &[RevenueMonth]) -> LineChart {
    LineChart {
        labels: history.iter().map(|m| m.month.clone()).collect(),
        series: vec![
            ChartSeries {
                key: "total".to_string(),
                label: "Gesamtumsatz".to_string(),
                color: TOTAL_COLOR.to_string(),
                values: history.iter().map(|m| m.total).collect(),
            },
            ChartSeries {
                key: "personal".to_string(),
                label: "Mein Umsatz".to_string(),
                color: PERSONAL_COLOR.to_string(),
                values: history.iter().map(|m| m.personal).collect(),
            },
        ],
        y_label: "Umsatz (€)".to_string(),
    }
}

impl LineChart {
    /// Look up a series by key
    pub fn series(&self, key: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.key == key)
    }

    /// Upper bound of the y axis, rounded so grid lines land on round numbers
    pub fn y_max(&self) -> u64 {
        let max = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(0);

        if max == 0 {
            return GRID_LINES;
        }

        let step = (10u64.pow(max.ilog10()) / 2).max(1);
        max.div_ceil(step) * step
    }

    /// Render to an SVG string
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let chart = self.clone();
        render_html(move || view! { <LineChartSvg chart=chart width=width height=height /> })
    }
}

/// Line chart as inline SVG
#[component]
pub fn LineChartSvg(
    chart: LineChart,
    /// Viewbox width
    width: u32,
    /// Viewbox height
    height: u32,
) -> impl IntoView {
    let (w, h) = (width as f64, height as f64);
    let plot_w = w - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = h - MARGIN_TOP - MARGIN_BOTTOM;
    let top = chart.y_max();
    let y_max = top as f64;
    let n = chart.labels.len();

    let x_at = move |i: usize| -> f64 {
        if n <= 1 {
            MARGIN_LEFT + plot_w / 2.0
        } else {
            MARGIN_LEFT + plot_w * i as f64 / (n - 1) as f64
        }
    };
    let y_at = move |v: u64| -> f64 { MARGIN_TOP + plot_h - plot_h * v as f64 / y_max };

    // Grid and y ticks
    let grid = (0..=GRID_LINES)
        .map(|i| {
            let value = top * i / GRID_LINES;
            let y = y_at(value);
            view! {
                <line
                    x1=fmt_coord(MARGIN_LEFT)
                    x2=fmt_coord(w - MARGIN_RIGHT)
                    y1=fmt_coord(y)
                    y2=fmt_coord(y)
                    stroke="#e9ecef"
                />
                <text x=fmt_coord(MARGIN_LEFT - 8.0) y=fmt_coord(y + 4.0) text-anchor="end" font-size="11" fill="#6c757d">
                    {value.to_string()}
                </text>
            }
        })
        .collect_view();

    let x_labels = chart
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text x=fmt_coord(x_at(i)) y=fmt_coord(h - 8.0) text-anchor="middle" font-size="11" fill="#6c757d">
                    {label.clone()}
                </text>
            }
        })
        .collect_view();

    let series = chart
        .series
        .iter()
        .map(|series| {
            let points = series
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{},{}", fmt_coord(x_at(i)), fmt_coord(y_at(*v))))
                .collect::<Vec<_>>()
                .join(" ");

            let dots = series
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let label = chart.labels.get(i).map(String::as_str).unwrap_or("");
                    let tooltip = format!("{}: {} {}", label, series.label, format_revenue(*v));
                    view! {
                        <circle cx=fmt_coord(x_at(i)) cy=fmt_coord(y_at(*v)) r="4" fill=series.color.clone()>
                            <title>{tooltip}</title>
                        </circle>
                    }
                })
                .collect_view();

            view! {
                <g class="chart-series" data-series=series.key.clone()>
                    <polyline points=points fill="none" stroke=series.color.clone() stroke-width="2.5" />
                    {dots}
                </g>
            }
        })
        .collect_view();

    // Legend, right aligned above the plot
    let mut x = w - MARGIN_RIGHT;
    let legend = chart
        .series
        .iter()
        .rev()
        .map(|series| {
            x -= series.label.chars().count() as f64 * 7.0 + 24.0;
            view! {
                <rect x=fmt_coord(x) y="10" width="12" height="12" rx="6" fill=series.color.clone() />
                <text x=fmt_coord(x + 16.0) y="20" font-size="12" fill="#343a40">
                    {series.label.clone()}
                </text>
            }
        })
        .collect_view();

    let axis_transform = format!("translate(12 {}) rotate(-90)", fmt_coord(MARGIN_TOP + plot_h / 2.0));

    view! {
        <svg
            class="line-chart"
            viewBox=format!("0 0 {} {}", width, height)
            width="100%"
            height=height.to_string()
            role="img"
            aria-label=chart.y_label.clone()
        >
            <g class="chart-grid">{grid}</g>
            <text transform=axis_transform text-anchor="middle" font-size="11" fill="#6c757d">
                {chart.y_label.clone()}
            </text>
            <g class="chart-labels">{x_labels}</g>
            {series}
            <g class="chart-legend">{legend}</g>
        </svg>
    }
}

fn fmt_coord(v: f64) -> String {
    format!("{:.1}", v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleDataProvider;

    fn sample_chart() -> LineChart {
        let provider = SampleDataProvider::load().unwrap();
        revenue_chart(&provider.data().revenue_history)
    }

    #[test]
    fn test_revenue_series_values() {
        let chart = sample_chart();

        assert_eq!(chart.labels, vec!["Jan", "Feb", "Mär", "Apr", "Mai", "Jun"]);
        assert_eq!(
            chart.series("total").unwrap().values,
            vec![8300, 9000, 10300, 11200, 11900, 12450]
        );
        assert_eq!(
            chart.series("personal").unwrap().values,
            vec![2100, 2300, 2800, 3000, 3200, 3250]
        );
        assert_eq!(chart.series("total").unwrap().color, TOTAL_COLOR);
        assert_eq!(chart.series("personal").unwrap().color, PERSONAL_COLOR);
    }

    #[test]
    fn test_y_max_rounds_up() {
        let chart = sample_chart();
        let y_max = chart.y_max();
        assert!(y_max >= 12450);
        assert_eq!(y_max % GRID_LINES, 0);
        assert_eq!(y_max, 15000);
    }

    #[test]
    fn test_y_max_empty() {
        let chart = revenue_chart(&[]);
        assert_eq!(chart.y_max(), GRID_LINES);
        // Renders without panicking
        let svg = chart.to_svg(600, 300);
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_svg_contains_series() {
        let svg = sample_chart().to_svg(800, 300);

        assert_eq!(svg.matches("<polyline").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 12);
        assert!(svg.contains(r#"data-series="total""#));
        assert!(svg.contains(r#"data-series="personal""#));
        assert!(svg.contains("Jun: Gesamtumsatz 12.450 €"));
        assert!(svg.contains("Umsatz (€)"));
    }

    #[test]
    fn test_points_are_monotonic_in_x() {
        let chart = sample_chart();
        let svg = chart.to_svg(800, 300);
        let start = svg.find("points=\"").unwrap() + 8;
        let end = start + svg[start..].find('"').unwrap();
        let xs: Vec<f64> = svg[start..end]
            .split(' ')
            .map(|p| p.split(',').next().unwrap().parse().unwrap())
            .collect();

        assert_eq!(xs.len(), 6);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }
}
