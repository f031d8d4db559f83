//! Shapes balance points into chart series and projects them onto the SVG
//! canvas drawn by `components::LineChart`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::{DailyBalancePoint, MonthlyBalancePoint};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Splits `points` into parallel label and value sequences, keeping input order.
pub fn build_series<T, L, V>(points: &[T], label_of: L, value_of: V) -> Series
where
    L: Fn(&T) -> String,
    V: Fn(&T) -> f64,
{
    let (labels, values) = points
        .iter()
        .map(|point| (label_of(point), value_of(point)))
        .unzip();

    Series { labels, values }
}

fn decimal_value(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatasetStyle {
    pub label: &'static str,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub fill: bool,
}

pub const DAILY_STYLE: DatasetStyle = DatasetStyle {
    label: "Saldo Diário",
    border_color: "rgba(75, 192, 192, 1)",
    background_color: "rgba(75, 192, 192, 0.2)",
    fill: false,
};

pub const MONTHLY_STYLE: DatasetStyle = DatasetStyle {
    label: "Saldo Mensal",
    border_color: "rgba(153, 102, 255, 1)",
    background_color: "rgba(153, 102, 255, 0.2)",
    fill: false,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn single(series: Series, style: DatasetStyle) -> Self {
        Self {
            labels: series.labels,
            datasets: vec![Dataset {
                label: style.label.to_string(),
                data: series.values,
                border_color: style.border_color.to_string(),
                background_color: style.background_color.to_string(),
                fill: style.fill,
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub fn daily_chart(points: &[DailyBalancePoint]) -> ChartData {
    let series = build_series(
        points,
        |point| point.date.to_string(),
        |point| decimal_value(point.balance),
    );
    ChartData::single(series, DAILY_STYLE)
}

pub fn monthly_chart(points: &[MonthlyBalancePoint]) -> ChartData {
    let series = build_series(
        points,
        |point| point.month.clone(),
        |point| decimal_value(point.balance),
    );
    ChartData::single(series, MONTHLY_STYLE)
}

/// Maps `values` onto a `width` x `height` box with the origin at the top left.
///
/// Points are spaced evenly along x in input order. The y range spans the
/// minimum and maximum value; a flat series sits at mid-height.
pub fn project_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() > 1 {
                i as f64 * step
            } else {
                width / 2.0
            };
            let y = if span > 0.0 {
                height - (value - min) / span * height
            } else {
                height / 2.0
            };
            (x, y)
        })
        .collect()
}

/// Formats projected points as an SVG `points` attribute.
pub fn svg_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn daily(date: &str, balance: i64) -> DailyBalancePoint {
        DailyBalancePoint {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            balance: Decimal::from(balance),
        }
    }

    #[test]
    fn daily_chart_uses_dates_and_balances_in_order() {
        let points = vec![daily("2024-01-01", 100), daily("2024-01-02", 150)];

        let chart = daily_chart(&points);

        assert_eq!(chart.labels, ["2024-01-01", "2024-01-02"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].data, [100.0, 150.0]);
        assert_eq!(chart.datasets[0].label, "Saldo Diário");
        assert_eq!(chart.datasets[0].border_color, DAILY_STYLE.border_color);
    }

    #[test]
    fn series_is_not_sorted_or_gap_filled() {
        let points = vec![
            daily("2024-03-01", 5),
            daily("2024-01-01", -10),
            daily("2024-01-09", 7),
        ];

        let chart = daily_chart(&points);

        assert_eq!(chart.labels, ["2024-03-01", "2024-01-01", "2024-01-09"]);
        assert_eq!(chart.datasets[0].data, [5.0, -10.0, 7.0]);
    }

    #[test]
    fn monthly_chart_keeps_month_labels_verbatim() {
        let points = vec![
            MonthlyBalancePoint {
                month: "2024-01".to_string(),
                balance: Decimal::new(12050, 2),
            },
            MonthlyBalancePoint {
                month: "2024-02".to_string(),
                balance: Decimal::new(-3, 0),
            },
        ];

        let chart = monthly_chart(&points);

        assert_eq!(chart.labels, ["2024-01", "2024-02"]);
        assert_eq!(chart.datasets[0].data, [120.5, -3.0]);
        assert_eq!(chart.datasets[0].label, "Saldo Mensal");
        assert!(!chart.datasets[0].fill);
    }

    #[test]
    fn series_preserves_cardinality() {
        for n in [0usize, 1, 2, 17] {
            let points: Vec<(String, f64)> =
                (0..n).map(|i| (format!("p{i}"), i as f64)).collect();

            let series = build_series(&points, |p| p.0.clone(), |p| p.1);

            assert_eq!(series.labels.len(), n);
            assert_eq!(series.values.len(), n);
        }
    }

    #[test]
    fn empty_input_gives_empty_chart() {
        let chart = daily_chart(&[]);

        assert!(chart.is_empty());
        assert!(chart.datasets[0].data.is_empty());
    }

    #[test]
    fn chart_data_serializes_in_camel_case() {
        let chart = daily_chart(&[daily("2024-01-01", 100)]);

        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "labels": ["2024-01-01"],
                "datasets": [{
                    "label": "Saldo Diário",
                    "data": [100.0],
                    "borderColor": "rgba(75, 192, 192, 1)",
                    "backgroundColor": "rgba(75, 192, 192, 0.2)",
                    "fill": false
                }]
            })
        );
    }

    #[test]
    fn projection_spans_the_box() {
        let points = project_points(&[100.0, 150.0, 50.0], 200.0, 100.0);

        assert_eq!(points, [(0.0, 50.0), (100.0, 0.0), (200.0, 100.0)]);
    }

    #[test]
    fn flat_series_sits_at_mid_height() {
        let points = project_points(&[3.0, 3.0], 100.0, 40.0);

        assert_eq!(points, [(0.0, 20.0), (100.0, 20.0)]);
    }

    #[test]
    fn single_point_is_centred() {
        assert_eq!(project_points(&[42.0], 100.0, 40.0), [(50.0, 20.0)]);
        assert!(project_points(&[], 100.0, 40.0).is_empty());
    }

    #[test]
    fn svg_points_are_space_separated_pairs() {
        assert_eq!(svg_points(&[(0.0, 50.0), (100.0, 12.5)]), "0.0,50.0 100.0,12.5");
    }
}
