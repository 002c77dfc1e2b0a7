//! Data processing for forecast and residual charts.
//!
//! This crate turns query results into chart-ready structures. It does no
//! I/O; everything here is deterministic and tested without a browser.

/// Residual (observed minus predicted) analysis with a linear trend fit.
pub mod residual {
    use gwf_core::series::ObservedPredicted;
    use gwf_utils::dates::{parse_date, yearly_ticks};
    use serde::Serialize;

    /// Least-squares line `intercept + slope * index` over a zero-based index.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct TrendLine {
        /// Change in residual per time step (feet per row)
        pub slope: f64,
        /// Fitted residual at index 0
        pub intercept: f64,
    }

    impl TrendLine {
        pub fn at(&self, index: usize) -> f64 {
            self.intercept + self.slope * index as f64
        }
    }

    /// Fit a line to `values` against their position 0..n-1.
    ///
    /// Uses centered sums, so large indices do not cancel out the slope.
    /// A single value gives a flat line through it; no values give `None`.
    pub fn fit_trend(values: &[f64]) -> Option<TrendLine> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let x_mean = (n - 1.0) / 2.0;
        let y_mean = values.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (i, y) in values.iter().enumerate() {
            let x_diff = i as f64 - x_mean;
            numerator += x_diff * (y - y_mean);
            denominator += x_diff * x_diff;
        }

        let slope = if denominator > 0.0 {
            numerator / denominator
        } else {
            0.0
        };
        Some(TrendLine {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// One plotted residual with the trend value at the same position.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ResidualPoint {
        pub date: String,
        pub residual: f64,
        pub trend: f64,
    }

    /// Residual series for one model at one well.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ResidualAnalysis {
        pub model: String,
        pub points: Vec<ResidualPoint>,
        pub trend: TrendLine,
        /// Average residual; positive means the model predicts too shallow
        pub mean_residual: f64,
    }

    impl ResidualAnalysis {
        /// January 1st ticks spanning the residual dates.
        pub fn ticks(&self) -> Vec<String> {
            let first = self.points.first().and_then(|p| parse_date(&p.date).ok());
            let last = self.points.last().and_then(|p| parse_date(&p.date).ok());
            match (first, last) {
                (Some(first), Some(last)) => yearly_ticks(&first, &last)
                    .iter()
                    .map(gwf_utils::dates::format_date)
                    .collect(),
                _ => Vec::new(),
            }
        }
    }

    /// Compute `observed - predicted` per row and fit the trend.
    ///
    /// `rows` must already exclude incomplete records and be in date order;
    /// the trend is fitted against row position, not the date, so gaps in
    /// the record do not bend the slope.
    pub fn analyze_residuals(model: &str, rows: &[ObservedPredicted]) -> Option<ResidualAnalysis> {
        let residuals: Vec<f64> = rows.iter().map(|r| r.observed - r.predicted).collect();
        let trend = fit_trend(&residuals)?;
        let mean_residual = residuals.iter().sum::<f64>() / residuals.len() as f64;

        let points = rows
            .iter()
            .zip(&residuals)
            .enumerate()
            .map(|(i, (row, residual))| ResidualPoint {
                date: row.date.clone(),
                residual: *residual,
                trend: trend.at(i),
            })
            .collect();

        log::info!(
            "residuals for {}: n={} slope={:.6} intercept={:.4}",
            model,
            residuals.len(),
            trend.slope,
            trend.intercept
        );
        Some(ResidualAnalysis {
            model: model.to_string(),
            points,
            trend,
            mean_residual,
        })
    }

    /// Y-axis title for the residual chart.
    pub const ERROR_AXIS_LABEL: &str = "Error (ft)";

    /// Residual chart payload for the D3 bridge.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResidualChart {
        pub model: String,
        pub points: Vec<ResidualPoint>,
        pub ticks: Vec<String>,
        pub y_axis_label: String,
        pub point_opacity: f64,
        pub trend_color: String,
        pub trend_width: f64,
    }

    impl From<&ResidualAnalysis> for ResidualChart {
        fn from(analysis: &ResidualAnalysis) -> Self {
            ResidualChart {
                model: analysis.model.clone(),
                points: analysis.points.clone(),
                ticks: analysis.ticks(),
                y_axis_label: ERROR_AXIS_LABEL.to_string(),
                point_opacity: 0.3,
                trend_color: "orange".to_string(),
                trend_width: 3.0,
            }
        }
    }

    /// Model to analyze: the current choice if this well has it, otherwise
    /// the well's first model.
    pub fn pick_residual_model(chosen: Option<&str>, available: &[String]) -> Option<String> {
        chosen
            .filter(|c| available.iter().any(|m| m == c))
            .map(str::to_string)
            .or_else(|| available.first().cloned())
    }

}

/// Forecast chart assembly: trace filtering, colors and the time axis.
pub mod forecast {
    use chrono::NaiveDate;
    use gwf_core::model::Trace;
    use gwf_core::series::DateValue;
    use gwf_utils::dates::{forecast_horizon, format_date, yearly_ticks};
    use serde::Serialize;

    /// Y-axis title for depth charts.
    pub const DEPTH_AXIS_LABEL: &str = "Depth (ft)";

    /// One line on the forecast chart.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ChartSeries {
        pub name: String,
        pub color: String,
        pub points: Vec<DateValue>,
    }

    /// Everything the D3 forecast chart needs.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ForecastChart {
        pub series: Vec<ChartSeries>,
        pub x_start: String,
        pub x_end: String,
        pub ticks: Vec<String>,
        /// Depth grows downward on screen
        pub y_reversed: bool,
        pub y_axis_label: String,
    }

    /// Requested traces that the well's table can actually draw.
    ///
    /// Keeps request order, drops models missing from `available_models`
    /// and drops repeats. `Observed` is always drawable.
    pub fn select_traces(requested: &[Trace], available_models: &[String]) -> Vec<Trace> {
        let mut selected: Vec<Trace> = Vec::new();
        for trace in requested {
            let drawable = match trace {
                Trace::Observed => true,
                Trace::Model(name) => available_models.iter().any(|m| m == name),
            };
            if !drawable {
                log::info!("skipping trace {}: not in this well's table", trace);
                continue;
            }
            if !selected.contains(trace) {
                selected.push(trace.clone());
            }
        }
        selected
    }

    /// X-axis span: first table date through the forecast horizon.
    pub fn x_range(first_date: NaiveDate) -> (NaiveDate, NaiveDate) {
        let horizon = forecast_horizon();
        (first_date, horizon.max(first_date))
    }

    /// Assemble the chart from per-trace series. Series without a single
    /// value are left out; gaps inside a series are kept.
    pub fn build_forecast_chart(
        first_date: NaiveDate,
        series: Vec<(Trace, Vec<DateValue>)>,
    ) -> ForecastChart {
        let (start, end) = x_range(first_date);
        ForecastChart {
            series: series
                .into_iter()
                .filter(|(_, points)| points.iter().any(|p| p.value.is_some()))
                .map(|(trace, points)| ChartSeries {
                    name: trace.label().to_string(),
                    color: trace.color().to_string(),
                    points,
                })
                .collect(),
            x_start: format_date(&start),
            x_end: format_date(&end),
            ticks: yearly_ticks(&start, &end).iter().map(format_date).collect(),
            y_reversed: true,
            y_axis_label: DEPTH_AXIS_LABEL.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn models() -> Vec<String> {
            vec!["MLR".to_string(), "LSTM".to_string()]
        }

        #[test]
        fn test_select_traces_drops_unknown_models() {
            let requested = vec![
                Trace::Observed,
                Trace::Model("CNN".to_string()),
                Trace::Model("LSTM".to_string()),
            ];
            let selected = select_traces(&requested, &models());
            assert_eq!(
                selected,
                vec![Trace::Observed, Trace::Model("LSTM".to_string())]
            );
        }

        #[test]
        fn test_select_traces_dedups() {
            let requested = vec![Trace::Observed, Trace::Observed];
            assert_eq!(select_traces(&requested, &models()), vec![Trace::Observed]);
        }

        #[test]
        fn test_x_range_ends_at_horizon() {
            let first = NaiveDate::from_ymd_opt(2019, 1, 6).unwrap();
            let (start, end) = x_range(first);
            assert_eq!(start, first);
            assert_eq!(end, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
        }

        #[test]
        fn test_x_range_collapses_past_horizon() {
            let first = NaiveDate::from_ymd_opt(2027, 3, 1).unwrap();
            assert_eq!(x_range(first), (first, first));
        }

        #[test]
        fn test_build_forecast_chart() {
            let first = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
            let observed = vec![
                DateValue {
                    date: "2024-06-02".to_string(),
                    value: Some(5.0),
                },
                DateValue {
                    date: "2024-06-09".to_string(),
                    value: None,
                },
            ];
            let blank = vec![DateValue {
                date: "2024-06-02".to_string(),
                value: None,
            }];
            let chart = build_forecast_chart(
                first,
                vec![
                    (Trace::Observed, observed),
                    (Trace::Model("LSTM".to_string()), Vec::new()),
                    (Trace::Model("CNN".to_string()), blank),
                ],
            );
            assert_eq!(chart.series.len(), 1);
            assert_eq!(chart.series[0].points.len(), 2);
            assert_eq!(chart.series[0].points[1].value, None);
            assert_eq!(chart.series[0].name, "Observed");
            assert_eq!(chart.series[0].color, "black");
            assert_eq!(chart.x_start, "2024-06-02");
            assert_eq!(chart.x_end, "2026-12-31");
            assert_eq!(chart.ticks, vec!["2025-01-01", "2026-01-01"]);
            assert!(chart.y_reversed);
        }
    }
}

/// Regional map payload for the Leaflet bridge.
pub mod map {
    use gwf_core::well::Well;
    use serde::Serialize;

    /// Map center over the Eastern Shore peninsula.
    pub const MAP_CENTER: [f64; 2] = [37.6, -75.7];
    pub const MAP_ZOOM: u8 = 9;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct MapMarker {
        pub lat: f64,
        pub lon: f64,
        pub tooltip: String,
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct WellMap {
        pub center: [f64; 2],
        pub zoom: u8,
        pub markers: Vec<MapMarker>,
    }

    /// One marker per well, carrying the tooltip that marker clicks route on.
    pub fn build_well_map(wells: &[Well]) -> WellMap {
        WellMap {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            markers: wells
                .iter()
                .map(|w| MapMarker {
                    lat: w.latitude,
                    lon: w.longitude,
                    tooltip: w.marker_tooltip(),
                })
                .collect(),
        }
    }

}
