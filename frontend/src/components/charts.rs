use crate::api::ChartPoint;
use leptos::*;

/// Chart-ready series. `labels` and `values` always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn from_points(points: &[ChartPoint]) -> Self {
        Self {
            labels: points.iter().map(|p| p.label.clone()).collect(),
            values: points.iter().map(|p| p.value).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Heights in `0.0..=1.0` relative to the series maximum. Negative values
    /// clamp to zero; an all-zero series stays flat.
    pub fn normalized(&self) -> Vec<f64> {
        let max = self.max();
        self.values
            .iter()
            .map(|v| if max > 0.0 { (v.max(0.0) / max).min(1.0) } else { 0.0 })
            .collect()
    }
}

impl FromIterator<(String, f64)> for ChartSeries {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}

const CHART_HEIGHT: f64 = 160.0;
const BAR_WIDTH: f64 = 24.0;
const BAR_GAP: f64 = 12.0;

#[component]
pub fn BarChart(
    title: &'static str,
    #[prop(into)] series: Signal<ChartSeries>,
    #[prop(optional)] format_value: Option<fn(f64) -> String>,
) -> impl IntoView {
    let format_value = format_value.unwrap_or(|v| format!("{:.0}", v));
    view! {
        <section class="bg-surface-elevated rounded-lg shadow p-4">
            <h3 class="text-sm font-semibold text-fg mb-3">{title}</h3>
            {move || {
                let data = series.get();
                if data.is_empty() {
                    return view! { <p class="text-sm text-fg-muted">"No data for this period."</p> }
                        .into_view();
                }
                let width = data.values.len() as f64 * (BAR_WIDTH + BAR_GAP) + BAR_GAP;
                let bars = data
                    .normalized()
                    .into_iter()
                    .zip(data.labels.iter().cloned())
                    .zip(data.values.iter().copied())
                    .enumerate()
                    .map(|(i, ((ratio, label), value))| {
                        let height = ratio * CHART_HEIGHT;
                        let x = BAR_GAP + i as f64 * (BAR_WIDTH + BAR_GAP);
                        let tooltip = format!("{}: {}", label, format_value(value));
                        view! {
                            <g>
                                <title>{tooltip}</title>
                                <rect
                                    class="fill-action-primary-bg"
                                    x=x
                                    y=CHART_HEIGHT - height
                                    width=BAR_WIDTH
                                    height=height
                                    rx="3"
                                ></rect>
                                <text
                                    class="fill-fg-muted text-[10px]"
                                    x=x + BAR_WIDTH / 2.0
                                    y=CHART_HEIGHT + 14.0
                                    text-anchor="middle"
                                >
                                    {label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view();
                view! {
                    <svg
                        class="w-full h-48"
                        viewBox=format!("0 0 {} {}", width, CHART_HEIGHT + 20.0)
                        preserveAspectRatio="none"
                        role="img"
                        aria-label=title
                    >
                        {bars}
                    </svg>
                }
                .into_view()
            }}
        </section>
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub change: Option<String>,
}

impl StatCard {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            change: None,
        }
    }

    pub fn with_change(mut self, change: Option<String>) -> Self {
        self.change = change;
        self
    }
}

#[component]
pub fn StatGrid(#[prop(into)] cards: Signal<Vec<StatCard>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            {move || {
                cards
                    .get()
                    .into_iter()
                    .map(|card| {
                        let change_class = match card.change.as_deref() {
                            Some(c) if c.starts_with('-') => "text-status-error-text",
                            _ => "text-status-success-text",
                        };
                        view! {
                            <div class="bg-surface-elevated rounded-lg shadow p-4">
                                <p class="text-xs font-medium uppercase tracking-wide text-fg-muted">
                                    {card.label}
                                </p>
                                <p class="mt-1 text-2xl font-semibold text-fg">{card.value}</p>
                                {card
                                    .change
                                    .map(|c| view! { <p class=format!("text-xs {}", change_class)>{c}</p> })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn bar_chart_renders_one_bar_per_point() {
        let html = render_to_string(move || {
            let series = ChartSeries {
                labels: vec!["Jan".into(), "Feb".into()],
                values: vec![10.0, 20.0],
            };
            view! { <BarChart title="Revenue" series=Signal::derive(move || series.clone()) /> }
        });
        assert_eq!(html.matches("<rect").count(), 2);
        assert!(html.contains("Jan"));
        assert!(html.contains("Revenue"));
    }

    #[test]
    fn bar_chart_shows_empty_copy() {
        let html = render_to_string(move || {
            view! { <BarChart title="Sales" series=Signal::derive(ChartSeries::default) /> }
        });
        assert!(html.contains("No data for this period."));
    }

    #[test]
    fn stat_grid_colours_negative_change() {
        let html = render_to_string(move || {
            let cards = vec![
                StatCard::new("Revenue", "$1,000.00").with_change(Some("-4.0%".into())),
                StatCard::new("Orders", "12"),
            ];
            view! { <StatGrid cards=Signal::derive(move || cards.clone()) /> }
        });
        assert!(html.contains("text-status-error-text"));
        assert!(html.contains("$1,000.00"));
    }
}
