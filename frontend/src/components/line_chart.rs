use yew::prelude::*;

use crate::chart::{project_points, svg_points, ChartData};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 200.0;
const PADDING: f64 = 24.0;

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub data: ChartData,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let data = &props.data;
    if data.is_empty() {
        return html! { <p class="text-sm text-muted-foreground">{"Sem dados para o período."}</p> };
    }

    let plot_width = WIDTH - 2.0 * PADDING;
    let plot_height = HEIGHT - 2.0 * PADDING;
    let first = data.labels.first().cloned().unwrap_or_default();
    let last = data.labels.last().cloned().unwrap_or_default();

    html! {
        <div>
            <svg viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} class="w-full h-48">
                <g transform={format!("translate({} {})", PADDING, PADDING)}>
                    { for data.datasets.iter().map(|dataset| {
                        let points = project_points(&dataset.data, plot_width, plot_height);
                        let fill = if dataset.fill { dataset.background_color.clone() } else { "none".to_string() };
                        html! {
                            <g>
                                <polyline
                                    points={svg_points(&points)}
                                    fill={fill}
                                    stroke={dataset.border_color.clone()}
                                    stroke-width="2"
                                />
                                { for points.iter().zip(&dataset.data).map(|((x, y), value)| html! {
                                    <circle cx={format!("{:.1}", x)} cy={format!("{:.1}", y)} r="3" fill={dataset.background_color.clone()} stroke={dataset.border_color.clone()}>
                                        <title>{ format!("{:.2}", value) }</title>
                                    </circle>
                                }) }
                            </g>
                        }
                    }) }
                </g>
                <text x={PADDING.to_string()} y={(HEIGHT - 4.0).to_string()} font-size="11" fill="currentColor">{ first }</text>
                <text x={(WIDTH - PADDING).to_string()} y={(HEIGHT - 4.0).to_string()} font-size="11" text-anchor="end" fill="currentColor">{ last }</text>
            </svg>
            <div class="flex gap-4 text-xs text-muted-foreground">
                { for data.datasets.iter().map(|dataset| html! {
                    <span class="flex items-center gap-1">
                        <span class="inline-block w-3 h-3 rounded-full" style={format!("background: {}", dataset.border_color)}></span>
                        { dataset.label.clone() }
                    </span>
                }) }
            </div>
        </div>
    }
}
