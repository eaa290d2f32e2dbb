use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use thiserror::Error;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::data::{TrendingTopic, TRENDING_TOPICS};

const WIDTH: u32 = 700;
const HEIGHT: u32 = 380;

#[derive(Debug, Error)]
enum ChartError {
    #[error("canvas backend unavailable")]
    NoBackend,
    #[error("drawing failed: {0}")]
    Draw(String),
}

fn draw_error<E: std::fmt::Debug>(e: E) -> ChartError {
    ChartError::Draw(format!("{:?}", e))
}

/// Flagged and verified counts side by side for each topic.
fn draw_topics(canvas: HtmlCanvasElement, topics: &[TrendingTopic]) -> Result<(), ChartError> {
    canvas.set_width(WIDTH);
    canvas.set_height(HEIGHT);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::NoBackend)?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let max_count = topics
        .iter()
        .map(|t| t.flagged.max(t.verified))
        .max()
        .unwrap_or(0);

    // Three x units per topic: flagged bar, verified bar, gap.
    let slots = topics.len() * 3;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Flagged vs verified, last 24 hours", ("sans-serif", 20))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..slots, 0u32..max_count + max_count / 10 + 1)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|x| {
            if x % 3 == 1 {
                topics.get(x / 3).map(|t| t.topic.to_string()).unwrap_or_default()
            } else {
                String::new()
            }
        })
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(topics.iter().enumerate().map(|(i, topic)| {
            Rectangle::new([(i * 3, 0), (i * 3 + 1, topic.flagged)], RED.mix(0.8).filled())
        }))
        .map_err(draw_error)?;

    chart
        .draw_series(topics.iter().enumerate().map(|(i, topic)| {
            Rectangle::new([(i * 3 + 1, 0), (i * 3 + 2, topic.verified)], GREEN.mix(0.8).filled())
        }))
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

#[function_component(TrendChart)]
pub fn trend_chart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(e) = draw_topics(canvas, &TRENDING_TOPICS) {
                    log::error!("Failed to draw trend chart: {}", e);
                }
            }
            || ()
        }, ());
    }

    html! {
        <div class="card trend-chart">
            <canvas
                ref={canvas_ref}
                width={WIDTH.to_string()}
                height={HEIGHT.to_string()}
                style="max-width: 100%;"
            />
            <div class="chart-legend">
                <span class="legend-flagged">{"■ flagged"}</span>
                <span class="legend-verified">{"■ verified"}</span>
            </div>
        </div>
    }
}
