use yew::prelude::*;

use crate::components::dashboard_preview::DashboardPreview;
use crate::components::trend_chart::TrendChart;
use crate::data::TRENDING_TOPICS;
use crate::pages::home::SectionHeader;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let (flagged, verified) = TRENDING_TOPICS
        .iter()
        .fold((0, 0), |(f, v), t| (f + t.flagged, v + t.verified));

    html! {
        <section class="section">
            <div class="container">
                <SectionHeader
                    title="Web Dashboard"
                    subtitle="Sample data from the last 24 hours of flagged and verified content"
                />
                <div class="dashboard-totals">
                    <div class="card total">
                        <span class="total-value score-low">{flagged}</span>
                        <span class="card-description">{"items flagged"}</span>
                    </div>
                    <div class="card total">
                        <span class="total-value score-high">{verified}</span>
                        <span class="card-description">{"items verified"}</span>
                    </div>
                </div>
                <TrendChart />
                <DashboardPreview />
            </div>
        </section>
    }
}
