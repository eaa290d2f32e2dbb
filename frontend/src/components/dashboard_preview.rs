use yew::prelude::*;

use crate::config;
use crate::data::{RecentAnalysis, TrendingTopic, RECENT_ANALYSES, TRENDING_TOPICS};

fn render_topic(topic: &TrendingTopic) -> Html {
    html! {
        <div class="topic-row">
            <div class="topic-header">
                <div class="topic-name">
                    <span>{topic.topic}</span>
                    <span class={classes!("trend-icon", topic.trend.class())}>{topic.trend.icon()}</span>
                </div>
                <div class="topic-badges">
                    <span class="badge badge-red">{format!("{} flagged", topic.flagged)}</span>
                    <span class="badge badge-gray">{format!("{} verified", topic.verified)}</span>
                </div>
            </div>
            <div class="progress progress-thin">
                <div class="progress-fill fill-low" style={format!("width: {:.1}%;", topic.flagged_percent())}></div>
            </div>
        </div>
    }
}

fn render_recent(analysis: &RecentAnalysis) -> Html {
    let tier = analysis.tier();
    html! {
        <div class="recent-item">
            <div class="recent-top">
                <p>{analysis.content}</p>
                <div class="recent-score">
                    <span class={tier.color_class()}>{format!("{}%", analysis.score)}</span>
                    <span class="recent-time">{analysis.age_label()}</span>
                </div>
            </div>
            <div class="recent-verdict">
                <span class={tier.color_class()}>{tier.icon()}</span>
                <span>{tier.verdict()}</span>
            </div>
        </div>
    }
}

#[function_component(DashboardPreview)]
pub fn dashboard_preview() -> Html {
    html! {
        <div class="dashboard-grid">
            <div class="card">
                <h3 class="card-title">{"📈 Trending Misinformation Topics"}</h3>
                <p class="card-description">{"Most flagged topics in the last 24 hours"}</p>
                { for TRENDING_TOPICS.iter().map(render_topic) }
            </div>
            <div class="card">
                <h3 class="card-title">{"📊 Recent Analyses"}</h3>
                <p class="card-description">{format!("Latest content analyzed by {}", config::PRODUCT_NAME)}</p>
                { for RECENT_ANALYSES.iter().map(render_recent) }
            </div>
            <style>
                {r#"
                .dashboard-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .topic-row {
                    margin-bottom: 1rem;
                }
                .topic-header, .recent-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 0.5rem;
                }
                .topic-name, .topic-badges, .recent-verdict {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .trend-up { color: #ef4444; }
                .trend-down { color: #22c55e; }
                .trend-stable { color: #6b7280; }
                .recent-item {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    margin-bottom: 1rem;
                }
                .recent-top p {
                    flex: 1;
                    padding-right: 1rem;
                    margin: 0;
                    font-size: 0.875rem;
                    color: #374151;
                }
                .recent-score {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    font-weight: bold;
                    font-size: 1.125rem;
                }
                .recent-time, .recent-verdict {
                    font-size: 0.75rem;
                    font-weight: normal;
                    color: #6b7280;
                }
                @media (max-width: 950px) {
                    .dashboard-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
