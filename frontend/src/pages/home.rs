use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::analysis_demo::AnalysisDemo;
use crate::components::dashboard_preview::DashboardPreview;
use crate::components::feature_card::FeatureCard;
use crate::components::hero::Hero;
use crate::config;
use crate::data::FEATURES;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <h2>{&props.title}</h2>
            <p>{&props.subtitle}</p>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <Hero />

            <section id="features" class="section">
                <div class="container">
                    <SectionHeader
                        title="Powerful AI Detection Features"
                        subtitle="Comprehensive misinformation detection using advanced AI, fact-checking APIs, and real-time analysis"
                    />
                    <div class="feature-grid">
                        { for FEATURES.iter().map(|feature| html! { <FeatureCard feature={*feature} /> }) }
                    </div>
                </div>
            </section>

            <section id="demo" class="section section-gray">
                <div class="container container-narrow">
                    <SectionHeader
                        title="Try the AI Analysis"
                        subtitle="Paste any text or social media content to see our AI credibility analysis in action"
                    />
                    <AnalysisDemo />
                </div>
            </section>

            <section id="dashboard" class="section">
                <div class="container">
                    <SectionHeader
                        title="Misinformation Trends Dashboard"
                        subtitle="Track trending misinformation topics and see real-time analysis results"
                    />
                    <DashboardPreview />
                </div>
            </section>

            <section id="cta" class="section section-blue">
                <div class="container container-narrow cta">
                    <h2>{"Ready to Fight Misinformation?"}</h2>
                    <p>
                        {format!("Install the {} browser extension and start protecting yourself from fake news today.", config::PRODUCT_NAME)}
                    </p>
                    <div class="cta-buttons">
                        <a href={config::get_extension_url()} target="_blank" rel="noopener noreferrer" class="button button-light">
                            {"Install Chrome Extension"}
                        </a>
                        <Link<Route> to={Route::Dashboard} classes="button button-ghost">
                            {"View Web Dashboard"}
                        </Link<Route>>
                    </div>
                </div>
            </section>
        </div>
    }
}
