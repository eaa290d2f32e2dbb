use yew::prelude::*;

use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero-section">
            <div class="hero-grid">
                <div class="hero-copy">
                    <span class="badge badge-blue">{"🚀 AI-Powered Fact Checking"}</span>
                    <h1>
                        {"Stop Fake News"}
                        <span class="hero-highlight">{" Before It Spreads"}</span>
                    </h1>
                    <p class="hero-lead">
                        {format!("{} uses advanced artificial intelligence to detect misinformation in real-time, \
                                  cross-reference with trusted sources, and protect you from fake news across all \
                                  social media platforms.", config::PRODUCT_NAME)}
                    </p>
                    <div class="hero-buttons">
                        <a href={config::get_extension_url()} target="_blank" rel="noopener noreferrer" class="button button-primary">
                            {"🛡 Install Extension"}
                        </a>
                        <a href="#demo" class="button button-outline">
                            {"⚡ Try Demo"}
                        </a>
                    </div>
                    <div class="hero-checks">
                        <span>{"✔ Works on all major platforms"}</span>
                        <span>{"✔ Real-time analysis"}</span>
                    </div>
                </div>

                // Static showcase card, not wired to the scorer
                <div class="hero-card-wrapper">
                    <div class="hero-card">
                        <div class="hero-card-header">
                            <h3>{"Live Analysis"}</h3>
                            <span class="badge badge-green">{"✓ Verified"}</span>
                        </div>
                        <div class="hero-card-quote">
                            {"\"New study shows that drinking water helps with hydration\""}
                        </div>
                        <div class="hero-card-score">
                            <span>{"Credibility Score"}</span>
                            <span class="score-high">{"95%"}</span>
                        </div>
                        <div class="progress"><div class="progress-fill fill-high" style="width: 95%;"></div></div>
                        <div class="hero-card-notes">
                            {"✓ Cross-referenced with 3 trusted sources"}<br/>
                            {"✓ No misleading language detected"}<br/>
                            {"✓ Factually accurate"}
                        </div>
                    </div>
                    <div class="hero-card-shadow"></div>
                </div>
            </div>
            <style>
                {r#"
                .hero-section {
                    padding: 5rem 1rem;
                }
                .hero-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-copy h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    color: #111827;
                    margin: 1rem 0;
                }
                .hero-highlight {
                    color: #2563eb;
                }
                .hero-lead {
                    font-size: 1.25rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .hero-checks {
                    display: flex;
                    gap: 2rem;
                    padding-top: 1.5rem;
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .hero-card-wrapper {
                    position: relative;
                }
                .hero-card {
                    position: relative;
                    z-index: 1;
                    background: white;
                    border: 1px solid #e5e7eb;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                }
                .hero-card-shadow {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    width: 100%;
                    height: 100%;
                    background: #dbeafe;
                    border-radius: 1rem;
                }
                .hero-card-header, .hero-card-score {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .hero-card-quote {
                    background: #f9fafb;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    font-size: 0.875rem;
                    color: #374151;
                    margin-bottom: 1rem;
                }
                .hero-card-notes {
                    margin-top: 1rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                @media (max-width: 950px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero-copy h1 {
                        font-size: 2.5rem;
                    }
                    .hero-buttons {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
