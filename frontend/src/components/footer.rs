use chrono::Datelike;
use yew::prelude::*;

use crate::config;

const COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Product", ["Browser Extension", "Web Dashboard", "API Access", "Enterprise"]),
    ("Resources", ["Documentation", "Support", "Privacy Policy", "Terms of Service"]),
    ("Company", ["About", "Blog", "Careers", "Contact"]),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{"🛡 "}{config::PRODUCT_NAME}</div>
                    <p class="footer-muted">
                        {"Fighting misinformation with advanced AI technology and real-time fact-checking."}
                    </p>
                </div>
                { for COLUMNS.iter().map(|(heading, items)| html! {
                    <div>
                        <h3>{*heading}</h3>
                        <ul class="footer-muted">
                            { for items.iter().map(|item| html! { <li>{*item}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-bottom footer-muted">
                <p>{format!("© {} {}. All rights reserved.", year, config::PRODUCT_NAME)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: white;
                    padding: 3rem 1rem;
                }
                .footer-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .footer-grid ul {
                    list-style: none;
                    padding: 0;
                    line-height: 2;
                }
                .footer-brand {
                    font-size: 1.25rem;
                    font-weight: bold;
                    margin-bottom: 1rem;
                }
                .footer-muted {
                    color: #9ca3af;
                }
                .footer-bottom {
                    max-width: 72rem;
                    margin: 2rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
