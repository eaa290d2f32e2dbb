use yew::prelude::*;

use crate::data::Feature;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let Feature { icon, title, description } = props.feature;

    html! {
        <div class="card feature-card">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}
