use yew::prelude::*;

use crate::components::icons::Icon;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// Icon-badged copy card shared by the feature, benefit and reason grids.
/// Hover lift and tap shrink come from the page stylesheet.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-card-header">
                <div class="feature-card-badge">
                    { props.icon.svg("feature-card-icon") }
                </div>
                <h3>{ props.title }</h3>
            </div>
            <p>{ props.description }</p>
        </div>
    }
}
