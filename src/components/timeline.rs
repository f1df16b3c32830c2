use yew::prelude::*;

use crate::content::JourneyStep;

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub steps: &'static [JourneyStep],
}

/// Vertical journey timeline: an indigo spine, one icon badge per step and
/// content cards alternating sides on wide screens.
#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    html! {
        <div class="timeline">
            <style>
                {r#"
                    .timeline {
                        position: relative;
                        max-width: 840px;
                        margin: 0 auto;
                        padding: 1rem 0;
                    }
                    .timeline::before {
                        content: '';
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: 50%;
                        width: 4px;
                        margin-left: -2px;
                        background: #4F46E5;
                    }
                    .timeline-item {
                        position: relative;
                        width: 50%;
                        padding: 0 2.5rem 2.5rem;
                        box-sizing: border-box;
                    }
                    .timeline-item:nth-child(odd) {
                        left: 0;
                        text-align: right;
                    }
                    .timeline-item:nth-child(even) {
                        left: 50%;
                    }
                    .timeline-badge {
                        position: absolute;
                        top: 0;
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        background: #4F46E5;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 1;
                    }
                    .timeline-item:nth-child(odd) .timeline-badge {
                        right: -24px;
                    }
                    .timeline-item:nth-child(even) .timeline-badge {
                        left: -24px;
                    }
                    .timeline-badge svg {
                        width: 22px;
                        height: 22px;
                    }
                    .timeline-card {
                        background: #fff;
                        color: #333;
                        border-radius: 0.75rem;
                        padding: 1.25rem 1.5rem;
                        box-shadow: 0 3px 0 #4F46E5;
                        text-align: left;
                    }
                    .timeline-card::after {
                        content: '';
                        position: absolute;
                        top: 14px;
                        border: 7px solid transparent;
                    }
                    .timeline-item:nth-child(odd) .timeline-card::after {
                        right: 2.5rem;
                        margin-right: -14px;
                        border-left-color: #4F46E5;
                    }
                    .timeline-item:nth-child(even) .timeline-card::after {
                        left: 2.5rem;
                        margin-left: -14px;
                        border-right-color: #4F46E5;
                    }
                    .timeline-card h3 {
                        margin: 0 0 0.5rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                    }
                    .timeline-card p {
                        margin: 0 0 0.5rem;
                        color: #4b5563;
                    }
                    .timeline-card .timeline-actions {
                        margin: 0;
                        color: #6b7280;
                        font-size: 0.875rem;
                        font-style: italic;
                    }
                    @media (max-width: 768px) {
                        .timeline::before {
                            left: 24px;
                        }
                        .timeline-item,
                        .timeline-item:nth-child(odd),
                        .timeline-item:nth-child(even) {
                            width: 100%;
                            left: 0;
                            text-align: left;
                            padding: 0 1rem 2rem 4rem;
                        }
                        .timeline-item:nth-child(odd) .timeline-badge,
                        .timeline-item:nth-child(even) .timeline-badge {
                            left: 0;
                            right: auto;
                        }
                        .timeline-item:nth-child(odd) .timeline-card::after,
                        .timeline-item:nth-child(even) .timeline-card::after {
                            left: 4rem;
                            right: auto;
                            margin-left: -14px;
                            border-left-color: transparent;
                            border-right-color: #4F46E5;
                        }
                    }
                "#}
            </style>
            { for props.steps.iter().map(|step| html! {
                <div class="timeline-item" key={step.title}>
                    <div class="timeline-badge">
                        { step.icon.svg("timeline-icon") }
                    </div>
                    <div class="timeline-card">
                        <h3>{ step.title }</h3>
                        <p>{ step.description }</p>
                        { if let Some(actions) = step.actions {
                            html! {
                                <p class="timeline-actions">
                                    <strong>{"Actions: "}</strong>{ actions }
                                </p>
                            }
                        } else { html! {} } }
                    </div>
                </div>
            }) }
        </div>
    }
}
