use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::{VisibilityState, REVEAL_THRESHOLD};

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
}

/// Wraps a content block and fades/slides it in whenever at least a tenth
/// of it intersects the viewport, back out when it leaves. Each instance
/// owns its own observer and state.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node_ref = use_node_ref();
    // use_state_eq: repeated callbacks with an unchanged ratio are no-ops.
    let visibility = use_state_eq(VisibilityState::default);

    {
        let node_ref = node_ref.clone();
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |_| {
                let mut registration: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
                )> = None;

                if let Some(element) = node_ref.cast::<web_sys::Element>() {
                    let state = visibility.clone();
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, _observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                state.set(VisibilityState::from_ratio(
                                    entry.intersection_ratio(),
                                    REVEAL_THRESHOLD,
                                ));
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));

                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            registration = Some((observer, callback));
                        }
                        Err(_) => {
                            // Hosts without viewport observation get the
                            // content shown rather than clipped invisible.
                            warn!("viewport observation unavailable, section stays visible");
                            visibility.set(VisibilityState::Visible);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = registration {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node_ref}
            class={classes!("animated-section", visibility.is_visible().then(|| "visible"))}
            style={visibility.to_css()}
        >
            { for props.children.iter() }
        </div>
    }
}
