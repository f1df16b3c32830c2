use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct WaitlistButtonProps {
    pub label: &'static str,
    #[prop_or_default]
    pub classes: Classes,
}

/// Call-to-action button. The data attributes are picked up by the
/// externally embedded Tally script, which opens the signup overlay; the
/// button itself carries no click handler.
#[function_component(WaitlistButton)]
pub fn waitlist_button(props: &WaitlistButtonProps) -> Html {
    html! {
        <button
            class={props.classes.clone()}
            data-tally-open={config::get_waitlist_form_id()}
            data-tally-emoji-text={config::WAITLIST_EMOJI}
            data-tally-emoji-animation={config::WAITLIST_EMOJI_ANIMATION}
        >
            { props.label }
        </button>
    }
}
