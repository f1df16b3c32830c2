use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use yew::prelude::*;

use crate::motion::{WordCycle, WORD_ROTATION_MS};

#[derive(Properties, PartialEq)]
pub struct RotatingWordProps {
    pub words: Vec<String>,
    #[prop_or(WORD_ROTATION_MS)]
    pub period_ms: u32,
}

struct CycleState(Option<WordCycle>);

impl Reducible for CycleState {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(CycleState(self.0.as_ref().map(WordCycle::advanced)))
    }
}

/// Cycles through a fixed word list on a repeating timer, wrapping from the
/// last word back to the first. The word swap re-keys the span so the
/// slide-in animation replays.
#[function_component(RotatingWord)]
pub fn rotating_word(props: &RotatingWordProps) -> Html {
    let cycle = {
        let words = props.words.clone();
        use_reducer(move || match WordCycle::new(words) {
            Ok(cycle) => CycleState(Some(cycle)),
            Err(err) => {
                warn!("rotating word disabled: {err}");
                CycleState(None)
            }
        })
    };

    {
        let cycle = cycle.clone();
        use_effect_with_deps(
            move |period_ms: &u32| {
                // Teardown must cancel the repeating interval itself;
                // dropping the handle stops the ticks.
                let interval = Interval::new(*period_ms, move || cycle.dispatch(()));
                move || drop(interval)
            },
            props.period_ms,
        );
    }

    match cycle.0.as_ref() {
        Some(words) => html! {
            <span class="rotating-word" key={words.current().to_string()}>
                { words.current().to_string() }
            </span>
        },
        None => html! {},
    }
}
