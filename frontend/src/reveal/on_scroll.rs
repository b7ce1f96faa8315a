use std::rc::Rc;

use yew::prelude::*;

use super::state::{RevealPolicy, RevealState};
use super::viewport::{BrowserViewport, RevealController};

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    #[prop_or_default]
    pub children: Children,
    /// Seconds to hold the entry animation back once revealed.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

pub fn reveal_style(delay: f64) -> String {
    format!("animation-delay: {}s; width: 100%", delay)
}

/// Wraps content that fades in the first time it scrolls into view.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node = use_node_ref();
    let state = use_state(RevealState::default);

    {
        let node = node.clone();
        let reveal = state.setter();
        use_effect_with_deps(
            move |_| {
                let controller = node.cast::<web_sys::Element>().map(|element| {
                    RevealController::attach(
                        Rc::new(BrowserViewport::default()),
                        &element,
                        RevealPolicy::default(),
                        move || reveal.set(RevealState::Visible),
                    )
                });
                move || drop(controller)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), (*state).css_class())}
            style={reveal_style(props.delay)}
        >
            { props.children.clone() }
        </div>
    }
}
