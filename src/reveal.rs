use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::{Entrance, Trigger};

/// Root margin string for an observer, e.g. `-50` shrinks the bottom edge so
/// elements reveal only once they are 50px inside the viewport.
pub fn root_margin(margin_px: i32) -> String {
    format!("0px 0px {}px 0px", margin_px)
}

/// Live observer plus the JS callback it calls into. Disconnects on drop.
struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(
    element: &Element,
    once: bool,
    margin_px: i32,
    revealed: UseStateHandle<bool>,
) -> Option<ViewportObserver> {
    let on_change = revealed.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                debug!("Revealing {}", entry.target().class_name());
                on_change.set(true);
                if once {
                    observer.disconnect();
                }
            } else if !once {
                on_change.set(false);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&root_margin(margin_px));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some(ViewportObserver { observer, _callback: callback })
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable, showing content immediately: {:?}", err);
            revealed.set(true);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub entrance: Entrance,
    #[prop_or_default]
    pub delay: f32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that plays `entrance` when it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);
    let trigger = props.entrance.trigger;

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |trigger| {
                let observer = match *trigger {
                    Trigger::ViewportEntry { once, margin_px } => node
                        .cast::<Element>()
                        .and_then(|element| observe(&element, once, margin_px, revealed)),
                    Trigger::Mount => None,
                };

                move || drop(observer)
            },
            trigger,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), (*revealed).then_some("revealed"))}
            style={props.entrance.style(props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
