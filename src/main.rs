use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod catalog;
mod config;
mod motion;
mod reveal;
mod scroll;
mod style;
mod components {
    pub mod ad_placeholder;
    pub mod app_card;
    pub mod icon;
    pub mod intro_card;
}
mod pages {
    pub mod landing;
}

use catalog::PageLayout;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
struct AppProps {
    layout: Rc<PageLayout>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing layout={props.layout.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let variant = config::page_variant();
    info!("Starting studio landing page, variant '{}'", variant);

    // A broken catalog is an authoring mistake, refuse to render anything
    let layout = match catalog::load(variant) {
        Ok(layout) => layout,
        Err(err) => {
            error!("Invalid studio catalog: {}", err);
            panic!("invalid studio catalog for variant '{}': {}", variant, err);
        }
    };

    yew::Renderer::<App>::with_props(AppProps { layout: Rc::new(layout) }).render();
}
