use yew::prelude::*;
use log::{info, warn, Level};
use web_sys::window;

mod config;
mod phone;
mod submission;
mod tracking;
mod webhook;
mod components {
    pub mod carousel;
    pub mod lead_form;
    pub mod popup;
}
mod pages {
    pub mod landing;
}

use config::{PageConfig, MOUNT_ID};
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: PageConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing config={props.config.clone()} />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page");

    let document = window().and_then(|w| w.document());
    let root = document
        .as_ref()
        .and_then(|d| d.get_element_by_id(MOUNT_ID));

    match root {
        Some(root) => {
            let config = PageConfig::from_element(&root);
            if config.form.webhook_url.is_none() {
                warn!("No data-webhook on #{}, submissions will fail", MOUNT_ID);
            }
            yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
        }
        None => {
            warn!("#{} not found, mounting on <body> with defaults", MOUNT_ID);
            let config = document
                .and_then(|d| d.body())
                .map(|body| PageConfig::from_element(&body))
                .unwrap_or_default();
            yew::Renderer::<App>::with_props(AppProps { config }).render();
        }
    }
}
