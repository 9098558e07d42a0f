use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::submission::{PopupKind, ResultPopup};

#[derive(Properties, PartialEq)]
pub struct PopupProps {
    pub popup: Option<ResultPopup>,
    pub on_close: Callback<()>,
}

#[function_component(Popup)]
pub fn popup(props: &PopupProps) -> Html {
    // Escape closes the popup from anywhere on the page.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let listener = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let Some(popup) = props.popup.as_ref() else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let mode = match popup.kind {
        PopupKind::Success => "popup-success",
        PopupKind::Error => "popup-error",
    };
    let href = if popup.link_href.is_empty() {
        "#".to_string()
    } else {
        popup.link_href.clone()
    };
    let link_text = if popup.link_text.is_empty() {
        "Acessar".to_string()
    } else {
        popup.link_text.clone()
    };

    html! {
        <div id="form-popup" class={classes!("popup", mode)} role="dialog" aria-modal="true">
            <div class="popup-backdrop" onclick={close.clone()}></div>
            <div class="popup-card">
                <button type="button" class="popup-close" data-close="" aria-label="Fechar" onclick={close}>
                    {"×"}
                </button>
                if let Some(src) = popup.illustration.clone() {
                    <img class="popup-illustration" src={src} alt="" />
                }
                <h2 class="popup-title">{popup.title.clone()}</h2>
                <p class="popup-message">{popup.message.clone()}</p>
                <a id="popup-link" class="popup-link" href={href} target="_blank" rel="noopener">
                    {link_text}
                </a>
            </div>
        </div>
    }
}
