use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::popup::Popup;
use crate::config::FormConfig;
use crate::phone;
use crate::submission::{PageContext, ResultPopup, Sequencer, SubmissionView};
use crate::webhook::{GlooDelay, GlooWebhook};

const SEND_ICON: &str = "M2.01 21 23 12 2.01 3 2 10l15 2-15 2z";
const CHECK_ICON: &str = "M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4z";
const INVALID_HINT: &str = "Informe um celular com DDD, por exemplo +55 (11) 98888-7777.";

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub config: FormConfig,
}

/// The pieces of component state the sequencer drives.
#[derive(Clone)]
struct FormHandles {
    input_ref: NodeRef,
    submit_enabled: UseStateHandle<bool>,
    loading: UseStateHandle<bool>,
    sent: UseStateHandle<bool>,
    message: UseStateHandle<Option<String>>,
    phone_value: UseStateHandle<String>,
    popup: UseStateHandle<Option<ResultPopup>>,
}

impl SubmissionView for FormHandles {
    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn focus_input(&self) {
        if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
            let _ = input.focus();
        }
    }

    fn show_hint(&self) {
        self.message.set(Some(INVALID_HINT.to_string()));
    }

    fn current_text(&self) -> String {
        self.input_ref
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_else(|| (*self.phone_value).clone())
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn mark_sent(&self) {
        self.sent.set(true);
    }

    fn open_popup(&self, popup: ResultPopup) {
        self.popup.set(Some(popup));
    }
}

fn caret_to_end(input: &HtmlInputElement) {
    // The mask only produces ASCII, so byte length is the UTF-16 length.
    let end = input.value().len() as u32;
    let _ = input.set_selection_range(end, end);
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let input_ref = use_node_ref();
    let phone_value = use_state(|| phone::EMPTY_FIELD.to_string());
    let submit_enabled = use_state(|| false);
    let loading = use_state(|| false);
    let sent = use_state(|| false);
    let message = use_state(|| None::<String>);
    let popup = use_state(|| None::<ResultPopup>);

    let sequencer = use_memo(
        |config| Sequencer::new(config.clone(), GlooWebhook, GlooDelay),
        props.config.clone(),
    );

    let handles = FormHandles {
        input_ref: input_ref.clone(),
        submit_enabled: submit_enabled.clone(),
        loading: loading.clone(),
        sent: sent.clone(),
        message: message.clone(),
        phone_value: phone_value.clone(),
        popup: popup.clone(),
    };

    let oninput = {
        let phone_value = phone_value.clone();
        let submit_enabled = submit_enabled.clone();
        let message = message.clone();
        let sequencer = sequencer.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let field = phone::mask_field(&input.value());
            input.set_value(&field.value);
            caret_to_end(&input);
            submit_enabled.set(field.valid && !sequencer.is_locked());
            message.set(None);
            phone_value.set(field.value);
        })
    };

    let onfocus = {
        let phone_value = phone_value.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(value) = phone::focus_field(&input.value()) {
                input.set_value(&value);
                phone_value.set(value);
            }
            caret_to_end(&input);
        })
    };

    // Keeps "+55" from being deleted.
    let onkeydown = {
        let phone_value = phone_value.clone();
        Callback::from(move |e: KeyboardEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let caret = input.selection_start().ok().flatten().unwrap_or(0);
            if let Some(value) = phone::guard_keydown(&e.key(), caret, &input.value()) {
                e.prevent_default();
                input.set_value(&value);
                caret_to_end(&input);
                phone_value.set(value);
            }
        })
    };

    let onsubmit = {
        let handles = handles.clone();
        let sequencer = sequencer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let raw = handles.current_text();
            let handles = handles.clone();
            let sequencer = sequencer.clone();
            spawn_local(async move {
                let state = sequencer
                    .submit(&handles, &raw, PageContext::current())
                    .await;
                info!("Lead form is now {:?}", state);
            });
        })
    };

    let on_close = {
        let popup = popup.clone();
        Callback::from(move |_: ()| popup.set(None))
    };

    let enabled = *submit_enabled;
    let icon = if *sent { CHECK_ICON } else { SEND_ICON };
    let label = if *sent {
        "Enviado com sucesso"
    } else {
        "Receber catálogo no WhatsApp"
    };

    html! {
        <>
            <form id="whatsapp-form" class="lead-form" onsubmit={onsubmit}>
                <label for="phone" class="phone-label">{"Seu WhatsApp"}</label>
                <input
                    ref={input_ref}
                    id="phone"
                    class="phone-input"
                    type="tel"
                    inputmode="tel"
                    autocomplete="tel"
                    value={(*phone_value).clone()}
                    oninput={oninput}
                    onfocus={onfocus}
                    onkeydown={onkeydown}
                />
                <button
                    id="submit-btn"
                    type="submit"
                    class={classes!("submit-btn", (*sent).then_some("btn-success"))}
                    disabled={!enabled}
                    aria-disabled={(!enabled).then_some("true")}
                >
                    <svg id="whatsapp-icon" class="btn-icon" viewBox="0 0 24 24" aria-hidden="true">
                        <path d={icon} />
                    </svg>
                    <span class="btn-text">{label}</span>
                </button>
                <p id="form-message" class="form-message error" hidden={message.is_none()}>
                    {(*message).clone().unwrap_or_default()}
                </p>
            </form>
            <div id="loading-overlay" class="loading-overlay" hidden={!*loading}>
                <span class="loading-spinner"></span>
            </div>
            <Popup popup={(*popup).clone()} on_close={on_close} />
        </>
    }
}
