use std::collections::BTreeMap;

use js_sys::Array;
use log::error;
use serde::Serialize;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::components::toast::use_toast;

pub const CONTACT_SENT: &str = "Message sent. We'll get back to you soon!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    Open,
    #[default]
    Closed,
}

impl ModalState {
    pub fn aria_hidden(self) -> &'static str {
        match self {
            ModalState::Open => "false",
            ModalState::Closed => "true",
        }
    }
}

/// Text fields of `form`, by name. File inputs are skipped.
fn form_fields(form: &HtmlFormElement) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    let Ok(data) = FormData::new_with_form(form) else {
        return fields;
    };
    if let Ok(Some(entries)) = js_sys::try_iter(&data) {
        for entry in entries.flatten() {
            let pair = Array::from(&entry);
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.insert(name, value);
            }
        }
    }
    fields
}

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub state: ModalState,
    pub on_close: Callback<()>,
}

/// Contact dialog. Submitting only logs the fields to the console; nothing is
/// sent anywhere.
#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let toast = use_toast();

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(form) = e.target_dyn_into::<HtmlFormElement>() {
                let fields = form_fields(&form);
                match fields.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
                    Ok(value) => gloo_console::log!("Contact form:", value),
                    Err(e) => error!("Failed to log contact form: {}", e),
                }
            }
            on_close.emit(());
            if let Some(toast) = &toast {
                toast.notify(CONTACT_SENT);
            }
        })
    };

    html! {
        <div id="contact-modal" class="modal" aria-hidden={props.state.aria_hidden()} role="dialog" aria-modal="true" aria-labelledby="contact-title">
            <div class="modal__overlay" onclick={close.clone()}></div>
            <div class="modal__dialog">
                <button class="modal__close" data-close="modal" aria-label="Close" onclick={close.clone()}>{"✕"}</button>
                <h2 id="contact-title">{"Contact us"}</h2>
                <form id="contact-form" {onsubmit}>
                    <label>
                        {"Name"}
                        <input name="name" type="text" required=true />
                    </label>
                    <label>
                        {"Email"}
                        <input name="email" type="email" required=true />
                    </label>
                    <label>
                        {"Message"}
                        <textarea name="message" rows="4" required=true></textarea>
                    </label>
                    <div class="modal__actions">
                        <button type="button" class="btn btn--ghost" data-close="modal" onclick={close}>{"Cancel"}</button>
                        <button type="submit" class="btn">{"Send"}</button>
                    </div>
                </form>
            </div>
            <style>
                {r#"
                .modal[aria-hidden="true"] { display: none; }
                .modal { position: fixed; inset: 0; z-index: 90; display: grid; place-items: center; }
                .modal__overlay { position: absolute; inset: 0; background: rgba(0, 0, 0, .55); }
                .modal__dialog { position: relative; max-width: 480px; width: calc(100% - 32px); padding: 24px; border-radius: 16px; background: var(--surface, #161a22); }
                .modal__close { position: absolute; top: 12px; right: 12px; }
                "#}
            </style>
        </div>
    }
}
