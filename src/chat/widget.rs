use log::{error, info};
use web_sys::{Element, HtmlInputElement};
use yew::context::ContextHandle;
use yew::prelude::*;

use super::credential::{self, CredentialError};
use super::error::ChatError;
use super::gemini::GeminiClient;
use super::state::ChatPanelState;
use super::transcript::{ChatLog, ChatMessage, PendingTurn};
use crate::components::toast::ToastHandle;
use crate::storage::LocalStore;

const KEY_SAVED: &str = "API key saved locally";

#[derive(Properties, PartialEq)]
pub struct MessageViewProps {
    pub message: ChatMessage,
}

/// A single log entry. Text goes in as a text node, so any markup in it is
/// shown literally.
#[function_component(MessageView)]
pub fn message_view(props: &MessageViewProps) -> Html {
    let ChatMessage { role, text, .. } = &props.message;
    html! {
        <div class={classes!("msg", role.class())}>
            <div class="msg__role">{ role.label() }</div>
            <div class="msg__bubble">{ text.clone() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    /// Bumped by the page's "ask the AI" buttons; any change opens the panel.
    #[prop_or_default]
    pub open_signal: u32,
}

pub enum ChatMsg {
    Toggle(Option<bool>),
    Minimize,
    ToggleSettings,
    SetKeyInput(String),
    SaveKey,
    SetInput(String),
    Submit,
    Completed(PendingTurn, Result<String, ChatError>),
    ToastChanged(ToastHandle),
}

pub struct ChatWidget {
    state: ChatPanelState,
    log: ChatLog,
    input: String,
    key_input: String,
    client: GeminiClient,
    store: LocalStore,
    toast: Option<ToastHandle>,
    _toast_listener: Option<ContextHandle<ToastHandle>>,
    log_ref: NodeRef,
}

impl ChatWidget {
    fn notify(&self, message: impl Into<String>) {
        let message: String = message.into();
        match &self.toast {
            Some(toast) => toast.notify(message),
            None => info!("toast: {}", message),
        }
    }

    fn save_key(&mut self) {
        match credential::save(&self.store, &self.key_input) {
            Ok(key) => {
                self.key_input = key;
                self.state.set_credential_ready();
                info!("Gemini API key saved");
                self.notify(KEY_SAVED);
            }
            Err(CredentialError::Empty) => self.notify(CredentialError::Empty.to_string()),
            Err(e) => {
                error!("Failed to save API key: {}", e);
                self.notify(e.to_string());
            }
        }
    }

    fn submit(&mut self, ctx: &Context<Self>) -> bool {
        let Some(turn) = self.log.begin_turn(&self.input) else {
            return false;
        };
        self.input.clear();

        let api_key = credential::load(&self.store);
        let client = self.client.clone();
        ctx.link().send_future(async move {
            let result = client.complete(api_key, &turn.prompt).await;
            ChatMsg::Completed(turn, result)
        });
        true
    }
}

impl Component for ChatWidget {
    type Message = ChatMsg;
    type Properties = ChatWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        let store = LocalStore;
        let key = credential::load(&store);
        let (toast, toast_listener) = ctx
            .link()
            .context::<ToastHandle>(ctx.link().callback(ChatMsg::ToastChanged))
            .unzip();

        Self {
            state: ChatPanelState::new(key.is_some()),
            log: ChatLog::default(),
            input: String::new(),
            key_input: key.unwrap_or_default(),
            client: GeminiClient::default(),
            store,
            toast,
            _toast_listener: toast_listener,
            log_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().open_signal != old_props.open_signal {
            self.state.toggle(Some(true));
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatMsg::Toggle(open) => {
                self.state.toggle(open);
                true
            }
            ChatMsg::Minimize => {
                self.state.toggle_minimized();
                true
            }
            ChatMsg::ToggleSettings => {
                self.state.toggle_settings();
                true
            }
            ChatMsg::SetKeyInput(value) => {
                self.key_input = value;
                false
            }
            ChatMsg::SaveKey => {
                self.save_key();
                true
            }
            ChatMsg::SetInput(value) => {
                self.input = value;
                false
            }
            ChatMsg::Submit => self.submit(ctx),
            ChatMsg::Completed(turn, result) => {
                if let Err(e) = &result {
                    error!("Chat completion failed: {}", e);
                }
                if let Some(message) = self.log.finish_turn(turn, result) {
                    self.notify(message);
                }
                true
            }
            ChatMsg::ToastChanged(toast) => {
                self.toast = Some(toast);
                false
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(log) = self.log_ref.cast::<Element>() {
            log.set_scroll_top(log.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let waiting = self.log.is_waiting();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatMsg::Submit
        });

        html! {
            <div id="ai-chat" class={self.state.root_class()}>
                <button id="ai-fab" class="ai-fab" aria-label="Chat with the assistant" onclick={link.callback(|_| ChatMsg::Toggle(None))}>
                    {"💬"}
                </button>
                <div class={self.state.window_class()} role="dialog" aria-label="AI assistant">
                    <div class="ai-chat__header">
                        <span id="ai-status" class="ai-chat__status" style={self.state.status_style()}></span>
                        <span class="ai-chat__title">{"Fitapp AI"}</span>
                        <button id="ai-settings" aria-label="Settings" onclick={link.callback(|_| ChatMsg::ToggleSettings)}>{"⚙"}</button>
                        <button id="ai-minimize" aria-label="Minimize" onclick={link.callback(|_| ChatMsg::Minimize)}>{"–"}</button>
                        <button id="ai-close" aria-label="Close" onclick={link.callback(|_| ChatMsg::Toggle(Some(false)))}>{"✕"}</button>
                    </div>
                    <div id="ai-settings-panel" class="ai-chat__settings" hidden={self.state.settings_hidden()}>
                        <label for="gemini-key">{"Gemini API key"}</label>
                        <input
                            id="gemini-key"
                            type="password"
                            autocomplete="off"
                            value={self.key_input.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                ChatMsg::SetKeyInput(input.value())
                            })}
                        />
                        <button id="save-key" type="button" onclick={link.callback(|_| ChatMsg::SaveKey)}>{"Save"}</button>
                        <p class="ai-chat__hint">{"The key is kept in this browser only."}</p>
                    </div>
                    <div id="ai-log" class="ai-chat__log" ref={self.log_ref.clone()} aria-live="polite">
                        { for self.log.messages().iter().map(|m| html! { <MessageView key={m.id} message={m.clone()} /> }) }
                    </div>
                    <form id="ai-form" class="ai-chat__form" {onsubmit}>
                        <input
                            id="ai-text"
                            type="text"
                            placeholder="Ask a question…"
                            autocomplete="off"
                            value={self.input.clone()}
                            disabled={waiting}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                ChatMsg::SetInput(input.value())
                            })}
                        />
                        <button type="submit" disabled={waiting}>{"Send"}</button>
                    </form>
                </div>
                <style>
                    {r#"
                    .ai-chat__window { display: none; }
                    .ai-chat.open .ai-chat__window { display: flex; flex-direction: column; }
                    .ai-chat__window.min .ai-chat__log,
                    .ai-chat__window.min .ai-chat__form,
                    .ai-chat__window.min .ai-chat__settings { display: none; }
                    .ai-chat__status { width: 10px; height: 10px; border-radius: 50%; display: inline-block; }
                    .ai-chat__log { overflow-y: auto; max-height: 360px; }
                    .msg--user { text-align: right; }
                    "#}
                </style>
            </div>
        }
    }
}
