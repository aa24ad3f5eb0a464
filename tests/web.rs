//! Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use fitapp_web::chat::credential;
use fitapp_web::chat::gemini::GeminiClient;
use fitapp_web::chat::transcript::{ChatMessage, Role};
use fitapp_web::chat::widget::{MessageView, MessageViewProps};
use fitapp_web::chat::ChatError;
use fitapp_web::components::toast::{use_toast, ToastHandle, ToastProvider};
use fitapp_web::config::{GEMINI_KEY_STORAGE, THEME_KEY};
use fitapp_web::interactions::use_reveal;
use fitapp_web::storage::{KeyValueStore, LocalStore};
use fitapp_web::{dom, theme};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root() -> web_sys::Element {
    let document = dom::document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

#[wasm_bindgen_test]
fn credential_round_trips_through_local_storage() {
    let saved = credential::save(&LocalStore, "  browser-key  ").unwrap();
    assert_eq!(saved, "browser-key");
    assert_eq!(credential::load(&LocalStore).as_deref(), Some("browser-key"));

    assert!(credential::save(&LocalStore, "   ").is_err());
    assert_eq!(
        LocalStore.get(GEMINI_KEY_STORAGE).as_deref(),
        Some("browser-key")
    );
}

#[wasm_bindgen_test]
fn theme_double_toggle_restores_attribute_and_storage() {
    LocalStore.set(THEME_KEY, "dark").unwrap();
    theme::apply(theme::Theme::Dark);
    let root = dom::root_element().unwrap();

    assert_eq!(theme::toggle(&LocalStore), theme::Theme::Light);
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));

    assert_eq!(theme::toggle(&LocalStore), theme::Theme::Dark);
    assert_eq!(root.get_attribute("data-theme"), None);
    assert_eq!(LocalStore.get(THEME_KEY).as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn query_helpers_tolerate_missing_elements() {
    let root = fresh_root();
    root.set_inner_html(r#"<p class="probe">a</p><p class="probe">b</p>"#);

    assert_eq!(dom::qsa_in(&root, ".probe").len(), 2);
    assert_eq!(dom::qs_in(&root, ".probe").unwrap().text_content().as_deref(), Some("a"));
    assert!(dom::qs("#definitely-not-here").is_none());
    assert!(dom::qsa("#").is_empty());
}

#[wasm_bindgen_test]
async fn message_markup_is_rendered_as_text() {
    let root = fresh_root();
    let props = MessageViewProps {
        message: ChatMessage {
            id: 0,
            role: Role::User,
            text: "<script>alert(1)</script>".to_string(),
        },
    };
    yew::Renderer::<MessageView>::with_root_and_props(root.clone(), props).render();
    TimeoutFuture::new(10).await;

    assert!(root.query_selector("script").unwrap().is_none());
    assert!(root.inner_html().contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    let bubble = dom::qs_in(&root, ".msg__bubble").unwrap();
    assert_eq!(bubble.text_content().as_deref(), Some("<script>alert(1)</script>"));
}

#[wasm_bindgen_test]
async fn missing_key_fails_before_any_request() {
    let result = GeminiClient::default().complete(None, "Hi").await;
    assert_eq!(result, Err(ChatError::MissingCredential));
}

#[derive(Clone, Default)]
struct HandleSlot(Rc<RefCell<Option<ToastHandle>>>);

impl PartialEq for HandleSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
struct SlotProps {
    slot: HandleSlot,
}

#[function_component(CaptureToast)]
fn capture_toast(props: &SlotProps) -> Html {
    *props.slot.0.borrow_mut() = use_toast();
    html! {}
}

#[function_component(ToastHarness)]
fn toast_harness(props: &SlotProps) -> Html {
    html! {
        <ToastProvider>
            <CaptureToast slot={props.slot.clone()} />
        </ToastProvider>
    }
}

#[wasm_bindgen_test]
async fn second_toast_outlives_the_first_timer() {
    let root = fresh_root();
    let slot = HandleSlot::default();
    yew::Renderer::<ToastHarness>::with_root_and_props(root.clone(), SlotProps { slot: slot.clone() }).render();
    TimeoutFuture::new(10).await;

    let toast = slot.0.borrow().clone().expect("toast context");
    toast.notify_for("first", 50);
    TimeoutFuture::new(30).await;
    toast.notify_for("second", 300);

    // well past the first toast's 50 ms
    TimeoutFuture::new(100).await;
    let el = dom::qs_in(&root, ".toast").unwrap();
    assert!(el.class_list().contains("show"));
    assert_eq!(el.text_content().as_deref(), Some("second"));

    TimeoutFuture::new(300).await;
    assert!(!el.class_list().contains("show"));
}

#[function_component(RevealHarness)]
fn reveal_harness() -> Html {
    use_reveal();
    html! {
        <div id="reveal-target" class="reveal" style="position: fixed; top: 0; left: 0; width: 100px; height: 100px;"></div>
    }
}

#[wasm_bindgen_test]
async fn reveal_marks_visible_elements() {
    let root = fresh_root();
    yew::Renderer::<RevealHarness>::with_root(root.clone()).render();
    TimeoutFuture::new(200).await;

    let target = dom::qs_in(&root, "#reveal-target").unwrap();
    assert!(target.class_list().contains("show"));
}
