use yew::prelude::*;

use crate::chat::ChatWidget;
use crate::components::contact_modal::{ContactModal, ModalState};
use crate::components::faq::FaqItem;
use crate::components::footer::Footer;
use crate::interactions::{use_reveal, use_smooth_scroll};

#[function_component(Support)]
pub fn support() -> Html {
    use_reveal();
    use_smooth_scroll();

    let modal = use_state(ModalState::default);
    let chat_signal = use_state(|| 0u32);

    let open_contact = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(ModalState::Open))
    };
    let close_contact = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalState::Closed))
    };
    let open_chat = {
        let chat_signal = chat_signal.clone();
        Callback::from(move |_: MouseEvent| chat_signal.set(chat_signal.wrapping_add(1)))
    };

    html! {
        <div class="support">
            <section class="hero reveal">
                <h1>{"Support"}</h1>
                <p>{"Find an answer in the FAQ, write to us or ask the assistant."}</p>
                <div class="hero__actions">
                    <button id="open-contact" class="btn" onclick={open_contact.clone()}>{"Contact us"}</button>
                    <button id="open-ai-chat" class="btn btn--ghost" onclick={open_chat.clone()}>{"Ask the AI"}</button>
                    <a class="btn btn--link" href="#faq">{"Read the FAQ"}</a>
                </div>
            </section>

            <section id="faq" class="faq reveal">
                <h2>{"Frequently asked questions"}</h2>
                <FaqItem question="How do I reset my password?">
                    <p>{"Open the login screen, choose \"Forgot password\" and follow the link we email you."}</p>
                </FaqItem>
                <FaqItem question="Can I use Fitapp offline?">
                    <p>{"Workouts you have opened once are cached and can be followed without a connection. Progress syncs when you are back online."}</p>
                </FaqItem>
                <FaqItem question="How do I cancel my subscription?">
                    <p>{"Subscriptions are managed by the store you bought them from. Cancel there and you keep access until the end of the period."}</p>
                </FaqItem>
                <FaqItem question="Is my health data shared?">
                    <p>{"No. Your data stays in your account and is never sold or shared with third parties."}</p>
                </FaqItem>
            </section>

            <section class="contact reveal">
                <h2>{"Still stuck?"}</h2>
                <div class="contact__actions">
                    <button id="open-contact-2" class="btn" onclick={open_contact}>{"Write to us"}</button>
                    <button id="open-ai-chat-2" class="btn btn--ghost" onclick={open_chat}>{"Chat with the AI"}</button>
                </div>
            </section>

            <Footer />

            <ContactModal state={*modal} on_close={close_contact} />
            <ChatWidget open_signal={*chat_signal} />

            <style>
                {r#"
                .faq__item .faq__a { display: none; }
                .faq__item[aria-expanded="true"] .faq__a { display: block; }
                .reveal { opacity: 0; transform: translateY(16px); transition: opacity .6s ease, transform .6s ease; }
                .reveal.show { opacity: 1; transform: none; }
                "#}
            </style>
        </div>
    }
}
