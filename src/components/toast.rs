use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
}

pub enum ToastAction {
    Show(String),
    Hide,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(message) => Rc::new(ToastState {
                message,
                visible: true,
            }),
            // the text stays so the fade-out still has something to show
            ToastAction::Hide => Rc::new(ToastState {
                message: self.message.clone(),
                visible: false,
            }),
        }
    }
}

/// Handed out through context by [`ToastProvider`].
#[derive(Clone)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastState>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl PartialEq for ToastHandle {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher && Rc::ptr_eq(&self.timer, &other.timer)
    }
}

impl ToastHandle {
    pub fn notify(&self, message: impl Into<String>) {
        self.notify_for(message, TOAST_DURATION_MS);
    }

    /// Shows `message` for `duration_ms`. A toast already on screen is
    /// replaced and its timer cancelled.
    pub fn notify_for(&self, message: impl Into<String>, duration_ms: u32) {
        self.dispatcher.dispatch(ToastAction::Show(message.into()));
        let dispatcher = self.dispatcher.clone();
        let hide = Timeout::new(duration_ms, move || dispatcher.dispatch(ToastAction::Hide));
        // dropping the previous Timeout cancels it
        *self.timer.borrow_mut() = Some(hide);
    }
}

/// Toast handle from context, or `None` outside a [`ToastProvider`].
#[hook]
pub fn use_toast() -> Option<ToastHandle> {
    use_context::<ToastHandle>()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);
    let timer = use_mut_ref(|| None::<Timeout>);

    let handle = ToastHandle {
        dispatcher: state.dispatcher(),
        timer,
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { for props.children.iter() }
            <div id="toast" class={classes!("toast", state.visible.then_some("show"))} role="status" aria-live="polite">
                { state.message.clone() }
            </div>
            <style>
                {r#"
                .toast {
                    position: fixed;
                    left: 50%;
                    bottom: 24px;
                    transform: translate(-50%, 20px);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity .25s ease, transform .25s ease;
                    z-index: 100;
                }
                .toast.show {
                    opacity: 1;
                    transform: translate(-50%, 0);
                }
                "#}
            </style>
        </ContextProvider<ToastHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_text_and_hide_keeps_it() {
        let state = Rc::new(ToastState::default());
        let state = state.reduce(ToastAction::Show("first".into()));
        let state = state.reduce(ToastAction::Show("second".into()));
        assert_eq!(
            *state,
            ToastState {
                message: "second".into(),
                visible: true
            }
        );
        let state = state.reduce(ToastAction::Hide);
        assert!(!state.visible);
        assert_eq!(state.message, "second");
    }
}
