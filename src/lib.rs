use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

pub mod chat;
pub mod config;
pub mod dom;
pub mod interactions;
pub mod storage;
pub mod theme;

pub mod components {
    pub mod contact_modal;
    pub mod faq;
    pub mod footer;
    pub mod nav;
    pub mod toast;
}
pub mod pages {
    pub mod home;
    pub mod support;
}

use components::{nav::Nav, toast::ToastProvider};
use pages::{home::Home, support::Support};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/support")]
    Support,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Support => {
            info!("Rendering Support page");
            html! { <Support /> }
        }
        Route::NotFound => {
            info!("Unknown route, showing Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}
