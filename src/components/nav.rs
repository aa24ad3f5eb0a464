use web_sys::{window, Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::storage::LocalStore;
use crate::theme::{self, Theme};
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let current_theme = use_state(theme::current);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            is_scrolled.set(scroll_y > 24.0);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |_: MouseEvent| {
            current_theme.set(theme::toggle(&LocalStore));
        })
    };

    let pressed = if *current_theme == Theme::Light { "true" } else { "false" };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Fitapp"}
                </Link<Route>>

                <button class="menu-toggle" aria-label="Menu" aria-expanded={(*menu_open).to_string()} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("menu", (*menu_open).then_some("show"))}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Support} classes="nav-link">
                            {"Support"}
                        </Link<Route>>
                    </div>
                </div>
                <button class="theme-toggle" aria-label="Toggle light theme" aria-pressed={pressed} onclick={toggle_theme}>
                    { if *current_theme == Theme::Light { "☾" } else { "☀" } }
                </button>
            </div>
        </nav>
    }
}
