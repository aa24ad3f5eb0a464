use yew::prelude::*;

use crate::interactions::current_year;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{"© "}<span id="year">{ current_year() }</span>{" Fitapp. All rights reserved."}</p>
        </footer>
    }
}
