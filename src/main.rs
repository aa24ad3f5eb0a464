use fitapp_web::storage::LocalStore;
use fitapp_web::{theme, App};
use log::{info, Level};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // stored or OS theme, applied before the first render
    theme::apply(theme::load(&LocalStore));

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
