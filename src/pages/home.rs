use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::interactions::{use_gallery_wheel, use_reveal, use_smooth_scroll, use_tilt};
use crate::Route;

const FEATURES: &[(&str, &str)] = &[
    ("Smart plans", "Workouts that adapt to your progress week after week."),
    ("Nutrition", "Simple meal tracking without counting every gram."),
    ("Recovery", "Sleep and rest insights so you train when it counts."),
];

const GALLERY: &[&str] = &["Strength", "Mobility", "Running", "Yoga", "HIIT", "Cycling"];

#[function_component(Home)]
pub fn home() -> Html {
    use_reveal();
    use_tilt();
    use_smooth_scroll();
    use_gallery_wheel();

    html! {
        <div class="landing">
            <section class="hero">
                <h1>{"Train smarter with Fitapp"}</h1>
                <p>{"Your coach, your tracker and your motivation in one app."}</p>
                <a class="btn" href="#features">{"Discover the features"}</a>
            </section>

            <section id="features" class="features">
                {
                    for FEATURES.iter().map(|(title, text)| html! {
                        <article class="card reveal tilt">
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </article>
                    })
                }
            </section>

            <section class="gallery reveal">
                <h2>{"Every kind of workout"}</h2>
                <div class="gallery__track">
                    { for GALLERY.iter().map(|item| html! { <div class="gallery__item">{ *item }</div> }) }
                </div>
            </section>

            <section class="cta reveal">
                <h2>{"Questions?"}</h2>
                <p>{"Browse the FAQ or ask our assistant."}</p>
                <Link<Route> to={Route::Support} classes="btn">
                    {"Go to support"}
                </Link<Route>>
            </section>

            <Footer />

            <style>
                {r#"
                .reveal { opacity: 0; transform: translateY(16px); transition: opacity .6s ease, transform .6s ease; }
                .reveal.show { opacity: 1; transform: none; }
                .tilt { transform: translateY(-2px); transition: transform .15s ease; }
                .gallery__track { display: flex; gap: 16px; overflow-x: auto; scroll-snap-type: x mandatory; }
                .gallery__item { flex: 0 0 240px; scroll-snap-align: start; }
                "#}
            </style>
        </div>
    }
}
