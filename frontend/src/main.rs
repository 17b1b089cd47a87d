//! Browser dashboard for appointment desk operators.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod models;
mod pages;
mod router;
mod session;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
