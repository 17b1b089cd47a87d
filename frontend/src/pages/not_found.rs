use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="container mx-auto max-w-3xl px-4 py-10 space-y-3">
            <h2 class="text-2xl font-bold">{ t::TITLE }</h2>
            <p>{ t::BODY }</p>
            <Link<Route> to={Route::Profile} classes="text-[var(--primary)] underline">
                { t::BACK }
            </Link<Route>>
        </main>
    }
}
