use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::common as t, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/profile")]
    Profile,

    #[at("/admin")]
    AdminActions,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Profile} /> },
        Route::Profile => html! { <pages::profile::ProfilePage /> },
        Route::AdminActions => html! { <pages::AdminActionsPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <header class="border-b border-[var(--border)] px-4 py-3">
                    <Link<Route> to={Route::Profile} classes="font-bold tracking-tight">
                        { t::BRAND_NAME }
                    </Link<Route>>
                </header>
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
