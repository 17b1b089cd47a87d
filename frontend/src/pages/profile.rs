use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::profile as t, router::Route, session};

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_state(session::load_session);
    let signed_in = session.active_token().is_some();

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session::clear_session();
            session.set(session::load_session());
        })
    };

    html! {
        <main class="container mx-auto max-w-3xl px-4 py-10 space-y-4">
            <h2 class="text-2xl font-bold">{ t::TITLE }</h2>
            if signed_in {
                <>
                    <p>{ t::SIGNED_IN }</p>
                    <div class="flex gap-3">
                        <Link<Route>
                            to={Route::AdminActions}
                            classes="rounded-md bg-[var(--primary)] px-3 py-1.5 text-sm font-semibold text-white"
                        >
                            { t::OPEN_ADMIN }
                        </Link<Route>>
                        <button
                            type="button"
                            class="rounded-md border border-[var(--border)] px-3 py-1.5 text-sm"
                            onclick={on_sign_out}
                        >
                            { t::SIGN_OUT }
                        </button>
                    </div>
                </>
            } else {
                <p class="text-[var(--muted)]">{ t::SIGNED_OUT }</p>
            }
        </main>
    }
}
