use std::rc::Rc;

use appointment_desk_shared::{
    render_pass, view_state::MAX_YEAR, AdminActionsSnapshot, AdminEvent, Appointment, ListPanel,
    NavTarget, PageOutcome, SearchKind, SearchResults, User, LOGIN_WARNING,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::BrowserAdminApi,
    components::{
        appointment_card::render_appointment,
        error_banner::{load_error_title, ErrorBanner},
        expander::ExpanderWithPagination,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        search_results::SearchResultsView,
        user_card::render_user,
    },
    hooks::{dispatch_on_click, use_admin_view},
    i18n::{current::admin_actions as t, fill_one},
    router::Route,
    session,
};

fn button_classes(primary: bool) -> Classes {
    let base = classes!(
        "inline-flex",
        "items-center",
        "rounded-md",
        "px-3",
        "py-1.5",
        "text-sm",
        "font-semibold",
        "transition-colors"
    );
    if primary {
        classes!(base, "bg-[var(--primary)]", "text-white", "hover:opacity-90")
    } else {
        classes!(
            base,
            "border",
            "border-[var(--border)]",
            "text-[var(--text)]",
            "hover:border-[var(--primary)]"
        )
    }
}

fn input_value(event: &Event) -> Option<String> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|target| target.value())
}

#[function_component(AdminActionsPage)]
pub fn admin_actions_page() -> Html {
    let session = use_memo((), |_| session::load_session());
    let view = use_admin_view();
    let navigator = use_navigator();

    let snapshot = use_state(|| None::<Rc<AdminActionsSnapshot>>);
    let load_error = use_state(|| None::<String>);
    let loading = use_state(|| true);
    // Request sequence guard so a slow pass never overwrites a newer one.
    let pass_seq = use_mut_ref(|| 0_u64);

    {
        let navigate = view.navigate;
        use_effect_with(view.interaction, move |_| {
            if let (Some(NavTarget::Profile), Some(navigator)) = (navigate, navigator) {
                navigator.push(&Route::Profile);
            }
            || ()
        });
    }

    {
        let session = session.clone();
        let state = view.state.clone();
        let snapshot = snapshot.clone();
        let load_error = load_error.clone();
        let loading = loading.clone();
        let pass_seq = pass_seq.clone();
        use_effect_with(view.interaction, move |_| {
            let request_id = {
                let mut seq = pass_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = render_pass(&BrowserAdminApi, &session, &state).await;
                if *pass_seq.borrow() != request_id {
                    return;
                }
                match result {
                    Ok(PageOutcome::Ready(data)) => {
                        snapshot.set(Some(Rc::new(data)));
                        load_error.set(None);
                    },
                    Ok(PageOutcome::LoginRequired(_)) => snapshot.set(None),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("Admin render pass failed: {}", err).into(),
                        );
                        load_error.set(Some(fill_one(t::LOAD_FAILED_TEMPLATE, err)));
                        // Earlier matches no longer describe the current inputs.
                        if let Some(previous) = (*snapshot).as_ref() {
                            snapshot.set(Some(Rc::new(previous.without_searches())));
                        }
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    if session.active_token().is_none() {
        return html! {
            <main class="container mx-auto max-w-3xl px-4 py-10">
                <div
                    class="rounded-lg border border-amber-500/30 bg-amber-500/10 px-4 py-3 text-sm text-amber-800"
                    role="alert"
                >
                    { LOGIN_WARNING }
                </div>
            </main>
        };
    }

    let state = &view.state;

    let on_toggle = |panel: ListPanel| {
        let view = view.clone();
        Callback::from(move |open: bool| view.dispatch(AdminEvent::SetExpanded(panel, open)))
    };
    let on_page_change = |panel: ListPanel| {
        let view = view.clone();
        Callback::from(move |page: usize| view.dispatch(AdminEvent::ChangePage(panel, page)))
    };
    let on_dismiss = {
        let view = view.clone();
        Callback::from(move |kind: SearchKind| view.dispatch(AdminEvent::DismissResults(kind)))
    };

    let on_phone_change = {
        let view = view.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = input_value(&event) {
                view.dispatch(AdminEvent::PhoneInput(value));
            }
        })
    };
    let on_month_change = {
        let view = view.clone();
        Callback::from(move |event: Event| {
            if let Some(month) = input_value(&event).and_then(|v| v.trim().parse::<i64>().ok()) {
                view.dispatch(AdminEvent::MonthInput(month));
            }
        })
    };
    let on_year_change = {
        let view = view.clone();
        Callback::from(move |event: Event| {
            if let Some(year) = input_value(&event).and_then(|v| v.trim().parse::<i64>().ok()) {
                view.dispatch(AdminEvent::YearInput(year));
            }
        })
    };

    let (users, appointments, phone_results, month_year_results) = match snapshot.as_ref() {
        Some(data) => (
            Rc::new(data.users.clone()),
            Rc::new(data.appointments.clone()),
            data.phone_results.clone(),
            data.month_year_results.clone(),
        ),
        None => (Rc::default(), Rc::default(), SearchResults::Hidden, SearchResults::Hidden),
    };
    let first_load = snapshot.is_none() && *loading;

    html! {
        <main class="container mx-auto max-w-4xl px-4 py-8 space-y-6">
            <div class="grid grid-cols-[2fr_2fr_1fr] items-center gap-4">
                <h2 class="flex items-center gap-3 text-2xl font-bold">
                    { t::TITLE }
                    if *loading && !first_load {
                        <LoadingSpinner size={SpinnerSize::Small} />
                    }
                </h2>
                <div />
                <div class="flex justify-end">
                    <button
                        type="button"
                        class={button_classes(false)}
                        onclick={dispatch_on_click(&view, AdminEvent::BackToProfile)}
                    >
                        { t::BACK_TO_PROFILE }
                    </button>
                </div>
            </div>

            if let Some(message) = (*load_error).clone() {
                <ErrorBanner
                    {message}
                    title={Some(load_error_title())}
                    on_close={{
                        let load_error = load_error.clone();
                        Callback::from(move |_| load_error.set(None))
                    }}
                />
            }

            <hr class="border-[var(--border)]" />

            <section class="space-y-3">
                <h3 class="text-lg font-semibold">{ t::ALL_USERS }</h3>
                if first_load {
                    <LoadingSpinner />
                } else {
                    <ExpanderWithPagination<User>
                        label={t::SHOW_USERS}
                        items={users}
                        render_item={Callback::from(render_user)}
                        open={state.is_expanded(ListPanel::Users)}
                        page={state.page_of(ListPanel::Users)}
                        on_toggle={on_toggle(ListPanel::Users)}
                        on_page_change={on_page_change(ListPanel::Users)}
                    />
                }
            </section>

            <hr class="border-[var(--border)]" />

            <section class="space-y-3">
                <h3 class="text-lg font-semibold">{ t::ALL_APPOINTMENTS }</h3>
                if first_load {
                    <LoadingSpinner />
                } else {
                    <ExpanderWithPagination<Appointment>
                        label={t::SHOW_ALL_APPOINTMENTS}
                        items={appointments}
                        render_item={Callback::from(render_appointment)}
                        open={state.is_expanded(ListPanel::AllAppointments)}
                        page={state.page_of(ListPanel::AllAppointments)}
                        on_toggle={on_toggle(ListPanel::AllAppointments)}
                        on_page_change={on_page_change(ListPanel::AllAppointments)}
                    />
                }
            </section>

            <hr class="border-[var(--border)]" />

            <section class="space-y-3">
                <h3 class="text-lg font-semibold">{ t::BY_PHONE }</h3>
                <label class="block text-sm">
                    <span class="mb-1 block text-[var(--muted)]">{ t::PHONE_LABEL }</span>
                    <input
                        type="tel"
                        class="w-full rounded-md border border-[var(--border)] px-3 py-2"
                        value={state.phone_num.clone()}
                        onchange={on_phone_change}
                    />
                </label>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class={button_classes(false)}
                        onclick={dispatch_on_click(&view, AdminEvent::ResetPhoneSearch)}
                    >
                        { t::RESET }
                    </button>
                    <button
                        type="button"
                        class={button_classes(true)}
                        onclick={dispatch_on_click(&view, AdminEvent::SubmitPhoneSearch)}
                    >
                        { t::GET_APPOINTMENTS }
                    </button>
                </div>
                <SearchResultsView results={phone_results} on_dismiss={on_dismiss.clone()} />
            </section>

            <section class="space-y-3">
                <h3 class="text-lg font-semibold">{ t::BY_MONTH_YEAR }</h3>
                <div class="grid grid-cols-2 gap-4">
                    <label class="block text-sm">
                        <span class="mb-1 block text-[var(--muted)]">{ t::MONTH_LABEL }</span>
                        <input
                            type="number"
                            min="1"
                            max="12"
                            step="1"
                            class="w-full rounded-md border border-[var(--border)] px-3 py-2"
                            value={state.month.to_string()}
                            onchange={on_month_change}
                        />
                    </label>
                    <label class="block text-sm">
                        <span class="mb-1 block text-[var(--muted)]">{ t::YEAR_LABEL }</span>
                        <input
                            type="number"
                            min={state.min_year.to_string()}
                            max={MAX_YEAR.to_string()}
                            step="1"
                            class="w-full rounded-md border border-[var(--border)] px-3 py-2"
                            value={state.year.to_string()}
                            onchange={on_year_change}
                        />
                    </label>
                </div>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class={button_classes(false)}
                        onclick={dispatch_on_click(&view, AdminEvent::ResetMonthYearSearch)}
                    >
                        { t::RESET }
                    </button>
                    <button
                        type="button"
                        class={button_classes(true)}
                        onclick={dispatch_on_click(&view, AdminEvent::SubmitMonthYearSearch)}
                    >
                        { t::GET_APPOINTMENTS }
                    </button>
                </div>
                <SearchResultsView results={month_year_results} {on_dismiss} />
            </section>
        </main>
    }
}
