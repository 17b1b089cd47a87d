use appointment_desk_shared::{Appointment, SearchKind};
use yew::prelude::*;

use crate::i18n::current::appointment_card as t;

#[derive(Properties, PartialEq)]
pub struct AppointmentCardProps {
    pub appointment: Appointment,
    /// Search that produced this card; `None` inside the all-appointments list.
    #[prop_or_default]
    pub source: Option<SearchKind>,
    /// Hides the result list named by the card's dismiss key.
    #[prop_or_default]
    pub on_dismiss: Option<Callback<SearchKind>>,
}

fn source_label(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::Phone => t::SOURCE_PHONE,
        SearchKind::MonthYear => t::SOURCE_MONTH_YEAR,
    }
}

#[function_component(AppointmentCard)]
pub fn appointment_card(props: &AppointmentCardProps) -> Html {
    let appointment = &props.appointment;
    let when = match appointment.time.as_deref() {
        Some(time) => format!("{} {}", appointment.date, time),
        None => appointment.date.clone(),
    };

    let dismiss_button = match (props.source, props.on_dismiss.clone()) {
        (Some(kind), Some(on_dismiss)) => {
            let onclick = Callback::from(move |_: MouseEvent| on_dismiss.emit(kind));
            html! {
                <button
                    type="button"
                    class="text-xs text-[var(--muted)] underline hover:text-[var(--primary)]"
                    data-dismiss-key={kind.dismiss_key()}
                    {onclick}
                >
                    { t::DISMISS }
                </button>
            }
        },
        _ => Html::default(),
    };

    html! {
        <article
            class="py-3 text-sm"
            data-source={props.source.map(|kind| AttrValue::from(kind.tag()))}
        >
            <div class="flex items-center justify-between gap-2">
                <div class="flex items-center gap-2">
                    <span class="font-semibold">
                        { appointment.name.clone().unwrap_or_else(|| format!("#{}", appointment.id)) }
                    </span>
                    if let Some(kind) = props.source {
                        <span class="rounded-full bg-[var(--surface-alt)] px-2 py-0.5 text-xs text-[var(--muted)]">
                            { source_label(kind) }
                        </span>
                    }
                </div>
                { dismiss_button }
            </div>
            <dl class="mt-1 grid grid-cols-[auto_1fr] gap-x-3 text-[var(--muted)]">
                <dt>{ t::PHONE }</dt>
                <dd>{ appointment.phone_number.clone() }</dd>
                <dt>{ t::WHEN }</dt>
                <dd>{ when }</dd>
                if let Some(service) = appointment.service.as_deref() {
                    <>
                        <dt>{ t::SERVICE }</dt>
                        <dd>{ service }</dd>
                    </>
                }
                if let Some(notes) = appointment.notes.as_deref() {
                    <>
                        <dt>{ t::NOTES }</dt>
                        <dd>{ notes }</dd>
                    </>
                }
            </dl>
        </article>
    }
}

/// Render helper handed to the paged all-appointments list.
pub fn render_appointment(appointment: Appointment) -> Html {
    let key = appointment.id;
    html! { <AppointmentCard key={key} appointment={appointment} /> }
}
