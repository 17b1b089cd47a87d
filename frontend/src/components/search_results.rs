use appointment_desk_shared::{SearchKind, SearchResults};
use yew::prelude::*;

use crate::components::{appointment_card::AppointmentCard, error_banner::ErrorBanner};

#[derive(Properties, PartialEq)]
pub struct SearchResultsViewProps {
    pub results: SearchResults,
    pub on_dismiss: Callback<SearchKind>,
}

/// Output of one search form: nothing, an inline "not found" message, or the
/// matching appointments separated by dividers.
#[function_component(SearchResultsView)]
pub fn search_results_view(props: &SearchResultsViewProps) -> Html {
    match &props.results {
        SearchResults::Hidden => Html::default(),
        SearchResults::NotFound(message) => html! {
            <ErrorBanner message={message.clone()} dismissible={false} />
        },
        SearchResults::Found {
            kind,
            appointments,
        } => html! {
            <div class="mt-3" data-results={kind.tag()}>
                { for appointments.iter().map(|appointment| html! {
                    <div key={appointment.id}>
                        <AppointmentCard
                            appointment={appointment.clone()}
                            source={Some(*kind)}
                            on_dismiss={Some(props.on_dismiss.clone())}
                        />
                        <hr class="border-[var(--border)]" />
                    </div>
                }) }
            </div>
        },
    }
}
