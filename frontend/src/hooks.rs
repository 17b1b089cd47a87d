use std::rc::Rc;

use appointment_desk_shared::{AdminEvent, AdminViewState, NavTarget};
use yew::prelude::*;

use crate::session;

/// Admin view state plus the bookkeeping a render pass needs.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminView {
    pub state: AdminViewState,
    /// Navigation requested by the last event.
    pub navigate: Option<NavTarget>,
    /// Bumped on every event; each bump starts a fresh render pass.
    pub interaction: u64,
}

impl Reducible for AdminView {
    type Action = AdminEvent;

    fn reduce(self: Rc<Self>, event: AdminEvent) -> Rc<Self> {
        let mut state = self.state.clone();
        let navigate = state.apply(event);
        Rc::new(AdminView {
            state,
            navigate,
            interaction: self.interaction.wrapping_add(1),
        })
    }
}

/// Admin view state restored from session storage and written back after
/// every change, so it survives leaving the page and coming back.
///
/// # Example
/// ```rust,ignore
/// let view = use_admin_view();
/// let on_submit = {
///     let view = view.clone();
///     Callback::from(move |_| view.dispatch(AdminEvent::SubmitPhoneSearch))
/// };
/// ```
#[hook]
pub fn use_admin_view() -> UseReducerHandle<AdminView> {
    let view = use_reducer(|| AdminView {
        state: session::load_admin_view_state(),
        navigate: None,
        interaction: 0,
    });

    use_effect_with(view.state.clone(), |state| {
        session::save_admin_view_state(state);
        || ()
    });

    view
}

/// Callback dispatching a fixed event, for buttons.
pub fn dispatch_on_click(
    view: &UseReducerHandle<AdminView>,
    event: AdminEvent,
) -> Callback<MouseEvent> {
    let view = view.clone();
    Callback::from(move |_| view.dispatch(event.clone()))
}
