use appointment_desk_shared::User;
use yew::prelude::*;

use crate::i18n::current::user_card as t;

#[derive(Properties, PartialEq)]
pub struct UserCardProps {
    pub user: User,
}

#[function_component(UserCard)]
pub fn user_card(props: &UserCardProps) -> Html {
    let user = &props.user;

    html! {
        <article class="py-3 text-sm">
            <div class="flex items-center gap-2">
                <span class="font-semibold">{ user.username.clone() }</span>
                <span class="text-xs text-[var(--muted)]">{ format!("#{}", user.id) }</span>
                if user.is_admin {
                    <span class="rounded-full bg-sky-500/15 px-2 py-0.5 text-xs font-semibold uppercase text-sky-700">
                        { t::ADMIN_BADGE }
                    </span>
                }
            </div>
            <dl class="mt-1 grid grid-cols-[auto_1fr] gap-x-3 text-[var(--muted)]">
                <dt>{ t::EMAIL }</dt>
                <dd>{ user.email.as_deref().unwrap_or(t::MISSING) }</dd>
                <dt>{ t::PHONE }</dt>
                <dd>{ user.phone_number.as_deref().unwrap_or(t::MISSING) }</dd>
            </dl>
        </article>
    }
}

/// Render helper handed to the paged users list.
pub fn render_user(user: User) -> Html {
    let key = user.id;
    html! { <UserCard key={key} user={user} /> }
}
