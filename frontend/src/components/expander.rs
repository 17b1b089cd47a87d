use std::rc::Rc;

use appointment_desk_shared::pagination::{clamp_page, page_slice, total_pages, PAGE_SIZE};
use yew::prelude::*;

use crate::{
    components::pagination::Pagination,
    i18n::{current::expander as t, fill_one, fill_two},
};

#[derive(Properties, PartialEq)]
pub struct ExpanderWithPaginationProps<T>
where
    T: PartialEq,
{
    pub label: AttrValue,
    pub items: Rc<Vec<T>>,
    pub render_item: Callback<T, Html>,
    /// Controlled open state; the owner persists it.
    pub open: bool,
    /// Controlled 1-based page.
    pub page: usize,
    pub on_toggle: Callback<bool>,
    pub on_page_change: Callback<usize>,
}

/// Collapsible panel that shows `items` one page at a time.
#[function_component(ExpanderWithPagination)]
pub fn expander_with_pagination<T>(props: &ExpanderWithPaginationProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    let total = total_pages(props.items.len(), PAGE_SIZE);
    let page = clamp_page(props.page, total);

    let on_header_click = {
        let on_toggle = props.on_toggle.clone();
        let open = props.open;
        Callback::from(move |_: MouseEvent| on_toggle.emit(!open))
    };

    let body = if !props.open {
        Html::default()
    } else if props.items.is_empty() {
        html! { <p class="px-4 py-3 text-sm text-[var(--muted)]">{ t::EMPTY }</p> }
    } else {
        html! {
            <div class="px-4 pb-4">
                <div class="divide-y divide-[var(--border)]">
                    { for page_slice(&props.items, page, PAGE_SIZE)
                        .iter()
                        .cloned()
                        .map(|item| props.render_item.emit(item)) }
                </div>
                <div class="flex flex-wrap items-center justify-between gap-2">
                    <Pagination
                        current_page={page}
                        total_pages={total}
                        on_page_change={props.on_page_change.clone()}
                    />
                    <span class="pt-3 text-xs text-[var(--muted)]">
                        { fill_two(t::PAGE_TEMPLATE, page, total) }
                    </span>
                </div>
            </div>
        }
    };

    html! {
        <section class="rounded-lg border border-[var(--border)] bg-[var(--surface)]">
            <button
                type="button"
                class="flex w-full items-center justify-between px-4 py-3 text-left font-semibold"
                aria-expanded={props.open.to_string()}
                onclick={on_header_click}
            >
                <span>{ props.label.clone() }</span>
                <span class="flex items-center gap-3">
                    <span class="rounded-full bg-[var(--surface-alt)] px-2 py-0.5 text-xs text-[var(--muted)]">
                        { fill_one(t::COUNT_TEMPLATE, props.items.len()) }
                    </span>
                    <span aria-hidden="true">{ if props.open { "▾" } else { "▸" } }</span>
                </span>
            </button>
            { body }
        </section>
    }
}
