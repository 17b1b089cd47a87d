use yew::{prelude::*, use_effect_with};
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    /// Bold first line; inline search messages leave it out.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(false)]
    pub auto_dismiss: bool,
    #[prop_or(true)]
    pub dismissible: bool,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 5000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let close_button = if props.dismissible {
        let dismiss = dismiss.clone();
        html! {
            <button
                type="button"
                class={classes!(
                    "ml-4",
                    "inline-flex",
                    "h-7",
                    "w-7",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "text-lg",
                    "hover:bg-black/10"
                )}
                aria-label={t::CLOSE_ARIA}
                onclick={Callback::from(move |_| dismiss.emit(()))}
            >
                {"×"}
            </button>
        }
    } else {
        Html::default()
    };

    html! {
        <div
            class={classes!(
                "error-banner",
                "flex",
                "items-start",
                "gap-3",
                "rounded-lg",
                "border",
                "border-red-500/30",
                "bg-red-500/10",
                "px-4",
                "py-3",
                "text-sm",
                "text-red-700",
                "w-full"
            )}
            role="alert"
            aria-live="assertive"
        >
            <div class="flex-1 space-y-1">
                if let Some(title) = props.title.clone() {
                    <p class="font-semibold">{ title }</p>
                }
                <p>{ props.message.clone() }</p>
            </div>
            { close_button }
        </div>
    }
}

/// Title used for failed render passes.
pub fn load_error_title() -> AttrValue {
    AttrValue::from(t::TITLE)
}
