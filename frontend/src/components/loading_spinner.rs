use yew::prelude::*;

use crate::i18n::current::common as t;

#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    /// Inline, next to a heading while a pass refreshes.
    Small,
    /// Placeholder for a whole section on first load.
    Medium,
}

impl SpinnerSize {
    fn dimension(self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Medium => 40,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());
    let padding = match props.size {
        SpinnerSize::Small => "p-0",
        SpinnerSize::Medium => "p-6",
    };

    html! {
        <div
            class={classes!("inline-flex", "items-center", "justify-center", padding)}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-2",
                    "border-[var(--border)]",
                    "border-t-[var(--primary)]",
                    "animate-spin"
                )}
            />
            <span class="sr-only">{ t::LOADING }</span>
        </div>
    }
}
