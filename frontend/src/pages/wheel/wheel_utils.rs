use shared::theme::Theme;
use web_sys::window;
use yew::prelude::*;

use crate::styles;

/// Milliseconds on the same clock `requestAnimationFrame` hands to its callbacks.
pub fn performance_now() -> Option<f64> {
    window().and_then(|w| w.performance()).map(|p| p.now())
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<String>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(result) = &props.result else {
        return html! {};
    };

    html! {
        <div class="mt-8 mb-4 flex flex-col items-center justify-center">
            <p class={styles::TEXT_SECONDARY}>{"The wheel has spoken:"}</p>
            <div class={classes!(styles::RESULT_BADGE, "animate-bounce")}>
                <span>{result}</span>
            </div>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub has_labels: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "Spinning..."
    } else if !props.has_labels {
        "Add an option to spin"
    } else {
        "Spin"
    };

    let is_disabled = props.is_spinning || !props.has_labels;
    let button_class = if is_disabled {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={is_disabled}
            class={button_class}
        >
            {button_text}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct LabelListProps {
    pub labels: Vec<String>,
    pub locked: bool,
    pub on_remove: Callback<usize>,
}

#[function_component(LabelList)]
pub fn label_list(props: &LabelListProps) -> Html {
    if props.labels.is_empty() {
        return html! {
            <p class={styles::TEXT_HINT}>{"No options yet."}</p>
        };
    }

    html! {
        <ul class={styles::LABEL_LIST}>
            { for props.labels.iter().enumerate().map(|(index, label)| {
                let on_remove = props.on_remove.clone();
                html! {
                    <li class={styles::LABEL_ITEM}>
                        <span class="truncate">{label}</span>
                        <button
                            title="Remove label"
                            disabled={props.locked}
                            class={styles::REMOVE_BUTTON}
                            onclick={move |_: MouseEvent| on_remove.emit(index)}
                        >
                            {"✖"}
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    html! {
        <button
            title="Toggle dark mode"
            class={styles::BUTTON_ICON}
            onclick={props.onclick.clone()}
        >
            {props.theme.toggle_icon()}
        </button>
    }
}
