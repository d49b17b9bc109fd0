mod confetti_canvas;
mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::{debug, warn};
use shared::preferences::PreferenceStore;
use shared::shared_wheel_game::{SpinStep, WheelController};
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::config::APP_TITLE;
use crate::hooks::use_theme_class::use_theme_class;
use crate::storage::LocalStore;
use crate::styles;

// Import components and utilities from our modules
use confetti_canvas::ConfettiOverlay;
use wheel_canvas::WheelCanvas;
use wheel_utils::{performance_now, LabelList, ResultDisplay, SpinButton, ThemeToggle};

type SharedController = Rc<RefCell<WheelController<LocalStore>>>;
type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Drives the controller once per display refresh until the spin settles.
fn schedule_spin_frame<S: PreferenceStore + 'static>(
    controller: Rc<RefCell<WheelController<S>>>,
    frame: FrameSlot,
    on_step: Callback<SpinStep>,
) {
    let next = frame.clone();
    let handle = request_animation_frame(move |timestamp| {
        let step = controller.borrow_mut().step(timestamp);
        let keep_going = step == SpinStep::Continue;
        on_step.emit(step);
        if keep_going {
            schedule_spin_frame(controller, next, on_step);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

#[function_component(WheelWizard)]
pub fn wheel_wizard() -> Html {
    let controller: SharedController = use_mut_ref(|| WheelController::load(LocalStore));
    let frame: FrameSlot = use_mut_ref(|| None);
    let refresh = use_force_update();
    let result = use_state(|| None::<String>);
    let show_confetti = use_state(|| false);
    let input_ref = use_node_ref();

    let (labels, rotation, theme, is_spinning) = {
        let controller = controller.borrow();
        (
            controller.labels().to_vec(),
            controller.rotation(),
            controller.theme(),
            controller.is_spinning(),
        )
    };

    use_theme_class(theme);

    // Stop any running animation when the page goes away
    {
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                frame.borrow_mut().take();
            }
        });
    }

    let on_step = {
        let result = result.clone();
        let show_confetti = show_confetti.clone();
        let refresh = refresh.clone();
        Callback::from(move |step: SpinStep| {
            if let SpinStep::Done(label) = step {
                result.set(Some(label));
                show_confetti.set(true);
            }
            refresh.force_update();
        })
    };

    let on_spin = {
        let controller = controller.clone();
        let frame = frame.clone();
        let result = result.clone();
        let show_confetti = show_confetti.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(now) = performance_now() else {
                warn!("No performance clock, cannot animate spin");
                return;
            };
            if !controller.borrow_mut().spin(now) {
                return;
            }

            result.set(None);
            show_confetti.set(false);
            refresh.force_update();
            schedule_spin_frame(controller.clone(), frame.clone(), on_step.clone());
        })
    };

    let on_add = {
        let controller = controller.clone();
        let input_ref = input_ref.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            if controller.borrow_mut().add_label(&input.value()) {
                input.set_value("");
                refresh.force_update();
            } else {
                debug!("Label not added");
            }
        })
    };

    let on_add_click = on_add.reform(|_: MouseEvent| ());

    let on_keypress = {
        let on_add = on_add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_add.emit(());
            }
        })
    };

    let on_remove = {
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |index: usize| {
            if controller.borrow_mut().remove_label(index) {
                refresh.force_update();
            }
        })
    };

    let on_toggle_theme = {
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            controller.borrow_mut().toggle_theme();
            refresh.force_update();
        })
    };

    let on_confetti_finished = {
        let show_confetti = show_confetti.clone();
        Callback::from(move |_: ()| show_confetti.set(false))
    };

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_SM}>
                <header class={styles::HEADER}>
                    <h1 class={styles::TEXT_H1}>{APP_TITLE}</h1>
                    <ThemeToggle theme={theme} onclick={on_toggle_theme} />
                </header>

                <section class={classes!(styles::CARD, "mb-6")}>
                    <p class={styles::TEXT_LABEL}>{"Options"}</p>
                    <div class="flex gap-2">
                        <input
                            id="labelInput"
                            ref={input_ref}
                            type="text"
                            placeholder="Add an option"
                            class={styles::INPUT}
                            disabled={is_spinning}
                            onkeypress={on_keypress}
                        />
                        <button
                            class={styles::BUTTON_PRIMARY}
                            disabled={is_spinning}
                            onclick={on_add_click}
                        >
                            {"Add"}
                        </button>
                    </div>
                    <LabelList
                        labels={labels.clone()}
                        locked={is_spinning}
                        on_remove={on_remove}
                    />
                </section>

                <section class={styles::WHEEL_SECTION}>
                    <WheelCanvas labels={labels.clone()} rotation={rotation} theme={theme} />
                    if *show_confetti {
                        <ConfettiOverlay on_finished={on_confetti_finished} />
                    }
                </section>

                <div class="mt-6">
                    <SpinButton
                        is_spinning={is_spinning}
                        has_labels={!labels.is_empty()}
                        onclick={on_spin}
                    />
                </div>

                <ResultDisplay result={(*result).clone()} />
            </div>
        </div>
    }
}
