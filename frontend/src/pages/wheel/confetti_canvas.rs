use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use shared::confetti::ConfettiBurst;
use shared::wheel_render::WheelSurface;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::wheel_canvas::CanvasSurface;
use crate::config::CANVAS_SIZE;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ConfettiOverlayProps {
    pub on_finished: Callback<()>,
}

// Draw, fall, repeat until every piece has left the canvas
fn schedule_confetti(
    mut burst: ConfettiBurst,
    mut surface: CanvasSurface,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    on_finished: Callback<()>,
) {
    let next = frame.clone();
    let handle = request_animation_frame(move |_timestamp| {
        burst.draw(&mut surface);
        burst.advance();
        if burst.is_finished() {
            on_finished.emit(());
        } else {
            schedule_confetti(burst, surface, next, on_finished);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

/// Transparent canvas laid over the wheel that rains confetti once, then asks to be removed.
#[function_component(ConfettiOverlay)]
pub fn confetti_overlay(props: &ConfettiOverlayProps) -> Html {
    let canvas_ref = use_node_ref();
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    {
        let canvas_ref = canvas_ref.clone();
        let frame = frame.clone();
        let on_finished = props.on_finished.clone();

        use_effect_with((), move |_| {
            let surface = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| CanvasSurface::from_canvas(&canvas));

            match surface {
                Some(surface) => {
                    let (width, height) = surface.size();
                    let burst = ConfettiBurst::spawn(&mut rand::thread_rng(), width, height);
                    schedule_confetti(burst, surface, frame.clone(), on_finished);
                }
                None => on_finished.emit(()),
            }

            // Dropping the handle cancels a pending frame
            move || {
                frame.borrow_mut().take();
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class={styles::CONFETTI_CANVAS}
        />
    }
}
