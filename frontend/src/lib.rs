pub mod config;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use crate::pages::wheel::WheelWizard;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <div class="mx-auto">
                <WheelWizard />
            </div>
        </div>
    }
}
