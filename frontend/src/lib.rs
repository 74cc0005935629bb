pub mod config;
pub mod gateway;
pub mod pages;
pub mod platform;
pub mod styles;

use yew::prelude::*;
use crate::pages::frontend_wheel_game::FrontendWheelGame;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <div class="mx-auto max-w-md">
                <FrontendWheelGame />
            </div>
        </div>
    }
}
