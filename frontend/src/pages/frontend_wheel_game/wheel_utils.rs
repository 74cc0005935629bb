use shared::SpinStatus;
use yew::prelude::*;

use crate::styles;

// Message and prize card under the wheel
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub message: String,
    pub prize: Option<String>,
    pub status: SpinStatus,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    // A finished spin gets the celebratory card, a known earlier prize a calm one
    let prize_class = match props.status {
        SpinStatus::Done => classes!(styles::PRIZE_CARD, "animate-bounce"),
        SpinStatus::Locked => classes!(styles::PRIZE_CARD, "opacity-90"),
        SpinStatus::Idle | SpinStatus::Spinning => classes!(styles::PRIZE_CARD),
    };

    html! {
        <div class="mt-6 mb-4 flex flex-col items-center justify-center text-center">
            <div class={styles::MESSAGE}>{props.message.clone()}</div>
            if let Some(prize) = &props.prize {
                <div class={prize_class}>{prize.clone()}</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub status: SpinStatus,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = !props.status.accepts_spin();
    let button_class = if is_disabled {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON_ACTIVE
    };

    let spin_icon_class = if props.status == SpinStatus::Spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class="relative w-full max-w-[300px]">
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class={classes!(styles::SPIN_BUTTON, button_class)}
            >
                <div class="flex items-center justify-center relative z-10">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{props.status.button_caption()}</span>
                </div>
            </button>
        </div>
    }
}
