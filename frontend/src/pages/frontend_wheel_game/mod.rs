mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use shared::{
    RendererError, SpinAnimation, SpinConfig, SpinController, SpinStatus, WheelRenderer, WheelView,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::get_api_base_url;
use crate::gateway::{BrowserTimer, HttpGateway};
use crate::platform;
use crate::styles;

// Import components from our modules
use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SpinButton};

const TITLE: &str = "Колесо фортуны";
const SUBTITLE: &str = "Поймай удачу на тёплой волне";

type WheelController = SpinController<HttpGateway, YewWheelRenderer, BrowserTimer>;

/// Feeds controller state into component state and plays the landing animation.
pub struct YewWheelRenderer {
    view: UseStateSetter<WheelView>,
    rotation: UseStateSetter<f64>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl YewWheelRenderer {
    fn new(view: UseStateSetter<WheelView>, rotation: UseStateSetter<f64>) -> Self {
        Self {
            view,
            rotation,
            frame: Rc::new(RefCell::new(None)),
        }
    }
}

// One requestAnimationFrame step; reschedules itself until the duration has elapsed.
fn schedule_frame(
    animation: Rc<SpinAnimation>,
    started_at: f64,
    rotation: UseStateSetter<f64>,
    slot: Rc<RefCell<Option<AnimationFrame>>>,
) {
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |_| {
        let elapsed = js_sys::Date::now() - started_at;
        rotation.set(animation.rotation_at(elapsed));

        if elapsed < f64::from(animation.duration_ms) {
            schedule_frame(animation, started_at, rotation, next_slot);
        } else {
            next_slot.borrow_mut().take();
        }
    });
    *slot.borrow_mut() = Some(handle);
}

impl WheelRenderer for YewWheelRenderer {
    fn present(&self, view: &WheelView) {
        self.view.set(view.clone());
    }

    fn animate(&self, animation: &SpinAnimation) {
        // Replacing the slot cancels a frame still pending from an earlier spin
        schedule_frame(
            Rc::new(animation.clone()),
            js_sys::Date::now(),
            self.rotation.clone(),
            self.frame.clone(),
        );
    }

    fn signal_success(&self) -> Result<(), RendererError> {
        platform::haptic_success()
    }
}

#[function_component(FrontendWheelGame)]
pub fn frontend_wheel_game() -> Html {
    let view = use_state(WheelView::default);
    let rotation = use_state(|| 0.0_f64);
    let identity = use_memo((), |_| platform::resolve_identity());

    // One controller per mounted widget
    let controller: Rc<WheelController> = {
        let renderer = YewWheelRenderer::new(view.setter(), rotation.setter());
        use_memo((), move |_| {
            SpinController::new(
                HttpGateway::new(get_api_base_url()),
                renderer,
                BrowserTimer,
                SpinConfig::default(),
            )
        })
    };

    {
        let controller = controller.clone();
        let identity = identity.clone();

        use_effect_with((), move |_| {
            platform::announce_ready();

            {
                let controller = controller.clone();
                spawn_local(async move {
                    let source = controller.load_prizes().await;
                    log::debug!("prize list source: {:?}", source);
                });
            }

            {
                let controller = controller.clone();
                spawn_local(async move {
                    controller.check_prior_spin((*identity).as_ref()).await;
                });
            }

            // Late responses must not touch an unmounted widget
            move || controller.dispose()
        });
    }

    let start_spin = {
        let controller = controller.clone();
        let identity = identity.clone();

        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            let identity = identity.clone();
            spawn_local(async move {
                let report = controller.spin((*identity).as_ref()).await;
                log::debug!("spin report: {:?}", report);
            });
        })
    };

    html! {
        <div class={styles::APP}>
            <div class={styles::GLOW} />

            <header class={styles::HEADER}>
                <h1 class={styles::TEXT_H1}>{TITLE}</h1>
                <p class={styles::SUBTITLE}>{SUBTITLE}</p>
            </header>

            <div class={styles::WHEEL_WRAP}>
                <WheelCanvas
                    prizes={view.prizes.clone()}
                    rotation={*rotation}
                    is_spinning={view.status == SpinStatus::Spinning}
                />
            </div>

            <ResultDisplay
                message={view.message.clone()}
                prize={view.prize.clone()}
                status={view.status}
            />

            <div class="flex justify-center mt-4">
                <SpinButton status={view.status} onclick={start_spin} />
            </div>
        </div>
    }
}
