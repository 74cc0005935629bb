use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::constants::*;
use crate::error::{GatewayError, RendererError, WheelError};
use crate::shared_wheel_game::*;

/// Backend endpoints the widget consumes. Futures are not `Send`: the widget
/// runs on a single-threaded event loop.
#[async_trait(?Send)]
pub trait BackendGateway {
    async fn fetch_prizes(&self) -> Result<PrizeListResponse, GatewayError>;
    async fn fetch_status(&self, identity: &Identity) -> Result<StatusResponse, GatewayError>;
    async fn request_spin(&self, identity: &Identity) -> Result<SpinResponse, GatewayError>;
}

/// UI side of the widget.
pub trait WheelRenderer {
    /// Called after every state transition.
    fn present(&self, view: &WheelView);

    /// Starts moving the wheel towards `animation.to`.
    fn animate(&self, animation: &SpinAnimation);

    /// Best-effort success feedback (haptics).
    fn signal_success(&self) -> Result<(), RendererError> {
        Ok(())
    }
}

/// Fixed-duration wait used to finalize a spin once the animation has had time to play.
#[async_trait(?Send)]
pub trait SpinTimer {
    async fn sleep(&self, duration_ms: u32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizeListSource {
    Backend,
    Default,
    /// A spin was in flight; the list is installed once that spin settles.
    Deferred,
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusCheck {
    NoIdentity,
    NotSpun,
    AlreadySpun { prize: Option<String> },
    Failed,
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinRefusal {
    InFlight,
    Locked,
    MissingIdentity,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinReport {
    Refused(SpinRefusal),
    AlreadySpun { prize: String },
    Landed { plan: RotationPlan, source: LandingSource, status: SpinStatus },
    Failed,
    /// The controller was disposed while waiting; nothing was applied.
    Discarded,
}

/// Per-activation widget state.
#[derive(Debug, Clone)]
struct WheelSession {
    wheel: PrizeWheel,
    status: SpinStatus,
    rotation: f64,
    prize: Option<String>,
    message: String,
    /// Wedges that arrived while spinning.
    pending_wheel: Option<PrizeWheel>,
}

impl WheelSession {
    fn new() -> Self {
        Self {
            wheel: PrizeWheel::default(),
            status: SpinStatus::Idle,
            rotation: 0.0,
            prize: None,
            message: WELCOME_MESSAGE.to_string(),
            pending_wheel: None,
        }
    }

    /// Moves out of `Spinning`, installing any wedge list that was held back.
    fn settle(&mut self, status: SpinStatus) {
        self.status = status;
        if let Some(wheel) = self.pending_wheel.take() {
            log::debug!("installing deferred wheel with {} wedges", wheel.count());
            self.wheel = wheel;
        }
    }

    fn view(&self) -> WheelView {
        WheelView {
            status: self.status,
            message: self.message.clone(),
            prize: self.prize.clone(),
            prizes: self.wheel.labels().to_vec(),
            rotation: self.rotation,
        }
    }
}

/// Drives one wheel: status machine, accumulated rotation and prize-to-wedge mapping.
pub struct SpinController<G, R, T> {
    gateway: G,
    renderer: R,
    timer: T,
    config: SpinConfig,
    session: RefCell<WheelSession>,
    rng: RefCell<SmallRng>,
    disposed: Cell<bool>,
}

impl<G, R, T> SpinController<G, R, T>
where
    G: BackendGateway,
    R: WheelRenderer,
    T: SpinTimer,
{
    pub fn new(gateway: G, renderer: R, timer: T, config: SpinConfig) -> Self {
        Self {
            gateway,
            renderer,
            timer,
            config,
            session: RefCell::new(WheelSession::new()),
            rng: RefCell::new(SmallRng::from_entropy()),
            disposed: Cell::new(false),
        }
    }

    /// Replaces the entropy-seeded turn picker with a deterministic one.
    pub fn with_seed(self, seed: u64) -> Self {
        self.rng.replace(SmallRng::seed_from_u64(seed));
        self
    }

    pub fn status(&self) -> SpinStatus {
        self.session.borrow().status
    }

    pub fn rotation(&self) -> f64 {
        self.session.borrow().rotation
    }

    pub fn view(&self) -> WheelView {
        self.session.borrow().view()
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    /// Marks the widget as torn down. Results arriving afterwards are dropped.
    pub fn dispose(&self) {
        self.disposed.set(true);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    fn present(&self) {
        let view = self.session.borrow().view();
        self.renderer.present(&view);
    }

    /// Installs a new wedge list. While a spin is in flight the list is held
    /// back until that spin settles, so the landing never sees the order change.
    /// Returns whether the list was installed immediately.
    pub fn initialize(&self, prizes: Vec<String>) -> Result<bool, WheelError> {
        let wheel = PrizeWheel::new(prizes)?;
        {
            let mut session = self.session.borrow_mut();
            if session.status == SpinStatus::Spinning {
                session.pending_wheel = Some(wheel);
                return Ok(false);
            }
            log::debug!("wheel initialized with {} wedges, {:.2} deg each", wheel.count(), wheel.segment_angle());
            session.wheel = wheel;
        }
        self.present();
        Ok(true)
    }

    /// Fetches the wedge list, keeping the built-in defaults when that fails.
    pub async fn load_prizes(&self) -> PrizeListSource {
        let result = self.gateway.fetch_prizes().await;
        if self.is_disposed() {
            log::debug!("prize list arrived after teardown, ignoring");
            return PrizeListSource::Discarded;
        }

        let prizes = match result {
            Ok(response) if !response.prizes.is_empty() => response.prizes,
            Ok(_) => {
                log::warn!("backend returned an empty prize list, using defaults");
                return PrizeListSource::Default;
            }
            Err(err) => {
                log::warn!("failed to fetch prize list, using defaults: {}", err);
                return PrizeListSource::Default;
            }
        };

        match self.initialize(prizes) {
            Ok(true) => PrizeListSource::Backend,
            Ok(false) => PrizeListSource::Deferred,
            Err(_) => PrizeListSource::Default,
        }
    }

    /// Asks the backend whether this user already spun. A known result locks
    /// the wheel without animating it.
    pub async fn check_prior_spin(&self, identity: Option<&Identity>) -> StatusCheck {
        let Some(identity) = identity else {
            return StatusCheck::NoIdentity;
        };

        let result = self.gateway.fetch_status(identity).await;
        if self.is_disposed() {
            log::debug!("status check finished after teardown, ignoring");
            return StatusCheck::Discarded;
        }

        match result {
            Ok(status) if status.has_spun => {
                {
                    let mut session = self.session.borrow_mut();
                    session.status = SpinStatus::Locked;
                    session.prize = status.prize.clone();
                    session.message = ALREADY_SPUN_MESSAGE.to_string();
                }
                log::info!("user already spun, wheel locked");
                self.present();
                StatusCheck::AlreadySpun { prize: status.prize }
            }
            Ok(_) => StatusCheck::NotSpun,
            Err(err) => {
                log::error!("status check failed: {}", err);
                self.session.borrow_mut().message = STATUS_CHECK_ERROR.to_string();
                self.present();
                StatusCheck::Failed
            }
        }
    }

    /// Requests a spin and lands the wheel on the prize the backend picked.
    pub async fn spin(&self, identity: Option<&Identity>) -> SpinReport {
        // Guard and transition share one borrow; no await separates them.
        let (identity, previous_prize) = {
            let mut session = self.session.borrow_mut();
            match session.status {
                SpinStatus::Spinning => return SpinReport::Refused(SpinRefusal::InFlight),
                SpinStatus::Locked => return SpinReport::Refused(SpinRefusal::Locked),
                SpinStatus::Idle | SpinStatus::Done => {}
            }
            let Some(identity) = identity else {
                session.message = MISSING_IDENTITY_MESSAGE.to_string();
                drop(session);
                self.present();
                return SpinReport::Refused(SpinRefusal::MissingIdentity);
            };
            session.status = SpinStatus::Spinning;
            session.message = SPINNING_MESSAGE.to_string();
            (identity, session.prize.take())
        };
        self.present();

        let result = self.gateway.request_spin(identity).await;
        if self.is_disposed() {
            log::debug!("spin result arrived after teardown, ignoring");
            return SpinReport::Discarded;
        }

        let outcome = match result.and_then(|o| if o.ok { Ok(o) } else { Err(GatewayError::Rejected) }) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("spin request failed: {}", err);
                {
                    let mut session = self.session.borrow_mut();
                    session.settle(SpinStatus::Idle);
                    session.prize = previous_prize;
                    session.message = SPIN_ERROR.to_string();
                }
                self.present();
                return SpinReport::Failed;
            }
        };

        if outcome.already {
            {
                let mut session = self.session.borrow_mut();
                session.settle(SpinStatus::Locked);
                session.prize = Some(outcome.prize.clone());
                session.message = ALREADY_SPUN_MESSAGE.to_string();
            }
            log::info!("backend reports an earlier spin, locking without animation");
            self.present();
            return SpinReport::AlreadySpun { prize: outcome.prize };
        }

        let extra_turns = self.rng.borrow_mut().gen_range(self.config.extra_turns());
        let (plan, source, animation) = {
            let mut session = self.session.borrow_mut();
            let (landing_index, source) = session.wheel.resolve_landing(&outcome);
            if source == LandingSource::Fallback {
                log::warn!(
                    "prize {:?} is not on the wheel, landing on wedge 0 instead",
                    outcome.prize
                );
            }

            let plan = plan_rotation(session.rotation, landing_index, session.wheel.count(), extra_turns);
            let animation = SpinAnimation {
                from: session.rotation,
                to: plan.target,
                duration_ms: self.config.duration_ms(),
                easing: Easing::EaseOutCubic,
            };
            session.rotation = plan.target;
            (plan, source, animation)
        };

        log::debug!(
            "landing on wedge {} ({:?}): rest {:.2} deg, delta {:.2} deg, {} turns, target {:.2} deg",
            plan.landing_index,
            source,
            plan.desired_rest,
            plan.delta,
            plan.extra_turns,
            plan.target
        );
        self.renderer.animate(&animation);

        self.timer.sleep(self.config.duration_ms()).await;
        if self.is_disposed() {
            log::debug!("teardown during spin animation, skipping finalize");
            return SpinReport::Discarded;
        }

        let status = if outcome.locked { SpinStatus::Locked } else { SpinStatus::Done };
        {
            let mut session = self.session.borrow_mut();
            session.settle(status);
            session.prize = Some(outcome.prize.clone());
            session.message = COMPLETED_MESSAGE.to_string();
        }
        log::info!("spin finished on {:?}", outcome.prize);
        self.present();

        if self.config.haptics() {
            if let Err(err) = self.renderer.signal_success() {
                log::debug!("success feedback unavailable: {}", err);
            }
        }

        SpinReport::Landed { plan, source, status }
    }
}
