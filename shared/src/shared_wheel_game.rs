use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, WheelError};

// Constants for frontend animation
pub const SPIN_DURATION_MS: u32 = 5000; // Fixed length of the landing animation
pub const MIN_EXTRA_TURNS: u32 = 6; // Full rotations added before landing
pub const MAX_EXTRA_TURNS: u32 = 8;

/// Wedges shown when the prize list cannot be fetched. Order is part of the layout.
pub const DEFAULT_PRIZES: [&str; 7] = [
    "Скидка 7%",
    "Скидка 5%",
    "Отрез DUCK до 0.5 м",
    "Отрез РАНФОРСА до 0.5 м",
    "Отрез РАНФОРСА до 1 м",
    "Набор из 3-х мини-отрезов",
    "Отрез сатина до 0.5 м",
];

pub const SEGMENT_COLORS: [&str; 7] = [
    "#ffb347",
    "#f76b52",
    "#ffd27a",
    "#ff9f68",
    "#ffc07a",
    "#f77b5a",
    "#ffe0a8",
];

pub fn segment_color(index: usize) -> &'static str {
    SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
}

// === API Types ===

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeListResponse {
    pub prizes: Vec<String>,
}

/// Body of every identity-bearing request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InitPayload {
    #[serde(rename = "initData")]
    pub init_data: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StatusResponse {
    pub has_spun: bool,
    pub prize: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResponse {
    #[serde(default = "default_ok")]
    pub ok: bool,
    pub already: bool,
    pub prize: String,
    #[serde(default)]
    pub prize_index: Option<i64>,
    pub locked: bool,
}

fn default_ok() -> bool {
    true
}

/// Opaque session token issued by the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(String);

impl Identity {
    /// Prefers the platform-injected token and falls back to the query parameter.
    /// Blank candidates count as absent.
    pub fn resolve(platform: Option<String>, query: Option<String>) -> Option<Self> {
        platform
            .filter(|token| !token.trim().is_empty())
            .or_else(|| query.filter(|token| !token.trim().is_empty()))
            .map(Identity)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_payload(&self) -> InitPayload {
        InitPayload { init_data: self.0.clone() }
    }
}

/// Spin lifecycle as seen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinStatus {
    #[default]
    Idle,
    Spinning,
    Locked,
    Done,
}

impl SpinStatus {
    pub fn accepts_spin(&self) -> bool {
        !matches!(self, SpinStatus::Spinning | SpinStatus::Locked)
    }

    pub fn button_caption(&self) -> &'static str {
        match self {
            SpinStatus::Locked => LOCKED_CAPTION,
            SpinStatus::Spinning => SPINNING_CAPTION,
            SpinStatus::Idle | SpinStatus::Done => SPIN_CAPTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinConfig {
    duration_ms: u32,
    min_extra_turns: u32,
    max_extra_turns: u32,
    haptics: bool,
}

impl SpinConfig {
    pub fn new(duration_ms: u32, min_extra_turns: u32, max_extra_turns: u32) -> Result<Self, ConfigError> {
        if duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if min_extra_turns == 0 {
            return Err(ConfigError::NoExtraTurns);
        }
        if min_extra_turns > max_extra_turns {
            return Err(ConfigError::TurnRange { min: min_extra_turns, max: max_extra_turns });
        }
        Ok(Self { duration_ms, min_extra_turns, max_extra_turns, haptics: true })
    }

    pub fn with_haptics(mut self, haptics: bool) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn extra_turns(&self) -> std::ops::RangeInclusive<u32> {
        self.min_extra_turns..=self.max_extra_turns
    }

    pub fn haptics(&self) -> bool {
        self.haptics
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: SPIN_DURATION_MS,
            min_extra_turns: MIN_EXTRA_TURNS,
            max_extra_turns: MAX_EXTRA_TURNS,
            haptics: true,
        }
    }
}

/// How a landing wedge was picked from a spin outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingSource {
    ExplicitIndex,
    Label,
    Fallback,
}

/// Ordered wedge labels. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeWheel {
    labels: Vec<String>,
}

impl PrizeWheel {
    pub fn new(labels: Vec<String>) -> Result<Self, WheelError> {
        if labels.is_empty() {
            return Err(WheelError::EmptyPrizeList);
        }
        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn count(&self) -> usize {
        self.labels.len()
    }

    pub fn segment_angle(&self) -> f64 {
        segment_angle(self.count())
    }

    /// Picks the wedge the wheel must stop on. An in-range `prize_index` wins,
    /// then the first label match, then wedge 0.
    pub fn resolve_landing(&self, outcome: &SpinResponse) -> (usize, LandingSource) {
        if let Some(index) = outcome.prize_index {
            if index >= 0 && (index as usize) < self.count() {
                return (index as usize, LandingSource::ExplicitIndex);
            }
            log::warn!(
                "prize_index {} outside wheel of {} wedges, matching by label",
                index,
                self.count()
            );
        }

        match self.labels.iter().position(|label| *label == outcome.prize) {
            Some(index) => (index, LandingSource::Label),
            None => (0, LandingSource::Fallback),
        }
    }
}

impl Default for PrizeWheel {
    fn default() -> Self {
        Self { labels: DEFAULT_PRIZES.iter().map(|p| p.to_string()).collect() }
    }
}

pub fn segment_angle(count: usize) -> f64 {
    360.0 / count.max(1) as f64
}

/// Maps any angle into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let rest = ((angle % 360.0) + 360.0) % 360.0;
    if rest >= 360.0 {
        0.0
    } else {
        rest
    }
}

/// Rotation (mod 360) that puts the centre of wedge `index` under the pointer at the top.
pub fn rest_angle_for(index: usize, count: usize) -> f64 {
    normalize_degrees(360.0 - (index as f64 + 0.5) * segment_angle(count))
}

/// Forward-only distance from `current` to `desired`, in [0, 360).
pub fn forward_delta(desired: f64, current: f64) -> f64 {
    normalize_degrees(desired - current + 360.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationPlan {
    pub landing_index: usize,
    pub desired_rest: f64,
    pub current_rest: f64,
    pub delta: f64,
    pub extra_turns: u32,
    pub target: f64,
}

/// Computes the next accumulated rotation. Pure in everything but `extra_turns`,
/// which only adds whole turns and never changes the resting wedge.
pub fn plan_rotation(accumulated: f64, landing_index: usize, count: usize, extra_turns: u32) -> RotationPlan {
    let extra_turns = extra_turns.max(1);
    let desired_rest = rest_angle_for(landing_index, count);
    let current_rest = normalize_degrees(accumulated);
    let delta = forward_delta(desired_rest, current_rest);
    let target = accumulated + f64::from(extra_turns) * 360.0 + delta;

    RotationPlan {
        landing_index,
        desired_rest,
        current_rest,
        delta,
        extra_turns,
        target,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseOutCubic,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::EaseOutCubic => {
                let t = t.clamp(0.0, 1.0);
                1.0 - (1.0 - t).powi(3)
            }
        }
    }
}

/// What the renderer needs to move the wheel to its next resting place.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl SpinAnimation {
    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        let progress = (elapsed_ms / f64::from(self.duration_ms.max(1))).min(1.0);
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}

/// Snapshot handed to the renderer after every state change.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelView {
    pub status: SpinStatus,
    pub message: String,
    pub prize: Option<String>,
    pub prizes: Vec<String>,
    pub rotation: f64,
}

impl WheelView {
    pub fn can_spin(&self) -> bool {
        self.status.accepts_spin()
    }
}

impl Default for WheelView {
    fn default() -> Self {
        Self {
            status: SpinStatus::Idle,
            message: WELCOME_MESSAGE.to_string(),
            prize: None,
            prizes: PrizeWheel::default().labels,
            rotation: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angular_distance(a: f64, b: f64) -> f64 {
        let d = (normalize_degrees(a) - normalize_degrees(b)).abs();
        d.min(360.0 - d)
    }

    fn outcome(prize: &str, prize_index: Option<i64>) -> SpinResponse {
        SpinResponse {
            ok: true,
            already: false,
            prize: prize.to_string(),
            prize_index,
            locked: true,
        }
    }

    #[test]
    fn test_seven_wedges_index_three_lands_at_half_turn() {
        let plan = plan_rotation(0.0, 3, 7, 6);
        assert!((plan.desired_rest - 180.0).abs() < 1e-9);
        assert!((plan.delta - 180.0).abs() < 1e-9);
        assert!((plan.target - (6.0 * 360.0 + 180.0)).abs() < 1e-9);
    }

    #[test]
    fn test_plan_always_moves_forward_and_lands_on_wedge() {
        let starts = [0.0, 13.7, 179.9, 359.99, 720.0, 2547.3, 100_000.5];
        for count in 1..=12 {
            for index in 0..count {
                for &start in &starts {
                    for turns in MIN_EXTRA_TURNS..=MAX_EXTRA_TURNS {
                        let plan = plan_rotation(start, index, count, turns);
                        assert!(plan.target > start);
                        assert!(plan.delta >= 0.0 && plan.delta < 360.0);
                        assert!(angular_distance(plan.target, rest_angle_for(index, count)) < 1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_turns_is_clamped_consistently() {
        let plan = plan_rotation(0.0, 3, 7, 0);
        assert_eq!(plan.extra_turns, 1);
        assert!((plan.target - (360.0 + plan.delta)).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_plans_strictly_increase() {
        let mut rotation = 0.0;
        for index in [3, 3, 0, 6, 1, 1] {
            let plan = plan_rotation(rotation, index, 7, 6);
            assert!(plan.target > rotation);
            rotation = plan.target;
        }
    }

    #[test]
    fn test_normalize_handles_negative_angles() {
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-9);
        assert_eq!(normalize_degrees(720.0), 0.0);
    }

    #[test]
    fn test_explicit_index_takes_precedence() {
        let wheel = PrizeWheel::default();
        let (index, source) = wheel.resolve_landing(&outcome("Скидка 7%", Some(4)));
        assert_eq!(index, 4);
        assert_eq!(source, LandingSource::ExplicitIndex);
    }

    #[test]
    fn test_out_of_range_index_falls_back_to_label() {
        let wheel = PrizeWheel::default();
        let (index, source) = wheel.resolve_landing(&outcome("Скидка 5%", Some(42)));
        assert_eq!(index, 1);
        assert_eq!(source, LandingSource::Label);

        let (index, _) = wheel.resolve_landing(&outcome("Скидка 5%", Some(-1)));
        assert_eq!(index, 1);
    }

    #[test]
    fn test_unknown_label_defaults_to_first_wedge() {
        let wheel = PrizeWheel::default();
        let (index, source) = wheel.resolve_landing(&outcome("Скидка 3 процентов", None));
        assert_eq!(index, 0);
        assert_eq!(source, LandingSource::Fallback);
    }

    #[test]
    fn test_label_match_uses_first_occurrence() {
        let wheel = PrizeWheel::new(vec!["A".into(), "B".into(), "A".into()]).unwrap();
        assert_eq!(wheel.resolve_landing(&outcome("A", None)).0, 0);
    }

    #[test]
    fn test_empty_prize_list_is_rejected() {
        assert_eq!(PrizeWheel::new(Vec::new()), Err(WheelError::EmptyPrizeList));
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(SpinConfig::new(5000, 0, 3), Err(ConfigError::NoExtraTurns));
        assert_eq!(SpinConfig::new(5000, 9, 3), Err(ConfigError::TurnRange { min: 9, max: 3 }));
        assert_eq!(SpinConfig::new(0, 6, 8), Err(ConfigError::ZeroDuration));
        assert_eq!(SpinConfig::new(5000, 6, 8).unwrap(), SpinConfig::default());
    }

    #[test]
    fn test_identity_prefers_platform_token() {
        let identity = Identity::resolve(Some("tg".into()), Some("query".into()));
        assert_eq!(identity.unwrap().as_str(), "tg");

        let identity = Identity::resolve(Some("  ".into()), Some("query".into()));
        assert_eq!(identity.unwrap().as_str(), "query");

        assert!(Identity::resolve(None, Some(String::new())).is_none());
    }

    #[test]
    fn test_animation_decelerates_to_target() {
        let animation = SpinAnimation { from: 0.0, to: 2340.0, duration_ms: 5000, easing: Easing::EaseOutCubic };
        let early = animation.rotation_at(1000.0);
        let late = animation.rotation_at(4000.0) - animation.rotation_at(3000.0);
        assert!(early > late);
        assert_eq!(animation.rotation_at(9000.0), 2340.0);
    }

    #[test]
    fn test_spin_response_defaults() {
        let response: SpinResponse =
            serde_json::from_str(r#"{"already":false,"prize":"Скидка 5%","locked":true}"#).unwrap();
        assert!(response.ok);
        assert_eq!(response.prize_index, None);

        let payload = serde_json::to_string(&Identity::resolve(Some("abc".into()), None).unwrap().to_payload()).unwrap();
        assert_eq!(payload, r#"{"initData":"abc"}"#);
    }
}
