pub mod constants;
pub mod error;
pub mod shared_wheel_game;
pub mod spin_controller;
pub mod wheel_label;

pub use error::{ConfigError, GatewayError, RendererError, WheelError};
pub use shared_wheel_game::*;
pub use spin_controller::*;
pub use wheel_label::wrap_label;
