pub mod constants;
pub mod confetti;
pub mod preferences;
pub mod shared_wheel_game;
pub mod theme;
pub mod validation;
pub mod wheel_render;
