pub mod clock;
pub mod clock_hud;
pub mod core;
pub mod debug_ui;
pub mod input;
