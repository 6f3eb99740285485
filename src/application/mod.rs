pub mod use_cases;
pub mod view_controller;

pub use use_cases::*;
pub use view_controller::*;
