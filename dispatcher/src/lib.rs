pub mod dispatch;
pub mod modules;
pub mod utilities;
