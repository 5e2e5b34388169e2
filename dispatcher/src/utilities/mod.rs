pub mod call_set;
pub mod car;
pub mod debug;
pub mod event;
pub mod host;
pub mod load_history;
