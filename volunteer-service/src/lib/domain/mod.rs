pub mod attendance;
pub mod errors;
pub mod event;
pub mod identity;
pub mod task;
pub mod values;
pub mod volunteer;
