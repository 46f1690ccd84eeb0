pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::attendance;
pub use domain::event;
pub use domain::identity;
pub use domain::task;
pub use domain::volunteer;
pub use outbound::repositories;
