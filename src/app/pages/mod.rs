pub mod routes;
pub mod section;
pub mod machine_status;

pub use section::{Dashboard, Section};
pub use machine_status::MachineStatus;
