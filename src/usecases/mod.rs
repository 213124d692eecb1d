pub mod container;
pub mod service_status;
pub mod system;
