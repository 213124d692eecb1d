pub mod containers;
pub mod error;
pub mod extract;
pub mod services;
pub mod system;
