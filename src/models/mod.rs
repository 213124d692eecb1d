pub mod container;
pub mod metrics;
pub mod response;
pub mod service;
