pub mod container_runtime;
pub mod docker_cli;
pub mod mysql_store;
pub mod resource_probe;
pub mod status_store;
pub mod sysinfo_probe;
