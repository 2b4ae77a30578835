//! BDD step definitions for the gateway

pub mod health_steps;
pub mod proxy_steps;
