// Domain layer: request models and ports. Payloads themselves stay opaque
// `serde_json::Value`s owned by the remote API.

pub mod model;
pub mod ports;
