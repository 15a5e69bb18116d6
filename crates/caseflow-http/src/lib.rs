//! HTTP implementations of the extraction-gateway and case-store
//! boundaries.

mod gateway;
mod store;

pub use gateway::GatewayClient;
pub use store::StoreClient;
