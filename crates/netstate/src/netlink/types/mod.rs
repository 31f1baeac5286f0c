//! Kernel ABI struct mirrors and constant tables for rtnetlink messages.

pub mod addr;
pub mod neigh;
pub mod route;

pub use addr::IfAddrMsg;
pub use neigh::NdMsg;
pub use route::RtMsg;
