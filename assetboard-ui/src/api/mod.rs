//! Backend and contract access from the browser

mod client;
mod contract;

pub use client::{get_api_base, set_api_base, GlooAssetApi};
pub use contract::HostContract;
