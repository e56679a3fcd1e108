pub mod api;
mod client;

pub use client::{build_payload, Client};
