//! Browser services.
//!
//! - [`fold`] - `gloo-net` transport for `/fold` and `/status`
//! - [`auth`] - access token from `sessionStorage`
//! - [`file`] - reading the selected FASTA file

pub mod auth;
pub mod file;
pub mod fold;

pub use auth::*;
pub use file::*;
pub use fold::*;
