//! The huddle signaling hub.
//!
//! Peers rendezvous in a named room over one WebSocket each, learn who else
//! is present, and exchange opaque signaling payloads until they can talk
//! directly. The hub brokers the handshake; it never relays media.

pub mod api;
pub mod config;
pub mod directory;
pub mod registry;
pub mod server;
pub mod signaling;

pub use server::{router, AppState};
