//! # IO Module
//!
//! Outbound integrations with services the backend talks to over the network.

pub mod push_client;

pub use push_client::PushNotificationClient;
