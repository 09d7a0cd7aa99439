//! Apigee-Edge-style entity catalogue and synchronous management-API
//! controllers: developers, developer apps, credentials, and API products,
//! driven over a pluggable `Transport` seam.

#![warn(unreachable_pub)]

#[macro_use]
mod macros;

pub mod attributes;
pub mod controller;
pub mod entities;
pub mod error;
pub mod transport;
