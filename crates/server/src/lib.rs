//! Lilly Signature Server - profile lookup service.
//!
//! Library surface of the server binary, exposed so integration tests can
//! exercise routing and the Graph client against stub endpoints.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod graph;
pub mod routes;
pub mod state;
