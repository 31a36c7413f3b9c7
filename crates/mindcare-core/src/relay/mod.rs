//! Server side of the relay: persona prompt plus one upstream call.

pub mod service;
