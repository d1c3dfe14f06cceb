//! HTTP middleware

pub mod layers;
