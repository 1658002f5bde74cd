//! HTTP handlers.

pub mod city;
pub mod country;
pub mod health;
