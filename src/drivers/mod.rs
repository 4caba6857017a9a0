//! Panel hardware drivers.

pub mod iox;
