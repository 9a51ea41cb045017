//! Foundation utilities shared by the helper's subsystems

pub mod logging;
