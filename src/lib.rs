//! Host-side configuration client for PadCore game-controller firmware.
//!
//! Models the device's editable option groups, validates edits locally
//! (pin collisions, color formats, ranges), maintains the custom LED theme
//! being edited, and talks to the device's HTTP API.

pub mod api;
pub mod buttons;
pub mod options;
pub mod pins;
pub mod prefs;
pub mod theme;
