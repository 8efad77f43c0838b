//! UI module - shared widgets used across views

pub mod components;
