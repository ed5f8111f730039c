#![allow(clippy::implicit_hasher)]

pub mod api;
pub mod components;
pub mod config;
pub mod constants;
pub mod data;
pub mod logging;
pub mod map;
pub mod models;
pub mod route_controller;
pub mod session;
pub mod traffic_monitor;

pub use components::app::App;
