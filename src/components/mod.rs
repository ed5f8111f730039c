#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod legend;
pub mod map_view;
pub mod route_panel;
