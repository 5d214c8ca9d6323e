// src/gui/components/mod.rs
pub mod chart_picker;
pub mod chart_view;
pub mod cloud_view;
pub mod results;
pub mod top_table;
pub mod url_bar;
