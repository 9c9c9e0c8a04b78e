pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod ui;
pub mod verdict;
