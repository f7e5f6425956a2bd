//! Unit tests for the mouse manager's public API.

mod perf_tests;
mod settings_watcher_tests;
