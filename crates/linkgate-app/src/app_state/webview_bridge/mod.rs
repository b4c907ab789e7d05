//! Bridge between the main window and its embedded web view.
//!
//! Handles bounds, IPC message dispatch, and draining web view events.

mod bounds;
mod ipc_dispatch;
mod lifecycle;
