//! Core client logic: session state, dispatch, and the event loop.

pub mod action;
pub mod event;
pub mod event_loop;
pub mod handler;
pub mod session;
