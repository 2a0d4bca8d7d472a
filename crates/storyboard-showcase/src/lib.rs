#![forbid(unsafe_code)]

//! Terminal storyboard comparing deterministic slot reservations with
//! traditional mempool execution.
//!
//! The binary (`storyboard`) wires [`app::AppModel`] into an
//! `ftui_runtime::Program`. Everything is exposed as a library so the
//! integration tests and benches can drive the model and render it into an
//! off-screen frame.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod logging;
pub mod screens;
pub mod theme;
