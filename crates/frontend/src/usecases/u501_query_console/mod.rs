//! u501: Query Console
//!
//! Structure:
//! - api.rs: call to the Query Service and reply classification
//! - state.rs: ConsoleState, the submit/validate/error state machine
//! - view_model.rs: QueryConsoleVm, commands over the state signal
//! - view.rs: main component QueryConsoleView
//! - connection_form.rs, result_panel.rs: parts of the view

pub mod api;
mod connection_form;
mod result_panel;
pub mod state;
mod view;
mod view_model;

pub use view::QueryConsoleView;
pub use view_model::QueryConsoleVm;
