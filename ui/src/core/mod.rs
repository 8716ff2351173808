//! Platform-agnostic dashboard logic: chart data, upload/history coordination and the state
//! machine tying them together. Nothing in here renders.

pub mod chart;
pub mod format;
pub mod history;
pub mod platform;
pub mod session;
pub mod state;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;
