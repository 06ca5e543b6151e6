//! # Activity Board Yew Components
//!
//! Reusable Yew components for the school activities sign-up board.

pub mod api;
pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod providers;

// Re-exports for convenience
pub use api::ApiError;
pub use app::App;
pub use components::{ActivityCard, ActivityList, FilterBar, MessageBanner, SignupForm};
pub use hooks::{use_board, BoardContext};
pub use pages::BoardScreen;
pub use providers::{BoardProvider, BoardProviderProps, Severity, StatusMessage};
