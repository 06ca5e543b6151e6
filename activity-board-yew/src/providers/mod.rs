mod board_provider;

pub use board_provider::{BoardProvider, BoardProviderProps, Severity, StatusMessage};
