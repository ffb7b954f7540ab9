//! Screen components for the TUI

pub mod files;
pub mod home;
pub mod spinning;

pub use files::{FilesAction, FilesMode, FilesScreen};
pub use home::{HomeAction, HomeScreen};
pub use spinning::SpinningScreen;
