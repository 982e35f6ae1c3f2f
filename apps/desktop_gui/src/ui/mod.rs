//! UI layer: app shell, view panels, theme, background renderer, and small
//! painted primitives shared by the panels.

pub mod app;
pub mod background;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::{PortfolioApp, StartupConfig};
