//! Terminal browser for 4chan boards and catalogs.
//!
//! ```text
//! keys ──► keymap ──► Action ──► update(App) ──► Effect ──► Fetcher
//!                       ▲                                      │
//!                       └────────────── fetch Event ◄──────────┘
//! ```
//!
//! [`app::App`] owns the panels, [`render`] turns data into plain lines,
//! [`style`] and [`ui`] put them on screen.

pub mod action;
pub mod app;
pub mod keymap;
pub mod panel;
pub mod render;
pub mod runner;
pub mod style;
pub mod ui;
