//! # Core Application Logic
//!
//! BankEase's navigation controller. It knows nothing about any specific
//! UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screen+footer)│
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • derive_view()        │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `Screen`, `FooterItem` and the `NavigationState` pair
//! - [`action`]: The `Action` enum and the transition table
//! - [`view`]: Header/footer/back visibility derived from state
//! - [`config`]: Layered settings (file, env, CLI)

pub mod action;
pub mod config;
pub mod state;
pub mod view;
