//! # TUI Components
//!
//! One file per screen, plus the header and footer chrome.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they draw as props:
//! - `Header`: title, back button and overview actions from `ViewDirectives`
//! - `Footer`: five-item navigation bar, active item from `NavigationState`
//! - `Splash`: welcome screen
//! - `TransactionStatus`: payment confirmation
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent `*State` in `TuiState`, a borrowed wrapper for rendering:
//! - `FeatureSelection`: toggle list, emits `FeatureEvent::Confirmed`
//! - `AccountOverview`: scrollable home screen
//! - `PaymentForm`: validated form, emits `PaymentEvent::Submitted`
//! - `UserSettings`: settings rows, emits `SettingsEvent`
//!
//! Components never dispatch navigation themselves. They emit their own
//! events and the event loop turns those into `core::action::Action`s.
//!
//! ```text
//! components/
//! ├── mod.rs                 (this file)
//! ├── header.rs
//! ├── footer.rs
//! ├── splash.rs
//! ├── feature_selection.rs
//! ├── account_overview.rs
//! ├── payment_form.rs
//! ├── transaction_status.rs
//! └── user_settings.rs
//! ```

pub mod account_overview;
pub mod feature_selection;
pub mod footer;
pub mod header;
pub mod payment_form;
pub mod splash;
pub mod transaction_status;
pub mod user_settings;

pub use account_overview::{AccountOverview, AccountOverviewState};
pub use feature_selection::{FeatureEvent, FeatureSelection, FeatureSelectionState};
pub use footer::Footer;
pub use header::Header;
pub use payment_form::{PaymentEvent, PaymentForm, PaymentFormState};
pub use splash::Splash;
pub use transaction_status::{PaymentReceipt, TransactionStatus};
pub use user_settings::{SettingsEvent, UserSettings, UserSettingsState};
