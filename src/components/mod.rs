//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, forms, and modals.

mod auth_card;
pub use auth_card::{AuthCard, BUTTON_CLASS, INPUT_CLASS};

mod header;
pub use header::Header;

mod sensor_card;
pub use sensor_card::SensorCard;

mod sidebar;
pub use sidebar::Sidebar;

mod sparkline;
pub use sparkline::{HistoryPoint, Sparkline};

mod spinner;
pub use spinner::Spinner;

mod stat_card;
pub use stat_card::StatCard;

mod toast;
pub use toast::{use_toaster, ToastViewport, Toaster};
