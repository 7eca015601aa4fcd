//! The views module contains the components for all Layouts and Routes for our app. Each layout and route in our [`Route`]
//! enum will render one of these components.
//!
//! The signed in pages sit under two layouts: [`ProtectedRoute`] keeps anonymous visitors out and [`DashboardLayout`]
//! draws the sidebar and header around the page.

mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod reset_password;
pub use reset_password::ResetPassword;

mod protected;
pub use protected::ProtectedRoute;

mod layout;
pub use layout::DashboardLayout;

mod dashboard;
pub use dashboard::Dashboard;

mod not_found;
pub use not_found::NotFound;
