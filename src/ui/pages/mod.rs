//! Leaf page content rendered inside a layout shell.

mod login;
mod not_found;
mod placeholder;
mod register;
mod report_issue;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use placeholder::PlaceholderPage;
pub use register::RegisterPage;
pub use report_issue::ReportIssuePage;
