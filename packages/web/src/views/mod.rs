mod shell;
pub use shell::Shell;

mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;

mod references;
pub use references::References;

mod ai_intro;
pub use ai_intro::AiIntro;

/// Trimmed form value, `None` when the field was left empty.
pub(crate) fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
