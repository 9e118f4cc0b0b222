mod dashboard;
mod not_found;
mod sign_in;
mod sign_up;

pub use dashboard::DashboardPage;
pub use not_found::NotFoundPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;

use shared::validation::{Field, FieldErrors};
use yew::{Html, html};

/// Inline helper text under an input that failed validation.
pub(crate) fn inline_error(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(message) => html! {
            <label class="label">
                <span class="label-text-alt text-error">{message.to_string()}</span>
            </label>
        },
        None => html! {},
    }
}
