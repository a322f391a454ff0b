use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Header(
    /// Whether an access token was found when the page loaded.
    signed_in: bool,
    #[prop(into)] on_new_job: Callback<()>,
) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
            </div>
            <div class="header-right">
                <button class="button" on:click=move |_| on_new_job.call(())>
                    "New job"
                </button>
                <div class="auth-status" class:connected=signed_in>
                    <span class="auth-dot" class:connected=signed_in></span>
                    {if signed_in { "Signed in" } else { "Not signed in" }}
                </div>
            </div>
        </header>
    }
}
