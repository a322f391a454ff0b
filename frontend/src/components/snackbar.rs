//! Transient notification banner.
//!
//! Rendering side of [`NotificationBanner`]: anchored top-right, closes on
//! click or after [`NOTIFICATION_TIMEOUT_MS`].

use foldrun_core::{Notification, NotificationBanner};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::NOTIFICATION_TIMEOUT_MS;

/// Show `notification` and arm its auto-hide timer.
pub fn notify(banner: RwSignal<NotificationBanner>, notification: Notification) {
    log::info!("{} {}", notification.severity.emoji(), notification.message);

    let Some(generation) = banner.try_update(|b| b.show(notification)) else {
        return;
    };

    spawn_local(async move {
        TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
        // The form may be gone by now.
        let _ = banner.try_update(|b| b.expire(generation));
    });
}

#[component]
pub fn Snackbar(banner: RwSignal<NotificationBanner>) -> impl IntoView {
    let on_close = move |_| banner.update(|b| b.dismiss());

    view! {
        <Show
            when=move || banner.with(|b| b.has_content())
            fallback=|| view! { }
        >
            <div
                class="snackbar"
                class:open=move || banner.with(|b| b.is_visible())
                role="alert"
            >
                <div class=move || {
                    banner.with(|b| {
                        let severity = b.current().map(|n| n.severity.css_class()).unwrap_or_default();
                        format!("alert {}", severity)
                    })
                }>
                    <span class="alert-message">
                        {move || banner.with(|b| b.current().map(|n| n.message.clone()).unwrap_or_default())}
                    </span>
                    <button class="alert-close" on:click=on_close>"✕"</button>
                </div>
            </div>
        </Show>
    }
}
