//! Foldrun - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for submitting AlphaFold jobs to the folding
//! portal backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (sign-in status, "New job")                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── NewJob + Snackbar (while open)                         │
//! │  └── JobsPanel                                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time configuration
//! - [`components`] - UI components (Header, NewJob, Snackbar, etc.)
//! - [`services`] - Backend transport, token lookup, file reading
//!
//! Form state, validation and the submission flow live in `foldrun-core`.

use std::rc::Rc;

use foldrun_core::CredentialProvider;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use components::*;
pub use config::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Foldrun - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let credentials: Rc<dyn CredentialProvider> = Rc::new(SessionTokenProvider::new());
    let signed_in = credentials.access_token().is_some();

    let (show_form, set_show_form) = create_signal(true);

    let form_credentials = credentials.clone();

    view! {
        <Header signed_in=signed_in on_new_job=move |_: ()| set_show_form.set(true)/>

        <div class="container">
            <Hero/>

            <Show
                when=move || show_form.get()
                fallback=|| view! { }
            >
                <NewJob
                    credentials=form_credentials.clone()
                    on_close=move |_: ()| set_show_form.set(false)
                    on_error=move |message: String| log::error!("Fold request failed: {}", message)
                />
            </Show>

            <JobsPanel credentials=credentials.clone()/>
        </div>

        <Footer/>
    }
}
