//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Protein structure prediction"</h1>
            <p class="subtitle">
                "Upload a FASTA file, pick the AlphaFold options and start a folding job. "
                "Runs appear in the jobs table once the backend has scheduled them."
            </p>
        </div>
    }
}
