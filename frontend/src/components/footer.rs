//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Foldrun • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://github.com/google-deepmind/alphafold" class="footer-link" target="_blank">
                    "AlphaFold"
                </a>
                <a href="https://www.ncbi.nlm.nih.gov/BLAST/fasta.shtml" class="footer-link" target="_blank">
                    "FASTA format"
                </a>
            </div>
        </footer>
    }
}
