//! "New Job" form.
//!
//! Collects the FASTA file and job parameters, submits them to
//! `{BACKEND_HOST}/fold` and reports the outcome in a [`Snackbar`].

use std::rc::Rc;

use foldrun_core::{
    models::parse_optional, CredentialProvider, JobForm, JobSubmitter, Notification, NotificationBanner,
    ProteinType, Toggle,
};
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::components::{notify, Snackbar};
use crate::config::{ACCEPTED_FILE_TYPES, BACKEND_HOST};
use crate::services::{read_fasta_file, GlooTransport};

#[component]
pub fn NewJob(
    /// Source of the access token, read at submit time.
    credentials: Rc<dyn CredentialProvider>,
    /// Called when the user closes the form. Does not cancel a running request.
    #[prop(into)]
    on_close: Callback<()>,
    /// Called with the message of a failed request (not of a failed precondition).
    #[prop(optional, into)]
    on_error: Option<Callback<String>>,
) -> impl IntoView {
    let form = create_rw_signal(JobForm::new());
    let banner = create_rw_signal(NotificationBanner::new());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        spawn_local(async move {
            match read_fasta_file(file).await {
                Ok(fasta) => form.update(|f| f.set_file(fasta)),
                Err(e) => log::error!("{}", e),
            }
        });
    };

    let on_run = move |_| {
        let submission = form.with_untracked(|f| f.snapshot());
        let credentials = credentials.clone();

        spawn_local(async move {
            let submitter = JobSubmitter::new(BACKEND_HOST, credentials, GlooTransport);
            let outcome = submitter.submit(&submission).await;

            if let (Err(e), Some(on_error)) = (&outcome, on_error) {
                if !e.is_precondition() {
                    on_error.call(e.to_string());
                }
            }

            notify(banner, Notification::from_outcome(&outcome));
        });
    };

    let fasta_hint = move || {
        form.with(|f| match f.fasta_summary() {
            Some(Ok(summary)) => summary.describe(),
            Some(Err(e)) => e.to_string(),
            None => String::new(),
        })
    };

    view! {
        <Snackbar banner=banner/>

        <div class="new-job">
            <h2>"Select the protein FASTA file to determine structure"</h2>

            <label class="button" for="file-uploader-input">
                "Upload FASTA"
            </label>
            <input
                type="file"
                id="file-uploader-input"
                accept=ACCEPTED_FILE_TYPES
                style="display:none"
                on:change=on_file_change
            />

            <div class="file-name">
                {move || form.with(|f| f.file_label().to_string())}
                <Show when=move || form.with(|f| f.has_file()) fallback=|| view! { }>
                    <span class="file-ok">"✔"</span>
                </Show>
            </div>
            <div class="file-hint">{fasta_hint}</div>

            <div class="field">
                <label for="experimentId">"Experiment ID"</label>
                <input
                    type="text"
                    id="experimentId"
                    on:input=move |ev| form.update(|f| f.set_experiment_id(event_target_value(&ev)))
                />
                <small>"Ex: amylase-fold-12"</small>
            </div>

            <div class="field">
                <label for="proteinType">"Protein Type"</label>
                <select
                    id="proteinType"
                    on:change=move |ev| {
                        let value = parse_optional::<ProteinType>(&event_target_value(&ev)).ok().flatten();
                        form.update(|f| f.set_protein_type(value));
                    }
                >
                    <option value="" selected=true>""</option>
                    {ProteinType::ALL
                        .iter()
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="field">
                <label for="useSmallBfd">"Use Small BFD"</label>
                <ToggleSelect
                    id="useSmallBfd"
                    on_select={move |value: Option<Toggle>| form.update(|f| f.set_small_bfd(value))}
                />
            </div>

            <div class="field">
                <label for="predictionCount">"Multimer Predictions per model (#)"</label>
                <input
                    type="text"
                    id="predictionCount"
                    on:input=move |ev| form.update(|f| f.set_prediction_count(event_target_value(&ev)))
                />
                <small>"Sample numbers: 3, 4, 5, 6. Ex: 3"</small>
            </div>

            <div class="field">
                <label for="relaxation">"Run relaxation after folding"</label>
                <ToggleSelect
                    id="relaxation"
                    on_select={move |value: Option<Toggle>| form.update(|f| f.set_relaxation(value))}
                />
            </div>

            <div class="actions">
                <button class="button run" on:click=on_run>"Run AlphaFold"</button>
                <button class="button" on:click=move |_| on_close.call(())>"Close"</button>
            </div>
        </div>
    }
}

/// Yes/No select with an empty initial choice.
#[component]
fn ToggleSelect(id: &'static str, #[prop(into)] on_select: Callback<Option<Toggle>>) -> impl IntoView {
    view! {
        <select
            id=id
            on:change=move |ev| {
                let value = parse_optional::<Toggle>(&event_target_value(&ev)).ok().flatten();
                on_select.call(value);
            }
        >
            <option value="" selected=true>""</option>
            {Toggle::ALL
                .iter()
                .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                .collect_view()}
        </select>
    }
}
