//! Pipeline runs table, fed by `GET /status`.

use std::rc::Rc;

use foldrun_core::{CredentialProvider, JobSubmitter, PipelineRun};
use leptos::*;

use crate::config::BACKEND_HOST;
use crate::services::GlooTransport;

#[component]
pub fn JobsPanel(credentials: Rc<dyn CredentialProvider>) -> impl IntoView {
    let (runs, set_runs) = create_signal(Vec::<PipelineRun>::new());
    let (error, set_error) = create_signal(None::<String>);
    let (is_loading, set_is_loading) = create_signal(false);

    let refresh = move || {
        let credentials = credentials.clone();
        spawn_local(async move {
            set_is_loading.set(true);

            let submitter = JobSubmitter::new(BACKEND_HOST, credentials, GlooTransport);
            match submitter.list_runs().await {
                Ok(list) => {
                    log::info!("📋 {} pipeline runs", list.len());
                    set_error.set(None);
                    set_runs.set(list);
                }
                Err(e) => {
                    log::warn!("Could not list pipeline runs: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }

            set_is_loading.set(false);
        });
    };

    refresh();

    view! {
        <div class="jobs-panel">
            <div class="jobs-header">
                <span class="jobs-title">"📋 Folding jobs"</span>
                <button
                    class="jobs-refresh"
                    disabled=move || is_loading.get()
                    on:click=move |_| refresh()
                >
                    {move || if is_loading.get() { "Loading..." } else { "Refresh" }}
                </button>
            </div>

            <Show when=move || error.get().is_some() fallback=|| view! { }>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <table class="jobs-table">
                <thead>
                    <tr>
                        <th>"Experiment"</th>
                        <th>"Sequence"</th>
                        <th>"Status"</th>
                        <th>"Duration"</th>
                        <th>"User"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || runs.get().into_iter().enumerate()
                        key=|(i, run)| (*i, run.experiment_id.clone())
                        children=move |(_, run)| {
                            let status_class = format!("status status-{}", run.status.to_lowercase());
                            view! {
                                <tr>
                                    <td>
                                        <a href=run.url_link.clone() target="_blank">{run.experiment_id.clone()}</a>
                                    </td>
                                    <td>{run.sequence.clone()}</td>
                                    <td class=status_class>{run.status.clone()}</td>
                                    <td>{run.duration_label().to_string()}</td>
                                    <td>{run.user.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
