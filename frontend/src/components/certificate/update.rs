//! Update function for the certificate form.
//!
//! Local edits mutate state directly. Remote work is spawned with
//! `spawn_local` on a snapshot of the form and comes back as a `Msg` carrying
//! the workflow's `Outcome`, which is applied in one place (`finish`).

use std::future::Future;

use common::form::Field;
use common::workflow::{self, Outcome};
use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::helpers::{confirm, log_failure, log_outcome, read_attachment, show_notice};
use super::messages::Msg;
use super::state::CertificateFormComponent;

/// Central update function. Returns `true` when the view must re-render.
pub fn update(
    component: &mut CertificateFormComponent,
    ctx: &Context<CertificateFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Edit(field, value) => {
            if field == Field::CourseCode {
                let ticket = component.suggestions.issue();
                let api = component.api.clone();
                let text = value.clone();
                run(ctx, async move {
                    Msg::SuggestionsLoaded(ticket, workflow::suggest_courses(&api, &text).await)
                });
            }
            component.form.set(field, value);
            true
        }
        Msg::SuggestionsLoaded(ticket, suggestions) => {
            if let Some(error) = &suggestions.error {
                log_failure("fetching course suggestions", error);
            }
            component.suggestions.accept(ticket, suggestions.items)
        }
        Msg::PickSuggestion(code) => {
            component.form.set(Field::CourseCode, code);
            component.suggestions.dismiss();
            true
        }
        Msg::ClearSuggestions => component.suggestions.dismiss(),
        Msg::OpenFilePicker => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileChosen(file) => {
            run(ctx, async move {
                match read_attachment(file).await {
                    Ok(attachment) => Msg::FileLoaded(attachment),
                    Err(err) => Msg::FileReadFailed(err),
                }
            });
            false
        }
        Msg::FileLoaded(attachment) => {
            let blob = Blob::new_with_options(
                attachment.bytes.as_slice(),
                Some(attachment.mime_type.as_str()),
            );
            // Replacing the guard revokes the previous URL.
            component.preview = Some(ObjectUrl::from(blob));
            component.form.attach(attachment);
            true
        }
        Msg::FileReadFailed(err) => {
            gloo_console::error!("Error reading selected file:", err);
            false
        }
        Msg::Search => {
            let ticket = component.search_generation.issue();
            let api = component.api.clone();
            let form = component.form.clone();
            run(ctx, async move {
                Msg::SearchFinished(ticket, workflow::search(&api, &form).await)
            });
            false
        }
        Msg::SearchFinished(ticket, outcome) => {
            if !component.search_generation.is_current(ticket) {
                return false;
            }
            finish(component, "fetching student", outcome)
        }
        Msg::Preview => {
            component.wizard.proceed_to_preview();
            component.suggestions.dismiss();
            true
        }
        Msg::Submit => {
            let api = component.api.clone();
            let form = component.form.clone();
            run(ctx, async move {
                Msg::Finished("submitting student", workflow::submit(&api, &form).await)
            });
            false
        }
        Msg::ConfirmUpdate => {
            let api = component.api.clone();
            let form = component.form.clone();
            run(ctx, async move {
                Msg::Finished("updating student", workflow::update(&api, &form).await)
            });
            false
        }
        Msg::Delete => {
            let api = component.api.clone();
            let form = component.form.clone();
            run(ctx, async move {
                Msg::Finished("deleting student", workflow::delete(&api, &form, confirm).await)
            });
            false
        }
        Msg::Finished(operation, outcome) => finish(component, operation, outcome),
        Msg::Reset => {
            component.clear();
            true
        }
    }
}

/// Spawns `future` and feeds the message it resolves to back into the component.
fn run<F>(ctx: &Context<CertificateFormComponent>, future: F)
where
    F: Future<Output = Msg> + 'static,
{
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(future.await);
    });
}

/// Applies a workflow outcome: log, mutate state, then show the notice.
fn finish(component: &mut CertificateFormComponent, operation: &str, outcome: Outcome) -> bool {
    log_outcome(operation, &outcome);

    let completed = matches!(outcome, Outcome::Completed { .. });
    let notice = outcome.apply(&mut component.form, &mut component.wizard);
    if completed {
        component.clear();
    } else {
        component.sync_preview();
    }

    if let Some(notice) = notice {
        show_notice(&notice.to_string());
    }
    true
}
