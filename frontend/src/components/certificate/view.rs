//! View rendering for the certificate form.
//!
//! Step 1 is the data-entry form with search, course suggestions and the
//! image picker; step 2 is a read-only preview with the commit button that
//! matches the wizard's intent.

use common::form::Field;
use common::wizard::{Intent, WizardState};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CertificateFormComponent;

pub fn view(component: &CertificateFormComponent, ctx: &Context<CertificateFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="certificate-root" style="position:relative;max-width:640px;margin:2rem auto;font-family:Arial, sans-serif;">
            <button
                class="close-btn"
                title="Close"
                style="position:absolute;top:0;right:0;font-size:1.5rem;background:none;border:none;cursor:pointer;"
                onclick={link.callback(|_| Msg::Reset)}
            >
                { "✕" }
            </button>
            {
                match component.wizard {
                    WizardState::DataEntry { .. } => build_entry_step(component, link),
                    WizardState::Preview(intent) => build_preview_step(component, link, intent),
                }
            }
            <input
                type="file"
                accept="image/*"
                style="display:none;"
                ref={component.file_input_ref.clone()}
                onchange={link.batch_callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    input.files().and_then(|files| files.get(0)).map(Msg::FileChosen)
                })}
            />
        </div>
    }
}

fn build_entry_step(component: &CertificateFormComponent, link: &Scope<CertificateFormComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Preview
    });

    html! {
        <form class="entry-step" {onsubmit}>
            <h2>{ "Student Certificate" }</h2>
            { mode_badge(component) }
            {
                for Field::ALL.into_iter().map(|field| {
                    if field == Field::CourseCode {
                        build_course_field(component, link)
                    } else {
                        text_input(component, link, field)
                    }
                })
            }
            { build_image_picker(component, link) }
            <div class="actions" style="display:flex;gap:0.5rem;margin-top:1rem;">
                <button type="button" onclick={link.callback(|_| Msg::Search)}>{ "Search" }</button>
                <button type="submit">{ "Preview" }</button>
                <button type="button" onclick={link.callback(|_| Msg::Delete)}>{ "Delete" }</button>
            </div>
        </form>
    }
}

fn text_input(
    component: &CertificateFormComponent,
    link: &Scope<CertificateFormComponent>,
    field: Field,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        Msg::Edit(field, e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <label class="field" style="display:flex;flex-direction:column;margin-bottom:0.5rem;">
            <span>{ field.label() }</span>
            <input
                type={field.input_type()}
                name={field.name()}
                value={component.form.get(field).to_string()}
                autocomplete="off"
                {oninput}
            />
        </label>
    }
}

/// Course code input plus its dropdown. `course_ref` wraps both so clicks on
/// a suggestion do not count as outside clicks.
fn build_course_field(
    component: &CertificateFormComponent,
    link: &Scope<CertificateFormComponent>,
) -> Html {
    html! {
        <div class="course-field" style="position:relative;" ref={component.course_ref.clone()}>
            { text_input(component, link, Field::CourseCode) }
            {
                if component.suggestions.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="suggestions" style="position:absolute;top:100%;left:0;right:0;z-index:10;margin:0;padding:0;list-style:none;background:#fff;border:1px solid #ccc;max-height:200px;overflow-y:auto;">
                            {
                                for component.suggestions.items().iter().map(|item| {
                                    let label = item.label();
                                    let picked = label.clone();
                                    html! {
                                        <li
                                            style="padding:4px 8px;cursor:pointer;"
                                            onclick={link.callback(move |_| Msg::PickSuggestion(picked.clone()))}
                                        >
                                            { label }
                                        </li>
                                    }
                                })
                            }
                        </ul>
                    }
                }
            }
        </div>
    }
}

fn build_image_picker(
    component: &CertificateFormComponent,
    link: &Scope<CertificateFormComponent>,
) -> Html {
    let open = link.callback(|_| Msg::OpenFilePicker);

    html! {
        <div class="image-picker" style="margin-top:0.5rem;">
            {
                match component.preview_url() {
                    Some(url) => html! {
                        <img
                            src={url}
                            alt="Certificate preview"
                            title="Click to replace"
                            style="max-width:240px;max-height:240px;cursor:pointer;"
                            onclick={open}
                        />
                    },
                    None => html! {
                        <button type="button" onclick={open}>{ "Upload image" }</button>
                    },
                }
            }
            if !component.form.image_name.is_empty() {
                <div class="image-name" style="font-size:0.85rem;color:#555;">{ component.form.image_name.clone() }</div>
            }
        </div>
    }
}

fn build_preview_step(
    component: &CertificateFormComponent,
    link: &Scope<CertificateFormComponent>,
    intent: Intent,
) -> Html {
    let commit = match intent {
        Intent::Create => html! {
            <button type="button" onclick={link.callback(|_| Msg::Submit)}>{ "Submit" }</button>
        },
        Intent::Update => html! {
            <>
                <button type="button" onclick={link.callback(|_| Msg::ConfirmUpdate)}>{ "Update" }</button>
                <button type="button" onclick={link.callback(|_| Msg::Delete)}>{ "Delete" }</button>
            </>
        },
    };

    html! {
        <div class="preview-step">
            <h2>{ "Preview" }</h2>
            { mode_badge(component) }
            <table style="border-collapse:collapse;width:100%;">
                {
                    for Field::ALL.into_iter().map(|field| html! {
                        <tr>
                            <th style="text-align:left;padding:4px;">{ field.label() }</th>
                            <td style="padding:4px;">{ component.form.get(field).to_string() }</td>
                        </tr>
                    })
                }
                if let Some(number) = &component.form.certificate_number {
                    <tr>
                        <th style="text-align:left;padding:4px;">{ "Certificate No." }</th>
                        <td style="padding:4px;">{ number.clone() }</td>
                    </tr>
                }
            </table>
            { build_image_picker(component, link) }
            <div class="actions" style="display:flex;gap:0.5rem;margin-top:1rem;">
                { commit }
                <button type="button" onclick={link.callback(|_| Msg::Reset)}>{ "Cancel" }</button>
            </div>
        </div>
    }
}

fn mode_badge(component: &CertificateFormComponent) -> Html {
    match component.wizard.mode() {
        "" => html! {},
        mode => html! {
            <div class="mode-badge" style="font-size:0.8rem;text-transform:uppercase;color:#1976d2;">
                { format!("Step {} · {}", component.wizard.step(), mode) }
            </div>
        },
    }
}
