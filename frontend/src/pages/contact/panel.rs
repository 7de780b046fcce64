use leptos::*;

use super::utils::{LeadField, LicenseType};
use super::view_model::{LeadFormController, SubmissionStatus};
use crate::utils::dom::CONTACT_FORM_ID;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your submission has been received.";

#[component]
pub fn LeadFormPanel(controller: LeadFormController) -> impl IntoView {
    let status = controller.status();
    let submitting = move || status.get() == SubmissionStatus::Submitting;
    // Locked for the send and for the success banner.
    let locked = move || status.get() != SubmissionStatus::Idle;

    let on_submit = {
        let controller = controller.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let controller = controller.clone();
            spawn_local(async move {
                controller.submit().await;
            });
        }
    };

    view! {
        <section id=CONTACT_FORM_ID class="section contact-form">
            <h2 class="section-title">"Get Started Today"</h2>
            <Show when=move || status.get() == SubmissionStatus::SubmittedSuccess>
                <div class="success-message" role="status">{SUCCESS_MESSAGE}</div>
            </Show>
            <form class="form-container" novalidate=true on:submit=on_submit>
                <TextField
                    controller=controller.clone()
                    field=LeadField::Name
                    label="Name"
                    icon="fa-user"
                    input_type="text"
                    placeholder="Your full name"
                />
                <TextField
                    controller=controller.clone()
                    field=LeadField::Email
                    label="Email"
                    icon="fa-envelope"
                    input_type="email"
                    placeholder="Your email address"
                />
                <TextField
                    controller=controller.clone()
                    field=LeadField::Company
                    label="Company"
                    icon="fa-building"
                    input_type="text"
                    placeholder="Your company name"
                />
                <LicenseSelect controller=controller.clone() />
                <MessageField controller=controller />
                <button type="submit" class="submit-button" disabled=locked>
                    {move || if submitting() { "Submitting..." } else { "Submit Inquiry" }}
                </button>
            </form>
        </section>
    }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "form-input error"
    } else {
        "form-input"
    }
}

#[component]
fn FieldError(controller: LeadFormController, field: LeadField) -> impl IntoView {
    let errors = controller.errors();
    move || {
        errors
            .with(|errors| errors.get(&field).cloned())
            .map(|message| view! { <span class="error-message">{message}</span> })
    }
}

#[component]
fn TextField(
    controller: LeadFormController,
    field: LeadField,
    label: &'static str,
    icon: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let fields = controller.fields();
    let errors = controller.errors();
    let has_error = move || errors.with(|errors| errors.contains_key(&field));
    let error_controller = controller.clone();

    view! {
        <div class="form-group">
            <label for=field.as_str()>
                <i class=format!("fas {icon} input-icon")></i>
                " "
                {label}
            </label>
            <input
                type=input_type
                id=field.as_str()
                name=field.as_str()
                placeholder=placeholder
                class=move || input_class(has_error())
                prop:value=move || fields.with(|f| f.value(field))
                on:input=move |ev| controller.set_field(field, event_target_value(&ev))
            />
            <FieldError controller=error_controller field=field />
        </div>
    }
}

#[component]
fn LicenseSelect(controller: LeadFormController) -> impl IntoView {
    let field = LeadField::LicenseType;
    let fields = controller.fields();
    let errors = controller.errors();
    let has_error = move || errors.with(|errors| errors.contains_key(&field));
    let error_controller = controller.clone();

    view! {
        <div class="form-group">
            <label for=field.as_str()>"License Type"</label>
            <select
                id=field.as_str()
                name=field.as_str()
                class=move || input_class(has_error())
                prop:value=move || fields.with(|f| f.value(field))
                on:change=move |ev| controller.set_field(field, event_target_value(&ev))
            >
                <option value="">"Select license type"</option>
                {LicenseType::ALL
                    .into_iter()
                    .map(|kind| view! { <option value=kind.as_str()>{kind.as_str()}</option> })
                    .collect_view()}
            </select>
            <FieldError controller=error_controller field=field />
        </div>
    }
}

#[component]
fn MessageField(controller: LeadFormController) -> impl IntoView {
    let field = LeadField::Message;
    let fields = controller.fields();

    view! {
        <div class="form-group">
            <label for=field.as_str()>"Message"</label>
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows=4
                placeholder="Tell us about your licenses"
                class="form-input"
                prop:value=move || fields.with(|f| f.value(field))
                on:input=move |ev| controller.set_field(field, event_target_value(&ev))
            ></textarea>
        </div>
    }
}
