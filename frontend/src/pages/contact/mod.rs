use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::LeadFormPanel;

#[component]
pub fn ContactSection() -> impl IntoView {
    let controller = view_model::use_lead_form_controller();
    view! { <LeadFormPanel controller=controller /> }
}
