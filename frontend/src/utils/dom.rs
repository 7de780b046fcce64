use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::storage::window;

pub const CONTACT_FORM_ID: &str = "contact-form";

pub fn scroll_to_element(id: &str) {
    let Some(element) = window()
        .ok()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        log::debug!("scroll target #{id} not found");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_contact_form() {
    scroll_to_element(CONTACT_FORM_ID);
}
