use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::rc::Rc;

use crate::{
    config::RuntimeConfigSource,
    pages::{
        contact::{repository::ConfiguredLeadSink, view_model::LeadServices},
        home::HomePage,
    },
    state::theme::{provide_theme, ThemePreference},
    utils::timer::BrowserDelay,
};

pub const PAGE_TITLE: &str = "SoftSell | Sell Your Unused Software Licenses";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();

    let theme = ThemePreference::browser();
    theme.initialize();
    provide_theme(theme);

    let delay = Rc::new(BrowserDelay);
    provide_context(LeadServices {
        sink: Rc::new(ConfiguredLeadSink::new(
            Rc::new(RuntimeConfigSource),
            delay.clone(),
        )),
        delay,
    });

    view! {
        <Title text=PAGE_TITLE/>
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to SoftSell"</a>
        </div>
    }
}
