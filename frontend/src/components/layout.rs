use leptos::*;

pub const BRAND: &str = "SoftSell";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-container">
                <h1 class="logo">{BRAND}</h1>
                <nav class="nav-links"></nav>
            </div>
        </header>
    }
}

#[component]
pub fn Section(
    title: &'static str,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!("section {class}")>
            <h2 class="section-title">{title}</h2>
            {children()}
        </section>
    }
}
