use crate::state::theme::use_theme;
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current_theme = theme_state.current();

    let on_change = move |_| {
        theme_state.toggle();
    };

    view! {
        <div class="theme-switch-wrapper">
            <i class="fas fa-sun theme-icon" aria-hidden="true"></i>
            <label class="theme-switch">
                <input
                    type="checkbox"
                    aria-label="Toggle dark mode"
                    prop:checked=move || current_theme.get().is_dark()
                    on:change=on_change
                />
                <span class="slider"></span>
            </label>
            <i class="fas fa-moon theme-icon" aria-hidden="true"></i>
        </div>
    }
}
