use leptos::*;

#[component]
pub fn StepCard(icon: &'static str, title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="step-card">
            <div class="step-icon">
                <i class=format!("fas {icon} icon") aria-hidden="true"></i>
            </div>
            <h3>{title}</h3>
            <p>{body}</p>
        </div>
    }
}

#[component]
pub fn BenefitCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="benefit-card">
            <div class="benefit-icon">
                <i class="fas fa-check icon" aria-hidden="true"></i>
            </div>
            <h3>{title}</h3>
            <p>{body}</p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(
    quote: &'static str,
    author: &'static str,
    role: &'static str,
) -> impl IntoView {
    view! {
        <div class="testimonial-card">
            <div class="quote-icon">
                <i class="fas fa-quote-left icon" aria-hidden="true"></i>
            </div>
            <p class="testimonial-text">{format!("\"{quote}\"")}</p>
            <div class="testimonial-author">
                <h4>{author}</h4>
                <p>{role}</p>
            </div>
        </div>
    }
}
