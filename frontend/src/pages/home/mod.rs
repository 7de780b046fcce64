use leptos::*;

mod content;

use crate::components::cards::{BenefitCard, StepCard, TestimonialCard};
use crate::components::layout::{Header, Section};
use crate::components::theme::ThemeToggle;
use crate::pages::contact::ContactSection;
use crate::utils::dom::scroll_to_contact_form;
use content::{BENEFITS, HERO_SUBHEADING, HERO_TITLE, STEPS, TESTIMONIALS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <ThemeToggle />
            <Hero />
            <Section title="How It Works" class="how-it-works">
                <div class="steps-container">
                    {STEPS
                        .iter()
                        .map(|step| view! { <StepCard icon=step.icon title=step.title body=step.body /> })
                        .collect_view()}
                </div>
            </Section>
            <Section title="Why Choose Us" class="why-choose-us">
                <div class="benefits-grid">
                    {BENEFITS
                        .iter()
                        .map(|benefit| view! { <BenefitCard title=benefit.title body=benefit.body /> })
                        .collect_view()}
                </div>
            </Section>
            <Section title="What Our Customers Say" class="testimonials">
                <div class="testimonials-container">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! { <TestimonialCard quote=t.quote author=t.author role=t.role /> })
                        .collect_view()}
                </div>
            </Section>
            <ContactSection />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero-section">
            <div class="hero-content">
                <h1>{HERO_TITLE}</h1>
                <p class="subheading">{HERO_SUBHEADING}</p>
                <div class="cta-buttons">
                    <button class="cta-button primary" on:click=|_| scroll_to_contact_form()>
                        "Get a Quote"
                    </button>
                    <button class="cta-button secondary" on:click=|_| scroll_to_contact_form()>
                        "Sell My License"
                    </button>
                </div>
            </div>
        </section>
    }
}
