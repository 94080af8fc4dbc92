//! Landing page: hero section and feature grid

use leptos::*;
use leptos_router::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <Hero/>

            <section class="features">
                <h2>"Our Features"</h2>
                <div class="feature-grid">
                    <Feature
                        title="AI-powered Analysis"
                        description="Get instant feedback on your resume quality"
                    />
                    <Feature
                        title="Job Matching"
                        description="Find positions that fit your skills and experience"
                    />
                    <Feature
                        title="Privacy First"
                        description="Your data is processed securely and never stored"
                    />
                </div>
            </section>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Welcome to ResuMaitcher"</h1>
            <p class="subtitle">"Analyze your resume and find matching job positions with AI"</p>
            <A href="/upload" class="cta-button">"Get Started"</A>
        </section>
    }
}

#[component]
fn Feature(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature">
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}
