//! Analysis result display.

use leptos::*;

use crate::view_model::{JobView, ResultView};

#[component]
pub fn AnalysisResultPanel(result: ResultView) -> impl IntoView {
    let ResultView {
        score,
        important_terms,
        key_phrases,
        entities,
        sections,
        suggestions,
        jobs,
    } = result;

    view! {
        <div class="analysis-result">
            <h3>"Analysis Result"</h3>
            <p class="score">"Score: " <strong>{score}</strong></p>

            <h4>"Important Terms"</h4>
            <ItemList items=important_terms/>

            <h4>"Key Phrases"</h4>
            <ItemList items=key_phrases/>

            <h4>"Entities"</h4>
            <ul class="entities">
                {entities
                    .into_iter()
                    .map(|(text, label)| view! { <li><strong>{text}</strong> ": " {label}</li> })
                    .collect_view()}
            </ul>

            <h4>"Structured Information"</h4>
            {sections
                .into_iter()
                .map(|section| view! {
                    <h5>{section.label}</h5>
                    <ItemList items=section.items/>
                })
                .collect_view()}

            <h4>"Suggestions"</h4>
            <ItemList items=suggestions/>

            <h4>"Matching Jobs"</h4>
            <ul class="matching-jobs">
                <For
                    each=move || jobs.clone().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, job)| view! { <JobLine job=job/> }
                />
            </ul>
        </div>
    }
}

#[component]
fn JobLine(job: JobView) -> impl IntoView {
    view! {
        <li class="job">
            <div class="job-headline">{job.headline}</div>
            <div class="job-details">
                {job.match_score} " • " {job.skills_matched} " • "
                "Experience match: " {job.experience_match}
            </div>
            <a href=job.link target="_blank" rel="noopener noreferrer">"View job posting"</a>
        </li>
    }
}

/// Plain list; an empty input still renders the (empty) list element.
#[component]
fn ItemList(items: Vec<String>) -> impl IntoView {
    view! {
        <ul>
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
        </ul>
    }
}
