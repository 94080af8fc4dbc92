//! Footer component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2024 " {APP_NAME} ". All rights reserved."</p>
        </footer>
    }
}
