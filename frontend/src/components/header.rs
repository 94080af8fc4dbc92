use leptos::*;
use leptos_router::A;

use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="logo">
                <A href="/">{APP_NAME}</A>
            </div>
            <nav>
                <ul>
                    <li><A href="/">"Home"</A></li>
                    <li><A href="/upload">"Upload Resume"</A></li>
                </ul>
            </nav>
        </header>
    }
}
