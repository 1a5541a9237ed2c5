//! Footer with navigation between the two pages

use leptos::*;
use leptos_router::A;

#[component]
pub fn Footer(
    /// Route to link to.
    href: &'static str,
    /// Link text.
    label: &'static str,
) -> impl IntoView {
    view! {
        <footer>
            <A href=href class="footer-link">{label}</A>
        </footer>
    }
}
