//! Page heading

use leptos::*;
use leptos_meta::Title;

#[component]
pub fn Hero(
    /// Heading text, also used as the document title.
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Title text=title/>
        <div class="hero">
            <h1>{title}</h1>
            {subtitle.map(|text| view! { <p class="subtitle">{text}</p> })}
        </div>
    }
}
