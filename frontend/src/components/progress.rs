//! Per-file progress bars and status text.

use file_sharing::{ProgressStore, StoreSummary, TaskKey};
use leptos::*;

#[component]
pub fn ProgressSection(store: RwSignal<ProgressStore>) -> impl IntoView {
    let keys = move || store.with(|s| s.tasks().iter().map(|t| t.key.clone()).collect::<Vec<_>>());

    view! {
        <Show when=move || store.with(|s| !s.is_empty()) fallback=|| view! { }>
            <div class="progress-section">
                <div class="progress-summary">
                    {move || summary_text(&store.with(ProgressStore::summary))}
                </div>
                <For
                    each=keys
                    key=|key| key.clone()
                    children=move |key| view! { <ProgressRow store=store task_key=key/> }
                />
            </div>
        </Show>
    }
}

#[component]
fn ProgressRow(store: RwSignal<ProgressStore>, task_key: TaskKey) -> impl IntoView {
    let task = create_memo(move |_| store.with(|s| s.get(&task_key).cloned()));

    let name = move || task.with(|t| t.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let percent = move || task.with(|t| t.as_ref().map(|t| t.percent()).unwrap_or_default());
    let status = move || task.with(|t| t.as_ref().map(|t| t.status_text()).unwrap_or_default());
    let state_class = move || {
        task.with(|t| {
            let modifier = t.as_ref().map(|t| t.state.css_class()).unwrap_or_default();
            format!("progress-row {}", modifier)
        })
    };

    view! {
        <div class=state_class>
            <span class="progress-name">{name}</span>
            <div class="progress-bar">
                <div class="progress-fill" style=move || bar_style(percent())></div>
            </div>
            <span class="progress-status">{status}</span>
        </div>
    }
}

/// Inline width of a progress bar fill.
fn bar_style(percent: f64) -> String {
    format!("width: {:.0}%;", percent.clamp(0.0, 100.0))
}

/// One-line batch summary, e.g. `2 of 3 uploads finished (1 failed)`.
fn summary_text(summary: &StoreSummary) -> String {
    let mut text = format!("{} of {} uploads finished", summary.finished(), summary.total());
    if summary.failed > 0 {
        text.push_str(&format!(" ({} failed)", summary.failed));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_style() {
        assert_eq!(bar_style(0.0), "width: 0%;");
        assert_eq!(bar_style(42.6), "width: 43%;");
        assert_eq!(bar_style(150.0), "width: 100%;");
    }

    #[test]
    fn test_summary_text() {
        let summary = StoreSummary {
            pending: 0,
            in_progress: 1,
            succeeded: 1,
            failed: 1,
        };
        assert_eq!(summary_text(&summary), "2 of 3 uploads finished (1 failed)");
        assert_eq!(
            summary_text(&StoreSummary { succeeded: 2, ..Default::default() }),
            "2 of 2 uploads finished"
        );
    }
}
