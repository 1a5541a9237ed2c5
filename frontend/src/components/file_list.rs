//! List of files stored on the server, with search and paging.

use file_sharing::{build_listing, ListEntry, SearchQuery};
use leptos::*;
use web_sys::SubmitEvent;

use crate::config::{server_config, LIST_PAGE_SIZE};
use crate::services::search_files;

#[component]
pub fn FileList() -> impl IntoView {
    let config = store_value(server_config());
    let (query, set_query) = create_signal(SearchQuery::all(LIST_PAGE_SIZE));
    let (search_text, set_search_text) = create_signal(String::new());

    let files = create_local_resource(
        move || query.get(),
        move |query| async move { search_files(&config.get_value(), &query).await },
    );

    let page_len = move || {
        files
            .with(|result| result.as_ref().and_then(|r| r.as_ref().ok()).map(Vec::len))
            .unwrap_or(0)
    };

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let filename = search_text.get_untracked();
        set_query.update(|q| *q = q.with_filename(filename.trim()));
    };

    view! {
        <form class="file-search" on:submit=on_search>
            <input
                type="search"
                placeholder="Search by file name"
                prop:value=search_text
                on:input=move |ev| set_search_text.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-secondary">"Search"</button>
        </form>

        <Transition fallback=move || view! { <p class="file-list-status">"Loading files..."</p> }>
            {move || files.get().map(|result| match result {
                Ok(records) => {
                    log::info!("📂 Listing {} stored file(s)", records.len());
                    view! { <FileEntries entries=build_listing(&records, &config.get_value())/> }
                        .into_view()
                }
                Err(e) => {
                    log::error!("❌ Failed to list files: {}", e);
                    view! { <p class="error-message">{e.to_string()}</p> }.into_view()
                }
            })}
        </Transition>

        <div class="pager">
            <button
                class="btn btn-secondary"
                disabled=move || query.with(|q| q.page == 0)
                on:click=move |_| set_query.update(|q| *q = q.previous_page())
            >
                "Previous"
            </button>
            <span class="pager-page">{move || format!("Page {}", query.with(|q| q.page + 1))}</span>
            <button
                class="btn btn-secondary"
                disabled=move || !query.with(|q| q.has_more(page_len()))
                on:click=move |_| set_query.update(|q| *q = q.next_page())
            >
                "Next"
            </button>
        </div>
    }
}

/// One `<li>` per stored file.
#[component]
fn FileEntries(entries: Vec<ListEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p class="file-list-empty">"No files uploaded yet"</p> }.into_view();
    }

    view! {
        <ul class="file-list">
            {entries
                .into_iter()
                .map(|entry| view! {
                    <li class="file-entry" title=entry.stored_name>
                        <a class="file-name" href=entry.download_url target="_blank">
                            {entry.display_name}
                        </a>
                        <span class="file-size">{entry.size_label}</span>
                        <span class="file-date">{entry.uploaded_label}</span>
                    </li>
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}
