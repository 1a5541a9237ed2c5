//! File upload component with drag & drop support.
//!
//! Every dropped or picked file is uploaded on its own; progress lands in
//! the page's progress store.

use file_sharing::ProgressStore;
use leptos::*;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement};

use crate::services::upload_files;

#[component]
pub fn UploadSection(store: RwSignal<ProgressStore>) -> impl IntoView {
    let (drag, set_drag) = create_signal(DragDepth::default());
    let dragging = move || drag.get().is_over();
    let file_input = create_node_ref::<html::Input>();

    let start_uploads = move |files: Option<FileList>| {
        if let Some(files) = files {
            upload_files(&files, store);
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        start_uploads(input.files());
        // Allow picking the same file again.
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag.set(DragDepth::default());
        start_uploads(ev.data_transfer().and_then(|transfer| transfer.files()));
    };

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag.update(|d| *d = d.enter());
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div
            class="upload-section"
            class:dragging=dragging
            on:click=trigger_file_input
            on:dragenter=on_drag_enter
            on:dragover=|ev: DragEvent| ev.prevent_default()
            on:dragleave=move |_| set_drag.update(|d| *d = d.leave())
            on:drop=on_drop
        >
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">
                {move || if dragging() {
                    "Drop to upload"
                } else {
                    "Drag & drop files here"
                }}
            </div>
            <div class="upload-hint">"or click to select files"</div>
        </div>
        <input
            type="file"
            multiple
            style="display:none"
            node_ref=file_input
            on:change=on_file_change
        />
    }
}

/// Nesting depth of a drag inside the drop zone.
///
/// Moving between the zone's children fires `dragenter` on the child before
/// `dragleave` on the parent, so the zone stays highlighted until the depth
/// drops back to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DragDepth(u32);

impl DragDepth {
    fn enter(self) -> Self {
        Self(self.0 + 1)
    }

    fn leave(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    fn is_over(self) -> bool {
        self.0 > 0
    }
}
