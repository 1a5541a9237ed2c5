//! Multipart upload of selected files with per-file progress.
//!
//! `fetch` exposes no upload progress, so each file goes through its own
//! `XMLHttpRequest` and its `upload.onprogress`, `onload` and `onerror`
//! callbacks feed the progress store. The callbacks are released once the
//! request settles.

use file_sharing::{
    dispatch, progress_event, ClientError, ClientResult, ProgressSink, ProgressStore,
    SelectedFile, TaskKey, UploadEvent, UploadTransport,
};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, FormData, ProgressEvent, XmlHttpRequest, XmlHttpRequestUpload};

use crate::config::server_config;

/// Multipart form field carrying the file.
const FILE_FIELD: &str = "file";

/// Progress store held in a reactive signal.
///
/// Callbacks that fire after the owning page unmounted find the signal
/// disposed and are dropped.
#[derive(Clone, Copy)]
pub struct StoreSink(pub RwSignal<ProgressStore>);

impl ProgressSink for StoreSink {
    fn begin(&self, name: &str, size: u64) -> Option<TaskKey> {
        self.0.try_update(|store| store.begin(name, size))
    }

    fn apply(&self, key: &TaskKey, event: UploadEvent) {
        if self.0.try_update(|store| store.apply(key, event)).is_none() {
            log::debug!("Upload page gone, dropping {:?} for {}", event, key);
        }
    }
}

/// Browser transport: one `XMLHttpRequest` per file.
pub struct XhrTransport {
    url: String,
}

impl XhrTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl UploadTransport for XhrTransport {
    type File = File;

    fn start<S: ProgressSink>(&self, key: TaskKey, file: File, sink: S) -> ClientResult<()> {
        let form_data = FormData::new().map_err(browser_error("Failed to create FormData"))?;
        form_data
            .append_with_blob_and_filename(FILE_FIELD, &file, &file.name())
            .map_err(browser_error("Failed to append file"))?;

        let xhr = XmlHttpRequest::new().map_err(browser_error("Failed to create request"))?;
        xhr.open_with_async("POST", &self.url, true)
            .map_err(browser_error("Failed to open request"))?;
        let upload = xhr.upload().map_err(browser_error("Upload target unavailable"))?;

        let slot = HandlerSlot::empty();

        let on_progress = {
            let sink = sink.clone();
            let key = key.clone();
            Closure::wrap(Box::new(move |event: ProgressEvent| {
                let event = progress_event(event.length_computable(), event.loaded(), event.total());
                sink.apply(&key, event);
            }) as Box<dyn FnMut(ProgressEvent)>)
        };

        let on_load = {
            let sink = sink.clone();
            let key = key.clone();
            let (request, upload, slot) = (xhr.clone(), upload.clone(), slot.clone());
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                let event = match request.status() {
                    Ok(status) => UploadEvent::Completed { status },
                    Err(_) => UploadEvent::TransportFailed,
                };
                sink.apply(&key, event);
                settle(&request, &upload, &slot);
            }) as Box<dyn FnMut(web_sys::Event)>)
        };

        let on_failure = {
            let (request, upload, slot) = (xhr.clone(), upload.clone(), slot.clone());
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                sink.apply(&key, UploadEvent::TransportFailed);
                settle(&request, &upload, &slot);
            }) as Box<dyn FnMut(web_sys::Event)>)
        };

        upload.set_onprogress(Some(on_progress.as_ref().unchecked_ref()));
        xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
        xhr.set_onerror(Some(on_failure.as_ref().unchecked_ref()));
        xhr.set_onabort(Some(on_failure.as_ref().unchecked_ref()));
        xhr.set_ontimeout(Some(on_failure.as_ref().unchecked_ref()));

        slot.fill(XhrHandlers {
            _progress: on_progress,
            _load: on_load,
            _failure: on_failure,
        });

        xhr.send_with_opt_form_data(Some(&form_data)).map_err(|e| {
            detach(&xhr, &upload);
            drop(slot.release());
            browser_error("Failed to send request")(e)
        })
    }
}

/// Callbacks registered on one request.
struct XhrHandlers {
    _progress: Closure<dyn FnMut(ProgressEvent)>,
    _load: Closure<dyn FnMut(web_sys::Event)>,
    _failure: Closure<dyn FnMut(web_sys::Event)>,
}

/// Shared owner of a request's callbacks until the request settles.
///
/// The callbacks hold clones of the slot, so the cycle lasts exactly until
/// [`HandlerSlot::release`] is called.
struct HandlerSlot<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for HandlerSlot<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> HandlerSlot<T> {
    fn empty() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    fn fill(&self, value: T) {
        *self.0.borrow_mut() = Some(value);
    }

    /// Take the value out; later calls get `None`.
    fn release(&self) -> Option<T> {
        self.0.borrow_mut().take()
    }
}

fn detach(xhr: &XmlHttpRequest, upload: &XmlHttpRequestUpload) {
    upload.set_onprogress(None);
    xhr.set_onload(None);
    xhr.set_onerror(None);
    xhr.set_onabort(None);
    xhr.set_ontimeout(None);
}

/// Unregister the callbacks and free them.
///
/// Runs inside one of those callbacks, so the drop is deferred to a task
/// after the current one returns.
fn settle(xhr: &XmlHttpRequest, upload: &XmlHttpRequestUpload, slot: &HandlerSlot<XhrHandlers>) {
    detach(xhr, upload);
    if let Some(handlers) = slot.release() {
        set_timeout(move || drop(handlers), Duration::ZERO);
    }
}

/// Snapshot a browser file list into dispatchable selections.
pub fn selected_files(list: &FileList) -> Vec<SelectedFile<File>> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| SelectedFile::new(file.name(), file.size() as u64, file))
        .collect()
}

/// Upload every file in `list`, tracking progress in `store`.
pub fn upload_files(list: &FileList, store: RwSignal<ProgressStore>) -> Vec<TaskKey> {
    let transport = XhrTransport::new(server_config().upload_url());
    dispatch(&transport, &StoreSink(store), selected_files(list))
}

fn browser_error(context: &'static str) -> impl Fn(JsValue) -> ClientError {
    move |e| ClientError::Browser(format!("{}: {:?}", context, e))
}
