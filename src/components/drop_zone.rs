//! Drop Zone Component
//!
//! A file drop target that also opens the file picker when clicked.

use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList};

/// Collect a `FileList` into owned `File`s
pub fn files_from_list(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Drop zone for image files
#[component]
pub fn DropZone(
    /// Called with the dropped or picked files
    on_files: Callback<Vec<File>>,
    /// Value of the hidden input's `accept` attribute
    #[prop(into)]
    accept: String,
    /// Greyed out and inert when true
    #[prop(into)]
    disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            set_is_over.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop_handler = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if disabled.get_untracked() {
            return;
        }

        let files = files_from_list(ev.data_transfer().and_then(|dt| dt.files()));
        if !files.is_empty() {
            on_files.run(files);
        }
    };

    let open_picker = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let files = files_from_list(input.files());
        // Allow picking the same file again
        input.set_value("");
        if !files.is_empty() {
            on_files.run(files);
        }
    };

    view! {
        <div
            class=move || {
                let mut c = "drop-zone".to_string();
                if is_over.get() { c.push_str(" active"); }
                if disabled.get() { c.push_str(" disabled"); }
                c
            }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop_handler
            on:click=open_picker
        >
            <input
                node_ref=input_ref
                type="file"
                multiple=true
                accept=accept
                class="hidden-file-input"
                on:change=on_input_change
            />
            {children()}
        </div>
    }
}
