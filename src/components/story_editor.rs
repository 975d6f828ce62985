//! Story Editor Component
//!
//! Markdown textarea with a formatting toolbar, live preview and counters.

use leptos::html;
use leptos::prelude::*;

use crate::config::MAX_CONTENT_CHARS;
use crate::format::{chars_left, word_count};
use crate::markdown::{apply_format, render_markdown, Format};

#[component]
pub fn StoryEditor(
    content: ReadSignal<String>,
    set_content: WriteSignal<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(default = "Start writing your story...")] placeholder: &'static str,
) -> impl IntoView {
    let (show_preview, set_show_preview) = signal(false);
    let textarea_ref = NodeRef::<html::Textarea>::new();

    let format_selection = move |format: Format| {
        let Some(textarea) = textarea_ref.get() else {
            return;
        };
        let text = textarea.value();
        let start = textarea.selection_start().ok().flatten().unwrap_or(0);
        let end = textarea.selection_end().ok().flatten().unwrap_or(start);

        let out = apply_format(&text, start, end, format);
        textarea.set_value(&out.text);
        set_content.set(out.text);
        let _ = textarea.focus();
        let _ = textarea.set_selection_range(out.selection_start, out.selection_end);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if !(ev.ctrl_key() || ev.meta_key()) {
            return;
        }
        if let Some(format) = Format::from_shortcut(&ev.key()) {
            ev.prevent_default();
            format_selection(format);
        }
    };

    let toolbar_button = move |format: Format, glyph: &'static str, class: &'static str| {
        view! {
            <button
                type="button"
                class=format!("toolbar-btn {}", class)
                title=format.title()
                disabled=move || disabled.get() || show_preview.get()
                on:click=move |_| format_selection(format)
            >
                {glyph}
            </button>
        }
    };

    view! {
        <div class="story-editor">
            <div class="editor-toolbar">
                <div class="toolbar-group">
                    {toolbar_button(Format::Bold, "B", "bold")}
                    {toolbar_button(Format::Italic, "I", "italic")}
                    {toolbar_button(Format::Underline, "U", "underline")}
                    <span class="toolbar-divider"></span>
                    <button
                        type="button"
                        class="toolbar-btn"
                        title="Toggle Preview"
                        on:click=move |_| set_show_preview.update(|p| *p = !*p)
                    >
                        {move || if show_preview.get() { "✎ Edit" } else { "👁 Preview" }}
                    </button>
                </div>
                <div class="editor-counter">
                    {move || {
                        let text = content.get();
                        format!(
                            "{} words • {} chars left",
                            word_count(&text),
                            chars_left(&text, MAX_CONTENT_CHARS),
                        )
                    }}
                </div>
            </div>

            <Show
                when=move || show_preview.get()
                fallback=move || view! {
                    <textarea
                        node_ref=textarea_ref
                        class="editor-textarea"
                        placeholder=placeholder
                        maxlength=MAX_CONTENT_CHARS.to_string()
                        disabled=move || disabled.get()
                        prop:value=move || content.get()
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                }
            >
                <div class="story-content preview" inner_html=move || render_markdown(&content.get())></div>
            </Show>

            <div class="editor-hint">
                "Markdown supported: **bold**, *italic*, # headings, > quotes. Shortcuts: Ctrl+B, Ctrl+I, Ctrl+U"
            </div>
        </div>
    }
}
