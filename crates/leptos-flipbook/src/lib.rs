//! Leptos Flipbook Utilities
//!
//! Page layout and page-turn navigation for Leptos.
//! A page turn completes after a fixed animation delay; requests made
//! during a turn are dropped.

mod cursor;
mod pages;

pub use cursor::PageCursor;
pub use pages::{page_count, paginate, Layout, Page, PageKind};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Page-turn animation time in milliseconds
pub const FLIP_DELAY_MS: i32 = 300;

/// Navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipRequest {
    Next,
    Prev,
    Goto(usize),
}

/// What a key press maps to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Flip(FlipRequest),
    ExitFullscreen,
}

/// Flipbook state signals
#[derive(Clone, Copy)]
pub struct FlipSignals {
    pub cursor_read: ReadSignal<PageCursor>,
    pub cursor_write: WriteSignal<PageCursor>,
    pub fullscreen_read: ReadSignal<bool>,
    pub fullscreen_write: WriteSignal<bool>,
}

pub fn create_flip_signals(total: usize) -> FlipSignals {
    let (cursor_read, cursor_write) = signal(PageCursor::new(total));
    let (fullscreen_read, fullscreen_write) = signal(false);
    FlipSignals {
        cursor_read,
        cursor_write,
        fullscreen_read,
        fullscreen_write,
    }
}

/// Start a page turn. Returns the target page when the request was accepted.
pub fn request_flip(flip: &FlipSignals, request: FlipRequest) -> Option<usize> {
    let mut target = None;
    flip.cursor_write.update(|cursor| {
        target = match request {
            FlipRequest::Next => cursor.begin_next(),
            FlipRequest::Prev => cursor.begin_prev(),
            FlipRequest::Goto(page) => cursor.begin_goto(page),
        };
    });

    if target.is_some() {
        schedule_finish(*flip);
    }
    target
}

/// Complete the turn after the animation delay
fn schedule_finish(flip: FlipSignals) {
    let finish = move || {
        // The owning component may be gone by the time the timer fires
        flip.cursor_write.try_update(|cursor| {
            cursor.finish();
        });
    };

    if let Some(win) = web_sys::window() {
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(finish);
        let scheduled = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), FLIP_DELAY_MS)
            .is_ok();
        if scheduled {
            cb.forget();
            return;
        }
    }
    finish();
}

pub fn toggle_fullscreen(flip: &FlipSignals) {
    flip.fullscreen_write.update(|on| *on = !*on);
}

/// Map a `KeyboardEvent.key` value to a flipbook action
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowRight" | " " => Some(KeyAction::Flip(FlipRequest::Next)),
        "ArrowLeft" => Some(KeyAction::Flip(FlipRequest::Prev)),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}

/// Bind window keydown navigation for the lifetime of the current owner
pub fn bind_keyboard(flip: FlipSignals) {
    let handle = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        match key_action(&ev.key()) {
            Some(KeyAction::Flip(request)) => {
                ev.prevent_default();
                request_flip(&flip, request);
            }
            Some(KeyAction::ExitFullscreen) => {
                flip.fullscreen_write.set(false);
            }
            None => {}
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_action() {
        assert_eq!(key_action("ArrowRight"), Some(KeyAction::Flip(FlipRequest::Next)));
        assert_eq!(key_action(" "), Some(KeyAction::Flip(FlipRequest::Next)));
        assert_eq!(key_action("ArrowLeft"), Some(KeyAction::Flip(FlipRequest::Prev)));
        assert_eq!(key_action("Escape"), Some(KeyAction::ExitFullscreen));
        assert_eq!(key_action("Enter"), None);
    }
}
