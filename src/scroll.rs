use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

/// Header appearance derived from the vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    AtTop,
    Scrolled,
}

impl HeaderState {
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            HeaderState::Scrolled
        } else {
            HeaderState::AtTop
        }
    }

    pub fn is_scrolled(&self) -> bool {
        matches!(self, HeaderState::Scrolled)
    }
}

/// Something that reports a vertical scroll offset and lets callers listen to it.
pub trait ScrollSource {
    type Handle;

    fn offset(&self) -> f64;
    fn listen(&self, on_scroll: Box<dyn FnMut(f64)>) -> Self::Handle;
    fn unlisten(&self, handle: Self::Handle);
}

/// Keeps one listener registered on a [`ScrollSource`] for as long as it lives.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    /// Registers `on_scroll` and immediately reports the current offset to it.
    pub fn new(source: S, mut on_scroll: impl FnMut(f64) + 'static) -> Self {
        on_scroll(source.offset());
        let handle = source.listen(Box::new(on_scroll));
        Self { source, handle: Some(handle) }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unlisten(handle);
        }
    }
}

pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ScrollSource for WindowScroll {
    type Handle = Closure<dyn FnMut()>;

    fn offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn listen(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Self::Handle {
        let window = self.window.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Ok(offset) = window.scroll_y() {
                on_scroll(offset);
            }
        }) as Box<dyn FnMut()>);

        if let Err(err) = self
            .window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to register scroll listener: {:?}", err);
        }
        callback
    }

    fn unlisten(&self, handle: Self::Handle) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", handle.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", err);
        }
    }
}

/// Tracks the header state for the window, re-rendering only when it flips.
#[hook]
pub fn use_header_state(threshold: f64) -> HeaderState {
    let state = use_state_eq(|| HeaderState::AtTop);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let subscription = web_sys::window().map(|window| {
                    let mut last = HeaderState::AtTop;
                    ScrollSubscription::new(WindowScroll::new(window), move |offset| {
                        let next = HeaderState::from_offset(offset, threshold);
                        if next != last {
                            debug!("Header state {:?} -> {:?} at {}px", last, next, offset);
                            last = next;
                        }
                        state.set(next);
                    })
                });

                move || drop(subscription)
            },
            threshold,
        );
    }

    *state
}
