use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::Config;

/// Current viewport width in CSS pixels, if a window is available.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Whether the sidebar should be forced into its collapsed form at this width.
pub fn is_small_screen(width: f64) -> bool {
    width < Config::SMALL_SCREEN_MAX_WIDTH
}

/// Listens for window resizes and reports the viewport width once resizing has
/// been quiet for `delay_ms`.
///
/// The returned listener must be kept alive for as long as updates are wanted;
/// dropping it detaches the handler.
pub fn on_viewport_resize<F>(delay_ms: u32, callback: F) -> Option<EventListener>
where
    F: Fn(f64) + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        // Dropping a Timeout cancels it
        pending.borrow_mut().take();

        let callback = callback.clone();
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(width) = viewport_width() {
                callback(width);
            }
        });
        *pending.borrow_mut() = Some(timeout);
    }))
}
