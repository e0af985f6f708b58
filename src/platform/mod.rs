//! Platform abstraction layer
//!
//! Browser wiring for the wasm32 build:
//! - Frame callbacks (requestAnimationFrame, at most one pending)
//! - Mouse/touch input scoped to the board
//! - DOM rendering of the dialog and board
//! - Toasts
//!
//! Native builds drive [`crate::GameLoop`] directly.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Wrap a per-frame handler so it only holds a weak reference to the host.
///
/// The host stores the resulting callback itself and reuses it for every
/// frame request, so neither side keeps the other alive. Frames delivered
/// after the host is gone are dropped.
pub fn weak_frame_handler<T, F>(
    host: &Rc<RefCell<T>>,
    mut on_frame: F,
) -> impl FnMut(f64) + 'static
where
    T: 'static,
    F: FnMut(&Rc<RefCell<T>>, f64) + 'static,
{
    let host: Weak<RefCell<T>> = Rc::downgrade(host);
    move |time| match host.upgrade() {
        Some(host) => on_frame(&host, time),
        None => log::trace!("Frame delivered after host was dropped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_handler_does_not_own_host() {
        let host = Rc::new(RefCell::new(Vec::<f64>::new()));
        let mut handler = weak_frame_handler(&host, |host, time| host.borrow_mut().push(time));

        // Many frames through one handler, no extra strong references
        for frame in 0..3 {
            handler(frame as f64 * 16.0);
        }
        assert_eq!(*host.borrow(), vec![0.0, 16.0, 32.0]);
        assert_eq!(Rc::strong_count(&host), 1);

        let weak = Rc::downgrade(&host);
        drop(host);
        assert!(weak.upgrade().is_none());
        handler(48.0);
    }

    #[test]
    fn test_host_owning_its_handler_is_freed() {
        struct Host {
            frames: u32,
            callback: Option<Box<dyn FnMut(f64)>>,
        }

        let host = Rc::new(RefCell::new(Host {
            frames: 0,
            callback: None,
        }));
        let handler = weak_frame_handler(&host, |host, _| host.borrow_mut().frames += 1);
        host.borrow_mut().callback = Some(Box::new(handler));

        let mut callback = host.borrow_mut().callback.take().unwrap();
        callback(0.0);
        host.borrow_mut().callback = Some(callback);
        assert_eq!(host.borrow().frames, 1);

        let weak = Rc::downgrade(&host);
        drop(host);
        assert!(weak.upgrade().is_none());
    }
}
