//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop of keyed cards between numbered lanes.
//! A movement threshold separates a click from a drag.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Where a dragged card would land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Lane by index, left to right.
    Lane(usize),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Card under a pressed button that has not moved far enough yet
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl DndSignals {
    pub fn is_dragging(&self, id: &str) -> bool {
        self.dragging_id_read.with(|dragging| dragging.as_deref() == Some(id))
    }

    pub fn is_target(&self, target: DropTarget) -> bool {
        self.drop_target_read.get() == Some(target)
    }

    /// True for a short while after a drop, so the trailing click is ignored.
    pub fn just_ended(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

const CLICK_SUPPRESS_MS: i32 = 100;

pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    (now.0 - start.0).abs() > DRAG_THRESHOLD_PX || (now.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Mousedown on a card records a pending drag and its start position.
/// Presses on inputs and buttons inside the card are ignored.
pub fn make_on_mousedown(dnd: DndSignals, id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
            {
                return;
            }
        }
        dnd.pending_id_write.set(Some(id.clone()));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

fn mousemove_listener(dnd: DndSignals) -> Closure<dyn FnMut(web_sys::MouseEvent)> {
    Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(None) = dnd.dragging_id_read.try_get_untracked() else {
            return;
        };
        let Some(pending) = dnd.pending_id_read.try_get_untracked().flatten() else {
            return;
        };
        let Some(start) = dnd.start_read.try_get_untracked() else {
            return;
        };
        if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
            dnd.dragging_id_write.set(Some(pending));
        }
    })
}

/// Mouseenter on a lane makes it the drop target while dragging.
pub fn make_on_lane_mouseenter(dnd: DndSignals, lane: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(Some(DropTarget::Lane(lane)));
        }
    }
}

pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Binds document-level mouseup and mousemove. `on_drop` runs only when
/// a real drag ends over a target. Both listeners are removed when the
/// current owner is cleaned up.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(String, DropTarget) + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging_id) = dnd.dragging_id_read.try_get_untracked() else {
            return;
        };
        let drop_target = dnd.drop_target_read.try_get_untracked().flatten();

        dnd.pending_id_write.set(None);
        let Some(dragged) = dragging_id else {
            return;
        };
        end_drag(&dnd);
        if let Some(target) = drop_target {
            on_drop(dragged, target);
        }
    });

    let listeners = GlobalListeners::bind(vec![
        ("mouseup", on_mouseup),
        ("mousemove", mousemove_listener(dnd)),
    ]);
    release_on_cleanup(listeners, GlobalListeners::unbind);
}

/// Hands `resource` to `release` when the current owner is cleaned up.
fn release_on_cleanup<T: 'static>(resource: T, release: fn(T)) {
    let resource = SendWrapper::new(resource);
    on_cleanup(move || release(resource.take()));
}

type Listener = (&'static str, Closure<dyn FnMut(web_sys::MouseEvent)>);

/// Document listeners kept alive until [`GlobalListeners::unbind`].
struct GlobalListeners {
    document: Option<web_sys::Document>,
    listeners: Vec<Listener>,
}

impl GlobalListeners {
    fn bind(listeners: Vec<Listener>) -> Self {
        let document = web_sys::window().and_then(|win| win.document());
        if let Some(doc) = &document {
            for (event, listener) in &listeners {
                let _ = doc.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
        }
        Self { document, listeners }
    }

    fn unbind(self) {
        if let Some(doc) = &self.document {
            for (event, listener) in &self.listeners {
                let _ = doc.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
        }
    }
}
