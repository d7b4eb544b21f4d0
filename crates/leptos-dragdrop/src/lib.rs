//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for card boards.
//! Uses a movement threshold to distinguish click from drag, and reports
//! drag start / hover / release / cancel to the caller.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Hover target while dragging
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Over a card (card id)
    Item(String),
    /// Over a column but not a card (column id)
    Column(String),
}

impl DropTarget {
    /// Raw droppable id the board understands
    pub fn id(&self) -> &str {
        match self {
            DropTarget::Item(id) | DropTarget::Column(id) => id,
        }
    }
}

/// Gesture tuning
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DndConfig {
    /// Pointer travel in pixels before a press becomes a drag
    pub activation_distance_px: i32,
}

impl Default for DndConfig {
    fn default() -> Self {
        Self {
            activation_distance_px: 6,
        }
    }
}

impl DndConfig {
    /// Has the pointer moved far enough from the press point?
    pub fn exceeds_threshold(&self, start: (i32, i32), now: (i32, i32)) -> bool {
        let dx = (now.0 - start.0).abs();
        let dy = (now.1 - start.1).abs();
        dx > self.activation_distance_px || dy > self.activation_distance_px
    }
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
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Press position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
    /// Last pointer position, for the floating preview
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
    pub config: DndConfig,
}

pub fn create_dnd_signals(config: DndConfig) -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_read, start_write) = signal((0i32, 0i32));
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
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
        pointer_read,
        pointer_write,
        config,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    // Swallow the click that follows a drop
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore presses on inputs, buttons and links inside the card
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(item_id.clone()));
            dnd.start_write.set((ev.client_x(), ev.client_y()));
            dnd.pointer_write.set((ev.client_x(), ev.client_y()));
        }
    }
}

/// Document mousemove: starts the drag once past the threshold, tracks the pointer
fn bind_global_mousemove<S>(dnd: DndSignals, on_start: S)
where
    S: Fn(String) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let now = (ev.client_x(), ev.client_y());
        let pending = dnd.pending_id_read.get_untracked();

        if let Some(pending) = pending {
            if dnd.dragging_id_read.get_untracked().is_none() {
                if dnd.config.exceeds_threshold(dnd.start_read.get_untracked(), now) {
                    dnd.dragging_id_write.set(Some(pending.clone()));
                    on_start(pending);
                }
            }
        }
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.pointer_write.set(now);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for cards
pub fn make_on_item_mouseenter(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Item(item_id.clone())));
        }
    }
}

/// Create mouseleave handler for cards: fall back to the enclosing column
pub fn make_on_item_mouseleave(dnd: DndSignals, column_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Column(column_id.clone())));
        }
    }
}

/// Create mouseenter handler for columns
pub fn make_on_column_mouseenter(dnd: DndSignals, column_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Column(column_id.clone())));
        }
    }
}

/// Create mouseleave handler for columns
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Document keydown: Escape cancels an active drag
fn bind_global_keydown<C>(dnd: DndSignals, on_cancel: C)
where
    C: Fn(String) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        if let Some(dragged) = dnd.dragging_id_read.get_untracked() {
            end_drag(&dnd);
            on_cancel(dragged);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}

/// Bind document handlers for a drag gesture.
///
/// * `on_start(dragged)` - pointer travelled past the threshold
/// * `on_end(dragged, target)` - released; `None` when over no target
/// * `on_cancel(dragged)` - Escape pressed mid-drag
pub fn bind_global_mouseup<S, E, C>(dnd: DndSignals, on_start: S, on_end: E, on_cancel: C)
where
    S: Fn(String) + 'static,
    E: Fn(String, Option<DropTarget>) + 'static,
    C: Fn(String) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // A press that never passed the threshold is a click; nothing to report
        match dragging_id {
            Some(dragged) => {
                end_drag(&dnd);
                on_end(dragged, drop_target);
            }
            None => dnd.pending_id_write.set(None),
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd, on_start);
    bind_global_keydown(dnd, on_cancel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        let config = DndConfig::default();
        assert_eq!(config.activation_distance_px, 6);
        assert!(!config.exceeds_threshold((10, 10), (16, 10)));
        assert!(config.exceeds_threshold((10, 10), (17, 10)));
        assert!(config.exceeds_threshold((10, 10), (10, 3)));
        assert!(!config.exceeds_threshold((0, 0), (0, 0)));
    }

    #[test]
    fn test_drop_target_id() {
        assert_eq!(DropTarget::Item("ORD-1".to_string()).id(), "ORD-1");
        assert_eq!(DropTarget::Column("done".to_string()).id(), "done");
    }
}
