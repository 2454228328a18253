//! Document-level `mousedown` listener that reports clicks landing outside a
//! given element.
//!
//! The listener lives exactly as long as the returned guard: dropping it
//! detaches the callback from the document.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent, Node};
use yew::{Callback, NodeRef};

const EVENT: &str = "mousedown";

pub struct OutsideClickListener {
    document: Document,
    closure: Closure<dyn Fn(MouseEvent)>,
}

impl OutsideClickListener {
    /// Emits `on_outside` for every `mousedown` whose target is not inside
    /// `container`. Nothing is emitted while `container` is not mounted.
    pub fn attach(container: NodeRef, on_outside: Callback<()>) -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let closure = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
            let Some(root) = container.get() else {
                return;
            };
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !root.contains(target.as_ref()) {
                on_outside.emit(());
            }
        });

        document
            .add_event_listener_with_callback(EVENT, closure.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { document, closure })
    }
}

impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(EVENT, self.closure.as_ref().unchecked_ref());
    }
}
