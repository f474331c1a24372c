//! Browser page adapter using web-sys

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::config::{WidgetConfig, CONFIG_ELEMENT_ID};
use crate::error::WidgetError;
use crate::ports::outbound::{
    ClickHandler, DialogPort, DocumentPort, EventPort, SubmitDecision, SubmitHandler,
};

/// The live browser document and window
#[derive(Clone)]
pub struct WasmPage {
    window: Window,
    document: Document,
}

impl WasmPage {
    /// Page of the current browsing context.
    pub fn current() -> Result<Self, WidgetError> {
        let window = web_sys::window().ok_or_else(|| WidgetError::host("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| WidgetError::host("window has no document"))?;
        Ok(Self { window, document })
    }

    /// Config embedded in the page, or the defaults when there is none.
    pub fn widget_config(&self) -> Result<WidgetConfig, WidgetError> {
        match self.document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(element) => {
                let json = element.text_content().unwrap_or_default();
                WidgetConfig::from_json(&json)
            }
            None => {
                tracing::debug!("No #{} element, using default config", CONFIG_ELEMENT_ID);
                Ok(WidgetConfig::default())
            }
        }
    }

    fn element(&self, element_id: &str) -> Result<Element, WidgetError> {
        self.document
            .get_element_by_id(element_id)
            .ok_or_else(|| WidgetError::missing_element(element_id))
    }

    fn listen(
        &self,
        element_id: &str,
        event: &str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<(), WidgetError> {
        self.element(element_id)?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        // Listeners live as long as the page
        callback.forget();
        Ok(())
    }
}

impl DocumentPort for WasmPage {
    fn has_element(&self, element_id: &str) -> bool {
        self.document.get_element_by_id(element_id).is_some()
    }

    fn child_count(&self, element_id: &str) -> Result<usize, WidgetError> {
        Ok(self.element(element_id)?.child_element_count() as usize)
    }

    fn append_html(&self, element_id: &str, html: &str) -> Result<(), WidgetError> {
        self.element(element_id)?
            .insert_adjacent_html("beforeend", html)
            .map_err(js_error)
    }

    fn remove_last_child(&self, element_id: &str) -> Result<bool, WidgetError> {
        // lastElementChild, not lastChild: whitespace text nodes are not entries
        match self.element(element_id)?.last_element_child() {
            Some(last) => {
                last.remove();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn set_hidden(&self, element_id: &str, hidden: bool) -> Result<(), WidgetError> {
        let element: HtmlElement = self
            .element(element_id)?
            .dyn_into()
            .map_err(|_| WidgetError::host(format!("'{}' is not an HTML element", element_id)))?;
        let style = element.style();
        if hidden {
            style.set_property("display", "none").map_err(js_error)
        } else {
            style.remove_property("display").map(|_| ()).map_err(js_error)
        }
    }
}

impl DialogPort for WasmPage {
    fn confirm(&self, message: &str) -> Result<bool, WidgetError> {
        self.window.confirm_with_message(message).map_err(js_error)
    }
}

impl EventPort for WasmPage {
    fn on_click(&self, element_id: &str, mut handler: ClickHandler) -> Result<(), WidgetError> {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            // Triggers are often buttons inside the form they extend
            event.prevent_default();
            handler();
        });
        self.listen(element_id, "click", callback)
    }

    fn on_submit(&self, form_id: &str, mut handler: SubmitHandler) -> Result<(), WidgetError> {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if handler() == SubmitDecision::Cancel {
                event.prevent_default();
            }
        });
        self.listen(form_id, "submit", callback)
    }
}

fn js_error(value: JsValue) -> WidgetError {
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => WidgetError::host(String::from(error.message())),
        None => WidgetError::host(format!("{:?}", value)),
    }
}
