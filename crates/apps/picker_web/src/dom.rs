use picker::{ElementIds, PickerError, PickerView, SelectOption, Selector};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlOptionElement, HtmlSelectElement, Window};

/// Attribute set on a select whose last option load failed.
pub const LOAD_ERROR_ATTR: &str = "data-load-error";

/// The picker's elements, resolved once when the page is ready.
#[derive(Debug)]
pub struct DomView {
    window: Window,
    loader: HtmlElement,
    area: HtmlSelectElement,
    country: HtmlSelectElement,
    node: HtmlSelectElement,
    form: HtmlFormElement,
}

fn lookup<T: JsCast>(document: &Document, id: &str) -> Result<T, PickerError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| PickerError::MissingElement(id.to_string()))
}

impl DomView {
    pub fn bind(ids: &ElementIds) -> Result<Self, PickerError> {
        let window =
            web_sys::window().ok_or_else(|| PickerError::MissingElement("window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PickerError::MissingElement("document".to_string()))?;

        let loader = lookup::<HtmlElement>(&document, &ids.loader)?;
        let area = lookup::<HtmlSelectElement>(&document, &ids.area)?;
        let country = lookup::<HtmlSelectElement>(&document, &ids.country)?;
        let node = lookup::<HtmlSelectElement>(&document, &ids.node)?;
        let form = match &ids.form {
            Some(id) => lookup::<HtmlFormElement>(&document, id)?,
            None => node
                .form()
                .ok_or_else(|| PickerError::MissingElement(format!("form of #{}", ids.node)))?,
        };

        Ok(Self {
            window,
            loader,
            area,
            country,
            node,
            form,
        })
    }

    pub fn select(&self, selector: Selector) -> &HtmlSelectElement {
        match selector {
            Selector::Area => &self.area,
            Selector::Country => &self.country,
            Selector::Node => &self.node,
        }
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }
}

impl PickerView for DomView {
    fn set_loading(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(err) = self.loader.style().set_property("display", display) {
            warn!("failed to toggle loader: {err:?}");
        }
    }

    fn selected_value(&self, selector: Selector) -> String {
        self.select(selector).value()
    }

    fn option_values(&self, selector: Selector) -> Vec<String> {
        let select = self.select(selector);
        (0..select.length())
            .filter_map(|i| select.item(i))
            .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
            .map(|opt| opt.value())
            .collect()
    }

    fn select_index(&self, selector: Selector, index: usize) {
        self.select(selector).set_selected_index(index as i32);
    }

    fn replace_options(&self, selector: Selector, options: &[SelectOption], selected: Option<usize>) {
        let select = self.select(selector);
        select.set_length(0);
        for option in options {
            let added = HtmlOptionElement::new_with_text_and_value(&option.text, &option.value)
                .and_then(|el| select.add_with_html_option_element(&el));
            if let Err(err) = added {
                warn!(selector = selector.as_str(), value = %option.value, "failed to append option: {err:?}");
            }
        }
        if let Some(index) = selected {
            select.set_selected_index(index as i32);
        }
    }

    fn set_error(&self, selector: Selector, message: Option<&str>) {
        let select = self.select(selector);
        match message {
            Some(message) => {
                if let Err(err) = select.set_attribute(LOAD_ERROR_ATTR, message) {
                    warn!(selector = selector.as_str(), "failed to mark load error: {err:?}");
                }
                select.set_title(message);
            }
            None => {
                if let Err(err) = select.remove_attribute(LOAD_ERROR_ATTR) {
                    warn!(selector = selector.as_str(), "failed to clear load error: {err:?}");
                }
                select.set_title("");
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            warn!(text = message, "alert failed: {err:?}");
        }
    }

    fn reload(&self) {
        if let Err(err) = self.window.location().reload() {
            warn!("page reload failed: {err:?}");
        }
    }
}
