//! In-memory page and server doubles for the controller tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::api::{ApiRequest, ApiResponse, Transport};
use crate::error::PickerError;
use crate::option::SelectOption;
use crate::view::{PickerView, Selector};

#[derive(Debug, Default, Clone)]
struct SelectState {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

#[derive(Debug, Default)]
struct PageState {
    selects: HashMap<Selector, SelectState>,
    errors: HashMap<Selector, String>,
    loading: bool,
    loading_history: Vec<bool>,
    alerts: Vec<String>,
    reloads: usize,
}

/// Mimics an HTML page: a select with entries always has one selected.
#[derive(Debug, Default)]
pub struct RecordingView {
    state: RefCell<PageState>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_options(&self, selector: Selector, options: &[SelectOption]) {
        self.replace_options(selector, options, None);
    }

    /// Selects the first entry carrying `value`; no-op when absent.
    pub fn select_value(&self, selector: Selector, value: &str) {
        let mut state = self.state.borrow_mut();
        let select = state.selects.entry(selector).or_default();
        if let Some(index) = select.options.iter().position(|o| o.value == value) {
            select.selected = Some(index);
        }
    }

    pub fn options(&self, selector: Selector) -> Vec<SelectOption> {
        self.state
            .borrow()
            .selects
            .get(&selector)
            .map(|s| s.options.clone())
            .unwrap_or_default()
    }

    pub fn selected_index(&self, selector: Selector) -> Option<usize> {
        self.state
            .borrow()
            .selects
            .get(&selector)
            .and_then(|s| s.selected)
    }

    pub fn error(&self, selector: Selector) -> Option<String> {
        self.state.borrow().errors.get(&selector).cloned()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state.borrow().alerts.clone()
    }

    pub fn reloads(&self) -> usize {
        self.state.borrow().reloads
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn loading_history(&self) -> Vec<bool> {
        self.state.borrow().loading_history.clone()
    }
}

impl PickerView for RecordingView {
    fn set_loading(&self, visible: bool) {
        let mut state = self.state.borrow_mut();
        state.loading = visible;
        state.loading_history.push(visible);
    }

    fn selected_value(&self, selector: Selector) -> String {
        let state = self.state.borrow();
        state
            .selects
            .get(&selector)
            .and_then(|s| s.selected.and_then(|i| s.options.get(i)))
            .map(|o| o.value.clone())
            .unwrap_or_default()
    }

    fn option_values(&self, selector: Selector) -> Vec<String> {
        self.options(selector).into_iter().map(|o| o.value).collect()
    }

    fn select_index(&self, selector: Selector, index: usize) {
        let mut state = self.state.borrow_mut();
        let select = state.selects.entry(selector).or_default();
        if index < select.options.len() {
            select.selected = Some(index);
        }
    }

    fn replace_options(&self, selector: Selector, options: &[SelectOption], selected: Option<usize>) {
        let mut state = self.state.borrow_mut();
        let select = state.selects.entry(selector).or_default();
        select.options = options.to_vec();
        select.selected = match selected {
            Some(index) if index < options.len() => Some(index),
            _ if options.is_empty() => None,
            _ => Some(0),
        };
    }

    fn set_error(&self, selector: Selector, message: Option<&str>) {
        let mut state = self.state.borrow_mut();
        match message {
            Some(message) => {
                state.errors.insert(selector, message.to_string());
            }
            None => {
                state.errors.remove(&selector);
            }
        }
    }

    fn alert(&self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_string());
    }

    fn reload(&self) {
        self.state.borrow_mut().reloads += 1;
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Reply(ApiResponse),
    Fail(String),
}

/// Answers requests from a script keyed by path and, optionally, by the
/// request's query value.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    by_value: RefCell<HashMap<(String, String), Scripted>>,
    by_path: RefCell<HashMap<String, Scripted>>,
    delayed: RefCell<HashSet<String>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, response: ApiResponse) {
        self.by_path
            .borrow_mut()
            .insert(path.to_string(), Scripted::Reply(response));
    }

    pub fn respond_to(&self, path: &str, value: &str, response: ApiResponse) {
        self.by_value.borrow_mut().insert(
            (path.to_string(), value.to_string()),
            Scripted::Reply(response),
        );
    }

    pub fn fail(&self, path: &str, message: &str) {
        self.by_path
            .borrow_mut()
            .insert(path.to_string(), Scripted::Fail(message.to_string()));
    }

    /// Requests carrying `value` yield once to the executor before answering.
    pub fn delay(&self, value: &str) {
        self.delayed.borrow_mut().insert(value.to_string());
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    fn lookup(&self, request: &ApiRequest) -> Option<Scripted> {
        let value = request
            .query
            .first()
            .map(|(_, v)| v.clone())
            .unwrap_or_default();
        let exact = self
            .by_value
            .borrow()
            .get(&(request.path.clone(), value))
            .cloned();
        exact.or_else(|| self.by_path.borrow().get(&request.path).cloned())
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, PickerError> {
        self.requests.borrow_mut().push(request.clone());
        let scripted = self.lookup(request);
        let delayed = request
            .query
            .first()
            .is_some_and(|(_, v)| self.delayed.borrow().contains(v));
        if delayed {
            YieldNow::default().await;
        }
        match scripted {
            Some(Scripted::Reply(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(PickerError::Transport(message)),
            None => Err(PickerError::Transport(format!(
                "no scripted response for {}",
                request.path
            ))),
        }
    }
}

/// Returns `Pending` once, waking itself, so other joined futures run first.
#[derive(Debug, Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
