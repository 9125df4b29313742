use crate::option::SelectOption;

/// The three cascading dropdowns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Area,
    Country,
    Node,
}

impl Selector {
    pub fn as_str(self) -> &'static str {
        match self {
            Selector::Area => "area",
            Selector::Country => "country",
            Selector::Node => "node",
        }
    }
}

/// Everything the picker needs from the page.
///
/// Methods take `&self`: the page is shared by every in-flight callback and
/// implementations mutate it through interior mutability (the DOM itself, or a
/// `RefCell` in tests).
pub trait PickerView {
    fn set_loading(&self, visible: bool);

    /// Value of the currently selected entry; empty when nothing is selected.
    fn selected_value(&self, selector: Selector) -> String;

    /// Values of the entries currently present, in display order.
    fn option_values(&self, selector: Selector) -> Vec<String>;

    fn select_index(&self, selector: Selector, index: usize);

    /// Drops every existing entry and appends `options` in order, then selects
    /// `selected` when given (the first entry stays selected otherwise).
    fn replace_options(&self, selector: Selector, options: &[SelectOption], selected: Option<usize>);

    /// Shows or clears the load failure marker of a selector.
    fn set_error(&self, selector: Selector, message: Option<&str>);

    /// Blocking message box.
    fn alert(&self, message: &str);

    fn reload(&self);
}
