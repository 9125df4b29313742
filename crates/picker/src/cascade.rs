//! Area → country → node cascade.
//!
//! Changing the area reloads the countries, which in turn reloads the nodes
//! for whatever country ended up selected. Each dependent selector owns a
//! [`Generation`] so only the newest load of that selector reaches the page.

use futures_util::future::join;
use tracing::{debug, warn};

use crate::api::{ApiRequest, Transport, fetch_options};
use crate::config::{Endpoints, PageConfig};
use crate::error::PickerError;
use crate::generation::Generation;
use crate::option::{first_match, last_match};
use crate::view::{PickerView, Selector};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The selector now holds `count` fresh entries.
    Applied { count: usize },
    /// A newer load of the same selector started first; nothing was touched.
    Superseded,
}

pub struct NodePicker<V, T> {
    pub(crate) view: V,
    pub(crate) transport: T,
    pub(crate) endpoints: Endpoints,
    countries: Generation,
    nodes: Generation,
}

impl<V: PickerView, T: Transport> NodePicker<V, T> {
    pub fn new(view: V, transport: T, endpoints: Endpoints) -> Self {
        Self {
            view,
            transport,
            endpoints,
            countries: Generation::new(),
            nodes: Generation::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Reloads the countries of the selected area, then the nodes of the
    /// country that ends up selected.
    pub async fn load_countries(&self) -> Result<LoadOutcome, PickerError> {
        let area = self.view.selected_value(Selector::Area);
        self.cascade_from_area(&area).await
    }

    async fn cascade_from_area(&self, area: &str) -> Result<LoadOutcome, PickerError> {
        let request = self.endpoints.country_options(area);
        let outcome = self
            .load(Selector::Country, &self.countries, &request, None)
            .await?;
        if outcome == LoadOutcome::Superseded {
            return Ok(outcome);
        }
        self.load_nodes().await?;
        Ok(outcome)
    }

    /// Reloads the nodes of the selected country.
    pub async fn load_nodes(&self) -> Result<LoadOutcome, PickerError> {
        let country = self.view.selected_value(Selector::Country);
        let request = self.endpoints.node_options(&country);
        self.load(Selector::Node, &self.nodes, &request, None).await
    }

    /// Restores the selection of the active node after page load.
    ///
    /// The area is picked among the entries already rendered by the page; the
    /// country and node lists are fetched side by side, each pre-selecting the
    /// active node's entry.
    pub async fn initialize(&self, page: &PageConfig) -> Result<(), PickerError> {
        let path = page.area_path()?;

        let areas = self.view.option_values(Selector::Area);
        match first_match(&areas, &path.area) {
            Some(index) => self.view.select_index(Selector::Area, index),
            None => debug!(area = %path.area, "active area not offered"),
        }

        let Some(country) = path.country.as_deref() else {
            debug!(node_area_id = %page.node_area_id, "no country segment, running plain cascade");
            return self.cascade_from_area(&path.area).await.map(|_| ());
        };

        let country_request = self.endpoints.country_options(&path.area);
        let node_request = self.endpoints.node_options(country);
        let (countries, nodes) = join(
            self.load(
                Selector::Country,
                &self.countries,
                &country_request,
                Some(country),
            ),
            self.load(
                Selector::Node,
                &self.nodes,
                &node_request,
                Some(page.node_id.as_str()),
            ),
        )
        .await;

        countries?;
        nodes?;
        Ok(())
    }

    async fn load(
        &self,
        selector: Selector,
        generation: &Generation,
        request: &ApiRequest,
        preselect: Option<&str>,
    ) -> Result<LoadOutcome, PickerError> {
        let ticket = generation.begin();
        let result = fetch_options(&self.transport, request).await;

        if !generation.is_current(ticket) {
            debug!(
                selector = selector.as_str(),
                ticket = ticket.0,
                "dropping superseded option list"
            );
            return Ok(LoadOutcome::Superseded);
        }

        let options = match result {
            Ok(options) => options,
            Err(err) => {
                warn!(selector = selector.as_str(), error = %err, "option load failed");
                self.view.set_error(selector, Some(&err.to_string()));
                return Err(err);
            }
        };

        let selected = preselect.and_then(|wanted| last_match(&options, wanted));
        self.view.replace_options(selector, &options, selected);
        self.view.set_error(selector, None);
        Ok(LoadOutcome::Applied {
            count: options.len(),
        })
    }
}
