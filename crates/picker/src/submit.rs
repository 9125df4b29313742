use tracing::{info, warn};

use crate::api::Transport;
use crate::cascade::NodePicker;
use crate::error::PickerError;
use crate::view::{PickerView, Selector};

pub const SELECT_NODE_MESSAGE: &str = "Please select a node";
pub const SUBMIT_FAILED_MESSAGE: &str = "Form submission failed.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No node selected; nothing was sent.
    Rejected,
    /// The server switched nodes and the page is reloading.
    Reloaded,
    /// The server answered with a non-200 status; `message` is its body.
    Refused { status: u16, message: String },
    /// No response at all.
    Failed(PickerError),
}

impl<V: PickerView, T: Transport> NodePicker<V, T> {
    /// Asks the server to switch to the selected node.
    ///
    /// The caller has already suppressed the form's own navigation.
    pub async fn submit(&self) -> SubmitOutcome {
        let node_id = self.view.selected_value(Selector::Node);
        if node_id.trim().is_empty() {
            self.view.alert(SELECT_NODE_MESSAGE);
            return SubmitOutcome::Rejected;
        }

        self.view.set_loading(true);
        let request = self.endpoints.change(&node_id);
        let result = self.transport.send(&request).await;
        self.view.set_loading(false);

        match result {
            Ok(response) if response.status == 200 => {
                info!(node_id = %node_id, "node changed, reloading");
                self.view.reload();
                SubmitOutcome::Reloaded
            }
            Ok(response) => {
                warn!(node_id = %node_id, status = response.status, "node change refused");
                self.view.alert(&response.body);
                SubmitOutcome::Refused {
                    status: response.status,
                    message: response.body,
                }
            }
            Err(err) => {
                warn!(node_id = %node_id, error = %err, "node change request failed");
                self.view.alert(SUBMIT_FAILED_MESSAGE);
                SubmitOutcome::Failed(err)
            }
        }
    }
}
