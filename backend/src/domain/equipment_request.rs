//! # Equipment Quick Requests
//!
//! Backs the "Anesthesia Tech" modal: a checkbox per requestable equipment
//! item, toggled independently and reduced to the list of checked items on
//! submission.
//!
//! ## Flow
//!
//! ```text
//! closed -> open -> (toggle)* -> submit | cancel -> closed
//! ```
//!
//! Items are the closed `EquipmentItem` enum. Raw identifiers coming from a
//! UI host go through `toggle_by_id`, which rejects unknown identifiers with
//! `EquipmentRequestError::InvalidItem` and leaves the state untouched.

use chrono::Utc;
use shared::{EquipmentChecklistRow, EquipmentItem, EquipmentItemParseError, EquipmentRequestReceipt};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EquipmentRequestError {
    #[error("Unknown equipment item: {0}")]
    InvalidItem(String),
    #[error("The equipment request flow is not open")]
    RequestFlowClosed,
}

impl From<EquipmentItemParseError> for EquipmentRequestError {
    fn from(err: EquipmentItemParseError) -> Self {
        EquipmentRequestError::InvalidItem(err.0)
    }
}

/// Requested flag per equipment item, indexed in declaration order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquipmentRequestState {
    flags: [bool; EquipmentItem::COUNT],
}

impl EquipmentRequestState {
    pub fn is_requested(&self, item: EquipmentItem) -> bool {
        self.flags[item.index()]
    }

    pub fn any_requested(&self) -> bool {
        self.flags.iter().any(|flag| *flag)
    }

    /// Copy of the state with only `item` flipped
    pub fn toggled(&self, item: EquipmentItem) -> Self {
        let mut next = *self;
        next.flags[item.index()] = !next.flags[item.index()];
        next
    }

    /// Checked items in declaration order
    pub fn selected(&self) -> Vec<EquipmentItem> {
        EquipmentItem::ALL
            .iter()
            .copied()
            .filter(|item| self.is_requested(*item))
            .collect()
    }

    /// Checkbox rows for rendering
    pub fn checklist(&self) -> Vec<EquipmentChecklistRow> {
        EquipmentItem::ALL
            .iter()
            .map(|item| EquipmentChecklistRow {
                item: *item,
                label: format_label(item.id()),
                checked: self.is_requested(*item),
            })
            .collect()
    }
}

/// Fresh state with every item unrequested
pub fn open() -> EquipmentRequestState {
    EquipmentRequestState::default()
}

pub fn toggle(state: EquipmentRequestState, item: EquipmentItem) -> EquipmentRequestState {
    state.toggled(item)
}

pub fn toggle_by_id(
    state: EquipmentRequestState,
    item_id: &str,
) -> Result<EquipmentRequestState, EquipmentRequestError> {
    let item: EquipmentItem = item_id.parse()?;
    Ok(state.toggled(item))
}

/// Items to request, in declaration order. Does not modify `state`.
pub fn submit(state: &EquipmentRequestState) -> Vec<EquipmentItem> {
    state.selected()
}

/// Turn a lower camel case identifier into a readable label.
///
/// The first character is capitalized and a space goes in front of every
/// uppercase letter that starts a new word. Runs of capitals stay together,
/// so `CO2Absorber` reads `CO2 Absorber` and `POCUS` is unchanged.
pub fn format_label(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let mut label = String::with_capacity(id.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
            continue;
        }
        if c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lowercase = chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if prev.is_lowercase() || (next_is_lowercase && !prev.is_whitespace()) {
                label.push(' ');
            }
        }
        label.push(c);
    }

    label
}

/// Body of the confirmation alert shown after submitting
pub fn submission_message(items: &[EquipmentItem]) -> String {
    if items.is_empty() {
        return "Equipment requested: none".to_string();
    }
    let ids: Vec<&str> = items.iter().map(|item| item.id()).collect();
    format!("Equipment requested: {}", ids.join(", "))
}

/// Modal lifecycle around an `EquipmentRequestState`.
///
/// The state only exists while the modal is open. Submitting or cancelling
/// discards it and closes the modal.
#[derive(Debug, Default)]
pub struct EquipmentRequestSession {
    state: Option<EquipmentRequestState>,
}

impl EquipmentRequestSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&EquipmentRequestState> {
        self.state.as_ref()
    }

    /// Open the modal. Reopening an already open modal keeps its selections.
    pub fn open(&mut self) -> &EquipmentRequestState {
        if self.state.is_none() {
            debug!("Opening equipment request modal");
        }
        self.state.get_or_insert_with(open)
    }

    /// Flip one item, returning its new flag
    pub fn toggle(&mut self, item: EquipmentItem) -> Result<bool, EquipmentRequestError> {
        let state = self
            .state
            .as_mut()
            .ok_or(EquipmentRequestError::RequestFlowClosed)?;
        *state = state.toggled(item);
        Ok(state.is_requested(item))
    }

    pub fn toggle_by_id(&mut self, item_id: &str) -> Result<bool, EquipmentRequestError> {
        if !self.is_open() {
            return Err(EquipmentRequestError::RequestFlowClosed);
        }
        let item: EquipmentItem = item_id.parse()?;
        self.toggle(item)
    }

    /// Checkbox rows, empty while the modal is closed
    pub fn checklist(&self) -> Vec<EquipmentChecklistRow> {
        self.state.map(|state| state.checklist()).unwrap_or_default()
    }

    /// Submit the checked items and close the modal
    pub fn submit(&mut self) -> Result<EquipmentRequestReceipt, EquipmentRequestError> {
        let state = self
            .state
            .take()
            .ok_or(EquipmentRequestError::RequestFlowClosed)?;
        let items = submit(&state);

        let receipt = EquipmentRequestReceipt {
            request_id: EquipmentRequestReceipt::generate_id(),
            message: submission_message(&items),
            title: "Request Submitted".to_string(),
            items,
            submitted_at: Utc::now().to_rfc3339(),
        };

        info!("Equipment request {} submitted: {}", receipt.request_id, receipt.message);
        Ok(receipt)
    }

    /// Close the modal without submitting; selections are discarded
    pub fn cancel(&mut self) {
        if self.state.take().is_some() {
            debug!("Equipment request modal cancelled");
        }
    }
}
