//! Selection / Visibility State
//!
//! Root-owned UI state and the reducer that is its only mutation path.
//! Children never write the fields directly; they dispatch a [`ShellAction`].

/// Intent emitted by a pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// Select an id and open the detail pane
    Select(String),
    /// Flip the detail pane; ignored while nothing is selected
    ToggleDetail,
    /// Hide the detail pane, keeping the selection
    CloseDetail,
}

/// Coarse state of the selection machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    SelectedClosed,
    SelectedOpen,
}

/// Selection and detail-pane visibility.
///
/// Invariant: `is_detail_open` implies `selected_id.is_some()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    selected_id: Option<String>,
    is_detail_open: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_detail_open(&self) -> bool {
        self.is_detail_open
    }

    pub fn phase(&self) -> Phase {
        match (&self.selected_id, self.is_detail_open) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::SelectedClosed,
            (Some(_), true) => Phase::SelectedOpen,
        }
    }

    /// Id the detail pane should render, if it is showing at all
    pub fn detail_subject(&self) -> Option<&str> {
        if self.is_detail_open {
            self.selected_id()
        } else {
            None
        }
    }

    /// Apply an action. Returns `false` when the state did not change.
    pub fn apply(&mut self, action: ShellAction) -> bool {
        let before = self.phase();
        let changed = match action {
            ShellAction::Select(id) => {
                let changed =
                    self.selected_id.as_deref() != Some(id.as_str()) || !self.is_detail_open;
                self.selected_id = Some(id);
                self.is_detail_open = true;
                changed
            }
            ShellAction::ToggleDetail => {
                if self.selected_id.is_none() {
                    false
                } else {
                    self.is_detail_open = !self.is_detail_open;
                    true
                }
            }
            ShellAction::CloseDetail => std::mem::replace(&mut self.is_detail_open, false),
        };

        if changed {
            log::debug!(
                "ui state {:?} -> {:?} (selected={:?})",
                before,
                self.phase(),
                self.selected_id
            );
        } else {
            log::trace!("ui state unchanged in {:?}", before);
        }
        changed
    }
}
