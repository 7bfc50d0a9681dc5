use serde::Serialize;

/// Which action a record dialog was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftAction {
    Add,
    Edit,
    Cancel,
}

/// Visibility of the add/edit/cancel dialog. The target record travels
/// with the variant so "edit with nothing selected" cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "target", rename_all = "snake_case")]
pub enum RecordModal<T> {
    Closed,
    Add,
    Edit(T),
    Cancel(T),
}

impl<T> RecordModal<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, RecordModal::Closed)
    }

    pub fn action(&self) -> Option<DraftAction> {
        match self {
            RecordModal::Closed => None,
            RecordModal::Add => Some(DraftAction::Add),
            RecordModal::Edit(_) => Some(DraftAction::Edit),
            RecordModal::Cancel(_) => Some(DraftAction::Cancel),
        }
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            RecordModal::Edit(target) | RecordModal::Cancel(target) => Some(target),
            RecordModal::Closed | RecordModal::Add => None,
        }
    }
}

impl<T> Default for RecordModal<T> {
    fn default() -> Self {
        RecordModal::Closed
    }
}

/// Topics of the informational pop-ups on the operations screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InfoTopic {
    PassengerShiftFlight,
    BaggageReport,
    MisAnalysis,
    Login,
}

impl InfoTopic {
    /// Resolve a menu label; unknown labels fall back to the login demo.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Passenger Shift Flight" => InfoTopic::PassengerShiftFlight,
            "Baggage Report" => InfoTopic::BaggageReport,
            "MIS Analysis" => InfoTopic::MisAnalysis,
            _ => InfoTopic::Login,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            InfoTopic::PassengerShiftFlight => "Passenger Shift Flight",
            InfoTopic::BaggageReport => "Baggage Report",
            InfoTopic::MisAnalysis => "MIS Analysis",
            InfoTopic::Login => "Login Demo",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            InfoTopic::PassengerShiftFlight => {
                "This feature would display detailed information about passenger shifts between flights..."
            }
            InfoTopic::BaggageReport => "This feature would show comprehensive baggage tracking information...",
            InfoTopic::MisAnalysis => "This feature would provide detailed MIS analysis for flight operations...",
            InfoTopic::Login => "This is a demo login interface.",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum InfoModal {
    #[default]
    Closed,
    Open(InfoTopic),
}

impl InfoModal {
    pub fn topic(&self) -> Option<InfoTopic> {
        match self {
            InfoModal::Closed => None,
            InfoModal::Open(topic) => Some(*topic),
        }
    }
}
