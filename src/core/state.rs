use serde::{Deserialize, Serialize};

/// Named category a data value falls into relative to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualState {
    InRange,
    OutOfRange,
}

impl VisualState {
    /// Canonical state order. Every pass and table iterates in this order.
    pub const ALL: [Self; 2] = [Self::InRange, Self::OutOfRange];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InRange => "inRange",
            Self::OutOfRange => "outOfRange",
        }
    }
}

/// Role that owns an independent, fully resolved visual configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Consumer {
    /// Interactive legend/selector widget.
    Controller,
    /// Data-bearing visualization.
    Target,
}

impl Consumer {
    pub const ALL: [Self; 2] = [Self::Controller, Self::Target];
}

/// One optional slot per [`VisualState`].
///
/// Used for raw declarations, completed channel sets and anything else that
/// is keyed by the fixed state list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerState<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_range: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_range: Option<T>,
}

impl<T> Default for PerState<T> {
    fn default() -> Self {
        Self {
            in_range: None,
            out_of_range: None,
        }
    }
}

impl<T> PerState<T> {
    #[must_use]
    pub fn new(in_range: Option<T>, out_of_range: Option<T>) -> Self {
        Self {
            in_range,
            out_of_range,
        }
    }

    #[must_use]
    pub fn get(&self, state: VisualState) -> Option<&T> {
        match state {
            VisualState::InRange => self.in_range.as_ref(),
            VisualState::OutOfRange => self.out_of_range.as_ref(),
        }
    }

    pub fn get_mut(&mut self, state: VisualState) -> Option<&mut T> {
        match state {
            VisualState::InRange => self.in_range.as_mut(),
            VisualState::OutOfRange => self.out_of_range.as_mut(),
        }
    }

    pub fn set(&mut self, state: VisualState, value: Option<T>) {
        match state {
            VisualState::InRange => self.in_range = value,
            VisualState::OutOfRange => self.out_of_range = value,
        }
    }

    #[must_use]
    pub fn is_set(&self, state: VisualState) -> bool {
        self.get(state).is_some()
    }

    /// Builds a new slot pair by mapping every state in canonical order.
    pub fn map_states<U>(
        &self,
        mut f: impl FnMut(VisualState, Option<&T>) -> Option<U>,
    ) -> PerState<U> {
        PerState {
            in_range: f(VisualState::InRange, self.in_range.as_ref()),
            out_of_range: f(VisualState::OutOfRange, self.out_of_range.as_ref()),
        }
    }
}
