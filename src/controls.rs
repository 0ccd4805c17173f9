//! Interactive controls and change events.
//!
//! A control exposes a single current value from a fixed option domain. The
//! host event loop turns key presses into [`ControlChange`] events and hands
//! them to the owning dashboard; that handler interface is the only coupling
//! between the UI toolkit and dashboard logic.

use std::fmt;

/// Index of a control within its dashboard's control list.
pub type ControlId = usize;

/// The current value of a control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    /// A dropdown selection.
    Choice(String),
    /// A slider position.
    Number(i64),
}

impl ControlValue {
    /// The choice string, if this is a dropdown value.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            ControlValue::Choice(s) => Some(s),
            ControlValue::Number(_) => None,
        }
    }

    /// The numeric value, if this is a slider value.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ControlValue::Choice(_) => None,
            ControlValue::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for ControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlValue::Choice(s) => write!(f, "{}", s),
            ControlValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A control's value transition, delivered to the dashboard that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlChange {
    /// Which control changed.
    pub control: ControlId,
    /// The value before the change.
    pub old: ControlValue,
    /// The value after the change.
    pub new: ControlValue,
}

/// A dropdown with a fixed option set and a current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Title shown next to the control.
    pub title: String,
    /// The option domain.
    pub options: Vec<String>,
    /// Currently selected option.
    pub value: String,
}

impl Select {
    /// Create a dropdown from its title, options, and initial value.
    pub fn new(title: &str, options: &[&str], value: &str) -> Self {
        Self {
            title: title.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            value: value.to_string(),
        }
    }

    /// Replace the option set and reset the selection.
    pub fn set_options(&mut self, options: &[&str], value: &str) {
        self.options = options.iter().map(|s| s.to_string()).collect();
        self.value = value.to_string();
    }

    /// Position of the current value in the option list.
    pub fn selected_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| *o == self.value)
            .unwrap_or(0)
    }
}

/// An integer slider.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    /// Title shown next to the control.
    pub title: String,
    /// Lowest selectable value.
    pub start: i64,
    /// Highest selectable value.
    pub end: i64,
    /// Increment applied per step.
    pub step: i64,
    /// Current position, always within `[start, end]`.
    pub value: i64,
}

impl Slider {
    /// Create a slider; the initial value is clamped into range.
    pub fn new(title: &str, start: i64, end: i64, step: i64, value: i64) -> Self {
        Self {
            title: title.to_string(),
            start,
            end,
            step,
            value: value.clamp(start, end),
        }
    }

    /// Set the position, clamped into range.
    pub fn set_value(&mut self, value: i64) {
        self.value = value.clamp(self.start, self.end);
    }

    /// The value one step away in the given direction, clamped into range.
    pub fn stepped(&self, direction: i64) -> i64 {
        (self.value + direction * self.step).clamp(self.start, self.end)
    }

    /// Position of the current value as a fraction of the span.
    pub fn ratio(&self) -> f64 {
        if self.end == self.start {
            return 0.0;
        }
        (self.value - self.start) as f64 / (self.end - self.start) as f64
    }
}

/// An interactive widget exposing a single current value.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// A dropdown.
    Select(Select),
    /// A slider.
    Slider(Slider),
}

impl Control {
    /// The control's title.
    pub fn title(&self) -> &str {
        match self {
            Control::Select(s) => &s.title,
            Control::Slider(s) => &s.title,
        }
    }

    /// The control's current value.
    pub fn value(&self) -> ControlValue {
        match self {
            Control::Select(s) => ControlValue::Choice(s.value.clone()),
            Control::Slider(s) => ControlValue::Number(s.value),
        }
    }

    /// Set the control's value. Slider values are clamped; a value of the
    /// wrong kind is ignored.
    pub fn set_value(&mut self, value: &ControlValue) {
        match (self, value) {
            (Control::Select(s), ControlValue::Choice(v)) => s.value = v.clone(),
            (Control::Slider(s), ControlValue::Number(v)) => s.set_value(*v),
            _ => {}
        }
    }

    /// The dropdown, if this control is one.
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Control::Select(s) => Some(s),
            Control::Slider(_) => None,
        }
    }

    /// The slider, if this control is one.
    pub fn as_slider(&self) -> Option<&Slider> {
        match self {
            Control::Select(_) => None,
            Control::Slider(s) => Some(s),
        }
    }
}
