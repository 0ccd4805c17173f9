//! Application state and logic.

use crate::controls::{Control, ControlChange, ControlId, ControlValue};
use crate::session::Session;
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// How the chart area is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Scatter chart.
    #[default]
    Chart,
    /// The chart's bundle as an aligned table.
    Table,
}

impl ViewMode {
    /// Get the next view mode in cycle.
    pub fn next(self) -> Self {
        match self {
            ViewMode::Chart => ViewMode::Table,
            ViewMode::Table => ViewMode::Chart,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Chart => "Chart",
            ViewMode::Table => "Table",
        }
    }
}

/// An open dropdown popup.
#[derive(Debug, Clone, Copy)]
pub struct PopupState {
    /// The control the popup edits.
    pub control: ControlId,
    /// Highlighted option index.
    pub cursor: usize,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The served session.
    pub session: Session,
    /// Index of the focused control.
    pub focus: ControlId,
    /// Open dropdown popup, if any.
    pub popup: Option<PopupState>,
    /// Chart area view mode.
    pub view_mode: ViewMode,
    /// Index of the inspected bundle row, if any.
    pub inspect: Option<usize>,
    /// Scroll offset for the table view.
    pub table_scroll: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance around a composed session.
    pub fn new(session: Session) -> Self {
        let status = format!("Serving {}", session.kind.name());
        Self {
            session,
            focus: 0,
            popup: None,
            view_mode: ViewMode::default(),
            inspect: None,
            table_scroll: 0,
            status,
            theme: Theme::GruvboxDark,
        }
    }

    fn control_count(&self) -> usize {
        self.session.dashboard.controls().len()
    }

    fn focused_control(&self) -> Option<&Control> {
        self.session.dashboard.controls().get(self.focus)
    }

    /// Move focus to the next control.
    pub fn focus_next(&mut self) {
        let count = self.control_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    /// Move focus to the previous control.
    pub fn focus_prev(&mut self) {
        let count = self.control_count();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Open the dropdown popup for the focused control.
    pub fn open_popup(&mut self) {
        let cursor = match self.focused_control() {
            Some(Control::Select(select)) => Some(select.selected_index()),
            Some(Control::Slider(_)) => None,
            None => return,
        };
        match cursor {
            Some(cursor) => {
                self.popup = Some(PopupState {
                    control: self.focus,
                    cursor,
                });
            }
            None => self.status = "Use Left/Right to move the slider".to_string(),
        }
    }

    /// Move the popup cursor.
    pub fn popup_move(&mut self, delta: isize) {
        let Some(popup) = self.popup.as_mut() else {
            return;
        };
        let Some(options) = self
            .session
            .dashboard
            .controls()
            .get(popup.control)
            .and_then(|c| c.as_select())
            .map(|s| s.options.len())
        else {
            return;
        };
        if options == 0 {
            return;
        }
        let cursor = popup.cursor as isize + delta;
        popup.cursor = cursor.rem_euclid(options as isize) as usize;
    }

    /// Close the popup without a change event.
    pub fn popup_cancel(&mut self) {
        self.popup = None;
    }

    /// Commit the highlighted popup option as the control's new value.
    pub fn popup_commit(&mut self) {
        let Some(popup) = self.popup.take() else {
            return;
        };
        let Some(choice) = self
            .session
            .dashboard
            .controls()
            .get(popup.control)
            .and_then(|c| c.as_select())
            .and_then(|s| s.options.get(popup.cursor))
            .cloned()
        else {
            return;
        };
        self.dispatch(popup.control, ControlValue::Choice(choice));
    }

    /// Step the focused slider by one increment in the given direction.
    pub fn slider_step(&mut self, direction: i64) {
        let Some(slider) = self.focused_control().and_then(|c| c.as_slider()) else {
            return;
        };
        let next = slider.stepped(direction);
        self.dispatch(self.focus, ControlValue::Number(next));
    }

    /// Deliver a control change to the dashboard.
    ///
    /// Change events only fire when the value actually changes; setting a
    /// control to its current value is a no-op, which keeps repeated key
    /// presses at a slider end quiet.
    pub fn dispatch(&mut self, control: ControlId, new: ControlValue) {
        let Some(old) = self
            .session
            .dashboard
            .controls()
            .get(control)
            .map(|c| c.value())
        else {
            return;
        };
        if old == new {
            return;
        }

        let change = ControlChange { control, old, new };
        match self.session.dashboard.on_change(&change) {
            Ok(()) => {
                self.inspect = None;
                self.table_scroll = 0;
                let title = self
                    .session
                    .dashboard
                    .controls()
                    .get(control)
                    .map(|c| c.title().to_string())
                    .unwrap_or_default();
                self.status = format!("{} = {}", title, change.new);
                tracing::debug!("Applied change: {:?}", change);
            }
            Err(e) => {
                self.status = format!("Update failed: {}", e);
                tracing::error!("Update failed: {}", e);
            }
        }
    }

    /// Toggle between chart and table views.
    pub fn toggle_view(&mut self) {
        if self.session.dashboard.chart().is_none() {
            self.status = "No chart in this dashboard".to_string();
            return;
        }
        self.view_mode = self.view_mode.next();
        self.status = format!("View: {}", self.view_mode.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Move point inspection forward or back through the bundle rows.
    pub fn inspect_step(&mut self, delta: isize) {
        let Some(chart) = self.session.dashboard.chart() else {
            self.status = "No chart in this dashboard".to_string();
            return;
        };
        let rows = chart.bundle().len();
        if rows == 0 {
            return;
        }
        let current = self.inspect.map(|i| i as isize).unwrap_or(-delta.signum());
        let next = (current + delta).rem_euclid(rows as isize) as usize;
        let line = util::inspect_line(chart, next);
        self.inspect = Some(next);
        self.status = line;
    }

    /// Clear point inspection.
    pub fn inspect_clear(&mut self) {
        if self.inspect.take().is_some() {
            self.status = "Inspect cleared".to_string();
        }
    }

    /// Scroll the table view down.
    pub fn scroll_table_down(&mut self, lines: usize) {
        let rows = self
            .session
            .dashboard
            .chart()
            .map(|c| c.bundle().len())
            .unwrap_or(0);
        self.table_scroll = (self.table_scroll + lines).min(rows.saturating_sub(1));
    }

    /// Scroll the table view up.
    pub fn scroll_table_up(&mut self, lines: usize) {
        self.table_scroll = self.table_scroll.saturating_sub(lines);
    }

    /// Copy the chart's bundle to the clipboard as tab-separated text.
    pub fn copy_bundle(&mut self) {
        let Some(chart) = self.session.dashboard.chart() else {
            self.status = "No chart to copy".to_string();
            return;
        };
        match util::copy_bundle(chart.bundle()) {
            Ok(()) => self.status = "Bundle copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }
}
