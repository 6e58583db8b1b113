// Schedule presenter
// The one stateful piece: month cursor, event list, and dialog state

pub mod form;

use chrono::{Months, NaiveDate};
use log::{debug, info, warn};

use crate::models::calendar::CalendarGrid;
use crate::models::event::ScheduleEvent;
use crate::models::settings::Settings;
use crate::services::calendar::build_grid;
use crate::services::notification::Notifier;
use crate::services::validation::ValidationError;
use crate::utils::date::month_name;

use self::form::{DialogPrefill, ScheduleFormState};

/// Orchestrates the calendar grid, the in-memory event list, and the event
/// creation dialog. All operations are synchronous and run on the caller's
/// thread; rendering is a pure projection of this state.
pub struct SchedulePresenter {
    /// First day shown is derived from this cursor; navigation moves it by
    /// whole months.
    cursor: NaiveDate,
    grid: CalendarGrid,
    events: Vec<ScheduleEvent>,
    dialog: Option<ScheduleFormState>,
    settings: Settings,
    notifier: Box<dyn Notifier>,
}

impl SchedulePresenter {
    /// Create a presenter showing the month containing `today`.
    ///
    /// The current date is threaded in explicitly rather than read from the
    /// system clock, so the presenter stays deterministic under test.
    pub fn new(today: NaiveDate, settings: Settings, notifier: Box<dyn Notifier>) -> Self {
        let grid = build_grid(today);
        info!(
            "Presenter starting on {} {}",
            month_name(grid.month),
            grid.year
        );

        Self {
            cursor: today,
            grid,
            events: Vec::new(),
            dialog: None,
            settings,
            notifier,
        }
    }

    /// The currently displayed month grid.
    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn current_year(&self) -> i32 {
        self.grid.year
    }

    /// Name of the displayed month, for the widget header.
    pub fn current_month_name(&self) -> &'static str {
        month_name(self.grid.month)
    }

    /// Events committed so far, in submission order.
    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// The live draft, if the dialog is open.
    pub fn draft(&self) -> Option<&ScheduleFormState> {
        self.dialog.as_ref()
    }

    /// Mutable access to the live draft for field edits.
    pub fn draft_mut(&mut self) -> Option<&mut ScheduleFormState> {
        self.dialog.as_mut()
    }

    /// Open the event creation dialog with a fresh draft.
    ///
    /// Idempotent: calling this while the dialog is already open is a no-op
    /// and never clobbers the draft the user is editing.
    pub fn open_dialog(&mut self) {
        if self.dialog.is_none() {
            self.dialog = Some(ScheduleFormState::new(&self.settings));
            debug!("Dialog opened with fresh draft");
        }
    }

    /// Open the dialog with date and start time pre-filled, as when the
    /// widget is reached with `{date, initTime}` query parameters.
    ///
    /// Same idempotency guard as [`open_dialog`](Self::open_dialog).
    pub fn open_dialog_with_prefill(&mut self, prefill: DialogPrefill) {
        if self.dialog.is_none() {
            self.dialog = Some(ScheduleFormState::with_prefill(prefill, &self.settings));
            debug!("Dialog opened with pre-filled draft");
        }
    }

    /// Close the dialog, discarding the draft.
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Advance the displayed month by one and rebuild the grid.
    pub fn next_month(&mut self) {
        if let Some(cursor) = self.cursor.checked_add_months(Months::new(1)) {
            self.set_cursor(cursor);
        }
    }

    /// Move the displayed month back by one and rebuild the grid.
    pub fn previous_month(&mut self) {
        if let Some(cursor) = self.cursor.checked_sub_months(Months::new(1)) {
            self.set_cursor(cursor);
        }
    }

    fn set_cursor(&mut self, cursor: NaiveDate) {
        self.cursor = cursor;
        self.grid = build_grid(cursor);
        debug!(
            "Viewing {} {}",
            month_name(self.grid.month),
            self.grid.year
        );
    }

    /// Submit the open draft.
    ///
    /// A valid draft is committed to the event list, the dialog closes, and
    /// a success notification is emitted. An invalid draft blocks the
    /// submission: the dialog stays open, the draft keeps the user's input,
    /// and the rule failures are surfaced on the draft and returned.
    pub fn submit(&mut self) -> Result<(), Vec<ValidationError>> {
        let Some(draft) = self.dialog.as_mut() else {
            return Ok(());
        };

        match draft.to_event() {
            Ok(event) => {
                info!("Saved event '{}' on {}", event.title, event.date);
                self.events.push(event);
                self.dialog = None;

                if let Err(e) = self.notifier.notify_success("Successfully saved", "") {
                    // The event is already committed; a failed toast is not
                    // worth surfacing to the user.
                    warn!("Could not show success notification: {}", e);
                }

                Ok(())
            }
            Err(errors) => {
                draft.error_messages = errors.iter().map(|e| e.to_string()).collect();
                debug!("Submit blocked by {} validation error(s)", errors.len());
                Err(errors)
            }
        }
    }

    /// Events whose date matches `date` exactly; time of day is ignored.
    pub fn events_on_date(&self, date: NaiveDate) -> Vec<&ScheduleEvent> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// Events on the given day of the displayed month.
    pub fn events_on_day(&self, day: u32) -> Vec<&ScheduleEvent> {
        match NaiveDate::from_ymd_opt(self.grid.year, self.grid.month, day) {
            Some(date) => self.events_on_date(date),
            None => Vec::new(),
        }
    }

    /// The date the cursor currently points at.
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }
}

impl std::fmt::Debug for SchedulePresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulePresenter")
            .field("cursor", &self.cursor)
            .field("events", &self.events.len())
            .field("dialog_open", &self.dialog.is_some())
            .finish()
    }
}
