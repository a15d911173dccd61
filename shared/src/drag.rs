//! Drag-and-drop state for moving and swapping shoot days.
//!
//! The controller is a plain value owned by the calendar view. Browser drag
//! events are translated into calls on it, and a successful drop yields a
//! [`MoveRequest`] for the server. Day renumbering after a move is entirely
//! the server's business, so nothing here touches the calendar itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::api::{ApiError, MoveDayResponse};
use crate::calendar::{DayRow, DayType};

/// MIME type the dragged row's date travels under
pub const DRAG_PAYLOAD_FORMAT: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveMode {
    /// Target is a non-shoot day: the shoot day moves there and vacates its date
    Move,
    /// Target is a shoot day: the two days exchange dates
    Swap,
}

impl MoveMode {
    /// Mode implied by the row being dropped on
    pub fn for_target(target: DayType) -> Self {
        if target == DayType::Shoot {
            MoveMode::Swap
        } else {
            MoveMode::Move
        }
    }
}

impl fmt::Display for MoveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveMode::Move => f.write_str("move"),
            MoveMode::Swap => f.write_str("swap"),
        }
    }
}

/// Body of `POST /api/projects/{id}/calendar/move-day`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub mode: MoveMode,
}

/// Visual state of one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDragState {
    Idle,
    Dragging,
    DropTarget,
}

impl RowDragState {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            RowDragState::Idle => None,
            RowDragState::Dragging => Some("dragging"),
            RowDragState::DropTarget => Some("drop-target"),
        }
    }
}

/// The drag in progress. At most one exists per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub source_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStartRefusal {
    NotShootDay,
    RequestPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIgnored {
    NoActiveSession,
    MissingPayload,
    MalformedPayload,
    SameDay,
    RequestPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Send this to the server; the controller is now waiting on it
    Submit(MoveRequest),
    Ignored(DropIgnored),
}

/// What the page should do once the move request settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResolution {
    Reload,
    ShowError(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragController {
    session: Option<DragSession>,
    drop_target: Option<NaiveDate>,
    pending: Option<MoveRequest>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// True while a move request is in flight; the loading overlay is shown
    /// and no new drag may begin.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn row_state(&self, date: NaiveDate) -> RowDragState {
        match self.session {
            Some(session) if session.source_date == date => RowDragState::Dragging,
            Some(_) if self.drop_target == Some(date) => RowDragState::DropTarget,
            _ => RowDragState::Idle,
        }
    }

    pub fn drag_start(&mut self, row: &DayRow) -> Result<DragSession, DragStartRefusal> {
        if self.is_pending() {
            return Err(DragStartRefusal::RequestPending);
        }
        if !row.draggable() {
            return Err(DragStartRefusal::NotShootDay);
        }

        let session = DragSession { source_date: row.date };
        self.session = Some(session);
        self.drop_target = None;
        debug!(source = %row.date, "drag started");
        Ok(session)
    }

    /// Drag-enter or drag-over on a row. Returns whether the row is now the
    /// drop target.
    pub fn drag_over(&mut self, date: NaiveDate) -> bool {
        match self.session {
            Some(session) if session.source_date != date => {
                if self.drop_target != Some(date) {
                    debug!(date = %date, "drop target changed");
                }
                self.drop_target = Some(date);
                true
            }
            _ => false,
        }
    }

    /// Browsers deliver the leave of the previous row after the enter of the
    /// next one, so only the current target may be cleared.
    pub fn drag_leave(&mut self, date: NaiveDate) {
        if self.drop_target == Some(date) {
            self.drop_target = None;
        }
    }

    /// Drag-end fires whether or not the drop succeeded.
    pub fn drag_end(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(source = %session.source_date, "drag ended");
        }
        self.drop_target = None;
    }

    /// Resolve a drop on `target`. `payload` is the raw transferred data.
    pub fn drop_on(&mut self, target: &DayRow, payload: Option<&str>) -> DropOutcome {
        let session = self.session.take();
        self.drop_target = None;

        if self.is_pending() {
            return DropOutcome::Ignored(DropIgnored::RequestPending);
        }
        if session.is_none() {
            return DropOutcome::Ignored(DropIgnored::NoActiveSession);
        }

        let payload = match payload.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return DropOutcome::Ignored(DropIgnored::MissingPayload),
        };
        let from_date = match NaiveDate::parse_from_str(payload, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                debug!(payload, "ignoring drop with malformed payload");
                return DropOutcome::Ignored(DropIgnored::MalformedPayload);
            }
        };
        if from_date == target.date {
            return DropOutcome::Ignored(DropIgnored::SameDay);
        }

        let request = MoveRequest {
            from_date,
            to_date: target.date,
            mode: MoveMode::for_target(target.day_type()),
        };
        self.pending = Some(request);
        debug!(from = %request.from_date, to = %request.to_date, mode = %request.mode, "drop accepted");
        DropOutcome::Submit(request)
    }

    /// Settle the in-flight request. A failure returns every row to idle.
    pub fn finish_request(&mut self, result: Result<MoveDayResponse, ApiError>) -> MoveResolution {
        self.pending = None;
        match result {
            Ok(_) => MoveResolution::Reload,
            Err(error) => {
                self.session = None;
                self.drop_target = None;
                MoveResolution::ShowError(format!("Error moving shoot day: {}", error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(y: i32, m: u32, d: u32, day_type: DayType) -> DayRow {
        let mut row = DayRow::new(date(y, m, d));
        row.day_type = Some(day_type);
        row
    }

    fn payload(row: &DayRow) -> String {
        row.date.format("%Y-%m-%d").to_string()
    }

    #[test]
    fn test_non_shoot_rows_cannot_start_a_drag() {
        let mut controller = DragController::new();
        for day_type in [DayType::Weekend, DayType::Holiday, DayType::Hiatus, DayType::Prep] {
            let row = row(2024, 3, 2, day_type);
            assert_eq!(controller.drag_start(&row), Err(DragStartRefusal::NotShootDay));
            assert_eq!(controller.session(), None);
        }
    }

    #[test]
    fn test_shoot_onto_shoot_swaps() {
        let source = row(2024, 3, 1, DayType::Shoot);
        let target = row(2024, 3, 8, DayType::Shoot);
        let mut controller = DragController::new();

        controller.drag_start(&source).unwrap();
        assert!(controller.drag_over(target.date));
        let outcome = controller.drop_on(&target, Some(&payload(&source)));

        let request = assert_matches!(outcome, DropOutcome::Submit(request) => request);
        assert_eq!(request.mode, MoveMode::Swap);
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({ "fromDate": "2024-03-01", "toDate": "2024-03-08", "mode": "swap" })
        );
    }

    #[test]
    fn test_shoot_onto_non_shoot_moves() {
        let source = row(2024, 3, 1, DayType::Shoot);
        for day_type in [DayType::Weekend, DayType::Holiday, DayType::Hiatus, DayType::Prep] {
            let target = row(2024, 3, 2, day_type);
            let mut controller = DragController::new();
            controller.drag_start(&source).unwrap();

            let outcome = controller.drop_on(&target, Some(&payload(&source)));
            assert_matches!(outcome, DropOutcome::Submit(MoveRequest { mode: MoveMode::Move, .. }));
        }
    }

    #[test]
    fn test_drop_onto_self_is_a_no_op() {
        let source = row(2024, 3, 1, DayType::Shoot);
        let mut controller = DragController::new();
        controller.drag_start(&source).unwrap();

        // The source row never becomes its own drop target
        assert!(!controller.drag_over(source.date));
        assert_eq!(controller.row_state(source.date), RowDragState::Dragging);

        let outcome = controller.drop_on(&source, Some(&payload(&source)));
        assert_eq!(outcome, DropOutcome::Ignored(DropIgnored::SameDay));
        assert!(!controller.is_pending());
    }

    #[test]
    fn test_malformed_or_missing_payload_is_ignored() {
        let source = row(2024, 3, 1, DayType::Shoot);
        let target = row(2024, 3, 8, DayType::Shoot);

        for (raw, reason) in [
            (None, DropIgnored::MissingPayload),
            (Some("  "), DropIgnored::MissingPayload),
            (Some("not-a-date"), DropIgnored::MalformedPayload),
        ] {
            let mut controller = DragController::new();
            controller.drag_start(&source).unwrap();
            assert_eq!(controller.drop_on(&target, raw), DropOutcome::Ignored(reason));
            assert!(!controller.is_pending());
        }
    }

    #[test]
    fn test_drop_without_session_is_ignored() {
        let target = row(2024, 3, 8, DayType::Shoot);
        let mut controller = DragController::new();
        assert_eq!(
            controller.drop_on(&target, Some("2024-03-01")),
            DropOutcome::Ignored(DropIgnored::NoActiveSession)
        );
    }

    #[test]
    fn test_single_drop_target_survives_out_of_order_leave() {
        let source = row(2024, 3, 1, DayType::Shoot);
        let mut controller = DragController::new();
        controller.drag_start(&source).unwrap();

        controller.drag_over(date(2024, 3, 4));
        // enter on the next row arrives before leave on the previous one
        controller.drag_over(date(2024, 3, 5));
        controller.drag_leave(date(2024, 3, 4));

        assert_eq!(controller.row_state(date(2024, 3, 4)), RowDragState::Idle);
        assert_eq!(controller.row_state(date(2024, 3, 5)), RowDragState::DropTarget);

        controller.drag_leave(date(2024, 3, 5));
        assert_eq!(controller.row_state(date(2024, 3, 5)), RowDragState::Idle);
    }

    #[test]
    fn test_drag_end_clears_every_mark() {
        let source = row(2024, 3, 1, DayType::Shoot);
        let mut controller = DragController::new();
        controller.drag_start(&source).unwrap();
        controller.drag_over(date(2024, 3, 4));

        controller.drag_end();

        for day in 1..=10 {
            assert_eq!(controller.row_state(date(2024, 3, day)), RowDragState::Idle);
        }
        assert_eq!(controller.session(), None);
    }

    #[test]
    fn test_pending_request_blocks_new_drags() {
        let source = row(2024, 3, 1, DayType::Shoot);
        let target = row(2024, 3, 8, DayType::Shoot);
        let mut controller = DragController::new();
        controller.drag_start(&source).unwrap();
        controller.drop_on(&target, Some(&payload(&source)));
        controller.drag_end();

        assert!(controller.is_pending());
        assert_eq!(controller.drag_start(&target), Err(DragStartRefusal::RequestPending));
    }

    #[test]
    fn test_server_error_reverts_to_idle_without_reload() {
        let source = row(2024, 3, 1, DayType::Shoot);
        let target = row(2024, 3, 8, DayType::Shoot);
        let mut controller = DragController::new();
        controller.drag_start(&source).unwrap();
        controller.drop_on(&target, Some(&payload(&source)));

        let error = ApiError::from_response(500, r#"{"error":"Cannot move to a non-working day"}"#);
        let resolution = controller.finish_request(Err(error));

        assert_eq!(
            resolution,
            MoveResolution::ShowError("Error moving shoot day: Cannot move to a non-working day".to_string())
        );
        assert!(!controller.is_pending());
        assert_eq!(controller.row_state(source.date), RowDragState::Idle);
        assert_eq!(controller.row_state(target.date), RowDragState::Idle);
        assert!(controller.drag_start(&source).is_ok());
    }

    #[test]
    fn test_success_reloads() {
        let source = row(2024, 3, 1, DayType::Shoot);
        let target = row(2024, 3, 2, DayType::Weekend);
        let mut controller = DragController::new();
        controller.drag_start(&source).unwrap();
        controller.drop_on(&target, Some(&payload(&source)));

        let response = MoveDayResponse::default();
        assert_eq!(controller.finish_request(Ok(response)), MoveResolution::Reload);
        assert!(!controller.is_pending());
    }

    #[test]
    fn test_any_success_body_reloads() {
        let source = row(2024, 3, 1, DayType::Shoot);
        let target = row(2024, 3, 8, DayType::Shoot);

        for body in ["", "true", r#"{"success":true,"originalDay":"3"}"#, r#"{"mode":1}"#] {
            let mut controller = DragController::new();
            controller.drag_start(&source).unwrap();
            controller.drop_on(&target, Some(&payload(&source)));

            let response = MoveDayResponse::from_body(body);
            assert_eq!(controller.finish_request(Ok(response)), MoveResolution::Reload, "body: {}", body);
            assert!(!controller.is_pending());
        }
    }
}
