use chrono::{DateTime, Local};
use crate::api::ApiError;
#[allow(unused_imports)]
use crate::logging::{log, log_warn};
use crate::map::{GroupId, LineStyle, MapCanvas, OverlayId};
use crate::models::{CongestionLevel, Coordinate, CoordinateRegistry, TrafficSnapshot};

/// A traffic poll that has been issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTicket {
    sequence: u64,
}

/// Summary of the most recently applied snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficStatus {
    pub drawn_segments: usize,
    pub skipped_segments: usize,
    pub updated_at: DateTime<Local>,
}

/// Owns the traffic overlay set and keeps it in step with the backend
///
/// Polls are numbered in issue order. A response is applied only if no later
/// poll has been applied yet, so a slow response cannot replace fresher data.
/// Failures leave the current overlays untouched.
#[derive(Debug)]
pub struct TrafficMonitor {
    group: GroupId,
    issued: u64,
    applied: u64,
    status: Option<TrafficStatus>,
}

impl TrafficMonitor {
    pub fn new<C: MapCanvas>(canvas: &mut C) -> Self {
        Self { group: canvas.create_group(), issued: 0, applied: 0, status: None }
    }

    #[must_use]
    pub fn group(&self) -> GroupId {
        self.group
    }

    #[must_use]
    pub fn status(&self) -> Option<&TrafficStatus> {
        self.status.as_ref()
    }

    pub fn begin_poll(&mut self) -> PollTicket {
        self.issued += 1;
        PollTicket { sequence: self.issued }
    }

    /// Apply the outcome of a poll. Returns `true` if the overlay set was redrawn.
    ///
    /// `route_overlay` is raised back above the traffic lines after redrawing.
    pub fn complete<C: MapCanvas>(
        &mut self,
        ticket: PollTicket,
        outcome: Result<TrafficSnapshot, ApiError>,
        canvas: &mut C,
        registry: &CoordinateRegistry,
        route_overlay: Option<OverlayId>,
    ) -> bool {
        let snapshot = match outcome {
            Ok(snapshot) => snapshot,
            Err(error) => {
                log_warn!("Error fetching all traffic: {error}");
                return false;
            }
        };

        if ticket.sequence <= self.applied {
            log!("Discarding traffic poll #{}, #{} already applied", ticket.sequence, self.applied);
            return false;
        }

        let lines = resolve_segments(&snapshot, registry);
        let skipped = snapshot.roads.len() - lines.len();

        canvas.clear_group(self.group);
        for (points, level) in &lines {
            canvas.add_line(points, &LineStyle::traffic(*level), Some(self.group));
        }
        if let Some(route) = route_overlay {
            canvas.bring_to_front(route);
        }

        self.applied = ticket.sequence;
        self.status = Some(TrafficStatus {
            drawn_segments: lines.len(),
            skipped_segments: skipped,
            updated_at: Local::now(),
        });
        log!("Traffic poll #{} applied: {} segments drawn, {} skipped", ticket.sequence, lines.len(), skipped);
        true
    }
}

fn resolve_segments(snapshot: &TrafficSnapshot, registry: &CoordinateRegistry) -> Vec<([Coordinate; 2], CongestionLevel)> {
    snapshot
        .roads
        .iter()
        .filter_map(|road| {
            let start = registry.lookup(&road.start)?;
            let end = registry.lookup(&road.end)?;
            Some(([start, end], road.congestion()))
        })
        .collect()
}
