//! Standalone calendar utility.
//!
//! Not wired into the tool registry: calendar access is an ancillary
//! capability invoked by hosts directly rather than by the session engine.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use log::warn;
use vesper_protocol::ToolError;

/// Start marker for a calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarStart {
    /// Event with a concrete start instant.
    Timed(DateTime<FixedOffset>),
    /// All-day event on a calendar date.
    AllDay(NaiveDate),
}

/// One upcoming event in the queried window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Event title, or a placeholder when the source omits one.
    pub summary: String,
    /// Start marker.
    pub start: CalendarStart,
}

/// Calendar provider interface for upcoming-event queries.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Fetch events starting within the next `days` days, soonest first.
    async fn upcoming(&self, days: u32) -> Result<Vec<CalendarEvent>, ToolError>;
}

/// Render events as display lines.
pub fn format_events(events: &[CalendarEvent]) -> Vec<String> {
    events
        .iter()
        .map(|event| match &event.start {
            CalendarStart::Timed(instant) => format!(
                "{} at {}",
                event.summary,
                instant.format("%I:%M %p %d-%b-%Y")
            ),
            CalendarStart::AllDay(_) => format!("{} (all day)", event.summary),
        })
        .collect()
}

/// Fetch and render upcoming events, degrading to an empty list on failure.
pub async fn list_upcoming(provider: &dyn CalendarProvider, days: u32) -> Vec<String> {
    match provider.upcoming(days).await {
        Ok(events) => format_events(&events),
        Err(err) => {
            warn!("calendar lookup failed (days={}): {err}", days);
            Vec::new()
        }
    }
}
