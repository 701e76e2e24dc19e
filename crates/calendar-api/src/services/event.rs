// Event service for business logic

use anyhow::Result;
use calendar_contracts::{CreateEventRequest, Event};
use calendar_storage::{models::CreateEventRow, Database, EventRow};
use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by [`EventService::create`]
#[derive(Debug, Error)]
pub enum CreateEventError {
    /// A required field was empty or absent
    #[error("date and holidayType are required")]
    MissingFields,
    /// Underlying store failure
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct EventService {
    db: Arc<Database>,
}

impl EventService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let rows = self.db.list_events().await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    pub async fn get(&self, date: &str) -> Result<Option<Event>> {
        let row = self.db.find_event_by_date(date).await?;
        Ok(row.map(Self::row_to_event))
    }

    /// Create an event. `day` is overwritten with the derived weekday name
    /// whenever `date` parses as `YYYY-MM-DD`; a non-parseable date keeps the
    /// supplied value untouched. An existing event with the same date is not
    /// checked for; the new row is simply added.
    pub async fn create(&self, req: CreateEventRequest) -> Result<Event, CreateEventError> {
        if req.date.is_empty() || req.holiday_type.is_empty() {
            return Err(CreateEventError::MissingFields);
        }

        let day = weekday_name(&req.date)
            .map(str::to_owned)
            .unwrap_or(req.day);

        let input = CreateEventRow {
            date: req.date,
            holiday_type: req.holiday_type,
            day,
            extra: serde_json::Value::Object(req.extra),
        };
        let row = self.db.insert_event(input).await?;
        Ok(Self::row_to_event(row))
    }

    pub async fn delete(&self, date: &str) -> Result<bool> {
        self.db.delete_event_by_date(date).await
    }

    fn row_to_event(row: EventRow) -> Event {
        let extra = match row.extra {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        Event {
            date: row.date,
            holiday_type: row.holiday_type,
            day: row.day,
            extra,
        }
    }
}

/// English weekday name for a strict `YYYY-MM-DD` date, or `None` when the
/// input does not match that shape. chrono accepts unpadded fields, the wire
/// format does not, hence the width check.
fn weekday_name(date: &str) -> Option<&'static str> {
    if date.len() != 10 {
        return None;
    }
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some(match parsed.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    })
}
