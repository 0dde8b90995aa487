use async_trait::async_trait;

use crate::models::{CalendarError, CalendarEvent, CreatedEvent};

/// Calendar backend able to insert a single event.
#[async_trait]
pub trait CalendarService: Send + Sync {
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &CalendarEvent,
    ) -> Result<CreatedEvent, CalendarError>;
}
