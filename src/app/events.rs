use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc, time::sleep};

use crate::{
    domain::weather::{LocationQuery, WeatherSnapshot},
    error::{FetchError, LocationError},
};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickRefresh,
    Input(Event),
    LocationResolved {
        cycle: u64,
        result: Result<LocationQuery, LocationError>,
    },
    FetchCompleted {
        cycle: u64,
        result: Result<WeatherSnapshot, FetchError>,
    },
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Fixed-cadence refresh trigger. The first tick fires one full interval after start.
pub fn start_refresh_task(tx: mpsc::Sender<AppEvent>, refresh_secs: u64) {
    tokio::spawn(async move {
        let period = Duration::from_secs(refresh_secs.max(1));
        loop {
            sleep(period).await;
            if tx.send(AppEvent::TickRefresh).await.is_err() {
                break;
            }
        }
    });
}
