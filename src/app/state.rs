mod input;

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use chrono::Local;
use crossterm::event::Event;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    app::{
        dashboard::Dashboard,
        events::{AppEvent, start_refresh_task},
        preferences::{PreferenceStore, Preferences},
        resolver,
    },
    cli::{Cli, IconMode},
    data::{
        backend::BackendClient,
        geolocation::{DisabledGeolocator, FixedGeolocator, Geolocator, IpGeolocator},
    },
    domain::weather::{Coordinates, LocationQuery, UnitSystem, WeatherSnapshot},
    error::{FetchError, LocationError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Displaying,
    Error,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Collaborators the scheduler talks to.
#[derive(Debug, Clone)]
pub struct Services {
    pub backend: BackendClient,
    pub geolocator: Arc<dyn Geolocator>,
    pub store: PreferenceStore,
}

impl Services {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let backend = BackendClient::new(cli.api_base(), Duration::from_secs(cli.timeout.max(1)))?;
        let geolocator: Arc<dyn Geolocator> = if cli.no_geolocation {
            Arc::new(DisabledGeolocator)
        } else if let (Some(latitude), Some(longitude)) = (cli.lat, cli.lon) {
            Arc::new(FixedGeolocator(Coordinates {
                latitude,
                longitude,
            }))
        } else {
            Arc::new(IpGeolocator::new(cli.geoip_url.clone())?)
        };
        let store = if cli.no_persist {
            PreferenceStore::disabled()
        } else {
            PreferenceStore::from_env()
        };
        Ok(Self {
            backend,
            geolocator,
            store,
        })
    }
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub units: UnitSystem,
    pub query: LocationQuery,
    pub resolved_city: Option<String>,
    pub dashboard: Option<Dashboard>,
    pub last_error: Option<String>,
    pub loading_message: String,
    pub input_mode: InputMode,
    pub search_input: String,
    pub search_hint: Option<String>,
    pub help_open: bool,
    pub page_visible: bool,
    pub icon_mode: IconMode,
    refresh_interval_secs: u64,
    startup_query: Option<LocationQuery>,
    cycle: u64,
    services: Services,
}

impl AppState {
    pub fn new(cli: &Cli) -> Result<Self> {
        Ok(Self::with_services(cli, Services::from_cli(cli)?))
    }

    pub fn with_services(cli: &Cli, services: Services) -> Self {
        let preferences = services.store.load();
        let units = cli.units.map_or(preferences.units, UnitSystem::from);

        Self {
            mode: AppMode::Idle,
            running: true,
            units,
            query: LocationQuery::Unset,
            resolved_city: preferences.last_city.clone(),
            dashboard: None,
            last_error: None,
            loading_message: "Starting...".to_string(),
            input_mode: InputMode::Normal,
            search_input: String::new(),
            search_hint: None,
            help_open: false,
            page_visible: true,
            icon_mode: cli.icon_mode(),
            refresh_interval_secs: cli.refresh_interval,
            startup_query: startup_query(cli, &preferences),
            cycle: 0,
            services,
        }
    }

    /// Number of the most recently issued refresh cycle.
    #[must_use]
    pub fn current_cycle(&self) -> u64 {
        self.cycle
    }

    #[must_use]
    pub fn refresh_interval_secs(&self) -> u64 {
        self.refresh_interval_secs
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap => self.handle_bootstrap(tx),
            AppEvent::TickRefresh => self.handle_tick_refresh(tx),
            AppEvent::Input(input) => self.handle_input(input, tx),
            AppEvent::LocationResolved { cycle, result } => {
                self.handle_location_resolved(tx, cycle, result);
            }
            AppEvent::FetchCompleted { cycle, result } => self.handle_fetch_completed(cycle, result),
        }
        Ok(())
    }

    pub(crate) fn handle_bootstrap(&mut self, tx: &mpsc::Sender<AppEvent>) {
        start_refresh_task(tx.clone(), self.refresh_interval_secs);
        if let Some(query) = self.startup_query.take() {
            self.switch_to_query(tx, query);
            return;
        }

        let cycle = self.begin_cycle("Detecting location...");
        let geolocator = Arc::clone(&self.services.geolocator);
        let backend = self.services.backend.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = resolver::resolve_startup(geolocator.as_ref(), &backend).await;
            let _ = tx2.send(AppEvent::LocationResolved { cycle, result }).await;
        });
    }

    pub(crate) fn handle_tick_refresh(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if !self.page_visible {
            debug!("terminal unfocused, skipping timed refresh");
            return;
        }
        if !self.query.is_set() {
            return;
        }
        self.refresh(tx);
    }

    /// Re-fetches the active query with the active units.
    pub(crate) fn refresh(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let cycle = self.begin_cycle("Fetching weather...");
        self.dispatch_fetch(tx, cycle);
    }

    pub(crate) fn switch_to_query(&mut self, tx: &mpsc::Sender<AppEvent>, query: LocationQuery) {
        self.query = query;
        self.refresh(tx);
    }

    pub(crate) fn request_device_location(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let cycle = self.begin_cycle("Detecting location...");
        let geolocator = Arc::clone(&self.services.geolocator);
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = resolver::resolve_device(geolocator.as_ref()).await;
            let _ = tx2.send(AppEvent::LocationResolved { cycle, result }).await;
        });
    }

    pub(crate) fn submit_search(&mut self, tx: &mpsc::Sender<AppEvent>) {
        match resolver::resolve_search(&self.search_input) {
            Ok(query) => {
                self.close_search();
                self.switch_to_query(tx, query);
            }
            Err(err) => self.search_hint = Some(err.to_string()),
        }
    }

    pub(crate) fn toggle_units(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.units = self.units.toggled();
        info!(units = self.units.as_query(), "unit system changed");
        self.persist_preferences();
        if self.query.is_set() {
            self.refresh(tx);
        }
    }

    pub(crate) fn handle_location_resolved(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        cycle: u64,
        result: Result<LocationQuery, LocationError>,
    ) {
        if !self.is_current(cycle) {
            debug!(cycle, latest = self.cycle, "discarding superseded location result");
            return;
        }
        match result {
            Ok(query) => {
                self.query = query;
                self.loading_message = "Fetching weather...".to_string();
                self.dispatch_fetch(tx, cycle);
            }
            Err(err) => {
                warn!(error = ?err, "location could not be resolved");
                self.fail_cycle(err.to_string());
            }
        }
    }

    pub(crate) fn handle_fetch_completed(
        &mut self,
        cycle: u64,
        result: Result<WeatherSnapshot, FetchError>,
    ) {
        if !self.is_current(cycle) {
            debug!(cycle, latest = self.cycle, "discarding superseded fetch result");
            return;
        }
        match result {
            Ok(snapshot) => self.apply_snapshot(&snapshot),
            Err(err) => {
                warn!(error = ?err, "weather refresh failed");
                self.fail_cycle(err.to_string());
            }
        }
    }

    pub(crate) fn dismiss_error(&mut self) {
        if self.mode == AppMode::Error {
            self.last_error = None;
            self.mode = if self.dashboard.is_some() {
                AppMode::Displaying
            } else {
                AppMode::Idle
            };
        }
    }

    fn apply_snapshot(&mut self, snapshot: &WeatherSnapshot) {
        let dashboard = Dashboard::build(snapshot, &Local);
        let named = !dashboard.city.is_empty();
        if named {
            self.resolved_city = Some(dashboard.city.clone());
        }
        info!(
            location = %dashboard.current.location,
            units = dashboard.units.as_query(),
            "weather updated"
        );
        self.dashboard = Some(dashboard);
        self.last_error = None;
        self.mode = AppMode::Displaying;
        // Unnamed results keep the previously persisted lastCity.
        if named {
            self.persist_preferences();
        }
    }

    fn begin_cycle(&mut self, message: &str) -> u64 {
        self.cycle += 1;
        self.last_error = None;
        self.mode = AppMode::Loading;
        self.loading_message = message.to_string();
        debug!(cycle = self.cycle, "refresh cycle started");
        self.cycle
    }

    fn is_current(&self, cycle: u64) -> bool {
        cycle == self.cycle
    }

    fn fail_cycle(&mut self, message: String) {
        self.last_error = Some(message);
        self.mode = AppMode::Error;
    }

    fn dispatch_fetch(&self, tx: &mpsc::Sender<AppEvent>, cycle: u64) {
        let backend = self.services.backend.clone();
        let query = self.query.clone();
        let units = self.units;
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = backend.fetch_all(&query, units).await;
            let _ = tx2.send(AppEvent::FetchCompleted { cycle, result }).await;
        });
    }

    fn persist_preferences(&self) {
        self.services.store.save(&Preferences {
            units: self.units,
            last_city: self.resolved_city.clone(),
        });
    }

    pub(crate) fn handle_focus(&mut self, event: &Event) {
        match event {
            Event::FocusGained => self.page_visible = true,
            Event::FocusLost => self.page_visible = false,
            _ => {}
        }
    }
}

fn startup_query(cli: &Cli, preferences: &Preferences) -> Option<LocationQuery> {
    if let Some(city) = cli.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        return Some(LocationQuery::city(city));
    }
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        return Some(LocationQuery::Coords { lat, lon });
    }
    if cli.resume {
        return preferences
            .last_city
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(LocationQuery::city);
    }
    None
}
