//! Async commands shared by the dashboard screens.
//!
//! Each command performs one API round-trip and reports back through the
//! owning dashboard's message channel. Mutations never touch local state;
//! the dashboard reacts to `ActionDone` by forcing a refresh.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use crate::actions::NewRequest;
use crate::api::ApiClient;
use crate::commands::Command;
use crate::model::{ServiceRecord, UserRole};

/// Messages consumed by both dashboards.
pub enum DashMsg {
    /// A refresh finished. `available` is always empty for homeowners.
    Loaded {
        generation: u64,
        services: Vec<ServiceRecord>,
        available: Vec<ServiceRecord>,
    },
    LoadFailed {
        generation: u64,
        error: String,
    },
    /// A mutation succeeded; the dashboard toasts and force-refreshes.
    ActionDone(String),
    ActionFailed(String),
    Exported(PathBuf),
    ExportFailed(String),
}

/// Fetch the full dashboard data set for one refresh generation.
pub struct FetchDashboardCmd {
    api: ApiClient,
    role: UserRole,
    generation: u64,
    tx: UnboundedSender<DashMsg>,
}

impl FetchDashboardCmd {
    pub const fn new(
        api: ApiClient,
        role: UserRole,
        generation: u64,
        tx: UnboundedSender<DashMsg>,
    ) -> Self {
        Self {
            api,
            role,
            generation,
            tx,
        }
    }
}

#[async_trait]
impl Command for FetchDashboardCmd {
    fn name(&self) -> String {
        format!("Refreshing dashboard (generation {})", self.generation)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let result = match self.role {
            UserRole::Homeowner => self
                .api
                .fetch_services()
                .await
                .map(|services| (services, Vec::new())),
            UserRole::ServiceProvider => {
                match tokio::try_join!(self.api.fetch_services(), self.api.available_requests()) {
                    Ok((services, available)) => Ok((services, available)),
                    Err(e) => Err(e),
                }
            }
        };

        let msg = match result {
            Ok((services, available)) => DashMsg::Loaded {
                generation: self.generation,
                services,
                available,
            },
            Err(e) => DashMsg::LoadFailed {
                generation: self.generation,
                error: e.to_string(),
            },
        };
        let _ = self.tx.send(msg);
        Ok(())
    }
}

/// Submit a new service request (homeowner).
pub struct CreateRequestCmd {
    api: ApiClient,
    request: NewRequest,
    tx: UnboundedSender<DashMsg>,
}

impl CreateRequestCmd {
    pub const fn new(api: ApiClient, request: NewRequest, tx: UnboundedSender<DashMsg>) -> Self {
        Self { api, request, tx }
    }
}

#[async_trait]
impl Command for CreateRequestCmd {
    fn name(&self) -> String {
        format!("Creating {} request", self.request.service_type)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let msg = match self.api.create_service_request(&self.request).await {
            Ok(()) => DashMsg::ActionDone("Service request created".to_string()),
            Err(e) => DashMsg::ActionFailed(e.to_string()),
        };
        let _ = self.tx.send(msg);
        Ok(())
    }
}

/// Claim an unassigned request for the signed-in provider.
pub struct AcceptRequestCmd {
    api: ApiClient,
    service_id: String,
    tx: UnboundedSender<DashMsg>,
}

impl AcceptRequestCmd {
    pub const fn new(api: ApiClient, service_id: String, tx: UnboundedSender<DashMsg>) -> Self {
        Self {
            api,
            service_id,
            tx,
        }
    }
}

#[async_trait]
impl Command for AcceptRequestCmd {
    fn name(&self) -> String {
        format!("Accepting request {}", self.service_id)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let msg = match self.api.assign_service_provider(&self.service_id).await {
            Ok(()) => DashMsg::ActionDone("Request accepted".to_string()),
            Err(e) => DashMsg::ActionFailed(e.to_string()),
        };
        let _ = self.tx.send(msg);
        Ok(())
    }
}

/// Move a scheduled job to in-progress.
pub struct StartJobCmd {
    api: ApiClient,
    service_id: String,
    tx: UnboundedSender<DashMsg>,
}

impl StartJobCmd {
    pub const fn new(api: ApiClient, service_id: String, tx: UnboundedSender<DashMsg>) -> Self {
        Self {
            api,
            service_id,
            tx,
        }
    }
}

#[async_trait]
impl Command for StartJobCmd {
    fn name(&self) -> String {
        format!("Starting job {}", self.service_id)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let msg = match self.api.start_job(&self.service_id).await {
            Ok(()) => DashMsg::ActionDone("Job started".to_string()),
            Err(e) => DashMsg::ActionFailed(e.to_string()),
        };
        let _ = self.tx.send(msg);
        Ok(())
    }
}

/// Finish an in-progress job with its final cost and notes.
pub struct CompleteJobCmd {
    api: ApiClient,
    service_id: String,
    cost: f64,
    notes: String,
    tx: UnboundedSender<DashMsg>,
}

impl CompleteJobCmd {
    pub const fn new(
        api: ApiClient,
        service_id: String,
        cost: f64,
        notes: String,
        tx: UnboundedSender<DashMsg>,
    ) -> Self {
        Self {
            api,
            service_id,
            cost,
            notes,
            tx,
        }
    }
}

#[async_trait]
impl Command for CompleteJobCmd {
    fn name(&self) -> String {
        format!("Completing job {}", self.service_id)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let msg = match self
            .api
            .complete_service(&self.service_id, self.cost, &self.notes)
            .await
        {
            Ok(()) => DashMsg::ActionDone("Job completed".to_string()),
            Err(e) => DashMsg::ActionFailed(e.to_string()),
        };
        let _ = self.tx.send(msg);
        Ok(())
    }
}

/// Pick a new preferred date for a request (homeowner).
pub struct RescheduleCmd {
    api: ApiClient,
    service_id: String,
    preferred_date: String,
    tx: UnboundedSender<DashMsg>,
}

impl RescheduleCmd {
    pub const fn new(
        api: ApiClient,
        service_id: String,
        preferred_date: String,
        tx: UnboundedSender<DashMsg>,
    ) -> Self {
        Self {
            api,
            service_id,
            preferred_date,
            tx,
        }
    }
}

#[async_trait]
impl Command for RescheduleCmd {
    fn name(&self) -> String {
        format!("Rescheduling {}", self.service_id)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let msg = match self
            .api
            .reschedule(&self.service_id, &self.preferred_date)
            .await
        {
            Ok(()) => DashMsg::ActionDone("Request rescheduled".to_string()),
            Err(e) => DashMsg::ActionFailed(e.to_string()),
        };
        let _ = self.tx.send(msg);
        Ok(())
    }
}

/// Attach a rating to a completed service (homeowner).
pub struct RateServiceCmd {
    api: ApiClient,
    service_id: String,
    rating: u8,
    tx: UnboundedSender<DashMsg>,
}

impl RateServiceCmd {
    pub const fn new(
        api: ApiClient,
        service_id: String,
        rating: u8,
        tx: UnboundedSender<DashMsg>,
    ) -> Self {
        Self {
            api,
            service_id,
            rating,
            tx,
        }
    }
}

#[async_trait]
impl Command for RateServiceCmd {
    fn name(&self) -> String {
        format!("Rating {} ({} stars)", self.service_id, self.rating)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let msg = match self.api.rate_service(&self.service_id, self.rating).await {
            Ok(()) => DashMsg::ActionDone("Thanks for the rating".to_string()),
            Err(e) => DashMsg::ActionFailed(e.to_string()),
        };
        let _ = self.tx.send(msg);
        Ok(())
    }
}

/// Write the completed-services CSV to disk (homeowner).
pub struct ExportCsvCmd {
    csv: String,
    path: PathBuf,
    tx: UnboundedSender<DashMsg>,
}

impl ExportCsvCmd {
    pub const fn new(csv: String, path: PathBuf, tx: UnboundedSender<DashMsg>) -> Self {
        Self { csv, path, tx }
    }
}

#[async_trait]
impl Command for ExportCsvCmd {
    fn name(&self) -> String {
        format!("Exporting to {}", self.path.display())
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let msg = match tokio::fs::write(&self.path, &self.csv).await {
            Ok(()) => DashMsg::Exported(self.path),
            Err(e) => DashMsg::ExportFailed(e.to_string()),
        };
        let _ = self.tx.send(msg);
        Ok(())
    }
}
