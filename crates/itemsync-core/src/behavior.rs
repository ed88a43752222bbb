//! Copy behavior lifecycle
//!
//! A behavior is the unit a host plugs into its event surface. The host
//! calls [`Behavior::initialize`] once after loading, then forwards item
//! change notifications and burst brackets; the behavior decides when a
//! synchronization pass runs.

use itemsync_config::CopyConfig;
use itemsync_host::{ItemId, ProjectId, TrackerHost};

use crate::coalescer::{ChangeCoalescer, Decision};
use crate::error::{Error, Result};
use crate::mapping::Mapping;
use crate::pass::SyncPlan;

/// Host-facing event surface of a behavior.
///
/// Change notifications and burst brackets are infallible by design: a
/// failed pass is logged and the behavior stays armed for the next
/// change. Only [`initialize`](Behavior::initialize) can reject a
/// behavior outright.
pub trait Behavior: Send {
    /// Title shown in logs and host UIs.
    fn title(&self) -> &str;

    /// Resolve the configuration against the live tracker and run the
    /// initial pass.
    ///
    /// Fails if the configuration is invalid, a project or column does
    /// not exist, or the initial pass cannot query its endpoints. A
    /// behavior that fails here must not receive further events.
    fn initialize(&mut self, host: &dyn TrackerHost) -> Result<()>;

    /// The host is about to deliver a burst of buffered changes.
    fn on_burst_begin(&mut self);

    /// An item changed in `project`.
    fn on_item_changed(&mut self, host: &dyn TrackerHost, item: ItemId, project: ProjectId);

    /// A custom column value changed on an item in `project`.
    fn on_item_custom_field_changed(
        &mut self,
        host: &dyn TrackerHost,
        item: ItemId,
        project: ProjectId,
    );

    /// The burst of buffered changes is over.
    fn on_burst_end(&mut self, host: &dyn TrackerHost);
}

/// Everything resolved at initialization time.
#[derive(Debug)]
struct Resolved {
    /// Project whose changes make a pass worth running.
    source_project: ProjectId,
    plan: SyncPlan,
}

/// Copies mapped column values from source items to the target items
/// that link them, re-running whenever the source project changes.
pub struct CopyBehavior {
    title: String,
    config: CopyConfig,
    coalescer: ChangeCoalescer,
    resolved: Option<Resolved>,
}

impl CopyBehavior {
    /// Build a behavior from its configuration. Resolution against the
    /// tracker is deferred to [`Behavior::initialize`].
    pub fn from_config(config: CopyConfig) -> Self {
        Self {
            title: config.effective_title(),
            config,
            coalescer: ChangeCoalescer::new(),
            resolved: None,
        }
    }

    /// Feed one change notification through the coalescer and run a
    /// pass if it says so. Changes in any project other than the
    /// resolved source project are not relevant.
    fn handle_change(&mut self, host: &dyn TrackerHost, project: ProjectId) {
        let relevant = self
            .resolved
            .as_ref()
            .is_some_and(|r| r.source_project == project);
        match self.coalescer.notify_change(relevant) {
            Decision::Run => self.run_pass(host),
            Decision::Defer => {
                tracing::debug!("Deferred pass for '{}' until burst end", self.title);
            }
            Decision::Skip => {}
        }
    }

    fn run_pass(&self, host: &dyn TrackerHost) {
        let Some(resolved) = &self.resolved else {
            return;
        };
        match resolved.plan.run(host) {
            Ok(report) => {
                tracing::debug!(
                    "Pass for '{}' matched {} item(s), wrote {} value(s), {} error(s)",
                    self.title,
                    report.matched,
                    report.written,
                    report.errors.len()
                );
            }
            Err(e) => {
                tracing::error!("Pass for '{}' failed: {}", self.title, e);
            }
        }
    }
}

impl Behavior for CopyBehavior {
    fn title(&self) -> &str {
        &self.title
    }

    fn initialize(&mut self, host: &dyn TrackerHost) -> Result<()> {
        self.config.validate()?;

        let source_project = host
            .find_project(&self.config.source.project)
            .ok_or_else(|| Error::ProjectNotFound {
                name: self.config.source.project.clone(),
            })?;
        let target_project = host
            .find_project(&self.config.target.project)
            .ok_or_else(|| Error::ProjectNotFound {
                name: self.config.target.project.clone(),
            })?;

        let source_view = host.view(source_project, self.config.source.view.class())?;
        let target_view = host.view(target_project, self.config.target.view.class())?;

        let mut mappings = Vec::with_capacity(self.config.mappings.len());
        for spec in &self.config.mappings {
            mappings.push(Mapping::resolve(host, source_view, target_view, spec)?);
        }

        let plan = SyncPlan {
            source_view,
            target_view,
            source_find: self.config.source.find.clone(),
            target_find: self.config.target.find.clone(),
            mappings,
        };

        // Bring the target up to date before the first notification.
        let report = plan.run(host)?;
        tracing::debug!(
            "Initialized '{}': initial pass matched {} item(s), wrote {} value(s)",
            self.title,
            report.matched,
            report.written
        );

        self.resolved = Some(Resolved {
            source_project,
            plan,
        });
        Ok(())
    }

    fn on_burst_begin(&mut self) {
        self.coalescer.begin_burst();
    }

    // TODO: narrow relevance to the mapped columns once the host reports
    // which column changed.
    fn on_item_changed(&mut self, host: &dyn TrackerHost, _item: ItemId, project: ProjectId) {
        self.handle_change(host, project);
    }

    fn on_item_custom_field_changed(
        &mut self,
        host: &dyn TrackerHost,
        _item: ItemId,
        project: ProjectId,
    ) {
        self.handle_change(host, project);
    }

    fn on_burst_end(&mut self, host: &dyn TrackerHost) {
        if self.coalescer.end_burst() == Decision::Run {
            self.run_pass(host);
        }
    }
}
