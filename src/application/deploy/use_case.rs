//! Deploy Use Case
//!
//! Runs the deployment pipeline:
//! 1. Trust setup (known hosts, optional key agent)
//! 2. Connectivity check, remote directory, file sync
//! 3. Registry login (when credentials are present)
//! 4. Compose validate, pull, up
//! 5. Digest lookup and deploy log append
//! 6. Service listing and health probe
//!
//! Each step's [`Fatality`] decides whether its failure aborts the run
//! or is downgraded to a notice. There is no rollback.

use chrono::{DateTime, Utc};

use crate::config::DeployConfig;
use crate::domain::ports::{
    Action, DeployEvent, DeployEventSink, ExecutionMode, Executor, NoopEventSink, Outcome,
    TrustProvider,
};
use crate::domain::services::{render, PROBE_TOOL_MISSING};
use crate::domain::value_objects::{DeployLogEntry, Fatality, HealthStatus, Step};
use crate::error::{DeployError, DeployResult};

use super::result::DeployReport;

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so the pipeline can run against fakes.
pub struct DeployUseCase<'a, T, E>
where
    T: TrustProvider,
    E: Executor,
{
    config: &'a DeployConfig,
    trust: T,
    executor: E,
    clock: fn() -> DateTime<Utc>,
}

impl<'a, T, E> DeployUseCase<'a, T, E>
where
    T: TrustProvider,
    E: Executor,
{
    pub fn new(config: &'a DeployConfig, trust: T, executor: E) -> Self {
        Self {
            config,
            trust,
            executor,
            clock: Utc::now,
        }
    }

    /// Override the timestamp source for the deploy log entry
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Execute without progress reporting
    pub fn execute(&mut self) -> DeployResult<DeployReport> {
        self.execute_with_events(&NoopEventSink)
    }

    /// Execute the pipeline, reporting progress to `events`
    pub fn execute_with_events(
        &mut self,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployReport> {
        let config = self.config;
        let dry_run = self.executor.mode() == ExecutionMode::DryRun;

        events.on_event(DeployEvent::Started {
            destination: config.target.destination(),
            remote_dir: config.remote_dir.clone(),
            image: config.image.clone(),
            dry_run,
        });

        self.establish_trust(events)?;

        self.run_step(events, Action::CheckConnectivity)?;
        self.run_step(
            events,
            Action::EnsureRemoteDir {
                path: config.remote_dir.clone(),
            },
        )?;
        self.run_step(
            events,
            Action::SyncFiles {
                sources: config.sync_files.clone(),
                remote_dir: config.remote_dir.clone(),
            },
        )?;

        if let Some(creds) = &config.registry {
            self.run_step(
                events,
                Action::RegistryLogin {
                    registry: config.registry_host.clone(),
                    username: creds.username.clone(),
                    token: creds.token.clone(),
                },
            )?;
        }

        let project = config.compose_project();
        self.run_step(events, Action::ComposeValidate(project.clone()))?;
        self.run_step(events, Action::ComposePull(project.clone()))?;
        self.run_step(events, Action::ComposeUp(project.clone()))?;

        let digest = completed(self.run_step(
            events,
            Action::ResolveDigest {
                image: config.image.clone(),
            },
        )?);

        let log_entry = DeployLogEntry::new((self.clock)(), &config.invoker, &config.image, digest);
        self.run_step(
            events,
            Action::AppendLog {
                log_path: config.log_path(),
                entry: log_entry.clone(),
            },
        )?;

        let services = completed(self.run_step(events, Action::ListServices(project))?);

        let health = self.probe_health(events);

        events.on_event(DeployEvent::Completed {
            digest: log_entry.digest.clone(),
            health: health.clone(),
            dry_run,
        });

        Ok(DeployReport {
            dry_run,
            log_entry,
            services,
            health,
        })
    }

    fn establish_trust(&mut self, events: &dyn DeployEventSink) -> DeployResult<()> {
        let config = self.config;

        events.on_event(DeployEvent::StepStarted {
            step: Step::KnownHosts,
        });
        match self.trust.ensure_known_host(config.target.host()) {
            Ok(()) => events.on_event(DeployEvent::StepCompleted {
                step: Step::KnownHosts,
                detail: None,
            }),
            Err(e) => events.on_event(DeployEvent::StepDegraded {
                step: Step::KnownHosts,
                reason: e.to_string(),
            }),
        }

        if let Some(key) = &config.ssh_key {
            events.on_event(DeployEvent::StepStarted { step: Step::LoadKey });
            let agent = self.trust.load_identity(key).map_err(|source| {
                events.on_event(DeployEvent::StepFailed {
                    step: Step::LoadKey,
                    error: source.to_string(),
                });
                DeployError::Identity {
                    key: key.clone(),
                    source,
                }
            })?;
            self.executor.use_agent(&agent);
            events.on_event(DeployEvent::StepCompleted {
                step: Step::LoadKey,
                detail: Some(key.display().to_string()),
            });
        }

        Ok(())
    }

    fn announce_command(&self, events: &dyn DeployEventSink, action: &Action) {
        if self.executor.mode() != ExecutionMode::Live {
            return;
        }
        if let Some(cmd) = render(action) {
            events.on_event(DeployEvent::Command {
                step: action.step(),
                script: cmd.script().to_string(),
            });
        }
    }

    /// Run one pipeline step.
    ///
    /// A failing strict step aborts the deploy; a failing best-effort step
    /// is reported and yields `None`.
    fn run_step(
        &mut self,
        events: &dyn DeployEventSink,
        action: Action,
    ) -> DeployResult<Option<Outcome>> {
        let step = action.step();
        events.on_event(DeployEvent::StepStarted { step });
        self.announce_command(events, &action);

        let source = match self.executor.execute(&action) {
            Ok(outcome) => {
                emit_outcome(events, step, &outcome);
                return Ok(Some(outcome));
            }
            Err(source) => source,
        };

        match step.fatality() {
            Fatality::Strict => {
                events.on_event(DeployEvent::StepFailed {
                    step,
                    error: source.to_string(),
                });
                Err(DeployError::Step { step, source })
            }
            Fatality::BestEffort => {
                events.on_event(DeployEvent::StepDegraded {
                    step,
                    reason: source.to_string(),
                });
                Ok(None)
            }
        }
    }

    fn probe_health(&mut self, events: &dyn DeployEventSink) -> HealthStatus {
        let action = Action::HealthProbe {
            url: self.config.health_url.clone(),
        };
        let step = action.step();
        events.on_event(DeployEvent::StepStarted { step });
        self.announce_command(events, &action);

        match self.executor.execute(&action) {
            Ok(Outcome::Announced(intent)) => {
                events.on_event(DeployEvent::StepAnnounced { step, intent });
                HealthStatus::Skipped("dry-run".to_string())
            }
            Ok(Outcome::Completed(out)) if out.contains(PROBE_TOOL_MISSING) => {
                let reason = "curl not available on remote host".to_string();
                events.on_event(DeployEvent::StepSkipped {
                    step,
                    reason: reason.clone(),
                });
                HealthStatus::Skipped(reason)
            }
            Ok(Outcome::Completed(out)) => {
                events.on_event(DeployEvent::StepCompleted {
                    step,
                    detail: non_empty(&out),
                });
                HealthStatus::Healthy
            }
            Err(e) => {
                let reason = e.to_string();
                events.on_event(DeployEvent::StepDegraded {
                    step,
                    reason: reason.clone(),
                });
                HealthStatus::Failed(reason)
            }
        }
    }
}

fn emit_outcome(events: &dyn DeployEventSink, step: Step, outcome: &Outcome) {
    match outcome {
        Outcome::Completed(out) => events.on_event(DeployEvent::StepCompleted {
            step,
            detail: non_empty(out),
        }),
        Outcome::Announced(intent) => events.on_event(DeployEvent::StepAnnounced {
            step,
            intent: intent.clone(),
        }),
    }
}

fn completed(outcome: Option<Outcome>) -> Option<String> {
    match outcome {
        Some(Outcome::Completed(out)) => Some(out),
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
