//! Entity resolution and fan-out dispatch of service requests.
//!
//! Responsibilities:
//! - Resolving a request's entity filter against a registry snapshot
//! - Per-service target selection (join master exclusion, unjoin leader priority)
//! - Invoking the device action on each target in resolved order
//! - Isolating per-target failures and reporting every outcome

use std::future::Future;
use std::sync::Arc;

use crate::device::{DeviceAction, DeviceHandle, DeviceResult};
use crate::error::ErrorCode;
use crate::events::{DispatchEmitter, DispatchEvent, SkipReason};
use crate::registry::{DeviceRegistry, EntityFilter, RegistrySnapshot};

use super::report::DispatchReport;
use super::request::CommandRequest;

/// Dispatches validated requests to the devices of a registry.
///
/// The registry is injected and only read. Each call to [`handle`](Self::handle)
/// works on its own snapshot, so concurrent requests need no coordination.
pub struct Dispatcher {
    registry: Arc<DeviceRegistry>,
    emitter: Arc<dyn DispatchEmitter>,
}

impl Dispatcher {
    /// Creates a new Dispatcher over `registry`.
    pub fn new(registry: Arc<DeviceRegistry>, emitter: Arc<dyn DispatchEmitter>) -> Self {
        Self { registry, emitter }
    }

    /// The registry this dispatcher resolves against.
    pub fn registry(&self) -> &Arc<DeviceRegistry> {
        &self.registry
    }

    /// Handles one request and reports the outcome of every device action.
    ///
    /// Never fails: device errors are logged, emitted and recorded in the
    /// report while the remaining targets are still processed.
    pub async fn handle(&self, request: CommandRequest) -> DispatchReport {
        let mut report = DispatchReport::new(request.kind());
        let snapshot = self.registry.snapshot();
        let entities = snapshot.resolve(&request.entity_filter());

        log::debug!(
            "[Dispatch] {} ({}) resolved {:?} from {} registered device(s)",
            report.service,
            report.request_id,
            entity_ids(&entities),
            snapshot.len()
        );
        self.emitter.emit(DispatchEvent::Resolved {
            request_id: report.request_id,
            service: report.service,
            targets: entity_ids(&entities),
        });

        match request {
            CommandRequest::Join(r) => {
                self.join(&mut report, &snapshot, &r.master, entities).await;
            }
            CommandRequest::Unjoin(_) => {
                self.unjoin(&mut report, entities).await;
            }
            CommandRequest::Preset(r) => {
                for device in &self.named(&report, entities, &r.entities) {
                    let detail = format!("preset={}", r.preset);
                    self.invoke(&mut report, device, DeviceAction::Preset, detail, || {
                        device.preset(r.preset)
                    })
                    .await;
                }
            }
            CommandRequest::Command(r) => {
                for device in &self.named(&report, entities, &r.entities) {
                    let detail = format!("command={:?}, notify={}", r.command, r.notify);
                    self.invoke(&mut report, device, DeviceAction::ExecuteCommand, detail, || {
                        device.execute_command(&r.command, r.notify)
                    })
                    .await;
                }
            }
            CommandRequest::Snapshot(r) => {
                for device in &self.named(&report, entities, &r.entities) {
                    let detail = format!("switchinput={}", r.switch_input);
                    self.invoke(&mut report, device, DeviceAction::Snapshot, detail, || {
                        device.snapshot(r.switch_input)
                    })
                    .await;
                }
            }
            CommandRequest::Restore(r) => {
                for device in &self.named(&report, entities, &r.entities) {
                    self.invoke(
                        &mut report,
                        device,
                        DeviceAction::Restore,
                        String::new(),
                        || device.restore(),
                    )
                    .await;
                }
            }
            CommandRequest::PlayTrack(r) => {
                let filter = EntityFilter::single(r.entity_id.clone());
                for device in &self.named(&report, entities, &filter) {
                    let detail = format!("track={:?}", r.track);
                    self.invoke(&mut report, device, DeviceAction::PlayTrack, detail, || {
                        device.play_track(&r.track)
                    })
                    .await;
                }
            }
            CommandRequest::SoundSettings(r) => {
                let filter = EntityFilter::single(r.entity_id.clone());
                for device in &self.named(&report, entities, &filter) {
                    let detail = format!("settings={:?}", r.settings);
                    self.invoke(&mut report, device, DeviceAction::SetSound, detail, || {
                        device.set_sound(&r.settings)
                    })
                    .await;
                }
            }
        }

        log::debug!(
            "[Dispatch] {} ({}) finished: {} action(s), {} failed",
            report.service,
            report.request_id,
            report.targets.len(),
            report.failures().count()
        );
        report
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Grouping
    // ─────────────────────────────────────────────────────────────────────────────

    /// Joins every resolved entity except the master to the master.
    ///
    /// The master is looked up in the full snapshot, not the resolved set,
    /// and receives a single call carrying the whole client list.
    async fn join(
        &self,
        report: &mut DispatchReport,
        snapshot: &RegistrySnapshot,
        master_id: &str,
        entities: Vec<DeviceHandle>,
    ) {
        let Some(master) = snapshot.find(master_id).cloned() else {
            log::debug!("[Dispatch] join master {} not registered", master_id);
            self.skip(
                report,
                SkipReason::MasterNotFound {
                    master: master_id.to_string(),
                },
            );
            return;
        };

        if entities.is_empty() {
            self.skip(report, SkipReason::NoTargets);
            return;
        }

        // The client list may be empty when only the master resolved.
        let clients: Vec<DeviceHandle> = entities
            .into_iter()
            .filter(|d| d.entity_id() != master.entity_id())
            .collect();

        let detail = format!("clients={:?}", entity_ids(&clients));
        self.invoke(report, &master, DeviceAction::Join, detail, || {
            master.join(&clients)
        })
        .await;
    }

    /// Dissolves groups among the resolved entities.
    ///
    /// If any resolved entity leads a group, only the leaders are told to
    /// dissolve their groups; otherwise every entity leaves on its own.
    async fn unjoin(&self, report: &mut DispatchReport, entities: Vec<DeviceHandle>) {
        if entities.is_empty() {
            self.skip(report, SkipReason::NoTargets);
            return;
        }

        let leaders: Vec<&DeviceHandle> = entities.iter().filter(|d| d.is_group_leader()).collect();

        if leaders.is_empty() {
            for device in &entities {
                self.invoke(
                    report,
                    device,
                    DeviceAction::UnjoinSelf,
                    String::new(),
                    || device.unjoin_self(),
                )
                .await;
            }
        } else {
            log::debug!(
                "[Dispatch] unjoin found leader(s) {:?}",
                leaders.iter().map(|d| d.entity_id()).collect::<Vec<_>>()
            );
            for leader in leaders {
                self.invoke(
                    report,
                    leader,
                    DeviceAction::UnjoinAll,
                    String::new(),
                    || leader.unjoin_all(),
                )
                .await;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────────

    /// Keeps the resolved entities explicitly named by `filter`.
    ///
    /// An empty id list resolves to every device but names none of them.
    fn named(
        &self,
        report: &DispatchReport,
        entities: Vec<DeviceHandle>,
        filter: &EntityFilter,
    ) -> Vec<DeviceHandle> {
        let targets: Vec<DeviceHandle> = entities
            .into_iter()
            .filter(|d| filter.names(d.entity_id()))
            .collect();
        if targets.is_empty() {
            self.skip(report, SkipReason::NoTargets);
        }
        targets
    }

    fn skip(&self, report: &DispatchReport, reason: SkipReason) {
        log::debug!(
            "[Dispatch] {} ({}) skipped: {:?}",
            report.service,
            report.request_id,
            reason
        );
        self.emitter.emit(DispatchEvent::Skipped {
            request_id: report.request_id,
            service: report.service,
            reason,
        });
    }

    /// Invokes one device action, recording its outcome.
    ///
    /// The action is logged and emitted before `call` runs.
    async fn invoke<F, Fut>(
        &self,
        report: &mut DispatchReport,
        device: &DeviceHandle,
        action: DeviceAction,
        detail: String,
        call: F,
    ) where
        F: FnOnce() -> Fut,
        Fut: Future<Output = DeviceResult<()>>,
    {
        let entity_id = device.entity_id();
        log::debug!("[Dispatch] {} on {} {}", action, entity_id, detail);
        self.emitter.emit(DispatchEvent::Invoking {
            request_id: report.request_id,
            entity_id: entity_id.to_string(),
            action,
            detail,
        });

        match call().await {
            Ok(()) => {
                self.emitter.emit(DispatchEvent::Completed {
                    request_id: report.request_id,
                    entity_id: entity_id.to_string(),
                    action,
                });
                report.record_success(entity_id, action);
            }
            Err(e) => {
                log::warn!(
                    "[Dispatch] {} failed on {} ({}): {}",
                    action,
                    entity_id,
                    e.code(),
                    e
                );
                self.emitter.emit(DispatchEvent::Failed {
                    request_id: report.request_id,
                    entity_id: entity_id.to_string(),
                    action,
                    error: e.to_string(),
                });
                report.record_failure(entity_id, action, e.to_string());
            }
        }
    }
}

fn entity_ids(devices: &[DeviceHandle]) -> Vec<String> {
    devices.iter().map(|d| d.entity_id().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::test_support::{registry_of, Call, CallLog, MockDevice};
    use crate::device::SoundSettings;
    use crate::events::NoopDispatchEmitter;
    use crate::services::request::{
        JoinRequest, PlayTrackRequest, PresetRequest, RawCommandRequest, RestoreRequest,
        SnapshotRequest, SoundSettingsRequest, UnjoinRequest,
    };
    use crate::services::schema::validate;
    use crate::services::ServiceKind;
    use parking_lot::Mutex;
    use serde_json::json;

    const A: &str = "media_player.a";
    const B: &str = "media_player.b";
    const C: &str = "media_player.c";

    fn ids(list: &[&str]) -> EntityFilter {
        EntityFilter::Ids(list.iter().map(|s| s.to_string()).collect())
    }

    fn dispatcher(devices: &[Arc<MockDevice>]) -> Dispatcher {
        Dispatcher::new(registry_of(devices), Arc::new(NoopDispatchEmitter))
    }

    /// Three plain devices sharing one call log.
    fn abc(log: &CallLog) -> Dispatcher {
        dispatcher(&[
            MockDevice::new(A, log),
            MockDevice::new(B, log),
            MockDevice::new(C, log),
        ])
    }

    /// Emitter that keeps every event for inspection.
    #[derive(Default)]
    struct RecordingEmitter(Mutex<Vec<DispatchEvent>>);

    impl DispatchEmitter for RecordingEmitter {
        fn emit(&self, event: DispatchEvent) {
            self.0.lock().push(event);
        }
    }

    // ───────────────────────────────────────────────────────────────────
    // Join
    // ───────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn join_calls_master_once_with_all_clients() {
        let log = CallLog::new();
        let dispatcher = abc(&log);

        let report = dispatcher
            .handle(CommandRequest::Join(JoinRequest {
                master: B.into(),
                entities: ids(&[A, B, C]),
            }))
            .await;

        assert_eq!(
            log.calls(),
            [(B.to_string(), Call::Join(vec![A.into(), C.into()]))]
        );
        assert_eq!(report.targets.len(), 1);
        assert_eq!(report.targets[0].entity_id, B);
        assert_eq!(report.targets[0].action, DeviceAction::Join);
    }

    #[tokio::test]
    async fn join_with_unknown_master_does_nothing() {
        let log = CallLog::new();
        let dispatcher = abc(&log);

        let report = dispatcher
            .handle(CommandRequest::Join(JoinRequest {
                master: "media_player.kitchen".into(),
                entities: ids(&[A, B, C]),
            }))
            .await;

        assert!(log.is_empty());
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn join_without_filter_excludes_master_from_clients() {
        let log = CallLog::new();
        let dispatcher = abc(&log);

        dispatcher
            .handle(CommandRequest::Join(JoinRequest {
                master: A.into(),
                entities: EntityFilter::All,
            }))
            .await;

        assert_eq!(
            log.calls(),
            [(A.to_string(), Call::Join(vec![B.into(), C.into()]))]
        );
    }

    #[tokio::test]
    async fn join_master_outside_filter_is_still_found() {
        let log = CallLog::new();
        let dispatcher = abc(&log);

        dispatcher
            .handle(CommandRequest::Join(JoinRequest {
                master: C.into(),
                entities: ids(&[A]),
            }))
            .await;

        assert_eq!(log.calls(), [(C.to_string(), Call::Join(vec![A.into()]))]);
    }

    #[tokio::test]
    async fn join_with_only_master_resolved_sends_empty_client_list() {
        let log = CallLog::new();
        let dispatcher = dispatcher(&[MockDevice::new(A, &log), MockDevice::new(B, &log)]);

        let report = dispatcher
            .handle(CommandRequest::Join(JoinRequest {
                master: B.into(),
                entities: EntityFilter::single(B),
            }))
            .await;

        assert_eq!(log.calls(), [(B.to_string(), Call::Join(vec![]))]);
        assert_eq!(report.targets.len(), 1);
        assert!(report.all_succeeded());
    }

    // ───────────────────────────────────────────────────────────────────
    // Unjoin
    // ───────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn unjoin_with_leader_only_dissolves_leader_group() {
        let log = CallLog::new();
        let dispatcher = dispatcher(&[
            MockDevice::leader(A, &log),
            MockDevice::new(B, &log),
            MockDevice::new(C, &log),
        ]);

        dispatcher
            .handle(CommandRequest::Unjoin(UnjoinRequest {
                entities: ids(&[A, B, C]),
            }))
            .await;

        assert_eq!(log.calls(), [(A.to_string(), Call::UnjoinAll)]);
        assert!(log.calls_for(B).is_empty());
        assert!(log.calls_for(C).is_empty());
    }

    #[tokio::test]
    async fn unjoin_calls_every_leader_once() {
        let log = CallLog::new();
        let dispatcher = dispatcher(&[
            MockDevice::leader(A, &log),
            MockDevice::new(B, &log),
            MockDevice::leader(C, &log),
        ]);

        dispatcher
            .handle(CommandRequest::Unjoin(UnjoinRequest {
                entities: EntityFilter::All,
            }))
            .await;

        assert_eq!(
            log.calls(),
            [
                (A.to_string(), Call::UnjoinAll),
                (C.to_string(), Call::UnjoinAll)
            ]
        );
    }

    #[tokio::test]
    async fn unjoin_without_leader_unjoins_each_device() {
        let log = CallLog::new();
        let dispatcher = abc(&log);

        dispatcher
            .handle(CommandRequest::Unjoin(UnjoinRequest {
                entities: ids(&[C, A]),
            }))
            .await;

        assert_eq!(
            log.calls(),
            [
                (A.to_string(), Call::UnjoinSelf),
                (C.to_string(), Call::UnjoinSelf)
            ]
        );
    }

    #[tokio::test]
    async fn unjoin_ignores_leaders_outside_resolved_set() {
        let log = CallLog::new();
        let dispatcher = dispatcher(&[
            MockDevice::leader(A, &log),
            MockDevice::new(B, &log),
            MockDevice::new(C, &log),
        ]);

        dispatcher
            .handle(CommandRequest::Unjoin(UnjoinRequest {
                entities: ids(&[B, C]),
            }))
            .await;

        assert_eq!(
            log.calls(),
            [
                (B.to_string(), Call::UnjoinSelf),
                (C.to_string(), Call::UnjoinSelf)
            ]
        );
    }

    // ───────────────────────────────────────────────────────────────────
    // Per-target services
    // ───────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn preset_is_recalled_on_each_target_in_order() {
        let log = CallLog::new();
        let dispatcher = dispatcher(&[MockDevice::new(A, &log), MockDevice::new(B, &log)]);

        let report = dispatcher
            .handle(CommandRequest::Preset(PresetRequest {
                entities: ids(&[B, A]),
                preset: 3,
            }))
            .await;

        assert_eq!(
            log.calls(),
            [
                (A.to_string(), Call::Preset(3)),
                (B.to_string(), Call::Preset(3))
            ]
        );
        assert!(report.all_succeeded());
        assert_eq!(report.targets.len(), 2);
    }

    #[tokio::test]
    async fn preset_with_empty_id_list_names_no_target() {
        let log = CallLog::new();
        let dispatcher = abc(&log);

        dispatcher
            .handle(CommandRequest::Preset(PresetRequest {
                entities: EntityFilter::Ids(vec![]),
                preset: 1,
            }))
            .await;

        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn command_without_notify_defaults_to_notify() {
        let log = CallLog::new();
        let dispatcher = abc(&log);
        let request = validate(
            ServiceKind::Command,
            &json!({ "entity_id": [A], "command": "setPlayerCmd:pause" }),
        )
        .unwrap();

        dispatcher.handle(request).await;

        assert_eq!(
            log.calls(),
            [(
                A.to_string(),
                Call::ExecuteCommand("setPlayerCmd:pause".into(), true)
            )]
        );
    }

    #[tokio::test]
    async fn command_passes_explicit_notify() {
        let log = CallLog::new();
        let dispatcher = abc(&log);

        dispatcher
            .handle(CommandRequest::Command(RawCommandRequest {
                entities: ids(&[B]),
                command: "reboot".into(),
                notify: false,
            }))
            .await;

        assert_eq!(
            log.calls_for(B),
            [Call::ExecuteCommand("reboot".into(), false)]
        );
    }

    #[tokio::test]
    async fn snapshot_without_switchinput_defaults_to_switch() {
        let log = CallLog::new();
        let dispatcher = abc(&log);
        let request = validate(ServiceKind::Snapshot, &json!({ "entity_id": "all" })).unwrap();

        dispatcher.handle(request).await;

        assert_eq!(
            log.calls(),
            [
                (A.to_string(), Call::Snapshot(true)),
                (B.to_string(), Call::Snapshot(true)),
                (C.to_string(), Call::Snapshot(true))
            ]
        );
    }

    #[tokio::test]
    async fn restore_targets_listed_entities() {
        let log = CallLog::new();
        let dispatcher = abc(&log);

        dispatcher
            .handle(CommandRequest::Snapshot(SnapshotRequest {
                entities: ids(&[A]),
                switch_input: false,
            }))
            .await;
        dispatcher
            .handle(CommandRequest::Restore(RestoreRequest {
                entities: ids(&[A, C]),
            }))
            .await;

        assert_eq!(
            log.calls(),
            [
                (A.to_string(), Call::Snapshot(false)),
                (A.to_string(), Call::Restore),
                (C.to_string(), Call::Restore)
            ]
        );
    }

    #[tokio::test]
    async fn play_track_targets_single_entity() {
        let log = CallLog::new();
        let dispatcher = abc(&log);

        dispatcher
            .handle(CommandRequest::PlayTrack(PlayTrackRequest {
                entity_id: C.into(),
                track: "Intro.flac".into(),
            }))
            .await;

        assert_eq!(
            log.calls(),
            [(C.to_string(), Call::PlayTrack("Intro.flac".into()))]
        );
    }

    #[tokio::test]
    async fn sound_settings_are_passed_unchanged() {
        let log = CallLog::new();
        let dispatcher = abc(&log);
        let settings = SoundSettings {
            sound_program: Some("tv program".into()),
            mute: Some(false),
            ..Default::default()
        };

        dispatcher
            .handle(CommandRequest::SoundSettings(SoundSettingsRequest {
                entity_id: B.into(),
                settings: settings.clone(),
            }))
            .await;

        assert_eq!(log.calls(), [(B.to_string(), Call::SetSound(settings))]);
    }

    // ───────────────────────────────────────────────────────────────────
    // Empty resolution and failure isolation
    // ───────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn unmatched_filter_invokes_nothing_for_any_service() {
        let log = CallLog::new();
        let dispatcher = abc(&log);
        let nowhere = ids(&["media_player.kitchen"]);

        let requests = vec![
            CommandRequest::Join(JoinRequest {
                master: A.into(),
                entities: nowhere.clone(),
            }),
            CommandRequest::Unjoin(UnjoinRequest {
                entities: nowhere.clone(),
            }),
            CommandRequest::Preset(PresetRequest {
                entities: nowhere.clone(),
                preset: 1,
            }),
            CommandRequest::Command(RawCommandRequest {
                entities: nowhere.clone(),
                command: "reboot".into(),
                notify: true,
            }),
            CommandRequest::Snapshot(SnapshotRequest {
                entities: nowhere.clone(),
                switch_input: true,
            }),
            CommandRequest::Restore(RestoreRequest { entities: nowhere }),
            CommandRequest::PlayTrack(PlayTrackRequest {
                entity_id: "media_player.kitchen".into(),
                track: "a.mp3".into(),
            }),
            CommandRequest::SoundSettings(SoundSettingsRequest {
                entity_id: "media_player.kitchen".into(),
                settings: SoundSettings::default(),
            }),
        ];

        for request in requests {
            let report = dispatcher.handle(request).await;
            assert!(report.is_empty(), "{:?} invoked devices", report.service);
        }
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn failing_target_does_not_stop_remaining_targets() {
        let log = CallLog::new();
        let dispatcher = dispatcher(&[
            MockDevice::failing(A, &log),
            MockDevice::new(B, &log),
            MockDevice::failing(C, &log),
        ]);

        let report = dispatcher
            .handle(CommandRequest::Restore(RestoreRequest {
                entities: EntityFilter::All,
            }))
            .await;

        assert_eq!(log.calls().len(), 3);
        assert_eq!(report.targets.len(), 3);
        assert!(!report.targets[0].success);
        assert!(report.targets[0].error.as_deref().unwrap().contains("unreachable"));
        assert!(report.targets[1].success);
        assert!(!report.targets[2].success);
        assert_eq!(report.failures().count(), 2);
    }

    #[tokio::test]
    async fn failing_join_is_reported() {
        let log = CallLog::new();
        let dispatcher = dispatcher(&[MockDevice::failing(A, &log), MockDevice::new(B, &log)]);

        let report = dispatcher
            .handle(CommandRequest::Join(JoinRequest {
                master: A.into(),
                entities: EntityFilter::All,
            }))
            .await;

        assert_eq!(report.targets.len(), 1);
        assert!(!report.all_succeeded());
    }

    // ───────────────────────────────────────────────────────────────────
    // Observability
    // ───────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn every_action_is_announced_before_it_completes() {
        let log = CallLog::new();
        let emitter = Arc::new(RecordingEmitter::default());
        let dispatcher = Dispatcher::new(
            registry_of(&[MockDevice::new(A, &log), MockDevice::failing(B, &log)]),
            emitter.clone(),
        );

        let report = dispatcher
            .handle(CommandRequest::Preset(PresetRequest {
                entities: ids(&[A, B]),
                preset: 5,
            }))
            .await;

        let events = emitter.0.lock().clone();
        let request_id = report.request_id;
        assert_eq!(
            events,
            [
                DispatchEvent::Resolved {
                    request_id,
                    service: ServiceKind::Preset,
                    targets: vec![A.into(), B.into()],
                },
                DispatchEvent::Invoking {
                    request_id,
                    entity_id: A.into(),
                    action: DeviceAction::Preset,
                    detail: "preset=5".into(),
                },
                DispatchEvent::Completed {
                    request_id,
                    entity_id: A.into(),
                    action: DeviceAction::Preset,
                },
                DispatchEvent::Invoking {
                    request_id,
                    entity_id: B.into(),
                    action: DeviceAction::Preset,
                    detail: "preset=5".into(),
                },
                DispatchEvent::Failed {
                    request_id,
                    entity_id: B.into(),
                    action: DeviceAction::Preset,
                    error: "Transport error: media_player.b unreachable".into(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn missing_master_emits_skip() {
        let log = CallLog::new();
        let emitter = Arc::new(RecordingEmitter::default());
        let dispatcher = Dispatcher::new(registry_of(&[MockDevice::new(A, &log)]), emitter.clone());

        dispatcher
            .handle(CommandRequest::Join(JoinRequest {
                master: B.into(),
                entities: EntityFilter::All,
            }))
            .await;

        let events = emitter.0.lock().clone();
        assert!(matches!(
            events.last(),
            Some(DispatchEvent::Skipped {
                reason: SkipReason::MasterNotFound { .. },
                ..
            })
        ));
    }
}
