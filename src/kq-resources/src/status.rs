//! Derived per-kind status classifications.
//!
//! None of these are stored on the object, each is a pure function of the
//! numeric and boolean status fields so they can be matched against the
//! `status` filter of either query generation.

use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use kq_types::app::daemon_set::DaemonSetSpec;
use kq_types::app::deployment::DeploymentSpec;
use kq_types::app::stateful_set::StatefulSetSpec;
use kq_types::batch::cron_job::CronJobSpec;
use kq_types::batch::job::JobSpec;
use kq_types::Object;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedStatus {
    Running,
    Paused,
    Updating,
    Stopped,
    Failed,
    Completed,
}

impl DerivedStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Updating => "updating",
            Self::Stopped => "stopped",
            Self::Failed => "failed",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for DerivedStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn job_status(item: &Object<JobSpec>) -> DerivedStatus {
    if item.status.active > 0 {
        DerivedStatus::Running
    } else if item.status.failed > 0 {
        DerivedStatus::Failed
    } else if item.status.succeeded > 0 {
        DerivedStatus::Completed
    } else {
        DerivedStatus::Failed
    }
}

/// most recent of creation time and every condition probe/transition time
pub fn job_update_time(item: &Object<JobSpec>) -> Option<DateTime<Utc>> {
    let mut update_time = item.metadata.creation_timestamp;
    for condition in &item.status.conditions {
        if condition.last_probe_time > update_time {
            update_time = condition.last_probe_time;
        }
        if condition.last_transition_time > update_time {
            update_time = condition.last_transition_time;
        }
    }
    update_time
}

pub fn cron_job_status(item: &Object<CronJobSpec>) -> DerivedStatus {
    if item.spec.suspend == Some(true) {
        DerivedStatus::Paused
    } else {
        DerivedStatus::Running
    }
}

pub fn deployment_status(item: &Object<DeploymentSpec>) -> DerivedStatus {
    match item.spec.replicas {
        Some(replicas) => {
            if item.status.ready_replicas == 0 && replicas == 0 {
                DerivedStatus::Stopped
            } else if item.status.ready_replicas == replicas {
                DerivedStatus::Running
            } else {
                DerivedStatus::Updating
            }
        }
        None => DerivedStatus::Stopped,
    }
}

/// most recent of creation time and every condition update/transition time
pub fn deployment_update_time(item: &Object<DeploymentSpec>) -> Option<DateTime<Utc>> {
    let mut update_time = item.metadata.creation_timestamp;
    for condition in &item.status.conditions {
        if condition.last_update_time > update_time {
            update_time = condition.last_update_time;
        }
        if condition.last_transition_time > update_time {
            update_time = condition.last_transition_time;
        }
    }
    update_time
}

pub fn daemon_set_status(item: &Object<DaemonSetSpec>) -> DerivedStatus {
    let status = &item.status;
    if status.desired_number_scheduled == 0 && status.number_ready == 0 {
        DerivedStatus::Stopped
    } else if status.desired_number_scheduled == status.number_ready {
        DerivedStatus::Running
    } else {
        DerivedStatus::Updating
    }
}

pub fn stateful_set_status(item: &Object<StatefulSetSpec>) -> DerivedStatus {
    match item.spec.replicas {
        Some(replicas) => {
            if item.status.ready_replicas == 0 && replicas == 0 {
                DerivedStatus::Stopped
            } else if item.status.ready_replicas == replicas {
                DerivedStatus::Running
            } else {
                DerivedStatus::Updating
            }
        }
        None => DerivedStatus::Stopped,
    }
}
