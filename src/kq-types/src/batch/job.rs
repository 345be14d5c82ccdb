use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::{Kind, KindNames, LabelSelector, Spec, Status};

const JOB_API: Kind = Kind {
    group: "batch",
    version: "v1",
    names: KindNames {
        kind: "Job",
        plural: "jobs",
        singular: "job",
    },
};

impl Spec for JobSpec {
    type Status = JobStatus;

    fn metadata() -> &'static Kind {
        &JOB_API
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSpec {
    pub backoff_limit: Option<i32>,
    pub completions: Option<i32>,
    pub parallelism: Option<i32>,
    pub suspend: Option<bool>,
    pub selector: Option<LabelSelector>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct JobStatus {
    pub active: i32,
    pub failed: i32,
    pub succeeded: i32,
    pub start_time: Option<DateTime<Utc>>,
    pub completion_time: Option<DateTime<Utc>>,
    pub conditions: Vec<JobCondition>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct JobCondition {
    pub last_probe_time: Option<DateTime<Utc>>,
    pub last_transition_time: Option<DateTime<Utc>>,
    pub message: String,
    pub reason: String,
    pub status: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Status for JobStatus {}
