use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::{Kind, KindNames, Spec, Status};

const CRON_JOB_API: Kind = Kind {
    group: "batch",
    version: "v1beta1",
    names: KindNames {
        kind: "CronJob",
        plural: "cronjobs",
        singular: "cronjob",
    },
};

impl Spec for CronJobSpec {
    type Status = CronJobStatus;

    fn metadata() -> &'static Kind {
        &CRON_JOB_API
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CronJobSpec {
    pub schedule: String,
    pub suspend: Option<bool>,
    pub concurrency_policy: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CronJobStatus {
    pub active: i32,
    pub last_schedule_time: Option<DateTime<Utc>>,
}

impl Status for CronJobStatus {}
