use crate::domain::models::{Envelope, SurveyMeta};
use crate::services::ids::IdGenerator;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

pub struct EnvelopeBuilder {
    meta: SurveyMeta,
    ids: Box<dyn IdGenerator>,
}

impl EnvelopeBuilder {
    pub fn new(meta: SurveyMeta, ids: Box<dyn IdGenerator>) -> Self {
        Self { meta, ids }
    }

    pub fn id_kind(&self) -> &'static str {
        self.ids.kind()
    }

    pub fn build(&self, data: Value) -> Envelope {
        self.build_at(data, Utc::now())
    }

    pub fn build_at(&self, data: Value, now: DateTime<Utc>) -> Envelope {
        Envelope::new(
            now.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.ids.next_id(),
            &self.meta,
            data,
        )
    }
}
