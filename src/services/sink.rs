//! One-way handoff of envelopes to the ingestion endpoint.
//!
//! The endpoint does not answer in a way the client can rely on, so delivery
//! is at-most-once: `dispatch` never reports the outcome and a failure only
//! shows up in the log. A durable outbox would slot in behind `Sink`.

use crate::domain::constants::SUBMIT_CONTENT_TYPE;
use crate::domain::models::Envelope;
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{error, info};

pub trait Sink: Send + Sync {
    fn post(&self, body: &str) -> anyhow::Result<()>;

    fn describe(&self) -> String;
}

pub struct HttpSink {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpSink {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }
}

impl Sink for HttpSink {
    /// Status and body of the response are not inspected; only transport
    /// failures count.
    fn post(&self, body: &str) -> anyhow::Result<()> {
        self.client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, SUBMIT_CONTENT_TYPE)
            .body(body.to_string())
            .send()?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Fire-and-forget. The handle yields `()`; joining it only keeps a short-lived
/// process alive until the request has left.
pub fn dispatch(sink: Arc<dyn Sink>, envelope: Envelope) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let response_id = envelope.response_id().to_string();
        let body = match serde_json::to_string(&envelope) {
            Ok(b) => b,
            Err(err) => {
                error!(%response_id, error = %err, "submission failed: envelope not serializable");
                return;
            }
        };
        match sink.post(&body) {
            Ok(()) => info!(%response_id, sink = %sink.describe(), "submission sent"),
            Err(err) => error!(%response_id, sink = %sink.describe(), error = %err, "submission failed"),
        }
    })
}

/// Waits for a dispatched submission. A panicked worker is logged, never raised.
pub fn settle(handle: JoinHandle<()>) {
    if handle.join().is_err() {
        error!("submission failed: worker panicked");
    }
}

#[cfg(test)]
mod tests {
    use super::{dispatch, settle, Sink};
    use crate::domain::models::SurveyMeta;
    use crate::services::envelope::EnvelopeBuilder;
    use crate::services::ids::SecureRandomIds;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recording {
        bodies: Mutex<Vec<String>>,
    }

    impl Sink for Recording {
        fn post(&self, body: &str) -> anyhow::Result<()> {
            self.bodies.lock().unwrap().push(body.to_string());
            Ok(())
        }

        fn describe(&self) -> String {
            "recording".to_string()
        }
    }

    struct Unreachable;

    impl Sink for Unreachable {
        fn post(&self, _body: &str) -> anyhow::Result<()> {
            anyhow::bail!("connection refused")
        }

        fn describe(&self) -> String {
            "unreachable".to_string()
        }
    }

    fn builder() -> EnvelopeBuilder {
        EnvelopeBuilder::new(
            SurveyMeta {
                year: 2026,
                version: "2026.1".to_string(),
            },
            Box::new(SecureRandomIds),
        )
    }

    #[test]
    fn posts_serialized_envelope_once() {
        let sink = Arc::new(Recording::default());
        let env = builder().build(json!({"t2_x_severity": "NA"}));
        let id = env.response_id().to_string();
        dispatch(sink.clone(), env).join().unwrap();

        let bodies = sink.bodies.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        let posted: Value = serde_json::from_str(&bodies[0]).unwrap();
        assert_eq!(posted["response_id"], id.as_str());
        assert_eq!(posted["data"]["t2_x_severity"], "NA");
    }

    #[test]
    fn sink_failure_does_not_propagate() {
        let handle = dispatch(Arc::new(Unreachable), builder().build(json!({})));
        assert!(handle.join().is_ok());
    }

    #[test]
    fn settling_a_panicked_worker_returns_normally() {
        let handle = std::thread::spawn(|| panic!("worker blew up"));
        settle(handle);
    }
}
