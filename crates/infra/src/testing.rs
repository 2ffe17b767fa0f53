//! Recording transport for service-level tests

use mnubo_domain::Result;
use parking_lot::Mutex;
use serde_json::Value;

use crate::api::{BodyEncoding, Transport};

/// Canned response returned for every call
pub(crate) const SUCCESS: &str = "SUCCESS";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RecordedCall {
    Get { route: String, params: Vec<(String, String)> },
    Post { route: String, body: Option<Value> },
    Put { route: String, body: Value, encoding: BodyEncoding },
    Delete { route: String },
}

/// Transport double that records each call and answers [`SUCCESS`]
#[derive(Default)]
pub(crate) struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub(crate) fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().last().cloned()
    }

    fn record(&self, call: RecordedCall) -> Result<&'static str> {
        self.calls.lock().push(call);
        Ok(SUCCESS)
    }
}

impl Transport for RecordingTransport {
    type Response = &'static str;

    fn get(&self, route: &str, params: &[(&str, &str)]) -> Result<Self::Response> {
        let params = params.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        self.record(RecordedCall::Get { route: route.to_string(), params })
    }

    fn post(&self, route: &str, body: Option<&Value>) -> Result<Self::Response> {
        self.record(RecordedCall::Post { route: route.to_string(), body: body.cloned() })
    }

    fn put(&self, route: &str, body: &Value, encoding: BodyEncoding) -> Result<Self::Response> {
        self.record(RecordedCall::Put { route: route.to_string(), body: body.clone(), encoding })
    }

    fn delete(&self, route: &str) -> Result<Self::Response> {
        self.record(RecordedCall::Delete { route: route.to_string() })
    }
}
