//! Scripted in-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::oneshot;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Transport};

struct Step {
    result: Result<HttpResponse, TransportError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Answers requests with queued results, in the order requests arrive.
#[derive(Default)]
pub(crate) struct StubTransport {
    script: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.push(Ok(HttpResponse::new(status, body)), None);
    }

    pub(crate) fn fail(&self, message: &str) {
        self.push(Err(TransportError::Other(message.to_string())), None);
    }

    /// Queue a response that is held back until the returned sender fires.
    pub(crate) fn respond_later(&self, status: u16, body: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(Ok(HttpResponse::new(status, body)), Some(rx));
        tx
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.to_string())
            .collect()
    }

    /// Yield until at least `n` requests have reached the transport.
    pub(crate) async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }

    fn push(
        &self,
        result: Result<HttpResponse, TransportError>,
        gate: Option<oneshot::Receiver<()>>,
    ) {
        self.script.lock().unwrap().push_back(Step { result, gate });
    }
}

impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let step = {
            self.requests.lock().unwrap().push(request);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .expect("no scripted response left")
        };
        if let Some(gate) = step.gate {
            let _ = gate.await;
        }
        step.result
    }
}

pub(crate) const SHIRT_JSON: &str = r#"{"id":1,"title":"Shirt","image":"u","price":19.99,
    "description":"d","brand":"B","model":"M","color":"red","category":"apparel",
    "discount":null,"popular":true,"onSale":null}"#;

pub(crate) fn list_body(products: &[&str]) -> String {
    format!(
        r#"{{"status":"ok","message":"","products":[{}]}}"#,
        products.join(",")
    )
}

pub(crate) fn detail_body(product: &str) -> String {
    format!(r#"{{"status":"ok","message":"","product":{product}}}"#)
}

/// `SHIRT_JSON` with a different id and title.
pub(crate) fn product_json(id: i64, title: &str) -> String {
    SHIRT_JSON
        .replace(r#""id":1"#, &format!(r#""id":{id}"#))
        .replace(r#""title":"Shirt""#, &format!(r#""title":"{title}""#))
}
