use async_trait::async_trait;
use dental_registry::biometric::{BiometricScanner, CaptureOutcome};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scanner that replays queued outcomes after a fixed delay.
///
/// Once the script runs out every capture fails.
#[allow(dead_code)]
#[derive(Clone)]
pub struct ScriptedScanner {
    outcomes: Arc<Mutex<VecDeque<CaptureOutcome>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    delay: Duration,
}

#[allow(dead_code)]
impl ScriptedScanner {
    pub fn new(delay: Duration) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            delay,
        }
    }

    pub fn push_success(&self, token: &str) {
        self.outcomes.lock().unwrap().push_back(CaptureOutcome::Succeeded {
            token: token.to_string(),
        });
    }

    pub fn push_failure(&self, reason: &str) {
        self.outcomes.lock().unwrap().push_back(CaptureOutcome::Failed {
            reason: reason.to_string(),
        });
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    async fn next_outcome(&self) -> CaptureOutcome {
        tokio::time::sleep(self.delay).await;
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(CaptureOutcome::Failed {
                reason: "script exhausted".to_string(),
            })
    }
}

#[async_trait]
impl BiometricScanner for ScriptedScanner {
    async fn is_available(&self) -> bool {
        true
    }

    async fn capture_fingerprint(&self) -> CaptureOutcome {
        self.track_call("capture_fingerprint");
        self.next_outcome().await
    }

    async fn capture_face(&self) -> CaptureOutcome {
        self.track_call("capture_face");
        self.next_outcome().await
    }

    async fn verify(&self, stored: &str, current: &str) -> bool {
        self.track_call("verify");
        stored == current
    }
}

/// Scanner whose driver crashes for the first `faults` captures, then succeeds.
#[allow(dead_code)]
#[derive(Clone)]
pub struct PanickingScanner {
    faults: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl PanickingScanner {
    pub fn new(faults: usize) -> Self {
        Self {
            faults: Arc::new(Mutex::new(faults)),
        }
    }

    fn next_outcome(&self, kind: &str) -> CaptureOutcome {
        {
            let mut faults = self.faults.lock().unwrap();
            if *faults > 0 {
                *faults -= 1;
                drop(faults);
                panic!("sensor fault");
            }
        }
        CaptureOutcome::Succeeded {
            token: format!("{}_hash_recovered", kind),
        }
    }
}

#[async_trait]
impl BiometricScanner for PanickingScanner {
    async fn is_available(&self) -> bool {
        true
    }

    async fn capture_fingerprint(&self) -> CaptureOutcome {
        self.next_outcome("fingerprint")
    }

    async fn capture_face(&self) -> CaptureOutcome {
        self.next_outcome("face")
    }

    async fn verify(&self, _stored: &str, _current: &str) -> bool {
        false
    }
}
