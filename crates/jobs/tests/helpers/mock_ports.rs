#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use xdns_application::ports::{InterfaceProbe, NetworkRestarter, ResponseCachePort};
use xdns_domain::DomainError;

#[derive(Clone, Default)]
pub struct MockInterfaceProbe {
    present: Arc<AtomicBool>,
    probes: Arc<AtomicUsize>,
}

impl MockInterfaceProbe {
    pub fn new(present: bool) -> Self {
        let probe = Self::default();
        probe.set_present(present);
        probe
    }

    pub fn set_present(&self, present: bool) {
        self.present.store(present, Ordering::SeqCst);
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

impl InterfaceProbe for MockInterfaceProbe {
    fn is_present(&self, _interface: &str) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.present.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Default)]
pub struct MockNetworkRestarter {
    calls: Arc<Mutex<Vec<Duration>>>,
}

impl MockNetworkRestarter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeouts(&self) -> Vec<Duration> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NetworkRestarter for MockNetworkRestarter {
    async fn restart(&self, timeout: Duration) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(timeout);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockResponseCache {
    size: Arc<AtomicUsize>,
    clears: Arc<AtomicUsize>,
}

impl MockResponseCache {
    pub fn with_size(size: usize) -> Self {
        let cache = Self::default();
        cache.size.store(size, Ordering::SeqCst);
        cache
    }

    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl ResponseCachePort for MockResponseCache {
    fn cache_size(&self) -> usize {
        self.size.load(Ordering::SeqCst)
    }

    fn clear_all(&self) {
        self.size.store(0, Ordering::SeqCst);
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}
