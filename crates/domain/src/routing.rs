use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Which upstream path (forwarders plus their cache) queries currently use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutePath {
    Direct,
    Vpn,
}

impl RoutePath {
    pub fn from_vpn_present(present: bool) -> Self {
        if present {
            RoutePath::Vpn
        } else {
            RoutePath::Direct
        }
    }

    pub fn is_vpn(&self) -> bool {
        matches!(self, RoutePath::Vpn)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePath::Direct => "direct",
            RoutePath::Vpn => "vpn",
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide routing flag.
///
/// Written by the VPN monitor only and read by every packet task. Readers may
/// observe a transition late; a query landing on the previous path is
/// tolerated.
#[derive(Debug)]
pub struct RoutingState {
    vpn_active: AtomicBool,
}

impl RoutingState {
    pub fn new(initial: RoutePath) -> Self {
        Self {
            vpn_active: AtomicBool::new(initial.is_vpn()),
        }
    }

    #[inline]
    pub fn current(&self) -> RoutePath {
        RoutePath::from_vpn_present(self.vpn_active.load(Ordering::Acquire))
    }

    /// Commits `path` and returns the path that was active before.
    pub fn switch_to(&self, path: RoutePath) -> RoutePath {
        RoutePath::from_vpn_present(self.vpn_active.swap(path.is_vpn(), Ordering::AcqRel))
    }
}

impl Default for RoutingState {
    fn default() -> Self {
        Self::new(RoutePath::Direct)
    }
}
