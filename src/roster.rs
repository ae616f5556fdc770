//! Hard caps on the per-tenant manager and supplier rosters.

use tracing::warn;

/// Maximum number of managers that get a notifier node.
pub const MANAGER_CAP: usize = 5;
/// Maximum number of suppliers that get a notifier node.
pub const SUPPLIER_CAP: usize = 10;

/// Returns the first `cap` entries of `list`, in their original order.
///
/// Names are neither deduplicated nor validated; truncation is silent.
pub fn limit(list: &[String], cap: usize) -> Vec<String> {
    list.iter().take(cap).cloned().collect()
}

/// Rosters after the caps were applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitedRoster {
    pub managers: Vec<String>,
    pub suppliers: Vec<String>,
}

/// Applies the manager and supplier caps independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterLimiter {
    manager_cap: usize,
    supplier_cap: usize,
}

impl Default for RosterLimiter {
    fn default() -> Self {
        Self {
            manager_cap: MANAGER_CAP,
            supplier_cap: SUPPLIER_CAP,
        }
    }
}

impl RosterLimiter {
    /// Callers are expected to keep the caps within `1..=MANAGER_CAP` and
    /// `1..=SUPPLIER_CAP`; values above the hard caps are clamped.
    pub fn new(manager_cap: usize, supplier_cap: usize) -> Self {
        Self {
            manager_cap: manager_cap.min(MANAGER_CAP),
            supplier_cap: supplier_cap.min(SUPPLIER_CAP),
        }
    }

    pub fn manager_cap(&self) -> usize {
        self.manager_cap
    }

    pub fn supplier_cap(&self) -> usize {
        self.supplier_cap
    }

    pub fn apply(&self, managers: &[String], suppliers: &[String]) -> LimitedRoster {
        if managers.len() > self.manager_cap {
            warn!(
                supplied = managers.len(),
                kept = self.manager_cap,
                "manager roster truncated"
            );
        }
        if suppliers.len() > self.supplier_cap {
            warn!(
                supplied = suppliers.len(),
                kept = self.supplier_cap,
                "supplier roster truncated"
            );
        }
        LimitedRoster {
            managers: limit(managers, self.manager_cap),
            suppliers: limit(suppliers, self.supplier_cap),
        }
    }
}
