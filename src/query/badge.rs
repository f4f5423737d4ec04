//! Status badges for the presentation layer.
//!
//! The mapping from status to display info is total: every variant has an
//! explicit arm, and a raw code no status decodes to gets the explicit
//! fallback badge instead of an absent lookup.

use crate::model::OrderStatus;

/// Visual weight of a badge. The presentation layer maps tones onto its
/// theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Warning,
    Negative,
    Muted,
}

/// Display info for one order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl StatusBadge {
    /// Badge for a raw code that no recognized status maps to.
    pub const fn fallback() -> Self {
        Self {
            label: "Unknown",
            tone: BadgeTone::Muted,
        }
    }
}

/// Total mapping from status to display info.
pub fn badge_for(status: OrderStatus) -> StatusBadge {
    match status {
        OrderStatus::Processing => StatusBadge {
            label: "Processing",
            tone: BadgeTone::Warning,
        },
        OrderStatus::Available => StatusBadge {
            label: "Available",
            tone: BadgeTone::Positive,
        },
        OrderStatus::NotAvailable => StatusBadge {
            label: "Not Available",
            tone: BadgeTone::Negative,
        },
        OrderStatus::Cancelled => StatusBadge {
            label: "Cancelled",
            tone: BadgeTone::Muted,
        },
        OrderStatus::Shipped => StatusBadge {
            label: "Shipped",
            tone: BadgeTone::Muted,
        },
    }
}

/// Badge for a raw wire code, falling back for unrecognized values.
pub fn badge_for_code(code: u8) -> StatusBadge {
    OrderStatus::from_code(code).map_or(StatusBadge::fallback(), badge_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_badge() {
        for status in OrderStatus::ALL {
            let badge = badge_for(status);
            assert!(!badge.label.is_empty());
            assert_ne!(badge, StatusBadge::fallback());
        }
    }

    #[test]
    fn unrecognized_code_gets_the_fallback_badge() {
        assert_eq!(badge_for_code(0), StatusBadge::fallback());
        assert_eq!(badge_for_code(42), StatusBadge::fallback());
        assert_eq!(badge_for_code(3).label, "Available");
    }
}
