use serde::Serialize;

use crate::models::Driver;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriverStats {
    pub total_drivers: usize,
    pub active_drivers: usize,
    pub inactive_drivers: usize,
    pub approved_drivers: usize,
    pub pending_drivers: usize,
}

/// Fleet overview as the home dashboard counts it: a driver is active when
/// their lifecycle `status` string is `"active"`.
pub fn driver_stats(drivers: &[Driver]) -> DriverStats {
    build_stats(drivers, |driver| {
        driver.status.as_deref() == Some("active")
    })
}

/// Variant used by the driver management page, where active means the
/// realtime online flag instead of the lifecycle status. Both are exposed
/// because different screens rely on different semantics.
pub fn driver_stats_enhanced(drivers: &[Driver]) -> DriverStats {
    build_stats(drivers, |driver| driver.is_online)
}

fn build_stats(drivers: &[Driver], is_active: impl Fn(&Driver) -> bool) -> DriverStats {
    let total_drivers = drivers.len();
    let active_drivers = drivers.iter().filter(|d| is_active(d)).count();
    let approved_drivers = drivers.iter().filter(|d| d.is_approved).count();

    DriverStats {
        total_drivers,
        active_drivers,
        inactive_drivers: total_drivers - active_drivers,
        approved_drivers,
        pending_drivers: total_drivers - approved_drivers,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{driver_stats, driver_stats_enhanced};
    use crate::models::Driver;

    fn driver(status: &str, online: bool, approved: bool) -> Driver {
        let doc = json!({
            "status": status,
            "isDriverOnline": online,
            "isApproved": approved,
        });
        Driver::from_document("d".to_string(), doc.as_object().unwrap())
    }

    #[test]
    fn active_plus_inactive_equals_total_in_both_variants() {
        let drivers = vec![
            driver("active", false, true),
            driver("suspended", true, true),
            driver("active", true, false),
        ];

        for stats in [driver_stats(&drivers), driver_stats_enhanced(&drivers)] {
            assert_eq!(stats.total_drivers, 3);
            assert_eq!(stats.active_drivers + stats.inactive_drivers, stats.total_drivers);
            assert_eq!(stats.approved_drivers + stats.pending_drivers, stats.total_drivers);
        }
    }

    #[test]
    fn variants_split_on_different_flags() {
        let drivers = vec![driver("active", false, true), driver("idle", true, true)];

        assert_eq!(driver_stats(&drivers).active_drivers, 1);
        assert_eq!(driver_stats_enhanced(&drivers).active_drivers, 1);

        let offline_but_active_status = vec![driver("active", false, false)];
        assert_eq!(driver_stats(&offline_but_active_status).active_drivers, 1);
        assert_eq!(
            driver_stats_enhanced(&offline_but_active_status).active_drivers,
            0
        );
    }

    #[test]
    fn empty_fleet_is_all_zeroes() {
        let stats = driver_stats(&[]);
        assert_eq!(stats, super::DriverStats::default());
    }
}
