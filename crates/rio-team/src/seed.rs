//! Demonstration roster used by the mock tenant.

use chrono::{DateTime, Days, NaiveTime, Utc};
use rio_core::entities::{TaskStats, TeamMember};
use rio_core::enums::MemberStatus;

/// The three-member demo roster with activity relative to now.
#[must_use]
pub fn seed_members() -> Vec<TeamMember> {
    seed_members_at(Utc::now())
}

/// The demo roster: one admin seen this morning, one manager seen
/// yesterday afternoon, one pending invite that has never signed in.
#[must_use]
pub fn seed_members_at(now: DateTime<Utc>) -> Vec<TeamMember> {
    let today = now.date_naive();
    let seen = |days_ago: u64, hour: u32, minute: u32| {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        today
            .checked_sub_days(Days::new(days_ago))
            .map(|day| day.and_time(time).and_utc())
    };

    vec![
        TeamMember {
            id: "sarah".into(),
            name: "Sarah Johnson".into(),
            email: "sarah.j@acmi.edu".into(),
            role: "compliance-admin".into(),
            department: "compliance".into(),
            status: MemberStatus::Active,
            task_stats: TaskStats {
                completed: 12,
                total: 15,
                overdue: 0,
            },
            last_active_at: seen(0, 9, 24),
            permissions: None,
        },
        TeamMember {
            id: "michael".into(),
            name: "Michael Chen".into(),
            email: "michael.c@acmi.edu".into(),
            role: "manager".into(),
            department: "academic".into(),
            status: MemberStatus::Active,
            task_stats: TaskStats {
                completed: 8,
                total: 12,
                overdue: 1,
            },
            last_active_at: seen(1, 14, 32),
            permissions: None,
        },
        TeamMember {
            id: "david".into(),
            name: "David Wilson".into(),
            email: "david.w@acmi.edu".into(),
            role: "staff".into(),
            department: "administration".into(),
            status: MemberStatus::Pending,
            task_stats: TaskStats {
                completed: 3,
                total: 8,
                overdue: 3,
            },
            last_active_at: None,
            permissions: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn seed_stats_are_consistent() {
        assert!(seed_members().iter().all(|m| m.task_stats.is_consistent()));
    }

    #[test]
    fn activity_is_relative_to_now() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let members = seed_members_at(now);
        assert_eq!(
            members[0].last_active_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 24, 0).unwrap())
        );
        assert_eq!(
            members[1].last_active_at,
            Some(Utc.with_ymd_and_hms(2024, 2, 29, 14, 32, 0).unwrap())
        );
        assert_eq!(members[2].last_active_at, None);
    }
}
