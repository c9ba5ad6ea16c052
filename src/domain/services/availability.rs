use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use crate::domain::models::slot::Slot;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DateStatus {
    NoSlots,
    Full,
    Partial,
    Available,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DateAvailability {
    pub date: NaiveDate,
    pub status: DateStatus,
    pub bookable_slots: usize,
    pub total_slots: usize,
}

/// Customer view keeps only slots with the flag set and capacity left.
/// Date scoping (including past dates) is the caller's job.
pub fn filter_slots(slots: Vec<Slot>, available_only: bool) -> Vec<Slot> {
    if !available_only {
        return slots;
    }
    slots.into_iter().filter(Slot::has_capacity).collect()
}

pub fn date_status(slots: &[Slot]) -> DateStatus {
    if slots.is_empty() {
        return DateStatus::NoSlots;
    }
    let open = slots.iter().filter(|s| s.has_capacity()).count();
    if open == 0 {
        DateStatus::Full
    } else if open == slots.len() {
        DateStatus::Available
    } else {
        DateStatus::Partial
    }
}

/// One entry per date in `start..=end`, including dates with no slots.
pub fn summarize_by_date(slots: &[Slot], start: NaiveDate, end: NaiveDate) -> Vec<DateAvailability> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Slot>> = BTreeMap::new();
    for slot in slots {
        by_date.entry(slot.date).or_default().push(slot.clone());
    }

    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|date| {
            let day = by_date.remove(&date).unwrap_or_default();
            DateAvailability {
                date,
                status: date_status(&day),
                bookable_slots: day.iter().filter(|s| s.has_capacity()).count(),
                total_slots: day.len(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::slot::NewSlotParams;
    use chrono::NaiveTime;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 3, d).unwrap()
    }

    fn slot(day: u32, hour: u32, max: i32, current: i32, available: bool) -> Slot {
        let mut s = Slot::new(NewSlotParams {
            date: date(day),
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
            is_available: available,
            max_bookings: max,
            notes: None,
        });
        s.current_bookings = current;
        s
    }

    #[test]
    fn test_available_only_drops_full_and_disabled() {
        let slots = vec![
            slot(4, 9, 2, 2, true),
            slot(4, 10, 1, 0, false),
            slot(4, 11, 2, 1, true),
        ];

        let all = filter_slots(slots.clone(), false);
        assert_eq!(all.len(), 3);

        let open = filter_slots(slots, true);
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].start_time, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert!(open.iter().all(|s| s.is_available && s.current_bookings < s.max_bookings));
    }

    #[test]
    fn test_date_status_rules() {
        assert_eq!(date_status(&[]), DateStatus::NoSlots);
        assert_eq!(date_status(&[slot(4, 9, 1, 1, true)]), DateStatus::Full);
        assert_eq!(
            date_status(&[slot(4, 9, 2, 2, true), slot(4, 10, 1, 0, true)]),
            DateStatus::Partial
        );
        assert_eq!(
            date_status(&[slot(4, 9, 2, 1, true), slot(4, 10, 1, 0, true)]),
            DateStatus::Available
        );
    }

    #[test]
    fn test_all_disabled_is_full_not_no_slots() {
        let day = [slot(4, 9, 3, 0, false), slot(4, 10, 3, 0, false)];
        assert_eq!(date_status(&day), DateStatus::Full);
    }

    #[test]
    fn test_summary_covers_every_date() {
        let slots = vec![slot(4, 9, 1, 1, true), slot(6, 9, 1, 0, true)];
        let summary = summarize_by_date(&slots, date(4), date(6));

        let statuses: Vec<_> = summary.iter().map(|d| d.status).collect();
        assert_eq!(statuses, vec![DateStatus::Full, DateStatus::NoSlots, DateStatus::Available]);
        assert_eq!(summary[2].bookable_slots, 1);
        assert_eq!(summary[1].total_slots, 0);
    }
}
