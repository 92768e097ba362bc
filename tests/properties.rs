//! Property tests for ledger invariants.
//!
//! Random request sequences are replayed against a fresh processor and the
//! resulting state is checked for:
//! - non-negative balances that only ever go down
//! - pairwise disjoint history records
//! - untouched state after every rejection
//! - day counts and debits that match the requested span

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use leave_engine::models::DateRange;
use leave_engine::processor::{LeaveRequest, RequestProcessor};

const CATEGORIES: [&str; 4] = ["casual", "floater", "sick", "vacation"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// (category index, start offset, signed length) where a negative length
/// produces a reversed range.
fn request_strategy() -> impl Strategy<Value = (usize, u64, i64)> {
    (0..CATEGORIES.len(), 0u64..60, -3i64..12)
}

fn to_request(category: usize, offset: u64, length: i64) -> LeaveRequest {
    let start = base_date() + Days::new(offset);
    let end = if length >= 0 {
        start + Days::new(length as u64)
    } else {
        start - Days::new(length.unsigned_abs())
    };
    LeaveRequest::new(
        "alice",
        CATEGORIES[category],
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    )
}

proptest! {
    #[test]
    fn ledger_invariants_hold(requests in prop::collection::vec(request_strategy(), 1..40)) {
        let processor = RequestProcessor::default();
        processor.register_employee("alice").unwrap();

        for (category, offset, length) in requests {
            let request = to_request(category, offset, length);
            let balances_before = processor.get_leave_balance("alice").unwrap();
            let history_before = processor.get_leave_history("alice").unwrap();

            match processor.apply_leave(&request) {
                Ok(approval) => {
                    let start = NaiveDate::parse_from_str(&request.start, "%Y-%m-%d").unwrap();
                    let end = NaiveDate::parse_from_str(&request.end, "%Y-%m-%d").unwrap();
                    let expected_days = (end - start).num_days() as u32 + 1;
                    prop_assert_eq!(approval.record.days(), expected_days);

                    let balances_after = processor.get_leave_balance("alice").unwrap();
                    prop_assert_eq!(
                        balances_after[request.leave_type.as_str()] + expected_days,
                        balances_before[request.leave_type.as_str()]
                    );
                    let history_after = processor.get_leave_history("alice").unwrap();
                    prop_assert_eq!(history_after.len(), history_before.len() + 1);
                }
                Err(_) => {
                    prop_assert_eq!(processor.get_leave_balance("alice").unwrap(), balances_before.clone());
                    prop_assert_eq!(processor.get_leave_history("alice").unwrap(), history_before);
                }
            }

            for (category, after) in processor.get_leave_balance("alice").unwrap() {
                prop_assert!(after <= balances_before[&category]);
            }
        }

        let history = processor.get_leave_history("alice").unwrap();
        let ranges: Vec<DateRange> = history
            .iter()
            .map(|r| DateRange::new(r.start(), r.end()).unwrap())
            .collect();
        for (i, a) in ranges.iter().enumerate() {
            for b in &ranges[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn day_count_matches_days(offset in 0u64..2000, length in 0u64..400) {
        let start = base_date() + Days::new(offset);
        let range = DateRange::new(start, start + Days::new(length)).unwrap();
        prop_assert_eq!(range.day_count() as u64, length + 1);
        prop_assert_eq!(range.days().count() as u64, length + 1);
        prop_assert_eq!(range.days().last(), Some(range.end()));
    }
}
