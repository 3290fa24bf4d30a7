//! Both builders agree with the handler family on every index of the domain.

use proptest::prelude::*;
use switchboard::{
    DispatchError, Execute, instantiate, switch_instantiate,
    testing::{Echo, IndexLog, Record},
};

instantiate! {
    fn echo_array() -> usize = Echo[32];
    try fn echo_array_checked() -> usize = Echo[32];
    fn record_array(log: &IndexLog) = Record[32];
}

switch_instantiate! {
    fn echo_switch() -> usize = Echo[32];
    try fn echo_switch_checked() -> usize = Echo[32];
    fn record_switch(log: &IndexLog) = Record[32];
}

#[test]
fn test_record_reaches_each_index_once() {
    let log = IndexLog::new();
    for index in 0..32 {
        record_array(&log, index);
        record_switch(&log, index);
    }

    for index in 0..32 {
        assert_eq!(log.count_of(index), 2, "handler {index} ran the wrong number of times");
    }
    assert_eq!(log.count(), 64);
}

#[test]
fn test_matches_direct_handler_calls() {
    assert_eq!(echo_array(0), <Echo as Execute<0, ()>>::execute(()));
    assert_eq!(echo_switch(17), <Echo as Execute<17, ()>>::execute(()));
    assert_eq!(echo_array(31), <Echo as Execute<31, ()>>::execute(()));
}

proptest! {
    #[test]
    fn prop_builders_agree_in_range(index in 0usize..32) {
        prop_assert_eq!(echo_array(index), index);
        prop_assert_eq!(echo_switch(index), index);
        prop_assert_eq!(echo_array_checked(index), Ok(index));
        prop_assert_eq!(echo_switch_checked(index), Ok(index));
    }

    #[test]
    fn prop_record_logs_exactly_the_dispatched_index(indices in prop::collection::vec(0usize..32, 0..64)) {
        let log = IndexLog::new();
        for &index in &indices {
            record_array(&log, index);
        }
        prop_assert_eq!(log.entries(), indices);
    }

    #[test]
    fn prop_out_of_range_policies(index in 32usize..10_000) {
        let rejected = Err(DispatchError::OutOfRange { index, size: 32 });
        prop_assert_eq!(echo_array_checked(index), rejected);
        prop_assert_eq!(echo_switch_checked(index), rejected);
        prop_assert_eq!(echo_switch(index), 31);
    }
}
