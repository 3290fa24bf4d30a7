//! Routing exchange messages by type tag, with most types ignoring the
//! operation.

use switchboard::{
    PackIndexer, has_operation, in_place::InPlaceType, instantiate, is_in_place_type,
    optional_family, switch_instantiate,
};

mod common;
use common::{
    Ask, Bid, ExchangeMessageProcessor, Implied, MESSAGE_TYPES, MessageTypes, Outright,
    ProcessMarketMessage, Quote, Reserved, TRADE, Tape, Trade, UPTICK, Uptick,
};

optional_family! {
    /// Message processors by tag; only trades and top-of-book quotes do work.
    pub struct Processors(fn(&mut Tape)) = ProcessMarketMessage for [
        Quote<false, Bid, Outright>,
        Quote<false, Bid, Implied>,
        Quote<false, Ask, Outright>,
        Quote<false, Ask, Implied>,
        Quote<true, Bid, Outright>,
        Quote<true, Bid, Implied>,
        Quote<true, Ask, Outright>,
        Quote<true, Ask, Implied>,
        Trade,
        Reserved,
        Reserved,
        Reserved,
        Uptick,
    ];
}

instantiate! {
    fn process(tape: &mut Tape) = Processors[13];
    try fn try_process(tape: &mut Tape) = Processors[13];
    fn process_by_type(tape: &mut Tape) = PackIndexer<ExchangeMessageProcessor, MessageTypes>[13];
}

switch_instantiate! {
    fn process_switch(tape: &mut Tape) = Processors[13];
    fn process_by_type_switch(tape: &mut Tape) = PackIndexer<ExchangeMessageProcessor, MessageTypes>[13];
}

const FEED: [usize; 10] = [TRADE, 4, 0, TRADE, UPTICK, 9, 7, 3, 1, TRADE];

fn expected() -> Tape {
    Tape {
        trades_seen: 3,
        top_of_book_quotes: 2,
    }
}

#[test]
fn test_family_size_matches_type_list() {
    assert_eq!(Processors::SIZE, MESSAGE_TYPES);
}

#[test]
fn test_array_routing() {
    let mut tape = Tape::default();
    for tag in FEED {
        process(&mut tape, tag);
    }
    assert_eq!(tape, expected());
}

#[test]
fn test_switch_routing() {
    let mut tape = Tape::default();
    for tag in FEED {
        process_switch(&mut tape, tag);
    }
    assert_eq!(tape, expected());
}

#[test]
fn test_per_type_family_routing() {
    let mut array = Tape::default();
    let mut switch = Tape::default();
    for tag in FEED {
        process_by_type(&mut array, tag);
        process_by_type_switch(&mut switch, tag);
    }
    assert_eq!(array, expected());
    assert_eq!(switch, expected());
}

#[test]
fn test_ignored_tags_are_noops() {
    let mut tape = Tape::default();
    for tag in [0, 1, 2, 3, 9, 10, 11, UPTICK] {
        process(&mut tape, tag);
        process_switch(&mut tape, tag);
    }
    assert_eq!(tape, Tape::default());
}

#[test]
fn test_unknown_tag() {
    let mut tape = Tape::default();
    assert!(try_process(&mut tape, MESSAGE_TYPES).is_err());

    // Past the end the branch form lands on the uptick handler.
    process_switch(&mut tape, 200);
    assert_eq!(tape, Tape::default());
}

#[test]
fn test_operation_presence() {
    assert!(has_operation!(ProcessMarketMessage, Trade, (&mut Tape,)));
    assert!(has_operation!(ProcessMarketMessage, Quote<true, Ask, Implied>, (&mut Tape,)));
    assert!(!has_operation!(ProcessMarketMessage, Quote<false, Ask, Implied>, (&mut Tape,)));
    assert!(!has_operation!(ProcessMarketMessage, Uptick, (&mut Tape,)));
}

#[test]
fn test_in_place_tags() {
    assert!(is_in_place_type!(InPlaceType<Trade>));
    assert!(!is_in_place_type!(Trade));
}
