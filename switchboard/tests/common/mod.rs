#![allow(dead_code)]

use std::marker::PhantomData;
use switchboard::{BoxError, Execute, TypeHandler, detect::Operation};

// ============================================================================
// Index Families
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub a: u32,
    pub b: u32,
}

/// Index 3 bumps `a`, index 5 bumps `b`, every other index does nothing.
pub struct Tally;

impl<const I: usize> Execute<I, (&mut Counters,)> for Tally {
    type Output = ();

    fn execute((counters,): (&mut Counters,)) {
        match I {
            3 => counters.a += 1,
            5 => counters.b += 1,
            _ => {}
        }
    }
}

/// Handler `I` maps `x` to `10 * I + x`.
pub struct Affine;

impl<const I: usize> Execute<I, (u64,)> for Affine {
    type Output = u64;

    fn execute((x,): (u64,)) -> u64 {
        10 * I as u64 + x
    }
}

/// A two-argument family, written per index.
pub struct Label;

impl Execute<0, (&str, usize)> for Label {
    type Output = String;

    fn execute((prefix, n): (&str, usize)) -> String {
        format!("{prefix}:zero:{n}")
    }
}

impl Execute<1, (&str, usize)> for Label {
    type Output = String;

    fn execute((prefix, n): (&str, usize)) -> String {
        format!("{prefix}:one:{n}")
    }
}

impl Execute<2, (&str, usize)> for Label {
    type Output = String;

    fn execute((prefix, n): (&str, usize)) -> String {
        format!("{prefix}:two:{n}")
    }
}

/// Fallible decoders: 0 reads decimal, 1 reads hex, 2 is reserved and always
/// fails.
pub struct Decode;

impl Execute<0, (&str,)> for Decode {
    type Output = Result<u32, BoxError>;

    fn execute((text,): (&str,)) -> Result<u32, BoxError> {
        Ok(text.parse()?)
    }
}

impl Execute<1, (&str,)> for Decode {
    type Output = Result<u32, BoxError>;

    fn execute((text,): (&str,)) -> Result<u32, BoxError> {
        Ok(u32::from_str_radix(text, 16)?)
    }
}

impl Execute<2, (&str,)> for Decode {
    type Output = Result<u32, BoxError>;

    fn execute((text,): (&str,)) -> Result<u32, BoxError> {
        Err(format!("encoding 2 is reserved (input {text:?})").into())
    }
}

// ============================================================================
// Market Messages
// ============================================================================

pub struct Bid;
pub struct Ask;
pub struct Outright;
pub struct Implied;

pub struct Quote<const TOP_OF_BOOK: bool, Side, Liquidity>(PhantomData<(Side, Liquidity)>);

pub struct Trade;
pub struct Uptick;
/// Unassigned message type slot.
pub struct Reserved;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tape {
    pub trades_seen: u32,
    pub top_of_book_quotes: u32,
}

/// Processes trades and top-of-book quotes; defined for nothing else.
pub struct ProcessMarketMessage;

impl<'a> Operation<Trade, (&'a mut Tape,)> for ProcessMarketMessage {
    type Output = ();

    fn call((tape,): (&'a mut Tape,)) {
        tape.trades_seen += 1;
    }
}

impl<'a, Side, Liquidity> Operation<Quote<true, Side, Liquidity>, (&'a mut Tape,)>
    for ProcessMarketMessage
{
    type Output = ();

    fn call((tape,): (&'a mut Tape,)) {
        tape.top_of_book_quotes += 1;
    }
}

/// The same processing written as a per-type family, with the no-op default
/// living on the message trait.
pub trait MarketMessage {
    fn process(_tape: &mut Tape) {}
}

impl<const TOP_OF_BOOK: bool, Side, Liquidity> MarketMessage for Quote<TOP_OF_BOOK, Side, Liquidity> {
    fn process(tape: &mut Tape) {
        if TOP_OF_BOOK {
            tape.top_of_book_quotes += 1;
        }
    }
}

impl MarketMessage for Trade {
    fn process(tape: &mut Tape) {
        tape.trades_seen += 1;
    }
}

impl MarketMessage for Uptick {}
impl MarketMessage for Reserved {}

pub struct ExchangeMessageProcessor;

impl<'a, M: MarketMessage> TypeHandler<M, (&'a mut Tape,)> for ExchangeMessageProcessor {
    type Output = ();

    fn execute((tape,): (&'a mut Tape,)) {
        M::process(tape);
    }
}

pub type MessageTypes = switchboard::type_list![
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

pub const TRADE: usize = 8;
pub const UPTICK: usize = 12;
pub const MESSAGE_TYPES: usize = 13;
