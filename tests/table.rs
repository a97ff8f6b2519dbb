use carry_digit::{Bounds, DigitError, DigitTable, MAX_SAFE, MIN_SAFE};
use test_log::test;

#[test]
fn month_into_year() {
    let mut table = DigitTable::new();
    let month = table.insert(12, 1, 12).unwrap();
    let year = table.insert(1981, MIN_SAFE, MAX_SAFE).unwrap();
    assert_eq!(table.link(month, year), Ok(None));

    table.set_value(month, 13).unwrap();
    assert_eq!(table.get(month).unwrap().value(), 1);
    assert_eq!(table.get(month).unwrap().carry(), 1);
    assert_eq!(table.get(year).unwrap().value(), 1982);

    table.set_value(month, 0).unwrap();
    assert_eq!(table.get(month).unwrap().value(), 12);
    assert_eq!(table.get(month).unwrap().carry(), -1);
    assert_eq!(table.get(year).unwrap().value(), 1981);
}

#[test]
fn chain_of_nines() {
    let mut table = DigitTable::default();
    let keys: Vec<_> = (0..4).map(|_| table.insert(9, 0, 9).unwrap()).collect();
    for pair in keys.windows(2) {
        table.link(pair[0], pair[1]).unwrap();
    }
    table.increment(keys[0]).unwrap();
    let values: Vec<_> = keys.iter().map(|k| table.get(*k).unwrap().value()).collect();
    assert_eq!(values, [0, 0, 0, 0]);
    assert_eq!(table.get(keys[3]).unwrap().carry(), 1);

    table.decrement(keys[0]).unwrap();
    let values: Vec<_> = keys.iter().map(|k| table.get(*k).unwrap().value()).collect();
    assert_eq!(values, [9, 9, 9, 9]);
}

#[test]
fn initial_carry_is_not_forwarded() {
    let mut table = DigitTable::new();
    let d = table.insert(25, 0, 9).unwrap();
    let digit = table.get(d).unwrap();
    assert_eq!((digit.value(), digit.carry()), (5, 2));
    assert_eq!(digit.range(), 10);
    assert_eq!(digit.neighbor(), None);
}

#[test]
fn removed_neighbour_stops_carry() {
    let mut table = DigitTable::new();
    let lo = table.insert(9, 0, 9).unwrap();
    let hi = table.insert(0, 0, 9).unwrap();
    table.link(lo, hi).unwrap();
    assert!(table.remove(hi).is_some());
    assert!(!table.contains(hi));
    assert_eq!(table.len(), 1);

    table.increment(lo).unwrap();
    assert_eq!(table.get(lo).unwrap().value(), 0);
    assert_eq!(table.get(lo).unwrap().neighbor(), Some(hi));
}

#[test]
fn unknown_keys() {
    let mut table = DigitTable::new();
    let a = table.insert(0, 0, 9).unwrap();
    let b = table.insert(0, 0, 9).unwrap();
    table.remove(b);

    assert_eq!(table.set_value(b, 3), Err(DigitError::UnknownDigit));
    assert_eq!(table.increment(b), Err(DigitError::UnknownDigit));
    assert_eq!(table.link(a, b), Err(DigitError::UnknownDigit));
    assert_eq!(table.link(b, a), Err(DigitError::UnknownDigit));
    assert_eq!(table.unlink(b), Err(DigitError::UnknownDigit));
    assert_eq!(
        table.insert(0, 9, 0),
        Err(DigitError::InvalidBounds { min: 9, max: 0 })
    );
}

#[test]
fn relink_and_unlink() {
    let mut table = DigitTable::new();
    let d = table.insert(9, 0, 9).unwrap();
    let first = table.insert(0, 0, 9).unwrap();
    let second = table.insert(0, 0, 9).unwrap();
    table.link(d, first).unwrap();
    assert_eq!(table.link(d, second), Ok(Some(first)));

    table.increment(d).unwrap();
    assert_eq!(table.get(first).unwrap().value(), 0);
    assert_eq!(table.get(second).unwrap().value(), 1);

    assert_eq!(table.unlink(d), Ok(Some(second)));
    table.set_value(d, 19).unwrap();
    assert_eq!(table.get(second).unwrap().value(), 1);
}

#[test]
fn table_is_send() {
    fn assert_send<T: Send>(_: &T) {}
    let table = DigitTable::new();
    assert_send(&table);
    assert!(table.is_empty());
}

#[test]
fn insert_with_bounds() {
    let mut table = DigitTable::new();
    let d = table.insert_with_bounds(13, Bounds::new(1, 12).unwrap());
    let digit = table.get(d).unwrap();
    assert_eq!((digit.value(), digit.carry()), (1, 1));
    assert_eq!((digit.lower(), digit.upper()), (1, 12));
    assert_eq!(digit.bounds(), Bounds::try_from(1..=12).unwrap());
}

#[test]
fn rollover_at_i64_edges() {
    let mut table = DigitTable::new();
    let top = table.insert(i64::MAX, 0, i64::MAX).unwrap();
    let next = table.insert(0, 0, 9).unwrap();
    table.link(top, next).unwrap();

    table.increment(top).unwrap();
    let digit = table.get(top).unwrap();
    assert_eq!((digit.value(), digit.carry()), (0, 1));
    assert_eq!(table.get(next).unwrap().value(), 1);

    table.set_value(top, i64::MAX).unwrap();
    table.accept_carry(top, i64::MAX).unwrap();
    let digit = table.get(top).unwrap();
    assert_eq!((digit.value(), digit.carry()), (i64::MAX - 1, 1));
    assert_eq!(table.get(next).unwrap().value(), 2);

    let bottom = table.insert(i64::MIN, i64::MIN, 0).unwrap();
    table.decrement(bottom).unwrap();
    let digit = table.get(bottom).unwrap();
    assert_eq!((digit.value(), digit.carry()), (0, -1));
}
