//! Numbers derived through arithmetic, collected and averaged.
use crate::collection::{EmptySetError, TriFuzzyNumSet};
use crate::number::{CRISP_ZERO, TriFuzzyNum};

#[test]
fn arithmetic_results_aggregate() {
    let a = TriFuzzyNum::new(1.0, 2.0, 3.0);
    let b = a + TriFuzzyNum::crisp(1.0);
    let c = a * a;
    let d = a - b;

    assert_eq!(b, TriFuzzyNum::new(2.0, 3.0, 4.0));
    assert_eq!(c, TriFuzzyNum::new(1.0, 4.0, 9.0));
    assert_eq!(d, TriFuzzyNum::new(-3.0, -1.0, 1.0));

    // rank order of the derived numbers
    assert!(d < a);
    assert!(a < b);
    assert!(b < c);

    let mut collection = [a, b, c, d].into_iter().collect::<TriFuzzyNumSet>();
    assert_eq!(collection.iter().copied().collect::<Vec<_>>(), vec![d, a, b, c]);

    // componentwise means: (1 + 2 + 1 - 3, 2 + 3 + 4 - 1, 3 + 4 + 9 + 1) / 4
    assert_eq!(collection.arithmetic_mean(), Ok(TriFuzzyNum::new(0.25, 2.0, 4.25)));

    assert!(collection.remove(&b));
    assert_eq!(
        collection.arithmetic_mean(),
        Ok(TriFuzzyNum::new(-1.0 / 3.0, 5.0 / 3.0, 13.0 / 3.0)),
    );

    let mut accumulated = CRISP_ZERO;
    for number in &collection {
        accumulated += *number;
    }
    assert_eq!(accumulated, d + a + c);

    collection.insert(b);
    assert_eq!(collection.len(), 4);
    assert_eq!(b.to_string(), "(2, 3, 4)");
}

#[test]
fn drain_and_refill() {
    let x = TriFuzzyNum::new(0.5, 1.0, 1.5);
    let mut collection = TriFuzzyNumSet::from([x, x]);

    assert!(collection.remove(&x));
    assert!(collection.remove(&x));
    assert!(!collection.remove(&x));
    assert_eq!(collection.arithmetic_mean(), Err(EmptySetError));

    collection.insert(x);
    assert_eq!(collection.arithmetic_mean(), Ok(x));
}
