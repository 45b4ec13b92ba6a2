//! Tests for bill totals derivation and payment accumulation

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{BillId, Money, PatientId};
use domain_billing::{Bill, BillStatus, BillTotals, ChargeSheet, PaymentMethod};

fn scenario_bill() -> Bill {
    // consultation 500.00, room 1200.00, discount 100.00, tax 50.00
    Bill::new(
        BillId::new("BILL-B"),
        PatientId::new("PAT-1"),
        None,
        None,
        ChargeSheet {
            consultation: Money::new(dec!(500.00)),
            room: Money::new(dec!(1200.00)),
            medicine: Money::zero(),
            lab: Money::zero(),
            other: Money::zero(),
        },
        Money::new(dec!(100.00)),
        Money::new(dec!(50.00)),
        None,
    )
    .unwrap()
}

#[test]
fn test_scenario_full_payment() {
    let mut bill = scenario_bill();
    assert_eq!(bill.totals().subtotal, Money::new(dec!(1700.00)));
    assert_eq!(bill.totals().total_amount, Money::new(dec!(1650.00)));
    assert_eq!(bill.totals().balance, Money::new(dec!(1650.00)));
    assert_eq!(bill.status(), BillStatus::Unpaid);

    bill.apply_payment(Money::new(dec!(1650.00)), PaymentMethod::Cash)
        .unwrap();
    assert_eq!(bill.totals().balance, Money::zero());
    assert_eq!(bill.status(), BillStatus::Paid);
}

#[test]
fn test_scenario_two_partial_payments() {
    let mut bill = scenario_bill();

    bill.apply_payment(Money::new(dec!(800.00)), PaymentMethod::Card)
        .unwrap();
    assert_eq!(bill.totals().balance, Money::new(dec!(850.00)));
    assert_eq!(bill.status(), BillStatus::Partial);

    bill.apply_payment(Money::new(dec!(850.00)), PaymentMethod::Card)
        .unwrap();
    assert_eq!(bill.totals().balance, Money::zero());
    assert_eq!(bill.status(), BillStatus::Paid);
}

#[test]
fn test_all_five_components_enter_the_subtotal() {
    let bill = Bill::new(
        BillId::new("BILL-ALL"),
        PatientId::new("PAT-1"),
        None,
        None,
        ChargeSheet {
            consultation: Money::new(dec!(100.00)),
            room: Money::new(dec!(200.00)),
            medicine: Money::new(dec!(300.00)),
            lab: Money::new(dec!(400.00)),
            other: Money::new(dec!(500.00)),
        },
        Money::zero(),
        Money::zero(),
        None,
    )
    .unwrap();
    assert_eq!(bill.totals().subtotal, Money::new(dec!(1500.00)));
}

#[test]
fn test_negative_discount_and_tax_rejected() {
    for (discount, tax) in [
        (Money::new(dec!(-0.01)), Money::zero()),
        (Money::zero(), Money::new(dec!(-0.01))),
    ] {
        let result = Bill::new(
            BillId::new("BILL-NEG"),
            PatientId::new("PAT-1"),
            None,
            None,
            ChargeSheet::default(),
            discount,
            tax,
            None,
        );
        assert!(result.is_err());
    }
}

#[test]
fn test_zero_total_bill_is_immediately_paid() {
    // balance == 0 means paid, even with nothing ever paid
    let bill = Bill::new(
        BillId::new("BILL-0"),
        PatientId::new("PAT-1"),
        None,
        None,
        ChargeSheet::default(),
        Money::zero(),
        Money::zero(),
        None,
    )
    .unwrap();
    assert_eq!(bill.status(), BillStatus::Paid);
}

fn money_minor() -> impl Strategy<Value = Money> {
    (0i64..10_000_000).prop_map(Money::from_minor)
}

fn charge_sheet() -> impl Strategy<Value = ChargeSheet> {
    (
        money_minor(),
        money_minor(),
        money_minor(),
        money_minor(),
        money_minor(),
    )
        .prop_map(|(consultation, room, medicine, lab, other)| ChargeSheet {
            consultation,
            room,
            medicine,
            lab,
            other,
        })
}

proptest! {
    /// The derivation formulas hold exactly over arbitrary two-decimal inputs.
    #[test]
    fn prop_formulas_hold_exactly(
        charges in charge_sheet(),
        discount in money_minor(),
        tax in money_minor(),
        paid in money_minor(),
    ) {
        let totals = BillTotals::derive(&charges, discount, tax, paid);
        prop_assert_eq!(totals.subtotal, charges.subtotal());
        prop_assert_eq!(totals.total_amount, totals.subtotal - discount + tax);
        prop_assert_eq!(totals.balance, totals.total_amount - paid);
    }

    /// Deriving twice from the same inputs yields identical results.
    #[test]
    fn prop_derivation_idempotent(
        charges in charge_sheet(),
        discount in money_minor(),
        tax in money_minor(),
        paid in money_minor(),
    ) {
        let first = BillTotals::derive(&charges, discount, tax, paid);
        let second = BillTotals::derive(&charges, discount, tax, paid);
        prop_assert_eq!(first, second);
    }

    /// Status partitions cleanly on the balance and amount paid.
    #[test]
    fn prop_status_partition(
        charges in charge_sheet(),
        discount in money_minor(),
        tax in money_minor(),
        paid in money_minor(),
    ) {
        let totals = BillTotals::derive(&charges, discount, tax, paid);
        match totals.status {
            BillStatus::Paid => prop_assert!(
                totals.balance.is_zero()
                    || (totals.balance.is_negative() && paid.is_positive())
            ),
            BillStatus::Partial => {
                prop_assert!(paid.is_positive());
                prop_assert!(totals.balance.is_positive());
            }
            BillStatus::Unpaid => prop_assert!(!paid.is_positive()),
        }
    }

    /// A sequence of payments is equivalent to one payment of their sum.
    #[test]
    fn prop_payments_accumulate(amounts in proptest::collection::vec(1i64..1_000_000, 1..6)) {
        let mut bill = scenario_bill();
        let mut expected = Money::zero();
        for minor in amounts {
            let amount = Money::from_minor(minor);
            expected = expected + amount;
            bill.apply_payment(amount, PaymentMethod::Cash).unwrap();
        }
        prop_assert_eq!(bill.amount_paid(), expected);
        prop_assert_eq!(bill.totals().balance, bill.totals().total_amount - expected);
        prop_assert_eq!(bill.recompute(), *bill.totals());
    }
}
