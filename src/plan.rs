//! Payment schedule derivation for the purchase flow.

use chrono::{Months, NaiveDate};
use serde::Serialize;

/// Share of the total price due up front.
pub const DOWN_PAYMENT_RATE: f64 = 0.30;

/// Number of equal monthly installments covering the remainder.
pub const INSTALLMENT_COUNT: u32 = 20;

/// One scheduled cash-flow line.
///
/// `installment_no` 0 is the down payment; 1..=[`INSTALLMENT_COUNT`] are
/// the monthly installments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentPlanItem {
    pub installment_no: u32,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
}

/// Build the fixed purchase schedule for `price`.
///
/// A 30% down payment on `down_payment_date` is followed by 20 equal
/// monthly installments. Dates step by calendar months with end-of-month
/// clamping: a January 31 start puts installment 1 on the last day of
/// February, never on an invalid February 31. The last installment absorbs
/// the rounding residue so the line amounts always sum exactly to `price`.
///
/// A non-positive price produces an all-zero schedule rather than an error.
#[must_use]
pub fn payment_plan(price: f64, down_payment_date: NaiveDate) -> Vec<PaymentPlanItem> {
    let (down_payment, installment) = if price > 0.0 {
        (
            (price * DOWN_PAYMENT_RATE).round(),
            (price * (1.0 - DOWN_PAYMENT_RATE) / f64::from(INSTALLMENT_COUNT)).round(),
        )
    } else {
        (0.0, 0.0)
    };

    let mut items = Vec::with_capacity(INSTALLMENT_COUNT as usize + 1);
    items.push(PaymentPlanItem {
        installment_no: 0,
        date: down_payment_date,
        amount: down_payment,
        description: "Peşinat".to_string(),
    });

    for no in 1..=INSTALLMENT_COUNT {
        let amount = if no == INSTALLMENT_COUNT && price > 0.0 {
            // rounding residue lands on the final line
            price - down_payment - installment * f64::from(INSTALLMENT_COUNT - 1)
        } else {
            installment
        };
        let date = down_payment_date
            .checked_add_months(Months::new(no))
            .unwrap_or(down_payment_date);

        items.push(PaymentPlanItem {
            installment_no: no,
            date,
            amount,
            description: format!("{no}. Taksit"),
        });
    }

    items
}

/// Sum of all scheduled amounts.
#[must_use]
pub fn schedule_total(items: &[PaymentPlanItem]) -> f64 {
    items.iter().map(|item| item.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn schedule_has_21_lines() {
        let items = payment_plan(7_000_000.0, date(2024, 3, 15));
        assert_eq!(items.len(), 21);
        assert_eq!(items[0].installment_no, 0);
        assert_eq!(items[0].description, "Peşinat");
        assert_eq!(items[20].installment_no, 20);
        assert_eq!(items[20].description, "20. Taksit");
    }

    #[test]
    fn amounts_sum_to_price() {
        // prices chosen so both roundings leave a residue
        for price in [7_000_000.0, 1_234_567.0, 999_999.0, 35_001.0] {
            let items = payment_plan(price, date(2024, 1, 15));
            let total = schedule_total(&items);
            assert!(
                (total - price).abs() < 1e-6,
                "schedule for {price} sums to {total}"
            );
        }
    }

    #[test]
    fn down_payment_is_30_percent() {
        let items = payment_plan(1_000_000.0, date(2024, 6, 1));
        assert_eq!(items[0].amount, 300_000.0);
        assert_eq!(items[1].amount, 35_000.0);
    }

    #[test]
    fn dates_step_by_calendar_months() {
        let items = payment_plan(1_000_000.0, date(2024, 3, 15));
        assert_eq!(items[1].date, date(2024, 4, 15));
        assert_eq!(items[12].date, date(2025, 3, 15));
    }

    #[test]
    fn month_end_start_clamps_to_short_months() {
        // 2024 is a leap year: Jan 31 + 1 month = Feb 29
        let items = payment_plan(1_000_000.0, date(2024, 1, 31));
        assert_eq!(items[1].date, date(2024, 2, 29));
        assert_eq!(items[2].date, date(2024, 3, 31));
        assert_eq!(items[3].date, date(2024, 4, 30));

        let items = payment_plan(1_000_000.0, date(2023, 1, 31));
        assert_eq!(items[1].date, date(2023, 2, 28));
    }

    #[test]
    fn non_positive_price_yields_zero_schedule() {
        for price in [0.0, -5.0] {
            let items = payment_plan(price, date(2024, 1, 1));
            assert_eq!(items.len(), 21);
            assert!(items.iter().all(|item| item.amount == 0.0));
        }
    }
}
