// Property-based tests for the pricing engine
//
// Properties tested:
// 1. extract_tax never loses or invents a cent (subtotal + tax == price)
// 2. extract then add round-trips within one cent
// 3. zero-cost repairs price to all zeros, whatever the discount
// 4. undiscounted inclusive repairs total exactly labor + parts
// 5. the labor/parts breakdown adds up to the reported totals within one cent
// 6. discounts never raise a total
// 7. cart totals are the sum of their parts
// 8. every calculation is idempotent

use proptest::prelude::*;

use servipos_core::cart::calculate_mixed_cart_total;
use servipos_core::line_item::calculate_total;
use servipos_core::money::Money;
use servipos_core::repair::{calculate_repair_total, create_repair_cart_item};
use servipos_core::rounding::ONE_MINOR_UNIT;
use servipos_core::tax::{add_tax, extract_tax};
use servipos_core::types::{
    CalculationInput, ProductLineTotals, RepairCalculationInput, RepairPart, TaxRate,
};

fn cents() -> impl Strategy<Value = i64> {
    0i64..=100_000_000
}

fn rate() -> impl Strategy<Value = TaxRate> {
    (0u32..=10_000).prop_map(TaxRate::from_bps)
}

fn within_one_cent(a: Money, b: Money) -> bool {
    (a - b).abs().to_decimal() <= ONE_MINOR_UNIT
}

proptest! {
    /// Property: inclusive extraction keeps every cent of the price
    #[test]
    fn test_extract_tax_is_exact(price in cents(), rate in rate()) {
        let price = Money::from_cents(price);
        let split = extract_tax(price, rate);

        prop_assert_eq!(split.subtotal + split.tax_amount, price);
        prop_assert!(!split.subtotal.is_negative());
        prop_assert!(!split.tax_amount.is_negative());
    }

    /// Property: adding tax back onto an extracted subtotal lands within a cent
    #[test]
    fn test_extract_then_add_round_trips(price in cents(), rate in rate()) {
        let price = Money::from_cents(price);
        let split = extract_tax(price, rate);
        let gross = add_tax(split.subtotal, rate).gross();

        prop_assert!(
            within_one_cent(gross, price),
            "price={} rate={} gross={}", price, rate, gross
        );
    }

    /// Property: a repair with nothing to charge costs nothing
    #[test]
    fn test_zero_cost_repair_is_all_zero(
        rate in rate(),
        discount in cents(),
        inclusive in any::<bool>()
    ) {
        let input = RepairCalculationInput::new(Money::zero(), Money::zero())
            .with_tax_rate(rate)
            .with_discount_amount(Money::from_cents(discount))
            .with_prices_include_tax(inclusive);
        let result = calculate_repair_total(&input);

        prop_assert_eq!(result.total, Money::zero());
        prop_assert_eq!(result.discount_amount, Money::zero());
        prop_assert_eq!(result.breakdown.subtotal(), Money::zero());
    }

    /// Property: without discount, an inclusive repair charges its sticker price
    #[test]
    fn test_inclusive_repair_total_is_sticker_price(
        labor in cents(),
        parts in cents(),
        rate in rate()
    ) {
        let input = RepairCalculationInput::new(Money::from_cents(labor), Money::from_cents(parts))
            .with_tax_rate(rate);
        let result = calculate_repair_total(&input);

        prop_assert_eq!(result.total, Money::from_cents(labor + parts));
    }

    /// Property: the breakdown agrees with the reported amounts
    #[test]
    fn test_breakdown_additivity(
        labor in cents(),
        parts in cents(),
        rate in rate(),
        discount_bps in proptest::option::of(0u32..=10_000),
        inclusive in any::<bool>()
    ) {
        let mut input =
            RepairCalculationInput::new(Money::from_cents(labor), Money::from_cents(parts))
                .with_tax_rate(rate)
                .with_prices_include_tax(inclusive);
        input.discount_percentage_bps = discount_bps;
        let result = calculate_repair_total(&input);

        prop_assert!(within_one_cent(result.breakdown.subtotal(), result.subtotal));
        prop_assert!(within_one_cent(result.breakdown.tax(), result.tax_amount));
        prop_assert!(within_one_cent(result.subtotal + result.tax_amount, result.total));
    }

    /// Property: a discount never makes a repair more expensive
    #[test]
    fn test_discount_never_raises_total(
        labor in cents(),
        parts in cents(),
        rate in rate(),
        discount_bps in 0u32..=10_000
    ) {
        let base = RepairCalculationInput::new(Money::from_cents(labor), Money::from_cents(parts))
            .with_tax_rate(rate);
        let discounted = base.clone().with_discount_percentage(discount_bps);

        let full = calculate_repair_total(&base);
        let reduced = calculate_repair_total(&discounted);

        prop_assert!(reduced.total <= full.total);
        prop_assert!(!reduced.total.is_negative());
    }

    /// Property: line totals are net + tax and never negative
    #[test]
    fn test_line_total_composition(
        subtotal in cents(),
        rate in rate(),
        discount in cents()
    ) {
        let input = CalculationInput::new(Money::from_cents(subtotal))
            .with_tax_rate(rate)
            .with_discount_amount(Money::from_cents(discount));
        let result = calculate_total(&input);

        prop_assert_eq!(result.total, result.net_subtotal() + result.tax_amount);
        prop_assert!(!result.net_subtotal().is_negative());
    }

    /// Property: the cart total is exactly subtotal + tax
    #[test]
    fn test_cart_total_is_sum(
        products in proptest::collection::vec((cents(), cents()), 0..5),
        labor in cents(),
        part_cost in cents(),
        quantity in 1i64..=5,
        rate in rate()
    ) {
        let product_lines: Vec<ProductLineTotals> = products
            .iter()
            .map(|&(subtotal, tax)| ProductLineTotals {
                subtotal: Money::from_cents(subtotal),
                tax_amount: Money::from_cents(tax),
            })
            .collect();
        let repair = create_repair_cart_item(
            "repair-1",
            Money::from_cents(labor),
            &[RepairPart::new(Money::from_cents(part_cost), quantity)],
            rate,
            None,
            None,
            None,
        );

        let first = calculate_mixed_cart_total(&product_lines, std::slice::from_ref(&repair));
        let second = calculate_mixed_cart_total(&product_lines, std::slice::from_ref(&repair));

        prop_assert_eq!(first.total, first.subtotal + first.total_tax);
        prop_assert_eq!(first, second);
    }
}
