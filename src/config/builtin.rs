//! Built-in parameter rows for the supported tax years.
//!
//! The 2025 row is an exact copy of 2024: its parameters had not been
//! published separately when these rows were compiled.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{TaxBracket, YearParameters};

/// Marginal rates shared by every built-in schedule: 10/14/20/31/35/47 %.
const BRACKET_RATES: [(i64, u32); 6] = [(10, 2), (14, 2), (20, 2), (31, 2), (35, 2), (47, 2)];

/// Flat surtax rate (3%).
const SURTAX_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

fn schedule(upper_limits: [i64; 5]) -> Vec<TaxBracket> {
    let (top_rate, top_scale) = BRACKET_RATES[5];
    upper_limits
        .iter()
        .zip(BRACKET_RATES.iter())
        .map(|(&limit, &(rate, scale))| {
            TaxBracket::bounded(Decimal::from(limit), Decimal::new(rate, scale))
        })
        .chain(std::iter::once(TaxBracket::unbounded(Decimal::new(
            top_rate, top_scale,
        ))))
        .collect()
}

fn row(upper_limits: [i64; 5], surtax_threshold: i64, point_value: i64) -> YearParameters {
    YearParameters {
        brackets: schedule(upper_limits),
        surtax_threshold: Decimal::from(surtax_threshold),
        surtax_rate: SURTAX_RATE,
        credit_point_value_annual: Decimal::from(point_value),
    }
}

/// Returns the built-in year to parameters rows.
pub(super) fn builtin_years() -> BTreeMap<i32, YearParameters> {
    let mut years = BTreeMap::new();
    years.insert(
        2020,
        row([75_960, 108_960, 174_960, 243_120, 505_920], 651_600, 2_628),
    );
    years.insert(
        2021,
        row([75_480, 108_360, 173_880, 241_680, 502_920], 647_640, 2_616),
    );
    years.insert(
        2022,
        row([77_400, 110_880, 178_080, 247_440, 514_920], 663_240, 2_676),
    );
    years.insert(
        2023,
        row([81_480, 116_760, 187_440, 260_520, 542_160], 698_280, 2_820),
    );
    let params_2024 = row([84_120, 120_720, 193_800, 269_280, 560_280], 721_560, 2_904);
    years.insert(2025, params_2024.clone());
    years.insert(2024, params_2024);
    years
}
