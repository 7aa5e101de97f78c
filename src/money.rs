use rust_decimal::{Decimal, RoundingStrategy};

/// How monetary values are rendered for display. Arithmetic never goes
/// through this; it only turns a `Decimal` into a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl CurrencyFormat {
    pub fn brl() -> Self {
        Self {
            symbol: "R$".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }

    pub fn usd() -> Self {
        Self {
            symbol: "$".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }

    pub fn format_value(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let abs = rounded.abs();
        // whole part and cents taken apart so nothing is scaled up
        let units = integral(abs.trunc()).to_string();
        let cents = integral((abs.fract() * Decimal::ONE_HUNDRED).trunc());

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(digit);
        }

        format!(
            "{}{} {}{}{:02}",
            if negative { "-" } else { "" },
            self.symbol,
            grouped,
            self.decimal_separator,
            cents
        )
    }
}

fn integral(d: Decimal) -> i128 {
    d.mantissa() / 10i128.pow(d.scale())
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

#[cfg(test)]
mod money_tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn formats_brl() {
        let f = CurrencyFormat::brl();
        assert_eq!(f.format_value(d("24.5")), "R$ 24,50");
        assert_eq!(f.format_value(Decimal::ZERO), "R$ 0,00");
        assert_eq!(f.format_value(d("1234.5")), "R$ 1.234,50");
        assert_eq!(f.format_value(d("1234567.89")), "R$ 1.234.567,89");
    }

    #[test]
    fn formats_usd() {
        let f = CurrencyFormat::usd();
        assert_eq!(f.format_value(d("19.9")), "$ 19.90");
        assert_eq!(f.format_value(d("999.999")), "$ 1,000.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let f = CurrencyFormat::usd();
        assert_eq!(f.format_value(d("0.005")), "$ 0.01");
        assert_eq!(f.format_value(d("0.004")), "$ 0.00");
        assert_eq!(f.format_value(d("-2.345")), "-$ 2.35");
    }

    #[test]
    fn huge_amounts_format_without_overflow() {
        let f = CurrencyFormat::brl();
        assert_eq!(
            f.format_value(d("1000000000000000000000000000")),
            "R$ 1.000.000.000.000.000.000.000.000.000,00"
        );
        assert_eq!(
            f.format_value(Decimal::MAX),
            "R$ 79.228.162.514.264.337.593.543.950.335,00"
        );
        assert_eq!(
            f.format_value(Decimal::MIN),
            "-R$ 79.228.162.514.264.337.593.543.950.335,00"
        );
    }
}
