use rust_decimal::Decimal;

/// One marginal tax bracket; `max` of `None` means unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxBracket {
    pub min: Decimal,
    pub max: Option<Decimal>,
    pub rate: Decimal,
}

/// What one bracket contributed to the total.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketTax {
    pub min: Decimal,
    pub max: Option<Decimal>,
    pub rate: Decimal,
    pub income_in_bracket: Decimal,
    pub tax_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxAssessment {
    pub annual_income: Decimal,
    pub total_tax: Decimal,
    pub effective_rate: Decimal,
    pub bracket_breakdown: Vec<BracketTax>,
}

/// 2023 US federal brackets, single filer.
pub fn default_us_brackets() -> Vec<TaxBracket> {
    // Rate given in hundredths: 10 → 0.10.
    let bracket = |min: i64, max: Option<i64>, rate: i64| TaxBracket {
        min: Decimal::from(min),
        max: max.map(Decimal::from),
        rate: Decimal::new(rate, 2),
    };
    vec![
        bracket(0, Some(11_000), 10),
        bracket(11_000, Some(44_725), 12),
        bracket(44_725, Some(95_375), 22),
        bracket(95_375, Some(182_100), 24),
        bracket(182_100, Some(231_250), 32),
        bracket(231_250, Some(578_125), 35),
        bracket(578_125, None, 37),
    ]
}

/// Walk the brackets in ascending `min` order, taxing the portion of
/// income falling inside each span, and stop once income is exhausted.
/// Brackets that taxed nothing stay out of the breakdown.
pub fn compute_tax(annual_income: Decimal, brackets: &[TaxBracket]) -> TaxAssessment {
    let mut sorted: Vec<&TaxBracket> = brackets.iter().collect();
    sorted.sort_by(|a, b| a.min.cmp(&b.min));

    let mut total_tax = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for bracket in sorted {
        if annual_income <= bracket.min {
            break;
        }
        let upper = match bracket.max {
            Some(max) if annual_income > max => max,
            _ => annual_income,
        };
        let income_in_bracket = upper - bracket.min;
        if income_in_bracket <= Decimal::ZERO {
            continue;
        }
        let tax_amount = income_in_bracket * bracket.rate;
        total_tax += tax_amount;
        breakdown.push(BracketTax {
            min: bracket.min,
            max: bracket.max,
            rate: bracket.rate,
            income_in_bracket,
            tax_amount,
        });
    }

    let effective_rate = if annual_income > Decimal::ZERO {
        total_tax / annual_income * Decimal::from(100)
    } else {
        Decimal::ZERO
    };

    TaxAssessment {
        annual_income,
        total_tax,
        effective_rate,
        bracket_breakdown: breakdown,
    }
}

#[cfg(test)]
#[path = "tax_tests.rs"]
mod tests;
