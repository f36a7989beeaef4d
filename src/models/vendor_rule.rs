use rust_decimal::Decimal;

/// Sign constraint a vendor rule may impose on the transaction amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn matches(self, amount: Decimal) -> bool {
        match self {
            Sign::Positive => amount >= Decimal::ZERO,
            Sign::Negative => amount < Decimal::ZERO,
        }
    }
}

/// One entry of the static vendor rule table: a lowercase pattern mapped
/// to a category/subcategory pair, optionally gated on amount sign or on
/// the source-provided subcategory hint.
#[derive(Debug, Clone)]
pub struct VendorRule {
    pub pattern: &'static str,
    pub category: &'static str,
    pub subcategory: &'static str,
    pub sign_constraint: Option<Sign>,
    pub context_hint: Option<&'static str>,
}

impl VendorRule {
    pub const fn new(
        pattern: &'static str,
        category: &'static str,
        subcategory: &'static str,
    ) -> Self {
        Self {
            pattern,
            category,
            subcategory,
            sign_constraint: None,
            context_hint: None,
        }
    }

    /// True when the rule's optional gates allow it to apply.
    pub fn applies(&self, amount: Decimal, hint: Option<&str>) -> bool {
        if let Some(sign) = self.sign_constraint {
            if !sign.matches(amount) {
                return false;
            }
        }
        if let Some(required) = self.context_hint {
            match hint {
                Some(h) if h.contains(required) => {}
                _ => return false,
            }
        }
        true
    }
}
