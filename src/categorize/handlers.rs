//! Handlers keyed on the source statement's own subcategory label.
//! Each runs its ordered sub-rules and falls through (`None`) when it
//! has no opinion, except where a handler defines its own default.

use super::{internal_transfer, rules, Classification, Classifier, MatchContext};

/// "Counter Credit": money paid in over the counter. Known income
/// sources first, then transfer vocabulary, then generic business or
/// salary markers; anything else is income of unknown shape.
pub(super) fn counter_credit(ctx: &MatchContext) -> Option<Classification> {
    let d = &ctx.desc;
    if d.contains("ramco") || d.contains("jn desai limited") {
        return Some(Classification::of("Income", "Business Income"));
    }
    if d.contains("astrenska") {
        return Some(Classification::of("Income", "Insurance Payout"));
    }
    if d.contains("tax") || d.contains("instant saver") || d.contains("instant access") {
        return Some(internal_transfer());
    }
    if rules::COUNTER_CREDIT_TRANSFER_TERMS
        .iter()
        .any(|k| d.contains(k))
    {
        return Some(internal_transfer());
    }
    if d.contains("limited") || d.contains("ltd") || d.contains("llc") {
        return Some(Classification::of("Income", "Business Income"));
    }
    if d.contains("salary") || d.contains("wage") || d.contains("payroll") {
        return Some(Classification::of("Income", "Salary/Wages"));
    }
    Some(Classification::of("Income", "Other Income"))
}

/// "Direct Debit": recurring bills. A fixed list of known payees is
/// checked first, then the whole vendor table by substring, and the
/// generic direct-debit bill is the default.
pub(super) fn direct_debit(
    classifier: &Classifier,
    ctx: &MatchContext,
) -> Option<Classification> {
    let d = &ctx.desc;
    if d.contains("bupa") {
        return Some(Classification::of("Healthcare", "Health Insurance"));
    }
    if d.contains("american express") || d.contains("amex") {
        return Some(Classification::of("Bills & Payments", "Credit Card"));
    }
    if d.contains("eyecare") {
        return Some(Classification::of("Healthcare", "Vision"));
    }
    if d.contains("aig life") || d.contains("royal london") {
        return Some(Classification::of("Insurance", "Life Insurance"));
    }
    if d.contains("clubwise") {
        return Some(Classification::of("Healthcare", "Fitness"));
    }
    if d.contains("etika") {
        return Some(Classification::of("Entertainment", "Subscription Services"));
    }
    for rule in &classifier.rules {
        if rule.rule.applies(ctx.amount, ctx.hint.as_deref()) && d.contains(rule.rule.pattern) {
            return Some(Classification::of(rule.rule.category, rule.rule.subcategory));
        }
    }
    Some(Classification::of("Bills & Payments", "Direct Debit"))
}

/// "Card Purchase": no default here; unmatched descriptions fall
/// through to the general chain.
pub(super) fn card_purchase(ctx: &MatchContext) -> Option<Classification> {
    let d = &ctx.desc;
    if d.contains("apple.com") {
        return Some(Classification::of("Entertainment", "Subscription Services"));
    }
    if d.contains("hmrc") || d.contains("gov.uk") {
        return Some(Classification::of("Bills & Payments", "Tax Payments"));
    }
    if d.contains("mcdonalds") {
        return Some(Classification::of("Food", "Fast Food"));
    }
    if d.contains("sainsburys") {
        return Some(Classification::of("Food", "Groceries"));
    }
    None
}

/// Plain "Debit" rows; only a few named vendors are recognized here.
pub(super) fn debit(ctx: &MatchContext) -> Option<Classification> {
    let d = &ctx.desc;
    if d.contains("blue rewards") {
        return Some(Classification::of("Bills & Payments", "Bank Fees"));
    }
    if d.contains("mcdonalds") {
        return Some(Classification::of("Food", "Fast Food"));
    }
    if d.contains("sainsburys") {
        return Some(Classification::of("Food", "Groceries"));
    }
    None
}

/// "Funds Transfer": distinguish platform deposits and tax payments
/// from movements between own accounts.
pub(super) fn funds_transfer(ctx: &MatchContext) -> Option<Classification> {
    let d = &ctx.desc;
    if d.contains("etoro") {
        return Some(Classification::of("Investments", "Trading Platform"));
    }
    if d.contains("hmrc") || d.contains("gov.uk") {
        return Some(Classification::of("Bills & Payments", "Tax Payments"));
    }
    if d.contains("tax") {
        return Some(internal_transfer());
    }
    if d.contains("payward") {
        return Some(Classification::of("Savings", "Investments"));
    }
    if d.contains("jay")
        || d.contains("desai")
        || d.contains("transfer to")
        || d.contains("transfer from")
        || d.contains("instant saver")
        || d.contains("savings account")
    {
        return Some(internal_transfer());
    }
    None
}
