mod handlers;
mod rules;

use std::collections::HashSet;

use anyhow::Result;
use regex::Regex;
use rust_decimal::Decimal;

use crate::models::{CategoryTaxonomy, VendorRule};

pub use rules::VENDOR_RULES;

/// The category/subcategory pair a transaction ends up with. Total:
/// every input reaches one, "Uncategorized"/"Other" being the terminal
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub subcategory: String,
}

impl Classification {
    fn of(category: &str, subcategory: &str) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }
}

fn internal_transfer() -> Classification {
    Classification::of("Transfer", "Internal Transfer")
}

struct CompiledRule {
    rule: VendorRule,
    /// Whole-word form of the rule pattern for the exact pass.
    word_pattern: Regex,
}

/// Everything the classifier sees for one row.
struct MatchContext {
    desc: String,
    hint: Option<String>,
    amount: Decimal,
}

/// Layered rule engine mapping (description, optional source hint,
/// signed amount) to a category/subcategory pair. Pure over its inputs
/// plus the rule table and taxonomy it was built with; nothing is
/// mutated after construction.
pub struct Classifier {
    rules: Vec<CompiledRule>,
    taxonomy: CategoryTaxonomy,
    account_terms: Regex,
}

impl Classifier {
    pub fn new(rules: &[VendorRule], taxonomy: CategoryTaxonomy) -> Result<Self> {
        let compiled = rules
            .iter()
            .map(|rule| {
                let pattern = format!(r"\b{}\b", regex::escape(rule.pattern));
                Ok(CompiledRule {
                    rule: rule.clone(),
                    word_pattern: Regex::new(&pattern)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // Vocabulary marking movements between own accounts. Matched on
        // word boundaries: "isa" must not fire inside "visa".
        let account_terms = Regex::new(
            r"\b(instant saver|instant access|savings account|current account|saver account|transfer to|transfer from|savings?|savers?|isa)\b",
        )?;

        Ok(Self {
            rules: compiled,
            taxonomy,
            account_terms,
        })
    }

    /// Classifier over the built-in vendor table and default taxonomy.
    pub fn with_defaults() -> Result<Self> {
        Self::new(VENDOR_RULES, CategoryTaxonomy::default_set())
    }

    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        &self.taxonomy
    }

    /// Walk the priority chain; the first matcher with an opinion wins.
    pub fn classify(
        &self,
        description: &str,
        source_subcategory: Option<&str>,
        amount: Decimal,
    ) -> Classification {
        let desc = description.trim().to_lowercase();
        let mut hint = source_subcategory
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        // A missing or useless hint may still be recoverable from
        // transaction-type markers left in the description.
        if hint.is_none() || hint.as_deref() == Some("other") {
            if let Some(inferred) = infer_hint(&desc) {
                hint = Some(inferred.into());
            }
        }
        let ctx = MatchContext { desc, hint, amount };

        let stages: [fn(&Self, &MatchContext) -> Option<Classification>; 9] = [
            Self::match_platform_overrides,
            Self::match_internal_transfer,
            Self::match_hint_handlers,
            Self::match_income_vocabulary,
            Self::match_vendor_word,
            Self::match_vendor_substring,
            Self::match_keyword_score,
            Self::match_vendor_overlap,
            Self::match_sign_default,
        ];
        for stage in stages {
            if let Some(found) = stage(self, &ctx) {
                return found;
            }
        }
        Classification::of("Uncategorized", "Other")
    }

    /// Trading platforms and crypto exchanges outrank every other rule.
    fn match_platform_overrides(&self, ctx: &MatchContext) -> Option<Classification> {
        if rules::TRADING_PLATFORMS.iter().any(|p| ctx.desc.contains(p)) {
            return Some(Classification::of("Investments", "Trading Platform"));
        }
        if rules::CRYPTO_EXCHANGES.iter().any(|p| ctx.desc.contains(p)) {
            return Some(Classification::of("Savings", "Investments"));
        }
        None
    }

    /// Transfers between own accounts: a personal-name token in a
    /// funds-transfer context with no third-party name, or outright
    /// savings/ISA/current-account vocabulary.
    fn match_internal_transfer(&self, ctx: &MatchContext) -> Option<Classification> {
        let funds_transfer_context = ctx
            .hint
            .as_deref()
            .map(|h| h.contains("funds transfer"))
            .unwrap_or(false)
            || ctx.desc.contains("ft");
        if rules::PERSONAL_NAMES.iter().any(|n| ctx.desc.contains(n)) && funds_transfer_context {
            if ctx.desc.contains("tax") {
                // Tax money moved between own accounts, not a payment
                // to the tax authority.
                return Some(internal_transfer());
            }
            if !rules::EXTERNAL_PAYEES.iter().any(|n| ctx.desc.contains(n)) {
                return Some(internal_transfer());
            }
        }
        if self.account_terms.is_match(&ctx.desc) {
            return Some(internal_transfer());
        }
        None
    }

    /// Specialized handlers keyed on the source-provided subcategory.
    fn match_hint_handlers(&self, ctx: &MatchContext) -> Option<Classification> {
        let hint = ctx.hint.as_deref()?;
        if hint.contains("counter credit") {
            return handlers::counter_credit(ctx);
        }
        if hint.contains("direct debit") {
            return handlers::direct_debit(self, ctx);
        }
        if hint.contains("card purchase") {
            return handlers::card_purchase(ctx);
        }
        if hint == "debit" {
            return handlers::debit(ctx);
        }
        if hint.contains("funds transfer") {
            return handlers::funds_transfer(ctx);
        }
        None
    }

    /// Quick income checks that outrank the vendor table.
    fn match_income_vocabulary(&self, ctx: &MatchContext) -> Option<Classification> {
        let d = &ctx.desc;
        if d.contains("instant saver") || (d.contains("saver") && d.contains("tax")) {
            return Some(internal_transfer());
        }
        if d.contains("salary") || d.contains("wages") {
            return Some(Classification::of("Income", "Salary/Wages"));
        }
        if d.contains("dividend") {
            return Some(Classification::of("Income", "Dividends"));
        }
        // Loan and mortgage interest is a cost, not income. The
        // exclusion list is deliberately this narrow.
        if d.contains("interest") && !(d.contains("loan") || d.contains("mortgage")) {
            return Some(Classification::of("Income", "Interest"));
        }
        if d.contains("refund") {
            // A refund keeps the vendor's category but is tagged as a
            // refund; with no recognizable vendor it is plain income.
            for rule in &self.rules {
                if rule.rule.applies(ctx.amount, ctx.hint.as_deref())
                    && rule.word_pattern.is_match(d)
                {
                    return Some(Classification {
                        category: rule.rule.category.into(),
                        subcategory: "Refund".into(),
                    });
                }
            }
            return Some(Classification::of("Income", "Refund"));
        }
        if rules::PAY_KEYWORDS.iter().any(|k| d.contains(k)) {
            return Some(Classification::of("Income", "Salary/Wages"));
        }
        None
    }

    /// First vendor-table pass: the pattern must appear as a whole word.
    fn match_vendor_word(&self, ctx: &MatchContext) -> Option<Classification> {
        for rule in &self.rules {
            if rule.rule.applies(ctx.amount, ctx.hint.as_deref())
                && rule.word_pattern.is_match(&ctx.desc)
            {
                return Some(Classification::of(rule.rule.category, rule.rule.subcategory));
            }
        }
        None
    }

    /// Second pass: substring match, multi-word patterns only. Short
    /// single tokens produce too many false positives.
    fn match_vendor_substring(&self, ctx: &MatchContext) -> Option<Classification> {
        for rule in &self.rules {
            if rule.rule.pattern.contains(' ')
                && rule.rule.applies(ctx.amount, ctx.hint.as_deref())
                && ctx.desc.contains(rule.rule.pattern)
            {
                return Some(Classification::of(rule.rule.category, rule.rule.subcategory));
            }
        }
        None
    }

    /// Score taxonomy categories by keyword hits; highest wins, ties go
    /// to the earliest declared.
    fn match_keyword_score(&self, ctx: &MatchContext) -> Option<Classification> {
        let mut best: Option<(&str, usize)> = None;
        for &(category, keywords) in rules::CATEGORY_KEYWORDS {
            if !self.taxonomy.contains(category) {
                continue;
            }
            let score = keywords.iter().filter(|k| ctx.desc.contains(*k)).count();
            if score > best.map(|(_, s)| s).unwrap_or(0) {
                best = Some((category, score));
            }
        }
        let (category, _) = best?;
        let subcategory = self.pick_subcategory(category, &ctx.desc);
        Some(Classification {
            category: category.into(),
            subcategory,
        })
    }

    fn pick_subcategory(&self, category: &str, desc: &str) -> String {
        let Some(subs) = self.taxonomy.subcategories(category) else {
            return "Other".into();
        };
        let desc_words: HashSet<&str> = desc.split_whitespace().collect();
        let mut best: Option<&String> = None;
        let mut best_overlap = 0usize;
        for sub in subs {
            let sub_lower = sub.to_lowercase();
            if desc.contains(&sub_lower) {
                return sub.clone();
            }
            let overlap = sub_lower
                .split_whitespace()
                .filter(|w| desc_words.contains(w))
                .count();
            if overlap > best_overlap {
                best_overlap = overlap;
                best = Some(sub);
            }
        }
        best.or_else(|| subs.first())
            .cloned()
            .unwrap_or_else(|| "Other".into())
    }

    /// Fuzzy last resort: word-set overlap between rule patterns and
    /// the description. Longer patterns need more overlap; ties prefer
    /// the more specific (longer) pattern.
    fn match_vendor_overlap(&self, ctx: &MatchContext) -> Option<Classification> {
        let desc_words: HashSet<&str> = ctx.desc.split_whitespace().collect();
        let mut best: Option<&CompiledRule> = None;
        let mut best_score = 0usize;
        let mut best_len = 0usize;
        for rule in &self.rules {
            if !rule.rule.applies(ctx.amount, ctx.hint.as_deref()) {
                continue;
            }
            let words: Vec<&str> = rule.rule.pattern.split_whitespace().collect();
            let required = if words.len() > 2 { 2 } else { 1 };
            let overlap = words.iter().filter(|w| desc_words.contains(*w)).count();
            if overlap < required {
                continue;
            }
            if overlap > best_score
                || (overlap == best_score && rule.rule.pattern.len() > best_len)
            {
                best_score = overlap;
                best_len = rule.rule.pattern.len();
                best = Some(rule);
            }
        }
        best.map(|r| Classification::of(r.rule.category, r.rule.subcategory))
    }

    /// Terminal default: money in with no other explanation is income,
    /// money out stays uncategorized.
    fn match_sign_default(&self, ctx: &MatchContext) -> Option<Classification> {
        if ctx.amount >= Decimal::ZERO {
            Some(Classification::of("Income", "Other Income"))
        } else {
            Some(Classification::of("Uncategorized", "Other"))
        }
    }
}

/// Recover a subcategory hint from transaction-type markers in the
/// description when the source provided none.
fn infer_hint(desc: &str) -> Option<&'static str> {
    if desc.contains("ddr") || desc.contains("direct debit") || desc.contains(" dd") {
        Some("direct debit")
    } else if desc.contains("bcc") || desc.contains("card purchase") || desc.contains("cpm") {
        Some("card purchase")
    } else {
        None
    }
}
