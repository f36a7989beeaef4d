use anyhow::Result;
use regex::Regex;

/// Generic transaction labels that say nothing about the payee; when a
/// delimited memo follows one of these, the memo wins.
const GENERIC_LABELS: [&str; 3] = ["Direct Debit", "Debit", "Card Purchase"];

/// Leading noise stripped before merchant matching.
const LEADING_PREFIXES: [&str; 13] = [
    "PAYMENT TO ",
    "PAYMENT FROM ",
    "PURCHASE AT ",
    "POS PURCHASE ",
    "DEPOSIT AT ",
    "ATM ",
    "CHQ ",
    "CHEQUE ",
    "DIRECT DEPOSIT ",
    "ACH ",
    "CREDIT ",
    "DEBIT ",
    "DIRECT DEBIT TO ",
];

/// Brand patterns that override whatever cleanup produced with one
/// canonical merchant name.
const CANONICAL_MERCHANTS: [(&str, &str); 20] = [
    (r"(?i)AMEX|AMERICAN EXPRESS", "American Express"),
    (r"(?i)VISA|MASTERCARD|CREDIT CARD PMT", "Credit Card Payment"),
    (r"(?i)AMAZON|AMZN", "Amazon"),
    (r"(?i)TESCO", "Tesco"),
    (r"(?i)SAINSBURY", "Sainsbury's"),
    (r"(?i)ASDA", "Asda"),
    (r"(?i)ALDI", "Aldi"),
    (r"(?i)LIDL", "Lidl"),
    (r"(?i)MORRISONS", "Morrisons"),
    (r"(?i)WAITROSE", "Waitrose"),
    (r"(?i)IKEA", "IKEA"),
    (r"(?i)NETFLIX", "Netflix"),
    (r"(?i)SPOTIFY", "Spotify"),
    (r"(?i)BRITISH ?GAS", "British Gas"),
    (r"(?i)\bEDF\b|E\.D\.F", "EDF Energy"),
    (r"(?i)THAMES ?WATER", "Thames Water"),
    (r"(?i)TV ?LICENSE", "TV License"),
    (r"(?i)\bSKY\b", "Sky"),
    (r"(?i)VIRGIN ?MEDIA", "Virgin Media"),
    (r"(?i)BT GROUP|BTGROUP|BT\.COM", "BT"),
];

/// Cleans free-text statement memos into a stable vendor token. All
/// patterns compile once at construction; cleaning itself is pure.
pub struct DescriptionCleaner {
    ref_suffix: Regex,
    embedded_day: Regex,
    direct_debit_to: Regex,
    payment_to: Regex,
    reference_label: Regex,
    letter_run: Regex,
    reference_codes: Regex,
    long_digits: Regex,
    date_fragments: Vec<Regex>,
    type_words: Regex,
    merchants: Vec<(Regex, &'static str)>,
}

impl DescriptionCleaner {
    pub fn new() -> Result<Self> {
        let date_fragments = [
            r"\d{1,2}/\d{1,2}/\d{2,4}",
            r"\d{1,2}-\d{1,2}-\d{2,4}",
            r"\d{2,4}-\d{1,2}-\d{1,2}",
            r"\d{1,2}\s[A-Za-z]{3}\s\d{2,4}",
        ]
        .iter()
        .map(|p| Ok(Regex::new(p)?))
        .collect::<Result<Vec<_>>>()?;

        let merchants = CANONICAL_MERCHANTS
            .iter()
            .map(|(pattern, name)| Ok((Regex::new(pattern)?, *name)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            // Trailing bank reference codes on memo fields (DDR, BGC, ...).
            ref_suffix: Regex::new(r"\b(DDR|BGC|CBP|BCC|CPM|BP|SO|DD|FT)$")?,
            // Embedded day/month fragments like "ON 29 JAN".
            embedded_day: Regex::new(r"ON\s+\d+\s+[A-Z]{3}")?,
            direct_debit_to: Regex::new(r"(?i)Direct\s+Debit\s+to\s+([A-Za-z0-9\s&]+)")?,
            payment_to: Regex::new(r"(?i)(Payment|Transfer)\s+to\s+([A-Za-z0-9\s&]+)")?,
            reference_label: Regex::new(r"(?i)Ref:\s*([A-Za-z0-9\s&]+)")?,
            letter_run: Regex::new(r"[A-Za-z]{3,}")?,
            reference_codes: Regex::new(r"(?i)\b(REF|ID|TRXN|TRAN|TRANS|TRN)[\s#:]*\d+\b")?,
            long_digits: Regex::new(r"\b\d{5,}\b")?,
            date_fragments,
            type_words: Regex::new(
                r"(?i)\b(PURCHASE|PAYMENT|TRANSFER|FEE|INTEREST|DEPOSIT|WITHDRAWAL|REFUND|REVERSAL|CHARGE|CREDIT|DEBIT|TRANSACTION)\b",
            )?,
            merchants,
        })
    }

    /// First applicable rule wins and returns immediately; the generic
    /// cleanup stages run in sequence otherwise. Never produces a label
    /// under 2 characters: over-stripped results fall back to the
    /// whitespace-collapsed original.
    pub fn clean(&self, raw: &str) -> String {
        // Delimited label/memo form ("Direct Debit<TAB>BUPA CENTRAL DDR"):
        // prefer the memo over the generic label.
        if raw.contains('\t') {
            let mut parts = raw.split('\t').map(str::trim).filter(|p| !p.is_empty());
            let label = collapse_ws(parts.next().unwrap_or(""));
            if GENERIC_LABELS.contains(&label.as_str()) {
                if let Some(memo) = parts.next() {
                    let vendor = collapse_ws(memo);
                    let vendor = self.ref_suffix.replace(&vendor, "");
                    let vendor = self.embedded_day.replace_all(vendor.trim(), "");
                    return vendor.trim().to_string();
                }
            }
            return label;
        }

        let original = collapse_ws(raw);
        let mut cleaned = original.clone();

        // "Direct Debit to <payee>": the payee is the useful part.
        if let Some(caps) = self.direct_debit_to.captures(&cleaned) {
            let payee = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            if payee.to_lowercase().starts_with("bupa") {
                return "BUPA Healthcare".into();
            }
            if !payee.is_empty() {
                return payee.to_string();
            }
        }

        // "Payment to <payee>" / "Transfer to <payee>".
        if let Some(caps) = self.payment_to.captures(&cleaned) {
            if let Some(payee) = caps.get(2) {
                let payee = payee.as_str().trim();
                if !payee.is_empty() {
                    return payee.to_string();
                }
            }
        }

        // "Ref: <token>" where the token is a name, not a number.
        if let Some(caps) = self.reference_label.captures(&cleaned) {
            if let Some(token) = caps.get(1) {
                let token = token.as_str().trim();
                if self.letter_run.is_match(token) {
                    return token.to_string();
                }
            }
        }

        // Generic cleanup: reference tokens, long digit runs, dates.
        cleaned = self.reference_codes.replace_all(&cleaned, "").into_owned();
        cleaned = self.long_digits.replace_all(&cleaned, "").into_owned();
        for pattern in &self.date_fragments {
            cleaned = pattern.replace_all(&cleaned, "").into_owned();
        }
        for prefix in LEADING_PREFIXES {
            if let Some(rest) = strip_prefix_ci(&cleaned, prefix) {
                cleaned = rest.to_string();
            }
        }
        cleaned = collapse_ws(&cleaned);

        // Canonical merchant table overrides everything when it hits.
        for (pattern, name) in &self.merchants {
            if pattern.is_match(&cleaned) {
                return (*name).to_string();
            }
        }

        // Remaining transaction-type words say nothing about the vendor.
        cleaned = self.type_words.replace_all(&cleaned, "").into_owned();
        cleaned = collapse_ws(&cleaned);

        if cleaned.chars().count() < 2 {
            return original;
        }
        cleaned
    }
}

fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
#[path = "clean_tests.rs"]
mod tests;
