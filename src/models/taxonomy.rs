/// Ordered category → subcategory mapping supplied by the caller.
/// Declaration order matters: keyword-fallback ties resolve to the
/// earliest declared category, and the first subcategory is the
/// fallback when nothing better matches.
#[derive(Debug, Clone)]
pub struct CategoryTaxonomy {
    entries: Vec<(String, Vec<String>)>,
}

impl CategoryTaxonomy {
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// The default taxonomy shipped with the tool.
    pub fn default_set() -> Self {
        let entries = [
            (
                "Income",
                vec!["Salary", "Bonus", "Interest", "Dividends", "Other Income"],
            ),
            (
                "Housing",
                vec!["Rent", "Mortgage", "Utilities", "Maintenance", "Insurance"],
            ),
            (
                "Transportation",
                vec![
                    "Car Payment",
                    "Fuel",
                    "Public Transit",
                    "Maintenance",
                    "Insurance",
                ],
            ),
            ("Food", vec!["Groceries", "Dining Out", "Delivery", "Snacks"]),
            (
                "Healthcare",
                vec!["Insurance", "Medications", "Doctor Visits", "Gym Membership"],
            ),
            (
                "Entertainment",
                vec!["Movies", "Streaming Services", "Hobbies", "Events"],
            ),
            (
                "Shopping",
                vec!["Clothing", "Electronics", "Home Goods", "Personal Care"],
            ),
            (
                "Education",
                vec!["Tuition", "Books", "Courses", "School Supplies"],
            ),
            (
                "Travel",
                vec!["Flights", "Hotels", "Car Rental", "Activities"],
            ),
            (
                "Savings",
                vec!["Emergency Fund", "Investments", "Retirement"],
            ),
            ("Miscellaneous", vec!["Gifts", "Donations", "Other"]),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(cat, subs)| {
                    (
                        cat.to_string(),
                        subs.into_iter().map(String::from).collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == category)
    }

    pub fn subcategories(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, subs)| subs.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
