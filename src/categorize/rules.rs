use crate::models::VendorRule;

const fn v(
    pattern: &'static str,
    category: &'static str,
    subcategory: &'static str,
) -> VendorRule {
    VendorRule::new(pattern, category, subcategory)
}

/// Known trading platforms; checked before everything else.
pub const TRADING_PLATFORMS: [&str; 4] = ["etoro", "trading 212", "coinbase", "binance"];

/// Crypto exchanges; deposits there are treated as savings.
pub const CRYPTO_EXCHANGES: [&str; 2] = ["payward", "kraken"];

/// Personal-name tokens that mark a transfer-to-self when seen in a
/// funds-transfer context.
pub const PERSONAL_NAMES: [&str; 3] = ["jay", "desai", "j n desai"];

/// Tokens naming a third party; their presence means the transfer is
/// not internal after all.
pub const EXTERNAL_PAYEES: [&str; 2] = ["richard", "fairchild"];

/// Generic pay vocabulary; anything carrying these reads as wages.
pub const PAY_KEYWORDS: [&str; 6] =
    ["pay", "payroll", "salary", "wage", "income", "direct deposit"];

/// Counter-credit descriptions containing these are transfers between
/// own accounts rather than income.
pub const COUNTER_CREDIT_TRANSFER_TERMS: [&str; 9] = [
    "saver",
    "savings",
    "isa",
    "transfer to",
    "transfer from",
    "instant access",
    "desai",
    "jay",
    "bank transfer",
];

/// The static vendor rule table. Order matters: direct lookups return
/// the first match. Patterns are lowercase; matching is done against a
/// lowercased description.
pub const VENDOR_RULES: &[VendorRule] = &[
    // Payment services & credit cards
    v("amex", "Bills & Payments", "Credit Card"),
    v("american express", "Bills & Payments", "Credit Card"),
    v("mastercard", "Bills & Payments", "Credit Card"),
    v("visa", "Bills & Payments", "Credit Card"),
    v("paypal", "Shopping", "Online Services"),
    v("stripe", "Shopping", "Online Services"),
    v("square", "Shopping", "Retail"),
    v("venmo", "Transfer", "Money Transfer"),
    v("zelle", "Transfer", "Money Transfer"),
    v("cash app", "Transfer", "Money Transfer"),
    v("etoro", "Investments", "Trading Platform"),
    v("payward", "Savings", "Investments"),
    v("kraken", "Savings", "Investments"),
    v("direct debit", "Bills & Payments", "Direct Debit"),
    v("counter credit", "Income", "Deposit"),
    v("hmrc", "Taxes", "Income Tax"),
    v("hmrc gov.uk", "Bills & Payments", "Taxes"),
    v("tax", "Taxes", "General Tax"),
    // UK banking terms
    v("instant saver", "Transfer", "Internal Transfer"),
    v("instant access", "Transfer", "Internal Transfer"),
    v("saver account", "Transfer", "Internal Transfer"),
    v("isa", "Savings", "ISA"),
    v("cash isa", "Savings", "ISA"),
    v("stocks and shares isa", "Savings", "ISA"),
    // UK banks
    v("barclays", "Transfer", "Bank Transfer"),
    v("hsbc", "Transfer", "Bank Transfer"),
    v("lloyds", "Transfer", "Bank Transfer"),
    v("natwest", "Transfer", "Bank Transfer"),
    v("nationwide", "Insurance", "Auto Insurance"),
    v("santander", "Transfer", "Bank Transfer"),
    v("monzo", "Transfer", "Bank Transfer"),
    v("starling", "Transfer", "Bank Transfer"),
    v("revolut", "Transfer", "Bank Transfer"),
    // Banking & investments
    v("bank transfer", "Transfer", "Bank Transfer"),
    v("direct deposit", "Income", "Salary/Wages"),
    v("interest", "Income", "Interest"),
    v("dividend", "Income", "Dividends"),
    v("vanguard", "Investments", "Brokerage"),
    v("fidelity", "Investments", "Brokerage"),
    v("schwab", "Investments", "Brokerage"),
    v("robinhood", "Investments", "Brokerage"),
    v("etrade", "Investments", "Brokerage"),
    v("td ameritrade", "Investments", "Brokerage"),
    v("ramco", "Income", "Business Income"),
    v("ramco manor park", "Income", "Business Income"),
    v("jn desai limited", "Income", "Business Income"),
    v("saver", "Transfer", "Internal Transfer"),
    v("astrenska", "Income", "Insurance Payout"),
    v("astrenska insuranc", "Income", "Insurance Payout"),
    // Groceries & supermarkets
    v("tesco", "Food", "Groceries"),
    v("sainsbury", "Food", "Groceries"),
    v("asda", "Food", "Groceries"),
    v("waitrose", "Food", "Groceries"),
    v("morrisons", "Food", "Groceries"),
    v("aldi", "Food", "Groceries"),
    v("lidl", "Food", "Groceries"),
    v("kroger", "Food", "Groceries"),
    v("walmart", "Food", "Groceries"),
    v("target", "Shopping", "Department Store"),
    v("safeway", "Food", "Groceries"),
    v("trader joe", "Food", "Groceries"),
    v("whole foods", "Food", "Groceries"),
    v("costco", "Food", "Groceries"),
    v("sams club", "Food", "Groceries"),
    // Dining & restaurants
    v("mcdonalds", "Food", "Fast Food"),
    v("mcdonald's", "Food", "Fast Food"),
    v("burger king", "Food", "Fast Food"),
    v("wendys", "Food", "Fast Food"),
    v("starbucks", "Food", "Coffee Shops"),
    v("costa", "Food", "Coffee Shops"),
    v("pret", "Food", "Coffee Shops"),
    v("subway", "Transportation", "Public Transit"),
    v("kfc", "Food", "Fast Food"),
    v("taco bell", "Food", "Fast Food"),
    v("pizza hut", "Food", "Dining"),
    v("dominos", "Food", "Dining"),
    v("domino's", "Food", "Dining"),
    v("chipotle", "Food", "Dining"),
    v("nandos", "Food", "Dining"),
    v("greggs", "Food", "Fast Food"),
    // Food delivery
    v("ubereats", "Food", "Food Delivery"),
    v("uber eats", "Food", "Food Delivery"),
    v("doordash", "Food", "Food Delivery"),
    v("grubhub", "Food", "Food Delivery"),
    v("deliveroo", "Food", "Food Delivery"),
    v("just eat", "Food", "Food Delivery"),
    // Retail & shopping
    v("amazon", "Shopping", "Online Shopping"),
    v("ebay", "Shopping", "Online Shopping"),
    v("etsy", "Shopping", "Online Shopping"),
    v("apple", "Shopping", "Electronics"),
    v("best buy", "Shopping", "Electronics"),
    v("ikea", "Shopping", "Home Furnishings"),
    v("wayfair", "Shopping", "Home Furnishings"),
    v("home depot", "Shopping", "Home Improvement"),
    v("lowes", "Shopping", "Home Improvement"),
    v("b&q", "Shopping", "Home Improvement"),
    v("homebase", "Shopping", "Home Improvement"),
    v("marshalls", "Shopping", "Clothing"),
    v("tj maxx", "Shopping", "Clothing"),
    v("tk maxx", "Shopping", "Clothing"),
    v("foot locker", "Shopping", "Clothing"),
    v("primark", "Shopping", "Clothing"),
    v("zara", "Shopping", "Clothing"),
    v("h&m", "Shopping", "Clothing"),
    v("asos", "Shopping", "Clothing"),
    v("next", "Shopping", "Clothing"),
    v("marks & spencer", "Shopping", "Department Store"),
    v("m&s", "Shopping", "Department Store"),
    v("john lewis", "Shopping", "Department Store"),
    v("argos", "Shopping", "Department Store"),
    v("debenhams", "Shopping", "Department Store"),
    // Transportation & travel
    v("uber", "Transportation", "Taxi"),
    v("lyft", "Transportation", "Taxi"),
    v("bolt", "Transportation", "Taxi"),
    v("gett", "Transportation", "Taxi"),
    v("free now", "Transportation", "Taxi"),
    v("black cab", "Transportation", "Taxi"),
    v("taxi", "Transportation", "Taxi"),
    v("tube", "Transportation", "Public Transit"),
    v("tfl", "Transportation", "Public Transit"),
    v("transport for london", "Transportation", "Public Transit"),
    v("train", "Transportation", "Public Transit"),
    v("bus", "Transportation", "Public Transit"),
    v("oyster", "Transportation", "Public Transit"),
    v("underground", "Transportation", "Public Transit"),
    v("avis", "Transportation", "Car Rental"),
    v("hertz", "Transportation", "Car Rental"),
    v("enterprise", "Transportation", "Car Rental"),
    v("zipcar", "Transportation", "Car Rental"),
    v("national rail", "Transportation", "Public Transit"),
    v("british rail", "Transportation", "Public Transit"),
    v("amtrak", "Transportation", "Public Transit"),
    v("airline", "Travel", "Flights"),
    v("british airways", "Travel", "Flights"),
    v("easyjet", "Travel", "Flights"),
    v("ryanair", "Travel", "Flights"),
    v("delta", "Travel", "Flights"),
    v("american airlines", "Travel", "Flights"),
    v("united", "Travel", "Flights"),
    v("southwest", "Travel", "Flights"),
    v("jet blue", "Travel", "Flights"),
    v("virgin atlantic", "Travel", "Flights"),
    v("emirates", "Travel", "Flights"),
    v("hotel", "Travel", "Accommodation"),
    v("hilton", "Travel", "Accommodation"),
    v("marriott", "Travel", "Accommodation"),
    v("airbnb", "Travel", "Accommodation"),
    v("booking.com", "Travel", "Accommodation"),
    v("expedia", "Travel", "Travel Services"),
    v("trivago", "Travel", "Travel Services"),
    // Utilities & housing
    v("rent", "Housing", "Rent"),
    v("mortgage", "Housing", "Mortgage"),
    v("council tax", "Housing", "Property Tax"),
    v("property tax", "Taxes", "Property Tax"),
    v("water", "Utilities", "Water"),
    v("electric", "Utilities", "Electricity"),
    v("electricity", "Utilities", "Electricity"),
    v("gas", "Utilities", "Gas"),
    v("heating", "Utilities", "Gas"),
    v("internet", "Utilities", "Internet"),
    v("broadband", "Utilities", "Internet"),
    v("wifi", "Utilities", "Internet"),
    v("sewage", "Utilities", "Water"),
    v("waste", "Utilities", "Waste Management"),
    v("comcast", "Utilities", "Internet"),
    v("xfinity", "Utilities", "Internet"),
    v("verizon", "Utilities", "Phone"),
    v("at&t", "Utilities", "Phone"),
    v("t-mobile", "Utilities", "Phone"),
    v("british gas", "Utilities", "Gas"),
    v("british telecom", "Utilities", "Phone"),
    v("bt", "Utilities", "Internet"),
    v("eon", "Utilities", "Electricity"),
    v("edf", "Utilities", "Electricity"),
    v("scottish power", "Utilities", "Electricity"),
    v("thames water", "Utilities", "Water"),
    v("severn trent", "Utilities", "Water"),
    v("virgin media", "Utilities", "Internet"),
    v("sky", "Utilities", "TV/Internet"),
    // Telecommunications
    v("vodafone", "Utilities", "Phone"),
    v("o2", "Utilities", "Phone"),
    v("ee", "Utilities", "Phone"),
    v("three", "Utilities", "Phone"),
    v("giffgaff", "Utilities", "Phone"),
    v("sprint", "Utilities", "Phone"),
    v("cricket", "Utilities", "Phone"),
    v("boost mobile", "Utilities", "Phone"),
    // Subscriptions & entertainment
    v("netflix", "Entertainment", "Streaming Services"),
    v("hulu", "Entertainment", "Streaming Services"),
    v("disney+", "Entertainment", "Streaming Services"),
    v("amazon prime", "Entertainment", "Streaming Services"),
    v("spotify", "Entertainment", "Music"),
    v("apple music", "Entertainment", "Music"),
    v("youtube", "Entertainment", "Streaming Services"),
    v("youtube premium", "Entertainment", "Streaming Services"),
    v("hbo", "Entertainment", "Streaming Services"),
    v("paramount+", "Entertainment", "Streaming Services"),
    v("peacock", "Entertainment", "Streaming Services"),
    v("now tv", "Entertainment", "Streaming Services"),
    v("cinema", "Entertainment", "Movies"),
    v("odeon", "Entertainment", "Movies"),
    v("vue", "Entertainment", "Movies"),
    v("cineworld", "Entertainment", "Movies"),
    v("amc", "Entertainment", "Movies"),
    v("regal", "Entertainment", "Movies"),
    v("cinemark", "Entertainment", "Movies"),
    v("concert", "Entertainment", "Events"),
    v("ticketmaster", "Entertainment", "Events"),
    v("stubhub", "Entertainment", "Events"),
    v("seetickets", "Entertainment", "Events"),
    // Health & medical
    v("bupa", "Healthcare", "Health Insurance"),
    v("bupa central", "Healthcare", "Health Insurance"),
    v("eyecare payments", "Healthcare", "Vision"),
    v("eyecare", "Healthcare", "Vision"),
    v("aig life", "Insurance", "Life Insurance"),
    v("royal london", "Insurance", "Life Insurance"),
    v("clubwise", "Healthcare", "Fitness"),
    v("etika", "Healthcare", "Medical Services"),
    v("blue rewards", "Banking", "Rewards Program"),
    v("axa", "Healthcare", "Health Insurance"),
    v("cvs", "Healthcare", "Pharmacy"),
    v("walgreens", "Healthcare", "Pharmacy"),
    v("boots", "Healthcare", "Pharmacy"),
    v("lloyds pharmacy", "Healthcare", "Pharmacy"),
    v("superdrug", "Healthcare", "Pharmacy"),
    v("nhs", "Healthcare", "Medical Services"),
    v("hospital", "Healthcare", "Medical Services"),
    v("clinic", "Healthcare", "Medical Services"),
    v("doctor", "Healthcare", "Medical Services"),
    v("dentist", "Healthcare", "Dental"),
    v("optician", "Healthcare", "Vision"),
    v("vision express", "Healthcare", "Vision"),
    v("specsavers", "Healthcare", "Vision"),
    v("gym", "Healthcare", "Fitness"),
    v("fitness", "Healthcare", "Fitness"),
    v("pure gym", "Healthcare", "Fitness"),
    v("virgin active", "Healthcare", "Fitness"),
    v("la fitness", "Healthcare", "Fitness"),
    v("planet fitness", "Healthcare", "Fitness"),
    v("24 hour fitness", "Healthcare", "Fitness"),
    v("gold's gym", "Healthcare", "Fitness"),
    v("equinox", "Healthcare", "Fitness"),
    // Insurance
    v("insurance", "Insurance", "General Insurance"),
    v("geico", "Insurance", "Auto Insurance"),
    v("state farm", "Insurance", "Auto Insurance"),
    v("progressive", "Insurance", "Auto Insurance"),
    v("allstate", "Insurance", "Auto Insurance"),
    v("liberty mutual", "Insurance", "Auto Insurance"),
    v("aviva", "Insurance", "General Insurance"),
    v("direct line", "Insurance", "Auto Insurance"),
    v("admiral", "Insurance", "Auto Insurance"),
    v("churchill", "Insurance", "Home Insurance"),
    v("hastings", "Insurance", "Auto Insurance"),
    v("legal & general", "Insurance", "Life Insurance"),
    v("prudential", "Insurance", "Life Insurance"),
    // Education
    v("university", "Education", "Tuition"),
    v("college", "Education", "Tuition"),
    v("school", "Education", "Tuition"),
    v("student loans", "Education", "Student Loans"),
    v("student loan", "Education", "Student Loans"),
    v("sallie mae", "Education", "Student Loans"),
    v("navient", "Education", "Student Loans"),
    v("great lakes", "Education", "Student Loans"),
    v("nelnet", "Education", "Student Loans"),
    v("chegg", "Education", "Books & Supplies"),
    v("textbooks", "Education", "Books & Supplies"),
    v("coursera", "Education", "Online Courses"),
    v("udemy", "Education", "Online Courses"),
    v("skillshare", "Education", "Online Courses"),
    v("student finance", "Education", "Student Loans"),
    // Business & professional services
    v("payroll", "Income", "Salary/Wages"),
    v("salary", "Income", "Salary/Wages"),
    v("wages", "Income", "Salary/Wages"),
    v("commission", "Income", "Commission"),
    v("freelance", "Income", "Self-Employment"),
    v("consulting", "Income", "Self-Employment"),
    v("upwork", "Income", "Self-Employment"),
    v("fiverr", "Income", "Self-Employment"),
    v("business", "Business", "General Business"),
    v("advertising", "Business", "Marketing"),
    v("office", "Business", "Office Supplies"),
    v("staples", "Business", "Office Supplies"),
    v("office depot", "Business", "Office Supplies"),
    v("quickbooks", "Business", "Accounting"),
    v("xero", "Business", "Accounting"),
    v("freshbooks", "Business", "Accounting"),
    v("mailchimp", "Business", "Marketing"),
    v("godaddy", "Business", "Web Services"),
    v("squarespace", "Business", "Web Services"),
    v("wix", "Business", "Web Services"),
    v("zoom", "Business", "Software & Services"),
    v("microsoft", "Business", "Software & Services"),
    v("adobe", "Business", "Software & Services"),
    v("google", "Business", "Software & Services"),
    // Miscellaneous
    v("atm", "Cash", "ATM Withdrawal"),
    v("fee", "Fees & Charges", "Service Fee"),
    v("interest fee", "Fees & Charges", "Interest"),
    v("overdraft", "Fees & Charges", "Bank Fees"),
    v("service charge", "Fees & Charges", "Bank Fees"),
    v("maintenance fee", "Fees & Charges", "Bank Fees"),
    v("late fee", "Fees & Charges", "Late Payment"),
    v("irs", "Taxes", "Income Tax"),
    v("income tax", "Taxes", "Income Tax"),
    v("charity", "Giving", "Charitable Donations"),
    v("donation", "Giving", "Charitable Donations"),
    v("gift", "Giving", "Gifts"),
    v("birthday", "Giving", "Gifts"),
    v("wedding", "Giving", "Gifts"),
];

/// Keyword → category association used by the scored fallback. Only
/// categories present in the caller's taxonomy are considered;
/// declaration order breaks ties.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Housing",
        &[
            "rent", "mortgage", "home", "apartment", "electric", "water", "gas", "utility",
            "utilities", "internet", "sewage", "waste", "homeowner", "hoa", "maintenance",
            "repair", "lawn", "garden",
        ],
    ),
    (
        "Transportation",
        &[
            "gas",
            "gasoline",
            "fuel",
            "uber",
            "lyft",
            "taxi",
            "car",
            "auto",
            "vehicle",
            "public transit",
            "bus",
            "train",
            "subway",
            "metro",
            "parking",
            "toll",
            "maintenance",
            "repair",
            "insurance",
            "dmv",
            "registration",
        ],
    ),
    (
        "Food",
        &[
            "grocery",
            "groceries",
            "supermarket",
            "market",
            "food",
            "restaurant",
            "cafe",
            "coffee",
            "diner",
            "dinner",
            "lunch",
            "breakfast",
            "take-out",
            "takeout",
            "delivery",
            "grubhub",
            "doordash",
            "ubereats",
            "bakery",
            "pizza",
        ],
    ),
    (
        "Healthcare",
        &[
            "doctor",
            "hospital",
            "medical",
            "dental",
            "dentist",
            "pharmacy",
            "prescription",
            "drug",
            "health",
            "insurance",
            "therapy",
            "gym",
            "fitness",
            "vitamin",
            "eyecare",
            "optometrist",
            "eyeglasses",
            "contacts",
        ],
    ),
    (
        "Entertainment",
        &[
            "movie",
            "theatre",
            "theater",
            "concert",
            "music",
            "spotify",
            "netflix",
            "hulu",
            "disney",
            "amazon prime",
            "streaming",
            "game",
            "book",
            "hobby",
            "ticket",
            "event",
            "sports",
            "subscription",
        ],
    ),
    (
        "Shopping",
        &[
            "amazon",
            "walmart",
            "target",
            "clothing",
            "apparel",
            "department",
            "store",
            "mall",
            "retail",
            "electronics",
            "computer",
            "phone",
            "merchandise",
            "ebay",
            "online",
            "purchase",
            "shop",
        ],
    ),
    (
        "Education",
        &[
            "school",
            "university",
            "college",
            "tuition",
            "education",
            "student",
            "loan",
            "book",
            "course",
            "class",
            "degree",
            "training",
        ],
    ),
    (
        "Travel",
        &[
            "hotel",
            "airbnb",
            "airline",
            "flight",
            "travel",
            "trip",
            "vacation",
            "rental car",
            "cruise",
            "tour",
            "booking",
            "resort",
            "airport",
        ],
    ),
    (
        "Savings",
        &[
            "transfer",
            "savings",
            "investment",
            "deposit",
            "stock",
            "bond",
            "retirement",
            "401k",
            "ira",
            "roth",
            "etf",
            "mutual fund",
        ],
    ),
    (
        "Miscellaneous",
        &[
            "gift",
            "donation",
            "charity",
            "fee",
            "interest",
            "tax",
            "insurance",
            "subscription",
            "dues",
            "membership",
            "service",
            "misc",
        ],
    ),
];
