//! Reference content for beginners: suggested questions, glossary, safety tips

use serde::Serialize;

/// Questions offered as one-click starting points
pub const COMMON_TOPICS: [&str; 8] = [
    "What is inflation?",
    "How do I start investing?",
    "What are stocks?",
    "What are investment funds?",
    "Benefits of diversification",
    "Risk and return in investments",
    "What is fixed income?",
    "How does the stock exchange work?",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GlossaryTerm {
    pub term: &'static str,
    pub definition: &'static str,
}

pub static GLOSSARY: [GlossaryTerm; 10] = [
    GlossaryTerm {
        term: "Stocks",
        definition: "Small parts of a company that can be bought and sold on the stock exchange. \
                     Buying stocks makes you a part-owner of the company.",
    },
    GlossaryTerm {
        term: "Real-estate funds (FIIs)",
        definition: "Funds that invest in real-estate projects such as malls, offices and warehouses. \
                     You buy fund shares and receive monthly income from rents or sales.",
    },
    GlossaryTerm {
        term: "Fixed income",
        definition: "Investments whose return rules are set when you invest, such as bank deposits \
                     and government bonds. Generally safer.",
    },
    GlossaryTerm {
        term: "Variable income",
        definition: "Investments whose return is not predictable and may vary, such as stocks and \
                     equity funds. Higher risk and higher potential return.",
    },
    GlossaryTerm {
        term: "Diversification",
        definition: "Not putting all your eggs in one basket: investing in different kinds of assets \
                     to reduce risk.",
    },
    GlossaryTerm {
        term: "Inflation",
        definition: "A general rise in the prices of goods and services, which lowers the purchasing \
                     power of money over time.",
    },
    GlossaryTerm {
        term: "CDI (interbank deposit rate)",
        definition: "Reference interest rate for many fixed-income products. Cash boxes and bank \
                     deposits usually pay a percentage of the CDI.",
    },
    GlossaryTerm {
        term: "Liquidity",
        definition: "How easily and quickly an investment can be turned into cash without a \
                     significant loss of value.",
    },
    GlossaryTerm {
        term: "Volatility",
        definition: "How strongly and often an asset's price moves. More volatile assets carry more \
                     risk and more potential return.",
    },
    GlossaryTerm {
        term: "Brokerage",
        definition: "Financial institution that intermediates buying and selling investments such as \
                     stocks, real-estate funds and bonds.",
    },
];

/// (headline, advice)
pub const SAFETY_TIPS: [(&str, &str); 5] = [
    ("Study and research", "Never invest in something you don't understand. Take time to learn about the assets."),
    ("Diversify", "Don't put all your money in a single investment. Spread it out to reduce risk."),
    (
        "Beware of easy-money promises",
        "If it looks too good to be true, it probably is. Distrust very high, guaranteed returns.",
    ),
    ("Understand the risks", "Every investment has risk. Understand the risks of each asset before investing."),
    ("Start small", "Beginners should start with smaller amounts and more conservative investments."),
];

/// Case-insensitive glossary lookup by (partial) term
pub fn lookup(term: &str) -> Option<&'static GlossaryTerm> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    GLOSSARY
        .iter()
        .find(|entry| entry.term.to_lowercase().contains(&needle))
}
