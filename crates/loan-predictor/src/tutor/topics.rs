use serde::Serialize;

/// Subjects the tutor has a scripted explanation for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    AiBasics,
    CreditHistory,
    Explainability,
    Income,
    LoanAmount,
    Education,
    MaritalStatus,
    PropertyArea,
    Improvement,
    Rejection,
    CoApplicant,
    Fairness,
}

/// Keyword test applied to a lowercased question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Every keyword must appear.
    All(&'static [&'static str]),
    /// At least one keyword must appear.
    Any(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, question: &str) -> bool {
        match self {
            Matcher::All(keywords) => keywords.iter().all(|keyword| question.contains(keyword)),
            Matcher::Any(keywords) => keywords.iter().any(|keyword| question.contains(keyword)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicRule {
    pub topic: Topic,
    pub matcher: Matcher,
    pub response: &'static str,
}

/// Evaluated top to bottom; the first match wins.
pub(crate) const STANDARD_RULES: [TopicRule; 12] = [
    TopicRule {
        topic: Topic::AiBasics,
        matcher: Matcher::All(&["what", "ai"]),
        response: "AI (Artificial Intelligence) is like a very smart computer program that can learn patterns from data. Think of it like a detective that looks at thousands of loan applications and learns what makes some people more likely to repay their loans. It's not magic - it's just very good at spotting patterns that humans might miss!",
    },
    TopicRule {
        topic: Topic::CreditHistory,
        matcher: Matcher::All(&["credit", "history"]),
        response: "Credit history is like your financial report card! It shows how well you've paid back money in the past. If you always paid your credit card bills on time, that's good credit history. If you missed payments or defaulted on loans, that's poor credit history. Banks love good credit history because it shows you're reliable with money.",
    },
    TopicRule {
        topic: Topic::Explainability,
        matcher: Matcher::Any(&["shap", "explain"]),
        response: "SHAP is like having a translator for AI decisions! Imagine the AI is a chef making a dish (your loan decision). SHAP tells you exactly how much each ingredient (like your income, credit score, etc.) contributed to the final taste. Green ingredients made the dish better (helped approval), red ingredients made it worse (hurt approval). It's that simple!",
    },
    TopicRule {
        topic: Topic::Income,
        matcher: Matcher::Any(&["income", "salary"]),
        response: "Your income is super important because it shows the bank you can afford to pay back the loan! Think of it like this: if you earn ₹50,000 per month and want a loan that requires ₹20,000 monthly payments, the bank knows you can handle it. But if you only earn ₹15,000, they'll worry you can't afford the payments.",
    },
    TopicRule {
        topic: Topic::LoanAmount,
        matcher: Matcher::Any(&["loan amount", "how much"]),
        response: "The loan amount is how much money you're asking to borrow. Here's the key: banks prefer when you ask for reasonable amounts compared to your income. If you earn ₹30,000/month, asking for a ₹10 lakh loan might be okay, but asking for ₹1 crore would be risky for the bank. It's all about balance!",
    },
    TopicRule {
        topic: Topic::Education,
        matcher: Matcher::Any(&["education", "graduate"]),
        response: "Education matters because it often relates to job stability and earning potential. Graduates typically have more stable jobs and higher incomes, which makes banks more confident about loan repayment. But don't worry if you're not a graduate - many other factors matter too, like your income and credit history!",
    },
    TopicRule {
        topic: Topic::MaritalStatus,
        matcher: Matcher::Any(&["married", "family"]),
        response: "Marital status can affect loan approval because married couples often have dual incomes and more financial stability. If your spouse also earns money, that's additional security for the bank. However, having dependents (children, elderly parents) means more expenses, which banks also consider.",
    },
    TopicRule {
        topic: Topic::PropertyArea,
        matcher: Matcher::Any(&["property", "area"]),
        response: "Property location matters for resale value! Urban properties are usually easier to sell if the bank needs to recover money. Rural properties might be harder to sell quickly. It's like buying a car - a popular model in the city is easier to resell than a rare model in a remote area.",
    },
    TopicRule {
        topic: Topic::Improvement,
        matcher: Matcher::Any(&["improve", "better"]),
        response: "Great question! Here's how to improve your loan chances: 1) Build good credit by paying bills on time, 2) Increase your income or add a co-applicant, 3) Ask for a smaller loan amount, 4) Save for a larger down payment, 5) Pay off existing debts first. Small improvements in these areas can make a big difference!",
    },
    TopicRule {
        topic: Topic::Rejection,
        matcher: Matcher::Any(&["rejected", "denied"]),
        response: "Don't worry if your loan gets rejected - it's not the end! Banks reject loans to protect both you and them from financial trouble. You can improve your application by: waiting to build better credit, increasing your income, reducing the loan amount, or adding a co-applicant with good credit. Think of it as the bank helping you avoid financial stress!",
    },
    TopicRule {
        topic: Topic::CoApplicant,
        matcher: Matcher::Any(&["co-applicant", "guarantor"]),
        response: "A co-applicant is like having a financial buddy! They share responsibility for the loan, which gives the bank extra confidence. If you can't pay, your co-applicant can. Choose someone with good credit and stable income - like a spouse, parent, or close relative who trusts you and whom you trust completely.",
    },
    TopicRule {
        topic: Topic::Fairness,
        matcher: Matcher::Any(&["fair", "bias"]),
        response: "That's an excellent question! AI systems can sometimes be unfair if they learn from biased historical data. That's why explainable AI (like SHAP) is so important - it shows exactly why decisions are made. Banks are working to make AI fairer by checking for bias and ensuring decisions are based on financial factors, not personal characteristics like gender or religion.",
    },
];

pub(crate) const DEFAULT_RESPONSE: &str = "That's an interesting question! Let me help you understand this better. Loan prediction AI looks at various factors like your income, credit history, loan amount, and personal details to assess risk. The key is that it's trying to predict if you can comfortably repay the loan. Would you like me to explain any specific aspect in more detail? You can ask about credit history, income requirements, or how to improve your chances!";

pub const QUICK_QUESTIONS: [&str; 5] = [
    "What is AI and how does it work?",
    "Why is credit history so important?",
    "How can I improve my loan approval chances?",
    "What if my loan gets rejected?",
    "How does the AI explain its decisions?",
];
