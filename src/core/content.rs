// src/core/content.rs
//! Built-in mentor texts: the advice rules and the strings the chat view
//! shows around them.

use crate::core::localized::LocalizedText;
use crate::core::rules::{RuleSet, TopicRule};
use std::time::Duration;

pub const BUDGETING: &str = "budgeting";
pub const SAVING: &str = "saving";
pub const CREDIT: &str = "credit";
pub const INVESTING: &str = "investing";
pub const DEBT: &str = "debt";
pub const EMERGENCY_FUND: &str = "emergency_fund";

/// How long the chat shows its typing indicator before the reply appears.
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

/// The advice rules in priority order.
pub fn builtin_rules() -> RuleSet {
    let rules = vec![
        TopicRule::new(
            BUDGETING,
            ["budget", "spending"],
            LocalizedText::new(
                "A good budget follows the 50/30/20 rule: 50% for needs, 30% for wants, and 20% for savings. Start by tracking your expenses for a month to understand your spending patterns.",
            )
            .with(
                "es",
                "Un buen presupuesto sigue la regla 50/30/20: 50% para necesidades, 30% para deseos y 20% para ahorros. Comienza rastreando tus gastos durante un mes para entender tus patrones de gasto.",
            ),
        ),
        TopicRule::new(
            SAVING,
            ["save", "saving"],
            LocalizedText::new(
                "To save effectively: 1) Build an emergency fund of 3-6 months expenses, 2) Automate your savings, 3) Set specific goals. Even saving $50-100/month can build a powerful habit.",
            )
            .with(
                "es",
                "Para ahorrar efectivamente: 1) Construye un fondo de emergencia de 3-6 meses de gastos, 2) Automatiza tus ahorros, 3) Establece metas específicas. Incluso ahorrar 50-100 dólares al mes puede crear un hábito poderoso.",
            ),
        ),
        TopicRule::new(
            CREDIT,
            ["credit", "score"],
            LocalizedText::new(
                "To improve your credit score: 1) Pay bills on time, 2) Keep credit utilization under 30%, 3) Keep old accounts open, 4) Avoid too many applications for new credit.",
            )
            .with(
                "hi",
                "अपने क्रेडिट स्कोर को सुधारने के लिए: 1) समय पर भुगतान करें, 2) क्रेडिट उपयोग को 30% से कम रखें, 3) पुराने खाते खुले रखें, 4) नए क्रेडिट के लिए बहुत सारे आवेदन से बचें।",
            ),
        ),
        TopicRule::new(
            INVESTING,
            ["invest", "investment"],
            LocalizedText::new(
                "Investing starts with understanding your risk tolerance and time horizon. For beginners: consider low-cost index funds, diversify across asset classes, and think long-term. Start with what you can afford, even small amounts.",
            )
            .with(
                "es",
                "La inversión comienza con comprender tu tolerancia al riesgo y horizonte temporal. Para principiantes: considera fondos indexados de bajo costo, diversifica entre clases de activos y piensa a largo plazo. Comienza con lo que puedas permitirte, incluso cantidades pequeñas.",
            ),
        ),
        TopicRule::new(
            DEBT,
            ["debt", "loan"],
            LocalizedText::new(
                "Debt management: 1) Prioritize high-interest debt, 2) Pay more than minimums, 3) Consider debt consolidation, 4) Avoid taking on new debt. Make a plan and stick to it.",
            )
            .with(
                "hi",
                "ऋण प्रबंधन: 1) उच्च-ब्याज ऋण को प्राथमिकता दें, 2) न्यूनतम से अधिक भुगतान करें, 3) ऋण एकीकरण पर विचार करें, 4) और नया ऋण लेने से बचें। एक योजना बनाएं और उस पर टिके रहें।",
            ),
        ),
        TopicRule::new(
            EMERGENCY_FUND,
            ["emergency", "fund"],
            LocalizedText::new(
                "An emergency fund is crucial! Aim for 3-6 months of living expenses. Start small - even $500 can help. Keep it in a high-yield savings account that's easily accessible but separate from daily spending.",
            ),
        ),
    ];

    let fallback = LocalizedText::new(
        "I understand your question. I can help with budgeting, savings, credit, investing, and financial planning. Could you be more specific about what you'd like to learn?",
    )
    .with(
        "es",
        "Entiendo tu pregunta. Puedo ayudarte con presupuestos, ahorros, crédito, inversión y planificación financiera. ¿Podrías ser más específico sobre lo que te gustaría aprender?",
    )
    .with(
        "hi",
        "मैं आपका सवाल समझता हूं। मैं बजट, बचत, क्रेडिट, निवेश और वित्तीय योजना में मदद कर सकता हूं। क्या आप बता सकते हैं कि आप क्या सीखना चाहेंगे?",
    );

    // Checked by `builtin_rules_are_valid`.
    RuleSet::from_static(rules, fallback)
}

/// Opening assistant message. Only written in English.
pub fn greeting() -> LocalizedText {
    LocalizedText::new(
        "Hello! I'm your AI Financial Mentor. I can help you with budgeting, saving, investing, credit building, and more. What would you like to learn about today?",
    )
}

/// Suggested prompts shown above the input box.
pub fn quick_questions() -> Vec<LocalizedText> {
    vec![
        LocalizedText::new("How do I start budgeting?")
            .with("es", "¿Cómo empiezo a presupuestar?")
            .with("hi", "मैं बजट कैसे शुरू करूं?"),
        LocalizedText::new("How to improve credit score?")
            .with("es", "¿Cómo mejorar el puntaje de crédito?")
            .with("hi", "क्रेडिट स्कोर कैसे सुधारें?"),
        LocalizedText::new("Best savings strategies?")
            .with("es", "¿Mejores estrategias de ahorro?")
            .with("hi", "सबसे अच्छी बचत रणनीतियाँ?"),
    ]
}

pub fn input_placeholder() -> LocalizedText {
    LocalizedText::new("Type your question...")
        .with("es", "Escribe tu pregunta...")
        .with("hi", "अपना सवाल टाइप करें...")
}

pub fn disclaimer() -> LocalizedText {
    LocalizedText::new(
        "Note: This AI mentor provides educational guidance. For personalized financial advice, please consult with a certified financial advisor.",
    )
}

/// Name of a language as shown on the language selector.
pub fn language_label(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "es" => Some("Español"),
        "hi" => Some("हिन्दी"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SUPPORTED_LANGUAGES;

    #[test]
    fn builtin_rules_are_valid() {
        let rules = builtin_rules();
        assert!(RuleSet::new(rules.rules().to_vec(), rules.fallback().clone()).is_ok());
        let order: Vec<&str> = rules.rules().iter().map(|r| r.topic()).collect();
        assert_eq!(order, [BUDGETING, SAVING, CREDIT, INVESTING, DEBT, EMERGENCY_FUND]);
    }

    #[test]
    fn translation_coverage_matches_the_chat_view() {
        let rules = builtin_rules();
        let langs = |id: &str| -> Vec<String> {
            rules.topic(id).unwrap().responses().languages().map(String::from).collect()
        };
        assert_eq!(langs(BUDGETING), ["en", "es"]);
        assert_eq!(langs(SAVING), ["en", "es"]);
        assert_eq!(langs(CREDIT), ["en", "hi"]);
        assert_eq!(langs(INVESTING), ["en", "es"]);
        assert_eq!(langs(DEBT), ["en", "hi"]);
        assert_eq!(langs(EMERGENCY_FUND), ["en"]);
        assert!(SUPPORTED_LANGUAGES.iter().all(|l| rules.fallback().has(l)));
    }

    #[test]
    fn quick_questions_cover_every_language() {
        for question in quick_questions() {
            assert!(question.validate().is_ok());
            assert!(SUPPORTED_LANGUAGES.iter().all(|l| question.has(l)));
        }
        assert_eq!(quick_questions()[1].resolve("es"), "¿Cómo mejorar el puntaje de crédito?");
    }

    #[test]
    fn greeting_is_english_only() {
        assert_eq!(greeting().resolve("hi"), greeting().resolve("en"));
        assert_eq!(input_placeholder().resolve("hi"), "अपना सवाल टाइप करें...");
    }

    #[test]
    fn labels_exist_for_supported_languages() {
        assert!(SUPPORTED_LANGUAGES.iter().all(|l| language_label(l).is_some()));
        assert_eq!(language_label("fr"), None);
    }
}
