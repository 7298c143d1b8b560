//! Built-in English lexicon for the Israel/Palestine axis.
//!
//! Side A is pro-Israel language, side B pro-Palestine language. Weights
//! grade how unambiguous a phrase is: explicit advocacy slogans and hashtags
//! sit near 1.0, loaded but contested vocabulary around 0.6-0.8, and bare
//! topic or identity words (which both sides use) at 0.2-0.4.

pub(super) const PRO_A: &[(&str, f64)] = &[
    // General
    ("israel", 0.3),
    ("israeli", 0.3),
    ("zionist", 0.6),
    ("zionism", 0.6),
    ("jewish state", 0.6),
    ("jewish people", 0.4),
    ("israel deserves to live", 1.0),
    ("israel is under attack", 0.9),
    ("am yisrael chai", 1.0),
    ("homeland", 0.3),
    ("unity", 0.2),
    // Support
    ("stand with israel", 1.0),
    ("standwithisrael", 1.0),
    ("support israel", 1.0),
    ("defend israel", 1.0),
    ("pray for israel", 0.9),
    ("bring them home", 0.8),
    ("bringthemhome", 0.8),
    ("jewish lives matter", 0.8),
    ("never again", 0.6),
    ("israelunderattack", 0.9),
    // Military
    ("idf", 0.6),
    ("israel defense forces", 0.6),
    ("mossad", 0.4),
    ("israeli army", 0.4),
    ("iron dome", 0.6),
    ("war on terror", 0.6),
    ("eliminate hamas", 0.9),
    ("defend ourselves", 0.7),
    ("security", 0.2),
    ("survival", 0.3),
    // Political
    ("netanyahu", 0.4),
    ("bibi", 0.4),
    ("benjamin netanyahu", 0.4),
    ("israeli government", 0.3),
    ("israeli pm", 0.3),
    ("judicial terror", 0.6),
    ("strong leadership", 0.3),
    // Historical
    ("holocaust", 0.4),
    ("shoah", 0.4),
    ("jewish history", 0.4),
    ("simchat torah massacre", 0.9),
    ("october 7", 0.7),
    // Religious
    ("jewish", 0.3),
    ("judaism", 0.3),
    ("torah", 0.3),
    ("jerusalem", 0.3),
    ("temple mount", 0.4),
    // Symbols
    ("🇮🇱", 0.8),
    ("✡", 0.5),
    ("🕎", 0.4),
    // Emotional
    ("hostages", 0.6),
    ("israeli hostages", 0.8),
    ("terrorist", 0.5),
    ("terrorism", 0.5),
    ("hezbollah", 0.4),
    ("rape is not resistance", 1.0),
    ("horror of terror attacks", 0.9),
    ("hamas is isis", 1.0),
];

pub(super) const PRO_B: &[(&str, f64)] = &[
    // General
    ("palestine", 0.3),
    ("palestinian", 0.3),
    ("gaza", 0.3),
    ("west bank", 0.4),
    ("occupied territories", 0.7),
    ("palestinian lives matter", 0.9),
    ("justice for palestine", 1.0),
    ("from the river to the sea", 1.0),
    // Support
    ("free palestine", 1.0),
    ("freepalestine", 1.0),
    ("support palestine", 1.0),
    ("palestine will be free", 1.0),
    ("stand with palestine", 1.0),
    ("save gaza", 0.9),
    ("coexist", 0.2),
    ("decolonize", 0.6),
    // Political
    ("hamas", 0.3),
    ("fatah", 0.3),
    ("plo", 0.3),
    ("palestinian authority", 0.3),
    ("resistance", 0.4),
    ("right to resist", 0.9),
    ("zionism is terrorism", 1.0),
    ("end the occupation", 1.0),
    ("settler colonialism", 0.8),
    ("intifada", 0.8),
    // Historical
    ("nakba", 0.7),
    ("palestinian history", 0.4),
    ("arab history", 0.3),
    ("palestinian people", 0.4),
    // Human rights
    ("occupation", 0.6),
    ("settlements", 0.4),
    ("apartheid", 0.8),
    ("human rights", 0.3),
    ("genocide", 0.7),
    ("ethnic cleansing", 0.8),
    ("war crimes", 0.6),
    ("humanitarian crisis", 0.5),
    ("mass grave", 0.6),
    ("displaced civilians", 0.6),
    ("bombing civilians", 0.7),
    ("children suffering", 0.5),
    ("open air prison", 0.9),
    // Religious
    ("muslim", 0.2),
    ("islam", 0.2),
    ("arab", 0.2),
    ("al-aqsa", 0.4),
    ("palestinian muslims", 0.4),
    // Symbols
    ("🇵🇸", 0.8),
    ("☪", 0.3),
    ("🕌", 0.3),
    ("🍉", 0.8),
    ("💧", 0.2),
    ("🔑", 0.4),
    ("💔", 0.2),
    // Additional
    ("ceasefire", 0.6),
    ("ceasefire now", 0.9),
    ("stop the war", 0.6),
    ("gaza genocide", 1.0),
    ("gaza war", 0.4),
    ("gaza crisis", 0.5),
    ("gaza children", 0.6),
    ("gaza civilians", 0.6),
    ("not antisemitic", 0.7),
    ("silence is violence", 0.6),
];

/// Glyphs whose presence intensifies anchored sentiment.
pub(super) const SYMBOLS: &[&str] = &["🕎", "🇮🇱", "🇵🇸", "✡", "💔", "🙏🏼", "🕯"];

/// Emotionally charged stems whose presence intensifies anchored sentiment.
pub(super) const EMOTION_TERMS: &[&str] = &[
    "terrorist",
    "hostage",
    "massacre",
    "slaughter",
    "freedom",
    "genocide",
];
