//! Rule-based English lemmatization over a shipped lexicon.
//!
//! Reduces an inflected token to its dictionary base form: plurals to the
//! singular, `-ing`/`-ed` verb forms to the stem. The knowledge base is
//! static and read-only: an irregular-form table, an invariant-word table
//! for terms that merely look inflected (`kubernetes`, `series`), and
//! ordered suffix rules with stem repair for doubled consonants and silent
//! `e`. A token no rule recognizes is returned unchanged, so both documents
//! in a comparison always agree on the lemma of a shared word.
//!
//! Input is expected to be lowercase, as produced by `normalize`.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Irregular inflected forms mapped straight to their base form.
static IRREGULAR_FORMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // nouns
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("selves", "self"),
        ("shelves", "shelf"),
        ("halves", "half"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("hypotheses", "hypothesis"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("vertices", "vertex"),
        ("appendices", "appendix"),
        ("caches", "cache"),
        // verbs
        ("began", "begin"),
        ("begun", "begin"),
        ("bought", "buy"),
        ("brought", "bring"),
        ("built", "build"),
        ("came", "come"),
        ("chose", "choose"),
        ("chosen", "choose"),
        ("did", "do"),
        ("done", "do"),
        ("drew", "draw"),
        ("drawn", "draw"),
        ("drove", "drive"),
        ("driven", "drive"),
        ("fell", "fall"),
        ("fallen", "fall"),
        ("felt", "feel"),
        ("flew", "fly"),
        ("flown", "fly"),
        ("found", "find"),
        ("gave", "give"),
        ("given", "give"),
        ("goes", "go"),
        ("gone", "go"),
        ("got", "get"),
        ("gotten", "get"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("held", "hold"),
        ("kept", "keep"),
        ("knew", "know"),
        ("known", "know"),
        ("led", "lead"),
        ("lost", "lose"),
        ("made", "make"),
        ("met", "meet"),
        ("paid", "pay"),
        ("ran", "run"),
        ("rose", "rise"),
        ("risen", "rise"),
        ("said", "say"),
        ("sat", "sit"),
        ("saw", "see"),
        ("seen", "see"),
        ("sent", "send"),
        ("shown", "show"),
        ("sold", "sell"),
        ("spent", "spend"),
        ("spoke", "speak"),
        ("spoken", "speak"),
        ("stood", "stand"),
        ("taught", "teach"),
        ("taken", "take"),
        ("thought", "think"),
        ("threw", "throw"),
        ("thrown", "throw"),
        ("told", "tell"),
        ("took", "take"),
        ("understood", "understand"),
        ("went", "go"),
        ("wore", "wear"),
        ("worn", "wear"),
        ("written", "write"),
        ("wrote", "write"),
    ])
});

/// Words that end in an inflection-looking suffix but are already their own
/// dictionary form. Mostly mass nouns and product names common in resumes.
static INVARIANT_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "always",
        "analytics",
        "anything",
        "data",
        "devops",
        "economics",
        "everything",
        "evening",
        "exceed",
        "indeed",
        "jenkins",
        "kubernetes",
        "logistics",
        "macos",
        "mathematics",
        "media",
        "morning",
        "news",
        "nextjs",
        "nodejs",
        "nothing",
        "ongoing",
        "outstanding",
        "perhaps",
        "physics",
        "postgres",
        "proceed",
        "reactjs",
        "robotics",
        "series",
        "something",
        "species",
        "statistics",
        "succeed",
        "upcoming",
        "vuejs",
        "whereas",
        "willing",
    ])
});

/// Reduces a token to its lemma. Lookup order: irregular table, invariant
/// table, plural rules, verb-inflection rules; first hit wins, otherwise the
/// token is its own lemma.
pub fn lemmatize(token: &str) -> String {
    if let Some(base) = IRREGULAR_FORMS.get(token) {
        return (*base).to_string();
    }
    if INVARIANT_WORDS.contains(token) {
        return token.to_string();
    }
    if let Some(base) = strip_plural(token) {
        return base;
    }
    if let Some(base) = strip_inflection(token) {
        return base;
    }
    token.to_string()
}

/// Plural suffix rules, most specific first. Stems shorter than 3 characters
/// are never produced, which keeps acronyms like `aws` intact.
fn strip_plural(token: &str) -> Option<String> {
    if let Some(stem) = token.strip_suffix("sses") {
        return Some(format!("{stem}ss"));
    }
    // -zes is absent on purpose: "sizes" and friends only drop the "s".
    for sibilant in ["xes", "ches", "shes"] {
        if let Some(stem) = token.strip_suffix(sibilant) {
            let suffix = &sibilant[..sibilant.len() - 2];
            return Some(format!("{stem}{suffix}"));
        }
    }
    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() >= 2 {
            return Some(format!("{stem}y"));
        }
    }
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return None;
    }
    if let Some(stem) = token.strip_suffix('s') {
        if stem.len() >= 3 {
            return Some(stem.to_string());
        }
    }
    None
}

/// Verb inflection rules for `-ied`, `-eed`, `-ing`, and `-ed`, with stem
/// repair. Short or vowel-less stems (`us-`, `str-`) are left alone.
fn strip_inflection(token: &str) -> Option<String> {
    if let Some(stem) = token.strip_suffix("ied") {
        if stem.len() >= 2 {
            return Some(format!("{stem}y"));
        }
    }
    if let Some(stem) = token.strip_suffix("eed") {
        if measure(stem) > 0 {
            return Some(format!("{stem}ee"));
        }
        return None;
    }
    if let Some(stem) = token.strip_suffix("ing") {
        if stem.len() >= 3 && has_vowel(stem) {
            return Some(repair_stem(stem));
        }
        return None;
    }
    if let Some(stem) = token.strip_suffix("ed") {
        if stem.len() >= 3 && has_vowel(stem) {
            return Some(repair_stem(stem));
        }
        return None;
    }
    None
}

/// Repairs a stem left by `-ed`/`-ing` removal:
/// restores the silent `e` (`creat-` to `create`, `experienc-` to
/// `experience`, `cod-` to `code`), undoubles a trailing consonant
/// (`plann-` to `plan`) while keeping `ll`/`ss`/`zz` (`skill-`, `pass-`).
fn repair_stem(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let len = bytes.len();

    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{stem}e");
    }
    if len >= 2
        && bytes[len - 1] == bytes[len - 2]
        && !is_vowel(bytes, len - 1)
        && !matches!(bytes[len - 1], b'l' | b's' | b'z')
    {
        return stem[..len - 1].to_string();
    }
    let final_byte = bytes[len - 1];
    if matches!(final_byte, b'c' | b'v' | b'u')
        || (final_byte == b'g' && len >= 2 && is_vowel(bytes, len - 2))
    {
        return format!("{stem}e");
    }
    if measure(stem) == 1 && ends_cvc(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn is_vowel(bytes: &[u8], index: usize) -> bool {
    match bytes[index] {
        b'a' | b'e' | b'i' | b'o' | b'u' => true,
        b'y' => index > 0 && !is_vowel(bytes, index - 1),
        _ => false,
    }
}

fn has_vowel(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    (0..bytes.len()).any(|i| is_vowel(bytes, i))
}

/// Number of vowel-to-consonant transitions in the stem (the Porter
/// measure). `cod` has 1, `develop` has 3.
fn measure(stem: &str) -> usize {
    let bytes = stem.as_bytes();
    let mut count = 0;
    let mut previous_was_vowel = false;
    for i in 0..bytes.len() {
        let vowel = is_vowel(bytes, i);
        if previous_was_vowel && !vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }
    count
}

/// True when the stem ends consonant-vowel-consonant with a final consonant
/// other than `w`, `x`, or `y`; such stems take a restored `e`.
fn ends_cvc(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let len = bytes.len();
    if len < 3 {
        return false;
    }
    !is_vowel(bytes, len - 3)
        && is_vowel(bytes, len - 2)
        && !is_vowel(bytes, len - 1)
        && !matches!(bytes[len - 1], b'w' | b'x' | b'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lemma(token: &str, expected: &str) {
        assert_eq!(lemmatize(token), expected, "lemma of {token}");
    }

    #[test]
    fn test_regular_plurals() {
        assert_lemma("skills", "skill");
        assert_lemma("developers", "developer");
        assert_lemma("years", "year");
        assert_lemma("databases", "database");
    }

    #[test]
    fn test_sibilant_plurals() {
        assert_lemma("classes", "class");
        assert_lemma("boxes", "box");
        assert_lemma("matches", "match");
        assert_lemma("pushes", "push");
        assert_lemma("sizes", "size");
        assert_lemma("caches", "cache");
    }

    #[test]
    fn test_ies_plurals() {
        assert_lemma("technologies", "technology");
        assert_lemma("responsibilities", "responsibility");
    }

    #[test]
    fn test_short_and_protected_endings_survive() {
        assert_lemma("aws", "aws");
        assert_lemma("css", "css");
        assert_lemma("analysis", "analysis");
        assert_lemma("business", "business");
        assert_lemma("status", "status");
    }

    #[test]
    fn test_irregular_forms() {
        assert_lemma("built", "build");
        assert_lemma("led", "lead");
        assert_lemma("wrote", "write");
        assert_lemma("analyses", "analysis");
        assert_lemma("criteria", "criterion");
    }

    #[test]
    fn test_invariant_words() {
        assert_lemma("kubernetes", "kubernetes");
        assert_lemma("jenkins", "jenkins");
        assert_lemma("devops", "devops");
        assert_lemma("data", "data");
        assert_lemma("series", "series");
    }

    #[test]
    fn test_ing_forms() {
        assert_lemma("looking", "look");
        assert_lemma("running", "run");
        assert_lemma("coding", "code");
        assert_lemma("engineering", "engineer");
        assert_lemma("testing", "test");
    }

    #[test]
    fn test_ed_forms() {
        assert_lemma("developed", "develop");
        assert_lemma("planned", "plan");
        assert_lemma("managed", "manage");
        assert_lemma("experienced", "experience");
        assert_lemma("created", "create");
        assert_lemma("improved", "improve");
        assert_lemma("applied", "apply");
        assert_lemma("agreed", "agree");
    }

    #[test]
    fn test_doubled_l_and_s_are_not_undoubled() {
        assert_lemma("skilled", "skill");
        assert_lemma("passed", "pass");
        assert_lemma("falling", "fall");
    }

    #[test]
    fn test_short_or_vowelless_stems_stay_put() {
        assert_lemma("using", "using");
        assert_lemma("string", "string");
        assert_lemma("thing", "thing");
        assert_lemma("red", "red");
        assert_lemma("feed", "feed");
    }

    #[test]
    fn test_unknown_words_are_their_own_lemma() {
        assert_lemma("python", "python");
        assert_lemma("rust", "rust");
        assert_lemma("developer", "developer");
    }

    /// Both sides of a comparison run through the same rules, so shared
    /// vocabulary always lands on the same lemma.
    #[test]
    fn test_inflection_pairs_converge() {
        assert_eq!(lemmatize("developing"), lemmatize("developed"));
        assert_eq!(lemmatize("skills"), lemmatize("skilled"));
        assert_eq!(lemmatize("managing"), lemmatize("managed"));
    }
}
