use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::ErrorKind;

/// Chooses the human-facing wording for a runtime error.
///
/// `subject` is the name involved in the error, if any, and replaces the
/// `{name}` placeholder of the chosen phrase.
pub trait Phrasebook {
    /// Returns the phrase to show for an error of `kind`.
    fn phrase(&mut self, kind: ErrorKind, subject: &str) -> String;
}

/// Returns every phrasing available for `kind`.
#[must_use]
pub const fn phrases(kind: ErrorKind) -> &'static [&'static str] {
    match kind {
        ErrorKind::Undeclared => &["Oye! '{name}' labbhda firda? Pehlan banaya taan hai ni!",
                                   "Supne ch banaya si '{name}'? Asal ch taan hai ni.",
                                   "Ullu deya pathaya! '{name}' haje baneya ni."],
        ErrorKind::Duplicate => &["Ik wari '{name}' bana taan leya, hun ki achaar pauna dubara?",
                                  "Badam khaya kar! '{name}' pehla hi baneya hoya."],
        ErrorKind::TypeError => &["Dimag theek aa? Eh operation ethe ni chalna.",
                                  "Jithe sui jani othe talwar ni jandi.",
                                  "Kaka, dimaag na kharaab kar!"],
        ErrorKind::MathError => &["Hisaab kitab theek kar apna!",
                                  "0 naal divide karda? putha jameya si?"],
        ErrorKind::FunctionError => &["Ehnu Function wangu kyu call karda? Eh taan aiven hi hai.",
                                      "Gall tan theek aa, par tu kaun? (Not a function)"],
        ErrorKind::Timeout => &["Oye bas kar! Loop hai ke jalebi? (Infinite Loop Detected)",
                                "Browser hang karenga? Code thoda halka likh!",
                                "Tera loop mukka ni, par mera saah mukk gya. (Time Limit Exceeded)"],
        ErrorKind::Generic => &["Dhillon ne kala coat awain ni paaya... Code theek kar!",
                                "Kehda nasha karke code likheya?",
                                "Dur fitteh mooh tere logic da!",
                                "Dimag na la, ghutne dard karange!"],
    }
}

fn fill(template: &str, subject: &str) -> String {
    template.replace("{name}", subject)
}

/// The first phrasing of `kind` with `subject` filled in.
#[must_use]
pub fn default_phrase(kind: ErrorKind, subject: &str) -> String {
    phrases(kind).first().map_or_else(String::new, |template| fill(template, subject))
}

/// Picks a phrase uniformly at random.
pub struct RandomPhrasebook {
    rng: StdRng,
}

impl RandomPhrasebook {
    /// Creates a phrasebook seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Creates a phrasebook with a fixed seed, so that the sequence of chosen
    /// phrases is reproducible.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomPhrasebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Phrasebook for RandomPhrasebook {
    fn phrase(&mut self, kind: ErrorKind, subject: &str) -> String {
        phrases(kind).choose(&mut self.rng)
                     .map_or_else(|| default_phrase(kind, subject), |template| fill(template, subject))
    }
}

/// Always picks the first phrase of a category.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPhrasebook;

impl Phrasebook for FixedPhrasebook {
    fn phrase(&mut self, kind: ErrorKind, subject: &str) -> String {
        default_phrase(kind, subject)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ALL_KINDS: [ErrorKind; 7] = [ErrorKind::Undeclared,
                                       ErrorKind::Duplicate,
                                       ErrorKind::TypeError,
                                       ErrorKind::MathError,
                                       ErrorKind::FunctionError,
                                       ErrorKind::Timeout,
                                       ErrorKind::Generic];

    #[test]
    fn every_kind_has_phrases() {
        for kind in ALL_KINDS {
            assert!(!phrases(kind).is_empty(), "{kind} has no phrases");
        }
    }

    #[test]
    fn fixed_phrasebook_fills_name() {
        assert_eq!(FixedPhrasebook.phrase(ErrorKind::Duplicate, "x"),
                   "Ik wari 'x' bana taan leya, hun ki achaar pauna dubara?");
    }

    #[test]
    fn random_phrase_comes_from_table() {
        let mut book = RandomPhrasebook::seeded(7);

        for _ in 0..50 {
            for kind in ALL_KINDS {
                let phrase = book.phrase(kind, "count");
                let expected = phrases(kind).iter()
                                            .map(|template| fill(template, "count"))
                                            .collect::<Vec<_>>();
                assert!(expected.contains(&phrase), "unexpected phrase {phrase:?}");
            }
        }
    }

    #[test]
    fn seeded_phrasebooks_agree() {
        let mut first = RandomPhrasebook::seeded(42);
        let mut second = RandomPhrasebook::seeded(42);

        for _ in 0..20 {
            assert_eq!(first.phrase(ErrorKind::Generic, ""),
                       second.phrase(ErrorKind::Generic, ""));
        }
    }
}
