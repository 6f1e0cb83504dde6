// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use rand::Rng;
use tracing::debug;

use super::{safety, syllabifier, turkish};
use crate::domain::{Origin, WordEntry};

/// Random draws before falling back to [`SAFE_FALLBACK`].
pub const MAX_ATTEMPTS: usize = 50;

/// Vetted words used when the pool yields nothing acceptable.
pub const SAFE_FALLBACK: &[&str] = &["elma", "kitap", "güneş", "çiçek", "kuş"];

/// Child vocabulary for random word generation.
pub const WORD_POOL: &[&str] = &[
    // fruit
    "elma", "armut", "muz", "üzüm", "portakal", "çilek", "kiraz", "şeftali", "kavun", "karpuz",
    "ayva", "nar", "incir", "erik", "kayısı", "limon",
    // animals
    "kedi", "köpek", "kuş", "balık", "tavşan", "aslan", "fil", "kaplan", "kartal", "güvercin",
    "koyun", "keçi", "inek", "at", "eşek", "karınca", "ayı", "kurt", "tilki", "fare", "hamster",
    "papağan", "balina", "yunus",
    // home
    "ev", "masa", "sandalye", "yatak", "dolap", "kapı", "pencere", "lamba", "halı", "yastık",
    "battaniye", "ayna", "saat", "telefon", "televizyon",
    // school
    "kalem", "silgi", "defter", "çanta", "tahta", "kitap", "boyama", "makas", "yapıştırıcı",
    "cetvel", "pergel", "hesap", "ödev", "sınıf", "öğretmen",
    // vehicles
    "araba", "otobüs", "tren", "gemi", "uçak", "bisiklet", "motosiklet", "kamyon", "taksi",
    "minibüs", "tramvay", "metro", "helikopter",
    // nature
    "güneş", "ay", "yıldız", "bulut", "yağmur", "kar", "rüzgar", "deniz", "dağ", "orman", "göl",
    "nehir", "çay", "ada", "kum", "taş",
    // plants
    "çiçek", "ağaç", "yaprak", "dal", "kök", "gül", "papatya", "lale", "karanfil", "menekşe",
    "çam", "meşe", "kavak", "çınar", "fidan",
    // games
    "oyun", "top", "bebek", "oyuncak", "saklambaç", "koşmaca", "bilmece", "masal", "hikaye",
    "şarkı", "türkü", "dans", "eğlence",
    // instruments
    "piyano", "gitar", "flüt", "davul", "keman", "bağlama", "kaval", "zurna", "tambur", "saz",
    "nota", "müzik", "melodi", "ritim",
    // food
    "ekmek", "su", "süt", "peynir", "yoğurt", "bal", "reçel", "tereyağı", "çorba", "pilav",
    "makarna", "salata", "meyve", "sebze", "et", "tavuk",
    // colors
    "kırmızı", "mavi", "yeşil", "sarı", "mor", "turuncu", "beyaz", "siyah", "pembe",
    "kahverengi", "gri", "lacivert", "altın", "gümüş",
    // numbers
    "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz", "on",
    // family
    "anne", "baba", "kardeş", "dede", "nine", "teyze", "amca", "hala", "dayı", "kuzen", "yeğen",
    "torun", "aile", "akraba",
    // body
    "baş", "saç", "göz", "kulak", "burun", "ağız", "diş", "dil", "boyun", "kol", "el", "parmak",
    "bacak", "ayak", "kalp", "mide",
    // feelings
    "mutlu", "üzgün", "kızgın", "şaşkın", "korkmuş", "sevinçli", "heyecanlı", "sakin", "yorgun",
    "aç", "tok", "susuz", "hasta", "sağlıklı",
];

/// Syllabify and validate a candidate, packaging it on success.
pub fn try_entry(candidate: &str, origin: Origin) -> Option<WordEntry> {
    if !safety::validate_word(candidate).accepted {
        return None;
    }
    let syllables = syllabifier::syllabify(candidate);
    if !syllables.iter().all(|s| safety::validate_syllable(s).accepted) {
        return None;
    }
    Some(WordEntry::new(
        turkish::capitalize(candidate.trim()),
        syllables,
        origin,
    ))
}

/// Draw a random word from `pool` that passes every check.
///
/// Gives up after [`MAX_ATTEMPTS`] draws and returns the first vetted
/// fallback word instead, so the call always terminates with an entry.
pub fn select_safe_word<S, R>(pool: &[S], rng: &mut R) -> WordEntry
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if !pool.is_empty() {
        for attempt in 1..=MAX_ATTEMPTS {
            let candidate = pool[rng.random_range(0..pool.len())].as_ref();
            if let Some(entry) = try_entry(candidate, Origin::Random) {
                return entry;
            }
            debug!(attempt, candidate, "random candidate rejected");
        }
    }

    debug!("no acceptable word in pool, using safe fallback");
    fallback_entry()
}

fn fallback_entry() -> WordEntry {
    let mut entry = SAFE_FALLBACK
        .iter()
        .find_map(|w| try_entry(w, Origin::Random))
        .unwrap_or_else(|| {
            WordEntry::new(
                turkish::capitalize(SAFE_FALLBACK[0]),
                syllabifier::syllabify(SAFE_FALLBACK[0]),
                Origin::Random,
            )
        });
    entry.safe_fallback = true;
    entry
}
