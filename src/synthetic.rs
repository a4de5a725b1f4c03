use rand::seq::SliceRandom;
use rand::Rng;

const JOB_TITLES: &[&str] = &[
    "Accountant",
    "Civil Engineer",
    "Data Analyst",
    "Graphic Designer",
    "Nurse",
    "Paralegal",
    "Pharmacist",
    "Software Developer",
    "Surveyor",
    "Teacher",
    "Technical Writer",
];

const WORDS: &[&str] = &[
    "amber", "breeze", "cedar", "delta", "ember", "fable", "grove", "harbor", "ivory", "juniper",
    "meadow", "quartz", "ripple", "slate", "willow",
];

/// A fresh five-digit postal code.
pub fn postal_code<R: Rng>(rng: &mut R) -> String {
    (0..5)
        .map(|_| char::from(b'0' + rng.gen_range(0u8..10)))
        .collect()
}

pub fn job_title<R: Rng>(rng: &mut R) -> String {
    JOB_TITLES.choose(rng).unwrap().to_string()
}

pub fn generic_word<R: Rng>(rng: &mut R) -> String {
    WORDS.choose(rng).unwrap().to_string()
}
