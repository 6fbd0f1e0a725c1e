//! Synthetic customer data for the fake listing endpoint and the
//! in-memory store seed.

use super::Customer;

const FIRST_NAMES: &[&str] = &[
    "Amara", "Bruno", "Chen", "Dalia", "Emeka", "Freya", "Goran", "Hana", "Ines", "Jonas",
    "Keiko", "Luca", "Maya", "Nikolai", "Olga", "Pedro", "Quinn", "Rosa", "Sami", "Tomas",
];

const LAST_NAMES: &[&str] = &[
    "Abara", "Berg", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia", "Horvat", "Ivanova",
    "Jansen", "Kowalski", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov", "Rossi",
];

const MAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// Generates `count` customers with random ids and synthetic names,
/// contacts and e-mail addresses.
///
/// Names cycle through fixed lists, so the same index always yields the
/// same name; only the ids differ between calls.
#[must_use]
pub fn generate_customers(count: usize) -> Vec<Customer> {
    (0..count).map(sample_customer).collect()
}

fn sample_customer(index: usize) -> Customer {
    let first = pick(FIRST_NAMES, index);
    let last = pick(LAST_NAMES, index / FIRST_NAMES.len() + index);
    let domain = pick(MAIL_DOMAINS, index);
    Customer::new(
        first,
        last,
        format!("+1-555-{:04}", index % 10_000),
        format!(
            "{}.{}{index}@{domain}",
            first.to_ascii_lowercase(),
            last.to_ascii_lowercase()
        ),
    )
}

fn pick(values: &[&'static str], index: usize) -> &'static str {
    values
        .get(index % values.len().max(1))
        .copied()
        .unwrap_or_default()
}
