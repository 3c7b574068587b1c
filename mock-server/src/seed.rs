//! Sample catalog loaded into an empty store at startup.

use uuid::Uuid;

use crate::{Author, BookInput, Catalog};

/// Authors and their titles, in insertion order.
pub const SAMPLE_CATALOG: &[(&str, &[&str])] = &[
    (
        "Yordan Yovkov",
        &["Old Mountain Legends", "The Farm at the Border"],
    ),
    ("Nikolai Haitov", &["Wild Tales"]),
    ("Dimitar Dimov", &["Tobacco"]),
    (
        "Elin Pelin",
        &[
            "Pizho and Pendo",
            "Jan Bibijan on the Moon",
            "Under the Monastery Vine",
        ],
    ),
    (
        "Ivan Vazov",
        &["Flag and Gusla", "Under the Yoke", "The Sorrows of Bulgaria"],
    ),
];

/// Number of books [`seed`] adds to an empty catalog.
pub fn sample_book_count() -> usize {
    SAMPLE_CATALOG.iter().map(|(_, titles)| titles.len()).sum()
}

/// Fill `catalog` with the sample books if it holds no books and no authors.
/// Returns the number of books added. ISBNs are random placeholders.
pub fn seed(catalog: &mut Catalog) -> usize {
    if !catalog.is_empty() {
        return 0;
    }

    let mut added = 0;
    for (author, titles) in SAMPLE_CATALOG {
        for title in *titles {
            catalog.create(BookInput {
                title: title.to_string(),
                author: Author {
                    name: author.to_string(),
                },
                isbn: Uuid::new_v4().to_string(),
            });
            added += 1;
        }
    }
    tracing::info!(books = added, authors = SAMPLE_CATALOG.len(), "seeded sample catalog");
    added
}
