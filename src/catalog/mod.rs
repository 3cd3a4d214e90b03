//! Static course records and the catalog text corpus used for retrieval.

mod corpus;
mod course;
mod store;

pub use corpus::CatalogCorpus;
pub use course::Course;
pub use store::CourseCatalog;

#[cfg(test)]
mod tests;
