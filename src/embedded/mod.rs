//! Embedded relations module
//!
//! Authors, taxonomy terms and featured media attached to an item under
//! `_embedded`.
//!
//! # Overview
//!
//! The wire form groups terms as a list of lists and nests media sizes
//! several levels deep. Both are normalized once at deserialization into
//! [`EmbeddedRelations`]: a flat taxonomy-tagged term list and a
//! size-name to URL map per media entry. [`RelationResolver`] then answers
//! every lookup without raising: missing data resolves to `None` or an
//! empty list.

mod resolver;
mod types;

pub use resolver::{RelationResolver, ResolvedMedia, DEFAULT_MEDIA_SIZE};
pub use types::{
    Author, EmbeddedRelations, FeaturedMedia, Term, TAXONOMY_CATEGORY, TAXONOMY_TAG,
};

#[cfg(test)]
mod tests;
