//! Windows native executable creation.

pub mod launch4j;
