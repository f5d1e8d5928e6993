//! Graph construction and representation
//!
//! This module builds the sentence similarity graph and stores it in a
//! form suited to PageRank.

pub mod builder;
pub mod csr;
