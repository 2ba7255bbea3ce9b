//! Readers for the on-disk formats the learners train on, plus decision
//! tree persistence.
pub mod corpus;
pub mod digits;
pub mod tabular;
pub mod tree_store;

pub use corpus::{read_document, read_text_corpus};
pub use digits::{img_to_vector, load_digit_dir, DIGIT_SIDE};
pub use tabular::{read_categorical_tsv, read_tab_delimited, CategoricalTable};
pub use tree_store::{grab_tree, store_tree};
