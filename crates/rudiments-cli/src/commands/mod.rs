pub mod bayes;
pub mod knn;
pub mod tree;
