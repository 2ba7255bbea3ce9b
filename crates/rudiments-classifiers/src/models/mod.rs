pub mod classifier_trait;
pub mod decision_tree;
pub mod knn;
pub mod naive_bayes;
