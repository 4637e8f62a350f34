pub mod independence_tests;
pub mod causal_tests;
pub mod replica_tests;
