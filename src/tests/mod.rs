mod errors_tests;
mod models_tests;
mod search_tests;
