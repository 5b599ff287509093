//! Integration tests for shoplist.

mod util;

mod arg_tests;
mod invalid_config_tests;
