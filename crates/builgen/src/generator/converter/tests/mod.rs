mod builder_tests;
mod constructor_tests;
mod support;
