mod context_builder_test;
