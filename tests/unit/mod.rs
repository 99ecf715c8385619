mod aggregate_filter_tests;
mod compile_pipeline_tests;
mod totality_tests;
