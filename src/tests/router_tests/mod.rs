mod api_tests;
mod browse_tests;
