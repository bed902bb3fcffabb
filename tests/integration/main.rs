// Integration tests against a mock OpenAlgo server

mod market_tests;
mod utility_tests;
