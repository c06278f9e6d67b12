//! Integration tests

mod helpers;

mod cli_test;
mod live_test;
mod playback_test;
