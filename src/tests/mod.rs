pub mod config_tests;
pub mod demo_tests;

/// Collect what a writer-based call produced as a `String`
pub(crate) fn captured(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("output is valid UTF-8")
}

pub(crate) fn setup() {
    // Logger may already be initialized by another test
    let _ = env_logger::builder().is_test(true).try_init();
}
