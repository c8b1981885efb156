// Common test utilities and fixtures


// Re-export commonly used items
// Note: These may appear unused in some test binaries but are used in others
#[allow(unused_imports)]
pub use fixtures::TestFolder;
#[allow(unused_imports)]
pub use helpers::{create_test_services, doc, hit_for, seed_documents};
