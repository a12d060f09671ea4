// Catalog backends
pub mod fakestore;

pub use fakestore::FakeStoreProvider;
