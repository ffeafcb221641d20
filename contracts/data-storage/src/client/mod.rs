mod proxy;

pub use proxy::DataStorageProxy;
