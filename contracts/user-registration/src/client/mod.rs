mod proxy;

pub use proxy::UserRegistrationProxy;
