pub mod platform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
