mod mock;
mod remote;

#[rustfmt::skip]
pub use {
    mock::MockDataSource,
    remote::RemoteDataSource,
};
