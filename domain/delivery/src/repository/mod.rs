mod software_data_source;

#[rustfmt::skip]
pub use {
    software_data_source::SoftwareDataSource,
};
