mod dataset;

pub use dataset::DatasetStore;
