mod counting_source;

pub use counting_source::CountingSource;
