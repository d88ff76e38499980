mod hashids_generator;

pub use hashids_generator::HashidsGenerator;
