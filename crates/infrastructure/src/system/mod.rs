pub mod memory;

pub use memory::ProcMemoryReader;
